//! Core domain entities.
//!
//! The service has a single entity, [`WebUrl`], plus the [`NewWebUrl`] input
//! struct used when inserting records.

pub mod web_url;

pub use web_url::{LINK_TTL_DAYS, NewWebUrl, WebUrl, link_ttl};

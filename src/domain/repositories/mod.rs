//! Repository trait definitions for the domain layer.
//!
//! Traits define the data access contract; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated via
//! `mockall` for testing.

pub mod web_url_repository;

pub use web_url_repository::{UrlSummary, WebUrlRepository};

#[cfg(test)]
pub use web_url_repository::MockWebUrlRepository;

//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`expiry_sweeper`] - Optional periodic removal of expired records
//!
//! The domain layer has no dependencies on the HTTP layer. Business rules live
//! in services (see [`crate::application::services`]).

pub mod entities;
pub mod expiry_sweeper;
pub mod repositories;

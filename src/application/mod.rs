//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::shorten_service::ShortenService`] - Suffix resolution and record creation
//! - [`services::redirect_service::RedirectService`] - Expiry-checked lookups with click counting
//! - [`services::info_service::InfoService`] - Side-effect-free record lookups

pub mod services;

//! PostgreSQL repository implementations.
//!
//! - [`PgWebUrlRepository`] - URL record storage and retrieval

pub mod pg_web_url_repository;

pub use pg_web_url_repository::PgWebUrlRepository;

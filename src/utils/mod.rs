//! Utility functions for suffix generation, URL validation, and request handling.
//!
//! - [`suffix_generator`] - Random suffix generation
//! - [`url_validator`] - Destination URL validation
//! - [`base_url`] - Service base address from config or HTTP headers

pub mod base_url;
pub mod suffix_generator;
pub mod url_validator;

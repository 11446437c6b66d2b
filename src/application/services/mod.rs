//! Business logic services for the application layer.

pub mod info_service;
pub mod redirect_service;
pub mod shorten_service;

pub use info_service::InfoService;
pub use redirect_service::RedirectService;
pub use shorten_service::ShortenService;

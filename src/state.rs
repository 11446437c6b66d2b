//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{InfoService, RedirectService, ShortenService};
use crate::domain::repositories::WebUrlRepository;
use crate::infrastructure::persistence::PgWebUrlRepository;
use crate::utils::base_url::normalize_base_url;
use crate::utils::suffix_generator::SuffixGenerator;

pub type AppShortenService = ShortenService<PgWebUrlRepository, SuffixGenerator>;
pub type AppRedirectService = RedirectService<PgWebUrlRepository>;
pub type AppInfoService = InfoService<PgWebUrlRepository>;

#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<AppShortenService>,
    pub redirect_service: Arc<AppRedirectService>,
    pub info_service: Arc<AppInfoService>,
    pub repository: Arc<dyn WebUrlRepository>,
    /// Configured public base address, always ending with `/`.
    pub base_url: Option<String>,
    pub behind_proxy: bool,
}

impl AppState {
    /// Wires every service around a single repository.
    pub fn new(
        repository: Arc<PgWebUrlRepository>,
        generator: Arc<SuffixGenerator>,
        max_suffix_attempts: usize,
        base_url: Option<String>,
        behind_proxy: bool,
    ) -> Self {
        Self {
            shorten_service: Arc::new(ShortenService::new(
                repository.clone(),
                generator,
                max_suffix_attempts,
            )),
            redirect_service: Arc::new(RedirectService::new(repository.clone())),
            info_service: Arc::new(InfoService::new(repository.clone())),
            repository,
            base_url: base_url.as_deref().map(normalize_base_url),
            behind_proxy,
        }
    }
}

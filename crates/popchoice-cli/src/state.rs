//! Application state shared by every command.
//!
//! Resolves the data directory and client configuration once at startup and
//! builds lifecycle controllers pinned to the HTTP transport.

use std::path::PathBuf;

use anyhow::Context;

use popchoice_core::lifecycle::LifecycleController;
use popchoice_infra::config::{
    load_client_config, resolve_client_config, resolve_data_dir, API_URL_ENV,
};
use popchoice_infra::http::HttpRecommendationTransport;
use popchoice_types::config::ClientConfig;

/// Controller type used by the CLI.
pub type HttpController = LifecycleController<HttpRecommendationTransport>;

/// Where the effective base URL came from, for `popchoice config`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlSource {
    Flag,
    Env,
    File,
}

impl UrlSource {
    pub fn label(&self) -> &'static str {
        match self {
            UrlSource::Flag => "--api-url",
            UrlSource::Env => API_URL_ENV,
            UrlSource::File => "config.toml / default",
        }
    }
}

pub struct AppState {
    pub config: ClientConfig,
    pub data_dir: PathBuf,
    pub url_source: UrlSource,
}

impl AppState {
    /// Load `config.toml`, then apply `POPCHOICE_API_URL` and `--api-url`.
    pub async fn init(api_url_flag: Option<String>) -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        let file_config = load_client_config(&data_dir).await;
        let env_url = std::env::var(API_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty());

        let url_source = match (&api_url_flag, &env_url) {
            (Some(_), _) => UrlSource::Flag,
            (None, Some(_)) => UrlSource::Env,
            (None, None) => UrlSource::File,
        };

        let config = resolve_client_config(file_config, env_url, api_url_flag)
            .context("Invalid recommendation service configuration")?;

        tracing::debug!(base_url = %config.base_url, source = url_source.label(), "Configuration resolved");

        Ok(Self {
            config,
            data_dir,
            url_source,
        })
    }

    /// A fresh controller (empty answers, idle) talking to the configured service.
    pub fn controller(&self) -> anyhow::Result<HttpController> {
        let transport = HttpRecommendationTransport::from_config(&self.config)
            .context("Failed to create recommendation transport")?;
        Ok(LifecycleController::new(transport))
    }
}

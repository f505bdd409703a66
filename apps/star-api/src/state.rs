//! Application state - shared across all handlers.

use std::sync::Arc;

use star_core::PostService;
use star_core::error::RepoError;
use star_core::ports::PostRepository;
use star_infra::FixturePostRepository;

#[cfg(feature = "http")]
use star_infra::HttpPostRepository;

use crate::config::BackendConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub backend: &'static str,
}

impl AppState {
    /// Build the application state with the configured backend.
    pub fn new(backend: &BackendConfig) -> Result<Self, RepoError> {
        let repo: Arc<dyn PostRepository> = match backend {
            BackendConfig::Fixture(config) => {
                tracing::info!(
                    min_delay_ms = config.latency.min().as_millis() as u64,
                    max_delay_ms = config.latency.max().as_millis() as u64,
                    failure_rate = config.failure_rate,
                    "Using fixture post backend"
                );
                Arc::new(FixturePostRepository::new(config.clone()))
            }
            #[cfg(feature = "http")]
            BackendConfig::Remote { base_url } => {
                let repo = HttpPostRepository::new(base_url)?;
                tracing::info!(base_url = %repo.base_url(), "Using remote post backend");
                Arc::new(repo)
            }
            #[cfg(not(feature = "http"))]
            BackendConfig::Remote { .. } => {
                tracing::warn!("Running without http feature - using fixture post backend");
                Arc::new(FixturePostRepository::default())
            }
        };

        tracing::info!("Application state initialized");

        Ok(Self::with_repository(repo, backend.name()))
    }

    pub fn with_repository(repo: Arc<dyn PostRepository>, backend: &'static str) -> Self {
        Self {
            posts: PostService::new(repo),
            backend,
        }
    }
}

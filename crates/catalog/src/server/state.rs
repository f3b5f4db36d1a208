//! Shared application state injected into every Axum handler.

use std::{sync::Arc, time::Duration, time::Instant};

use crate::config::Config;
use crate::store::{MemoryStore, ProductStore};

use super::auth::ApiKeys;

/// Application state shared across all request handlers.
///
/// All fields are cheaply cloneable so that Axum can clone the state for each
/// request without copying the product collection.
#[derive(Clone)]
pub struct AppState {
    /// Product persistence behind the store trait.
    pub store: Arc<dyn ProductStore>,
    /// Accepted API keys for mutating routes.
    pub api_keys: ApiKeys,
    /// Deployment environment name reported by `/health`.
    pub environment: Arc<String>,
    /// Include internal diagnostic detail in 500 responses.
    pub expose_internal_errors: bool,
    /// Upper bound on the time spent serving a single request.
    pub request_timeout: Duration,
    /// Process start, for uptime reporting.
    pub started_at: Instant,
}

impl AppState {
    /// Create a new [`AppState`] around `store`, configured from `cfg`.
    pub fn new(store: Arc<dyn ProductStore>, cfg: &Config) -> Self {
        Self {
            store,
            api_keys: ApiKeys::default(),
            environment: Arc::new(cfg.environment.clone()),
            expose_internal_errors: cfg.is_development(),
            request_timeout: cfg.request_timeout(),
            started_at: Instant::now(),
        }
    }

    /// Replace the product store.
    #[cfg(test)]
    pub fn with_store(mut self, store: Arc<dyn ProductStore>) -> Self {
        self.store = store;
        self
    }
}

impl Default for AppState {
    /// Creates a default [`AppState`] with an empty store, suitable for tests.
    fn default() -> Self {
        let cfg = Config {
            environment: "test".into(),
            ..Config::default()
        };
        Self::new(Arc::new(MemoryStore::new()), &cfg)
    }
}

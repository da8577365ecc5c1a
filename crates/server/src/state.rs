use std::sync::Arc;

use hotentry::HotentryClient;

use crate::config::Config;

/// Shared, read-only handler state. The denylist is deliberately absent:
/// it is re-read from the environment on every request. `Config` is
/// consumed at construction; nothing needs it after the client is built.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<HotentryClient>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let upstream = HotentryClient::with_url(reqwest::Client::new(), &config.upstream_url);
        Self {
            upstream: Arc::new(upstream),
        }
    }
}

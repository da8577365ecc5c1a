#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream feed URL. Fixed in production; overridable through the
    /// `UPSTREAM_URL` environment variable for deployments and tests.
    pub upstream_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let upstream_url = std::env::var("UPSTREAM_URL")
            .unwrap_or_else(|_| hotentry::DEFAULT_UPSTREAM_URL.to_string());
        Self { upstream_url }
    }

    pub fn with_upstream_url(upstream_url: impl Into<String>) -> Self {
        Self {
            upstream_url: upstream_url.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upstream_url: hotentry::DEFAULT_UPSTREAM_URL.to_string(),
        }
    }
}

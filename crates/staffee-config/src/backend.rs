use std::env;

/// Location of the remote REST backend that owns all business data.
#[derive(Clone, Debug)]
pub struct BackendConfig {
    /// Base URL without a trailing slash, e.g. `http://localhost:8000/api`.
    pub base_url: String,
}

impl BackendConfig {
    pub fn from_env() -> Self {
        Self::new(env::var("BACKEND_URL").unwrap_or_else(|_| "http://localhost:8000/api".to_string()))
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

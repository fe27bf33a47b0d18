use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

/// Where the proxy finds the weather backend.
///
/// Read from `WEATHER_BACKEND_URL` unless given explicitly.
#[derive(Clone, Debug, Deserialize)]
pub struct ProxyConfig {
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

impl ProxyConfig {
    pub fn new(backend_url: impl Into<String>) -> Self {
        let backend_url: String = backend_url.into();
        Self {
            backend_url: backend_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed("WEATHER_")
            .from_iter::<_, ProxyConfig>(vars)
            .map(|c| Self::new(c.backend_url))
            .context("Invalid proxy config in WEATHER_* env vars")
    }
}

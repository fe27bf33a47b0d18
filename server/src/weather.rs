//! Relay of city lookups to the weather backend.
//!
//! Exactly one outbound request per lookup, no retries. Whatever goes wrong
//! is logged and replaced by the same generic failure envelope.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;
use warp::http::StatusCode;

use shared::{texts, Envelope, WeatherQuery};

use crate::config::ProxyConfig;

const CITIES_PATH: &str = "/api/v1/weather/cities";

/// Used when the backend fails without telling why.
const UNKNOWN_BACKEND_ERROR: &str = "Weather backend request failed";

#[derive(Debug, Deserialize)]
struct BackendError {
    error: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Upstream {
    client: reqwest::Client,
    backend_url: String,
}

impl Upstream {
    pub fn new(config: &ProxyConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            backend_url: config.backend_url.clone(),
        }
    }

    pub fn city_url(&self, city: &str) -> String {
        format!(
            "{}{}/{}",
            self.backend_url,
            CITIES_PATH,
            urlencoding::encode(city)
        )
    }

    /// Fetch the backend's JSON body for `city`, untouched.
    pub async fn fetch(&self, city: &str) -> Result<Value> {
        let url = self.city_url(city);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to reach weather backend at {}", url))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .context("Failed to read weather backend response")?;

        if !status.is_success() {
            let message = serde_json::from_slice::<BackendError>(&body)
                .ok()
                .and_then(|e| e.error)
                .unwrap_or_else(|| UNKNOWN_BACKEND_ERROR.to_string());
            anyhow::bail!("Weather backend answered {}: {}", status, message);
        }

        serde_json::from_slice(&body).context("Failed to parse weather backend response")
    }
}

/// Handle a raw `{ "city": ... }` request body.
pub async fn relay(upstream: &Upstream, body: &[u8]) -> (StatusCode, Envelope) {
    let request_id = Uuid::new_v4();

    let result: Result<Value> = async {
        let query: WeatherQuery =
            serde_json::from_slice(body).context("Invalid weather request body")?;
        log::info!("[{}] weather lookup for {:?}", request_id, query.city);
        upstream.fetch(&query.city).await
    }
    .await;

    into_reply(request_id, result)
}

/// Same as `relay`, for a city already at hand.
pub async fn lookup(upstream: &Upstream, city: &str) -> (StatusCode, Envelope) {
    let request_id = Uuid::new_v4();
    log::info!("[{}] weather lookup for {:?}", request_id, city);

    let result = upstream.fetch(city).await;
    into_reply(request_id, result)
}

fn into_reply(request_id: Uuid, result: Result<Value>) -> (StatusCode, Envelope) {
    match result {
        Ok(data) => (StatusCode::OK, Envelope::ok(data)),
        Err(e) => {
            log::error!("[{}] weather lookup failed: {:#}", request_id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Envelope::failure(texts::LOOKUP_FAILED),
            )
        }
    }
}

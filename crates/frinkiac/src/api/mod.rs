/// Frinkiac API client — the single point of entry for all Frinkiac HTTP
/// calls in this crate.
///
/// Three endpoints, all GET, all JSON:
/// - `/api/search?q=<query>` — frames whose subtitles match the query
/// - `/api/caption?e=<episode>&t=<timestamp>` — the caption for one frame
/// - `/api/random` — a random caption
///
/// Each call is a single attempt: failures surface immediately with no
/// retry or backoff, and no authentication is sent.
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::meme;
use crate::models::{Caption, Frame};

/// Production Frinkiac instance.
pub const DEFAULT_BASE_URL: &str = "https://frinkiac.com";

const SEARCH_PATH: &str = "/api/search";
const CAPTION_PATH: &str = "/api/caption";
const RANDOM_PATH: &str = "/api/random";
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Thin async client over the Frinkiac web API.
///
/// Cheap to clone — clones share the underlying connection pool — and safe
/// to use from concurrent tasks.
#[derive(Clone)]
pub struct FrinkiacClient {
    client: Client,
    base_url: String,
}

impl FrinkiacClient {
    /// Client against the production instance.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client against a custom instance (mirrors, compatible APIs such as
    /// Morbotron, or a local stub in tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Searches for frames whose subtitles match `query`.
    pub async fn search(&self, query: &str) -> Result<Vec<Frame>, ApiError> {
        self.get_json(SEARCH_PATH, &[("q", query.to_string())])
            .await
    }

    /// Fetches the caption for a frame identified by episode key and
    /// timestamp (milliseconds).
    pub async fn caption(&self, episode: &str, timestamp: u64) -> Result<Caption, ApiError> {
        self.get_json(
            CAPTION_PATH,
            &[("e", episode.to_string()), ("t", timestamp.to_string())],
        )
        .await
    }

    /// Fetches a random caption.
    pub async fn random(&self) -> Result<Caption, ApiError> {
        self.get_json(RANDOM_PATH, &[]).await
    }

    /// Full-size still URL for a frame.
    pub fn image_url(&self, frame: &Frame) -> Result<Url, ApiError> {
        meme::image_url(&self.base_url, frame).map_err(ApiError::Url)
    }

    /// Grid thumbnail URL for a frame.
    pub fn thumbnail_url(&self, frame: &Frame) -> Result<Url, ApiError> {
        meme::thumbnail_url(&self.base_url, frame).map_err(ApiError::Url)
    }

    /// Captioned meme URL for a frame, wrapping `caption` at
    /// `max_line_length` characters.
    pub fn meme_url(
        &self,
        frame: &Frame,
        caption: &str,
        max_line_length: usize,
    ) -> Result<Url, ApiError> {
        meme::meme_url(&self.base_url, frame, caption, max_line_length).map_err(ApiError::Url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {url}");

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(ApiError::Decode)
    }
}

impl Default for FrinkiacClient {
    fn default() -> Self {
        Self::new()
    }
}

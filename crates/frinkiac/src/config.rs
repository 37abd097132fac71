use anyhow::{Context, Result};

use crate::api::DEFAULT_BASE_URL;
use crate::layout::DEFAULT_MAX_LINE_LENGTH;

/// CLI configuration loaded from environment variables. Every variable has a
/// default, so a bare environment works against production Frinkiac.
#[derive(Debug, Clone)]
pub struct Config {
    /// API base URL (`FRINKIAC_BASE_URL`). Point at a compatible instance
    /// such as Morbotron to search a different show.
    pub base_url: String,
    /// Meme caption line width in characters (`FRINKIAC_MEME_LINE_LENGTH`).
    pub meme_line_length: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            base_url: std::env::var("FRINKIAC_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            meme_line_length: std::env::var("FRINKIAC_MEME_LINE_LENGTH")
                .unwrap_or_else(|_| DEFAULT_MAX_LINE_LENGTH.to_string())
                .parse::<usize>()
                .context("FRINKIAC_MEME_LINE_LENGTH must be a valid line length")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

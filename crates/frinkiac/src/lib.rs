//! # frinkiac
//!
//! Async client for the Frinkiac screencap search API, plus the pure layout
//! helpers a gallery UI needs on top of it:
//!
//! - [`FrinkiacClient`] — search frames, fetch captions, pull a random quote
//! - [`layout::wrap`] — greedy meme-caption line wrapping
//! - [`layout::item_size`] — aspect-ratio-aware grid cell sizing
//! - [`meme`] — still/thumbnail/meme URL construction (`b64lines` included)
//!
//! The layout helpers are synchronous, side-effect-free functions over plain
//! numbers and strings; they carry no UI-framework types and can be called
//! from any thread.
//!
//! ## Example
//!
//! ```rust,ignore
//! use frinkiac::FrinkiacClient;
//!
//! let client = FrinkiacClient::new();
//! let frames = client.search("steamed hams").await?;
//! if let Some(frame) = frames.first() {
//!     let caption = client.caption(&frame.episode, frame.timestamp).await?;
//!     println!("{}", client.meme_url(frame, &caption.quote(), 25)?);
//! }
//! ```

pub mod api;
pub mod config;
pub mod layout;
pub mod meme;
pub mod models;

pub use api::{ApiError, FrinkiacClient, DEFAULT_BASE_URL};
pub use layout::{
    allowable_width, item_size, wrap, AspectRatio, GridConstraint, GridError, Insets, ItemSize,
    RatioMode, DEFAULT_MAX_LINE_LENGTH,
};
pub use models::{Caption, Episode, Frame, Subtitle};

//! Still, thumbnail, and captioned-meme URL construction.
//!
//! The meme endpoint takes the caption as `b64lines`: the quote is wrapped at
//! the meme line width, the lines are joined with newlines, and the result is
//! standard-base64 encoded. The `url` crate percent-encodes the `+`, `/`, and
//! `=` characters base64 produces.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use url::Url;

use crate::layout::wrap_joined;
use crate::models::Frame;

/// Full-size still: `<base>/img/<episode>/<timestamp>.jpg`.
pub fn image_url(base_url: &str, frame: &Frame) -> Result<Url, url::ParseError> {
    Url::parse(&format!(
        "{}/img/{}/{}.jpg",
        base_url, frame.episode, frame.timestamp
    ))
}

/// Grid thumbnail: `<base>/img/<episode>/<timestamp>/medium.jpg`.
pub fn thumbnail_url(base_url: &str, frame: &Frame) -> Result<Url, url::ParseError> {
    Url::parse(&format!(
        "{}/img/{}/{}/medium.jpg",
        base_url, frame.episode, frame.timestamp
    ))
}

/// Captioned meme: `<base>/meme/<episode>/<timestamp>.jpg?b64lines=<...>`.
///
/// `caption` is wrapped at `max_line_length` characters before encoding.
pub fn meme_url(
    base_url: &str,
    frame: &Frame,
    caption: &str,
    max_line_length: usize,
) -> Result<Url, url::ParseError> {
    let lines = wrap_joined(caption, max_line_length);
    let encoded = STANDARD.encode(lines.as_bytes());

    let mut url = Url::parse(&format!(
        "{}/meme/{}/{}.jpg",
        base_url, frame.episode, frame.timestamp
    ))?;
    url.query_pairs_mut().append_pair("b64lines", &encoded);
    Ok(url)
}

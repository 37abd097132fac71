use serde::{Deserialize, Serialize};

/// A single video still, the addressable unit for images and captions.
///
/// `episode` is the production key (e.g. `"S07E21"`); `timestamp` is
/// milliseconds from the start of the episode. Returned as the element type
/// of `/api/search` and embedded in every [`Caption`](super::Caption).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Frame {
    pub id: u64,
    pub episode: String,
    pub timestamp: u64,
}

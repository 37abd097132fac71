use serde::{Deserialize, Serialize};

use super::Frame;

/// Episode metadata as returned inside a caption response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Episode {
    pub id: u64,
    pub key: String,
    pub season: u32,
    pub episode_number: u32,
    pub title: String,
    pub director: String,
    pub writer: String,
    pub original_air_date: String,
    pub wiki_link: String,
}

/// One subtitle entry covering a span of frames.
///
/// `episode` here is the numeric episode id, not the `"SxxEyy"` key used by
/// [`Frame`]. Timestamps are milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Subtitle {
    pub id: u64,
    pub representative_timestamp: u64,
    pub episode: u64,
    pub start_timestamp: u64,
    pub end_timestamp: u64,
    pub content: String,
    pub language: String,
}

/// A composed quote: the source frame, its episode, the subtitles spoken
/// around it, and nearby frames for scrubbing.
///
/// Returned by both `/api/caption` and `/api/random`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Caption {
    pub episode: Episode,
    pub frame: Frame,
    pub subtitles: Vec<Subtitle>,
    pub nearby: Vec<Frame>,
}

impl Caption {
    /// The quote text: subtitle contents in order, joined by single spaces.
    pub fn quote(&self) -> String {
        self.subtitles
            .iter()
            .map(|s| s.content.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trimmed-down `/api/caption` response body.
    const CAPTION_BODY: &str = r#"{
        "Episode": {
            "Id": 150,
            "Key": "S07E21",
            "Season": 7,
            "EpisodeNumber": 21,
            "Title": "22 Short Films About Springfield",
            "Director": "Jim Reardon",
            "Writer": "Richard Appel",
            "OriginalAirDate": "14-Apr-96",
            "WikiLink": "https://en.wikipedia.org/wiki/22_Short_Films_About_Springfield"
        },
        "Frame": {"Id": 376770, "Episode": "S07E21", "Timestamp": 418284},
        "Subtitles": [
            {
                "Id": 94975,
                "RepresentativeTimestamp": 416833,
                "Episode": 150,
                "StartTimestamp": 416500,
                "EndTimestamp": 418300,
                "Content": "Superintendent, I hope you're ready",
                "Language": "en"
            },
            {
                "Id": 94976,
                "RepresentativeTimestamp": 419385,
                "Episode": 150,
                "StartTimestamp": 418301,
                "EndTimestamp": 420900,
                "Content": "for mouthwatering hamburgers.",
                "Language": "en"
            }
        ],
        "Nearby": [
            {"Id": 376769, "Episode": "S07E21", "Timestamp": 418100},
            {"Id": 376771, "Episode": "S07E21", "Timestamp": 418450}
        ]
    }"#;

    #[test]
    fn test_decodes_caption_response() {
        let caption: Caption = serde_json::from_str(CAPTION_BODY).unwrap();
        assert_eq!(caption.episode.key, "S07E21");
        assert_eq!(caption.episode.episode_number, 21);
        assert_eq!(caption.frame.timestamp, 418284);
        assert_eq!(caption.subtitles.len(), 2);
        assert_eq!(caption.nearby.len(), 2);
    }

    #[test]
    fn test_quote_joins_subtitles_in_order() {
        let caption: Caption = serde_json::from_str(CAPTION_BODY).unwrap();
        assert_eq!(
            caption.quote(),
            "Superintendent, I hope you're ready for mouthwatering hamburgers."
        );
    }

    #[test]
    fn test_quote_of_empty_subtitles_is_empty() {
        let mut caption: Caption = serde_json::from_str(CAPTION_BODY).unwrap();
        caption.subtitles.clear();
        assert_eq!(caption.quote(), "");
    }
}

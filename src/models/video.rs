use serde::{Deserialize, Serialize};

/// A trailer/teaser/clip attached to a movie. Fetched on demand, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    /// Identifier on the hosting platform (e.g. a YouTube video id).
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub site: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub iso_639_1: String,
    #[serde(default)]
    pub iso_3166_1: String,
    #[serde(default)]
    pub official: bool,
    #[serde(default)]
    pub published_at: String,
}

use serde::{Deserialize, Serialize};

/// A catalog entry as returned by list, search and detail endpoints.
///
/// Immutable once constructed; favorites persist the whole record verbatim as
/// JSON, so every field must survive a serde round trip. List membership is
/// checked by `id` only, the catalog's stable key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub overview: String,
    /// Free-text date string from the catalog; never parsed.
    #[serde(default)]
    pub release_date: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: i64,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub original_language: String,
    #[serde(default)]
    pub original_title: String,
}

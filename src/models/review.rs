use serde::{Deserialize, Serialize};

/// A user review attached to a movie. Fetched on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub content: String,
    /// String timestamp from the catalog; never parsed.
    #[serde(default)]
    pub created_at: String,
    pub author_details: Option<AuthorDetails>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    pub avatar_path: Option<String>,
    pub rating: Option<f64>,
}

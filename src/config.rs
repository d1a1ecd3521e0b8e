use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub tmdb_api_key: String,

    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Locale tag sent to the catalog API (e.g. "en-US", "de-DE").
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_database_url() -> String {
    "sqlite:./data/reelscout.db?mode=rwc".to_string()
}

fn default_language() -> String {
    "en-US".to_string()
}

impl Config {
    pub fn from_env() -> Result<Self> {
        envy::from_env::<Config>().map_err(|e| Error::Configuration(e.to_string()))
    }
}

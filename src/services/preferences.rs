use std::sync::Arc;

use crate::error::Result;
use crate::services::storage::KeyValueStore;

/// Preferences the user can change from the settings screen. Stored in the
/// key-value store under a `prefs:` namespace, away from favorites keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceKey {
    Language,
    Theme,
}

impl PreferenceKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreferenceKey::Language => "prefs:language",
            PreferenceKey::Theme => "prefs:theme",
        }
    }

    pub fn default_value(&self) -> &'static str {
        match self {
            PreferenceKey::Language => "en-US",
            PreferenceKey::Theme => "system",
        }
    }
}

pub struct PreferencesService {
    store: Arc<dyn KeyValueStore>,
}

impl PreferencesService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Stored value, or the key's built-in default when never set.
    pub async fn get(&self, key: PreferenceKey) -> Result<String> {
        Ok(self
            .store
            .get(key.as_str())
            .await?
            .unwrap_or_else(|| key.default_value().to_string()))
    }

    pub async fn set(&self, key: PreferenceKey, value: &str) -> Result<()> {
        self.store.set(key.as_str(), value).await
    }
}

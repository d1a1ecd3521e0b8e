use std::sync::Arc;

use crate::error::{Error, Result};
use crate::models::Movie;
use crate::services::cloud::CloudFavoritesStore;
use crate::services::repository::MovieRepository;
use crate::services::storage::KeyValueStore;

const GUEST_KEY: &str = "favorites:guest";

/// Per-user favorites list persisted as one JSON blob in the key-value
/// store. At most one movie per id; order of insertion is preserved.
///
/// Operations are plain read-modify-write with no locking: concurrent
/// callers are last-writer-wins, matching the storage collaborator's own
/// guarantees.
pub struct FavoritesService {
    store: Arc<dyn KeyValueStore>,
    storage_key: String,
}

impl FavoritesService {
    /// Scopes the list to the signed-in user, or to a shared guest key when
    /// `user_id` is `None`.
    pub fn new(store: Arc<dyn KeyValueStore>, user_id: Option<&str>) -> Self {
        let storage_key = match user_id {
            Some(id) => format!("favorites:{}", id),
            None => GUEST_KEY.to_string(),
        };

        Self { store, storage_key }
    }

    /// Current list; an absent key reads as empty. A blob that no longer
    /// decodes also reads as empty rather than poisoning every caller.
    pub async fn saved_movies(&self) -> Result<Vec<Movie>> {
        let Some(raw) = self.store.get(&self.storage_key).await? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(movies) => Ok(movies),
            Err(e) => {
                tracing::warn!(key = %self.storage_key, error = %e, "discarding unreadable favorites blob");
                Ok(Vec::new())
            }
        }
    }

    /// Removes the movie if its id is already saved, appends it otherwise.
    /// Returns whether the movie is saved afterwards.
    pub async fn toggle_movie(&self, movie: &Movie) -> Result<bool> {
        let mut movies = self.saved_movies().await?;

        let saved = if let Some(pos) = movies.iter().position(|m| m.id == movie.id) {
            movies.remove(pos);
            false
        } else {
            movies.push(movie.clone());
            true
        };

        self.write_movies(&movies).await?;
        Ok(saved)
    }

    pub async fn is_movie_saved(&self, movie_id: i64) -> Result<bool> {
        Ok(self
            .saved_movies()
            .await?
            .iter()
            .any(|m| m.id == movie_id))
    }

    pub async fn remove_movie(&self, movie_id: i64) -> Result<()> {
        let mut movies = self.saved_movies().await?;
        movies.retain(|m| m.id != movie_id);
        self.write_movies(&movies).await
    }

    pub async fn clear_all(&self) -> Result<()> {
        self.store.remove(&self.storage_key).await
    }

    /// Re-fetches every saved movie in the given locale, one concurrent task
    /// per movie, and overwrites the list once all of them have finished.
    /// A movie whose fetch fails keeps its stored record, so the list never
    /// loses an entry; order and length are unchanged.
    pub async fn refresh_with_language(
        &self,
        repository: &MovieRepository,
        language: &str,
    ) -> Result<()> {
        let movies = self.saved_movies().await?;
        if movies.is_empty() {
            return Ok(());
        }

        let mut handles = Vec::with_capacity(movies.len());
        for movie in movies {
            let repository = repository.clone();
            let language = language.to_string();
            handles.push(tokio::spawn(async move {
                match repository
                    .movie_details_with_fallback(movie.id, &language)
                    .await
                {
                    Ok(updated) => updated,
                    Err(e) => {
                        tracing::warn!(movie_id = movie.id, error = %e, "keeping stale favorite after failed refresh");
                        movie
                    }
                }
            }));
        }

        let mut refreshed = Vec::with_capacity(handles.len());
        for handle in handles {
            refreshed.push(handle.await.map_err(|e| Error::Internal(e.to_string()))?);
        }

        self.write_movies(&refreshed).await
    }

    /// Merges the local list with the signed-in user's cloud list (union by
    /// id, local order first) and writes the merged list to both sides.
    /// Without a signed-in user this is a read-only no-op.
    pub async fn sync_with_cloud(&self, cloud: &dyn CloudFavoritesStore) -> Result<Vec<Movie>> {
        let local = self.saved_movies().await?;

        let Some(user_id) = cloud.current_user_id().await? else {
            return Ok(local);
        };

        let remote = cloud.favorite_movies(&user_id).await?;

        let mut merged = local;
        for movie in remote {
            if !merged.iter().any(|m| m.id == movie.id) {
                merged.push(movie);
            }
        }

        self.write_movies(&merged).await?;
        cloud.set_favorite_movies(&user_id, &merged).await?;

        Ok(merged)
    }

    async fn write_movies(&self, movies: &[Movie]) -> Result<()> {
        let raw = serde_json::to_string(movies)?;
        self.store.set(&self.storage_key, &raw).await
    }
}

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Movie;

/// Port to the cloud-synced favorites backend (document store plus auth
/// provider). The crate only needs three things from it: the signed-in user,
/// and whole-list read/write of that user's favorites.
#[async_trait]
pub trait CloudFavoritesStore: Send + Sync {
    /// `None` when nobody is signed in.
    async fn current_user_id(&self) -> Result<Option<String>>;

    async fn favorite_movies(&self, user_id: &str) -> Result<Vec<Movie>>;

    async fn set_favorite_movies(&self, user_id: &str, movies: &[Movie]) -> Result<()>;
}

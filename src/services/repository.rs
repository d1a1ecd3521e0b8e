use std::sync::Arc;

use crate::error::{Error, Result};
use crate::models::{Movie, Review, Video};
use crate::services::catalog::{CatalogSource, MovieCategory};

/// Locale used when the requested locale yields a blank title.
const FALLBACK_LANGUAGE: &str = "en-US";

/// Single point of translation between the catalog port and the rest of the
/// crate: one async method per catalog operation, each returning a uniform
/// `Result`. Never retries; every failure is handed upward for the caller to
/// decide.
#[derive(Clone)]
pub struct MovieRepository {
    source: Arc<dyn CatalogSource>,
}

impl MovieRepository {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    async fn movie_list(
        &self,
        category: MovieCategory,
        page: Option<u32>,
        language: &str,
    ) -> Result<Vec<Movie>> {
        let page = page.unwrap_or(1);
        let result = self.source.movie_list(category, page, language).await?;
        Ok(result.results)
    }

    pub async fn popular_movies(&self, page: Option<u32>, language: &str) -> Result<Vec<Movie>> {
        self.movie_list(MovieCategory::Popular, page, language)
            .await
    }

    pub async fn trending_movies(&self, page: Option<u32>, language: &str) -> Result<Vec<Movie>> {
        self.movie_list(MovieCategory::Trending, page, language)
            .await
    }

    pub async fn now_playing_movies(
        &self,
        page: Option<u32>,
        language: &str,
    ) -> Result<Vec<Movie>> {
        self.movie_list(MovieCategory::NowPlaying, page, language)
            .await
    }

    pub async fn top_rated_movies(&self, page: Option<u32>, language: &str) -> Result<Vec<Movie>> {
        self.movie_list(MovieCategory::TopRated, page, language)
            .await
    }

    pub async fn upcoming_movies(&self, page: Option<u32>, language: &str) -> Result<Vec<Movie>> {
        self.movie_list(MovieCategory::Upcoming, page, language)
            .await
    }

    /// Blank queries are a deliberate no-op: success with an empty list and
    /// no catalog call at all.
    pub async fn search_movies(
        &self,
        query: &str,
        page: Option<u32>,
        language: &str,
    ) -> Result<Vec<Movie>> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let result = self
            .source
            .search_movies(query, page.unwrap_or(1), language)
            .await?;
        Ok(result.results)
    }

    /// A 2xx response with no body counts as a failure here, not a success.
    pub async fn movie_details(&self, movie_id: i64, language: &str) -> Result<Movie> {
        self.source
            .movie_details(movie_id, language)
            .await?
            .ok_or(Error::NoMovieDetails)
    }

    /// Fetches details in the requested locale; if the catalog answers with a
    /// blank title (it does for some locales), re-fetches in `en-US` and
    /// returns that result regardless of its own title. A failing original
    /// fetch propagates without attempting the fallback; a failing fallback
    /// fetch propagates the fallback's failure.
    pub async fn movie_details_with_fallback(
        &self,
        movie_id: i64,
        language: &str,
    ) -> Result<Movie> {
        let movie = self.movie_details(movie_id, language).await?;

        if movie.title.trim().is_empty() {
            tracing::debug!(movie_id, language, "blank localized title, using fallback locale");
            return self.movie_details(movie_id, FALLBACK_LANGUAGE).await;
        }

        Ok(movie)
    }

    pub async fn movie_videos(&self, movie_id: i64, language: &str) -> Result<Vec<Video>> {
        self.source.movie_videos(movie_id, language).await
    }

    pub async fn movie_reviews(
        &self,
        movie_id: i64,
        page: Option<u32>,
        language: &str,
    ) -> Result<Vec<Review>> {
        let result = self
            .source
            .movie_reviews(movie_id, page.unwrap_or(1), language)
            .await?;
        Ok(result.results)
    }

    pub async fn similar_movies(
        &self,
        movie_id: i64,
        page: Option<u32>,
        language: &str,
    ) -> Result<Vec<Movie>> {
        let result = self
            .source
            .similar_movies(movie_id, page.unwrap_or(1), language)
            .await?;
        Ok(result.results)
    }
}

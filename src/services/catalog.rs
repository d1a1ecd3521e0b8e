use std::sync::RwLock;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use urlencoding;

use crate::error::{Error, Result};
use crate::models::{Movie, Page, Review, Video};

const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Browse sections the catalog can list without a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovieCategory {
    Popular,
    Trending,
    NowPlaying,
    TopRated,
    Upcoming,
}

impl MovieCategory {
    pub fn path(&self) -> &'static str {
        match self {
            MovieCategory::Popular => "movie/popular",
            MovieCategory::Trending => "trending/movie/day",
            MovieCategory::NowPlaying => "movie/now_playing",
            MovieCategory::TopRated => "movie/top_rated",
            MovieCategory::Upcoming => "movie/upcoming",
        }
    }
}

/// Port to the remote movie catalog.
///
/// The repository talks to the catalog only through this trait; tests swap in
/// a scripted implementation instead of an HTTP client.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn movie_list(
        &self,
        category: MovieCategory,
        page: u32,
        language: &str,
    ) -> Result<Page<Movie>>;

    async fn search_movies(&self, query: &str, page: u32, language: &str) -> Result<Page<Movie>>;

    /// `Ok(None)` means the catalog answered 2xx with an empty/null body.
    async fn movie_details(&self, movie_id: i64, language: &str) -> Result<Option<Movie>>;

    async fn movie_videos(&self, movie_id: i64, language: &str) -> Result<Vec<Video>>;

    async fn movie_reviews(&self, movie_id: i64, page: u32, language: &str)
    -> Result<Page<Review>>;

    async fn similar_movies(&self, movie_id: i64, page: u32, language: &str)
    -> Result<Page<Movie>>;
}

/// TMDB-backed catalog client.
///
/// One attempt per call: no retries, no backoff, no timeout beyond the
/// transport default. Non-2xx responses become `Error::Api`; connectivity
/// failures surface unchanged as `Error::Http`.
pub struct TmdbCatalog {
    client: reqwest::Client,
    base_url: String,
    api_key: RwLock<String>,
}

impl TmdbCatalog {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: TMDB_BASE_URL.to_string(),
            api_key: RwLock::new(api_key),
        }
    }

    /// Point the client at a different host (e.g. a caching proxy).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Update the API key at runtime (e.g. when settings change).
    pub fn set_api_key(&self, api_key: String) {
        if let Ok(mut key) = self.api_key.write() {
            *key = api_key;
        }
    }

    fn api_key(&self) -> String {
        self.api_key.read().map(|k| k.clone()).unwrap_or_default()
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl CatalogSource for TmdbCatalog {
    async fn movie_list(
        &self,
        category: MovieCategory,
        page: u32,
        language: &str,
    ) -> Result<Page<Movie>> {
        tracing::debug!(path = category.path(), page, language, "catalog list request");
        let url = format!(
            "{}/{}?api_key={}&page={}&language={}",
            self.base_url,
            category.path(),
            self.api_key(),
            page,
            language
        );

        self.get_json(&url).await
    }

    async fn search_movies(&self, query: &str, page: u32, language: &str) -> Result<Page<Movie>> {
        tracing::debug!(query, page, language, "catalog search request");
        let url = format!(
            "{}/search/movie?api_key={}&query={}&page={}&language={}",
            self.base_url,
            self.api_key(),
            urlencoding::encode(query),
            page,
            language
        );

        self.get_json(&url).await
    }

    async fn movie_details(&self, movie_id: i64, language: &str) -> Result<Option<Movie>> {
        let url = format!(
            "{}/movie/{}?api_key={}&language={}",
            self.base_url,
            movie_id,
            self.api_key(),
            language
        );

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        // The catalog occasionally answers 2xx with no usable body.
        let body = response.text().await?;
        let body = body.trim();
        if body.is_empty() || body == "null" {
            return Ok(None);
        }

        Ok(Some(serde_json::from_str(body)?))
    }

    async fn movie_videos(&self, movie_id: i64, language: &str) -> Result<Vec<Video>> {
        let url = format!(
            "{}/movie/{}/videos?api_key={}&language={}",
            self.base_url,
            movie_id,
            self.api_key(),
            language
        );

        let result: Page<Video> = self.get_json(&url).await?;
        Ok(result.results)
    }

    async fn movie_reviews(
        &self,
        movie_id: i64,
        page: u32,
        language: &str,
    ) -> Result<Page<Review>> {
        let url = format!(
            "{}/movie/{}/reviews?api_key={}&page={}&language={}",
            self.base_url,
            movie_id,
            self.api_key(),
            page,
            language
        );

        self.get_json(&url).await
    }

    async fn similar_movies(
        &self,
        movie_id: i64,
        page: u32,
        language: &str,
    ) -> Result<Page<Movie>> {
        let url = format!(
            "{}/movie/{}/similar?api_key={}&page={}&language={}",
            self.base_url,
            movie_id,
            self.api_key(),
            page,
            language
        );

        self.get_json(&url).await
    }
}

/// Full image URL for a poster/backdrop path returned by the catalog.
pub fn image_url(path: &str, size: &str) -> String {
    format!("https://image.tmdb.org/t/p/{}{}", size, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_paths() {
        assert_eq!(MovieCategory::Popular.path(), "movie/popular");
        assert_eq!(MovieCategory::Trending.path(), "trending/movie/day");
        assert_eq!(MovieCategory::NowPlaying.path(), "movie/now_playing");
        assert_eq!(MovieCategory::TopRated.path(), "movie/top_rated");
        assert_eq!(MovieCategory::Upcoming.path(), "movie/upcoming");
    }

    #[test]
    fn test_image_url() {
        assert_eq!(
            image_url("/abc.jpg", "w500"),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
    }
}

//! Test helpers: in-memory databases, movie fixtures and a scripted catalog.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use sqlx::sqlite::SqlitePoolOptions;

use crate::db::DbPool;
use crate::error::{Error, Result};
use crate::models::{Movie, Page, Review, Video};
use crate::services::catalog::{CatalogSource, MovieCategory};

/// Creates an in-memory SQLite database with all migrations applied
pub async fn create_test_db() -> DbPool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("src/db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Movie fixture with plausible catalog fields.
pub fn movie(id: i64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        overview: format!("Overview of {}", title),
        release_date: "2024-01-01".to_string(),
        poster_path: Some(format!("/poster-{}.jpg", id)),
        backdrop_path: None,
        vote_average: 7.5,
        vote_count: 100,
        popularity: 42.0,
        original_language: "en".to_string(),
        original_title: title.to_string(),
    }
}

/// One recorded call against the scripted catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogCall {
    MovieList {
        category: MovieCategory,
        page: u32,
        language: String,
    },
    Search {
        query: String,
        page: u32,
        language: String,
    },
    Details {
        movie_id: i64,
        language: String,
    },
    Videos {
        movie_id: i64,
    },
    Reviews {
        movie_id: i64,
        page: u32,
    },
    Similar {
        movie_id: i64,
        page: u32,
    },
}

enum Scripted<T> {
    Value(T),
    ApiError(u16, String),
}

impl<T: Clone> Scripted<T> {
    fn produce(&self) -> Result<T> {
        match self {
            Scripted::Value(v) => Ok(v.clone()),
            Scripted::ApiError(status, message) => Err(Error::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

/// Scripted stand-in for the remote catalog.
///
/// Records every call so tests can assert on pages, languages and on "no
/// network call happened" properties. Unscripted list/search lookups answer
/// with an empty page; unscripted detail lookups answer 404.
#[derive(Default)]
pub struct MockCatalog {
    calls: Mutex<Vec<CatalogCall>>,
    lists: Mutex<HashMap<MovieCategory, Scripted<Vec<Movie>>>>,
    searches: Mutex<HashMap<String, Scripted<Vec<Movie>>>>,
    details: Mutex<HashMap<(i64, String), Scripted<Option<Movie>>>>,
    videos: Mutex<Vec<Video>>,
    reviews: Mutex<Vec<Review>>,
    similar: Mutex<Vec<Movie>>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(self, category: MovieCategory, movies: Vec<Movie>) -> Self {
        self.set_list(category, movies);
        self
    }

    pub fn with_list_error(self, category: MovieCategory, status: u16, message: &str) -> Self {
        self.set_list_error(category, status, message);
        self
    }

    pub fn with_search(self, query: &str, movies: Vec<Movie>) -> Self {
        self.searches
            .lock()
            .unwrap()
            .insert(query.to_string(), Scripted::Value(movies));
        self
    }

    pub fn with_search_error(self, query: &str, status: u16, message: &str) -> Self {
        self.searches.lock().unwrap().insert(
            query.to_string(),
            Scripted::ApiError(status, message.to_string()),
        );
        self
    }

    /// Scripts a detail response keyed by the movie's id and the language.
    pub fn with_details(self, language: &str, movie: Movie) -> Self {
        self.details.lock().unwrap().insert(
            (movie.id, language.to_string()),
            Scripted::Value(Some(movie)),
        );
        self
    }

    /// Scripts a 2xx-with-null-body detail response.
    pub fn with_missing_details(self, movie_id: i64, language: &str) -> Self {
        self.details
            .lock()
            .unwrap()
            .insert((movie_id, language.to_string()), Scripted::Value(None));
        self
    }

    pub fn with_details_error(
        self,
        movie_id: i64,
        language: &str,
        status: u16,
        message: &str,
    ) -> Self {
        self.details.lock().unwrap().insert(
            (movie_id, language.to_string()),
            Scripted::ApiError(status, message.to_string()),
        );
        self
    }

    pub fn with_videos(self, videos: Vec<Video>) -> Self {
        *self.videos.lock().unwrap() = videos;
        self
    }

    pub fn with_reviews(self, reviews: Vec<Review>) -> Self {
        *self.reviews.lock().unwrap() = reviews;
        self
    }

    pub fn with_similar(self, movies: Vec<Movie>) -> Self {
        *self.similar.lock().unwrap() = movies;
        self
    }

    /// Re-scripts a list after construction, for failure-then-success tests.
    pub fn set_list(&self, category: MovieCategory, movies: Vec<Movie>) {
        self.lists
            .lock()
            .unwrap()
            .insert(category, Scripted::Value(movies));
    }

    pub fn set_list_error(&self, category: MovieCategory, status: u16, message: &str) {
        self.lists
            .lock()
            .unwrap()
            .insert(category, Scripted::ApiError(status, message.to_string()));
    }

    pub fn calls(&self) -> Vec<CatalogCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: CatalogCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl CatalogSource for MockCatalog {
    async fn movie_list(
        &self,
        category: MovieCategory,
        page: u32,
        language: &str,
    ) -> Result<Page<Movie>> {
        self.record(CatalogCall::MovieList {
            category,
            page,
            language: language.to_string(),
        });

        match self.lists.lock().unwrap().get(&category) {
            Some(scripted) => Ok(Page::of(scripted.produce()?)),
            None => Ok(Page::of(Vec::new())),
        }
    }

    async fn search_movies(&self, query: &str, page: u32, language: &str) -> Result<Page<Movie>> {
        self.record(CatalogCall::Search {
            query: query.to_string(),
            page,
            language: language.to_string(),
        });

        match self.searches.lock().unwrap().get(query) {
            Some(scripted) => Ok(Page::of(scripted.produce()?)),
            None => Ok(Page::of(Vec::new())),
        }
    }

    async fn movie_details(&self, movie_id: i64, language: &str) -> Result<Option<Movie>> {
        self.record(CatalogCall::Details {
            movie_id,
            language: language.to_string(),
        });

        match self
            .details
            .lock()
            .unwrap()
            .get(&(movie_id, language.to_string()))
        {
            Some(scripted) => scripted.produce(),
            None => Err(Error::Api {
                status: 404,
                message: "The resource you requested could not be found.".to_string(),
            }),
        }
    }

    async fn movie_videos(&self, movie_id: i64, _language: &str) -> Result<Vec<Video>> {
        self.record(CatalogCall::Videos { movie_id });
        Ok(self.videos.lock().unwrap().clone())
    }

    async fn movie_reviews(
        &self,
        movie_id: i64,
        page: u32,
        _language: &str,
    ) -> Result<Page<Review>> {
        self.record(CatalogCall::Reviews { movie_id, page });
        Ok(Page::of(self.reviews.lock().unwrap().clone()))
    }

    async fn similar_movies(
        &self,
        movie_id: i64,
        page: u32,
        _language: &str,
    ) -> Result<Page<Movie>> {
        self.record(CatalogCall::Similar { movie_id, page });
        Ok(Page::of(self.similar.lock().unwrap().clone()))
    }
}

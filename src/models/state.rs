use serde::Serialize;

use crate::models::Movie;

/// Everything the browse screen needs to render at one point in time.
///
/// One list plus one loading flag per section. Updates always go through
/// whole-value replacement (copy, change, publish); fields are never mutated
/// in place once a snapshot has been handed to observers.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct HomeUiState {
    pub trending: Vec<Movie>,
    pub trending_loading: bool,

    pub popular: Vec<Movie>,
    pub popular_loading: bool,

    pub upcoming: Vec<Movie>,
    pub upcoming_loading: bool,

    pub search_results: Vec<Movie>,
    pub search_loading: bool,
    /// Raw query text as typed, kept even when blank so the UI can echo it.
    pub search_query: String,

    /// Last failure message, shown as a dismissible banner.
    pub error: Option<String>,
}

impl HomeUiState {
    /// True while any section still has a load in flight.
    pub fn is_loading(&self) -> bool {
        self.trending_loading || self.popular_loading || self.upcoming_loading || self.search_loading
    }
}

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::models::{HomeUiState, Movie};
use crate::services::repository::MovieRepository;

/// Category sections loaded independently of the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum BrowseSection {
    Trending,
    Popular,
    Upcoming,
}

impl BrowseSection {
    fn set_loading(self, state: &mut HomeUiState, loading: bool) {
        match self {
            BrowseSection::Trending => state.trending_loading = loading,
            BrowseSection::Popular => state.popular_loading = loading,
            BrowseSection::Upcoming => state.upcoming_loading = loading,
        }
    }

    fn set_movies(self, state: &mut HomeUiState, movies: Vec<Movie>) {
        match self {
            BrowseSection::Trending => state.trending = movies,
            BrowseSection::Popular => state.popular = movies,
            BrowseSection::Upcoming => state.upcoming = movies,
        }
    }
}

/// Owns the one [`HomeUiState`] value and orchestrates the category loads.
///
/// State is published through a watch channel: observers subscribe and only
/// ever see whole snapshots. Each section keeps a handle to its in-flight
/// load; starting a new load for the same section aborts the previous one
/// first, so the section can never be overwritten by a stale response.
///
/// Must be constructed on a tokio runtime: creation immediately starts the
/// three category loads.
pub struct BrowseViewModel {
    repository: MovieRepository,
    language: RwLock<String>,
    state_tx: watch::Sender<HomeUiState>,
    section_tasks: Mutex<HashMap<BrowseSection, JoinHandle<()>>>,
    search_task: Mutex<Option<JoinHandle<()>>>,
}

impl BrowseViewModel {
    pub fn new(repository: MovieRepository, language: impl Into<String>) -> Arc<Self> {
        let (state_tx, _) = watch::channel(HomeUiState::default());

        let vm = Arc::new(Self {
            repository,
            language: RwLock::new(language.into()),
            state_tx,
            section_tasks: Mutex::new(HashMap::new()),
            search_task: Mutex::new(None),
        });

        vm.load_trending_movies();
        vm.load_popular_movies();
        vm.load_upcoming_movies();

        vm
    }

    /// Observers receive every published snapshot, starting with the current
    /// one.
    pub fn subscribe(&self) -> watch::Receiver<HomeUiState> {
        self.state_tx.subscribe()
    }

    pub fn current_state(&self) -> HomeUiState {
        self.state_tx.borrow().clone()
    }

    pub fn set_language(&self, language: impl Into<String>) {
        if let Ok(mut lang) = self.language.write() {
            *lang = language.into();
        }
    }

    pub fn load_trending_movies(self: &Arc<Self>) {
        self.load_section(BrowseSection::Trending);
    }

    pub fn load_popular_movies(self: &Arc<Self>) {
        self.load_section(BrowseSection::Popular);
    }

    pub fn load_upcoming_movies(self: &Arc<Self>) {
        self.load_section(BrowseSection::Upcoming);
    }

    /// Stores the raw query verbatim for display. Blank queries clear the
    /// results without touching the repository; anything else runs the usual
    /// loading cycle.
    pub fn search_movies(self: &Arc<Self>, query: &str) {
        self.abort_search();

        if query.trim().is_empty() {
            let query = query.to_string();
            self.update_state(|state| {
                state.search_query = query;
                state.search_results.clear();
                state.search_loading = false;
            });
            return;
        }

        {
            let query = query.to_string();
            self.update_state(|state| {
                state.search_query = query;
                state.search_loading = true;
                state.error = None;
            });
        }

        let vm = Arc::clone(self);
        let query = query.to_string();
        let handle = tokio::spawn(async move {
            let language = vm.language();
            match vm.repository.search_movies(&query, None, &language).await {
                Ok(movies) => vm.update_state(|state| {
                    state.search_results = movies;
                    state.search_loading = false;
                }),
                Err(e) => vm.update_state(|state| {
                    state.error = Some(e.to_string());
                    state.search_loading = false;
                }),
            }
        });

        if let Ok(mut slot) = self.search_task.lock() {
            *slot = Some(handle);
        }
    }

    /// Resets the search box and any error banner, then restarts all three
    /// category loads. The clears happen up front, not as a result of the
    /// reload's outcome.
    pub fn reload_movies(self: &Arc<Self>) {
        self.abort_search();
        self.update_state(|state| {
            state.search_query.clear();
            state.search_results.clear();
            state.search_loading = false;
            state.error = None;
        });

        self.load_trending_movies();
        self.load_popular_movies();
        self.load_upcoming_movies();
    }

    /// Dismisses the error banner. Synchronous and unconditional.
    pub fn clear_error(&self) {
        self.update_state(|state| state.error = None);
    }

    fn load_section(self: &Arc<Self>, section: BrowseSection) {
        self.abort_section(section);

        self.update_state(|state| {
            section.set_loading(state, true);
            state.error = None;
        });

        let vm = Arc::clone(self);
        let handle = tokio::spawn(async move {
            let language = vm.language();
            let result = match section {
                BrowseSection::Trending => vm.repository.trending_movies(None, &language).await,
                BrowseSection::Popular => vm.repository.popular_movies(None, &language).await,
                BrowseSection::Upcoming => vm.repository.upcoming_movies(None, &language).await,
            };

            match result {
                Ok(movies) => vm.update_state(|state| {
                    section.set_movies(state, movies);
                    section.set_loading(state, false);
                }),
                // A failed load keeps whatever the section showed before.
                Err(e) => vm.update_state(|state| {
                    state.error = Some(e.to_string());
                    section.set_loading(state, false);
                }),
            }
        });

        if let Ok(mut tasks) = self.section_tasks.lock() {
            tasks.insert(section, handle);
        }
    }

    fn abort_section(&self, section: BrowseSection) {
        if let Ok(mut tasks) = self.section_tasks.lock()
            && let Some(previous) = tasks.remove(&section)
        {
            previous.abort();
        }
    }

    fn abort_search(&self) {
        if let Ok(mut slot) = self.search_task.lock()
            && let Some(previous) = slot.take()
        {
            previous.abort();
        }
    }

    fn language(&self) -> String {
        self.language
            .read()
            .map(|l| l.clone())
            .unwrap_or_else(|_| "en-US".to_string())
    }

    /// Copy-with-changes on the current snapshot, then publish the whole
    /// value. Observers never see a partially updated state.
    fn update_state(&self, apply: impl FnOnce(&mut HomeUiState)) {
        let mut next = self.state_tx.borrow().clone();
        apply(&mut next);
        self.state_tx.send_replace(next);
    }
}

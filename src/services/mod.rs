pub mod browse;
pub mod catalog;
pub mod cloud;
pub mod favorites;
pub mod preferences;
pub mod repository;
pub mod storage;

pub use browse::BrowseViewModel;
pub use catalog::{CatalogSource, MovieCategory, TmdbCatalog};
pub use cloud::CloudFavoritesStore;
pub use favorites::FavoritesService;
pub use preferences::{PreferenceKey, PreferencesService};
pub use repository::MovieRepository;
pub use storage::{KeyValueStore, SqliteKeyValueStore};

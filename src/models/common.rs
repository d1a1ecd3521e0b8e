use serde::Deserialize;

/// Paged response envelope used by every catalog list endpoint.
///
/// Consumers only ever read `results`; the counters are decoded for
/// completeness but nothing downstream depends on them.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u64,
}

fn default_page() -> u32 {
    1
}

impl<T> Page<T> {
    /// A single page holding the given results, for in-process construction.
    pub fn of(results: Vec<T>) -> Self {
        let total_results = results.len() as u64;
        Self {
            page: 1,
            results,
            total_pages: 1,
            total_results,
        }
    }
}

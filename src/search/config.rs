//! Search configuration.

/// Configuration for [`SearchRunner`](super::SearchRunner).
///
/// # Examples
///
/// ```
/// use volley_lineup::search::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_max_matches(10)
///     .with_keep_matches(false);
/// assert_eq!(config.max_matches, Some(10));
/// assert!(!config.keep_matches);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Stop after this many accepted matches. `None` searches everything.
    pub max_matches: Option<usize>,
    /// Whether accepted matches are collected into the result. Turn this
    /// off for large searches that only need the count or stream matches
    /// through a callback.
    pub keep_matches: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_matches: None,
            keep_matches: true,
        }
    }
}

impl SearchConfig {
    /// Stops the search after `n` accepted matches.
    pub fn with_max_matches(mut self, n: usize) -> Self {
        self.max_matches = Some(n);
        self
    }

    /// Sets whether accepted matches are collected.
    pub fn with_keep_matches(mut self, keep: bool) -> Self {
        self.keep_matches = keep;
        self
    }
}

use std::path::PathBuf;

/// Store configuration
///
/// Wires where the persisted snapshot lives and which endpoint serves the
/// initial data on first run.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// File holding the persisted snapshot
    pub cache_path: PathBuf,

    /// Read-only endpoint returning the initial snapshot as JSON
    pub remote_url: String,
}

impl StoreConfig {
    /// Create a configuration for the given remote endpoint.
    pub fn new(remote_url: &str) -> Self {
        Self {
            cache_path: PathBuf::from("hotel-dashboard-state.json"),
            remote_url: remote_url.to_string(),
        }
    }

    /// Set the snapshot file path
    pub fn cache_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache_path = path.into();
        self
    }

    /// Set the remote endpoint
    pub fn remote_url(mut self, url: &str) -> Self {
        self.remote_url = url.to_string();
        self
    }
}

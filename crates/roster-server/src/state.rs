//! Application state shared across handlers.

use std::sync::Arc;

use roster_store::StudentRepository;

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// Student storage.
    repository: Arc<dyn StudentRepository>,
}

impl AppState {
    /// Create new application state around a repository handle.
    pub fn new(repository: Arc<dyn StudentRepository>) -> Self {
        Self { repository }
    }

    /// Get a reference to the student repository.
    pub fn repository(&self) -> &dyn StudentRepository {
        self.repository.as_ref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

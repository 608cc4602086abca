//! Application state shared by all handler tasks.

use std::sync::Arc;

use abused_store::RecordStore;

/// State constructed once in `main` and handed to the router.
///
/// Handlers hold no other shared state; the store does its own locking.
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}

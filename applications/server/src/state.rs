/// Shared application state
use crate::services::TrackerService;
use std::sync::Arc;
use stride_core::TrackerStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub tracker: Arc<TrackerService>,
}

impl AppState {
    pub fn new(store: Arc<dyn TrackerStore>) -> Self {
        Self {
            tracker: Arc::new(TrackerService::new(store)),
        }
    }
}

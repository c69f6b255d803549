use std::sync::Arc;

use swallow_core::Cohort;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub cohort: Arc<Cohort>,
}

impl AppState {
    pub fn new(cohort: Cohort) -> Self {
        Self {
            cohort: Arc::new(cohort),
        }
    }
}

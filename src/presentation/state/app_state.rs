use std::sync::Arc;

use crate::application::services::DispatchService;

/// Shared per-router state. Everything in here is immutable once built.
#[derive(Clone)]
pub struct AppState {
    pub dispatch_service: Arc<DispatchService>,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

    pub fn new(dispatch_service: Arc<DispatchService>) -> Self {
        Self {
            dispatch_service,
            max_upload_bytes: Self::DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    pub fn with_max_upload_bytes(mut self, max_upload_bytes: usize) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }
}

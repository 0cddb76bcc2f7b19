use std::sync::Arc;

use crate::session::SessionController;

/// Shared application state for HTTP handlers.
///
/// One session per process: every handler goes through the same controller.
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<SessionController>,
}

impl AppState {
    pub fn new(controller: Arc<SessionController>) -> Self {
        Self { controller }
    }
}

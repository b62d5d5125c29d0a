use crate::config::Config;
use crate::session::SessionHandle;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Handle to the single task that owns the Document.
    pub session: SessionHandle,
    pub config: Config,
}

use crate::config::Config;
use crate::recommendations::fetcher::Recommender;
use crate::view::timers::SharedView;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Recommender,
    /// Single page state; lock is never held across the completion call.
    pub view: SharedView,
    pub config: Config,
}

pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::recommendations::handlers as recommendations;
use crate::state::AppState;
use crate::view::handlers as view;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/suggestions", get(recommendations::handle_suggestions))
        .route(
            "/api/v1/recommendations",
            post(recommendations::handle_recommend),
        )
        .route("/api/v1/view", get(view::handle_get_view))
        .route("/api/v1/view/query", put(view::handle_set_query))
        .route("/api/v1/view/suggestions", put(view::handle_set_suggestions))
        .route(
            "/api/v1/view/categories/:name/more",
            post(view::handle_show_more),
        )
        .with_state(state)
}

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;
use crate::view::state::ViewSnapshot;

#[derive(Deserialize)]
pub struct QueryUpdate {
    pub query: String,
}

#[derive(Deserialize)]
pub struct SuggestionsUpdate {
    pub visible: bool,
}

#[derive(Serialize)]
pub struct ShowMoreResponse {
    pub category: String,
    pub visible: usize,
}

/// GET /api/v1/view
pub async fn handle_get_view(State(state): State<AppState>) -> Json<ViewSnapshot> {
    Json(state.view.lock().await.snapshot())
}

/// PUT /api/v1/view/query
pub async fn handle_set_query(
    State(state): State<AppState>,
    Json(update): Json<QueryUpdate>,
) -> Json<ViewSnapshot> {
    let mut view = state.view.lock().await;
    view.set_query(update.query);
    Json(view.snapshot())
}

/// PUT /api/v1/view/suggestions
pub async fn handle_set_suggestions(
    State(state): State<AppState>,
    Json(update): Json<SuggestionsUpdate>,
) -> Json<ViewSnapshot> {
    let mut view = state.view.lock().await;
    view.set_suggestions_visible(update.visible);
    Json(view.snapshot())
}

/// POST /api/v1/view/categories/:name/more
pub async fn handle_show_more(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ShowMoreResponse>, AppError> {
    let visible = state
        .view
        .lock()
        .await
        .show_more(&name)
        .ok_or_else(|| AppError::NotFound(format!("Category '{name}' not in current results")))?;
    Ok(Json(ShowMoreResponse {
        category: name,
        visible,
    }))
}

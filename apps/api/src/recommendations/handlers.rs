//! Axum route handlers for the Recommendation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::recommendations::fetcher::Recommendation;
use crate::state::AppState;
use crate::view::rotator::SEARCH_SUGGESTIONS;
use crate::view::state::SearchTicket;
use crate::view::timers::SharedView;

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<&'static str>,
}

/// POST /api/v1/recommendations
///
/// Runs one search and applies it to the page state unless a newer search
/// started meanwhile. Always answers with categories: live or mock.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<Recommendation>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let ticket = state
        .view
        .lock()
        .await
        .begin_search(request.job_description.as_str());

    let guard = InFlightSearch {
        view: state.view.clone(),
        ticket,
        armed: true,
    };

    let recommendation = state.recommender.fetch(&request.job_description).await;

    let applied = state
        .view
        .lock()
        .await
        .complete_search(ticket, recommendation.clone());
    guard.disarm();
    if !applied {
        info!("Search {ticket:?} superseded by a newer one; result not applied to view");
    }

    Ok(Json(recommendation))
}

/// Clears the loading flag if the handler future is dropped (client gone)
/// before its search completes.
struct InFlightSearch {
    view: SharedView,
    ticket: SearchTicket,
    armed: bool,
}

impl InFlightSearch {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for InFlightSearch {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let ticket = self.ticket;
        debug!("Search {ticket:?} dropped before completion");
        match self.view.try_lock() {
            Ok(mut view) => {
                view.cancel_search(ticket);
            }
            Err(_) => {
                let view = self.view.clone();
                tokio::spawn(async move {
                    view.lock().await.cancel_search(ticket);
                });
            }
        }
    }
}

/// GET /api/v1/suggestions
pub async fn handle_suggestions() -> Json<SuggestionsResponse> {
    Json(SuggestionsResponse {
        suggestions: SEARCH_SUGGESTIONS.to_vec(),
    })
}

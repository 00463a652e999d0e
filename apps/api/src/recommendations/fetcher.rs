//! Recommendation fetcher: job description in, categories out.
//!
//! Flow: build prompt → single completion call → parse document → map to view model.
//! Any failure along the way is logged and replaced by the static mock set, so the
//! result is never empty. The outcome records which path produced it.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::llm_client::{LlmClient, LlmError};
use crate::recommendations::mock::mock_categories;
use crate::recommendations::models::{Category, RecommendationDocument};
use crate::recommendations::prompts::{build_user_prompt, RECOMMENDATION_SYSTEM};

/// Anything that can answer the recommendation prompt with a parsed document.
#[async_trait]
pub trait CompletionSource: Send + Sync {
    async fn complete(
        &self,
        system: &str,
        prompt: &str,
    ) -> Result<RecommendationDocument, LlmError>;
}

#[async_trait]
impl CompletionSource for LlmClient {
    async fn complete(
        &self,
        system: &str,
        prompt: &str,
    ) -> Result<RecommendationDocument, LlmError> {
        self.call_json::<RecommendationDocument>(system, prompt)
            .await
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("response contained no categories")]
    NoCategories,
}

/// Which path produced a result set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecommendationSource {
    Live,
    Fallback { reason: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub source: RecommendationSource,
    pub categories: Vec<Category>,
}

impl Recommendation {
    pub fn is_live(&self) -> bool {
        self.source == RecommendationSource::Live
    }

    fn fallback(error: &FetchError) -> Self {
        Self {
            source: RecommendationSource::Fallback {
                reason: error.to_string(),
            },
            categories: mock_categories(),
        }
    }
}

#[derive(Clone)]
pub struct Recommender {
    source: Arc<dyn CompletionSource>,
}

impl Recommender {
    pub fn new(source: Arc<dyn CompletionSource>) -> Self {
        Self { source }
    }

    /// Returns recommendations for a job description. Never fails and never
    /// returns an empty category list.
    pub async fn fetch(&self, job_description: &str) -> Recommendation {
        match self.fetch_live(job_description).await {
            Ok(categories) => {
                info!("Live recommendations: {} categories", categories.len());
                Recommendation {
                    source: RecommendationSource::Live,
                    categories,
                }
            }
            Err(e) => {
                warn!("Recommendation call failed, serving mock results: {e}");
                Recommendation::fallback(&e)
            }
        }
    }

    async fn fetch_live(&self, job_description: &str) -> Result<Vec<Category>, FetchError> {
        let prompt = build_user_prompt(job_description);
        let document = self.source.complete(RECOMMENDATION_SYSTEM, &prompt).await?;
        if document.categories.is_empty() {
            return Err(FetchError::NoCategories);
        }
        Ok(document.into())
    }
}

// Recommendation engine: prompt → completion call → view model, with mock fallback.
// All completion calls go through llm_client.

pub mod catalog;
pub mod fetcher;
pub mod handlers;
pub mod mock;
pub mod models;
pub mod prompts;

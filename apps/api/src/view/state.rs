//! View state: everything the page renders, behind plain update methods.
//!
//! Searches are tagged with a ticket; only the response for the most recent
//! ticket is applied, so a slow earlier request cannot overwrite a newer one.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::recommendations::catalog::Icon;
use crate::recommendations::fetcher::{Recommendation, RecommendationSource};
use crate::recommendations::models::{Application, Category};
use crate::view::blinker::CursorBlinker;
use crate::view::rotator::SuggestionRotator;

/// Cards shown per category right after a search.
pub const INITIAL_VISIBLE: usize = 6;
/// Cards added by one "show more".
pub const SHOW_MORE_STEP: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchTicket(u64);

#[derive(Debug, Default)]
pub struct ViewState {
    query: String,
    results: Vec<Category>,
    source: Option<RecommendationSource>,
    is_loading: bool,
    has_searched: bool,
    rotator: SuggestionRotator,
    blinker: CursorBlinker,
    visible_counts: BTreeMap<String, usize>,
    latest_ticket: u64,
}

/// Serialisable render model of the whole page.
#[derive(Debug, Clone, Serialize)]
pub struct ViewSnapshot {
    pub query: String,
    pub is_loading: bool,
    pub has_searched: bool,
    pub show_suggestions: bool,
    pub placeholder: &'static str,
    pub show_cursor: bool,
    pub source: Option<RecommendationSource>,
    pub categories: Vec<CategoryView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
    pub name: String,
    pub icon: Icon,
    pub color: String,
    pub total: usize,
    pub visible: usize,
    pub has_more: bool,
    pub applications: Vec<Application>,
}

impl ViewState {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    pub fn results(&self) -> &[Category] {
        &self.results
    }

    pub fn visible_counts(&self) -> &BTreeMap<String, usize> {
        &self.visible_counts
    }

    pub fn rotator(&self) -> &SuggestionRotator {
        &self.rotator
    }

    pub fn blinker(&self) -> &CursorBlinker {
        &self.blinker
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_suggestions_visible(&mut self, visible: bool) {
        self.rotator.set_active(visible);
    }

    pub fn tick_rotator(&mut self) {
        self.rotator.tick();
    }

    pub fn tick_blinker(&mut self) {
        self.blinker.tick();
    }

    /// Marks a search as in flight and returns its ticket.
    pub fn begin_search(&mut self, query: impl Into<String>) -> SearchTicket {
        self.query = query.into();
        self.is_loading = true;
        self.latest_ticket += 1;
        SearchTicket(self.latest_ticket)
    }

    /// Applies a finished search. Returns false, leaving state untouched, when a
    /// newer search has been started since `ticket` was issued.
    pub fn complete_search(&mut self, ticket: SearchTicket, recommendation: Recommendation) -> bool {
        if ticket.0 != self.latest_ticket {
            return false;
        }

        if recommendation.is_live() {
            self.visible_counts = recommendation
                .categories
                .iter()
                .map(|c| (c.name.clone(), INITIAL_VISIBLE))
                .collect();
        } else {
            self.visible_counts.clear();
        }

        self.results = recommendation.categories;
        self.source = Some(recommendation.source);
        self.is_loading = false;
        self.has_searched = true;
        true
    }

    /// Abandons a search that will never complete. Clears the loading flag only
    /// if `ticket` is still the latest; results and counts are kept.
    pub fn cancel_search(&mut self, ticket: SearchTicket) -> bool {
        if ticket.0 != self.latest_ticket || !self.is_loading {
            return false;
        }
        self.is_loading = false;
        true
    }

    /// Reveals more cards in a category. Returns the new visible count, or
    /// `None` if the category is not in the current results.
    pub fn show_more(&mut self, category: &str) -> Option<usize> {
        let total = self
            .results
            .iter()
            .find(|c| c.name == category)?
            .applications
            .len();
        let current = self.visible_count(category);
        let next = (current + SHOW_MORE_STEP).min(total);
        self.visible_counts.insert(category.to_string(), next);
        Some(next)
    }

    /// Number of cards rendered for a category, never more than it holds.
    pub fn visible_count(&self, category: &str) -> usize {
        let total = self
            .results
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.applications.len())
            .unwrap_or(0);
        self.visible_counts
            .get(category)
            .copied()
            .unwrap_or(INITIAL_VISIBLE)
            .min(total)
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        let categories = self
            .results
            .iter()
            .map(|c| {
                let visible = self.visible_count(&c.name);
                CategoryView {
                    name: c.name.clone(),
                    icon: c.icon,
                    color: c.color.clone(),
                    total: c.applications.len(),
                    visible,
                    has_more: visible < c.applications.len(),
                    applications: c.applications[..visible].to_vec(),
                }
            })
            .collect();

        ViewSnapshot {
            query: self.query.clone(),
            is_loading: self.is_loading,
            has_searched: self.has_searched,
            show_suggestions: self.rotator.is_active(),
            placeholder: self.rotator.current(),
            show_cursor: self.blinker.visible(),
            source: self.source.clone(),
            categories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendations::mock::mock_categories;
    use crate::recommendations::models::RawApplication;

    fn category(name: &str, size: usize) -> Category {
        let apps = (0..size)
            .map(|i| RawApplication {
                title: format!("Zastosowanie {i}"),
                description: "Opis".to_string(),
                prompt: None,
                examples: None,
            })
            .collect();
        Category::new(name, apps)
    }

    fn live(categories: Vec<Category>) -> Recommendation {
        Recommendation {
            source: RecommendationSource::Live,
            categories,
        }
    }

    fn fallback() -> Recommendation {
        Recommendation {
            source: RecommendationSource::Fallback {
                reason: "API error (status 500): boom".to_string(),
            },
            categories: mock_categories(),
        }
    }

    #[test]
    fn test_begin_search_sets_loading_and_query() {
        let mut state = ViewState::default();
        state.begin_search("Jestem księgowym");
        assert!(state.is_loading());
        assert!(!state.has_searched());
        assert_eq!(state.query(), "Jestem księgowym");
    }

    #[test]
    fn test_live_result_resets_counts_to_six_per_category() {
        let mut state = ViewState::default();
        let ticket = state.begin_search("q");
        assert!(state.complete_search(
            ticket,
            live(vec![category("Komunikacja", 10), category("Technologia", 2)])
        ));

        let expected: BTreeMap<String, usize> = [
            ("Komunikacja".to_string(), 6),
            ("Technologia".to_string(), 6),
        ]
        .into_iter()
        .collect();
        assert_eq!(state.visible_counts(), &expected);
        assert!(!state.is_loading());
        assert!(state.has_searched());
    }

    #[test]
    fn test_counts_from_previous_search_are_replaced() {
        let mut state = ViewState::default();
        let first = state.begin_search("a");
        state.complete_search(first, live(vec![category("Komunikacja", 10)]));
        state.show_more("Komunikacja");

        let second = state.begin_search("b");
        state.complete_search(second, live(vec![category("Technologia", 10)]));

        assert_eq!(state.visible_counts().len(), 1);
        assert_eq!(state.visible_counts().get("Technologia"), Some(&6));
    }

    #[test]
    fn test_fallback_clears_counts_and_renders_default() {
        let mut state = ViewState::default();
        let first = state.begin_search("a");
        state.complete_search(first, live(vec![category("Komunikacja", 10)]));

        let second = state.begin_search("b");
        state.complete_search(second, fallback());

        assert!(state.visible_counts().is_empty());
        assert_eq!(state.results(), mock_categories().as_slice());
        let snapshot = state.snapshot();
        for cat in &snapshot.categories {
            assert_eq!(cat.visible, cat.total.min(INITIAL_VISIBLE));
        }
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let mut state = ViewState::default();
        let slow = state.begin_search("pierwsze");
        let fast = state.begin_search("drugie");

        assert!(state.complete_search(fast, live(vec![category("Technologia", 3)])));
        assert!(!state.complete_search(slow, live(vec![category("Komunikacja", 3)])));

        assert_eq!(state.results()[0].name, "Technologia");
        assert_eq!(state.query(), "drugie");
    }

    #[test]
    fn test_loading_stays_on_until_latest_search_completes() {
        let mut state = ViewState::default();
        let slow = state.begin_search("pierwsze");
        let _fast = state.begin_search("drugie");
        state.complete_search(slow, fallback());
        assert!(state.is_loading());
    }

    #[test]
    fn test_cancel_clears_loading_and_keeps_previous_results() {
        let mut state = ViewState::default();
        let first = state.begin_search("a");
        state.complete_search(first, live(vec![category("Komunikacja", 3)]));

        let second = state.begin_search("b");
        assert!(state.cancel_search(second));
        assert!(!state.is_loading());
        assert_eq!(state.results()[0].name, "Komunikacja");
        assert!(!state.cancel_search(second));
    }

    #[test]
    fn test_cancelling_superseded_search_keeps_loading() {
        let mut state = ViewState::default();
        let old = state.begin_search("a");
        let _current = state.begin_search("b");
        assert!(!state.cancel_search(old));
        assert!(state.is_loading());
    }

    #[test]
    fn test_show_more_is_clamped_to_total() {
        let mut state = ViewState::default();
        let ticket = state.begin_search("q");
        state.complete_search(ticket, live(vec![category("Komunikacja", 8)]));

        assert_eq!(state.visible_count("Komunikacja"), 6);
        assert_eq!(state.show_more("Komunikacja"), Some(8));
        assert_eq!(state.show_more("Komunikacja"), Some(8));
        assert_eq!(state.show_more("Nieznana"), None);
    }

    #[test]
    fn test_visible_count_never_exceeds_small_category() {
        let mut state = ViewState::default();
        let ticket = state.begin_search("q");
        state.complete_search(ticket, live(vec![category("Technologia", 2)]));

        let snapshot = state.snapshot();
        let cat = &snapshot.categories[0];
        assert_eq!(cat.visible, 2);
        assert_eq!(cat.applications.len(), 2);
        assert!(!cat.has_more);
    }

    #[test]
    fn test_snapshot_slices_applications() {
        let mut state = ViewState::default();
        let ticket = state.begin_search("q");
        state.complete_search(ticket, live(vec![category("Komunikacja", 9)]));

        let snapshot = state.snapshot();
        let cat = &snapshot.categories[0];
        assert_eq!(cat.total, 9);
        assert_eq!(cat.visible, 6);
        assert!(cat.has_more);
        assert_eq!(cat.applications.last().unwrap().id, "Komunikacja-5");
        assert_eq!(snapshot.source, Some(RecommendationSource::Live));
    }

    #[test]
    fn test_snapshot_reflects_animations() {
        let mut state = ViewState::default();
        state.set_suggestions_visible(true);
        state.tick_rotator();
        state.tick_blinker();

        let snapshot = state.snapshot();
        assert!(snapshot.show_suggestions);
        assert_eq!(snapshot.placeholder, state.rotator().current());
        assert_eq!(state.rotator().index(), 1);
        assert!(!snapshot.show_cursor);
    }
}

//! Immutable pagination state, rebuilt on every transition

use serde::Serialize;
use smallvec::SmallVec;

use super::calculator::{compute, ellipsis_positions, summarize, PageEntry};

/// Snapshot of the paginator after a transition.
///
/// Never patched in place: a transition produces a new value with the page
/// sequence recomputed from scratch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    active_page: usize,
    total_pages: usize,
    context_size: i64,
    pages: Vec<PageEntry>,
    /// Bumped on every successful transition
    version: u64,
}

impl PaginationState {
    /// Initial state: first page active
    pub fn initial(total_pages: usize, context_size: i64) -> Self {
        let total_pages = total_pages.max(1);
        Self {
            active_page: 1,
            total_pages,
            context_size,
            pages: compute(total_pages, 1, context_size),
            version: 1,
        }
    }

    /// State with `page` active, or `None` when `page` is outside `1..=total_pages`
    pub fn with_active_page(&self, page: i64) -> Option<Self> {
        if page < 1 || page > self.total_pages as i64 {
            return None;
        }

        let active_page = page as usize;
        Some(Self {
            active_page,
            total_pages: self.total_pages,
            context_size: self.context_size,
            pages: compute(self.total_pages, active_page, self.context_size),
            version: self.version + 1,
        })
    }

    pub fn active_page(&self) -> usize {
        self.active_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn context_size(&self) -> i64 {
        self.context_size
    }

    pub fn pages(&self) -> &[PageEntry] {
        &self.pages
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn has_previous(&self) -> bool {
        self.active_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.active_page < self.total_pages
    }

    pub fn ellipsis_positions(&self) -> SmallVec<[usize; 2]> {
        ellipsis_positions(&self.pages)
    }

    /// Compact text form, e.g. `1 … 4 5 6 … 9`
    pub fn summary(&self) -> String {
        summarize(&self.pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::Visibility;

    #[test]
    fn test_initial_state() {
        let state = PaginationState::initial(9, 0);
        assert_eq!(state.active_page(), 1);
        assert_eq!(state.total_pages(), 9);
        assert_eq!(state.pages().len(), 9);
        assert_eq!(state.version(), 1);
        assert_eq!(state.summary(), "1 … 9");
        assert!(!state.has_previous());
        assert!(state.has_next());
    }

    #[test]
    fn test_initial_state_never_empty() {
        let state = PaginationState::initial(0, 0);
        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.pages()[0].visibility, Visibility::Show);
    }

    #[test]
    fn test_transition_rebuilds_pages() {
        let state = PaginationState::initial(9, 1);
        let next = state.with_active_page(5).unwrap();

        assert_eq!(next.active_page(), 5);
        assert_eq!(next.version(), 2);
        assert_eq!(next.summary(), "1 … 4 5 6 … 9");
        assert_eq!(next.ellipsis_positions().as_slice(), &[3, 7]);

        // Source state untouched
        assert_eq!(state.active_page(), 1);
        assert_eq!(state.summary(), "1 2 … 9");
    }

    #[test]
    fn test_out_of_range_transition() {
        let state = PaginationState::initial(9, 1);
        assert!(state.with_active_page(0).is_none());
        assert!(state.with_active_page(-3).is_none());
        assert!(state.with_active_page(10).is_none());
        assert!(state.with_active_page(9).is_some());
    }

    #[test]
    fn test_reselecting_same_page_is_a_transition() {
        let state = PaginationState::initial(3, 0);
        let again = state.with_active_page(1).unwrap();
        assert_eq!(again.pages(), state.pages());
        assert_eq!(again.version(), state.version() + 1);
    }
}

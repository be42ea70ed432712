//! MM-Paginator: the core of a pagination control
//!
//! This crate decides what page chrome to display, it never touches data:
//! - Window calculation (first, last, active page plus a context window,
//!   everything else collapsed into at most two ellipsis markers)
//! - An immutable pagination state rebuilt on every transition
//! - Observer notification of the active page
//! - Render-ready page strips and strip diffs for the view layer

pub mod config;
pub mod notify;
pub mod render;
pub mod wasm;
pub mod window;

use std::ops::Range;

use log::{debug, trace, warn};

// Re-export WASM types for direct use
pub use wasm::WasmPaginator;

// Re-export primary types
pub use config::{ConfigurationError, PaginatorConfig};
pub use notify::{ActivePageObserver, NoopObserver, PageLog};
pub use render::{PageStrip, RenderDiff, RenderPatch, StripItem, StripItemId};
pub use window::{compute, PageEntry, PaginationState, Visibility};

/// The paginator: validated configuration, current state and the observer
/// told about every new active page
#[derive(Debug)]
pub struct Paginator<O: ActivePageObserver = NoopObserver> {
    config: PaginatorConfig,
    state: PaginationState,
    observer: O,
}

impl<O: ActivePageObserver> Paginator<O> {
    /// Validate `config`, compute the first page and notify `observer`.
    ///
    /// On a rejected configuration nothing is computed and the observer is
    /// never called.
    pub fn initialize(
        config: PaginatorConfig,
        mut observer: O,
    ) -> Result<Self, ConfigurationError> {
        if let Err(err) = config.validate() {
            warn!("paginator configuration rejected: {}", err);
            return Err(err);
        }

        let state = PaginationState::initial(config.total_pages(), config.context_size);
        debug!(
            "paginator initialized: {} items, {} per page, {} pages",
            config.total_items,
            config.items_per_page,
            state.total_pages()
        );

        observer.on_active_page_changed(state.active_page());

        Ok(Self {
            config,
            state,
            observer,
        })
    }

    /// Make `page` the active page.
    ///
    /// Pages outside `1..=total_pages` are ignored: no state change, no
    /// notification. Returns whether the transition happened.
    pub fn select_page(&mut self, page: i64) -> bool {
        let Some(next) = self.state.with_active_page(page) else {
            trace!(
                "ignoring selection of page {} (valid range 1..={})",
                page,
                self.state.total_pages()
            );
            return false;
        };

        self.state = next;
        debug!(
            "active page {} of {} (version {})",
            self.state.active_page(),
            self.state.total_pages(),
            self.state.version()
        );

        self.observer.on_active_page_changed(self.state.active_page());
        true
    }

    /// "Previous" control: no-op on the first page
    pub fn select_previous(&mut self) -> bool {
        self.select_page(self.state.active_page() as i64 - 1)
    }

    /// "Next" control: no-op on the last page
    pub fn select_next(&mut self) -> bool {
        self.select_page(self.state.active_page() as i64 + 1)
    }

    pub fn config(&self) -> &PaginatorConfig {
        &self.config
    }

    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    pub fn active_page(&self) -> usize {
        self.state.active_page()
    }

    pub fn total_pages(&self) -> usize {
        self.state.total_pages()
    }

    pub fn pages(&self) -> &[PageEntry] {
        self.state.pages()
    }

    /// 0-based half-open range of the items on the active page
    pub fn item_range(&self) -> Range<usize> {
        // Saturate where usize is narrower than the configured counts (wasm32)
        let total = usize::try_from(self.config.total_items.max(0)).unwrap_or(usize::MAX);
        let per_page = usize::try_from(self.config.items_per_page.max(1)).unwrap_or(usize::MAX);
        let start = (self.state.active_page() - 1).saturating_mul(per_page).min(total);
        let end = start.saturating_add(per_page).min(total);
        start..end
    }

    /// Render-ready controls for the current state
    pub fn page_strip(&self) -> PageStrip {
        PageStrip::build(&self.state, &self.config)
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }
}

//! Page strip: render-ready list of paginator controls

use serde::Serialize;

use crate::config::PaginatorConfig;
use crate::window::{PaginationState, Visibility, ELLIPSIS};

/// Stable identity of a strip item across rebuilds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "camelCase")]
pub enum StripItemId {
    Previous,
    Page(usize),
    Ellipsis(usize),
    Next,
}

/// A control to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StripItem {
    /// "Previous page" control
    Previous {
        label: String,
        /// Page selected when clicked
        target: usize,
        enabled: bool,
    },
    /// Selectable page number
    Page { index: usize, active: bool },
    /// Non-interactive marker in place of a collapsed run starting or ending at `index`
    Ellipsis { index: usize },
    /// "Next page" control
    Next {
        label: String,
        target: usize,
        enabled: bool,
    },
}

impl StripItem {
    pub fn id(&self) -> StripItemId {
        match self {
            StripItem::Previous { .. } => StripItemId::Previous,
            StripItem::Page { index, .. } => StripItemId::Page(*index),
            StripItem::Ellipsis { index } => StripItemId::Ellipsis(*index),
            StripItem::Next { .. } => StripItemId::Next,
        }
    }

    /// Page selected when this item is clicked, if it is clickable
    pub fn click_target(&self) -> Option<usize> {
        match self {
            StripItem::Previous {
                target, enabled, ..
            }
            | StripItem::Next {
                target, enabled, ..
            } => enabled.then_some(*target),
            StripItem::Page { index, .. } => Some(*index),
            StripItem::Ellipsis { .. } => None,
        }
    }

    /// Text shown on the control
    pub fn label(&self) -> String {
        match self {
            StripItem::Previous { label, .. } | StripItem::Next { label, .. } => label.clone(),
            StripItem::Page { index, .. } => index.to_string(),
            StripItem::Ellipsis { .. } => ELLIPSIS.to_string(),
        }
    }
}

/// Complete strip for one pagination state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageStrip {
    pub version: u64,
    pub active_page: usize,
    pub total_pages: usize,
    pub items: Vec<StripItem>,
}

impl PageStrip {
    /// Build the strip: prev control, the shown pages and markers, next control
    pub fn build(state: &PaginationState, config: &PaginatorConfig) -> Self {
        let active = state.active_page();
        let mut items = Vec::with_capacity(state.pages().len() + 2);

        items.push(StripItem::Previous {
            label: config.prev_text.clone(),
            target: active.saturating_sub(1).max(1),
            enabled: state.has_previous(),
        });

        for page in state.pages() {
            match page.visibility {
                Visibility::Show => items.push(StripItem::Page {
                    index: page.index,
                    active: page.index == active,
                }),
                Visibility::Ellipsis => items.push(StripItem::Ellipsis { index: page.index }),
                Visibility::Hidden => {}
            }
        }

        items.push(StripItem::Next {
            label: config.next_text.clone(),
            target: (active + 1).min(state.total_pages()),
            enabled: state.has_next(),
        });

        Self {
            version: state.version(),
            active_page: active,
            total_pages: state.total_pages(),
            items,
        }
    }

    /// Labels of every item, prev/next included
    pub fn labels(&self) -> Vec<String> {
        self.items.iter().map(StripItem::label).collect()
    }

    /// Number of selectable page numbers
    pub fn page_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, StripItem::Page { .. }))
            .count()
    }
}

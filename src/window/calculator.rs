//! Page visibility: which page numbers to show, where to put an ellipsis

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Marker text for a collapsed run of pages
pub const ELLIPSIS: &str = "…";

/// How a single page is presented in the paginator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Visibility {
    /// Page number rendered as a selectable control
    Show,
    /// Non-interactive marker standing for a collapsed run of pages
    Ellipsis,
    /// Not rendered at all
    Hidden,
}

/// One page's label plus its computed visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEntry {
    /// 1-based page label
    pub index: usize,
    pub visibility: Visibility,
}

impl PageEntry {
    pub fn is_shown(&self) -> bool {
        self.visibility == Visibility::Show
    }

    pub fn is_ellipsis(&self) -> bool {
        self.visibility == Visibility::Ellipsis
    }
}

/// Classify every page `1..=total_pages`.
///
/// Expects `total_pages >= 1`, `1 <= active_page <= total_pages` and
/// `context_size >= -1`; callers validate first.
pub fn compute(total_pages: usize, active_page: usize, context_size: i64) -> Vec<PageEntry> {
    (1..=total_pages)
        .map(|index| PageEntry {
            index,
            visibility: classify(index, total_pages, active_page, context_size),
        })
        .collect()
}

/// Visibility of a single page.
///
/// Shown: first, last, active and the symmetric window around the active
/// page, plus page 2 / page `total - 1` when they are the only page between
/// an anchor and the window. The pages just outside the window edges become
/// the ellipsis markers; everything else is hidden.
pub fn classify(
    index: usize,
    total_pages: usize,
    active_page: usize,
    context_size: i64,
) -> Visibility {
    let i = index as i64;
    let total = total_pages as i64;
    let active = active_page as i64;
    // A window of `total` pages already covers everything; keeps the sums below in range
    let context_size = context_size.min(total);

    let anchor = i == 1 || i == total || i == active;
    let in_window = active - context_size <= i && i <= active + context_size;
    let closes_right_gap = i == total - 1 && total - active == context_size + 2;
    let closes_left_gap = i == 2 && active - context_size == 3;

    if anchor || in_window || closes_right_gap || closes_left_gap {
        Visibility::Show
    } else if i == active + context_size + 1 || i == active - context_size - 1 {
        Visibility::Ellipsis
    } else {
        Visibility::Hidden
    }
}

/// Positions of the ellipsis markers, in page order (never more than two)
pub fn ellipsis_positions(pages: &[PageEntry]) -> SmallVec<[usize; 2]> {
    pages
        .iter()
        .filter(|page| page.is_ellipsis())
        .map(|page| page.index)
        .collect()
}

/// Space separated summary, e.g. `1 … 4 5 6 … 9`
pub fn summarize(pages: &[PageEntry]) -> String {
    let labels: Vec<String> = pages
        .iter()
        .filter_map(|page| match page.visibility {
            Visibility::Show => Some(page.index.to_string()),
            Visibility::Ellipsis => Some(ELLIPSIS.to_string()),
            Visibility::Hidden => None,
        })
        .collect();
    labels.join(" ")
}

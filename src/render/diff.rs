//! Strip diff protocol for incremental re-rendering

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

use crate::render::{PageStrip, StripItem, StripItemId};

/// A single patch operation for the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum RenderPatch {
    /// Remove controls that are no longer present
    Remove { item_ids: Vec<StripItemId> },
    /// Insert new controls; `position` is the index in the new strip
    Insert { position: usize, item: StripItem },
    /// Replace a control whose content changed (label, target, enabled state)
    Update { item: StripItem },
    /// Move the active highlight
    MoveActive { from: usize, to: usize },
}

/// Patches that turn one strip into the next
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderDiff {
    pub version: u64,
    pub patches: Vec<RenderPatch>,
}

impl RenderDiff {
    pub fn new(version: u64) -> Self {
        Self {
            version,
            patches: Vec::new(),
        }
    }

    /// Compute the patches between two strips
    pub fn between(previous: &PageStrip, current: &PageStrip) -> Self {
        let mut diff = RenderDiff::new(current.version);

        let prev_items: FxHashMap<StripItemId, &StripItem> =
            previous.items.iter().map(|item| (item.id(), item)).collect();
        let curr_ids: FxHashSet<StripItemId> = current.items.iter().map(StripItem::id).collect();

        let removed: Vec<StripItemId> = previous
            .items
            .iter()
            .map(StripItem::id)
            .filter(|id| !curr_ids.contains(id))
            .collect();
        if !removed.is_empty() {
            diff.add_patch(RenderPatch::Remove { item_ids: removed });
        }

        for (position, item) in current.items.iter().enumerate() {
            match prev_items.get(&item.id()) {
                None => diff.add_patch(RenderPatch::Insert {
                    position,
                    item: item.clone(),
                }),
                // Active highlight is reported once via MoveActive
                Some(prev) if !same_ignoring_active(prev, item) => {
                    diff.add_patch(RenderPatch::Update { item: item.clone() })
                }
                Some(_) => {}
            }
        }

        if previous.active_page != current.active_page {
            diff.add_patch(RenderPatch::MoveActive {
                from: previous.active_page,
                to: current.active_page,
            });
        }

        diff
    }

    pub fn add_patch(&mut self, patch: RenderPatch) {
        self.patches.push(patch);
    }

    pub fn has_patches(&self) -> bool {
        !self.patches.is_empty()
    }

    pub fn patch_count(&self) -> usize {
        self.patches.len()
    }
}

fn same_ignoring_active(a: &StripItem, b: &StripItem) -> bool {
    match (a, b) {
        (StripItem::Page { index: x, .. }, StripItem::Page { index: y, .. }) => x == y,
        _ => a == b,
    }
}

//! Flat buffer protocol for the WASM bridge
//!
//! Binary format of a page strip, one `u32` array:
//!
//! ```text
//! Header:
//! [0]     MAGIC (0x4D4D5047 = "MMPG" for validation)
//! [1]     SCHEMA_VERSION (protocol version, currently 1)
//! [2]     version_lo (state version)
//! [3]     version_hi (state version)
//! [4]     active_page (0 when no controls are rendered)
//! [5]     total_pages (0 when no controls are rendered)
//! [6]     item_count
//! [7]     flags: bit0=prev enabled, bit1=next enabled, bit2=configuration warning
//! [8..]   item data...
//!
//! Per-item: [kind, page]
//!   kind: one of the ITEM_* opcodes
//!   page: page number, click target for prev/next
//! ```

use crate::render::{PageStrip, StripItem};

/// Magic number for format validation: "MMPG" (MM PaGinator)
pub const MAGIC: u32 = 0x4D4D5047;

/// Schema version for protocol compatibility checking
pub const SCHEMA_VERSION: u32 = 1;

/// Header size in u32 elements
pub const HEADER_SIZE: usize = 8;

/// Number of u32 values per strip item
pub const U32_PER_ITEM: usize = 2;

/// Opcodes for strip items
pub const ITEM_PREVIOUS: u32 = 0;
pub const ITEM_PAGE: u32 = 1;
pub const ITEM_ACTIVE_PAGE: u32 = 2;
pub const ITEM_ELLIPSIS: u32 = 3;
pub const ITEM_NEXT: u32 = 4;

/// Flags bitmask
pub const FLAG_PREV_ENABLED: u32 = 0b001;
pub const FLAG_NEXT_ENABLED: u32 = 0b010;
pub const FLAG_WARNING: u32 = 0b100;

/// Strip buffer, reused between renders
#[derive(Debug, Default)]
pub struct StripBuffer {
    pub u32_data: Vec<u32>,
}

impl StripBuffer {
    pub fn new() -> Self {
        Self {
            u32_data: Vec::with_capacity(HEADER_SIZE + 16 * U32_PER_ITEM),
        }
    }

    pub fn clear(&mut self) {
        self.u32_data.clear();
    }

    /// Encode a full strip, replacing previous content
    pub fn write_strip(&mut self, strip: &PageStrip) {
        self.clear();
        self.u32_data
            .reserve(HEADER_SIZE + strip.items.len() * U32_PER_ITEM);

        let mut flags = 0;
        for item in &strip.items {
            match item {
                StripItem::Previous { enabled: true, .. } => flags |= FLAG_PREV_ENABLED,
                StripItem::Next { enabled: true, .. } => flags |= FLAG_NEXT_ENABLED,
                _ => {}
            }
        }

        self.write_header(
            strip.version,
            strip.active_page as u32,
            strip.total_pages as u32,
            strip.items.len() as u32,
            flags,
        );

        for item in &strip.items {
            let (kind, page) = item_to_opcode(item);
            self.u32_data.push(kind);
            self.u32_data.push(page);
        }
    }

    /// Encode the "no controls" state shown alongside a configuration warning
    pub fn write_warning(&mut self) {
        self.clear();
        self.write_header(0, 0, 0, 0, FLAG_WARNING);
    }

    fn write_header(
        &mut self,
        version: u64,
        active_page: u32,
        total_pages: u32,
        item_count: u32,
        flags: u32,
    ) {
        self.u32_data.push(MAGIC);                          // [0] magic number
        self.u32_data.push(SCHEMA_VERSION);                 // [1] schema version
        self.u32_data.push((version & 0xFFFF_FFFF) as u32); // [2] version_lo
        self.u32_data.push((version >> 32) as u32);         // [3] version_hi
        self.u32_data.push(active_page);                    // [4] active page
        self.u32_data.push(total_pages);                    // [5] total pages
        self.u32_data.push(item_count);                     // [6] item count
        self.u32_data.push(flags);                          // [7] flags
    }

    pub fn item_count(&self) -> usize {
        self.u32_data
            .len()
            .saturating_sub(HEADER_SIZE)
            / U32_PER_ITEM
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.u32_data
    }
}

/// Convert a strip item to its `[kind, page]` pair
pub fn item_to_opcode(item: &StripItem) -> (u32, u32) {
    match item {
        StripItem::Previous { target, .. } => (ITEM_PREVIOUS, *target as u32),
        StripItem::Page { index, active: true } => (ITEM_ACTIVE_PAGE, *index as u32),
        StripItem::Page { index, active: false } => (ITEM_PAGE, *index as u32),
        StripItem::Ellipsis { index } => (ITEM_ELLIPSIS, *index as u32),
        StripItem::Next { target, .. } => (ITEM_NEXT, *target as u32),
    }
}

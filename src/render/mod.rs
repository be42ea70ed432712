//! Render output: page strip and diff protocol

mod diff;
mod display;

pub use diff::{RenderDiff, RenderPatch};
pub use display::{PageStrip, StripItem, StripItemId};

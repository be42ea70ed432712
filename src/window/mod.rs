//! Window calculator and the pagination state it produces

mod calculator;
mod state;

pub use calculator::{
    classify, compute, ellipsis_positions, summarize, PageEntry, Visibility, ELLIPSIS,
};
pub use state::PaginationState;

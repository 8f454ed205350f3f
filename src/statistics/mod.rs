//! Statistical summaries and axis reductions of field grids
//!
//! # Organization
//!
//! - [`operations`]: statistic kinds, grid axes and the reduction trait
//! - [`parallel`]: Rayon-backed implementations

pub mod operations;
pub mod parallel;

pub use operations::{FieldReduction, FieldSummary, GridAxis, StatOperation};
pub use parallel::{
    parallel_max_axis, parallel_mean_axis, parallel_min_axis, parallel_sum_axis, summarize,
};

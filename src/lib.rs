//! gaussfield: dense 2D scalar fields over coordinate grids
//!
//! gaussfield evaluates a pure kernel (by default a 2D Gaussian density) at every
//! point of a regular grid. The grid can be computed in one pass, or split into
//! four quadrants at the origin that are evaluated concurrently on a bounded
//! worker pool and stitched back together in their original layout.
//!
//! ## Key Features
//!
//! - **Quadrant Parallelism**: Independent quadrant tasks on a Rayon pool sized by a worker count
//! - **Exact Reassembly**: Stitched grids are identical to a single full-domain pass
//! - **Pluggable Kernels**: Any `Send + Sync` pure function through the [`Kernel`] trait
//! - **Statistics**: Min/max/mean, Riemann integral, peak location and axis profiles
//! - **Hand-off Outputs**: NetCDF files and JSON metadata for external renderers
//!
//! ## Module Organization
//!
//! - [`axis`]: coordinate axes and their split at zero
//! - [`domain`]: validated bounds and quadrants
//! - [`kernel`]: the kernel trait and the Gaussian kernel
//! - [`grid`]: field grids and their concatenation
//! - [`evaluator`]: serial and quadrant-parallel evaluation strategies
//! - [`statistics`]: summaries and axis reductions
//! - [`metadata`]: renderer-facing field description
//! - [`netcdf_io`]: NetCDF output
//! - [`parallel`]: worker pool configuration
//! - [`errors`]: centralized error handling
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gaussfield::prelude::*;
//!
//! // One pass over the full domain
//! let serial = gaussfield::evaluate_field(-2.0, 2.0, -2.0, 2.0, 0.01, 1.0).unwrap();
//!
//! // Four quadrant tasks on two workers, stitched into the same grid
//! let stitched =
//!     gaussfield::evaluate_field_partitioned(-2.0, 2.0, -2.0, 2.0, 0.01, 1.0, 2).unwrap();
//! assert_eq!(serial, stitched);
//!
//! let summary = gaussfield::summarize(&stitched).unwrap();
//! summary.print("gaussian2d");
//! ```

pub mod axis;
pub mod domain;
pub mod errors;
pub mod evaluator;
pub mod grid;
pub mod kernel;
pub mod metadata;
pub mod netcdf_io;
pub mod parallel;
pub mod statistics;

pub use axis::*;
pub use domain::*;
pub use errors::*;
pub use evaluator::*;
pub use grid::*;
pub use kernel::*;
pub use metadata::*;
pub use netcdf_io::*;
pub use parallel::*;
pub use statistics::*;

pub mod prelude {
    //! Commonly used imports for convenience
    pub use crate::axis::Axis;
    pub use crate::domain::{Domain, Quadrant};
    pub use crate::errors::{FieldError, Result};
    pub use crate::evaluator::{FieldEvaluator, FieldOutput, FieldRun, QuadrantFields, Strategy};
    pub use crate::grid::FieldGrid;
    pub use crate::kernel::{FnKernel, GaussianKernel, Kernel};
    pub use crate::metadata::FieldMetadata;
    pub use crate::netcdf_io::NetCDFWriter;
    pub use crate::parallel::ParallelConfig;
    pub use crate::statistics::{FieldReduction, GridAxis, StatOperation};
}

//! Field evaluation strategies
//!
//! # Organization
//!
//! - [`serial`]: one pass over the full domain
//! - [`partitioned`]: quadrant tasks on a bounded worker pool, with or without
//!   stitching the quadrants back together
//!
//! [`FieldEvaluator`] bundles a domain, step, kernel and pool configuration and
//! runs any [`Strategy`], timing the run.

pub mod partitioned;
pub mod serial;

pub use partitioned::{
    evaluate_field_partitioned, evaluate_field_partitioned_with, evaluate_quadrants,
    evaluate_quadrants_with, partition_axes, QuadrantFields, QuadrantTask,
};
pub use serial::{build_axes, evaluate_field, evaluate_field_with, evaluate_on_axes};

use crate::domain::Domain;
use crate::errors::{FieldError, Result};
use crate::grid::FieldGrid;
use crate::kernel::Kernel;
use crate::parallel::ParallelConfig;
use log::info;
use std::time::{Duration, Instant};

/// How a field is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Strategy {
    /// One pass over the full domain on the calling thread
    Serial,
    /// Four concurrent quadrant tasks, returned separately
    Embarrassing,
    /// Four concurrent quadrant tasks stitched into one grid
    Partitioned,
}

impl Strategy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Serial => "serial",
            Self::Embarrassing => "embarrassing",
            Self::Partitioned => "partitioned",
        }
    }

    /// Whether the strategy dispatches quadrant tasks
    #[must_use]
    pub const fn is_parallel(self) -> bool {
        !matches!(self, Self::Serial)
    }
}

/// Output of a strategy: either one grid or the unstitched quadrants
#[derive(Debug, Clone)]
pub enum FieldOutput {
    Grid(FieldGrid),
    Quadrants(QuadrantFields),
}

/// Result of [`FieldEvaluator::run`]
#[derive(Debug, Clone)]
pub struct FieldRun {
    pub strategy: Strategy,
    pub output: FieldOutput,
    pub elapsed: Duration,
}

impl FieldRun {
    /// The full-domain grid, stitching quadrants if needed
    ///
    /// # Errors
    ///
    /// Returns an error if quadrant grids cannot be stitched.
    pub fn into_grid(self) -> Result<FieldGrid> {
        match self.output {
            FieldOutput::Grid(grid) => Ok(grid),
            FieldOutput::Quadrants(quadrants) => quadrants.stitch(),
        }
    }
}

/// A validated evaluation job
#[derive(Debug, Clone)]
pub struct FieldEvaluator<K> {
    domain: Domain,
    step: f64,
    kernel: K,
    parallel: ParallelConfig,
}

impl<K: Kernel> FieldEvaluator<K> {
    /// # Errors
    ///
    /// Returns a configuration error if `step` is not a positive finite number.
    pub fn new(domain: Domain, step: f64, kernel: K) -> Result<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(FieldError::config(format!(
                "step must be positive, got {step}"
            )));
        }
        Ok(Self {
            domain,
            step,
            kernel,
            parallel: ParallelConfig::default(),
        })
    }

    #[must_use]
    pub fn with_parallel(mut self, parallel: ParallelConfig) -> Self {
        self.parallel = parallel;
        self
    }

    #[must_use]
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    #[must_use]
    pub fn parallel(&self) -> &ParallelConfig {
        &self.parallel
    }

    /// Compute the field with `strategy`
    ///
    /// # Errors
    ///
    /// Returns configuration errors before any work starts and worker failures
    /// for the whole run.
    pub fn run(&self, strategy: Strategy) -> Result<FieldRun> {
        let start = Instant::now();
        let output = match strategy {
            Strategy::Serial => {
                FieldOutput::Grid(evaluate_field_with(&self.domain, self.step, &self.kernel)?)
            }
            Strategy::Embarrassing => FieldOutput::Quadrants(evaluate_quadrants_with(
                &self.domain,
                self.step,
                &self.kernel,
                &self.parallel,
            )?),
            Strategy::Partitioned => FieldOutput::Grid(evaluate_field_partitioned_with(
                &self.domain,
                self.step,
                &self.kernel,
                &self.parallel,
            )?),
        };
        let elapsed = start.elapsed();
        info!(
            "{} evaluation of {} finished in {:.3}s",
            strategy.as_str(),
            self.kernel.name(),
            elapsed.as_secs_f64()
        );

        Ok(FieldRun {
            strategy,
            output,
            elapsed,
        })
    }
}

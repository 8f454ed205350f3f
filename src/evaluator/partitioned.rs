//! Quadrant-parallel field evaluation
//!
//! The full-domain axes are split at zero, each of the four quadrants is
//! evaluated as an independent task on a bounded Rayon pool, and the results are
//! collected by quadrant label. Stitching places bottom-left next to
//! bottom-right and top-left next to top-right along X, then stacks the bottom
//! row under the top row along Y.

use crate::axis::Axis;
use crate::domain::{Domain, Quadrant};
use crate::errors::{FieldError, Result};
use crate::evaluator::serial::{build_axes, evaluate_on_axes};
use crate::grid::FieldGrid;
use crate::kernel::{GaussianKernel, Kernel};
use crate::parallel::ParallelConfig;
use log::{debug, info};
use std::any::Any;
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;

/// One unit of work: a quadrant label and the sub-axes it covers
#[derive(Debug, Clone)]
pub struct QuadrantTask {
    pub quadrant: Quadrant,
    pub x: Axis,
    pub y: Axis,
}

impl QuadrantTask {
    /// Evaluate this quadrant's cells
    ///
    /// # Errors
    ///
    /// Returns an error if the kernel output does not match the task's axes.
    pub fn run<K>(self, kernel: &K) -> Result<FieldGrid>
    where
        K: Kernel + ?Sized,
    {
        let values = evaluate_on_axes(&self.x, &self.y, kernel);
        FieldGrid::new(self.x, self.y, values)
    }

    /// Number of cells this task writes
    #[must_use]
    pub fn cells(&self) -> usize {
        self.x.len() * self.y.len()
    }
}

/// Cut the full-domain axes into the four quadrant tasks
#[must_use]
pub fn partition_axes(x: &Axis, y: &Axis) -> Vec<QuadrantTask> {
    let (x_left, x_right) = x.split_at_zero();
    let (y_bottom, y_top) = y.split_at_zero();

    Quadrant::ALL
        .iter()
        .map(|&quadrant| QuadrantTask {
            quadrant,
            x: if quadrant.is_left() {
                x_left.clone()
            } else {
                x_right.clone()
            },
            y: if quadrant.is_top() {
                y_top.clone()
            } else {
                y_bottom.clone()
            },
        })
        .collect()
}

/// The four quadrant grids of one evaluation, before stitching
#[derive(Debug, Clone)]
pub struct QuadrantFields {
    domain: Domain,
    grids: HashMap<Quadrant, FieldGrid>,
}

impl QuadrantFields {
    fn from_results(domain: Domain, mut results: HashMap<Quadrant, FieldGrid>) -> Result<Self> {
        let mut grids = HashMap::with_capacity(Quadrant::ALL.len());
        for quadrant in Quadrant::ALL {
            let grid = results
                .remove(&quadrant)
                .ok_or_else(|| FieldError::WorkerFailure {
                    quadrant: quadrant.to_string(),
                    message: "no result was delivered".to_string(),
                })?;
            grids.insert(quadrant, grid);
        }
        Ok(Self { domain, grids })
    }

    #[must_use]
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Grid computed for `quadrant`
    #[must_use]
    pub fn get(&self, quadrant: Quadrant) -> &FieldGrid {
        &self.grids[&quadrant]
    }

    /// Quadrant grids in [`Quadrant::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (Quadrant, &FieldGrid)> + '_ {
        Quadrant::ALL.into_iter().map(move |q| (q, &self.grids[&q]))
    }

    /// Reassemble the full-domain grid
    ///
    /// # Errors
    ///
    /// Returns an error if the quadrant grids do not tile the domain.
    pub fn stitch(&self) -> Result<FieldGrid> {
        let bottom = self
            .get(Quadrant::BottomLeft)
            .concat_x(self.get(Quadrant::BottomRight))?;
        let top = self
            .get(Quadrant::TopLeft)
            .concat_x(self.get(Quadrant::TopRight))?;
        bottom.concat_y(&top)
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "worker panicked".to_string()
    }
}

/// Run the four quadrant tasks on a pool of `parallel.worker_count()` threads
///
/// # Errors
///
/// Configuration errors are returned before any task is dispatched. A task
/// that panics fails the whole call with [`FieldError::WorkerFailure`].
pub fn evaluate_quadrants_with<K>(
    domain: &Domain,
    step: f64,
    kernel: &K,
    parallel: &ParallelConfig,
) -> Result<QuadrantFields>
where
    K: Kernel + ?Sized,
{
    domain.require_origin()?;
    let (x, y) = build_axes(domain, step)?;
    let pool = parallel.build_pool()?;
    let tasks = partition_axes(&x, &y);

    info!(
        "⚡ Dispatching {} quadrant tasks of {} on {} workers",
        tasks.len(),
        kernel.name(),
        pool.current_num_threads()
    );

    let (tx, rx) = mpsc::channel();
    pool.scope(|scope| {
        for task in tasks {
            let tx = tx.clone();
            scope.spawn(move |_| {
                let quadrant = task.quadrant;
                debug!("Quadrant {} started ({} cells)", quadrant, task.cells());
                let outcome = panic::catch_unwind(AssertUnwindSafe(|| task.run(kernel)))
                    .map_err(panic_message);
                // The receiver outlives the scope, so a send cannot fail here.
                let _ = tx.send((quadrant, outcome));
            });
        }
    });
    drop(tx);

    let mut results = HashMap::with_capacity(Quadrant::ALL.len());
    for (quadrant, outcome) in rx {
        match outcome {
            Ok(Ok(grid)) => {
                debug!("Quadrant {} finished with shape {:?}", quadrant, grid.shape());
                results.insert(quadrant, grid);
            }
            Ok(Err(e)) => {
                return Err(FieldError::WorkerFailure {
                    quadrant: quadrant.to_string(),
                    message: e.to_string(),
                })
            }
            Err(message) => {
                return Err(FieldError::WorkerFailure {
                    quadrant: quadrant.to_string(),
                    message,
                })
            }
        }
    }

    QuadrantFields::from_results(*domain, results)
}

/// Evaluate any kernel quadrant by quadrant and stitch the full grid
///
/// # Errors
///
/// See [`evaluate_quadrants_with`].
pub fn evaluate_field_partitioned_with<K>(
    domain: &Domain,
    step: f64,
    kernel: &K,
    parallel: &ParallelConfig,
) -> Result<FieldGrid>
where
    K: Kernel + ?Sized,
{
    evaluate_quadrants_with(domain, step, kernel, parallel)?.stitch()
}

/// Evaluate the 2D Gaussian density per quadrant without stitching
///
/// # Errors
///
/// See [`evaluate_quadrants_with`].
pub fn evaluate_quadrants(
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
    step: f64,
    sigma: f64,
    worker_count: usize,
) -> Result<QuadrantFields> {
    let domain = Domain::new(xmin, xmax, ymin, ymax)?;
    let kernel = GaussianKernel::new(sigma)?;
    evaluate_quadrants_with(
        &domain,
        step,
        &kernel,
        &ParallelConfig::with_threads(worker_count),
    )
}

/// Evaluate the 2D Gaussian density with `worker_count` quadrant workers
///
/// Produces the same grid as
/// [`evaluate_field`](crate::evaluator::serial::evaluate_field) over the
/// full domain.
///
/// # Errors
///
/// See [`evaluate_quadrants_with`].
pub fn evaluate_field_partitioned(
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
    step: f64,
    sigma: f64,
    worker_count: usize,
) -> Result<FieldGrid> {
    evaluate_quadrants(xmin, xmax, ymin, ymax, step, sigma, worker_count)?.stitch()
}

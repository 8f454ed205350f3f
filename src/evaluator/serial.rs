//! Single-threaded field evaluation over a full domain

use crate::axis::{Axis, MAX_SAMPLES};
use crate::domain::Domain;
use crate::errors::{FieldError, Result};
use crate::grid::FieldGrid;
use crate::kernel::{GaussianKernel, Kernel};
use log::debug;
use ndarray::Array2;

/// Discretize both ranges of `domain` at `step`
///
/// # Errors
///
/// Returns an error if the step is not positive, an axis would be empty, or
/// the grid would hold more than [`MAX_SAMPLES`] cells.
pub fn build_axes(domain: &Domain, step: f64) -> Result<(Axis, Axis)> {
    // Checked before the axes allocate their samples
    let nx = Axis::sample_count(domain.xmin(), domain.xmax(), step);
    let ny = Axis::sample_count(domain.ymin(), domain.ymax(), step);
    if nx.checked_mul(ny).map_or(true, |cells| cells > MAX_SAMPLES) {
        return Err(FieldError::config(format!(
            "step {step} is too small for a grid over {domain}"
        )));
    }

    let x = Axis::new("x", domain.xmin(), domain.xmax(), step)?;
    let y = Axis::new("y", domain.ymin(), domain.ymax(), step)?;
    Ok((x, y))
}

/// Evaluate `kernel` at every `(x[i], y[j])`, producing an `x.len() × y.len()` array
///
/// Either axis may be empty, in which case the result has no cells.
pub fn evaluate_on_axes<K>(x: &Axis, y: &Axis, kernel: &K) -> Array2<f64>
where
    K: Kernel + ?Sized,
{
    Array2::from_shape_fn((x.len(), y.len()), |(i, j)| {
        kernel.evaluate(x.sample(i), y.sample(j))
    })
}

/// Evaluate any kernel over `domain` in one pass
///
/// # Errors
///
/// Returns an error if the step is invalid or an axis would be empty.
pub fn evaluate_field_with<K>(domain: &Domain, step: f64, kernel: &K) -> Result<FieldGrid>
where
    K: Kernel + ?Sized,
{
    let (x, y) = build_axes(domain, step)?;
    debug!(
        "Evaluating {} over {} ({} × {} samples)",
        kernel.name(),
        domain,
        x.len(),
        y.len()
    );
    let values = evaluate_on_axes(&x, &y, kernel);
    FieldGrid::new(x, y, values)
}

/// Evaluate the 2D Gaussian density over `[xmin, xmax) × [ymin, ymax)`
///
/// # Errors
///
/// Returns a configuration error for inverted bounds, a non-positive step or
/// sigma, or an axis with no samples.
pub fn evaluate_field(
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
    step: f64,
    sigma: f64,
) -> Result<FieldGrid> {
    let domain = Domain::new(xmin, xmax, ymin, ymax)?;
    let kernel = GaussianKernel::new(sigma)?;
    evaluate_field_with(&domain, step, &kernel)
}

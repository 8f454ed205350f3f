//! Parallel computation implementations for grid statistics

use super::operations::{FieldSummary, GridAxis};
use crate::errors::{FieldError, Result};
use crate::grid::FieldGrid;
use ndarray::parallel::prelude::*;
use ndarray::{Array1, Array2, Axis};

/// Apply `reduce` to every lane along `axis` in parallel
fn reduce_lanes<F>(data: &Array2<f64>, axis: GridAxis, reduce: F) -> Array1<f64>
where
    F: Fn(ndarray::ArrayView1<'_, f64>) -> f64 + Send + Sync,
{
    // Each lane runs along `axis`, so iterate over the other dimension.
    let other = Axis(1 - axis.index());
    let result: Vec<f64> = data
        .axis_iter(other)
        .into_par_iter()
        .map(|lane| reduce(lane))
        .collect();
    Array1::from_vec(result)
}

/// Mean along an axis; NaN for lanes with no finite values
pub fn parallel_mean_axis(data: &Array2<f64>, axis: GridAxis) -> Array1<f64> {
    reduce_lanes(data, axis, |lane| {
        let (sum, count) = lane
            .iter()
            .filter(|v| v.is_finite())
            .fold((0.0_f64, 0_usize), |(s, c), &v| (s + v, c + 1));
        if count > 0 {
            #[allow(clippy::cast_precision_loss)]
            {
                sum / count as f64
            }
        } else {
            f64::NAN
        }
    })
}

/// Sum along an axis, skipping non-finite values
pub fn parallel_sum_axis(data: &Array2<f64>, axis: GridAxis) -> Array1<f64> {
    reduce_lanes(data, axis, |lane| {
        lane.iter().filter(|v| v.is_finite()).sum::<f64>()
    })
}

/// Minimum along an axis; NaN for lanes with no finite values
pub fn parallel_min_axis(data: &Array2<f64>, axis: GridAxis) -> Array1<f64> {
    reduce_lanes(data, axis, |lane| {
        let min = lane
            .iter()
            .filter(|v| v.is_finite())
            .fold(f64::INFINITY, |acc, &v| acc.min(v));
        if min == f64::INFINITY {
            f64::NAN
        } else {
            min
        }
    })
}

/// Maximum along an axis; NaN for lanes with no finite values
pub fn parallel_max_axis(data: &Array2<f64>, axis: GridAxis) -> Array1<f64> {
    reduce_lanes(data, axis, |lane| {
        let max = lane
            .iter()
            .filter(|v| v.is_finite())
            .fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));
        if max == f64::NEG_INFINITY {
            f64::NAN
        } else {
            max
        }
    })
}

/// Compute min/max/mean/sum, the Riemann integral and the peak location
///
/// # Errors
///
/// Returns an error if the grid has no cells.
pub fn summarize(grid: &FieldGrid) -> Result<FieldSummary> {
    let values = grid.values();
    if values.is_empty() {
        return Err(FieldError::StatisticsError(
            "cannot summarize an empty grid".to_string(),
        ));
    }

    let min = values.par_iter().copied().reduce(|| f64::INFINITY, f64::min);
    let max = values
        .par_iter()
        .copied()
        .reduce(|| f64::NEG_INFINITY, f64::max);
    let sum: f64 = values.par_iter().copied().sum();
    let cells = values.len();

    let (peak_index, _) = values
        .indexed_iter()
        .fold(((0, 0), f64::NEG_INFINITY), |best, (idx, &v)| {
            if v > best.1 {
                (idx, v)
            } else {
                best
            }
        });

    let x = grid.x_axis();
    let y = grid.y_axis();

    #[allow(clippy::cast_precision_loss)]
    Ok(FieldSummary {
        cells,
        min,
        max,
        mean: sum / cells as f64,
        sum,
        integral: sum * x.step() * y.step(),
        peak_index,
        peak: (x.sample(peak_index.0), y.sample(peak_index.1)),
    })
}

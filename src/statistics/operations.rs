//! Core statistical operations and traits
//!
//! This module defines the fundamental types for summarizing a field grid and
//! for reducing it along one of its axes.

use crate::grid::FieldGrid;
use ndarray::Array1;

/// Supported statistical operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatOperation {
    /// Arithmetic mean
    Mean,
    /// Sum of values
    Sum,
    /// Minimum value
    Min,
    /// Maximum value
    Max,
}

impl StatOperation {
    /// Get the string representation of the operation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::Sum => "sum",
            Self::Min => "minimum",
            Self::Max => "maximum",
        }
    }
}

/// Grid axis a reduction runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAxis {
    X,
    Y,
}

impl GridAxis {
    /// Array dimension of this axis (rows follow X, columns follow Y)
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
        }
    }
}

/// Quick statistics over every cell of a grid
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSummary {
    pub cells: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub sum: f64,
    /// Riemann sum `Σ f · Δx · Δy`
    pub integral: f64,
    /// Index of the largest value
    pub peak_index: (usize, usize),
    /// Coordinate of the largest value
    pub peak: (f64, f64),
}

impl FieldSummary {
    /// Print the summary in the terminal report format
    pub fn print(&self, name: &str) {
        println!("\n Summary for Field: {}", name);
        println!("================================");
        println!("   Cells: {}", self.cells);
        println!("   Min: {:.6e}", self.min);
        println!("   Max: {:.6e}", self.max);
        println!("   Mean: {:.6e}", self.mean);
        println!("   Integral: {:.6}", self.integral);
        println!(
            "   Peak: ({:.4}, {:.4}) at index {:?}",
            self.peak.0, self.peak.1, self.peak_index
        );
    }
}

/// Trait for grids that can be reduced along an axis
pub trait FieldReduction {
    /// Collapse `axis`, leaving one value per sample of the other axis
    fn reduce_along(&self, axis: GridAxis, operation: StatOperation) -> Array1<f64>;
}

impl FieldReduction for FieldGrid {
    fn reduce_along(&self, axis: GridAxis, operation: StatOperation) -> Array1<f64> {
        match operation {
            StatOperation::Mean => super::parallel::parallel_mean_axis(self.values(), axis),
            StatOperation::Sum => super::parallel::parallel_sum_axis(self.values(), axis),
            StatOperation::Min => super::parallel::parallel_min_axis(self.values(), axis),
            StatOperation::Max => super::parallel::parallel_max_axis(self.values(), axis),
        }
    }
}

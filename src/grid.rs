//! Dense field grids
//!
//! A [`FieldGrid`] stores kernel values indexed by `(x position, y position)`
//! together with the axes it was evaluated on. Rows follow the X axis and
//! columns follow the Y axis.

use crate::axis::Axis;
use crate::errors::{FieldError, Result};
use ndarray::{concatenate, Array2, Axis as NdAxis};

/// Kernel values over the product of two axes
#[derive(Debug, Clone, PartialEq)]
pub struct FieldGrid {
    x: Axis,
    y: Axis,
    values: Array2<f64>,
}

impl FieldGrid {
    /// # Errors
    ///
    /// Returns an error if the shape of `values` is not `(x.len(), y.len())`.
    pub fn new(x: Axis, y: Axis, values: Array2<f64>) -> Result<Self> {
        if values.dim() != (x.len(), y.len()) {
            return Err(FieldError::incompatible_shape());
        }
        Ok(Self { x, y, values })
    }

    #[must_use]
    pub fn x_axis(&self) -> &Axis {
        &self.x
    }

    #[must_use]
    pub fn y_axis(&self) -> &Axis {
        &self.y
    }

    #[must_use]
    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    #[must_use]
    pub fn into_values(self) -> Array2<f64> {
        self.values
    }

    /// `(number of X samples, number of Y samples)`
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn value_at(&self, i: usize, j: usize) -> Option<f64> {
        self.values.get((i, j)).copied()
    }

    /// `(xmin, xmax, ymin, ymax)` the axes were built from
    #[must_use]
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (self.x.lower(), self.x.upper(), self.y.lower(), self.y.upper())
    }

    /// Place `right` after `self` along the X axis
    ///
    /// Both grids must share the same Y samples and `right` must continue the
    /// X axis of `self`.
    ///
    /// # Errors
    ///
    /// Returns an error if the grids are not adjacent along X.
    pub fn concat_x(&self, right: &FieldGrid) -> Result<FieldGrid> {
        if self.y != right.y {
            return Err(FieldError::incompatible_shape());
        }
        let x = self.x.join(&right.x)?;
        let values = concatenate(NdAxis(0), &[self.values.view(), right.values.view()])?;
        FieldGrid::new(x, self.y.clone(), values)
    }

    /// Place `top` after `self` along the Y axis
    ///
    /// # Errors
    ///
    /// Returns an error if the grids are not adjacent along Y.
    pub fn concat_y(&self, top: &FieldGrid) -> Result<FieldGrid> {
        if self.x != top.x {
            return Err(FieldError::incompatible_shape());
        }
        let y = self.y.join(&top.y)?;
        let values = concatenate(NdAxis(1), &[self.values.view(), top.values.view()])?;
        FieldGrid::new(self.x.clone(), y, values)
    }
}

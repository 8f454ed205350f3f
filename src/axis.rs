//! Coordinate axes
//!
//! An [`Axis`] is the discretization of one spatial dimension: samples start at
//! the lower bound (inclusive) and advance by a fixed step while they stay below
//! the upper bound. Sub-axes produced by [`Axis::split_at_zero`] keep the exact
//! sample values of their parent, which is what lets quadrant grids tile the
//! full grid without gaps or overlap.

use crate::errors::{FieldError, Result};
use ndarray::{s, Array1};
use std::ops::Range;

/// Most `f64` samples one array can hold without overflowing its byte size
pub const MAX_SAMPLES: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// An ordered, evenly spaced sequence of coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    name: String,
    lower: f64,
    upper: f64,
    step: f64,
    /// Position of the first sample within the axis this one was cut from
    offset: usize,
    values: Array1<f64>,
}

impl Axis {
    /// Number of samples in `[lower, upper)` at `step`
    #[must_use]
    pub fn sample_count(lower: f64, upper: f64, step: f64) -> usize {
        let count = ((upper - lower) / step).ceil();
        if count.is_finite() && count > 0.0 {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            {
                count as usize
            }
        } else {
            0
        }
    }

    /// Build an axis over `[lower, upper)`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a bound or the step is not finite
    /// - the step is not positive
    /// - `upper <= lower`
    /// - the axis would hold no samples, or more than [`MAX_SAMPLES`]
    pub fn new(name: &str, lower: f64, upper: f64, step: f64) -> Result<Self> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(FieldError::config(format!(
                "bounds of axis '{name}' must be finite, got [{lower}, {upper})"
            )));
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(FieldError::config(format!(
                "step must be positive, got {step}"
            )));
        }
        if upper <= lower {
            return Err(FieldError::config(format!(
                "upper bound of axis '{name}' ({upper}) must exceed lower bound ({lower})"
            )));
        }

        let len = Self::sample_count(lower, upper, step);
        if len == 0 {
            return Err(FieldError::EmptyAxis {
                axis: name.to_string(),
                lower,
                upper,
                step,
            });
        }
        if len > MAX_SAMPLES {
            return Err(FieldError::config(format!(
                "step {step} is too small for axis '{name}' over [{lower}, {upper})"
            )));
        }

        #[allow(clippy::cast_precision_loss)]
        let values = Array1::from_shape_fn(len, |i| lower + i as f64 * step);

        Ok(Self {
            name: name.to_string(),
            lower,
            upper,
            step,
            offset: 0,
            values,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Coordinate of sample `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn sample(&self, index: usize) -> f64 {
        self.values[index]
    }

    #[must_use]
    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    /// Split into the samples below zero and the samples at or above zero
    ///
    /// The two halves keep the parent's sample values and their lengths add up
    /// to the parent's length. Either half is empty when the parent lies
    /// entirely on one side of zero.
    #[must_use]
    pub fn split_at_zero(&self) -> (Axis, Axis) {
        let split = self.values.iter().take_while(|&&v| v < 0.0).count();
        let zero = 0.0_f64.clamp(self.lower, self.upper);
        let negative = self.sub_axis(0..split, self.lower, zero);
        let non_negative = self.sub_axis(split..self.len(), zero, self.upper);
        (negative, non_negative)
    }

    fn sub_axis(&self, range: Range<usize>, lower: f64, upper: f64) -> Axis {
        Axis {
            name: self.name.clone(),
            lower,
            upper,
            step: self.step,
            offset: self.offset + range.start,
            values: self.values.slice(s![range]).to_owned(),
        }
    }

    /// Whether `next` continues this axis directly, sample for sample
    #[must_use]
    pub fn is_followed_by(&self, next: &Axis) -> bool {
        self.name == next.name
            && self.step.to_bits() == next.step.to_bits()
            && self.offset + self.len() == next.offset
    }

    /// Join two adjacent pieces of the same axis
    ///
    /// # Errors
    ///
    /// Returns an error if `next` does not directly follow `self`.
    pub fn join(&self, next: &Axis) -> Result<Axis> {
        if !self.is_followed_by(next) {
            return Err(FieldError::incompatible_shape());
        }

        let mut values = Vec::with_capacity(self.len() + next.len());
        values.extend(self.values.iter().copied());
        values.extend(next.values.iter().copied());

        Ok(Axis {
            name: self.name.clone(),
            lower: self.lower,
            upper: next.upper,
            step: self.step,
            offset: self.offset,
            values: Array1::from_vec(values),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_follow_lower_plus_index_times_step() {
        let axis = Axis::new("x", -2.0, 2.0, 0.5).unwrap();
        assert_eq!(axis.len(), 8);
        assert_eq!(axis.sample(0), -2.0);
        assert_eq!(axis.sample(7), 1.5);
    }

    #[test]
    fn length_rounds_up() {
        assert_eq!(Axis::sample_count(0.0, 1.0, 0.3), 4);
        assert_eq!(Axis::new("y", 0.0, 1.0, 0.3).unwrap().len(), 4);
    }

    #[test]
    fn split_halves_cover_parent() {
        let axis = Axis::new("x", -1.0, 2.0, 0.25).unwrap();
        let (neg, pos) = axis.split_at_zero();
        assert_eq!(neg.len(), 4);
        assert_eq!(pos.len(), 8);
        assert_eq!(pos.offset(), 4);
        assert_eq!(pos.sample(0), 0.0);
        assert_eq!(neg.join(&pos).unwrap(), axis);
    }

    #[test]
    fn split_with_bound_on_zero_leaves_empty_half() {
        let axis = Axis::new("y", 0.0, 1.0, 0.5).unwrap();
        let (neg, pos) = axis.split_at_zero();
        assert!(neg.is_empty());
        assert_eq!(pos.len(), 2);
        assert_eq!(neg.join(&pos).unwrap(), axis);
    }

    #[test]
    fn tiny_step_is_a_config_error() {
        assert_eq!(Axis::sample_count(-1.0, 1.0, 1e-300), usize::MAX);
        let err = Axis::new("x", -1.0, 1.0, 1e-300).unwrap_err();
        assert!(matches!(err, FieldError::InvalidConfig { .. }));
        assert!(err.to_string().contains("too small"));
    }

    #[test]
    fn join_rejects_non_adjacent_pieces() {
        let axis = Axis::new("x", -1.0, 1.0, 0.5).unwrap();
        let (neg, pos) = axis.split_at_zero();
        assert!(pos.join(&neg).is_err());
    }
}

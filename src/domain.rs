//! Rectangular evaluation domains and their quadrant split
//!
//! Quadrants are cut at `x = 0` and `y = 0`: left is `x < 0`, right `x ≥ 0`,
//! bottom `y < 0` and top `y ≥ 0`.

use crate::errors::{FieldError, Result};
use std::fmt;

/// Bounds `[xmin, xmax) × [ymin, ymax)` of a field evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
}

impl Domain {
    /// # Errors
    ///
    /// Returns an error if a bound is not finite or a range is empty or inverted.
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Result<Self> {
        if [xmin, xmax, ymin, ymax].iter().any(|b| !b.is_finite()) {
            return Err(FieldError::config(format!(
                "domain bounds must be finite, got x [{xmin}, {xmax}) y [{ymin}, {ymax})"
            )));
        }
        if xmax <= xmin {
            return Err(FieldError::config(format!(
                "xmax ({xmax}) must exceed xmin ({xmin})"
            )));
        }
        if ymax <= ymin {
            return Err(FieldError::config(format!(
                "ymax ({ymax}) must exceed ymin ({ymin})"
            )));
        }
        Ok(Self {
            xmin,
            xmax,
            ymin,
            ymax,
        })
    }

    #[must_use]
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    #[must_use]
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    #[must_use]
    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    #[must_use]
    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    /// `(xmin, xmax, ymin, ymax)`
    #[must_use]
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (self.xmin, self.xmax, self.ymin, self.ymax)
    }

    /// Check that both ranges straddle zero so the quadrant split is well defined
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::DegenerateSplit`] when the origin lies outside the domain.
    pub fn require_origin(&self) -> Result<()> {
        if !(self.xmin <= 0.0 && 0.0 <= self.xmax) {
            return Err(FieldError::DegenerateSplit {
                message: format!("x range [{}, {}) does not contain 0", self.xmin, self.xmax),
            });
        }
        if !(self.ymin <= 0.0 && 0.0 <= self.ymax) {
            return Err(FieldError::DegenerateSplit {
                message: format!("y range [{}, {}) does not contain 0", self.ymin, self.ymax),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x [{}, {}) × y [{}, {})",
            self.xmin, self.xmax, self.ymin, self.ymax
        )
    }
}

/// One of the four subregions of a domain split at the origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
        }
    }

    /// Left quadrants cover `x < 0`
    #[must_use]
    pub const fn is_left(self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft)
    }

    /// Top quadrants cover `y ≥ 0`
    #[must_use]
    pub const fn is_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }

    /// Bound tuple `(xmin, xmax, ymin, ymax)` of this quadrant, clipped to `domain`
    #[must_use]
    pub fn bounds(self, domain: &Domain) -> (f64, f64, f64, f64) {
        let (xmin, xmax) = if self.is_left() {
            (domain.xmin, 0.0)
        } else {
            (0.0, domain.xmax)
        };
        let (ymin, ymax) = if self.is_top() {
            (0.0, domain.ymax)
        } else {
            (domain.ymin, 0.0)
        };
        (xmin, xmax, ymin, ymax)
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

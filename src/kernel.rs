//! Scalar kernels evaluated at each grid coordinate
//!
//! Kernels must be pure: the value at a coordinate may depend only on the
//! coordinate and the kernel's own parameters. Quadrant workers share a kernel
//! by reference, so every kernel is `Send + Sync`.

use crate::errors::{FieldError, Result};
use std::f64::consts::PI;

/// A pure scalar function of two variables
pub trait Kernel: Send + Sync {
    /// Value of the kernel at `(x, y)`
    fn evaluate(&self, x: f64, y: f64) -> f64;

    /// Short identifier used in logs and output metadata
    fn name(&self) -> &str;

    /// Named numeric parameters recorded alongside the field
    fn parameters(&self) -> Vec<(&'static str, f64)> {
        Vec::new()
    }
}

/// Isotropic 2D Gaussian density centred on the origin
///
/// `f(x, y) = 1 / (2πσ²) · exp(−(x² + y²) / (2σ²))`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianKernel {
    sigma: f64,
    normalization: f64,
    two_sigma_sq: f64,
}

impl GaussianKernel {
    /// # Errors
    ///
    /// Returns an error if `sigma` is not a positive finite number.
    pub fn new(sigma: f64) -> Result<Self> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(FieldError::config(format!(
                "sigma must be positive, got {sigma}"
            )));
        }

        let two_sigma_sq = 2.0 * sigma * sigma;
        Ok(Self {
            sigma,
            normalization: 1.0 / (PI * two_sigma_sq),
            two_sigma_sq,
        })
    }

    #[must_use]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl Kernel for GaussianKernel {
    fn evaluate(&self, x: f64, y: f64) -> f64 {
        self.normalization * (-(x * x + y * y) / self.two_sigma_sq).exp()
    }

    fn name(&self) -> &str {
        "gaussian2d"
    }

    fn parameters(&self) -> Vec<(&'static str, f64)> {
        vec![("sigma", self.sigma)]
    }
}

/// Adapter turning a plain closure into a [`Kernel`]
pub struct FnKernel<F> {
    name: String,
    function: F,
}

impl<F> FnKernel<F>
where
    F: Fn(f64, f64) -> f64 + Send + Sync,
{
    pub fn new(name: impl Into<String>, function: F) -> Self {
        Self {
            name: name.into(),
            function,
        }
    }
}

impl<F> Kernel for FnKernel<F>
where
    F: Fn(f64, f64) -> f64 + Send + Sync,
{
    fn evaluate(&self, x: f64, y: f64) -> f64 {
        (self.function)(x, y)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaussian_peak_is_normalization_constant() {
        let kernel = GaussianKernel::new(1.0).unwrap();
        assert!((kernel.evaluate(0.0, 0.0) - 1.0 / (2.0 * PI)).abs() < 1e-15);
    }

    #[test]
    fn gaussian_rejects_non_positive_sigma() {
        assert!(GaussianKernel::new(0.0).is_err());
        assert!(GaussianKernel::new(-1.0).is_err());
        assert!(GaussianKernel::new(f64::NAN).is_err());
    }

    #[test]
    fn closures_can_act_as_kernels() {
        let kernel = FnKernel::new("plane", |x, y| x + 2.0 * y);
        assert_eq!(kernel.evaluate(1.0, 1.0), 3.0);
        assert_eq!(kernel.name(), "plane");
        assert!(kernel.parameters().is_empty());
    }
}

//! Field metadata for downstream renderers
//!
//! A renderer needs the grid plus the bounds, step and kernel parameters used
//! to build it. [`FieldMetadata`] collects those and can print them or write
//! them as a JSON sidecar.

use crate::errors::Result;
use crate::evaluator::Strategy;
use crate::grid::FieldGrid;
use crate::kernel::Kernel;
use serde_json::{json, Map, Value};
use std::{fs, path::Path};

/// Structured description of an evaluated field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMetadata {
    pub kernel: String,
    pub parameters: Vec<(String, f64)>,
    /// `(xmin, xmax, ymin, ymax)`
    pub bounds: (f64, f64, f64, f64),
    pub step: f64,
    /// `(X samples, Y samples)`
    pub shape: (usize, usize),
    pub strategy: Option<Strategy>,
    pub workers: Option<usize>,
}

impl FieldMetadata {
    /// Describe `grid` as produced by `kernel`
    pub fn new<K>(grid: &FieldGrid, kernel: &K) -> Self
    where
        K: Kernel + ?Sized,
    {
        Self {
            kernel: kernel.name().to_string(),
            parameters: kernel
                .parameters()
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
            bounds: grid.bounds(),
            step: grid.x_axis().step(),
            shape: grid.shape(),
            strategy: None,
            workers: None,
        }
    }

    /// Record how the field was computed
    #[must_use]
    pub fn with_run(mut self, strategy: Strategy, workers: Option<usize>) -> Self {
        self.strategy = Some(strategy);
        self.workers = if strategy.is_parallel() { workers } else { None };
        self
    }

    /// JSON document with bounds, step, shape, kernel and run information
    pub fn to_json(&self) -> Value {
        let parameters: Map<String, Value> = self
            .parameters
            .iter()
            .map(|(name, value)| (name.clone(), json!(value)))
            .collect();
        let (xmin, xmax, ymin, ymax) = self.bounds;

        json!({
            "kernel": {
                "name": self.kernel,
                "parameters": parameters,
            },
            "bounds": {
                "xmin": xmin,
                "xmax": xmax,
                "ymin": ymin,
                "ymax": ymax,
            },
            "step": self.step,
            "shape": [self.shape.0, self.shape.1],
            "layout": "rows follow x, columns follow y",
            "strategy": self.strategy.map(Strategy::as_str),
            "workers": self.workers,
        })
    }

    /// Write [`to_json`](Self::to_json) to `path`, replacing any existing file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let document = serde_json::to_string_pretty(&self.to_json())?;
        fs::write(path, document)?;
        Ok(())
    }
}

/// Prints the bounds, shape and kernel of a field.
pub fn print_metadata(metadata: &FieldMetadata) {
    let (xmin, xmax, ymin, ymax) = metadata.bounds;

    println!("\n===== Field =====");
    println!("- kernel: {}", metadata.kernel);
    for (name, value) in &metadata.parameters {
        println!("- {}: {}", name, value);
    }
    println!("- x: [{}, {})", xmin, xmax);
    println!("- y: [{}, {})", ymin, ymax);
    println!("- step: {}", metadata.step);
    println!("- shape: {} × {}", metadata.shape.0, metadata.shape.1);
    if let Some(strategy) = metadata.strategy {
        println!("- strategy: {}", strategy.as_str());
    }
    if let Some(workers) = metadata.workers {
        println!("- workers: {}", workers);
    }
}

//! NetCDF output of evaluated fields
//!
//! The file carries two dimensions `x` and `y`, coordinate variables of the
//! same names and a `field(x, y)` variable, so rows follow X and columns
//! follow Y exactly as in [`FieldGrid`].

use crate::errors::Result;
use crate::grid::FieldGrid;
use crate::metadata::FieldMetadata;
use chrono::Utc;
use log::debug;
use netcdf::create;
use std::{fs, path::Path};

/// Name of the data variable holding kernel values
pub const FIELD_VARIABLE: &str = "field";

/// Writer for field grids
pub struct NetCDFWriter<'a> {
    output_path: &'a Path,
}

impl<'a> NetCDFWriter<'a> {
    /// Create a new NetCDF writer
    pub fn new(output_path: &'a Path) -> Self {
        Self { output_path }
    }

    /// Write `grid` and its metadata, replacing any existing file
    pub fn write_field(&self, grid: &FieldGrid, metadata: &FieldMetadata) -> Result<()> {
        if self.output_path.exists() {
            fs::remove_file(self.output_path)?;
        }

        let mut file = create(self.output_path)?;
        let (nx, ny) = grid.shape();
        debug!(
            "Writing {} × {} field to {}",
            nx,
            ny,
            self.output_path.display()
        );

        file.add_dimension("x", nx)?;
        file.add_dimension("y", ny)?;

        let x_values: Vec<f64> = grid.x_axis().values().to_vec();
        let mut x_var = file.add_variable::<f64>("x", &["x"])?;
        x_var.put_attribute("long_name", "x coordinate")?;
        x_var.put_values(&x_values, ..)?;

        let y_values: Vec<f64> = grid.y_axis().values().to_vec();
        let mut y_var = file.add_variable::<f64>("y", &["y"])?;
        y_var.put_attribute("long_name", "y coordinate")?;
        y_var.put_values(&y_values, ..)?;

        let (xmin, xmax, ymin, ymax) = metadata.bounds;
        let mut field_var = file.add_variable::<f64>(FIELD_VARIABLE, &["x", "y"])?;
        field_var.put_attribute("kernel", metadata.kernel.as_str())?;
        for (name, value) in &metadata.parameters {
            field_var.put_attribute(name, *value)?;
        }
        field_var.put_attribute("step", metadata.step)?;
        field_var.put_attribute("bounds", vec![xmin, xmax, ymin, ymax])?;
        field_var.put(grid.values().view(), ..)?;

        if let Some(strategy) = metadata.strategy {
            file.add_attribute("strategy", strategy.as_str())?;
        }
        file.add_attribute(
            "history",
            format!("Created by gaussfield on {}", Utc::now().to_rfc3339()),
        )?;

        Ok(())
    }
}

/// Writes an evaluated field to a new NetCDF file.
pub fn write_field_to_netcdf(
    grid: &FieldGrid,
    metadata: &FieldMetadata,
    output_path: &Path,
) -> Result<()> {
    NetCDFWriter::new(output_path).write_field(grid, metadata)
}

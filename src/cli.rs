//! Defines command-line interface options using `clap` for the gaussfield application.

use clap::Parser;
use gaussfield::Strategy;
use std::path::PathBuf;

/// Step used when none is given on the command line
pub const DEFAULT_STEP: f64 = 0.001;

/// A CLI tool for evaluating 2D Gaussian fields
#[derive(Parser, Debug)]
#[command(
    version,
    name = "gaussfield",
    about = "Evaluate a 2D Gaussian density over a grid, serially or by quadrant"
)]
pub struct Args {
    /// Lower x bound (inclusive)
    #[arg(allow_negative_numbers = true)]
    pub xmin: f64,

    /// Upper x bound (exclusive)
    #[arg(allow_negative_numbers = true)]
    pub xmax: f64,

    /// Lower y bound (inclusive)
    #[arg(allow_negative_numbers = true)]
    pub ymin: f64,

    /// Upper y bound (exclusive)
    #[arg(allow_negative_numbers = true)]
    pub ymax: f64,

    /// Number of worker threads for the quadrant strategies
    #[arg(short, long, default_value_t = 4)]
    pub workers: usize,

    /// Distance between neighbouring samples on both axes
    #[arg(long, default_value_t = DEFAULT_STEP)]
    pub step: f64,

    /// Standard deviation of the Gaussian kernel
    #[arg(long, default_value_t = 1.0)]
    pub sigma: f64,

    /// Evaluation strategy
    #[arg(long, value_enum, default_value_t = Strategy::Partitioned)]
    pub strategy: Strategy,

    /// Path to save the field as NetCDF
    #[arg(long)]
    pub output_netcdf: Option<PathBuf>,

    /// Path to save the field metadata as JSON
    #[arg(long)]
    pub metadata_json: Option<PathBuf>,

    /// Compute quick statistics (min/mean/max/integral/peak) for the field
    #[arg(long)]
    pub summary: bool,

    /// Enable verbose output.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_negative_positional_bounds() {
        let args = Args::try_parse_from(["gaussfield", "-2", "2", "-2", "2", "--workers", "2"])
            .unwrap();
        assert_eq!(args.xmin, -2.0);
        assert_eq!(args.ymin, -2.0);
        assert_eq!(args.workers, 2);
        assert_eq!(args.step, DEFAULT_STEP);
        assert_eq!(args.strategy, Strategy::Partitioned);
    }

    #[test]
    fn parses_strategy_names() {
        let args =
            Args::try_parse_from(["gaussfield", "-1", "1", "-1", "1", "--strategy", "embarrassing"])
                .unwrap();
        assert_eq!(args.strategy, Strategy::Embarrassing);
    }
}

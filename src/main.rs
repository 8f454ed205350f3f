//! Entry point for the gaussfield application.
//! Handles CLI parsing, runs the selected evaluation strategy and hands the field off to the requested outputs.

use clap::Parser;
use gaussfield::{
    get_parallel_info, print_metadata, summarize, write_field_to_netcdf, Domain, FieldEvaluator,
    FieldMetadata, FieldOutput, GaussianKernel, ParallelConfig,
};
use log::LevelFilter;
mod cli;

use cli::Args;

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format_timestamp_millis().init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args = Args::parse();
    init_logging(args.verbose);

    println!(
        r#"
------------------------------------------------------------------
                          g a u s s f i e l d
              2D Gaussian field evaluator, serial or by quadrant
------------------------------------------------------------------
"#
    );

    // Validate everything before any work is dispatched
    let domain = Domain::new(args.xmin, args.xmax, args.ymin, args.ymax)?;
    let kernel = GaussianKernel::new(args.sigma)?;
    let parallel = ParallelConfig::with_threads(args.workers);
    parallel.validate()?;

    if args.verbose {
        get_parallel_info(&parallel).print_info();
    }

    let evaluator = FieldEvaluator::new(domain, args.step, kernel)?.with_parallel(parallel);
    println!(
        "✅ Evaluating {} with {} strategy ({} workers)",
        domain,
        args.strategy.as_str(),
        args.workers
    );

    let run = evaluator.run(args.strategy)?;
    let elapsed = run.elapsed;

    if let FieldOutput::Quadrants(quadrants) = &run.output {
        for (quadrant, grid) in quadrants.iter() {
            println!("   {:<12} {:?} points", quadrant.as_str(), grid.shape());
            if args.summary && !grid.is_empty() {
                summarize(grid)?.print(quadrant.as_str());
            }
        }
    }

    let strategy = run.strategy;
    let grid = run.into_grid()?;
    let metadata =
        FieldMetadata::new(&grid, evaluator.kernel()).with_run(strategy, Some(args.workers));
    print_metadata(&metadata);

    if args.summary {
        summarize(&grid)?.print(&metadata.kernel);
    }

    if let Some(output_path) = args.output_netcdf {
        write_field_to_netcdf(&grid, &metadata, &output_path)?;
        println!("✅ Saved field to {}", output_path.display());
    }

    if let Some(json_path) = args.metadata_json {
        metadata.write_json(&json_path)?;
        println!("✅ Saved metadata to {}", json_path.display());
    }

    println!("Elapsed Time: {:.3}s", elapsed.as_secs_f64());

    Ok(())
}

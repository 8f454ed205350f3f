//! Tests for quadrant-parallel evaluation: equivalence with the serial pass,
//! quadrant tiling, worker pool bounds and failure propagation.

use gaussfield::{
    build_axes,
    errors::{FieldError, Result},
    evaluate_field, evaluate_field_partitioned, evaluate_field_partitioned_with,
    evaluate_quadrants, evaluate_quadrants_with, partition_axes, Domain, FnKernel, ParallelConfig,
    Quadrant,
};
use proptest::prelude::*;

#[test]
fn test_partitioned_matches_serial() -> Result<()> {
    let cases = [
        (-2.0, 2.0, -2.0, 2.0, 0.5, 1.0),
        (-2.0, 2.0, -2.0, 2.0, 0.01, 1.0),
        (-3.0, 1.0, -0.5, 2.5, 0.1, 0.6),
        // step does not divide the bounds
        (-1.3, 0.9, -0.7, 1.1, 0.3, 1.2),
        (-1.0, 1.0, -1.0, 1.0, 0.07, 2.0),
    ];

    for (xmin, xmax, ymin, ymax, step, sigma) in cases {
        let serial = evaluate_field(xmin, xmax, ymin, ymax, step, sigma)?;
        let stitched = evaluate_field_partitioned(xmin, xmax, ymin, ymax, step, sigma, 4)?;
        assert_eq!(stitched.shape(), serial.shape());
        assert_eq!(stitched, serial);
    }
    Ok(())
}

#[test]
fn test_bounds_on_zero_leave_empty_quadrants() -> Result<()> {
    let quadrants = evaluate_quadrants(0.0, 1.0, -1.0, 0.0, 0.25, 1.0, 2)?;

    assert_eq!(quadrants.get(Quadrant::BottomRight).shape(), (4, 4));
    assert!(quadrants.get(Quadrant::BottomLeft).is_empty());
    assert!(quadrants.get(Quadrant::TopLeft).is_empty());
    assert!(quadrants.get(Quadrant::TopRight).is_empty());

    let stitched = quadrants.stitch()?;
    assert_eq!(stitched, evaluate_field(0.0, 1.0, -1.0, 0.0, 0.25, 1.0)?);
    Ok(())
}

#[test]
fn test_quadrant_axes_tile_full_axes() -> Result<()> {
    for step in [0.5, 0.3, 0.125, 0.07, 0.001] {
        let domain = Domain::new(-2.0, 1.7, -0.9, 2.0)?;
        let (x, y) = build_axes(&domain, step)?;
        let tasks = partition_axes(&x, &y);
        assert_eq!(tasks.len(), 4);

        let task = |q: Quadrant| tasks.iter().find(|t| t.quadrant == q).unwrap();
        let tl = task(Quadrant::TopLeft);
        let tr = task(Quadrant::TopRight);
        let bl = task(Quadrant::BottomLeft);
        let br = task(Quadrant::BottomRight);

        assert_eq!(bl.x.len() + br.x.len(), x.len());
        assert_eq!(tl.x.len() + tr.x.len(), x.len());
        assert_eq!(bl.y.len() + tl.y.len(), y.len());
        assert_eq!(br.y.len() + tr.y.len(), y.len());

        let total: usize = tasks.iter().map(|t| t.cells()).sum();
        assert_eq!(total, x.len() * y.len());

        // Left quadrants hold exactly the negative x samples
        assert!(tl.x.values().iter().all(|&v| v < 0.0));
        assert!(tr.x.values().iter().all(|&v| v >= 0.0));
        assert!(bl.y.values().iter().all(|&v| v < 0.0));
        assert!(tl.y.values().iter().all(|&v| v >= 0.0));
    }
    Ok(())
}

#[test]
fn test_quadrant_bounds_and_shapes() -> Result<()> {
    let quadrants = evaluate_quadrants(-2.0, 2.0, -1.0, 3.0, 0.5, 1.0, 4)?;

    assert_eq!(quadrants.get(Quadrant::TopLeft).bounds(), (-2.0, 0.0, 0.0, 3.0));
    assert_eq!(quadrants.get(Quadrant::TopRight).bounds(), (0.0, 2.0, 0.0, 3.0));
    assert_eq!(quadrants.get(Quadrant::BottomLeft).bounds(), (-2.0, 0.0, -1.0, 0.0));
    assert_eq!(quadrants.get(Quadrant::BottomRight).bounds(), (0.0, 2.0, -1.0, 0.0));

    assert_eq!(quadrants.get(Quadrant::TopLeft).shape(), (4, 6));
    assert_eq!(quadrants.get(Quadrant::BottomRight).shape(), (4, 2));

    for (quadrant, grid) in quadrants.iter() {
        assert_eq!(grid.bounds(), quadrant.bounds(quadrants.domain()));
    }
    Ok(())
}

#[test]
fn test_worker_count_bounds_concurrency() -> Result<()> {
    let serial = evaluate_field(-1.0, 1.0, -1.0, 1.0, 0.05, 1.0)?;
    for workers in 1..=6 {
        let stitched = evaluate_field_partitioned(-1.0, 1.0, -1.0, 1.0, 0.05, 1.0, workers)?;
        assert_eq!(stitched, serial, "mismatch with {workers} workers");
    }

    let pool = ParallelConfig::with_threads(3).build_pool()?;
    assert_eq!(pool.current_num_threads(), 3);
    Ok(())
}

#[test]
fn test_zero_workers_rejected_before_dispatch() {
    let result = evaluate_field_partitioned(-1.0, 1.0, -1.0, 1.0, 0.1, 1.0, 0);
    match result {
        Err(FieldError::InvalidConfig { message }) => assert!(message.contains("worker")),
        other => panic!("expected InvalidConfig, got {:?}", other.map(|g| g.shape())),
    }
}

#[test]
fn test_degenerate_split_rejected() {
    let cases = [
        (0.5, 2.0, -1.0, 1.0),
        (-2.0, -0.5, -1.0, 1.0),
        (-1.0, 1.0, 0.1, 1.0),
        (-1.0, 1.0, -1.0, -0.1),
    ];
    for (xmin, xmax, ymin, ymax) in cases {
        let result = evaluate_field_partitioned(xmin, xmax, ymin, ymax, 0.1, 1.0, 4);
        assert!(
            matches!(result, Err(FieldError::DegenerateSplit { .. })),
            "domain x [{xmin}, {xmax}) y [{ymin}, {ymax}) should not split"
        );
    }
}

#[test]
fn test_worker_failure_fails_whole_call() -> Result<()> {
    let domain = Domain::new(-1.0, 1.0, -1.0, 1.0)?;
    let kernel = FnKernel::new("faulty", |x: f64, y: f64| {
        if x >= 0.0 && y >= 0.0 {
            panic!("kernel failed in the first quadrant");
        }
        x + y
    });

    let result =
        evaluate_field_partitioned_with(&domain, 0.25, &kernel, &ParallelConfig::with_threads(2));
    match result {
        Err(FieldError::WorkerFailure { quadrant, message }) => {
            assert_eq!(quadrant, "top-right");
            assert!(message.contains("first quadrant"));
        }
        other => panic!("expected WorkerFailure, got {:?}", other.map(|g| g.shape())),
    }

    let unstitched =
        evaluate_quadrants_with(&domain, 0.25, &kernel, &ParallelConfig::with_threads(4));
    assert!(matches!(unstitched, Err(FieldError::WorkerFailure { .. })));
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_partitioned_equals_serial(
        xmin in -3.0f64..0.0,
        xmax in 0.0f64..3.0,
        ymin in -3.0f64..0.0,
        ymax in 0.0f64..3.0,
        step in 0.05f64..0.5,
        sigma in 0.3f64..2.0,
        workers in 1usize..6,
    ) {
        prop_assume!(xmax > xmin && ymax > ymin);

        let serial = evaluate_field(xmin, xmax, ymin, ymax, step, sigma).unwrap();
        let stitched =
            evaluate_field_partitioned(xmin, xmax, ymin, ymax, step, sigma, workers).unwrap();

        prop_assert_eq!(stitched.shape(), serial.shape());
        prop_assert_eq!(stitched, serial);
    }

    #[test]
    fn prop_quadrants_tile_domain(
        xmin in -3.0f64..0.0,
        xmax in 0.0f64..3.0,
        ymin in -3.0f64..0.0,
        ymax in 0.0f64..3.0,
        step in 0.01f64..1.0,
    ) {
        let domain = Domain::new(xmin, xmax, ymin, ymax).unwrap();
        let (x, y) = build_axes(&domain, step).unwrap();
        let tasks = partition_axes(&x, &y);

        let cells: usize = tasks.iter().map(|t| t.cells()).sum();
        prop_assert_eq!(cells, x.len() * y.len());
    }
}

//! Parallel processing configuration and management
//!
//! Quadrant workers run on a dedicated Rayon pool whose size bounds how many
//! quadrants are evaluated at once; tasks beyond that queue on the pool.

use crate::errors::{FieldError, Result};
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Configuration for parallel processing
#[derive(Debug, Clone, Default)]
pub struct ParallelConfig {
    pub num_threads: Option<usize>,
}

impl ParallelConfig {
    /// Create a new parallel configuration
    pub fn new(num_threads: Option<usize>) -> Self {
        Self { num_threads }
    }

    /// Create a configuration that uses all available CPU cores
    pub fn all_cores() -> Self {
        Self {
            num_threads: Some(num_cpus::get()),
        }
    }

    /// Create a configuration that uses a specific number of threads
    pub fn with_threads(num_threads: usize) -> Self {
        Self {
            num_threads: Some(num_threads),
        }
    }

    /// Number of workers the pool will run, falling back to the CPU count
    pub fn worker_count(&self) -> usize {
        self.num_threads.unwrap_or_else(num_cpus::get)
    }

    /// Reject configurations that could never run a task
    pub fn validate(&self) -> Result<()> {
        if self.num_threads == Some(0) {
            return Err(FieldError::config("worker count must be at least 1"));
        }
        Ok(())
    }

    /// Build a dedicated thread pool sized by this configuration
    pub fn build_pool(&self) -> Result<ThreadPool> {
        self.validate()?;
        let workers = self.worker_count();
        ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("gaussfield-worker-{i}"))
            .build()
            .map_err(|e| {
                FieldError::ThreadPoolError(format!(
                    "Failed to initialize thread pool with {} threads: {}",
                    workers, e
                ))
            })
    }
}

/// Get information about the pool `config` builds and the host it runs on
pub fn get_parallel_info(config: &ParallelConfig) -> ParallelInfo {
    ParallelInfo {
        worker_threads: config.worker_count(),
        available_cores: num_cpus::get(),
        available_parallelism: std::thread::available_parallelism()
            .map(|p| p.get())
            .unwrap_or(1),
    }
}

/// Information about the parallel processing environment
#[derive(Debug, Clone)]
pub struct ParallelInfo {
    pub worker_threads: usize,
    pub available_cores: usize,
    pub available_parallelism: usize,
}

impl ParallelInfo {
    /// Print parallel processing information
    pub fn print_info(&self) {
        println!("📊 Parallel Processing Information:");
        println!("   Quadrant worker threads: {}", self.worker_threads);
        println!("   Available CPU cores: {}", self.available_cores);
        println!("   Available parallelism: {}", self.available_parallelism);
    }
}

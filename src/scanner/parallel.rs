//! Execution strategy for scanning many files.
//!
//! Small workloads run sequentially; larger ones fan out over a rayon pool.
//! The compiled rule set is immutable after construction, so workers share
//! it read-only. Result order always matches input order.

use anyhow::Result;
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStrategy {
    Sequential,
    Parallel { workers: usize },
}

impl ExecutionStrategy {
    /// Pick a strategy from the workload size: sequential below the
    /// threshold, parallel with the given worker count at or above it.
    pub fn auto(work_count: usize, threshold: usize, workers: usize) -> Self {
        if work_count < threshold || workers <= 1 {
            ExecutionStrategy::Sequential
        } else {
            ExecutionStrategy::Parallel { workers }
        }
    }

    /// Worker count from system resources: `thread_percentage` of the CPU
    /// cores, capped by `max_threads` when that is non-zero.
    pub fn calculate_optimal_workers(max_threads: usize, thread_percentage: u8) -> usize {
        let cpu_cores = num_cpus::get();
        let max_by_percentage = std::cmp::max(1, (cpu_cores * thread_percentage as usize) / 100);

        if max_threads > 0 {
            std::cmp::min(max_threads, max_by_percentage)
        } else {
            max_by_percentage
        }
    }

    /// Run `worker` over every item, preserving input order in the output.
    pub fn execute<T, R, F>(&self, items: Vec<T>, worker: F) -> Result<Vec<R>>
    where
        T: Send + Sync,
        R: Send,
        F: Fn(&T) -> R + Send + Sync,
    {
        match self {
            ExecutionStrategy::Sequential => Ok(items.iter().map(worker).collect()),
            ExecutionStrategy::Parallel { workers } => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(*workers)
                    .build()?;
                Ok(pool.install(|| items.par_iter().map(worker).collect()))
            }
        }
    }
}

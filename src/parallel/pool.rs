//! Rayon thread pool configuration for batch evaluation.
//!
//! Use [WorkerPool::install] to run a batch with a fixed number of threads,
//! or rely on Rayon's default (all CPU cores).

use rayon::ThreadPoolBuilder;

/// Configures how many worker threads a batch evaluation uses.
#[derive(Debug, Clone, Copy)]
pub struct WorkerPool {
    /// Number of worker threads. If 0, use Rayon default (num_cpus).
    pub workers: usize,
}

impl Default for WorkerPool {
    fn default() -> Self {
        Self { workers: 0 }
    }
}

impl WorkerPool {
    /// Use exactly `n` worker threads.
    pub fn with_workers(n: usize) -> Self {
        Self { workers: n }
    }

    /// Run a closure on a pool with this worker count. A count of 0 uses the
    /// global Rayon pool; otherwise a temporary pool is built for the call.
    pub fn install<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        if self.workers == 0 {
            f()
        } else {
            let pool = ThreadPoolBuilder::new()
                .num_threads(self.workers)
                .build()
                .expect("Rayon thread pool");
            pool.install(f)
        }
    }
}

pub mod batch;
pub mod pool;

pub use batch::{evaluate_batch, sweep_weapon_skill, SweepPoint};
pub use pool::WorkerPool;

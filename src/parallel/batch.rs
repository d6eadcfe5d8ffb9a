//! Parallel batch evaluation over the synchronous combat core.
//!
//! The core itself is a pure function of its inputs, so batches parallelize
//! with no coordination: each parameter set is evaluated on its own stack.

use rayon::prelude::*;
use serde::Serialize;

use crate::combat::{calculate_dps, WarriorStats};
use crate::parallel::pool::WorkerPool;

/// Evaluate many parameter sets in parallel. Output order matches input order.
pub fn evaluate_batch(batch: &[WarriorStats], pool: &WorkerPool) -> Vec<f64> {
    pool.install(|| batch.par_iter().map(calculate_dps).collect())
}

/// One row of a weapon-skill sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    pub weapon_skill: i32,
    pub dps: f64,
}

/// Evaluate `base` at every weapon skill in `[from, to]` inclusive. Used by
/// the CLI to show how much each skill point is worth against a target.
pub fn sweep_weapon_skill(
    base: &WarriorStats,
    from: i32,
    to: i32,
    pool: &WorkerPool,
) -> Vec<SweepPoint> {
    if to < from {
        return Vec::new();
    }
    let batch: Vec<WarriorStats> = (from..=to)
        .map(|weapon_skill| WarriorStats {
            weapon_skill,
            ..base.clone()
        })
        .collect();
    let dps = evaluate_batch(&batch, pool);
    batch
        .iter()
        .zip(dps)
        .map(|(stats, dps)| SweepPoint {
            weapon_skill: stats.weapon_skill,
            dps,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> WarriorStats {
        WarriorStats {
            base_damage_mh: 100.0,
            base_speed_mh: 2.8,
            attack_power: 800.0,
            hit: 5.0,
            spellbook_crit: 20.0,
            target_armor: 3000.0,
            ..WarriorStats::default()
        }
    }

    #[test]
    fn batch_matches_sequential_evaluation() {
        let batch: Vec<WarriorStats> = (295..=305)
            .map(|weapon_skill| WarriorStats {
                weapon_skill,
                ..baseline()
            })
            .collect();
        let parallel = evaluate_batch(&batch, &WorkerPool::with_workers(2));
        let sequential: Vec<f64> = batch.iter().map(calculate_dps).collect();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn sweep_is_inclusive_and_ordered() {
        let points = sweep_weapon_skill(&baseline(), 300, 305, &WorkerPool::default());
        assert_eq!(points.len(), 6);
        assert_eq!(points.first().map(|p| p.weapon_skill), Some(300));
        assert_eq!(points.last().map(|p| p.weapon_skill), Some(305));
    }

    #[test]
    fn empty_sweep_for_inverted_range() {
        assert!(sweep_weapon_skill(&baseline(), 305, 300, &WorkerPool::default()).is_empty());
    }
}

//! Expected white-damage engine: per-swing damage weighted over the attack
//! table, converted to damage per second, with armor mitigation and the
//! dual-wield off-hand scaling applied.

use crate::combat::stats::WarriorStats;
use crate::combat::table::{build_attack_table, AttackTable};

/// Attack power per point of DPS added to a swing (damage += ap / 14 * speed).
pub const AP_PER_DPS: f64 = 14.0;

/// Off-hand swings land at half effectiveness before talents.
pub const OFF_HAND_BASE_FACTOR: f64 = 0.5;

/// Each Dual Wield Specialization rank restores 2.5 points of off-hand
/// effectiveness. A balance constant, never derived from the table.
pub const OFF_HAND_SPEC_STEP: f64 = 0.025;

/// Average damage of one non-special swing before table weighting.
pub fn white_damage(base_damage: f64, speed: f64, stats: &WarriorStats) -> f64 {
    base_damage + stats.attack_power / AP_PER_DPS * speed
}

/// Fraction of incoming damage removed by the target's armor. Zero at zero
/// armor, asymptotic to 1; the denominator is at least 400 for any level.
pub fn armor_mitigation(target_armor: f64, attacker_level: i32) -> f64 {
    target_armor / (target_armor + 400.0 + 85.0 * f64::from(attacker_level))
}

/// Low and high damage multipliers of the glancing-blow band for the given
/// skill gap. The band is asymmetric and narrows as the gap closes.
pub fn glancing_multiplier_bounds(stats: &WarriorStats) -> (f64, f64) {
    let gap = stats.target_defense() - f64::from(stats.weapon_skill);
    let low = (1.3 - 0.05 * gap).min(0.91);
    let high = (1.2 - 0.03 * gap).min(0.99).max(0.2);
    (low, high)
}

/// Expected damage per second for one weapon against `table`. Avoided swings
/// (miss/dodge/parry) contribute nothing and are simply absent from the
/// weighted sum; only hit, crit, block, and glancing carry damage.
pub fn expected_damage(
    base_damage: f64,
    speed: f64,
    table: &AttackTable,
    stats: &WarriorStats,
) -> f64 {
    let damage = white_damage(base_damage, speed, stats);

    let (glancing_low, glancing_high) = glancing_multiplier_bounds(stats);
    let glancing_damage = damage * (glancing_low + glancing_high) / 2.0;

    let crit_multiplier = 2.0 + 0.1 * f64::from(stats.impale);

    // Block value can absorb a full white hit but never goes negative.
    let blocked_damage = (damage - stats.target_block_value).max(0.0);

    let per_swing = (table.hit * damage
        + table.crit * damage * crit_multiplier
        + table.block * blocked_damage
        + table.glancing * glancing_damage)
        / 100.0;

    per_swing / speed * (1.0 - armor_mitigation(stats.target_armor, stats.player_level))
}

/// Attack table plus per-hand DPS for one evaluation. Returned intact to the
/// API and CLI so callers can inspect where the total came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DpsBreakdown {
    pub table: AttackTable,
    pub main_hand: f64,
    pub off_hand: f64,
    pub total: f64,
}

/// Evaluate both hands against a single shared table. The table is built with
/// the dual-wield miss penalty when an off-hand weapon is present, and the
/// off-hand result is scaled by the fixed talent factor.
pub fn dps_breakdown(stats: &WarriorStats) -> DpsBreakdown {
    let table = build_attack_table(stats);
    let main_hand = expected_damage(stats.base_damage_mh, stats.base_speed_mh, &table, stats);

    let off_hand = if stats.is_dual_wielding() {
        let raw = expected_damage(stats.base_damage_oh, stats.base_speed_oh, &table, stats);
        raw * (OFF_HAND_BASE_FACTOR + OFF_HAND_SPEC_STEP * f64::from(stats.dual_wield_spec))
    } else {
        0.0
    };

    DpsBreakdown {
        table,
        main_hand,
        off_hand,
        total: main_hand + off_hand,
    }
}

/// Total sustained DPS for `stats`.
pub fn calculate_dps(stats: &WarriorStats) -> f64 {
    dps_breakdown(stats).total
}

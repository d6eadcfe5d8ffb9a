//! Attack outcome table for a white swing against a single target.
//!
//! The formulas and clamps in this module intentionally mirror the known
//! Classic Era combat tables, including the `hit - 1` rounding quirk at large
//! skill gaps. Outcomes are resolved in the game's single-roll precedence
//! order, so the seven percentages always partition exactly 100.

use crate::combat::stats::WarriorStats;

/// Flat miss-chance penalty while wielding two weapons, in percentage points.
pub const DUAL_WIELD_MISS_PENALTY: f64 = 19.0;

/// Block chance is hard-capped regardless of skill gap.
pub const BLOCK_CHANCE_CAP: f64 = 5.0;

/// Parry chance against targets more than two levels above the attacker.
const BOSS_PARRY_CHANCE: f64 = 14.0;

/// Maximum crit suppressed by aura-granted crit against higher-level targets.
const AURA_CRIT_SUPPRESSION_CAP: f64 = 1.8;

/// Outcome distribution for one white swing. The seven outcome fields are
/// percentages summing to exactly 100; `base_miss` and `dual_wield_miss` are
/// diagnostics outside that partition (miss before hit-chance reduction, and
/// with the dual-wield penalty applied).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackTable {
    pub miss: f64,
    pub dodge: f64,
    pub parry: f64,
    pub block: f64,
    pub glancing: f64,
    pub crit: f64,
    pub hit: f64,
    pub base_miss: f64,
    pub dual_wield_miss: f64,
}

impl AttackTable {
    /// Sum of the seven partition outcomes. 100 within float tolerance for
    /// every input; exposed for assertions and API payloads.
    pub fn total(&self) -> f64 {
        self.miss + self.dodge + self.parry + self.block + self.glancing + self.crit + self.hit
    }
}

fn clamp_percent(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Build the outcome table for `stats`. Pure and total: every numeric input
/// has a defined result, including gaps large enough that avoidance consumes
/// the entire table (crit and hit collapse to 0, which is valid output).
pub fn build_attack_table(stats: &WarriorStats) -> AttackTable {
    let target_defense = stats.target_defense();
    let skill_diff = stats.skill_diff();
    let capped_skill = stats.capped_skill();
    let level_gap = stats.target_level - stats.player_level;

    let base_miss = clamp_percent(if skill_diff > 10.0 {
        5.0 + skill_diff * 0.2
    } else {
        5.0 + skill_diff * 0.1
    });
    let dual_wield_miss = clamp_percent(base_miss + DUAL_WIELD_MISS_PENALTY);

    // Hit chance reduces whichever miss value applies to the wield style.
    // The -1 at skill_diff > 10 reproduces the published hit-cap tables and
    // is preserved verbatim rather than re-derived.
    let miss_before_hit = if stats.is_dual_wielding() {
        dual_wield_miss
    } else {
        base_miss
    };
    let hit_reduction = if skill_diff > 10.0 {
        stats.hit - 1.0
    } else {
        stats.hit
    };
    let miss = (miss_before_hit - hit_reduction).max(0.0);

    let dodge = clamp_percent(5.0 + skill_diff * 0.1);
    let block = (5.0 + skill_diff * 0.1).max(0.0).min(BLOCK_CHANCE_CAP);
    let parry = if level_gap > 2 {
        BOSS_PARRY_CHANCE
    } else {
        clamp_percent(5.0 + skill_diff * 0.1)
    };
    let glancing = clamp_percent(10.0 + (target_defense - capped_skill) * 2.0);

    // Crit decays fast when outskilled, grows slowly when overskilled, and
    // skill past the level cap erodes the spellbook value.
    let mut crit = stats.spellbook_crit - stats.extra_skill() * 0.04;
    if target_defense > capped_skill {
        crit -= (target_defense - capped_skill) * 0.2;
    } else {
        crit += (capped_skill - target_defense) * 0.04;
    }
    if level_gap > 2 && stats.aura_crit > 0.0 {
        crit -= stats.aura_crit.min(AURA_CRIT_SUPPRESSION_CAP);
    }
    let crit = crit.max(0.0);

    // Single-roll resolution: each outcome consumes from the remaining
    // probability mass in precedence order, crit takes whatever the avoidance
    // outcomes left over, and hit is the final remainder.
    let mut remaining = 100.0;
    let miss = consume(&mut remaining, miss);
    let parry = consume(&mut remaining, parry);
    let dodge = consume(&mut remaining, dodge);
    let block = consume(&mut remaining, block);
    let glancing = consume(&mut remaining, glancing);
    let crit = consume(&mut remaining, crit);
    let hit = remaining.max(0.0);

    AttackTable {
        miss,
        dodge,
        parry,
        block,
        glancing,
        crit,
        hit,
        base_miss,
        dual_wield_miss,
    }
}

fn consume(remaining: &mut f64, chance: f64) -> f64 {
    let taken = chance.min(*remaining).max(0.0);
    *remaining -= taken;
    taken
}

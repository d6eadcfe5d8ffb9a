//! Closed-form damage values for the warrior ability catalog.
//!
//! Every coefficient here is a fixed balance constant for the highest trained
//! rank at level 60. Abilities are independent of the attack table and of one
//! another; the full set is always computed together.

use serde::{Deserialize, Serialize};

use crate::combat::engine::white_damage;
use crate::combat::stats::WarriorStats;

pub const EXECUTE_BASE_DAMAGE: f64 = 600.0;
pub const EXECUTE_DAMAGE_PER_RAGE: f64 = 15.0;
pub const EXECUTE_RAGE_COST: f64 = 15.0;

const BLOODTHIRST_AP_COEFFICIENT: f64 = 0.45;
const MORTAL_STRIKE_BONUS: f64 = 160.0;
const OVERPOWER_BONUS: f64 = 35.0;
const SLAM_BONUS: f64 = 87.0;
const HEROIC_STRIKE_BONUS: f64 = 157.0;
const CLEAVE_BONUS: f64 = 50.0;
const IMPROVED_CLEAVE_STEP: f64 = 0.4;
const SHIELD_SLAM_BASE: f64 = 350.0;
const HAMSTRING_DAMAGE: f64 = 45.0;

/// Per-call overrides layered over the base [WarriorStats]. The base record
/// is never mutated; a `None` field falls through to the stored value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AbilityOverrides {
    #[serde(default)]
    pub rage: Option<f64>,
    #[serde(default)]
    pub improved_cleave: Option<i32>,
    #[serde(default)]
    pub improved_execute_rage: Option<f64>,
}

/// Expected damage for every catalog ability, keyed by name through
/// [AbilityDamageSet::entries]. Purely derived; recomputed per query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AbilityDamageSet {
    pub bloodthirst: f64,
    pub mortal_strike: f64,
    pub whirlwind: f64,
    pub overpower: f64,
    pub slam: f64,
    pub heroic_strike: f64,
    pub cleave: f64,
    pub execute: f64,
    pub shield_slam: f64,
    pub hamstring: f64,
}

impl AbilityDamageSet {
    /// Name-to-damage view in stable catalog order.
    pub fn entries(&self) -> [(&'static str, f64); 10] {
        [
            ("bloodthirst", self.bloodthirst),
            ("mortal_strike", self.mortal_strike),
            ("whirlwind", self.whirlwind),
            ("overpower", self.overpower),
            ("slam", self.slam),
            ("heroic_strike", self.heroic_strike),
            ("cleave", self.cleave),
            ("execute", self.execute),
            ("shield_slam", self.shield_slam),
            ("hamstring", self.hamstring),
        ]
    }
}

/// Compute the full ability set. Instant attacks that scale with weapon damage
/// use the white hit at `normalized_speed`; on-next-swing attacks (Heroic
/// Strike, Cleave, Slam) use the real main-hand speed.
pub fn ability_damage(
    stats: &WarriorStats,
    normalized_speed: f64,
    overrides: &AbilityOverrides,
) -> AbilityDamageSet {
    let rage = overrides.rage.unwrap_or(stats.rage);
    let improved_cleave = overrides.improved_cleave.unwrap_or(stats.improved_cleave);
    let improved_execute_rage = overrides
        .improved_execute_rage
        .unwrap_or(stats.improved_execute_rage);

    let normalized = white_damage(stats.base_damage_mh, normalized_speed, stats);
    let swing = white_damage(stats.base_damage_mh, stats.base_speed_mh, stats);

    let spendable_rage = (rage - EXECUTE_RAGE_COST + improved_execute_rage).max(0.0);

    AbilityDamageSet {
        bloodthirst: BLOODTHIRST_AP_COEFFICIENT * stats.attack_power,
        mortal_strike: normalized + MORTAL_STRIKE_BONUS,
        whirlwind: normalized,
        overpower: normalized + OVERPOWER_BONUS,
        slam: swing + SLAM_BONUS,
        heroic_strike: swing + HEROIC_STRIKE_BONUS,
        cleave: swing + CLEAVE_BONUS * (1.0 + IMPROVED_CLEAVE_STEP * f64::from(improved_cleave)),
        execute: EXECUTE_BASE_DAMAGE + EXECUTE_DAMAGE_PER_RAGE * spendable_rage,
        shield_slam: SHIELD_SLAM_BASE + stats.block_value,
        hamstring: HAMSTRING_DAMAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> WarriorStats {
        WarriorStats {
            base_damage_mh: 100.0,
            base_speed_mh: 2.8,
            attack_power: 700.0,
            block_value: 120.0,
            rage: 0.0,
            ..WarriorStats::default()
        }
    }

    #[test]
    fn execute_floors_at_base_damage_below_threshold() {
        let base = stats();
        for rage in [0.0, 10.0, 15.0] {
            let set = ability_damage(
                &base,
                2.4,
                &AbilityOverrides {
                    rage: Some(rage),
                    ..AbilityOverrides::default()
                },
            );
            assert_eq!(set.execute, EXECUTE_BASE_DAMAGE);
        }
    }

    #[test]
    fn execute_gains_fifteen_damage_per_spendable_rage() {
        let base = stats();
        let at_40 = ability_damage(
            &base,
            2.4,
            &AbilityOverrides {
                rage: Some(40.0),
                ..AbilityOverrides::default()
            },
        );
        assert_eq!(at_40.execute, 600.0 + 15.0 * 25.0);

        // Refunded rage moves the threshold, not the slope.
        let refunded = ability_damage(
            &base,
            2.4,
            &AbilityOverrides {
                rage: Some(40.0),
                improved_execute_rage: Some(6.0),
                ..AbilityOverrides::default()
            },
        );
        assert_eq!(refunded.execute, 600.0 + 15.0 * 31.0);
    }

    #[test]
    fn overrides_do_not_touch_base_stats() {
        let base = stats();
        let _ = ability_damage(
            &base,
            2.4,
            &AbilityOverrides {
                rage: Some(99.0),
                improved_cleave: Some(3),
                improved_execute_rage: Some(8.0),
            },
        );
        assert_eq!(base.rage, 0.0);
        assert_eq!(base.improved_cleave, 0);
    }

    #[test]
    fn normalized_and_swing_damage_feed_the_right_abilities() {
        let base = stats();
        let set = ability_damage(&base, 2.4, &AbilityOverrides::default());
        // normalized white: 100 + 700/14*2.4 = 220; swing white: 100 + 700/14*2.8 = 240
        assert_eq!(set.whirlwind, 220.0);
        assert_eq!(set.mortal_strike, 380.0);
        assert_eq!(set.overpower, 255.0);
        assert_eq!(set.slam, 327.0);
        assert_eq!(set.heroic_strike, 397.0);
        assert_eq!(set.cleave, 290.0);
        assert_eq!(set.bloodthirst, 315.0);
        assert_eq!(set.shield_slam, 470.0);
        assert_eq!(set.hamstring, 45.0);
    }

    #[test]
    fn improved_cleave_scales_only_the_bonus() {
        let base = stats();
        let ranked = ability_damage(
            &base,
            2.4,
            &AbilityOverrides {
                improved_cleave: Some(3),
                ..AbilityOverrides::default()
            },
        );
        // 240 swing + 50 * (1 + 1.2)
        assert_eq!(ranked.cleave, 240.0 + 110.0);
    }
}

//! Combatant parameters for one DPS evaluation. Built by hand (CLI flags, API
//! payloads) or by the gear aggregator from catalog items.

use serde::{Deserialize, Serialize};

/// Fully resolved input record for the combat core. Percentage fields are
/// interpreted on a 0..100 scale; out-of-range values are clamped where the
/// formulas require it, never rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarriorStats {
    pub player_level: i32,
    pub target_level: i32,
    pub weapon_skill: i32,
    pub base_damage_mh: f64,
    pub base_speed_mh: f64,
    pub attack_power: f64,
    /// Hit chance percent from gear.
    #[serde(default)]
    pub hit: f64,
    /// Crit percent as shown in the spellbook (gear + talents).
    #[serde(default)]
    pub spellbook_crit: f64,
    /// Aura-granted crit percent, suppressed against higher-level targets.
    #[serde(default)]
    pub aura_crit: f64,
    #[serde(default)]
    pub base_damage_oh: f64,
    #[serde(default)]
    pub base_speed_oh: f64,
    /// Dual Wield Specialization talent ranks (0..=5).
    #[serde(default)]
    pub dual_wield_spec: i32,
    /// Impale talent ranks (0..=2).
    #[serde(default)]
    pub impale: i32,
    /// Shield block value, feeds Shield Slam.
    #[serde(default)]
    pub block_value: f64,
    /// Current rage, feeds Execute.
    #[serde(default)]
    pub rage: f64,
    /// Improved Cleave talent ranks (0..=3).
    #[serde(default)]
    pub improved_cleave: i32,
    /// Rage refunded toward Execute's 15-rage cost by talents/set bonuses.
    #[serde(default)]
    pub improved_execute_rage: f64,
    #[serde(default)]
    pub target_armor: f64,
    #[serde(default = "default_target_block_value")]
    pub target_block_value: f64,
}

fn default_target_block_value() -> f64 {
    45.0
}

impl WarriorStats {
    /// Off-hand damage and speed both present means the combatant dual-wields.
    pub fn is_dual_wielding(&self) -> bool {
        self.base_damage_oh > 0.0 && self.base_speed_oh > 0.0
    }

    pub fn target_defense(&self) -> f64 {
        f64::from(self.target_level) * 5.0
    }

    /// Weapon skill capped at the level band that matters for this attacker.
    pub fn capped_skill(&self) -> f64 {
        f64::from(self.weapon_skill).min(f64::from(self.player_level) * 5.0)
    }

    /// Weapon skill beyond the level cap; erodes crit instead of helping.
    pub fn extra_skill(&self) -> f64 {
        (f64::from(self.weapon_skill) - f64::from(self.player_level) * 5.0).max(0.0)
    }

    pub fn skill_diff(&self) -> f64 {
        self.target_defense() - f64::from(self.weapon_skill)
    }
}

impl Default for WarriorStats {
    fn default() -> Self {
        Self {
            player_level: 60,
            target_level: 63,
            weapon_skill: 300,
            base_damage_mh: 0.0,
            base_speed_mh: 0.0,
            attack_power: 0.0,
            hit: 0.0,
            spellbook_crit: 0.0,
            aura_crit: 0.0,
            base_damage_oh: 0.0,
            base_speed_oh: 0.0,
            dual_wield_spec: 0,
            impale: 0,
            block_value: 0.0,
            rage: 0.0,
            improved_cleave: 0,
            improved_execute_rage: 0.0,
            target_armor: 0.0,
            target_block_value: default_target_block_value(),
        }
    }
}

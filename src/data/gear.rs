//! Gear aggregator: folds named catalog items into a fully populated
//! [WarriorStats]. The combat core never touches the store; this module is
//! the only bridge between the two.

use serde::{Deserialize, Serialize};

use crate::combat::WarriorStats;
use crate::data::item::Item;
use crate::data::store::{self, StoreError};

/// Attack power granted per point of strength.
const ATTACK_POWER_PER_STRENGTH: f64 = 2.0;

/// Agility per percent of crit.
const AGILITY_PER_CRIT: f64 = 20.0;

/// Non-gear inputs for an item-based evaluation: everything the player types
/// in directly rather than reading off equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearInputs {
    #[serde(default = "default_player_level")]
    pub player_level: i32,
    #[serde(default = "default_target_level")]
    pub target_level: i32,
    #[serde(default = "default_weapon_skill")]
    pub weapon_skill: i32,
    #[serde(default)]
    pub dual_wield_spec: i32,
    #[serde(default)]
    pub impale: i32,
    #[serde(default)]
    pub target_armor: f64,
    #[serde(default = "default_target_block_value")]
    pub target_block_value: f64,
    #[serde(default)]
    pub items: Vec<String>,
}

fn default_player_level() -> i32 {
    60
}
fn default_target_level() -> i32 {
    63
}
fn default_weapon_skill() -> i32 {
    300
}
fn default_target_block_value() -> f64 {
    45.0
}

impl Default for GearInputs {
    fn default() -> Self {
        Self {
            player_level: default_player_level(),
            target_level: default_target_level(),
            weapon_skill: default_weapon_skill(),
            dual_wield_spec: 0,
            impale: 0,
            target_armor: 0.0,
            target_block_value: default_target_block_value(),
            items: Vec::new(),
        }
    }
}

/// Sum item stat deltas onto a zeroed [WarriorStats], then elevate strength
/// and agility into their derived fields. Both the short (`str`/`agi`) and
/// long (`strength`/`agility`) keys are accepted.
pub fn aggregate_items(inputs: &GearInputs, items: &[Item]) -> WarriorStats {
    let mut stats = WarriorStats {
        player_level: inputs.player_level,
        target_level: inputs.target_level,
        weapon_skill: inputs.weapon_skill,
        dual_wield_spec: inputs.dual_wield_spec,
        impale: inputs.impale,
        target_armor: inputs.target_armor,
        target_block_value: inputs.target_block_value,
        base_damage_mh: 0.0,
        base_speed_mh: 0.0,
        ..WarriorStats::default()
    };

    let mut strength = 0.0;
    let mut agility = 0.0;
    for item in items {
        stats.attack_power += item.stat("attack_power");
        stats.hit += item.stat("hit");
        stats.spellbook_crit += item.stat("spellbook_crit");
        stats.base_damage_mh += item.stat("base_damage_mh");
        stats.base_speed_mh += item.stat("base_speed_mh");
        stats.base_damage_oh += item.stat("base_damage_oh");
        stats.base_speed_oh += item.stat("base_speed_oh");
        strength += item.stat("str") + item.stat("strength");
        agility += item.stat("agi") + item.stat("agility");
    }

    stats.attack_power += strength * ATTACK_POWER_PER_STRENGTH;
    stats.spellbook_crit += agility / AGILITY_PER_CRIT;
    stats
}

/// Resolve `inputs.items` through the catalog at `store_path` and aggregate.
pub fn build_stats(store_path: &str, inputs: &GearInputs) -> Result<WarriorStats, StoreError> {
    let items = store::get_items(store_path, &inputs.items)?;
    Ok(aggregate_items(inputs, &items))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn item(name: &str, stats: &[(&str, f64)]) -> Item {
        Item {
            name: name.to_string(),
            slot: "Chest".to_string(),
            required_level: 60,
            stats: stats
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn strength_and_agility_elevate_into_derived_fields() {
        let items = vec![
            item("Breastplate", &[("str", 30.0), ("agi", 20.0)]),
            item("Band", &[("attack_power", 40.0), ("spellbook_crit", 1.0)]),
        ];
        let stats = aggregate_items(&GearInputs::default(), &items);
        assert_eq!(stats.attack_power, 40.0 + 60.0);
        assert_eq!(stats.spellbook_crit, 1.0 + 1.0);
    }

    #[test]
    fn weapon_fields_sum_across_items() {
        let items = vec![
            item("Blade", &[("base_damage_mh", 90.0), ("base_speed_mh", 2.7)]),
            item("Dirk", &[("base_damage_oh", 40.0), ("base_speed_oh", 1.5)]),
        ];
        let stats = aggregate_items(&GearInputs::default(), &items);
        assert_eq!(stats.base_damage_mh, 90.0);
        assert_eq!(stats.base_speed_mh, 2.7);
        assert!(stats.is_dual_wielding());
    }
}

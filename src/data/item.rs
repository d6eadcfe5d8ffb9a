//! Item records for the gear catalog. Stats are additive deltas keyed by a
//! fixed whitelist that matches the [WarriorStats](crate::combat::WarriorStats)
//! fields the gear aggregator knows how to fold in.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Stat keys an item may carry. `str` and `agi` are elevated by the gear
/// aggregator (strength feeds attack power, agility feeds crit) rather than
/// mapping to a stats field directly.
pub const STAT_KEYS: &[&str] = &[
    "attack_power",
    "hit",
    "spellbook_crit",
    "str",
    "strength",
    "agi",
    "agility",
    "base_damage_mh",
    "base_speed_mh",
    "base_damage_oh",
    "base_speed_oh",
];

/// Equipment slots used for the catalog's `slot` field.
pub const ITEM_SLOTS: &[&str] = &[
    "Helm",
    "Neck",
    "Chest",
    "Bracers",
    "Hands",
    "Belt",
    "Legs",
    "Boots",
    "Ring",
    "Trinket",
    "Main Hand",
    "Off Hand",
    "Ranged",
    "Ammo",
];

/// One named piece of gear. Items are keyed by name in the catalog; stats is
/// an ordered map so serialized output is stable across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub slot: String,
    pub required_level: i32,
    #[serde(default)]
    pub stats: BTreeMap<String, f64>,
}

impl Item {
    pub fn stat(&self, key: &str) -> f64 {
        self.stats.get(key).copied().unwrap_or(0.0)
    }
}

pub fn is_known_stat_key(key: &str) -> bool {
    STAT_KEYS.contains(&key)
}

pub fn is_known_slot(slot: &str) -> bool {
    ITEM_SLOTS.iter().any(|s| s.eq_ignore_ascii_case(slot))
}

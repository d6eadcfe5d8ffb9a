pub mod abilities;
pub mod engine;
pub mod rage;
pub mod stats;
pub mod table;

pub use abilities::{
    ability_damage, AbilityDamageSet, AbilityOverrides, EXECUTE_BASE_DAMAGE,
    EXECUTE_DAMAGE_PER_RAGE, EXECUTE_RAGE_COST,
};
pub use engine::{
    armor_mitigation, calculate_dps, dps_breakdown, expected_damage, glancing_multiplier_bounds,
    white_damage, DpsBreakdown, AP_PER_DPS, OFF_HAND_BASE_FACTOR, OFF_HAND_SPEC_STEP,
};
pub use rage::{rage_conversion_factor, rage_from_damage_dealt, rage_from_damage_taken};
pub use stats::WarriorStats;
pub use table::{build_attack_table, AttackTable, BLOCK_CHANCE_CAP, DUAL_WIELD_MISS_PENALTY};

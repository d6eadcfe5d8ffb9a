//! Rage generation from damage dealt and taken.
//!
//! The quadratic conversion factor reproduces the documented external formula
//! exactly; the coefficients are load-bearing and must not be rounded.

const RAGE_FACTOR_QUADRATIC: f64 = 0.0091107836;
const RAGE_FACTOR_LINEAR: f64 = 3.225598133;
const RAGE_FACTOR_CONSTANT: f64 = 4.2652911;

const DEALT_RAGE_SCALE: f64 = 7.5;
const TAKEN_RAGE_SCALE: f64 = 2.5;

/// Level-dependent divisor for damage-to-rage conversion. Positive for every
/// non-negative level, so the conversions below never divide by zero.
pub fn rage_conversion_factor(level: i32) -> f64 {
    let level = f64::from(level);
    RAGE_FACTOR_QUADRATIC * level * level + RAGE_FACTOR_LINEAR * level + RAGE_FACTOR_CONSTANT
}

/// Rage generated by dealing `damage` at `level`.
pub fn rage_from_damage_dealt(damage: f64, level: i32) -> f64 {
    damage / rage_conversion_factor(level) * DEALT_RAGE_SCALE
}

/// Rage generated by taking `damage` at `level`.
pub fn rage_from_damage_taken(damage: f64, level: i32) -> f64 {
    damage / rage_conversion_factor(level) * TAKEN_RAGE_SCALE
}

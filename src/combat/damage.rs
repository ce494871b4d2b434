//! Damage resolution pipeline.
//!
//! Pure functions from a base value and the two sides' statuses to a final
//! damage number. Steps, in order:
//!
//! 1. Start from the base value.
//! 2. Add the attacker's strength power.
//! 3. Apply any extra scale (power attacks).
//! 4. Multiply by the attacker's weakness multiplier.
//! 5. Multiply by the target's vulnerability multiplier.
//! 6. Clamp at zero.
//!
//! Every multiplication truncates toward zero.
//!
//! ## Usage
//!
//! ```
//! use card_battle::combat::damage::compute_damage;
//! use card_battle::status::{StatusEffects, StatusKind, StatusParams};
//!
//! let attacker = StatusEffects::new();
//! let mut target = StatusEffects::new();
//! target.insert(StatusKind::Vulnerability, StatusParams::new());
//!
//! assert_eq!(compute_damage(10, &attacker, &target), 15);
//! ```

use crate::status::{StatusEffects, StatusKind};

/// Damage multiplier of an enemy power attack.
pub const POWER_ATTACK_SCALE: f64 = 1.5;

/// Full pipeline for an unscaled hit.
#[must_use]
pub fn compute_damage(base: i32, attacker: &StatusEffects, target: &StatusEffects) -> i32 {
    compute_scaled_damage(base, 1.0, attacker, target)
}

/// Full pipeline with an extra scale applied after the strength bonus.
#[must_use]
pub fn compute_scaled_damage(
    base: i32,
    scale: f64,
    attacker: &StatusEffects,
    target: &StatusEffects,
) -> i32 {
    let mut damage = base.saturating_add(strength_bonus(attacker));

    if scale != 1.0 {
        damage = scale_truncated(damage, scale);
    }

    damage = scale_truncated(damage, weakness_multiplier(attacker));
    damage = scale_truncated(damage, vulnerability_multiplier(target));

    damage.max(0)
}

/// Flat bonus from the attacker's strength, or 0.
#[must_use]
pub fn strength_bonus(attacker: &StatusEffects) -> i32 {
    attacker
        .get(StatusKind::Strength)
        .map_or(0, |p| p.power_for(StatusKind::Strength))
}

/// Outgoing multiplier from the attacker's weakness, or 1.
#[must_use]
pub fn weakness_multiplier(attacker: &StatusEffects) -> f64 {
    attacker
        .get(StatusKind::Weakness)
        .map_or(1.0, |p| p.multiplier_for(StatusKind::Weakness))
}

/// Incoming multiplier from the target's vulnerability, or 1.
#[must_use]
pub fn vulnerability_multiplier(target: &StatusEffects) -> f64 {
    target
        .get(StatusKind::Vulnerability)
        .map_or(1.0, |p| p.multiplier_for(StatusKind::Vulnerability))
}

/// `value * multiplier`, truncated toward zero.
#[must_use]
pub fn scale_truncated(value: i32, multiplier: f64) -> i32 {
    // `as` saturates at the i32 bounds.
    (f64::from(value) * multiplier) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::StatusParams;

    fn with(kind: StatusKind, params: StatusParams) -> StatusEffects {
        let mut bag = StatusEffects::new();
        bag.insert(kind, params);
        bag
    }

    #[test]
    fn test_no_modifiers() {
        let none = StatusEffects::new();
        assert_eq!(compute_damage(12, &none, &none), 12);
    }

    #[test]
    fn test_strength_adds_power() {
        let attacker = with(StatusKind::Strength, StatusParams::new().with_power(3));
        assert_eq!(compute_damage(10, &attacker, &StatusEffects::new()), 13);
    }

    #[test]
    fn test_weakness_truncates() {
        let attacker = with(StatusKind::Weakness, StatusParams::new());
        // 11 * 0.75 = 8.25
        assert_eq!(compute_damage(11, &attacker, &StatusEffects::new()), 8);
    }

    #[test]
    fn test_vulnerability_after_weakness() {
        let attacker = with(StatusKind::Weakness, StatusParams::new());
        let target = with(StatusKind::Vulnerability, StatusParams::new());
        // (10 * 0.75) = 7, then 7 * 1.5 = 10
        assert_eq!(compute_damage(10, &attacker, &target), 10);
    }

    #[test]
    fn test_custom_multiplier() {
        let target = with(StatusKind::Vulnerability, StatusParams::new().with_multiplier(2.0));
        assert_eq!(compute_damage(7, &StatusEffects::new(), &target), 14);
    }

    #[test]
    fn test_power_attack_scale() {
        let attacker = with(StatusKind::Strength, StatusParams::new().with_power(2));
        // (5 + 2) * 1.5 = 10.5
        assert_eq!(
            compute_scaled_damage(5, POWER_ATTACK_SCALE, &attacker, &StatusEffects::new()),
            10
        );
    }

    #[test]
    fn test_clamped_at_zero() {
        let attacker = with(StatusKind::Strength, StatusParams::new().with_power(-10));
        assert_eq!(compute_damage(4, &attacker, &StatusEffects::new()), 0);
    }
}

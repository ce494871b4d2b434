//! Card effect resolution.
//!
//! One `match` over `CardType` decides what a played card does. Offensive
//! effects need a living target; without one they are skipped (and logged),
//! while the card's self-directed effects still apply.

use tracing::debug;

use super::context::CombatContext;
use super::damage::compute_damage;
use crate::cards::{Card, CardType};
use crate::combatant::{reborrow, Combatant};
use crate::events::BattleEvent;
use crate::status::{StatusKind, StatusParams};

/// Duration of the status a Buff or Debuff card applies by default.
pub const CARD_STATUS_DURATION: i32 = 2;

/// Resolve a card's effect from `user` onto `target`.
pub fn resolve_card(
    card: &Card,
    user: &mut dyn Combatant,
    target: Option<&mut dyn Combatant>,
    ctx: &mut CombatContext<'_>,
) {
    let magnitude = card.magnitude();
    let user_id = user.id();
    let mut target = target.filter(|t| t.is_alive());

    ctx.record(BattleEvent::CardPlayed {
        card_type: card.card_type(),
        magnitude,
        target: target.as_ref().map(|t| t.id()),
    });

    match card.card_type() {
        CardType::Attack => {
            if let Some(target) = live_target(card, reborrow(&mut target)) {
                let damage = compute_damage(magnitude, user.statuses(), target.statuses());
                ctx.strike(Some(user_id), target, damage);
                apply_rider(card, target, ctx);
            }
        }
        CardType::Special => {
            if let Some(target) = live_target(card, reborrow(&mut target)) {
                let damage = compute_damage(magnitude, user.statuses(), target.statuses());
                let outcome = ctx.strike(Some(user_id), target, damage);
                apply_rider(card, target, ctx);
                ctx.heal(user, outcome.landed() / 2);
            }
        }
        CardType::Defense => {
            ctx.add_shield(user, magnitude);
            apply_rider(card, user, ctx);
        }
        CardType::Dodge => {
            ctx.apply_status(user, StatusKind::Dodge, StatusParams::new());
            apply_rider(card, user, ctx);
        }
        CardType::Buff => {
            let (kind, params) = card.status().unwrap_or((
                StatusKind::Strength,
                StatusParams::new()
                    .with_power(magnitude)
                    .with_duration(CARD_STATUS_DURATION),
            ));
            ctx.apply_status(user, kind, params);
        }
        CardType::Debuff => {
            if let Some(target) = live_target(card, reborrow(&mut target)) {
                let (kind, params) = card.status().unwrap_or((
                    StatusKind::Vulnerability,
                    StatusParams::new()
                        .with_power(magnitude)
                        .with_duration(CARD_STATUS_DURATION),
                ));
                ctx.apply_status(target, kind, params);
            }
        }
    }
}

fn live_target<'t>(
    card: &Card,
    target: Option<&'t mut dyn Combatant>,
) -> Option<&'t mut dyn Combatant> {
    if target.is_none() {
        debug!(card = %card.card_type(), "no living target, offensive effect skipped");
    }
    target
}

fn apply_rider(card: &Card, recipient: &mut dyn Combatant, ctx: &mut CombatContext<'_>) {
    if let Some((kind, params)) = card.status() {
        ctx.apply_status(recipient, kind, params);
    }
}

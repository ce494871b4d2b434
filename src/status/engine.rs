//! Status application and per-turn ticking.
//!
//! Applying a status adds or overwrites the single live instance of its
//! kind. A tick runs each live status' handler in insertion order, counts
//! its duration down, and removes whatever expired in the same pass.

use smallvec::SmallVec;
use tracing::{debug, warn};

use super::effects::StatusParams;
use super::kind::StatusKind;
use super::registry::{StatusHandler, StatusRegistry};
use crate::combatant::Combatant;
use crate::events::{BattleEvent, BattleLog};

/// Add or refresh a status on a combatant.
pub fn apply_status_to_target(
    target: &mut dyn Combatant,
    kind: StatusKind,
    params: StatusParams,
    log: &mut BattleLog,
) {
    let id = target.id();
    let refreshed = target.stats_mut().statuses_mut().insert(kind, params).is_some();
    debug!(target = %id, status = %kind, refreshed, "status applied");
    log.record(BattleEvent::StatusApplied { target: id, status: kind });
}

/// Add or refresh a status by name, normalizing aliases.
///
/// Returns the canonical kind, or `None` (and leaves the target untouched)
/// if the name is unknown.
pub fn apply_named_status(
    target: &mut dyn Combatant,
    name: &str,
    params: StatusParams,
    log: &mut BattleLog,
) -> Option<StatusKind> {
    let Some(kind) = StatusKind::from_name(name) else {
        warn!(status = name, target = %target.id(), "ignoring unknown status");
        return None;
    };
    apply_status_to_target(target, kind, params, log);
    Some(kind)
}

/// Run one status tick over `combatants`, in the order given.
///
/// Dead combatants are skipped, and a combatant's remaining statuses are
/// not processed once a tick kills it.
pub fn tick_statuses<'c, I>(registry: &StatusRegistry, combatants: I, log: &mut BattleLog)
where
    I: IntoIterator<Item = &'c mut dyn Combatant>,
{
    for combatant in combatants {
        tick_combatant(registry, combatant, log);
    }
}

fn tick_combatant(registry: &StatusRegistry, combatant: &mut dyn Combatant, log: &mut BattleLog) {
    if !combatant.is_alive() {
        return;
    }

    let id = combatant.id();
    let kinds: SmallVec<[StatusKind; 4]> = combatant.statuses().kinds().collect();
    let mut expired: SmallVec<[StatusKind; 4]> = SmallVec::new();

    for kind in kinds {
        let Some(params) = combatant.status(kind) else {
            continue;
        };

        match registry.handler(kind) {
            Some(StatusHandler::DamageOverTime) => {
                let outcome = combatant.stats_mut().apply_damage(params.power_for(kind));
                debug!(target = %id, status = %kind, dealt = outcome.dealt, "status damage");
                log.record(BattleEvent::DamageDealt {
                    source: None,
                    target: id,
                    amount: outcome.dealt,
                    absorbed: outcome.absorbed,
                });
            }
            Some(StatusHandler::HealOverTime) => {
                let healed = combatant.stats_mut().heal(params.power_for(kind));
                if healed > 0 {
                    log.record(BattleEvent::Healed { target: id, amount: healed });
                }
            }
            Some(StatusHandler::Passive | StatusHandler::OneShot) | None => {}
        }

        if registry.decrements(kind) {
            let statuses = combatant.stats_mut().statuses_mut();
            if let Some(duration) = statuses.get_mut(kind).and_then(|p| p.duration.as_mut()) {
                *duration = duration.saturating_sub(1);
                if *duration <= 0 {
                    expired.push(kind);
                }
            }
        }

        if !combatant.is_alive() {
            debug!(target = %id, "combatant died during status tick");
            break;
        }
    }

    for kind in expired {
        combatant.stats_mut().statuses_mut().remove(kind);
        debug!(target = %id, status = %kind, "status expired");
        log.record(BattleEvent::StatusExpired { target: id, status: kind });
    }
}

//! Status parameters and the per-combatant status bag.
//!
//! A combatant holds at most one live instance per `StatusKind`. Applying a
//! status that is already present overwrites its parameters in place (the
//! entry keeps its original position), so re-applying refreshes rather than
//! stacks.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::kind::StatusKind;

/// Parameters of a live status.
///
/// All fields are optional; absent values fall back to the kind's defaults.
/// An absent `duration` means the status never expires on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusParams {
    /// Magnitude for damage/heal over time and flat buffs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<i32>,

    /// Damage multiplier for weakness/vulnerability.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<f64>,

    /// Status ticks remaining.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
}

impl StatusParams {
    /// Parameters with every field absent.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            power: None,
            multiplier: None,
            duration: None,
        }
    }

    /// Set power.
    #[must_use]
    pub const fn with_power(mut self, power: i32) -> Self {
        self.power = Some(power);
        self
    }

    /// Set multiplier.
    #[must_use]
    pub const fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = Some(multiplier);
        self
    }

    /// Set duration in ticks.
    #[must_use]
    pub const fn with_duration(mut self, duration: i32) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Power, or the kind's default.
    #[must_use]
    pub fn power_for(&self, kind: StatusKind) -> i32 {
        self.power.unwrap_or_else(|| kind.default_power())
    }

    /// Multiplier, or the kind's default.
    #[must_use]
    pub fn multiplier_for(&self, kind: StatusKind) -> f64 {
        self.multiplier.unwrap_or_else(|| kind.default_multiplier())
    }
}

/// Insertion-ordered mapping of status kind to parameters.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusEffects {
    entries: SmallVec<[(StatusKind, StatusParams); 4]>,
}

impl StatusEffects {
    /// Create an empty status bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a status, or overwrite the live instance of the same kind.
    ///
    /// Returns the replaced parameters if the status was already present.
    pub fn insert(&mut self, kind: StatusKind, params: StatusParams) -> Option<StatusParams> {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == kind) {
            return Some(std::mem::replace(&mut entry.1, params));
        }
        self.entries.push((kind, params));
        None
    }

    /// Get the parameters of a live status.
    #[must_use]
    pub fn get(&self, kind: StatusKind) -> Option<&StatusParams> {
        self.entries.iter().find(|(k, _)| *k == kind).map(|(_, p)| p)
    }

    /// Get mutable parameters of a live status.
    pub fn get_mut(&mut self, kind: StatusKind) -> Option<&mut StatusParams> {
        self.entries.iter_mut().find(|(k, _)| *k == kind).map(|(_, p)| p)
    }

    /// Check whether a status is live.
    #[must_use]
    pub fn contains(&self, kind: StatusKind) -> bool {
        self.entries.iter().any(|(k, _)| *k == kind)
    }

    /// Remove a status, returning its parameters.
    pub fn remove(&mut self, kind: StatusKind) -> Option<StatusParams> {
        let pos = self.entries.iter().position(|(k, _)| *k == kind)?;
        Some(self.entries.remove(pos).1)
    }

    /// Iterate over live statuses in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (StatusKind, &StatusParams)> {
        self.entries.iter().map(|(k, p)| (*k, p))
    }

    /// Live status kinds in insertion order.
    pub fn kinds(&self) -> impl Iterator<Item = StatusKind> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    /// Number of live statuses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no status is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every status.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

//! Ordered deployment tracks.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::action::Control;
use crate::core::role::Role;
use crate::error::RuleViolation;

/// Allowed values for each slot, in fill order.
pub const SLOT_REQUIREMENTS: [[u8; 2]; 3] = [[1, 2], [3, 4], [5, 6]];

/// Which deployment track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackKind {
    LandingGear,
    Flaps,
}

impl TrackKind {
    /// The role that deploys this track.
    #[must_use]
    pub const fn owner(self) -> Role {
        match self {
            TrackKind::LandingGear => Role::Pilot,
            TrackKind::Flaps => Role::Copilot,
        }
    }

    #[must_use]
    pub const fn control(self) -> Control {
        match self {
            TrackKind::LandingGear => Control::LandingGear,
            TrackKind::Flaps => Control::Flaps,
        }
    }
}

impl std::fmt::Display for TrackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackKind::LandingGear => write!(f, "landing gear"),
            TrackKind::Flaps => write!(f, "flaps"),
        }
    }
}

/// Append-only three-slot track.
///
/// Invariant: `values[i]` is always one of `SLOT_REQUIREMENTS[i]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentTrack {
    kind: TrackKind,
    values: SmallVec<[u8; 3]>,
}

impl DeploymentTrack {
    #[must_use]
    pub fn new(kind: TrackKind) -> Self {
        Self {
            kind,
            values: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> TrackKind {
        self.kind
    }

    /// Placed values, in slot order.
    #[must_use]
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn is_deployed(&self) -> bool {
        self.values.len() == SLOT_REQUIREMENTS.len()
    }

    /// Values the next slot accepts, or `None` once fully deployed.
    #[must_use]
    pub fn next_requirement(&self) -> Option<[u8; 2]> {
        SLOT_REQUIREMENTS.get(self.values.len()).copied()
    }

    /// Check `value` could go in the next slot without placing it.
    pub fn check(&self, value: u8) -> Result<(), RuleViolation> {
        let allowed = self
            .next_requirement()
            .ok_or(RuleViolation::TrackFull(self.kind))?;
        if !allowed.contains(&value) {
            return Err(RuleViolation::SlotRequires {
                track: self.kind,
                slot: self.values.len(),
                allowed,
            });
        }
        Ok(())
    }

    /// Place `value` in the next slot. Returns the slot index filled.
    pub fn push(&mut self, value: u8) -> Result<usize, RuleViolation> {
        self.check(value)?;
        self.values.push(value);
        Ok(self.values.len() - 1)
    }
}

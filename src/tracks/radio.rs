//! Radio traffic track.
//!
//! Each slot holds one plane that is cleared by a die showing exactly its
//! value. Unlike deployment tracks there is no fill order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::RuleViolation;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioTrack {
    planes: SmallVec<[u8; 3]>,
    cleared: SmallVec<[bool; 3]>,
}

impl RadioTrack {
    #[must_use]
    pub fn new(planes: &[u8]) -> Self {
        Self {
            planes: SmallVec::from_slice(planes),
            cleared: SmallVec::from_elem(false, planes.len()),
        }
    }

    /// Required value per slot.
    #[must_use]
    pub fn planes(&self) -> &[u8] {
        &self.planes
    }

    /// Cleared flag per slot, parallel to `planes`.
    #[must_use]
    pub fn cleared(&self) -> &[bool] {
        &self.cleared
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.planes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    #[must_use]
    pub fn is_cleared(&self, slot: usize) -> bool {
        self.cleared.get(slot).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn all_cleared(&self) -> bool {
        self.cleared.iter().all(|c| *c)
    }

    /// Uncleared slots a die of `value` would clear.
    pub fn open_slots_for(&self, value: u8) -> impl Iterator<Item = usize> + '_ {
        self.planes
            .iter()
            .zip(&self.cleared)
            .enumerate()
            .filter(move |(_, (plane, cleared))| **plane == value && !**cleared)
            .map(|(slot, _)| slot)
    }

    /// Check a die of `value` could clear `slot` without clearing it.
    pub fn check(&self, slot: usize, value: u8) -> Result<(), RuleViolation> {
        let out_of_range = RuleViolation::RadioSlotOutOfRange {
            slot,
            len: self.len(),
        };
        let (&required, &cleared) = self
            .planes
            .get(slot)
            .zip(self.cleared.get(slot))
            .ok_or(out_of_range)?;
        if cleared {
            return Err(RuleViolation::RadioAlreadyCleared(slot));
        }
        if value != required {
            return Err(RuleViolation::RadioValueMismatch {
                slot,
                required,
                got: value,
            });
        }
        Ok(())
    }

    pub fn clear(&mut self, slot: usize, value: u8) -> Result<(), RuleViolation> {
        self.check(slot, value)?;
        if let Some(flag) = self.cleared.get_mut(slot) {
            *flag = true;
        }
        Ok(())
    }

    /// True when every plane has exactly one cleared flag.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.planes.len() == self.cleared.len()
    }
}

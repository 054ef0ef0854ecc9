//! Game configuration.
//!
//! `GameConfig::default()` is the standard rule set: a 7-step approach,
//! four dice per role, a three-token coffee pot, orientation limits of
//! ±3 and radio traffic needing a 2, a 4 and a 6. The `with_*` methods
//! exist so harnesses can seed the RNG or shorten the approach; they do
//! not change any rule.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::dice::{MAX_FACE, MIN_FACE};
use crate::error::ConfigError;

/// Default number of approach steps before touchdown.
pub const STARTING_DISTANCE: u8 = 7;
/// Default dice rolled per role each round.
pub const DICE_PER_ROLE: usize = 4;
/// Default size of the shared coffee pot.
pub const MAX_COFFEE: u8 = 3;
/// Default bank limit in either direction.
pub const ORIENTATION_LIMIT: i8 = 3;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the default dice RNG.
    pub seed: u64,

    /// Approach steps remaining at round 1.
    pub starting_distance: u8,

    /// Dice each role rolls per round.
    pub dice_per_role: usize,

    /// Coffee token cap.
    pub max_coffee: u8,

    /// Orientation is clamped to `-limit..=limit`.
    pub orientation_limit: i8,

    /// Die value required to clear each radio slot, in slot order.
    pub radio_planes: SmallVec<[u8; 3]>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            starting_distance: STARTING_DISTANCE,
            dice_per_role: DICE_PER_ROLE,
            max_coffee: MAX_COFFEE,
            orientation_limit: ORIENTATION_LIMIT,
            radio_planes: smallvec![2, 4, 6],
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_starting_distance(mut self, distance: u8) -> Self {
        self.starting_distance = distance;
        self
    }

    #[must_use]
    pub fn with_dice_per_role(mut self, count: usize) -> Self {
        self.dice_per_role = count;
        self
    }

    #[must_use]
    pub fn with_max_coffee(mut self, max: u8) -> Self {
        self.max_coffee = max;
        self
    }

    #[must_use]
    pub fn with_orientation_limit(mut self, limit: i8) -> Self {
        self.orientation_limit = limit;
        self
    }

    #[must_use]
    pub fn with_radio_planes(mut self, planes: &[u8]) -> Self {
        self.radio_planes = SmallVec::from_slice(planes);
        self
    }

    /// Check every field is playable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_distance == 0 {
            return Err(ConfigError::ZeroDistance);
        }
        if self.dice_per_role == 0 {
            return Err(ConfigError::NoDice);
        }
        if self.max_coffee == 0 {
            return Err(ConfigError::NoCoffeeCapacity);
        }
        if self.orientation_limit <= 0 {
            return Err(ConfigError::OrientationLimit(self.orientation_limit));
        }
        if self.radio_planes.is_empty() {
            return Err(ConfigError::NoRadioPlanes);
        }
        if let Some(&bad) = self
            .radio_planes
            .iter()
            .find(|v| !(MIN_FACE..=MAX_FACE).contains(*v))
        {
            return Err(ConfigError::RadioValue(bad));
        }
        Ok(())
    }
}

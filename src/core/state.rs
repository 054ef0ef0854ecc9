//! Game state.
//!
//! ## GameState
//!
//! The single mutable aggregate for one game:
//! - Progress: round, current player, approach distance, orientation
//! - Terminal flags and the macro `Phase`
//! - Dice pool and every control slot
//! - Shared coffee pot and per-role reroll flags
//! - Radio traffic
//! - Action history
//!
//! Fields are public for rendering; all mutation goes through `Engine`,
//! which hands out `&GameState` or a cloned snapshot.
//!
//! ## Round-scoped vs. game-scoped
//!
//! `reset_round` clears axis and engine slots, reroll flags and the
//! current player. Distance, orientation, brakes, deployment tracks,
//! coffee and radio progress carry across rounds.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::config::GameConfig;
use super::dice::{DicePool, Die, MAX_FACE, MIN_FACE};
use super::role::{Role, RoleMap};
use crate::error::SnapshotError;
use crate::rules::speed::descent_for;
use crate::tracks::{DeploymentTrack, RadioTrack, TrackKind, SLOT_REQUIREMENTS};

/// Macro state of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Placing dice. The only non-terminal phase.
    InRound,
    /// Touched down with every landing condition met.
    Won,
    /// Touched down with at least one landing condition unmet.
    Crashed,
    /// Engines too slow to descend.
    Stalled,
    /// Round ended without both axes or both engines set.
    MandatoryMissing,
}

impl Phase {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Phase::InRound)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    // === Progress ===
    /// Round number (starts at 1).
    pub round: u32,

    /// Role whose turn it is to place a die.
    pub current_player: Role,

    /// Steps left to the runway. 0 means landed.
    pub approach_distance: u8,

    /// Bank, clamped to the configured limit. 0 is level.
    pub plane_orientation: i8,

    // === Outcome ===
    pub phase: Phase,
    pub has_landed: bool,
    pub game_over: bool,
    pub game_won: bool,

    // === Dice and controls ===
    pub dice: DicePool,
    pub axis: RoleMap<Option<u8>>,
    pub engines: RoleMap<Option<u8>>,
    /// Pilot only, persists across rounds.
    pub brakes: Option<u8>,
    pub landing_gear: DeploymentTrack,
    pub flaps: DeploymentTrack,

    // === Coffee ===
    /// Shared pot, `0..=max_coffee`.
    pub coffee_tokens: u8,
    pub max_coffee: u8,
    pub can_reroll: RoleMap<bool>,

    // === Radio ===
    pub radio: RadioTrack,

    // === History ===
    /// Accepted actions since the last reset.
    pub history: Vector<ActionRecord>,
    sequence: u32,
}

impl GameState {
    /// Fresh state at round 1 with an empty dice pool.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            round: 1,
            current_player: Role::Pilot,
            approach_distance: config.starting_distance,
            plane_orientation: 0,
            phase: Phase::InRound,
            has_landed: false,
            game_over: false,
            game_won: false,
            dice: DicePool::new(),
            axis: RoleMap::with_default(),
            engines: RoleMap::with_default(),
            brakes: None,
            landing_gear: DeploymentTrack::new(TrackKind::LandingGear),
            flaps: DeploymentTrack::new(TrackKind::Flaps),
            coffee_tokens: 0,
            max_coffee: config.max_coffee,
            can_reroll: RoleMap::with_value(false),
            radio: RadioTrack::new(&config.radio_planes),
            history: Vector::new(),
            sequence: 0,
        }
    }

    /// Clear round-scoped fields. Dice are rerolled by the engine.
    pub fn reset_round(&mut self) {
        self.current_player = Role::Pilot;
        self.axis = RoleMap::with_default();
        self.engines = RoleMap::with_default();
        self.can_reroll = RoleMap::with_value(false);
    }

    /// Append an accepted action to the history.
    pub fn record_action(&mut self, role: Role, action: Action, round: u32) {
        self.history.push_back(ActionRecord {
            role,
            action,
            round,
            sequence: self.sequence,
        });
        self.sequence = self.sequence.wrapping_add(1);
    }

    /// End the game in a terminal phase.
    pub fn finish(&mut self, phase: Phase) {
        self.phase = phase;
        self.game_over = phase.is_terminal();
        self.game_won = phase == Phase::Won;
    }

    #[must_use]
    pub fn pilot_dice(&self) -> &[Die] {
        self.dice.dice(Role::Pilot)
    }

    #[must_use]
    pub fn copilot_dice(&self) -> &[Die] {
        self.dice.dice(Role::Copilot)
    }

    #[must_use]
    pub fn track(&self, kind: TrackKind) -> &DeploymentTrack {
        match kind {
            TrackKind::LandingGear => &self.landing_gear,
            TrackKind::Flaps => &self.flaps,
        }
    }

    pub fn track_mut(&mut self, kind: TrackKind) -> &mut DeploymentTrack {
        match kind {
            TrackKind::LandingGear => &mut self.landing_gear,
            TrackKind::Flaps => &mut self.flaps,
        }
    }

    /// Sum of both engine dice once both are set.
    #[must_use]
    pub fn engine_sum(&self) -> Option<u8> {
        Some(self.engines[Role::Pilot]? + self.engines[Role::Copilot]?)
    }

    /// Descent the current engine setting would produce at round end.
    #[must_use]
    pub fn projected_descent(&self) -> Option<u8> {
        self.engine_sum().map(descent_for)
    }

    /// Serialize to a compact binary snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Restore from `to_bytes` output.
    ///
    /// The bytes are only decoded; `validate` checks the result can be
    /// played.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }

    /// Check a restored state is playable under `config`.
    pub fn validate(&self, config: &GameConfig) -> Result<(), SnapshotError> {
        config.validate()?;

        if self.round == 0 {
            return Err(SnapshotError::RoundZero);
        }
        if self.game_over != self.phase.is_terminal() || self.game_won != (self.phase == Phase::Won)
        {
            return Err(SnapshotError::PhaseFlags);
        }
        if self.plane_orientation.unsigned_abs() > config.orientation_limit.unsigned_abs() {
            return Err(SnapshotError::Orientation(self.plane_orientation));
        }

        if self.max_coffee != config.max_coffee {
            return Err(SnapshotError::CoffeeCap {
                state: self.max_coffee,
                config: config.max_coffee,
            });
        }
        if self.coffee_tokens > self.max_coffee {
            return Err(SnapshotError::CoffeeOverflow {
                tokens: self.coffee_tokens,
                max: self.max_coffee,
            });
        }

        if self.radio.planes() != config.radio_planes.as_slice() {
            return Err(SnapshotError::RadioPlanes);
        }
        if !self.radio.is_consistent() {
            return Err(SnapshotError::RadioLength {
                planes: self.radio.planes().len(),
                cleared: self.radio.cleared().len(),
            });
        }

        for kind in [TrackKind::LandingGear, TrackKind::Flaps] {
            let track = self.track(kind);
            if track.kind() != kind {
                return Err(SnapshotError::WrongTrack(kind));
            }
            if track.len() > SLOT_REQUIREMENTS.len() {
                return Err(SnapshotError::TrackLength {
                    track: kind,
                    len: track.len(),
                });
            }
            let slots = track.values().iter().zip(SLOT_REQUIREMENTS).enumerate();
            for (slot, (&value, allowed)) in slots {
                if !allowed.contains(&value) {
                    return Err(SnapshotError::TrackSlot {
                        track: kind,
                        slot,
                        value,
                    });
                }
            }
        }

        self.validate_dice(config.dice_per_role)
    }

    fn validate_dice(&self, expected: usize) -> Result<(), SnapshotError> {
        let mut seen = Vec::with_capacity(expected * 2);
        for role in Role::ALL {
            let dice = self.dice.dice(role);
            if dice.len() != expected {
                return Err(SnapshotError::DiceCount {
                    role,
                    count: dice.len(),
                    expected,
                });
            }
            for die in dice {
                if !(MIN_FACE..=MAX_FACE).contains(&die.value) {
                    return Err(SnapshotError::DieFace(die.id, die.value));
                }
                if seen.contains(&die.id) {
                    return Err(SnapshotError::DuplicateDie(die.id));
                }
                seen.push(die.id);
            }
        }
        Ok(())
    }
}

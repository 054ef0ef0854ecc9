//! Error types.
//!
//! `RuleViolation` is the recoverable class: the attempted action broke a
//! rule, nothing changed, and the caller may try again. Terminal outcomes
//! (stall, crash, missing mandatory controls) are not errors; they come
//! back as `RoundOutcome` values from `end_round`.
//!
//! `ConfigError` and `SnapshotError` are raised before play: by every
//! `Engine` constructor and by `Engine::resume` respectively.

use crate::core::action::Control;
use crate::core::dice::DieId;
use crate::core::role::Role;
use crate::tracks::TrackKind;

/// A rejected action. The game state is untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleViolation {
    #[error("the game is over, reset to play again")]
    GameOver,

    #[error("it is the {0}'s turn")]
    NotYourTurn(Role),

    #[error("invalid die: {0}")]
    InvalidDie(DieId),

    #[error("only the {owner} can use the {control}")]
    WrongRole { control: Control, owner: Role },

    #[error("{0} slot already occupied")]
    SlotOccupied(Control),

    #[error("{0} fully deployed")]
    TrackFull(TrackKind),

    #[error("{track} slot {} requires {} or {}", .slot + 1, .allowed[0], .allowed[1])]
    SlotRequires {
        track: TrackKind,
        slot: usize,
        allowed: [u8; 2],
    },

    #[error("radio slot {slot} does not exist ({len} slots)")]
    RadioSlotOutOfRange { slot: usize, len: usize },

    #[error("radio slot {0} already cleared")]
    RadioAlreadyCleared(usize),

    #[error("radio slot {slot} needs a {required}, got {got}")]
    RadioValueMismatch { slot: usize, required: u8, got: u8 },

    #[error("coffee pot is full ({0})")]
    CoffeeFull(u8),

    #[error("no coffee available")]
    NoCoffee,

    #[error("the {0} already holds a reroll")]
    RerollAlreadyHeld(Role),

    #[error("the {0} must drink coffee first")]
    MustDrinkCoffee(Role),

    #[error("the {0} has no dice left to reroll")]
    NothingToReroll(Role),
}

/// An unplayable `GameConfig`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("starting distance must be at least 1")]
    ZeroDistance,

    #[error("each role needs at least one die")]
    NoDice,

    #[error("coffee cap must be at least 1")]
    NoCoffeeCapacity,

    #[error("orientation limit must be positive, got {0}")]
    OrientationLimit(i8),

    #[error("at least one radio plane is required")]
    NoRadioPlanes,

    #[error("radio plane value {0} is not a die face")]
    RadioValue(u8),
}

/// A restored `GameState` that cannot be played under its `GameConfig`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("round must start at 1")]
    RoundZero,

    #[error("game-over flags disagree with the phase")]
    PhaseFlags,

    #[error("orientation {0} is outside the configured limit")]
    Orientation(i8),

    #[error("{tokens} coffee tokens exceed the cap of {max}")]
    CoffeeOverflow { tokens: u8, max: u8 },

    #[error("coffee cap {state} does not match the configured {config}")]
    CoffeeCap { state: u8, config: u8 },

    #[error("radio planes do not match the configuration")]
    RadioPlanes,

    #[error("radio has {planes} planes but {cleared} cleared flags")]
    RadioLength { planes: usize, cleared: usize },

    #[error("{0} slot holds the wrong track")]
    WrongTrack(TrackKind),

    #[error("{track} has {len} slots filled")]
    TrackLength { track: TrackKind, len: usize },

    #[error("{track} slot {} holds {value}", .slot + 1)]
    TrackSlot {
        track: TrackKind,
        slot: usize,
        value: u8,
    },

    #[error("the {role} has {count} dice, expected {expected}")]
    DiceCount {
        role: Role,
        count: usize,
        expected: usize,
    },

    #[error("{0} shows {1}, not a die face")]
    DieFace(DieId, u8),

    #[error("{0} appears twice")]
    DuplicateDie(DieId),
}

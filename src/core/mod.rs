//! Core types: roles, dice, actions, configuration and game state.

pub mod action;
pub mod config;
pub mod dice;
pub mod rng;
pub mod role;
pub mod state;

pub use action::{Action, ActionKind, ActionRecord, Control, UnknownControl};
pub use config::GameConfig;
pub use dice::{DicePool, Die, DieId, MAX_FACE, MIN_FACE};
pub use rng::{DiceSource, GameRng, GameRngState, ScriptedDice};
pub use role::{Role, RoleMap};
pub use state::{GameState, Phase};

//! # skyteam-engine
//!
//! Rules engine for a two-player cooperative dice game about landing a
//! plane. A pilot and a copilot each roll dice every round and take turns
//! placing them on the cockpit controls. The round ends when the plane's
//! orientation and approach distance are updated; reach the runway level
//! with the gear, flaps and brakes set and the crew wins.
//!
//! ## Design Principles
//!
//! 1. **One mutation path**: every operation is gated, validated, committed
//!    and recorded by `Engine::apply`. A rejected action leaves the state
//!    untouched.
//!
//! 2. **Injectable dice**: `Engine` is generic over `DiceSource`. Seeded
//!    `GameRng` for play, `ScriptedDice` for reproducible scenarios.
//!
//! 3. **Renderer-friendly state**: `GameState` is plain data with public
//!    fields, serializable with serde (JSON for tooling, bincode for
//!    compact snapshots).
//!
//! ## Modules
//!
//! - `core`: Roles, dice, actions, configuration, game state
//! - `tracks`: Landing gear, flaps and radio tracks
//! - `rules`: The engine, round resolution, landing checks, speed tables
//! - `error`: Rule violations and configuration errors

pub mod core;
pub mod error;
pub mod rules;
pub mod tracks;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionKind, ActionRecord, Control, UnknownControl,
    DicePool, Die, DieId,
    DiceSource, GameRng, GameRngState, ScriptedDice,
    GameConfig,
    GameState, Phase,
    Role, RoleMap,
};

pub use crate::error::{ConfigError, RuleViolation, SnapshotError};

pub use crate::rules::{
    ActionOutcome, Engine, Landing, LandingIssue, RoundOutcome,
    SpeedBand, SpeedZone,
};

pub use crate::tracks::{DeploymentTrack, RadioTrack, TrackKind};

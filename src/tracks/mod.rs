//! Placement tracks.
//!
//! Two kinds of multi-slot targets sit next to the instrument panel:
//!
//! - `DeploymentTrack`: landing gear (pilot) and flaps (copilot), filled
//!   strictly left to right, each slot accepting one of two values
//! - `RadioTrack`: incoming traffic, each slot cleared by one exact value,
//!   in any order

pub mod deployment;
pub mod radio;

pub use deployment::{DeploymentTrack, TrackKind, SLOT_REQUIREMENTS};
pub use radio::RadioTrack;

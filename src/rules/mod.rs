//! Game rules.
//!
//! `Engine` is the only entry point that mutates a game. Its operations are
//! split by concern across `placement`, `coffee` and `round`; `speed` and
//! `landing` are pure functions over values and state.

pub mod coffee;
pub mod engine;
pub mod landing;
pub mod outcome;
pub mod placement;
pub mod round;
pub mod speed;

pub use engine::Engine;
pub use landing::{landing_issues, LandingIssue};
pub use outcome::{ActionOutcome, Landing, RoundOutcome};
pub use speed::{
    descent_for, orientation_delta, orientation_marker, speed_band, SpeedBand, SpeedZone,
};

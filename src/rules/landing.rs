//! Touchdown evaluation.
//!
//! Runs once the approach distance reaches zero. All four conditions are
//! checked and every failure is reported.

use serde::{Deserialize, Serialize};

use crate::core::state::GameState;

/// A landing condition that was not met.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LandingIssue {
    /// Plane banked at touchdown.
    NotLevel(i8),
    /// Landing gear slots deployed.
    GearNotDeployed(usize),
    /// Flaps slots deployed.
    FlapsNotDeployed(usize),
    BrakesNotApplied,
}

impl std::fmt::Display for LandingIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LandingIssue::NotLevel(_) => write!(f, "not level"),
            LandingIssue::GearNotDeployed(_) => write!(f, "gear not fully deployed"),
            LandingIssue::FlapsNotDeployed(_) => write!(f, "flaps not fully deployed"),
            LandingIssue::BrakesNotApplied => write!(f, "brakes not applied"),
        }
    }
}

/// Collect every unmet landing condition. Empty means a clean landing.
#[must_use]
pub fn landing_issues(state: &GameState) -> Vec<LandingIssue> {
    let mut issues = Vec::new();

    if state.plane_orientation != 0 {
        issues.push(LandingIssue::NotLevel(state.plane_orientation));
    }
    if !state.landing_gear.is_deployed() {
        issues.push(LandingIssue::GearNotDeployed(state.landing_gear.len()));
    }
    if !state.flaps.is_deployed() {
        issues.push(LandingIssue::FlapsNotDeployed(state.flaps.len()));
    }
    if state.brakes.is_none() {
        issues.push(LandingIssue::BrakesNotApplied);
    }

    issues
}

//! Results of accepted actions.
//!
//! Every variant carries what a renderer needs to announce the action;
//! `Display` gives the human-readable confirmation. Anything else is read
//! from the state snapshot.

use serde::{Deserialize, Serialize};

use super::landing::LandingIssue;
use crate::core::action::Control;
use crate::core::dice::DieId;
use crate::core::role::Role;

/// Outcome of an accepted action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    Placed { role: Role, control: Control, value: u8 },
    RadioCleared { role: Role, slot: usize, value: u8 },
    /// A die spent on the radio through `place_dice`; no slot cleared.
    RadioDiscarded { role: Role, value: u8 },
    CoffeeMade { role: Role, tokens: u8 },
    CoffeeDrunk { role: Role, tokens: u8 },
    Rerolled { role: Role, count: usize },
    DieRerolled { role: Role, die: DieId, value: u8 },
    Round(RoundOutcome),
}

impl ActionOutcome {
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, ActionOutcome::Round(round) if round.is_game_over())
    }

    #[must_use]
    pub fn is_game_won(&self) -> bool {
        matches!(self, ActionOutcome::Round(round) if round.is_game_won())
    }

    /// The round outcome, if this was `end_round`.
    #[must_use]
    pub fn as_round(&self) -> Option<&RoundOutcome> {
        match self {
            ActionOutcome::Round(round) => Some(round),
            _ => None,
        }
    }
}

impl std::fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionOutcome::Placed { role, control, value } => {
                write!(f, "{role} placed {value} on {control}")
            }
            ActionOutcome::RadioCleared { role, slot, value } => {
                write!(f, "{role} cleared radio slot {slot} with {value}")
            }
            ActionOutcome::RadioDiscarded { role, value } => {
                write!(f, "{role} spent {value} on the radio, no slot cleared")
            }
            ActionOutcome::CoffeeMade { tokens, .. } => {
                write!(f, "coffee brewed, {tokens} in the pot")
            }
            ActionOutcome::CoffeeDrunk { role, .. } => {
                write!(f, "{role} drank coffee and may reroll")
            }
            ActionOutcome::Rerolled { count, .. } => write!(f, "{count} dice rerolled"),
            ActionOutcome::DieRerolled { value, .. } => write!(f, "die rerolled to {value}"),
            ActionOutcome::Round(round) => write!(f, "{round}"),
        }
    }
}

/// How a landed game ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Landing {
    Won,
    Crashed(Vec<LandingIssue>),
}

/// Result of resolving a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Still on approach; the next round has been rolled.
    Advanced {
        completed_round: u32,
        engine_sum: u8,
        descent: u8,
        distance: u8,
    },
    /// Reached the runway.
    Landed {
        engine_sum: u8,
        descent: u8,
        landing: Landing,
    },
    /// Engine sum too low to descend.
    Stalled { engine_sum: u8 },
    AxesNotConfigured,
    EnginesNotConfigured,
}

impl RoundOutcome {
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        !matches!(self, RoundOutcome::Advanced { .. })
    }

    #[must_use]
    pub fn is_game_won(&self) -> bool {
        matches!(
            self,
            RoundOutcome::Landed {
                landing: Landing::Won,
                ..
            }
        )
    }

    #[must_use]
    pub fn engine_sum(&self) -> Option<u8> {
        match self {
            RoundOutcome::Advanced { engine_sum, .. }
            | RoundOutcome::Landed { engine_sum, .. }
            | RoundOutcome::Stalled { engine_sum } => Some(*engine_sum),
            RoundOutcome::AxesNotConfigured | RoundOutcome::EnginesNotConfigured => None,
        }
    }

    #[must_use]
    pub fn descent(&self) -> Option<u8> {
        match self {
            RoundOutcome::Advanced { descent, .. } | RoundOutcome::Landed { descent, .. } => {
                Some(*descent)
            }
            RoundOutcome::Stalled { .. } => Some(0),
            RoundOutcome::AxesNotConfigured | RoundOutcome::EnginesNotConfigured => None,
        }
    }

    /// Unmet landing conditions, if the plane crashed on touchdown.
    #[must_use]
    pub fn landing_issues(&self) -> &[LandingIssue] {
        match self {
            RoundOutcome::Landed {
                landing: Landing::Crashed(issues),
                ..
            } => issues.as_slice(),
            _ => &[],
        }
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundOutcome::Advanced {
                completed_round,
                descent,
                ..
            } => write!(
                f,
                "round {completed_round} complete, descended {descent}, starting round {}",
                completed_round + 1
            ),
            RoundOutcome::Landed {
                landing: Landing::Won,
                ..
            } => write!(f, "successful landing"),
            RoundOutcome::Landed {
                landing: Landing::Crashed(issues),
                ..
            } => {
                write!(f, "crash landing: ")?;
                for (i, issue) in issues.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{issue}")?;
                }
                Ok(())
            }
            RoundOutcome::Stalled { .. } => write!(f, "game over: stalled, no descent"),
            RoundOutcome::AxesNotConfigured => write!(f, "game over: axes not configured"),
            RoundOutcome::EnginesNotConfigured => write!(f, "game over: engines not configured"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_outcome_flags() {
        let advanced = RoundOutcome::Advanced {
            completed_round: 1,
            engine_sum: 8,
            descent: 2,
            distance: 5,
        };
        assert!(!advanced.is_game_over());
        assert_eq!(advanced.engine_sum(), Some(8));
        assert_eq!(advanced.descent(), Some(2));
        assert_eq!(
            advanced.to_string(),
            "round 1 complete, descended 2, starting round 2"
        );

        let stalled = RoundOutcome::Stalled { engine_sum: 3 };
        assert!(stalled.is_game_over());
        assert!(!stalled.is_game_won());
        assert_eq!(stalled.descent(), Some(0));

        assert_eq!(RoundOutcome::AxesNotConfigured.descent(), None);
    }

    #[test]
    fn test_crash_message_lists_issues() {
        let crashed = RoundOutcome::Landed {
            engine_sum: 5,
            descent: 1,
            landing: Landing::Crashed(vec![
                LandingIssue::NotLevel(1),
                LandingIssue::BrakesNotApplied,
            ]),
        };

        assert!(crashed.is_game_over());
        assert!(!crashed.is_game_won());
        assert_eq!(crashed.landing_issues().len(), 2);
        assert_eq!(crashed.to_string(), "crash landing: not level, brakes not applied");
    }

    #[test]
    fn test_action_outcome_wraps_round() {
        let won = ActionOutcome::Round(RoundOutcome::Landed {
            engine_sum: 6,
            descent: 1,
            landing: Landing::Won,
        });
        assert!(won.is_game_over());
        assert!(won.is_game_won());
        assert_eq!(won.to_string(), "successful landing");

        let placed = ActionOutcome::Placed {
            role: Role::Pilot,
            control: Control::Axis,
            value: 3,
        };
        assert!(!placed.is_game_over());
        assert!(placed.as_round().is_none());
        assert_eq!(placed.to_string(), "pilot placed 3 on axis");
    }
}

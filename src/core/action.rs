//! Action representation.
//!
//! Every operation a caller can ask of the engine is an `Action`. The acting
//! `Role` is passed alongside it (see `Engine::apply`), so the same action
//! value can be tried for either seat.
//!
//! Whether an action consumes a turn is decided in one place,
//! `ActionKind::consumes_turn`. Only die placements on the instrument panel
//! and radio do; coffee and rerolls are cooperative side actions either
//! role may take at any time.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::dice::DieId;
use super::role::Role;

/// A place on the panel a die can go.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Control {
    Axis,
    Engines,
    Brakes,
    LandingGear,
    Flaps,
    Radio,
}

impl Control {
    /// Controls accepted by `place_dice`, in panel order.
    ///
    /// `Radio` is accepted but fills nothing; traffic is cleared with
    /// `place_radio`.
    pub const PLACEABLE: [Control; 6] = [
        Control::Axis,
        Control::Engines,
        Control::Brakes,
        Control::LandingGear,
        Control::Flaps,
        Control::Radio,
    ];

    /// The only role allowed to use this control, if restricted.
    #[must_use]
    pub const fn owner(self) -> Option<Role> {
        match self {
            Control::Brakes | Control::LandingGear => Some(Role::Pilot),
            Control::Flaps => Some(Role::Copilot),
            Control::Axis | Control::Engines | Control::Radio => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Control::Axis => "axis",
            Control::Engines => "engines",
            Control::Brakes => "brakes",
            Control::LandingGear => "landing-gear",
            Control::Flaps => "flaps",
            Control::Radio => "radio",
        }
    }
}

impl std::fmt::Display for Control {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown control: '{0}'")]
pub struct UnknownControl(pub String);

impl FromStr for Control {
    type Err = UnknownControl;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "axis" => Ok(Control::Axis),
            "engines" => Ok(Control::Engines),
            "brakes" => Ok(Control::Brakes),
            "landing-gear" => Ok(Control::LandingGear),
            "flaps" => Ok(Control::Flaps),
            "radio" => Ok(Control::Radio),
            other => Err(UnknownControl(other.to_string())),
        }
    }
}

/// An operation a role asks the engine to perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    /// Put a die on an instrument control.
    PlaceDice { die: DieId, control: Control },
    /// Clear radio traffic in `slot` with an exact-value die.
    PlaceRadio { die: DieId, slot: usize },
    /// Discard a die for a shared coffee token.
    MakeCoffee { die: DieId },
    /// Spend a coffee token for a one-time reroll.
    DrinkCoffee,
    /// Reroll every unused die of the acting role.
    RerollDice,
    /// Reroll a single unused die of the acting role.
    RerollDie { die: DieId },
    /// Resolve the round.
    EndRound,
}

impl Action {
    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        match self {
            Action::PlaceDice { .. } => ActionKind::PlaceDice,
            Action::PlaceRadio { .. } => ActionKind::PlaceRadio,
            Action::MakeCoffee { .. } => ActionKind::MakeCoffee,
            Action::DrinkCoffee => ActionKind::DrinkCoffee,
            Action::RerollDice => ActionKind::RerollDice,
            Action::RerollDie { .. } => ActionKind::RerollDie,
            Action::EndRound => ActionKind::EndRound,
        }
    }

    /// The die this action spends or changes, if any.
    #[must_use]
    pub fn die(&self) -> Option<DieId> {
        match self {
            Action::PlaceDice { die, .. }
            | Action::PlaceRadio { die, .. }
            | Action::MakeCoffee { die }
            | Action::RerollDie { die } => Some(*die),
            Action::DrinkCoffee | Action::RerollDice | Action::EndRound => None,
        }
    }
}

/// Action discriminant, used for turn bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    PlaceDice,
    PlaceRadio,
    MakeCoffee,
    DrinkCoffee,
    RerollDice,
    RerollDie,
    EndRound,
}

impl ActionKind {
    /// Does a successful action of this kind pass the turn to the other role?
    ///
    /// Actions that consume a turn are also the only ones gated on it.
    #[must_use]
    pub const fn consumes_turn(self) -> bool {
        matches!(self, ActionKind::PlaceDice | ActionKind::PlaceRadio)
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The role that took this action. `EndRound` belongs to neither seat
    /// and is recorded under the role on turn when it resolves.
    pub role: Role,

    /// The action taken.
    pub action: Action,

    /// Round number when the action was taken.
    pub round: u32,

    /// Sequence number across the whole game.
    pub sequence: u32,
}

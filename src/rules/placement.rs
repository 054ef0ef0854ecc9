//! Die placement on the instrument panel and the radio.
//!
//! | control      | who     | occupancy                  | value                |
//! |--------------|---------|----------------------------|----------------------|
//! | axis         | either  | one per role per round     | any                  |
//! | engines      | either  | one per role per round     | any                  |
//! | brakes       | pilot   | once per game              | any                  |
//! | landing-gear | pilot   | three slots, in order      | slot pair            |
//! | flaps        | copilot | three slots, in order      | slot pair            |
//! | radio        | either  | one die per slot, any order| exact plane value    |
//!
//! `place_dice` also accepts `radio`: the die is spent and the turn passes,
//! but no slot is cleared. Clearing traffic needs `place_radio` and a slot.

use crate::core::action::Control;
use crate::core::dice::DieId;
use crate::core::rng::DiceSource;
use crate::core::role::Role;
use crate::error::RuleViolation;
use crate::rules::engine::Engine;
use crate::rules::outcome::ActionOutcome;
use crate::tracks::TrackKind;

impl<R: DiceSource> Engine<R> {
    /// Value of one of `role`'s dice that can still be spent.
    pub(crate) fn unused_die_value(&self, role: Role, die: DieId) -> Result<u8, RuleViolation> {
        self.state
            .dice
            .find_unused(role, die)
            .map(|d| d.value)
            .ok_or(RuleViolation::InvalidDie(die))
    }

    /// Validate a panel placement. Returns the die's value.
    pub(crate) fn check_placement(
        &self,
        role: Role,
        die: DieId,
        control: Control,
    ) -> Result<u8, RuleViolation> {
        let value = self.unused_die_value(role, die)?;

        if let Some(owner) = control.owner() {
            if owner != role {
                return Err(RuleViolation::WrongRole { control, owner });
            }
        }

        let occupied = match control {
            Control::Axis => self.state.axis[role].is_some(),
            Control::Engines => self.state.engines[role].is_some(),
            Control::Brakes => self.state.brakes.is_some(),
            Control::LandingGear => {
                self.state.landing_gear.check(value)?;
                false
            }
            Control::Flaps => {
                self.state.flaps.check(value)?;
                false
            }
            Control::Radio => false,
        };
        if occupied {
            return Err(RuleViolation::SlotOccupied(control));
        }

        Ok(value)
    }

    pub(crate) fn commit_placement(
        &mut self,
        role: Role,
        die: DieId,
        control: Control,
    ) -> Result<ActionOutcome, RuleViolation> {
        let value = self.check_placement(role, die, control)?;

        match control {
            Control::Axis => self.state.axis[role] = Some(value),
            Control::Engines => self.state.engines[role] = Some(value),
            Control::Brakes => self.state.brakes = Some(value),
            Control::LandingGear => {
                self.state.track_mut(TrackKind::LandingGear).push(value)?;
            }
            Control::Flaps => {
                self.state.track_mut(TrackKind::Flaps).push(value)?;
            }
            Control::Radio => {
                self.state.dice.consume(role, die);
                return Ok(ActionOutcome::RadioDiscarded { role, value });
            }
        }
        self.state.dice.consume(role, die);

        Ok(ActionOutcome::Placed {
            role,
            control,
            value,
        })
    }

    /// Validate clearing radio `slot`. Returns the die's value.
    pub(crate) fn check_radio(&self, role: Role, die: DieId, slot: usize) -> Result<u8, RuleViolation> {
        let value = self.unused_die_value(role, die)?;
        self.state.radio.check(slot, value)?;
        Ok(value)
    }

    pub(crate) fn commit_radio(
        &mut self,
        role: Role,
        die: DieId,
        slot: usize,
    ) -> Result<ActionOutcome, RuleViolation> {
        let value = self.check_radio(role, die, slot)?;
        self.state.radio.clear(slot, value)?;
        self.state.dice.consume(role, die);

        Ok(ActionOutcome::RadioCleared { role, slot, value })
    }
}

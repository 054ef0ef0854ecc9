//! The coffee pot and rerolls.
//!
//! Either role may brew coffee by spending a die, up to the pot's capacity.
//! Drinking a token grants that role one reroll, spent either on all of its
//! unused dice or on a single die. None of these actions pass the turn.

use crate::core::dice::DieId;
use crate::core::rng::DiceSource;
use crate::core::role::Role;
use crate::error::RuleViolation;
use crate::rules::engine::Engine;
use crate::rules::outcome::ActionOutcome;

impl<R: DiceSource> Engine<R> {
    pub(crate) fn check_make_coffee(&self, role: Role, die: DieId) -> Result<u8, RuleViolation> {
        if self.state.coffee_tokens >= self.state.max_coffee {
            return Err(RuleViolation::CoffeeFull(self.state.max_coffee));
        }
        self.unused_die_value(role, die)
    }

    pub(crate) fn commit_make_coffee(
        &mut self,
        role: Role,
        die: DieId,
    ) -> Result<ActionOutcome, RuleViolation> {
        self.check_make_coffee(role, die)?;
        self.state.dice.consume(role, die);
        self.state.coffee_tokens += 1;

        Ok(ActionOutcome::CoffeeMade {
            role,
            tokens: self.state.coffee_tokens,
        })
    }

    pub(crate) fn check_drink_coffee(&self, role: Role) -> Result<(), RuleViolation> {
        if self.state.coffee_tokens == 0 {
            return Err(RuleViolation::NoCoffee);
        }
        if self.state.can_reroll[role] {
            return Err(RuleViolation::RerollAlreadyHeld(role));
        }
        Ok(())
    }

    pub(crate) fn commit_drink_coffee(&mut self, role: Role) -> Result<ActionOutcome, RuleViolation> {
        self.check_drink_coffee(role)?;
        self.state.coffee_tokens -= 1;
        self.state.can_reroll[role] = true;

        Ok(ActionOutcome::CoffeeDrunk {
            role,
            tokens: self.state.coffee_tokens,
        })
    }

    pub(crate) fn check_reroll_dice(&self, role: Role) -> Result<(), RuleViolation> {
        if !self.state.can_reroll[role] {
            return Err(RuleViolation::MustDrinkCoffee(role));
        }
        if self.state.dice.unused_count(role) == 0 {
            return Err(RuleViolation::NothingToReroll(role));
        }
        Ok(())
    }

    /// Reroll every unused die of `role`. Spends the reroll.
    pub(crate) fn commit_reroll_dice(&mut self, role: Role) -> Result<ActionOutcome, RuleViolation> {
        self.check_reroll_dice(role)?;
        let count = self.state.dice.reroll_unused(role, &mut self.source);
        self.state.can_reroll[role] = false;

        Ok(ActionOutcome::Rerolled { role, count })
    }

    pub(crate) fn check_reroll_die(&self, role: Role, die: DieId) -> Result<u8, RuleViolation> {
        if !self.state.can_reroll[role] {
            return Err(RuleViolation::MustDrinkCoffee(role));
        }
        self.unused_die_value(role, die)
    }

    /// Reroll a single unused die of `role`. Spends the reroll.
    pub(crate) fn commit_reroll_die(
        &mut self,
        role: Role,
        die: DieId,
    ) -> Result<ActionOutcome, RuleViolation> {
        self.check_reroll_die(role, die)?;
        let value = self
            .state
            .dice
            .reroll_one(role, die, &mut self.source)
            .ok_or(RuleViolation::InvalidDie(die))?;
        self.state.can_reroll[role] = false;

        Ok(ActionOutcome::DieRerolled { role, die, value })
    }
}

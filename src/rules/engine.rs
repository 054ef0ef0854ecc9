//! The rules engine.
//!
//! `Engine` owns one game: its configuration, its `GameState` and the dice
//! source. Every caller operation goes through the same path:
//!
//! 1. Gate: refuse everything once the game is over, and refuse
//!    turn-consuming actions from the role whose turn it is not
//! 2. Validate against the current state without touching it
//! 3. Commit the whole mutation, or nothing on error
//! 4. Record the action, pass the turn if it consumed one, log
//!
//! Validation and commit for each operation live in `placement`, `coffee`
//! and `round`.
//!
//! ## Usage
//!
//! ```
//! use skyteam_engine::{Control, Engine, Role};
//!
//! let mut engine = Engine::seeded(42);
//! let die = engine.state().pilot_dice()[0].id;
//!
//! engine.place_dice(die, Control::Axis, Role::Pilot).unwrap();
//! assert_eq!(engine.state().current_player, Role::Copilot);
//! ```

use std::fmt::Display;

use tracing::{debug, info};

use crate::core::action::{Action, ActionKind, Control};
use crate::core::config::GameConfig;
use crate::core::dice::DieId;
use crate::core::rng::{DiceSource, GameRng};
use crate::core::role::Role;
use crate::core::state::GameState;
use crate::error::{ConfigError, RuleViolation, SnapshotError};
use crate::rules::outcome::{ActionOutcome, RoundOutcome};

/// A single game in progress.
#[derive(Clone, Debug)]
pub struct Engine<R: DiceSource = GameRng> {
    pub(crate) config: GameConfig,
    pub(crate) state: GameState,
    pub(crate) source: R,
}

impl Engine<GameRng> {
    /// Create a game whose dice come from `GameRng::new(config.seed)`.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let rng = GameRng::new(config.seed);
        Self::with_source(config, rng)
    }

    /// Standard rules with the given seed.
    ///
    /// Infallible: only the seed differs from `GameConfig::default()`, which
    /// always passes `GameConfig::validate`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        let config = GameConfig::default().with_seed(seed);
        debug_assert_eq!(config.validate(), Ok(()));
        Self::build(config, GameRng::new(seed))
    }
}

impl<R: DiceSource> Engine<R> {
    /// Create a game drawing dice from `source`. Round 1 is rolled.
    pub fn with_source(config: GameConfig, source: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, source))
    }

    /// Continue a saved game. Nothing is rolled.
    ///
    /// The state is checked against `config` first, so a corrupted or
    /// hand-edited snapshot is refused here rather than failing mid-game.
    pub fn resume(config: GameConfig, state: GameState, source: R) -> Result<Self, SnapshotError> {
        state.validate(&config)?;
        Ok(Self {
            config,
            state,
            source,
        })
    }

    fn build(config: GameConfig, source: R) -> Self {
        let state = GameState::new(&config);
        let mut engine = Self {
            config,
            state,
            source,
        };
        engine.roll_dice();
        engine
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the full state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// The dice source, e.g. to append faces to a script.
    pub fn source_mut(&mut self) -> &mut R {
        &mut self.source
    }

    /// Start over: every field back to its initial value, fresh dice.
    pub fn reset(&mut self) {
        self.state = GameState::new(&self.config);
        self.roll_dice();
        info!("game reset");
    }

    /// Replace both roles' dice with a fresh roll.
    pub fn roll_dice(&mut self) {
        self.state
            .dice
            .roll(self.config.dice_per_role, &mut self.source);
        debug!(round = self.state.round, "dice rolled");
    }

    // === Operations ===

    pub fn place_dice(
        &mut self,
        die: DieId,
        control: Control,
        role: Role,
    ) -> Result<ActionOutcome, RuleViolation> {
        self.apply(role, Action::PlaceDice { die, control })
    }

    pub fn place_radio(
        &mut self,
        die: DieId,
        role: Role,
        slot: usize,
    ) -> Result<ActionOutcome, RuleViolation> {
        self.apply(role, Action::PlaceRadio { die, slot })
    }

    pub fn make_coffee(&mut self, die: DieId, role: Role) -> Result<ActionOutcome, RuleViolation> {
        self.apply(role, Action::MakeCoffee { die })
    }

    pub fn drink_coffee(&mut self, role: Role) -> Result<ActionOutcome, RuleViolation> {
        self.apply(role, Action::DrinkCoffee)
    }

    pub fn reroll_dice(&mut self, role: Role) -> Result<ActionOutcome, RuleViolation> {
        self.apply(role, Action::RerollDice)
    }

    pub fn reroll_die(&mut self, die: DieId, role: Role) -> Result<ActionOutcome, RuleViolation> {
        self.apply(role, Action::RerollDie { die })
    }

    /// Resolve the round. Terminal outcomes end the game and are returned
    /// as `Ok`; `Err` only means the game was already over.
    pub fn end_round(&mut self) -> Result<RoundOutcome, RuleViolation> {
        let role = self.recorded_role(self.state.current_player, ActionKind::EndRound);
        let round = self.state.round;
        let result = self
            .ensure_can_act(role, ActionKind::EndRound)
            .map(|()| self.resolve_round());
        self.settle(role, Action::EndRound, round, &result);
        result
    }

    /// Perform any action on behalf of `role`.
    pub fn apply(&mut self, role: Role, action: Action) -> Result<ActionOutcome, RuleViolation> {
        let round = self.state.round;
        let recorded = self.recorded_role(role, action.kind());
        let result = self
            .ensure_can_act(role, action.kind())
            .and_then(|()| self.execute(role, action));
        self.settle(recorded, action, round, &result);
        result
    }

    /// Every action that would currently succeed for `role`.
    ///
    /// `EndRound` is always listed while the game runs; it may end the game.
    #[must_use]
    pub fn legal_actions(&self, role: Role) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.state.game_over {
            return actions;
        }

        let dice: Vec<DieId> = self.state.dice.unused(role).map(|d| d.id).collect();

        if self.ensure_can_act(role, ActionKind::PlaceDice).is_ok() {
            for &die in &dice {
                for control in Control::PLACEABLE {
                    if self.check_placement(role, die, control).is_ok() {
                        actions.push(Action::PlaceDice { die, control });
                    }
                }
                for slot in 0..self.state.radio.len() {
                    if self.check_radio(role, die, slot).is_ok() {
                        actions.push(Action::PlaceRadio { die, slot });
                    }
                }
            }
        }

        for &die in &dice {
            if self.check_make_coffee(role, die).is_ok() {
                actions.push(Action::MakeCoffee { die });
            }
        }
        if self.check_drink_coffee(role).is_ok() {
            actions.push(Action::DrinkCoffee);
        }
        if self.check_reroll_dice(role).is_ok() {
            actions.push(Action::RerollDice);
        }
        for &die in &dice {
            if self.check_reroll_die(role, die).is_ok() {
                actions.push(Action::RerollDie { die });
            }
        }

        actions.push(Action::EndRound);
        actions
    }

    // === Internals ===

    fn ensure_can_act(&self, role: Role, kind: ActionKind) -> Result<(), RuleViolation> {
        if self.state.game_over {
            return Err(RuleViolation::GameOver);
        }
        if kind.consumes_turn() && role != self.state.current_player {
            return Err(RuleViolation::NotYourTurn(self.state.current_player));
        }
        Ok(())
    }

    /// Role an action is recorded under. Ending the round belongs to
    /// neither seat, so it goes to the role on turn when it resolves.
    fn recorded_role(&self, role: Role, kind: ActionKind) -> Role {
        match kind {
            ActionKind::EndRound => self.state.current_player,
            _ => role,
        }
    }

    fn execute(&mut self, role: Role, action: Action) -> Result<ActionOutcome, RuleViolation> {
        match action {
            Action::PlaceDice { die, control } => self.commit_placement(role, die, control),
            Action::PlaceRadio { die, slot } => self.commit_radio(role, die, slot),
            Action::MakeCoffee { die } => self.commit_make_coffee(role, die),
            Action::DrinkCoffee => self.commit_drink_coffee(role),
            Action::RerollDice => self.commit_reroll_dice(role),
            Action::RerollDie { die } => self.commit_reroll_die(role, die),
            Action::EndRound => Ok(ActionOutcome::Round(self.resolve_round())),
        }
    }

    fn settle<T: Display>(
        &mut self,
        role: Role,
        action: Action,
        round: u32,
        result: &Result<T, RuleViolation>,
    ) {
        match result {
            Ok(outcome) => {
                self.state.record_action(role, action, round);
                if action.kind().consumes_turn() {
                    self.state.current_player = self.state.current_player.other();
                }
                debug!(%role, ?action, %outcome, "action accepted");
            }
            Err(violation) => {
                debug!(%role, ?action, %violation, "action rejected");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::ScriptedDice;
    use crate::core::state::Phase;

    fn scripted(faces: &[u8]) -> Engine<ScriptedDice> {
        Engine::with_source(GameConfig::default(), ScriptedDice::new(faces.to_vec())).unwrap()
    }

    fn die(engine: &Engine<ScriptedDice>, role: Role, value: u8) -> DieId {
        engine.state().dice.find_unused_with_value(role, value).unwrap()
    }

    #[test]
    fn test_initial_roll() {
        let engine = scripted(&[1, 2, 3, 4, 5, 6, 1, 2]);
        let state = engine.state();

        assert_eq!(state.pilot_dice().len(), 4);
        assert_eq!(state.copilot_dice().len(), 4);
        assert_eq!(state.pilot_dice()[3].value, 4);
        assert_eq!(state.copilot_dice()[1].value, 6);
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig::default().with_starting_distance(0);
        assert_eq!(Engine::new(config).unwrap_err(), ConfigError::ZeroDistance);
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let a = Engine::seeded(9);
        let b = Engine::seeded(9);
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn test_seeded_config_always_valid() {
        for seed in [0, 1, 9, u64::MAX] {
            let engine = Engine::seeded(seed);
            assert_eq!(engine.config().validate(), Ok(()));
            assert_eq!(engine.config(), &GameConfig::default().with_seed(seed));
        }
    }

    #[test]
    fn test_placement_toggles_turn_and_records() {
        let mut engine = scripted(&[3, 3, 3, 3, 4, 4, 4, 4]);

        let pilot_die = die(&engine, Role::Pilot, 3);
        engine.place_dice(pilot_die, Control::Axis, Role::Pilot).unwrap();
        assert_eq!(engine.state().current_player, Role::Copilot);

        let copilot_die = die(&engine, Role::Copilot, 4);
        engine.place_dice(copilot_die, Control::Axis, Role::Copilot).unwrap();
        assert_eq!(engine.state().current_player, Role::Pilot);

        let history = &engine.state().history;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, Role::Pilot);
        assert_eq!(history[1].round, 1);
    }

    #[test]
    fn test_wrong_turn_rejected_without_change() {
        let mut engine = scripted(&[3, 3, 3, 3, 4, 4, 4, 4]);
        let before = engine.snapshot();

        let copilot_die = die(&engine, Role::Copilot, 4);
        assert_eq!(
            engine.place_dice(copilot_die, Control::Axis, Role::Copilot),
            Err(RuleViolation::NotYourTurn(Role::Pilot))
        );
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_coffee_does_not_consume_turn() {
        let mut engine = scripted(&[3, 3, 3, 3, 4, 4, 4, 4]);

        let copilot_die = die(&engine, Role::Copilot, 4);
        engine.make_coffee(copilot_die, Role::Copilot).unwrap();

        assert_eq!(engine.state().current_player, Role::Pilot);
        assert_eq!(engine.state().coffee_tokens, 1);
    }

    #[test]
    fn test_game_over_gates_everything_but_reset() {
        let mut engine = scripted(&[3, 3, 3, 3, 4, 4, 4, 4]);

        let outcome = engine.end_round().unwrap();
        assert_eq!(outcome, RoundOutcome::AxesNotConfigured);
        assert_eq!(engine.state().phase, Phase::MandatoryMissing);
        assert!(engine.state().game_over);

        let pilot_die = engine.state().pilot_dice()[0].id;
        assert_eq!(
            engine.place_dice(pilot_die, Control::Axis, Role::Pilot),
            Err(RuleViolation::GameOver)
        );
        assert_eq!(engine.drink_coffee(Role::Pilot), Err(RuleViolation::GameOver));
        assert_eq!(engine.end_round(), Err(RuleViolation::GameOver));
        assert!(engine.legal_actions(Role::Pilot).is_empty());

        engine.reset();
        assert!(!engine.state().game_over);
        assert_eq!(engine.state().phase, Phase::InRound);
        assert!(engine.state().history.is_empty());
    }

    #[test]
    fn test_legal_actions_opening() {
        // Pilot: 1, 3, 5, 6  Copilot: 2, 2, 4, 6
        let engine = scripted(&[1, 3, 5, 6, 2, 2, 4, 6]);
        let pilot = engine.legal_actions(Role::Pilot);
        let one = die(&engine, Role::Pilot, 1);
        let three = die(&engine, Role::Pilot, 3);
        let six = die(&engine, Role::Pilot, 6);

        assert!(pilot.contains(&Action::PlaceDice { die: one, control: Control::LandingGear }));
        assert!(!pilot.contains(&Action::PlaceDice { die: three, control: Control::LandingGear }));
        assert!(!pilot.contains(&Action::PlaceDice { die: one, control: Control::Flaps }));
        assert!(pilot.contains(&Action::PlaceRadio { die: six, slot: 2 }));
        assert!(pilot.contains(&Action::MakeCoffee { die: one }));
        assert!(pilot.contains(&Action::PlaceDice { die: one, control: Control::Radio }));
        assert!(!pilot.contains(&Action::DrinkCoffee));
        assert!(!pilot.contains(&Action::RerollDice));
        assert_eq!(pilot.last(), Some(&Action::EndRound));

        // Not the copilot's turn: only side actions and end round
        let copilot = engine.legal_actions(Role::Copilot);
        assert!(copilot
            .iter()
            .all(|a| !a.kind().consumes_turn()));
        assert!(copilot.contains(&Action::EndRound));
    }

    #[test]
    fn test_legal_actions_all_succeed() {
        let engine = scripted(&[1, 3, 5, 6, 2, 2, 4, 6]);

        for role in Role::ALL {
            for action in engine.legal_actions(role) {
                let mut trial = engine.clone();
                assert!(
                    trial.apply(role, action).is_ok(),
                    "{role} {action:?} listed as legal but rejected"
                );
            }
        }
    }

    #[test]
    fn test_resume_from_snapshot() {
        let mut engine = scripted(&[2, 2, 2, 2, 2, 2, 2, 2]);
        let pilot_die = die(&engine, Role::Pilot, 2);
        engine.place_dice(pilot_die, Control::Axis, Role::Pilot).unwrap();

        let bytes = engine.state().to_bytes().unwrap();
        let restored = GameState::from_bytes(&bytes).unwrap();
        let resumed =
            Engine::resume(GameConfig::default(), restored, ScriptedDice::new([2])).unwrap();

        assert_eq!(resumed.state(), engine.state());
        assert_eq!(resumed.state().current_player, Role::Copilot);
    }

    #[test]
    fn test_resume_rejects_malformed_snapshot() {
        let engine = scripted(&[2, 2, 2, 2, 2, 2, 2, 2]);
        let mut json = serde_json::to_value(engine.state()).unwrap();
        json["radio"]["cleared"] = serde_json::json!([false, false]);
        let state: GameState = serde_json::from_value(json).unwrap();

        let result = Engine::resume(GameConfig::default(), state, ScriptedDice::new([2]));
        assert_eq!(
            result.err(),
            Some(SnapshotError::RadioLength { planes: 3, cleared: 2 })
        );

        let config = GameConfig::default().with_starting_distance(0);
        let result = Engine::resume(config, engine.snapshot(), ScriptedDice::new([2]));
        assert_eq!(
            result.err(),
            Some(SnapshotError::Config(ConfigError::ZeroDistance))
        );
    }

    #[test]
    fn test_end_round_recorded_under_role_on_turn() {
        let mut engine = scripted(&[1, 1, 1, 1, 1, 1, 1, 1]);
        assert_eq!(engine.state().current_player, Role::Pilot);

        // Axes unset: the round ends the game either way
        engine.apply(Role::Copilot, Action::EndRound).unwrap();
        let record = engine.state().history.back().unwrap();
        assert_eq!(record.action, Action::EndRound);
        assert_eq!(record.role, Role::Pilot);

        let mut direct = scripted(&[1, 1, 1, 1, 1, 1, 1, 1]);
        direct.end_round().unwrap();
        assert_eq!(direct.state().history, engine.state().history);
    }
}

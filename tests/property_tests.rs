//! Property tests over random play-outs.
//!
//! A seeded engine is driven by a random mix of legal actions and
//! arbitrary (often illegal) ones. After every step the state must stay
//! within bounds, and every rejected action must leave it untouched.

use proptest::prelude::*;
use proptest::sample::Index;

use skyteam_engine::rules::descent_for;
use skyteam_engine::tracks::SLOT_REQUIREMENTS;
use skyteam_engine::{
    Action, ActionOutcome, Control, DieId, Engine, GameState, Role, RoundOutcome,
};

const CONTROLS: [Control; 6] = [
    Control::Axis,
    Control::Engines,
    Control::Brakes,
    Control::LandingGear,
    Control::Flaps,
    Control::Radio,
];

fn arbitrary_action(byte: u8, pick: &Index) -> Action {
    let die = DieId(u32::from(byte % 24));
    match byte % 7 {
        0 => Action::PlaceDice {
            die,
            control: CONTROLS[pick.index(CONTROLS.len())],
        },
        1 => Action::PlaceRadio {
            die,
            slot: pick.index(5),
        },
        2 => Action::MakeCoffee { die },
        3 => Action::DrinkCoffee,
        4 => Action::RerollDice,
        5 => Action::RerollDie { die },
        _ => Action::EndRound,
    }
}

fn check_bounds(state: &GameState) -> Result<(), TestCaseError> {
    prop_assert!((-3..=3).contains(&state.plane_orientation));
    prop_assert!(state.coffee_tokens <= 3);

    for track in [&state.landing_gear, &state.flaps] {
        prop_assert!(track.len() <= 3);
        for (slot, value) in track.values().iter().enumerate() {
            prop_assert!(SLOT_REQUIREMENTS[slot].contains(value));
        }
    }

    for role in Role::ALL {
        prop_assert_eq!(state.dice.dice(role).len(), 4);
        prop_assert!(state.dice.dice(role).iter().all(|d| (1..=6).contains(&d.value)));
    }

    prop_assert_eq!(state.game_over, state.phase.is_terminal());
    prop_assert!(!state.game_won || state.has_landed);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn random_playouts_stay_in_bounds(
        seed in any::<u64>(),
        steps in prop::collection::vec((any::<bool>(), any::<Index>(), any::<u8>()), 1..120),
    ) {
        let mut engine = Engine::seeded(seed);

        for (pilot, pick, byte) in steps {
            if engine.state().game_over {
                break;
            }
            let role = if pilot { Role::Pilot } else { Role::Copilot };
            let action = if byte % 4 == 0 {
                arbitrary_action(byte, &pick)
            } else {
                let legal = engine.legal_actions(role);
                legal[pick.index(legal.len())]
            };

            let before = engine.snapshot();
            match engine.apply(role, action) {
                Err(_) => {
                    prop_assert_eq!(engine.state(), &before);
                }
                Ok(outcome) => {
                    let state = engine.state();
                    check_bounds(state)?;
                    prop_assert!(state.approach_distance <= before.approach_distance);

                    if action == Action::DrinkCoffee {
                        prop_assert!(!before.can_reroll[role]);
                    }
                    if action.kind().consumes_turn() {
                        prop_assert_eq!(state.current_player, before.current_player.other());
                    }

                    if let ActionOutcome::Round(round) = outcome {
                        match round {
                            RoundOutcome::Advanced { engine_sum, descent, distance, .. } => {
                                prop_assert_eq!(descent, descent_for(engine_sum));
                                prop_assert!((1..=2).contains(&descent));
                                prop_assert_eq!(distance, before.approach_distance - descent);
                                prop_assert_eq!(state.round, before.round + 1);
                            }
                            RoundOutcome::Landed { engine_sum, descent, .. } => {
                                prop_assert_eq!(descent, descent_for(engine_sum));
                                prop_assert!(descent >= before.approach_distance);
                                prop_assert_eq!(state.approach_distance, 0);
                            }
                            RoundOutcome::Stalled { .. }
                            | RoundOutcome::AxesNotConfigured
                            | RoundOutcome::EnginesNotConfigured => {
                                prop_assert_eq!(state.approach_distance, before.approach_distance);
                            }
                        }
                        prop_assert_eq!(round.is_game_over(), state.game_over);
                    }
                }
            }
        }
    }

    #[test]
    fn legal_actions_are_accepted(
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<Index>(), 1..60),
    ) {
        let mut engine = Engine::seeded(seed);

        for pick in picks {
            if engine.state().game_over {
                prop_assert!(engine.legal_actions(Role::Pilot).is_empty());
                break;
            }
            let role = engine.state().current_player;
            let legal = engine.legal_actions(role);
            prop_assert_eq!(legal.last(), Some(&Action::EndRound));

            for &action in &legal {
                let mut trial = engine.clone();
                prop_assert!(trial.apply(role, action).is_ok(), "{:?} rejected", action);
            }
            let action = legal[pick.index(legal.len())];
            engine.apply(role, action).unwrap();
        }
    }
}

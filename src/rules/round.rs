//! End-of-round resolution.
//!
//! Checked in order, stopping at the first terminal result:
//!
//! 1. Both axes set, else the game ends (`AxesNotConfigured`)
//! 2. Both engines set, else the game ends (`EnginesNotConfigured`)
//! 3. Orientation moves by the sign of pilot axis minus copilot axis
//! 4. The engine sum sets the descent and the approach distance drops
//! 5. Distance 0 lands the plane, won or crashed
//! 6. Zero descent short of the runway is a stall
//! 7. Otherwise the next round starts with fresh dice

use tracing::info;

use crate::core::rng::DiceSource;
use crate::core::role::Role;
use crate::core::state::Phase;
use crate::rules::engine::Engine;
use crate::rules::landing::landing_issues;
use crate::rules::outcome::{Landing, RoundOutcome};
use crate::rules::speed::{descent_for, orientation_delta};

impl<R: DiceSource> Engine<R> {
    pub(crate) fn resolve_round(&mut self) -> RoundOutcome {
        let (Some(axis_pilot), Some(axis_copilot)) =
            (self.state.axis[Role::Pilot], self.state.axis[Role::Copilot])
        else {
            return self.terminate(Phase::MandatoryMissing, RoundOutcome::AxesNotConfigured);
        };
        let Some(engine_sum) = self.state.engine_sum() else {
            return self.terminate(Phase::MandatoryMissing, RoundOutcome::EnginesNotConfigured);
        };

        let limit = self.config.orientation_limit;
        self.state.plane_orientation = self
            .state
            .plane_orientation
            .saturating_add(orientation_delta(axis_pilot, axis_copilot))
            .clamp(-limit, limit);

        let descent = descent_for(engine_sum);
        self.state.approach_distance = self.state.approach_distance.saturating_sub(descent);

        if self.state.approach_distance == 0 {
            self.state.has_landed = true;
            let issues = landing_issues(&self.state);
            let (phase, landing) = if issues.is_empty() {
                (Phase::Won, Landing::Won)
            } else {
                (Phase::Crashed, Landing::Crashed(issues))
            };
            return self.terminate(
                phase,
                RoundOutcome::Landed {
                    engine_sum,
                    descent,
                    landing,
                },
            );
        }

        if descent == 0 {
            return self.terminate(Phase::Stalled, RoundOutcome::Stalled { engine_sum });
        }

        let completed_round = self.state.round;
        self.state.round += 1;
        self.state.reset_round();
        self.roll_dice();
        info!(
            round = completed_round,
            engine_sum,
            descent,
            distance = self.state.approach_distance,
            orientation = self.state.plane_orientation,
            "round complete"
        );

        RoundOutcome::Advanced {
            completed_round,
            engine_sum,
            descent,
            distance: self.state.approach_distance,
        }
    }

    fn terminate(&mut self, phase: Phase, outcome: RoundOutcome) -> RoundOutcome {
        self.state.finish(phase);
        info!(round = self.state.round, ?phase, %outcome, "game over");
        outcome
    }
}

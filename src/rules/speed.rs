//! Speed and orientation tables.
//!
//! `descent_for` is the only table that affects play. `SpeedZone`,
//! `speed_band` and `orientation_marker` describe the panel gauges for
//! renderers and never feed back into resolution.

use serde::{Deserialize, Serialize};

/// Approach steps covered for an engine sum.
///
/// | sum   | descent |
/// |-------|---------|
/// | 1–3   | 0       |
/// | 4–6   | 1       |
/// | 7–12  | 2       |
#[must_use]
pub const fn descent_for(engine_sum: u8) -> u8 {
    match engine_sum {
        0..=3 => 0,
        4..=6 => 1,
        _ => 2,
    }
}

/// Bank change for one round: the sign of pilot axis minus copilot axis.
#[must_use]
pub fn orientation_delta(axis_pilot: u8, axis_copilot: u8) -> i8 {
    match axis_pilot.cmp(&axis_copilot) {
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
        std::cmp::Ordering::Greater => 1,
    }
}

/// Speed gauge zone, display only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpeedZone {
    /// 1–3
    Stall,
    /// 4–6
    Slow,
    /// 7–9
    Cruise,
    /// 10–12
    Fast,
}

impl SpeedZone {
    #[must_use]
    pub const fn from_engine_sum(engine_sum: u8) -> Option<Self> {
        match engine_sum {
            1..=3 => Some(SpeedZone::Stall),
            4..=6 => Some(SpeedZone::Slow),
            7..=9 => Some(SpeedZone::Cruise),
            10..=12 => Some(SpeedZone::Fast),
            _ => None,
        }
    }

    /// Gauge index, 0 for the leftmost zone.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Positions of the min/max speed markers on the gauge.
///
/// Positions sit between gauge values: position 4 is between 3 and 4.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedBand {
    pub min_marker: u8,
    pub max_marker: u8,
}

/// The min marker moves right one step per landing gear slot, the max
/// marker one step per flaps slot.
#[must_use]
pub fn speed_band(landing_gear_len: usize, flaps_len: usize) -> SpeedBand {
    SpeedBand {
        min_marker: 4 + landing_gear_len.min(3) as u8,
        max_marker: 10 + flaps_len.min(3) as u8,
    }
}

/// Index of the active orientation marker, 0 (hard left) to 6 (hard right).
#[must_use]
pub fn orientation_marker(orientation: i8) -> usize {
    (3 + orientation.clamp(-3, 3)) as usize
}

//! Dice randomness.
//!
//! The engine never calls a global RNG. Every roll goes through a
//! `DiceSource`, so callers choose between:
//!
//! - **`GameRng`**: seeded ChaCha8, deterministic per seed, serializable
//! - **`ScriptedDice`**: a fixed face sequence for tests and replays
//!
//! ## Usage
//!
//! ```
//! use skyteam_engine::core::{DiceSource, GameRng, ScriptedDice};
//!
//! let mut rng = GameRng::new(42);
//! let face = rng.roll_face();
//! assert!((1..=6).contains(&face));
//!
//! let mut script = ScriptedDice::new([6, 1]);
//! assert_eq!(script.roll_face(), 6);
//! assert_eq!(script.roll_face(), 1);
//! assert_eq!(script.roll_face(), 6); // cycles
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::dice::{MAX_FACE, MIN_FACE};

/// Source of die faces.
pub trait DiceSource {
    /// Produce one face in `1..=6`.
    fn roll_face(&mut self) -> u8;
}

/// Deterministic RNG for dice rolls.
///
/// Uses ChaCha8 for speed while keeping a reproducible stream per seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl DiceSource for GameRng {
    fn roll_face(&mut self) -> u8 {
        self.inner.gen_range(MIN_FACE..=MAX_FACE)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position, so capture and restore cost the same no
/// matter how many dice were rolled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed sequence of faces, cycling when exhausted.
///
/// Faces outside `1..=6` are clamped into range. An empty script rolls 1s.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptedDice {
    faces: Vec<u8>,
    cursor: usize,
}

impl ScriptedDice {
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        let mut script = Self::default();
        script.extend(faces);
        script
    }

    /// Append more faces to the end of the script.
    pub fn extend(&mut self, faces: impl IntoIterator<Item = u8>) {
        self.faces
            .extend(faces.into_iter().map(|f| f.clamp(MIN_FACE, MAX_FACE)));
    }

    /// Faces left before the script starts cycling.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.faces.len().saturating_sub(self.cursor)
    }
}

impl DiceSource for ScriptedDice {
    fn roll_face(&mut self) -> u8 {
        if self.faces.is_empty() {
            return MIN_FACE;
        }
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face
    }
}

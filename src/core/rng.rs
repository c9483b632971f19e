//! Injectable randomness for dice, deck shuffling and disproof choices.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Injectable**: Everything random goes through [`RandomSource`]
//! - **Scriptable**: [`ScriptedRng`] forces exact die faces in tests
//!
//! ## Usage
//!
//! ```
//! use rust_cluedo::core::{GameRng, RandomSource, ScriptedRng};
//!
//! let mut rng = GameRng::new(42);
//! let face = rng.roll_die();
//! assert!((1..=6).contains(&face));
//!
//! // Scripted faces come out first, in order
//! let mut scripted = ScriptedRng::new(7).with_rolls([3, 4]);
//! assert_eq!(scripted.roll_die(), 3);
//! assert_eq!(scripted.roll_die(), 4);
//! ```

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of every random decision the engine makes.
///
/// The controller, deck and resolver are generic over this trait so tests
/// can supply deterministic sequences.
pub trait RandomSource {
    /// Roll one fair six-sided die (1-6).
    fn roll_die(&mut self) -> u8;

    /// Shuffle a slice in place.
    fn shuffle<T>(&mut self, slice: &mut [T]);

    /// Pick a uniformly random index in `0..len`.
    ///
    /// Returns `None` if `len` is zero.
    fn pick_index(&mut self, len: usize) -> Option<usize>;
}

/// Seeded game RNG.
///
/// Uses ChaCha8 for speed while keeping high-quality randomness.
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

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }

    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.inner.gen_range(0..len))
    }
}

/// RNG that replays queued die faces, then falls back to a seeded `GameRng`.
///
/// Shuffles and picks always use the seeded fallback, so a scripted game
/// still deals the same hands as `GameRng::new(seed)` would.
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    rolls: VecDeque<u8>,
    fallback: GameRng,
}

impl ScriptedRng {
    /// Create a scripted RNG with no queued rolls.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rolls: VecDeque::new(),
            fallback: GameRng::new(seed),
        }
    }

    /// Queue die faces to be returned by `roll_die`, in order.
    ///
    /// Panics if a face is outside 1-6.
    #[must_use]
    pub fn with_rolls(mut self, faces: impl IntoIterator<Item = u8>) -> Self {
        self.push_rolls(faces);
        self
    }

    /// Queue more die faces.
    pub fn push_rolls(&mut self, faces: impl IntoIterator<Item = u8>) {
        for face in faces {
            assert!((1..=6).contains(&face), "Die face must be 1-6, got {face}");
            self.rolls.push_back(face);
        }
    }

    /// Number of scripted faces not yet consumed.
    #[must_use]
    pub fn pending_rolls(&self) -> usize {
        self.rolls.len()
    }
}

impl RandomSource for ScriptedRng {
    fn roll_die(&mut self) -> u8 {
        match self.rolls.pop_front() {
            Some(face) => face,
            None => self.fallback.roll_die(),
        }
    }

    fn shuffle<T>(&mut self, slice: &mut [T]) {
        self.fallback.shuffle(slice);
    }

    fn pick_index(&mut self, len: usize) -> Option<usize> {
        self.fallback.pick_index(len)
    }
}

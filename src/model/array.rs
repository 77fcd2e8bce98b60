/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Array domain and random array generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Element type of every array that is sorted and rendered.
pub type Value = u32;

/// Smallest array length a session accepts.
pub const MIN_SIZE: usize = 10;

/// Largest array length a session accepts.
pub const MAX_SIZE: usize = 150;

/// Array length used when nothing else is configured.
pub const DEFAULT_SIZE: usize = 50;

/// Smallest generated value (inclusive).
pub const MIN_VALUE: Value = 10;

/// Upper bound of generated values (exclusive).
pub const MAX_VALUE: Value = 390;

/// Returns `true` if `size` lies in `[MIN_SIZE, MAX_SIZE]`.
#[inline]
#[must_use]
pub fn is_valid_size(size: usize) -> bool {
    (MIN_SIZE..=MAX_SIZE).contains(&size)
}

/// Generates arrays with values drawn uniformly from `[MIN_VALUE, MAX_VALUE)`.
///
/// # Examples
///
/// ```
/// use sortviz::model::{ArrayGenerator, MAX_VALUE, MIN_VALUE};
///
/// let mut generator = ArrayGenerator::from_seed(7);
/// let values = generator.generate(25);
/// assert_eq!(values.len(), 25);
/// assert!(values.iter().all(|v| (MIN_VALUE..MAX_VALUE).contains(v)));
/// ```
#[derive(Debug, Clone)]
pub struct ArrayGenerator {
    rng: StdRng,
}

impl ArrayGenerator {
    /// Creates a generator seeded from operating system entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a deterministic generator from a fixed seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Produces a fresh array of `size` values.
    ///
    /// The size is not range-checked here; callers that accept user input
    /// validate it with [`is_valid_size`] first.
    pub fn generate(&mut self, size: usize) -> Vec<Value> {
        (0..size)
            .map(|_| self.rng.gen_range(MIN_VALUE..MAX_VALUE))
            .collect()
    }
}

impl Default for ArrayGenerator {
    fn default() -> Self {
        Self::new()
    }
}

//! Seedable random source for the speaker's delays.
//!
//! The speaker never reaches for a process-wide generator; it owns an
//! explicit [`Rng`] so tests can pin the delay sequence with a seed.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use rand::{Rng as _, SeedableRng, rngs::SmallRng};

/// A cloneable random number generator backed by `rand::rngs::SmallRng`.
#[derive(Clone)]
pub struct Rng(Arc<Mutex<SmallRng>>);

impl Default for Rng {
    fn default() -> Self {
        Self::new()
    }
}

impl Rng {
    /// Creates a generator seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::from_seed(None)
    }

    /// Creates a generator from an optional seed.
    ///
    /// If `None` is provided, the generator is seeded from entropy.
    pub fn from_seed<S: Into<Option<u64>>>(seed: S) -> Self {
        Self(Arc::new(Mutex::new(seed.into().map_or_else(
            SmallRng::from_os_rng,
            SmallRng::seed_from_u64,
        ))))
    }

    /// Returns a uniformly distributed duration in `[0, max)`.
    ///
    /// Returns `Duration::ZERO` if `max` is below one millisecond.
    ///
    /// # Panics
    ///
    /// * If the internal mutex is poisoned
    #[must_use]
    pub fn duration_in(&self, max: Duration) -> Duration {
        let millis = u64::try_from(max.as_millis()).unwrap_or(u64::MAX);
        if millis == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(self.0.lock().unwrap().random_range(0..millis))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test_log::test]
    fn the_same_seed_yields_the_same_delay_sequence() {
        let max = Duration::from_millis(1000);
        let a = Rng::from_seed(42);
        let b = Rng::from_seed(42);

        let delays_a: Vec<_> = (0..10).map(|_| a.duration_in(max)).collect();
        let delays_b: Vec<_> = (0..10).map(|_| b.duration_in(max)).collect();

        assert_eq!(delays_a, delays_b);
    }

    #[test_log::test]
    fn delays_stay_below_the_upper_bound() {
        let max = Duration::from_millis(1000);
        let rng = Rng::from_seed(7);

        for _ in 0..1000 {
            assert!(rng.duration_in(max) < max);
        }
    }

    #[test_log::test]
    fn a_sub_millisecond_bound_yields_no_delay() {
        let rng = Rng::from_seed(7);

        assert_eq!(rng.duration_in(Duration::ZERO), Duration::ZERO);
    }
}

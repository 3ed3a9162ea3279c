//! Random number helpers.
//!
//! Every helper takes the generator explicitly. For call sites that have no
//! generator at hand, [`with_thread_rng`] lends a per-thread [`StdRng`]; seed it
//! with [`seed_thread_rng`] when results must be reproducible.

use std::cell::RefCell;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

thread_local! {
    static THREAD_RNG: RefCell<StdRng> = RefCell::new(StdRng::from_entropy());
}

/// Uniform float in `[0, 1)`.
pub fn rnd(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Uniform float in `[min, max)`.
pub fn rnd_range(rng: &mut dyn RngCore, min: f32, max: f32) -> f32 {
    min + rnd(rng) * (max - min)
}

/// Uniform integer in `[start_inclusive, end_exclusive)`.
///
/// An empty range yields `start_inclusive`.
pub fn rnd_int(rng: &mut dyn RngCore, start_inclusive: i32, end_exclusive: i32) -> i32 {
    if end_exclusive <= start_inclusive {
        return start_inclusive;
    }
    rng.gen_range(start_inclusive..end_exclusive)
}

/// Reseeds this thread's generator.
pub fn seed_thread_rng(seed: u64) {
    THREAD_RNG.with(|rng| *rng.borrow_mut() = StdRng::seed_from_u64(seed));
    log::debug!("thread rng seeded with {}", seed);
}

/// Runs `f` with this thread's generator.
pub fn with_thread_rng<T>(f: impl FnOnce(&mut dyn RngCore) -> T) -> T {
    THREAD_RNG.with(|rng| f(&mut *rng.borrow_mut()))
}

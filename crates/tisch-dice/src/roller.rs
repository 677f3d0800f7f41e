//! Rolling dice against an RNG.
//!
//! The RNG is always supplied by the caller, so tests can seed it and the
//! roll functions stay pure apart from that one input.

use rand::Rng;
use rand::rngs::StdRng;

use crate::die::Die;

/// Roll a single die.
///
/// The coin yields 0 or 1 uniformly; every other die yields a value
/// uniformly distributed in `[1, sides]`.
pub fn roll_one(die: Die, rng: &mut StdRng) -> u32 {
    match die {
        Die::Coin => rng.random_range(0..=1),
        other => rng.random_range(1..=other.sides()),
    }
}

/// Roll `quantity` independent dice, preserving generation order.
///
/// A zero quantity yields an empty vec.
pub fn roll_many(die: Die, quantity: u32, rng: &mut StdRng) -> Vec<u32> {
    (0..quantity).map(|_| roll_one(die, rng)).collect()
}

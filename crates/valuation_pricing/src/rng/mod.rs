//! Random number generation for simulation pricing.

mod prng;

pub use prng::PathRng;

//! Deterministic random number generation
//!
//! Uses a seeded ARC4 keystream for reproducible random number generation.
//! CRITICAL: All randomness in the crate MUST go through this module. There is
//! no global generator; callers own an `Arc4Rng` and pass it by `&mut`.

mod arc4;
mod source;
mod stream;
mod uniform;

pub use arc4::Arc4Rng;
pub use source::DeterministicRng;
pub use stream::derive_stream_seed;
pub use uniform::SampleRange;

//! ARC4 keystream random number generator
//!
//! A seedable byte-stream generator: the seed keys an ARC4 permutation and
//! successive keystream bytes are assembled into wider values.
//!
//! # Algorithm
//!
//! 1. Key scheduling over the 8 little-endian bytes of the seed
//! 2. The first `discard` keystream bytes are dropped (default 1024), since
//!    early ARC4 output is measurably biased
//! 3. Each draw pulls bytes from the keystream; `next_u64` consumes 8
//!
//! # Determinism
//!
//! Same seed + same discard → same byte stream, on every platform. Values
//! are assembled little-endian and no operation depends on pointer width.
//!
//! NOT a cryptographic generator. No security property is claimed.

use std::fmt;

use sha2::{Digest, Sha256};
use tracing::debug;

use super::{derive_stream_seed, DeterministicRng};
use crate::checkpoint::{CheckpointError, GeneratorCheckpoint};
use crate::config::{ConfigError, GeneratorConfig, DEFAULT_DISCARD};

/// Deterministic random number generator backed by an ARC4 keystream
///
/// # Example
/// ```
/// use seedkit_core::{Arc4Rng, DeterministicRng};
///
/// let mut rng = Arc4Rng::new(12345);
/// let value = rng.next_u64();
/// let index = rng.uniform_in_range(0..100usize); // [0, 100)
/// assert!(index < 100);
/// # let _ = value;
/// ```
#[derive(Clone)]
pub struct Arc4Rng {
    /// Keystream permutation
    state: [u8; 256],
    i: u8,
    j: u8,
    /// Seed this stream was keyed from
    seed: u64,
    /// Keystream bytes dropped after key scheduling
    discard: usize,
    /// Bytes handed out since the discard phase
    bytes_drawn: u64,
}

impl Arc4Rng {
    /// Create a new generator with the given seed and default discard
    ///
    /// # Example
    /// ```
    /// use seedkit_core::Arc4Rng;
    ///
    /// let rng = Arc4Rng::new(12345);
    /// assert_eq!(rng.seed(), 12345);
    /// ```
    pub fn new(seed: u64) -> Self {
        Self::keyed(&seed.to_le_bytes(), seed, DEFAULT_DISCARD)
    }

    /// Create a generator from a validated configuration
    ///
    /// # Errors
    /// Returns `ConfigError` if the configuration fails validation
    pub fn with_config(config: &GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(
            seed = config.seed,
            discard = config.discard,
            "seeding generator from config"
        );
        Ok(Self::keyed(
            &config.seed.to_le_bytes(),
            config.seed,
            config.discard,
        ))
    }

    /// Independent generator for stream `index` derived from `seed`
    ///
    /// Each thread that needs randomness should own its own stream rather
    /// than share one generator.
    ///
    /// # Example
    /// ```
    /// use seedkit_core::{Arc4Rng, DeterministicRng};
    ///
    /// let mut worker_0 = Arc4Rng::for_stream(42, 0);
    /// let mut worker_1 = Arc4Rng::for_stream(42, 1);
    /// assert_ne!(worker_0.next_u64(), worker_1.next_u64());
    /// ```
    pub fn for_stream(seed: u64, index: u64) -> Self {
        Self::new(derive_stream_seed(seed, index))
    }

    fn keyed(key: &[u8], seed: u64, discard: usize) -> Self {
        let mut state = [0u8; 256];
        for (slot, value) in state.iter_mut().zip(0u8..=255) {
            *slot = value;
        }

        let mut j: u8 = 0;
        for i in 0..256 {
            j = j.wrapping_add(state[i]).wrapping_add(key[i % key.len()]);
            state.swap(i, j as usize);
        }

        let mut rng = Self {
            state,
            i: 0,
            j: 0,
            seed,
            discard,
            bytes_drawn: 0,
        };
        for _ in 0..discard {
            rng.keystream_byte();
        }
        rng
    }

    /// One PRGA step
    #[inline]
    fn keystream_byte(&mut self) -> u8 {
        self.i = self.i.wrapping_add(1);
        self.j = self.j.wrapping_add(self.state[self.i as usize]);
        self.state.swap(self.i as usize, self.j as usize);
        let index = self.state[self.i as usize].wrapping_add(self.state[self.j as usize]);
        self.state[index as usize]
    }

    /// Next keystream byte
    pub fn next_u8(&mut self) -> u8 {
        self.bytes_drawn += 1;
        self.keystream_byte()
    }

    /// Fill `dest` with keystream bytes
    pub fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest.iter_mut() {
            *byte = self.keystream_byte();
        }
        self.bytes_drawn += dest.len() as u64;
    }

    /// Seed this generator was created from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Bytes dropped after key scheduling
    pub fn discard(&self) -> usize {
        self.discard
    }

    /// Keystream bytes consumed so far (excluding the discard phase)
    pub fn bytes_drawn(&self) -> u64 {
        self.bytes_drawn
    }

    /// Hex SHA-256 of the permutation and both indices
    pub(crate) fn state_hash(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.state);
        hasher.update([self.i, self.j]);
        format!("{:x}", hasher.finalize())
    }

    /// Capture enough information to rebuild this generator later
    ///
    /// # Example
    /// ```
    /// use seedkit_core::{Arc4Rng, DeterministicRng};
    ///
    /// let mut rng = Arc4Rng::new(7);
    /// rng.next_u64();
    ///
    /// let checkpoint = rng.checkpoint();
    /// let mut resumed = Arc4Rng::restore(&checkpoint).unwrap();
    /// assert_eq!(rng.next_u64(), resumed.next_u64());
    /// ```
    pub fn checkpoint(&self) -> GeneratorCheckpoint {
        let checkpoint = GeneratorCheckpoint {
            seed: self.seed,
            discard: self.discard,
            bytes_drawn: self.bytes_drawn,
            state_hash: self.state_hash(),
        };
        debug!(
            seed = checkpoint.seed,
            bytes_drawn = checkpoint.bytes_drawn,
            "captured generator checkpoint"
        );
        checkpoint
    }

    /// Rebuild a generator by reseeding and redrawing to the checkpoint
    ///
    /// # Errors
    /// - `CheckpointError::PositionTooLarge` if `bytes_drawn` exceeds
    ///   `MAX_REPLAY_BYTES`
    /// - `CheckpointError::Config` if seed/discard are invalid
    /// - `CheckpointError::StateMismatch` if the replayed state does not
    ///   hash to the recorded value
    pub fn restore(checkpoint: &GeneratorCheckpoint) -> Result<Self, CheckpointError> {
        checkpoint.validate()?;
        let config = GeneratorConfig {
            seed: checkpoint.seed,
            discard: checkpoint.discard,
        };
        let mut rng = Self::with_config(&config)?;
        for _ in 0..checkpoint.bytes_drawn {
            rng.keystream_byte();
        }
        rng.bytes_drawn = checkpoint.bytes_drawn;

        checkpoint.verify(&rng.state_hash())?;
        debug!(
            seed = checkpoint.seed,
            bytes_drawn = checkpoint.bytes_drawn,
            "restored generator from checkpoint"
        );
        Ok(rng)
    }
}

impl DeterministicRng for Arc4Rng {
    fn next_u64(&mut self) -> u64 {
        let mut bytes = [0u8; 8];
        self.fill_bytes(&mut bytes);
        u64::from_le_bytes(bytes)
    }
}

impl fmt::Debug for Arc4Rng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arc4Rng")
            .field("seed", &self.seed)
            .field("discard", &self.discard)
            .field("bytes_drawn", &self.bytes_drawn)
            .finish_non_exhaustive()
    }
}

//! Checkpoint - Save/Resume Generator Position
//!
//! A generator is never serialized directly. A checkpoint records the seed,
//! the discard length and how many bytes were drawn; restoring reseeds and
//! redraws that many bytes, then checks the replayed permutation against the
//! recorded SHA-256 hash.
//!
//! # Critical Invariants
//!
//! - **Determinism**: a restored generator continues the exact sequence
//! - **State Matching**: a checkpoint whose hash disagrees with the replay is
//!   rejected rather than silently producing a different stream

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::config::ConfigError;

/// Largest `bytes_drawn` a checkpoint may ask `restore` to replay
pub const MAX_REPLAY_BYTES: u64 = 1 << 32;

#[derive(Debug, Error, PartialEq)]
pub enum CheckpointError {
    #[error("checkpoint serialization failed: {0}")]
    Serialization(String),

    #[error("checkpoint config invalid: {0}")]
    Config(#[from] ConfigError),

    #[error("checkpoint position of {bytes_drawn} bytes exceeds replay limit of {max}")]
    PositionTooLarge { bytes_drawn: u64, max: u64 },

    #[error("state hash mismatch: expected {expected}, got {actual}")]
    StateMismatch { expected: String, actual: String },
}

/// Serializable position of an `Arc4Rng`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorCheckpoint {
    /// Seed of the original generator
    pub seed: u64,

    /// Keystream bytes dropped after key scheduling
    pub discard: usize,

    /// Bytes drawn since the discard phase
    pub bytes_drawn: u64,

    /// Hex SHA-256 of the permutation and indices at capture time
    pub state_hash: String,
}

impl GeneratorCheckpoint {
    /// # Errors
    /// `CheckpointError::Serialization` if encoding fails
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::Serialization(e.to_string()))
    }

    /// # Errors
    /// `CheckpointError::Serialization` for malformed input
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::Serialization(e.to_string()))
    }

    /// # Errors
    /// `CheckpointError::PositionTooLarge` if `bytes_drawn > MAX_REPLAY_BYTES`
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.bytes_drawn > MAX_REPLAY_BYTES {
            return Err(CheckpointError::PositionTooLarge {
                bytes_drawn: self.bytes_drawn,
                max: MAX_REPLAY_BYTES,
            });
        }
        Ok(())
    }

    pub(crate) fn verify(&self, actual_hash: &str) -> Result<(), CheckpointError> {
        if self.state_hash != actual_hash {
            warn!(
                seed = self.seed,
                bytes_drawn = self.bytes_drawn,
                "checkpoint state hash mismatch"
            );
            return Err(CheckpointError::StateMismatch {
                expected: self.state_hash.clone(),
                actual: actual_hash.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GeneratorCheckpoint {
        GeneratorCheckpoint {
            seed: 42,
            discard: 1024,
            bytes_drawn: 16,
            state_hash: "abc".to_string(),
        }
    }

    #[test]
    fn test_verify_accepts_matching_hash() {
        assert!(sample().verify("abc").is_ok());
    }

    #[test]
    fn test_verify_reports_both_hashes() {
        let err = sample().verify("def").unwrap_err();
        assert_eq!(
            err,
            CheckpointError::StateMismatch {
                expected: "abc".to_string(),
                actual: "def".to_string(),
            }
        );
    }

    #[test]
    fn test_validate_bounds_replay_position() {
        let mut checkpoint = sample();
        checkpoint.bytes_drawn = MAX_REPLAY_BYTES;
        assert!(checkpoint.validate().is_ok());

        checkpoint.bytes_drawn = MAX_REPLAY_BYTES + 1;
        assert_eq!(
            checkpoint.validate(),
            Err(CheckpointError::PositionTooLarge {
                bytes_drawn: MAX_REPLAY_BYTES + 1,
                max: MAX_REPLAY_BYTES,
            })
        );
    }

    #[test]
    fn test_json_round_trip() {
        let json = sample().to_json().unwrap();
        assert_eq!(GeneratorCheckpoint::from_json(&json).unwrap(), sample());
    }

    #[test]
    fn test_from_json_rejects_missing_fields() {
        let err = GeneratorCheckpoint::from_json(r#"{"seed": 1}"#).unwrap_err();
        assert!(matches!(err, CheckpointError::Serialization(_)));
    }
}

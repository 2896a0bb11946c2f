//! Per-stream seed derivation.

use sha2::{Digest, Sha256};
use tracing::debug;

const STREAM_TAG: &[u8] = b"seedkit/stream/v1";

/// Derive the seed for stream `index` of a base seed
///
/// Hashes a domain tag with both values (SHA-256) and keeps the first 8
/// bytes, so neighbouring indices produce unrelated seeds.
pub fn derive_stream_seed(base_seed: u64, index: u64) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(STREAM_TAG);
    hasher.update(base_seed.to_le_bytes());
    hasher.update(index.to_le_bytes());
    let digest = hasher.finalize();

    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    let seed = u64::from_le_bytes(bytes);
    debug!(base_seed, index, seed, "derived stream seed");
    seed
}

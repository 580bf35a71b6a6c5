use sha2::{Digest, Sha256};
use xxhash_rust::xxh3::xxh3_64;

/// Algorithms accepted by [`hash_bytes_hex`].
pub const SUPPORTED_ALGORITHMS: &[&str] = &["xxh64", "sha256"];

/// Compute an xxh64-style hash (hex) over bytes.
///
/// Uses xxh3_64 (from `xxhash-rust`), returned as fixed-width 16-char lowercase hex.
pub fn xxh64_hex(input: &[u8]) -> String {
    format!("{:016x}", xxh3_64(input))
}

/// Lowercase hex SHA-256 of bytes.
pub fn sha256_hex(input: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input);
    hex::encode(hasher.finalize())
}

/// Hash bytes with a named algorithm. `None` if the algorithm is unknown.
pub fn hash_bytes_hex(algorithm: &str, input: &[u8]) -> Option<String> {
    match algorithm {
        "xxh64" => Some(xxh64_hex(input)),
        "sha256" => Some(sha256_hex(input)),
        _ => None,
    }
}

//! Migration fingerprints
//!
//! Each migration's SQL is hashed with SHA-256 and recorded alongside its id
//! in the `schema_version` ledger, so an edit to an already-applied migration
//! file is detectable after the fact.

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 fingerprint of a migration's SQL text
pub fn compute_checksum(sql: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(sql.as_bytes());
    hex::encode(hasher.finalize())
}

// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use sha2::{Digest, Sha256};

/// Generates a BLAKE2b hash of the requested length (1 to 64 bytes).
pub fn blake2b_variable(ingest: &[u8], size: usize) -> Vec<u8> {
    blake2b_simd::Params::new()
        .hash_length(size)
        .hash(ingest)
        .as_bytes()
        .to_vec()
}

pub fn sha256(ingest: &[u8]) -> [u8; 32] {
    let mut out = [0; 32];
    out.copy_from_slice(Sha256::digest(ingest).as_slice());
    out
}

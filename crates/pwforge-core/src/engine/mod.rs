//! Hashing engine abstraction
//!
//! The memory-hard mixing itself is delegated to the `argon2` crate; this
//! module owns the contract around it so the pipeline can run against a fake
//! engine in tests.

mod argon2;

pub use self::argon2::Argon2Engine;

use crate::error::Result;
use crate::params::{HashParams, Variant};

/// Raw digest plus the self-describing PHC credential string
#[derive(Debug, Clone)]
pub struct HashOutput {
    /// Raw digest bytes, `output_len` of them
    pub digest: Vec<u8>,
    /// `$argon2{i,d}$v=19$m=...,t=...,p=...$<salt>$<digest>`
    pub encoded: String,
}

impl HashOutput {
    /// Digest as lowercase hex
    pub fn digest_hex(&self) -> String {
        hex::encode(&self.digest)
    }
}

/// Password-hashing capability consumed by the pipeline
pub trait HashEngine {
    /// Hash `password` with `salt`, producing the raw digest and the encoded
    /// credential string
    fn hash(&self, params: &HashParams, password: &[u8], salt: &[u8]) -> Result<HashOutput>;

    /// Check `encoded` against `password` for the given variant
    fn verify(&self, encoded: &str, password: &[u8], variant: Variant) -> Result<()>;
}

// Fixed part of a credential string: "$argon2x$v=19$m=,t=,p=$$" is 24 bytes,
// and the three cost fields print as at most 10 + 10 + 8 decimal digits.
const ENCODED_OVERHEAD: usize = 52;

fn b64_len(len: usize) -> usize {
    len.div_ceil(3) * 4
}

/// Capacity that always fits the encoded credential string for the given
/// salt and digest lengths.
///
/// Salt and digest expand under base64; padded base64 arithmetic is used as
/// the bound even though credential strings are unpadded, so the capacity
/// can only overshoot.
pub fn encoded_capacity(salt_len: usize, output_len: usize) -> usize {
    ENCODED_OVERHEAD + b64_len(salt_len) + b64_len(output_len)
}

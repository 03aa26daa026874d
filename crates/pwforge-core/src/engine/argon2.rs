//! Argon2-backed hashing engine

use std::fmt::Write;

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use tracing::debug;

use super::{encoded_capacity, HashEngine, HashOutput};
use crate::error::{ForgeError, Result};
use crate::params::{HashParams, Variant};

/// Engine backed by the `argon2` crate.
///
/// Parameter bounds beyond the resolver's own (minimum memory per lane, salt
/// and digest length floors) are enforced here by the crate and surfaced as
/// hash failures with the crate's message.
pub struct Argon2Engine;

impl Argon2Engine {
    fn cost_params(params: &HashParams) -> Result<Params> {
        Params::new(
            params.memory_kib,
            params.time_cost,
            params.parallelism,
            Some(params.output_len as usize),
        )
        .map_err(|e| ForgeError::Hash(e.to_string()))
    }
}

impl HashEngine for Argon2Engine {
    fn hash(&self, params: &HashParams, password: &[u8], salt: &[u8]) -> Result<HashOutput> {
        debug!(
            "hashing: variant={}, m={} KiB, t={}, p={}",
            params.variant, params.memory_kib, params.time_cost, params.parallelism
        );

        let cost = Self::cost_params(params)?;
        let salt_b64 =
            SaltString::encode_b64(salt).map_err(|e| ForgeError::Hash(e.to_string()))?;

        // One pass over the memory matrix yields both outputs: the credential
        // string carries the digest we extract as the raw hash.
        let hasher = Argon2::new(params.variant.algorithm(), Version::V0x13, cost.clone());
        let credential = hasher
            .hash_password_customized(
                password,
                Some(params.variant.algorithm().ident()),
                None,
                cost,
                salt_b64.as_salt(),
            )
            .map_err(|e| ForgeError::Hash(e.to_string()))?;

        let digest = credential
            .hash
            .ok_or_else(|| ForgeError::Hash("credential carries no digest".to_string()))?
            .as_bytes()
            .to_vec();

        let capacity = encoded_capacity(salt.len(), params.output_len as usize);
        let mut encoded = String::with_capacity(capacity);
        write!(encoded, "{credential}").map_err(|e| ForgeError::Hash(e.to_string()))?;
        debug_assert!(encoded.len() <= capacity, "encoded credential exceeds sized capacity");

        Ok(HashOutput { digest, encoded })
    }

    fn verify(&self, encoded: &str, password: &[u8], variant: Variant) -> Result<()> {
        let parsed =
            PasswordHash::new(encoded).map_err(|e| ForgeError::Verify(e.to_string()))?;

        let algorithm = Algorithm::try_from(parsed.algorithm)
            .map_err(|e| ForgeError::Verify(e.to_string()))?;
        if algorithm != variant.algorithm() {
            return Err(ForgeError::Verify(format!(
                "credential uses {algorithm}, expected {}",
                variant.algorithm()
            )));
        }

        Argon2::default()
            .verify_password(password, &parsed)
            .map_err(|e| ForgeError::Verify(e.to_string()))
    }
}

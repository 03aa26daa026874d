//! Hashing parameter set and numeric bounds

use argon2::Algorithm;

use crate::error::{ForgeError, Result};

/// Default number of passes over the memory
pub const DEFAULT_TIME_COST: u32 = 3;
/// Default memory exponent: 2^12 KiB = 4 MiB
pub const DEFAULT_MEMORY_BITS: u32 = 12;
/// Default lane/thread count
pub const DEFAULT_PARALLELISM: u32 = 1;
/// Default digest length in bytes
pub const DEFAULT_OUTPUT_LEN: u32 = 32;

/// Engine bounds referenced by parameter validation.
///
/// These mirror the limits of the underlying Argon2 engine; validation
/// rejects any value outside them before a hash is ever attempted.
pub mod limits {
    /// Upper bound on the memory exponent: 2^N KiB must stay representable
    pub const MAX_MEMORY_BITS: u32 = 32;
    /// Absolute cap on the memory cost in KiB
    pub const MAX_MEMORY_KIB: u32 = u32::MAX;
    /// Upper bound on the iteration count
    pub const MAX_TIME_COST: u32 = u32::MAX;
    /// Most threads the engine will drive
    pub const MAX_THREADS: u32 = 0xFF_FFFF;
    /// Most lanes the memory matrix can be split into
    pub const MAX_LANES: u32 = 0xFF_FFFF;
}

/// Memory addressing variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Data-independent addressing (Argon2i) - the default
    #[default]
    Argon2i,
    /// Data-dependent addressing (Argon2d)
    Argon2d,
}

impl Variant {
    /// Map to the engine's algorithm identifier
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Variant::Argon2i => Algorithm::Argon2i,
            Variant::Argon2d => Algorithm::Argon2d,
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Argon2i => write!(f, "Argon2i"),
            Variant::Argon2d => write!(f, "Argon2d"),
        }
    }
}

/// Validated parameter set for one hashing run
#[derive(Debug, Clone)]
pub struct HashParams {
    /// Digest length in bytes (range-checked by the engine, not here)
    pub output_len: u32,
    /// Number of passes over the memory
    pub time_cost: u32,
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Lane count; the engine also uses it as the thread count
    pub parallelism: u32,
    /// Memory addressing variant
    pub variant: Variant,
}

impl Default for HashParams {
    fn default() -> Self {
        Self {
            output_len: DEFAULT_OUTPUT_LEN,
            time_cost: DEFAULT_TIME_COST,
            memory_kib: 1 << DEFAULT_MEMORY_BITS,
            parallelism: DEFAULT_PARALLELISM,
            variant: Variant::default(),
        }
    }
}

/// Turn a memory exponent into a memory cost in KiB.
///
/// The exponent must lie in (0, `MAX_MEMORY_BITS`]; the resulting 2^N KiB is
/// saturated at what the cost field can carry and re-checked against the
/// engine's absolute cap.
pub fn memory_kib_from_exponent(bits: u64) -> Result<u32> {
    if bits == 0 || bits > u64::from(limits::MAX_MEMORY_BITS) {
        return Err(ForgeError::MemoryExponent);
    }
    let kib = (1u64 << bits).min(u64::from(u32::MAX));
    if kib > u64::from(limits::MAX_MEMORY_KIB) {
        return Err(ForgeError::MemoryOverflow);
    }
    Ok(kib as u32)
}

/// Validate an iteration count: must lie in (0, `MAX_TIME_COST`]
pub fn validated_time_cost(raw: u64) -> Result<u32> {
    if raw == 0 || raw > u64::from(limits::MAX_TIME_COST) {
        return Err(ForgeError::TimeCost);
    }
    Ok(raw as u32)
}

/// Validate a lane/thread count: must lie in (0, min(`MAX_THREADS`, `MAX_LANES`)]
pub fn validated_parallelism(raw: u64) -> Result<u32> {
    if raw == 0 || raw > u64::from(limits::MAX_THREADS) || raw > u64::from(limits::MAX_LANES) {
        return Err(ForgeError::Parallelism);
    }
    Ok(raw as u32)
}

//! Command-line argument parsing and validation
//!
//! Numeric options run through custom value parsers that apply the engine
//! bounds from `pwforge_core::params`, so out-of-range values are rejected
//! before any hashing is attempted.

use clap::Parser;

use pwforge_core::{params, ForgeError, HashParams, Variant};

/// Hash a password read from stdin with Argon2
#[derive(Parser, Debug)]
#[command(
    name = "pwforge",
    version,
    about = "Computes an Argon2 hash of a password read from stdin and verifies it",
    after_help = "Password is read from stdin",
    disable_help_flag = true
)]
pub struct Args {
    /// The salt to use, at most 16 characters
    #[arg(value_name = "SALT")]
    pub salt: String,

    /// Use Argon2d instead of Argon2i (which is the default)
    #[arg(short = 'd')]
    pub data_dependent: bool,

    /// Sets the number of iterations to N
    #[arg(
        short = 't',
        value_name = "N",
        default_value_t = params::DEFAULT_TIME_COST,
        value_parser = parse_time_cost
    )]
    pub time_cost: u32,

    /// Sets the memory usage to 2^N KiB
    #[arg(
        short = 'm',
        value_name = "N",
        default_value = "12",
        value_parser = parse_memory_exponent
    )]
    pub memory_kib: u32,

    /// Sets parallelism to N lanes and threads
    #[arg(
        short = 'p',
        value_name = "N",
        default_value_t = params::DEFAULT_PARALLELISM,
        value_parser = parse_parallelism
    )]
    pub parallelism: u32,

    /// Sets the hash output length to N bytes
    #[arg(short = 'h', value_name = "N", default_value_t = params::DEFAULT_OUTPUT_LEN)]
    pub output_len: u32,
}

impl Args {
    /// Assemble the validated parameter set
    pub fn to_params(&self) -> HashParams {
        HashParams {
            output_len: self.output_len,
            time_cost: self.time_cost,
            memory_kib: self.memory_kib,
            parallelism: self.parallelism,
            variant: if self.data_dependent {
                Variant::Argon2d
            } else {
                Variant::Argon2i
            },
        }
    }
}

fn parse_time_cost(raw: &str) -> Result<u32, String> {
    raw.parse::<u64>()
        .ok()
        .and_then(|v| params::validated_time_cost(v).ok())
        .ok_or_else(|| "bad numeric input for -t".to_string())
}

fn parse_memory_exponent(raw: &str) -> Result<u32, String> {
    let bits = raw
        .parse::<u64>()
        .map_err(|_| "bad numeric input for -m".to_string())?;
    match params::memory_kib_from_exponent(bits) {
        Ok(kib) => Ok(kib),
        Err(ForgeError::MemoryOverflow) => Err("m_cost overflow".to_string()),
        Err(_) => Err("bad numeric input for -m".to_string()),
    }
}

fn parse_parallelism(raw: &str) -> Result<u32, String> {
    raw.parse::<u64>()
        .ok()
        .and_then(|v| params::validated_parallelism(v).ok())
        .ok_or_else(|| "bad numeric input for -p".to_string())
}

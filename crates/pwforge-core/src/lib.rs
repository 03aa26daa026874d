//! # pwforge-core
//!
//! Core password-hashing pipeline for pwforge including:
//! - Argon2i/Argon2d hashing and verification behind a pluggable engine trait
//! - Parameter validation against explicit engine bounds
//! - Secret password buffers with zeroize-on-drop

pub mod engine;
pub mod error;
pub mod params;
pub mod password;

pub use engine::{encoded_capacity, Argon2Engine, HashEngine, HashOutput};
pub use error::{ForgeError, Result};
pub use params::{limits, HashParams, Variant};
pub use password::{Password, MAX_PASSWORD_LEN};

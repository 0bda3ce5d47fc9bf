//! `clef-kdf-core` — Password key-derivation primitives for CLEF.
//!
//! This crate is the audit target: zero network, zero async, zero I/O beyond
//! the operating system RNG. It implements RFC 2898 PBKDF2 and RFC 7914
//! scrypt from the HMAC primitive up, plus the `$`-delimited stored-hash
//! format and the create/check lifecycle built on top of them.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;
pub mod prf;

pub mod pbkdf2;

mod salsa;
pub mod scrypt;

pub mod params;

pub mod encoding;

pub mod store;

pub use encoding::{decode, encode, StoredHash};
pub use error::KdfError;
pub use params::{CostParams, CostPreset, Pbkdf2Params, ScryptParams};
pub use pbkdf2::pbkdf2;
pub use prf::HmacAlgorithm;
pub use scrypt::scrypt;
pub use store::{
    check, create, create_with_params, create_with_rng, needs_rehash, PBKDF2_SALT_LEN,
    SCRYPT_SALT_LEN, STORED_KEY_LEN,
};

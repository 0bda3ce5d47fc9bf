//! Stored-hash lifecycle: create records for new passwords and check
//! attempts against existing records.
//!
//! This module provides:
//! - [`create`] / [`create_with_params`] / [`create_with_rng`] — derive and
//!   encode a new password record
//! - [`check`] — verify a password attempt against a stored record
//! - [`needs_rehash`] — report whether a record predates the current cost
//!   policy
//!
//! The RNG is an explicit parameter on the innermost entry point so tests
//! can substitute a seeded generator; the outer convenience wrappers pin it
//! to the operating system RNG.

use crate::encoding;
use crate::params::{CostParams, CostPreset};
use crate::KdfError;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

/// Constant-time comparison of a recomputed key against the stored hash.
///
/// Returns `true` iff both slices have equal length and identical contents.
/// Uses bitwise OR accumulation to avoid short-circuit timing leaks.
///
/// Note: the early return on length mismatch is acceptable because the
/// stored hash length is public information (anyone holding the encoded
/// record can read it); the constant-time walk protects the byte values.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Salt length for new scrypt records in bytes.
pub const SCRYPT_SALT_LEN: usize = 16;

/// Salt length for new PBKDF2 records in bytes.
pub const PBKDF2_SALT_LEN: usize = 24;

/// Derived-key length stored in new records (256 bits).
pub const STORED_KEY_LEN: usize = 32;

// ---------------------------------------------------------------------------
// Record creation
// ---------------------------------------------------------------------------

/// Create a stored record for `password` under the default preset
/// ([`CostPreset::Interactive`]) with a fresh random salt.
///
/// # Errors
///
/// Propagates [`KdfError`] from the derivation engine; with the preset
/// parameters and [`STORED_KEY_LEN`] this does not happen in practice.
pub fn create(password: &[u8]) -> Result<String, KdfError> {
    create_with_params(password, &CostPreset::Interactive.params())
}

/// Create a stored record with caller-chosen cost parameters and a fresh
/// random salt.
///
/// # Errors
///
/// Propagates [`KdfError`] from the derivation engine.
pub fn create_with_params(password: &[u8], params: &CostParams) -> Result<String, KdfError> {
    create_with_rng(password, params, &mut OsRng)
}

/// Create a stored record, drawing the salt from the supplied RNG.
///
/// Salt length follows the engine: [`SCRYPT_SALT_LEN`] bytes for scrypt
/// records, [`PBKDF2_SALT_LEN`] for PBKDF2.
///
/// # Errors
///
/// Propagates [`KdfError`] from the derivation engine.
pub fn create_with_rng<R>(
    password: &[u8],
    params: &CostParams,
    rng: &mut R,
) -> Result<String, KdfError>
where
    R: RngCore + CryptoRng,
{
    let mut salt = vec![0u8; salt_len(params)];
    rng.fill_bytes(&mut salt);
    let hash = Zeroizing::new(params.derive(password, &salt, STORED_KEY_LEN)?);
    Ok(encoding::encode(params, &salt, &hash))
}

// ---------------------------------------------------------------------------
// Verification
// ---------------------------------------------------------------------------

/// Check a password attempt against a stored record.
///
/// Recomputes the derived key with the record's own parameters and salt,
/// requesting exactly as many bytes as the record stores, then compares in
/// constant time. A wrong password is a normal `Ok(false)`, never an error.
///
/// # Errors
///
/// Returns the decode-layer errors ([`KdfError::MalformedEncoding`],
/// [`KdfError::UnsupportedAlgorithm`], [`KdfError::InvalidCostParameters`])
/// when the record itself cannot be parsed.
pub fn check(password: &[u8], encoded: &str) -> Result<bool, KdfError> {
    let stored = encoding::decode(encoded)?;
    let candidate = Zeroizing::new(stored.params.derive(
        password,
        &stored.salt,
        stored.hash.len(),
    )?);
    Ok(constant_time_eq(&candidate, &stored.hash))
}

/// Report whether a stored record was created under different cost
/// parameters than `target`.
///
/// Only parameters are compared; the salt and hash play no part. A `true`
/// result means the caller should re-create the record at the next
/// successful login.
///
/// # Errors
///
/// Returns the decode-layer errors when the record cannot be parsed.
pub fn needs_rehash(encoded: &str, target: &CostParams) -> Result<bool, KdfError> {
    let stored = encoding::decode(encoded)?;
    Ok(stored.params != *target)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Engine-specific salt length for new records.
fn salt_len(params: &CostParams) -> usize {
    match params {
        CostParams::Pbkdf2(_) => PBKDF2_SALT_LEN,
        CostParams::Scrypt(_) => SCRYPT_SALT_LEN,
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

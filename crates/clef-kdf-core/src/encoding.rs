//! `$`-delimited string encoding for stored password hashes.
//!
//! This module provides:
//! - [`encode`] — render cost parameters, salt, and derived key as one string
//! - [`decode`] — parse a stored string back into a [`StoredHash`]
//!
//! # Grammar
//!
//! ```text
//! PBKDF2: $<cost>$<salt>$<hash>
//! scrypt: $s0$<cost>$<salt>$<hash>
//! ```
//!
//! - **cost**: packed cost field (`index<<16 | iterations`, or
//!   `log2(N)<<16 | r<<8 | p`) as lowercase hex without leading zeros
//! - **salt / hash**: URL-safe base64 without padding
//!
//! The output is the persisted wire format. It must stay byte-for-byte stable
//! so that hashes written today verify under future releases, which is why
//! the cost layouts are covered by wire-stability tests rather than derived
//! from the parameter structs ad hoc.

use crate::params::{CostParams, Pbkdf2Params, ScryptParams};
use crate::KdfError;
use data_encoding::BASE64URL_NOPAD;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A parsed stored hash: validated cost parameters plus the raw salt and
/// derived-key bytes.
///
/// Both byte fields are public record-keeping values, not secrets. The salt
/// is stored in the clear by design and the hash is the verifier itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredHash {
    /// Cost parameters recovered from the cost field.
    pub params: CostParams,
    /// Salt bytes.
    pub salt: Vec<u8>,
    /// Derived-key bytes the password is checked against.
    pub hash: Vec<u8>,
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Render a stored-hash string for the given parameters, salt, and derived
/// key.
#[must_use]
pub fn encode(params: &CostParams, salt: &[u8], hash: &[u8]) -> String {
    let salt_b64 = BASE64URL_NOPAD.encode(salt);
    let hash_b64 = BASE64URL_NOPAD.encode(hash);
    match params {
        CostParams::Pbkdf2(inner) => {
            format!("${:x}${salt_b64}${hash_b64}", inner.pack())
        }
        CostParams::Scrypt(inner) => {
            format!("$s0${:x}${salt_b64}${hash_b64}", inner.pack())
        }
    }
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Parse a stored-hash string.
///
/// # Errors
///
/// Returns [`KdfError::MalformedEncoding`] for a structural problem (wrong
/// field count, non-hex cost field, bad base64, empty salt or hash),
/// [`KdfError::UnsupportedAlgorithm`] for an unregistered PBKDF2 algorithm
/// index, and [`KdfError::InvalidCostParameters`] when the cost field decodes
/// to out-of-bounds parameters.
pub fn decode(encoded: &str) -> Result<StoredHash, KdfError> {
    let fields: Vec<&str> = encoded.split('$').collect();

    // A leading '$' always yields an empty first field; the scrypt marker
    // then distinguishes the two grammars by field count.
    let (cost_field, salt_field, hash_field, is_scrypt) = match fields.as_slice() {
        ["", "s0", cost, salt, hash] => (*cost, *salt, *hash, true),
        ["", cost, salt, hash] => (*cost, *salt, *hash, false),
        _ => {
            return Err(KdfError::MalformedEncoding(
                "expected $cost$salt$hash or $s0$cost$salt$hash".into(),
            ))
        }
    };

    let packed = parse_cost_field(cost_field)?;
    let salt = decode_base64_field(salt_field, "salt")?;
    let hash = decode_base64_field(hash_field, "hash")?;

    if salt.is_empty() {
        return Err(KdfError::MalformedEncoding("salt must not be empty".into()));
    }
    if hash.is_empty() {
        return Err(KdfError::MalformedEncoding("hash must not be empty".into()));
    }

    let params = if is_scrypt {
        CostParams::Scrypt(ScryptParams::unpack(packed)?)
    } else {
        CostParams::Pbkdf2(Pbkdf2Params::unpack(packed)?)
    };

    Ok(StoredHash { params, salt, hash })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse the hex cost field into its packed `u32` form.
///
/// The hexdigit pre-check exists because `from_str_radix` also accepts a
/// leading sign character, which has no place in this grammar.
fn parse_cost_field(field: &str) -> Result<u32, KdfError> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(KdfError::MalformedEncoding(format!(
            "cost field {field:?} is not hexadecimal"
        )));
    }
    u32::from_str_radix(field, 16).map_err(|_| {
        KdfError::MalformedEncoding(format!("cost field {field:?} exceeds 32 bits"))
    })
}

/// Decode one URL-safe base64 field.
fn decode_base64_field(field: &str, label: &str) -> Result<Vec<u8>, KdfError> {
    BASE64URL_NOPAD.decode(field.as_bytes()).map_err(|e| {
        KdfError::MalformedEncoding(format!("{label} is not unpadded URL-safe base64: {e}"))
    })
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

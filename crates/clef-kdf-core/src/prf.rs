//! HMAC pseudo-random function registry.
//!
//! PBKDF2 is generic over its PRF; stored encodings name the variant through
//! a small stable integer. This module owns the closed set of supported
//! variants, their `ring::hmac` bindings, and the two-way index table the
//! encoding layer relies on. SHA-1 is deliberately absent: `ring` ships it
//! for legacy interop only and no stored-hash index is assigned to it.

use ring::hmac;

use crate::KdfError;

/// HMAC variant usable as the PBKDF2 pseudo-random function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HmacAlgorithm {
    /// HMAC-SHA256 (index 1, default).
    Sha256,
    /// HMAC-SHA512 (index 2).
    Sha512,
    /// HMAC-SHA384 (index 3).
    Sha384,
}

impl HmacAlgorithm {
    /// Map to the corresponding `ring::hmac::Algorithm`.
    pub(crate) fn to_ring_algorithm(self) -> hmac::Algorithm {
        match self {
            Self::Sha256 => hmac::HMAC_SHA256,
            Self::Sha512 => hmac::HMAC_SHA512,
            Self::Sha384 => hmac::HMAC_SHA384,
        }
    }

    /// MAC output length in bytes (hLen in RFC 2898 terms).
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            Self::Sha256 => 32,
            Self::Sha512 => 64,
            Self::Sha384 => 48,
        }
    }

    /// Stable small-integer index used in the stored-hash cost field.
    ///
    /// These values are part of the persisted wire format and must never be
    /// renumbered.
    #[must_use]
    pub const fn index(self) -> u32 {
        match self {
            Self::Sha256 => 1,
            Self::Sha512 => 2,
            Self::Sha384 => 3,
        }
    }

    /// Reverse of [`index`](Self::index).
    ///
    /// # Errors
    /// Returns `KdfError::UnsupportedAlgorithm` for any index outside the
    /// registry.
    pub fn from_index(index: u32) -> Result<Self, KdfError> {
        match index {
            1 => Ok(Self::Sha256),
            2 => Ok(Self::Sha512),
            3 => Ok(Self::Sha384),
            other => Err(KdfError::UnsupportedAlgorithm(other)),
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────

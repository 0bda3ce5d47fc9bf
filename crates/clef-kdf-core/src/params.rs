//! Cost-parameter model for stored password hashes.
//!
//! This module provides:
//! - [`Pbkdf2Params`] — HMAC variant plus iteration count
//! - [`ScryptParams`] — the `(N, r, p)` triple with the RFC 7914 bounds
//! - [`CostParams`] — the tagged union the encoding layer and verifier
//!   dispatch on
//!
//! Both parameter sets pack into a single `u32` cost field
//! (`index<<16 | iterations` and `log2(N)<<16 | r<<8 | p`); the constructors
//! enforce the field widths, so a value that exists always survives the
//! pack/unpack round trip unchanged.

use crate::pbkdf2;
use crate::prf::HmacAlgorithm;
use crate::scrypt;
use crate::KdfError;

/// Iteration count must fit the low 16 bits of the packed cost field.
pub const MAX_PBKDF2_ITERATIONS: u32 = 0xFFFF;

/// r and p must each fit one byte of the packed cost field.
pub const MAX_SCRYPT_RP: u32 = 0xFF;

/// `i32::MAX / 128`, the shared ceiling for the `128·r·N` and `128·r·p`
/// products.
const PARAM_CEILING: u64 = 16_777_215;

// ---------------------------------------------------------------------------
// PBKDF2 parameters
// ---------------------------------------------------------------------------

/// Validated PBKDF2 cost parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pbkdf2Params {
    algorithm: HmacAlgorithm,
    iterations: u32,
}

impl Pbkdf2Params {
    /// Build a parameter set, enforcing the packed-field iteration bound.
    ///
    /// # Errors
    /// Returns `KdfError::InvalidCostParameters` unless
    /// `1 <= iterations <= 0xFFFF`.
    pub fn new(algorithm: HmacAlgorithm, iterations: u32) -> Result<Self, KdfError> {
        if iterations == 0 || iterations > MAX_PBKDF2_ITERATIONS {
            return Err(KdfError::InvalidCostParameters(format!(
                "iteration count must be in 1..={MAX_PBKDF2_ITERATIONS}, got {iterations}"
            )));
        }
        Ok(Self {
            algorithm,
            iterations,
        })
    }

    /// HMAC variant acting as the PRF.
    #[must_use]
    pub const fn algorithm(self) -> HmacAlgorithm {
        self.algorithm
    }

    /// Iteration count.
    #[must_use]
    pub const fn iterations(self) -> u32 {
        self.iterations
    }

    /// Packed cost field: `index << 16 | iterations`.
    // index <= 0xF and iterations <= 0xFFFF, so the shift and OR stay in u32.
    #[allow(clippy::arithmetic_side_effects)]
    pub(crate) const fn pack(self) -> u32 {
        self.algorithm.index() << 16 | self.iterations
    }

    /// Rebuild from a packed cost field.
    ///
    /// # Errors
    /// `KdfError::UnsupportedAlgorithm` for an unregistered index,
    /// `KdfError::InvalidCostParameters` for a zero iteration count.
    pub(crate) fn unpack(packed: u32) -> Result<Self, KdfError> {
        let algorithm = HmacAlgorithm::from_index(packed >> 16)?;
        Self::new(algorithm, packed & MAX_PBKDF2_ITERATIONS)
    }
}

// ---------------------------------------------------------------------------
// scrypt parameters
// ---------------------------------------------------------------------------

/// Validated scrypt cost parameters.
///
/// Holding an instance proves the RFC 7914 §2 bounds already passed, so the
/// derivation engine can size its buffers without re-checking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScryptParams {
    n: u32,
    r: u32,
    p: u32,
}

impl ScryptParams {
    /// Validate and build an `(N, r, p)` triple.
    ///
    /// # Errors
    /// Returns `KdfError::InvalidCostParameters` when `N` is not a power of
    /// two above 1, when `r` or `p` fall outside `1..=255`, or when the
    /// `N <= i32::MAX/128/r` / `r <= i32::MAX/128/p` memory bounds fail.
    pub fn new(n: u32, r: u32, p: u32) -> Result<Self, KdfError> {
        if r == 0 || r > MAX_SCRYPT_RP {
            return Err(KdfError::InvalidCostParameters(format!(
                "r must be in 1..={MAX_SCRYPT_RP}, got {r}"
            )));
        }
        if p == 0 || p > MAX_SCRYPT_RP {
            return Err(KdfError::InvalidCostParameters(format!(
                "p must be in 1..={MAX_SCRYPT_RP}, got {p}"
            )));
        }
        if n < 2 || !n.is_power_of_two() {
            return Err(KdfError::InvalidCostParameters(format!(
                "N must be a power of two greater than 1, got {n}"
            )));
        }
        // r and p are non-zero here, so the ceiling divisions are safe.
        #[allow(clippy::arithmetic_side_effects)]
        {
            if u64::from(n) > PARAM_CEILING / u64::from(r) {
                return Err(KdfError::InvalidCostParameters(format!(
                    "N too large for r={r}: {n} exceeds i32::MAX/128/r"
                )));
            }
            if u64::from(r) > PARAM_CEILING / u64::from(p) {
                return Err(KdfError::InvalidCostParameters(format!(
                    "r too large for p={p}: {r} exceeds i32::MAX/128/p"
                )));
            }
        }
        Ok(Self { n, r, p })
    }

    /// CPU/memory cost `N` (power of two).
    #[must_use]
    pub const fn n(self) -> u32 {
        self.n
    }

    /// Block size factor `r`.
    #[must_use]
    pub const fn r(self) -> u32 {
        self.r
    }

    /// Parallelism factor `p`.
    #[must_use]
    pub const fn p(self) -> u32 {
        self.p
    }

    /// `log2(N)`; exact because `N` is a power of two.
    #[must_use]
    pub const fn log_n(self) -> u32 {
        self.n.trailing_zeros()
    }

    /// Packed cost field: `log2(N) << 16 | r << 8 | p`.
    // log2(N) <= 30 and r/p <= 0xFF by construction; nothing here can
    // overflow or collide across field boundaries.
    #[allow(clippy::arithmetic_side_effects)]
    pub(crate) const fn pack(self) -> u32 {
        self.log_n() << 16 | self.r << 8 | self.p
    }

    /// Rebuild from a packed cost field.
    ///
    /// # Errors
    /// `KdfError::InvalidCostParameters` when the exponent field does not
    /// describe a representable `N` or any §2 bound fails.
    // The shift is guarded by the log_n < 31 test directly above it.
    #[allow(clippy::arithmetic_side_effects)]
    pub(crate) fn unpack(packed: u32) -> Result<Self, KdfError> {
        let log_n = packed >> 16;
        if log_n >= 31 {
            return Err(KdfError::InvalidCostParameters(format!(
                "log2(N) must be below 31, got {log_n}"
            )));
        }
        Self::new(1_u32 << log_n, (packed >> 8) & MAX_SCRYPT_RP, packed & MAX_SCRYPT_RP)
    }
}

// ---------------------------------------------------------------------------
// Tagged union
// ---------------------------------------------------------------------------

/// Cost parameters for either supported derivation engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CostParams {
    /// RFC 2898 PBKDF2.
    Pbkdf2(Pbkdf2Params),
    /// RFC 7914 scrypt.
    Scrypt(ScryptParams),
}

impl CostParams {
    /// Run the derivation these parameters describe.
    ///
    /// # Errors
    /// Propagates `KdfError::KeyLengthTooLarge` from the engines; other
    /// parameter errors cannot occur on a constructed value.
    pub fn derive(&self, password: &[u8], salt: &[u8], dk_len: usize) -> Result<Vec<u8>, KdfError> {
        match self {
            Self::Pbkdf2(params) => pbkdf2::pbkdf2(
                params.algorithm(),
                password,
                salt,
                params.iterations(),
                dk_len,
            ),
            Self::Scrypt(params) => scrypt::scrypt(password, salt, params, dk_len),
        }
    }
}

impl From<Pbkdf2Params> for CostParams {
    fn from(params: Pbkdf2Params) -> Self {
        Self::Pbkdf2(params)
    }
}

impl From<ScryptParams> for CostParams {
    fn from(params: ScryptParams) -> Self {
        Self::Scrypt(params)
    }
}

// ---------------------------------------------------------------------------
// Presets
// ---------------------------------------------------------------------------

/// Workload presets for new password records.
///
/// All three use scrypt with `r = 8, p = 1` and scale `N` alone, following
/// the cost ladder from the scrypt paper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CostPreset {
    /// Interactive logins, roughly the 100 ms class (`N = 2^14`).
    Interactive,
    /// Middle ground for infrequent unlocks (`N = 2^17`).
    Moderate,
    /// Long-lived secrets worth a second of CPU (`N = 2^20`).
    Sensitive,
}

impl CostPreset {
    /// Cost parameters for this preset.
    ///
    /// Constructed as literals so this stays `const`; a unit test re-runs
    /// every preset through [`ScryptParams::new`] to keep them honest.
    #[must_use]
    pub const fn params(self) -> CostParams {
        let n = match self {
            Self::Interactive => 16_384,
            Self::Moderate => 131_072,
            Self::Sensitive => 1_048_576,
        };
        CostParams::Scrypt(ScryptParams { n, r: 8, p: 1 })
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

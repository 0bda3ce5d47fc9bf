//! RFC 2898 PBKDF2 key-stretching engine.
//!
//! Generic over the HMAC variant in the [`HmacAlgorithm`] registry and built
//! only on `ring::hmac`. Each output block is the XOR fold of the PRF
//! iterate chain (RFC 2898 §5.2), not a concatenation of iterations; the
//! scrypt engine reuses this module for its outer mixing steps with an
//! iteration count of 1.

use ring::hmac;
use zeroize::Zeroize;

use crate::prf::HmacAlgorithm;
use crate::KdfError;

/// Largest hLen in the registry (HMAC-SHA512).
const MAX_PRF_OUTPUT: usize = 64;

/// Derive `dk_len` bytes from `password` and `salt`.
///
/// # Errors
/// - `KdfError::InvalidCostParameters` if `iterations` is 0.
/// - `KdfError::KeyLengthTooLarge` if `dk_len` exceeds `(2^32 - 1) * hLen`.
pub fn pbkdf2(
    algorithm: HmacAlgorithm,
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    dk_len: usize,
) -> Result<Vec<u8>, KdfError> {
    // Validated before the output allocation so an absurd dk_len fails fast
    // instead of requesting the memory first.
    validate_request(algorithm, iterations, dk_len)?;
    let mut derived = vec![0u8; dk_len];
    derive_into(algorithm, password, salt, iterations, &mut derived)?;
    Ok(derived)
}

/// Fill `derived` in place; length is taken from the slice.
///
/// # Errors
/// Same conditions as [`pbkdf2`].
pub(crate) fn derive_into(
    algorithm: HmacAlgorithm,
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    derived: &mut [u8],
) -> Result<(), KdfError> {
    validate_request(algorithm, iterations, derived.len())?;

    let h_len = algorithm.output_len();
    let key = hmac::Key::new(algorithm.to_ring_algorithm(), password);
    let mut block = [0u8; MAX_PRF_OUTPUT];

    // T_i for block index i (RFC 2898 §5.2 step 3), big-endian counter.
    let mut index: u32 = 1;
    for chunk in derived.chunks_mut(h_len) {
        // U_1 = PRF(password, salt || BE32(i)).
        let mut prf = hmac::Context::with_key(&key);
        prf.update(salt);
        prf.update(&index.to_be_bytes());
        let mut mac = prf.sign();
        block[..h_len].copy_from_slice(mac.as_ref());

        // U_j = PRF(password, U_{j-1}); T_i = U_1 xor ... xor U_c.
        for _ in 1..iterations {
            mac = hmac::sign(&key, mac.as_ref());
            for (acc, byte) in block[..h_len].iter_mut().zip(mac.as_ref()) {
                *acc ^= byte;
            }
        }

        chunk.copy_from_slice(&block[..chunk.len()]);
        // Block count never exceeds u32::MAX (checked above), so the counter
        // cannot wrap while chunks remain.
        index = index.wrapping_add(1);
    }

    block.zeroize();
    Ok(())
}

/// Shared precondition checks (RFC 2898 §5.2 step 1, integer-exact). The
/// scrypt engine front-loads the same check before its scratch allocations.
pub(crate) fn validate_request(
    algorithm: HmacAlgorithm,
    iterations: u32,
    dk_len: usize,
) -> Result<(), KdfError> {
    if iterations == 0 {
        return Err(KdfError::InvalidCostParameters(
            "iteration count must be >= 1".to_owned(),
        ));
    }
    let ceiling = u64::from(u32::MAX).saturating_mul(algorithm.output_len() as u64);
    if dk_len as u64 > ceiling {
        return Err(KdfError::KeyLengthTooLarge(format!(
            "requested {dk_len} bytes, PRF ceiling is {ceiling}"
        )));
    }
    Ok(())
}

// ── Tests ───────────────────────────────────────────────────────────

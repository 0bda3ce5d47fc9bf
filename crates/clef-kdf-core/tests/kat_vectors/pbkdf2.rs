//! PBKDF2-HMAC-SHA256 Known-Answer Test vectors.
//!
//! The two 64-byte vectors are RFC 7914 §11; the iteration ladder is from
//! the scrypt draft (draft-josefsson-scrypt-kdf) and is the standard
//! SHA-256 recomputation of the RFC 6070 inputs.

use clef_kdf_core::{pbkdf2, HmacAlgorithm};

/// RFC 7914 §11: PBKDF2-HMAC-SHA256 (P="passwd", S="salt", c=1, dkLen=64).
const PASSWD_SALT_C1: [u8; 64] = [
    0x55, 0xac, 0x04, 0x6e, 0x56, 0xe3, 0x08, 0x9f, 0xec, 0x16, 0x91, 0xc2, 0x25, 0x44, 0xb6, 0x05,
    0xf9, 0x41, 0x85, 0x21, 0x6d, 0xde, 0x04, 0x65, 0xe6, 0x8b, 0x9d, 0x57, 0xc2, 0x0d, 0xac, 0xbc,
    0x49, 0xca, 0x9c, 0xcc, 0xf1, 0x79, 0xb6, 0x45, 0x99, 0x16, 0x64, 0xb3, 0x9d, 0x77, 0xef, 0x31,
    0x7c, 0x71, 0xb8, 0x45, 0xb1, 0xe3, 0x0b, 0xd5, 0x09, 0x11, 0x20, 0x41, 0xd3, 0xa1, 0x97, 0x83,
];

/// RFC 7914 §11: PBKDF2-HMAC-SHA256 (P="Password", S="NaCl", c=80000, dkLen=64).
const PASSWORD_NACL_C80000: [u8; 64] = [
    0x4d, 0xdc, 0xd8, 0xf6, 0x0b, 0x98, 0xbe, 0x21, 0x83, 0x0c, 0xee, 0x5e, 0xf2, 0x27, 0x01, 0xf9,
    0x64, 0x1a, 0x44, 0x18, 0xd0, 0x4c, 0x04, 0x14, 0xae, 0xff, 0x08, 0x87, 0x6b, 0x34, 0xab, 0x56,
    0xa1, 0xd4, 0x25, 0xa1, 0x22, 0x58, 0x33, 0x54, 0x9a, 0xdb, 0x84, 0x1b, 0x51, 0xc9, 0xb3, 0x17,
    0x6a, 0x27, 0x2b, 0xde, 0xbb, 0xa1, 0xd0, 0x78, 0x47, 0x8f, 0x62, 0xb3, 0x97, 0xf3, 0x3c, 0x8d,
];

struct LadderVector {
    password: &'static [u8],
    salt: &'static [u8],
    iterations: u32,
    expected: &'static [u8],
}

/// Draft iteration ladder: same inputs as RFC 6070 but HMAC-SHA256.
const LADDER: [LadderVector; 5] = [
    LadderVector {
        password: b"password",
        salt: b"salt",
        iterations: 1,
        expected: &[
            0x12, 0x0f, 0xb6, 0xcf, 0xfc, 0xf8, 0xb3, 0x2c, 0x43, 0xe7, 0x22, 0x52, 0x56, 0xc4,
            0xf8, 0x37, 0xa8, 0x65, 0x48, 0xc9,
        ],
    },
    LadderVector {
        password: b"password",
        salt: b"salt",
        iterations: 2,
        expected: &[
            0xae, 0x4d, 0x0c, 0x95, 0xaf, 0x6b, 0x46, 0xd3, 0x2d, 0x0a, 0xdf, 0xf9, 0x28, 0xf0,
            0x6d, 0xd0, 0x2a, 0x30, 0x3f, 0x8e,
        ],
    },
    LadderVector {
        password: b"password",
        salt: b"salt",
        iterations: 4096,
        expected: &[
            0xc5, 0xe4, 0x78, 0xd5, 0x92, 0x88, 0xc8, 0x41, 0xaa, 0x53, 0x0d, 0xb6, 0x84, 0x5c,
            0x4c, 0x8d, 0x96, 0x28, 0x93, 0xa0,
        ],
    },
    LadderVector {
        password: b"passwordPASSWORDpassword",
        salt: b"saltSALTsaltSALTsaltSALTsaltSALTsalt",
        iterations: 4096,
        expected: &[
            0x34, 0x8c, 0x89, 0xdb, 0xcb, 0xd3, 0x2b, 0x2f, 0x32, 0xd8, 0x14, 0xb8, 0x11, 0x6e,
            0x84, 0xcf, 0x2b, 0x17, 0x34, 0x7e, 0xbc, 0x18, 0x00, 0x18, 0x1c,
        ],
    },
    LadderVector {
        password: b"pass\0word",
        salt: b"sa\0lt",
        iterations: 4096,
        expected: &[
            0x89, 0xb6, 0x9d, 0x05, 0x16, 0xf8, 0x29, 0x89, 0x3c, 0x69, 0x62, 0x26, 0x65, 0x0a,
            0x86, 0x87,
        ],
    },
];

#[test]
fn rfc7914_section_11_vector_1() {
    let derived = pbkdf2(HmacAlgorithm::Sha256, b"passwd", b"salt", 1, 64)
        .expect("derivation should succeed");
    assert_eq!(derived.as_slice(), PASSWD_SALT_C1, "§11 vector 1 mismatch");
}

#[test]
fn rfc7914_section_11_vector_2() {
    let derived = pbkdf2(HmacAlgorithm::Sha256, b"Password", b"NaCl", 80_000, 64)
        .expect("derivation should succeed");
    assert_eq!(
        derived.as_slice(),
        PASSWORD_NACL_C80000,
        "§11 vector 2 mismatch"
    );
}

#[test]
fn draft_iteration_ladder() {
    for v in &LADDER {
        let derived = pbkdf2(
            HmacAlgorithm::Sha256,
            v.password,
            v.salt,
            v.iterations,
            v.expected.len(),
        )
        .expect("derivation should succeed");
        assert_eq!(
            derived.as_slice(),
            v.expected,
            "ladder mismatch at c={} with {}-byte password",
            v.iterations,
            v.password.len()
        );
    }
}

/// A 32-byte request is the full first block, so the published 20-byte
/// vector must be its prefix.
#[test]
fn full_first_block_extends_published_prefix() {
    let derived = pbkdf2(HmacAlgorithm::Sha256, b"password", b"salt", 4096, 32)
        .expect("derivation should succeed");
    assert_eq!(derived.len(), 32);
    assert_eq!(&derived[..20], LADDER[2].expected);
}

//! Full stored-hash lifecycle: create → check → needs_rehash.
//!
//! Most tests run on deliberately cheap cost parameters so the suite stays
//! fast; one test walks the real Interactive preset end to end.

use clef_kdf_core::{
    check, create, create_with_params, create_with_rng, needs_rehash, CostParams, CostPreset,
    HmacAlgorithm, Pbkdf2Params, ScryptParams,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn cheap_scrypt() -> CostParams {
    CostParams::Scrypt(ScryptParams::new(16, 1, 1).expect("params should validate"))
}

fn cheap_pbkdf2() -> CostParams {
    CostParams::Pbkdf2(Pbkdf2Params::new(HmacAlgorithm::Sha256, 25).expect("params should validate"))
}

/// Create → check round trip for both engines.
#[test]
fn lifecycle_round_trips_on_both_engines() {
    for params in [cheap_scrypt(), cheap_pbkdf2()] {
        let record =
            create_with_params(b"hunter2", &params).expect("create should succeed");
        assert!(
            check(b"hunter2", &record).expect("check should succeed"),
            "own password must verify under {params:?}"
        );
        assert!(
            !check(b"hunter3", &record).expect("check should succeed"),
            "other password must not verify under {params:?}"
        );
    }
}

/// The default preset produces a record that verifies and matches policy.
#[test]
fn interactive_preset_end_to_end() {
    let record = create(b"swordfish").expect("create should succeed");
    assert!(record.starts_with("$s0$"), "presets are scrypt records");
    assert!(check(b"swordfish", &record).expect("check should succeed"));
    assert!(
        !needs_rehash(&record, &CostPreset::Interactive.params())
            .expect("needs_rehash should succeed"),
        "fresh record already meets the default policy"
    );
    assert!(
        needs_rehash(&record, &CostPreset::Moderate.params())
            .expect("needs_rehash should succeed"),
        "a stronger policy must flag the record"
    );
}

/// Non-ASCII passwords are treated as plain bytes.
#[test]
fn unicode_passwords_round_trip() {
    let password = "pässwörd-🔑".as_bytes();
    let record = create_with_params(password, &cheap_scrypt()).expect("create should succeed");
    assert!(check(password, &record).expect("check should succeed"));
    assert!(!check("pässwörd-🔒".as_bytes(), &record).expect("check should succeed"));
}

/// Near-miss attempts all fail: case flip, truncation, extension, empty.
#[test]
fn near_miss_passwords_fail() {
    let record = create_with_params(b"Correct Horse", &cheap_pbkdf2())
        .expect("create should succeed");
    for attempt in [
        b"correct Horse".as_slice(),
        b"Correct Hors",
        b"Correct Horsee",
        b"Correct Horse ",
        b"",
    ] {
        assert!(
            !check(attempt, &record).expect("check should succeed"),
            "attempt {attempt:?} must not verify"
        );
    }
}

/// Parameter upgrade flow: detect a stale record, re-create it, verify
/// under the new policy.
#[test]
fn rehash_flow_upgrades_parameters() {
    let old_params = cheap_scrypt();
    let new_params = CostParams::Scrypt(ScryptParams::new(64, 2, 1).expect("params"));

    let mut rng = StdRng::seed_from_u64(99);
    let old_record =
        create_with_rng(b"migrating", &old_params, &mut rng).expect("create should succeed");
    assert!(needs_rehash(&old_record, &new_params).expect("needs_rehash should succeed"));

    // On next successful login the caller re-creates the record.
    assert!(check(b"migrating", &old_record).expect("check should succeed"));
    let new_record =
        create_with_rng(b"migrating", &new_params, &mut rng).expect("create should succeed");

    assert!(check(b"migrating", &new_record).expect("check should succeed"));
    assert!(!needs_rehash(&new_record, &new_params).expect("needs_rehash should succeed"));
}

/// Records carry everything needed for verification; no out-of-band state.
#[test]
fn records_are_self_describing() {
    let mut rng = StdRng::seed_from_u64(7);
    let records: Vec<String> = [cheap_scrypt(), cheap_pbkdf2()]
        .iter()
        .map(|params| {
            create_with_rng(b"stateless", params, &mut rng).expect("create should succeed")
        })
        .collect();

    // Nothing but the string and the password goes into check.
    for record in &records {
        assert!(check(b"stateless", record).expect("check should succeed"));
    }
}

//! Checkpoint Tests - Save/Load RandomSource State
//!
//! Critical invariants tested:
//! - Determinism: a restored source continues the exact same stream
//! - Seed integrity: the stored seed survives even when it diverged from the engine
//! - Defaults travel with the snapshot

use random_source_core_rs::{NormalOptions, RandomSource, SamplingDefaults, Xorshift64Star};

#[test]
fn test_restore_mid_sequence_continues_stream() {
    let mut original = RandomSource::new(42);
    for _ in 0..137 {
        original.range_int_default();
        original.normal_range_default().unwrap();
    }

    let json = serde_json::to_string(&original).unwrap();
    let mut restored: RandomSource = serde_json::from_str(&json).unwrap();

    let options = NormalOptions::new(5.0, 2.0);
    for _ in 0..200 {
        assert_eq!(original.range_int(1, 6), restored.range_int(1, 6));
        assert_eq!(
            original.normal_range(&options).unwrap(),
            restored.normal_range(&options).unwrap()
        );
        assert_eq!(
            original.discrete_int(&[3.0, 1.0]).unwrap(),
            restored.discrete_int(&[3.0, 1.0]).unwrap()
        );
    }
}

#[test]
fn test_restore_keeps_diverged_seed() {
    let mut original = RandomSource::new(9);
    original.use_random_seed();

    let json = serde_json::to_string(&original).unwrap();
    let mut restored: RandomSource = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.seed(), 9);
    assert_eq!(restored.engine(), original.engine());

    // Rewinding still goes back to the stored seed's stream
    restored.use_default_seed();
    let mut reference = RandomSource::new(9);
    assert_eq!(restored.range_int_default(), reference.range_int_default());
}

#[test]
fn test_restore_keeps_custom_defaults() {
    let defaults = SamplingDefaults {
        uniform_int_min: 1,
        uniform_int_max: 6,
        ..SamplingDefaults::default()
    };
    let original = RandomSource::with_defaults(3, defaults.clone()).unwrap();

    let json = serde_json::to_string(&original).unwrap();
    let mut restored: RandomSource = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.defaults(), &defaults);
    for _ in 0..100 {
        assert!((1..=6).contains(&restored.range_int_default()));
    }
}

#[test]
fn test_snapshot_with_invalid_defaults_rejected() {
    let engine = Xorshift64Star::from_seed_u32(5);
    let json = format!(
        r#"{{"seed":5,"engine":{},"defaults":{{"bernoulli_probability":2.0}}}}"#,
        serde_json::to_string(&engine).unwrap()
    );

    let err = serde_json::from_str::<RandomSource>(&json).unwrap_err();
    assert!(
        err.to_string().contains("bernoulli_probability"),
        "unexpected error: {}",
        err
    );
}

#[test]
fn test_snapshot_without_defaults_uses_table() {
    let engine = Xorshift64Star::from_seed_u32(5);
    let json = format!(
        r#"{{"seed":5,"engine":{}}}"#,
        serde_json::to_string(&engine).unwrap()
    );

    let restored: RandomSource = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.seed(), 5);
    assert_eq!(restored.defaults(), &SamplingDefaults::default());
}

#[test]
fn test_engine_state_replay() {
    let mut random = RandomSource::new(12345);
    for _ in 0..10 {
        random.range_float_default();
    }

    // Engine state alone identifies the stream position
    let checkpoint_state = random.engine().get_state();
    let mut resumed = Xorshift64Star::from_state(checkpoint_state);
    let mut live = random.engine().clone();

    for _ in 0..50 {
        assert_eq!(resumed.next_f64(), live.next_f64());
    }
}

//! Per-thread shared random source
//!
//! Each test runs on its own thread, so every test starts with an empty slot.

use random_source_core_rs::{shared, RandomError, RandomSource};

#[test]
fn test_not_installed() {
    assert!(!shared::is_installed());
    assert_eq!(
        shared::with_shared(|random| random.range_int_default()),
        Err(RandomError::SharedNotInstalled)
    );
}

#[test]
fn test_state_persists_between_calls() {
    shared::install(RandomSource::new(77));

    let first = shared::with_shared(|random| random.range_int_default()).unwrap();
    let second = shared::with_shared(|random| random.range_int_default()).unwrap();

    let mut reference = RandomSource::new(77);
    assert_eq!(first, reference.range_int_default());
    assert_eq!(second, reference.range_int_default());

    shared::with_shared(|random| random.set_seed(5)).unwrap();
    assert_eq!(shared::with_shared(|random| random.seed()).unwrap(), 5);
}

#[test]
fn test_install_replaces_and_uninstall_returns() {
    assert!(shared::install(RandomSource::new(1)).is_none());

    let previous = shared::install(RandomSource::new(2)).unwrap();
    assert_eq!(previous.seed(), 1);

    let current = shared::uninstall().unwrap();
    assert_eq!(current.seed(), 2);
    assert!(!shared::is_installed());
    assert!(shared::uninstall().is_none());
}

#[test]
fn test_reentrant_access_is_busy() {
    shared::install(RandomSource::new(3));

    let inner = shared::with_shared(|_| shared::with_shared(|random| random.seed())).unwrap();
    assert_eq!(inner, Err(RandomError::SharedBusy));
}

#[test]
fn test_slot_is_per_thread() {
    shared::install(RandomSource::new(4));

    let other = std::thread::spawn(|| shared::is_installed()).join().unwrap();
    assert!(!other);
    assert!(shared::is_installed());
}

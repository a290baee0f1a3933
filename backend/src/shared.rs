//! Per-thread shared random source
//!
//! Some callers want one source reachable without threading `&mut
//! RandomSource` through every call. The slot is thread-local and starts
//! empty: a source must be installed explicitly, and each thread sees only
//! its own.
//!
//! # Example
//! ```
//! use random_source_core_rs::{shared, RandomSource};
//!
//! shared::install(RandomSource::new(42));
//! let roll = shared::with_shared(|random| random.range_int(1, 6)).unwrap();
//! assert!((1..=6).contains(&roll));
//! ```

use std::cell::RefCell;

use log::debug;

use crate::error::RandomError;
use crate::rng::RandomSource;

thread_local! {
    static SHARED: RefCell<Option<RandomSource>> = const { RefCell::new(None) };
}

/// Install `source` as this thread's shared source, returning the previous one
pub fn install(source: RandomSource) -> Option<RandomSource> {
    debug!("shared random source installed (seed {})", source.seed());
    SHARED.with(|slot| slot.borrow_mut().replace(source))
}

/// Remove and return this thread's shared source
pub fn uninstall() -> Option<RandomSource> {
    SHARED.with(|slot| slot.borrow_mut().take())
}

pub fn is_installed() -> bool {
    SHARED.with(|slot| slot.borrow().is_some())
}

/// Run `f` against this thread's shared source
///
/// # Errors
///
/// - `SharedNotInstalled` if nothing was installed on this thread
/// - `SharedBusy` if called re-entrantly from inside another `with_shared`
pub fn with_shared<R>(f: impl FnOnce(&mut RandomSource) -> R) -> Result<R, RandomError> {
    SHARED.with(|slot| {
        let mut guard = slot.try_borrow_mut().map_err(|_| RandomError::SharedBusy)?;
        let source = guard.as_mut().ok_or(RandomError::SharedNotInstalled)?;
        Ok(f(source))
    })
}

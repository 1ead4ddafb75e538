//! Request-generation guard for fetch-on-parameter-change races.
//!
//! Each new trigger takes a fresh generation token; only a completion still
//! holding the current token may store its result. A superseded completion
//! is discarded instead of overwriting fresher state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Monotonic token identifying one triggered fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// Guarded slot holding the latest accepted result.
pub struct FetchGuard<T> {
    current: AtomicU64,
    slot: Mutex<Option<T>>,
}

impl<T> Default for FetchGuard<T> {
    fn default() -> Self {
        Self {
            current: AtomicU64::new(0),
            slot: Mutex::new(None),
        }
    }
}

impl<T> FetchGuard<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new fetch, invalidating every earlier token.
    pub fn begin(&self) -> Generation {
        Generation(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Stores `value` if `token` is still current. Returns whether the
    /// value was accepted.
    pub fn complete(&self, token: Generation, value: T) -> bool {
        if self.current.load(Ordering::SeqCst) != token.0 {
            return false;
        }
        let mut slot = match self.slot.lock() {
            Ok(slot) => slot,
            Err(poisoned) => poisoned.into_inner(),
        };
        *slot = Some(value);
        true
    }
}

impl<T: Clone> FetchGuard<T> {
    /// The latest accepted result, if any fetch has completed.
    pub fn latest(&self) -> Option<T> {
        let slot = match self.slot.lock() {
            Ok(slot) => slot,
            Err(poisoned) => poisoned.into_inner(),
        };
        slot.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_current_generation() {
        let guard = FetchGuard::new();
        let token = guard.begin();
        assert!(guard.complete(token, "planets"));
        assert_eq!(guard.latest(), Some("planets"));
    }

    #[test]
    fn discards_superseded_generation() {
        let guard = FetchGuard::new();
        let stale = guard.begin();
        let fresh = guard.begin();
        assert!(!guard.complete(stale, "planets"));
        assert!(guard.complete(fresh, "stars"));
        assert_eq!(guard.latest(), Some("stars"));
    }

    #[test]
    fn late_stale_completion_does_not_overwrite() {
        let guard = FetchGuard::new();
        let stale = guard.begin();
        let fresh = guard.begin();
        assert!(guard.complete(fresh, "stars"));
        assert!(!guard.complete(stale, "planets"));
        assert_eq!(guard.latest(), Some("stars"));
    }

    #[test]
    fn latest_is_empty_until_a_fetch_completes() {
        let guard: FetchGuard<&str> = FetchGuard::new();
        assert_eq!(guard.latest(), None);
        let token = guard.begin();
        guard.complete(token, "x");
        assert_eq!(guard.latest(), Some("x"));
        assert_eq!(guard.latest(), Some("x"));
    }
}

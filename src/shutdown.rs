//! Process-wide interrupt flag.
//! Set by the Ctrl-C handler; the walker polls it before every entry so a long
//! copy or delete stops at the next entry boundary.
//!
//! Relaxed ordering is enough for a one-way stop flag.

use std::sync::atomic::{AtomicBool, Ordering};

static SHUTDOWN: AtomicBool = AtomicBool::new(false);

/// Request that the current walk stop (idempotent, signal-safe).
#[inline]
pub fn request() {
    SHUTDOWN.store(true, Ordering::Relaxed);
}

#[inline]
pub fn is_requested() -> bool {
    SHUTDOWN.load(Ordering::Relaxed)
}

/// Test-only: clear the flag.
#[cfg(any(test, feature = "test-utils"))]
#[inline]
pub fn reset() {
    SHUTDOWN.store(false, Ordering::Relaxed);
}

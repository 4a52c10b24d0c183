//! Injectable wall clock for stamping versions.
//!
//! The check operation reads the time through [`Clock`] rather than calling
//! `SystemTime::now()` directly, so tests can pin or advance time.
//! [`SystemClock`] is the production source; [`ManualClock`] is a shared,
//! settable clock for tests.
//!
//! # Tiger Style
//!
//! - No `.expect()` or `.unwrap()`: a clock before the epoch reads as 0
//! - Whole seconds only, matching the disambiguator resolution

use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

/// Source of the current Unix time in whole seconds.
pub trait Clock: Send + Sync {
    /// Seconds since the Unix epoch.
    fn now_unix_secs(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_unix_secs(&self) -> u64 {
        (**self).now_unix_secs()
    }
}

/// Production clock backed by the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now_unix_secs(&self) -> u64 {
        SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or(0)
    }
}

/// Manually driven clock.
///
/// Clones share the same underlying time, so a test can hand one clone to the
/// code under test and move time with another.
///
/// ```
/// use github_team_core::Clock;
/// use github_team_core::ManualClock;
///
/// let clock = ManualClock::new(465_177_600);
/// let handle = clock.clone();
/// handle.advance_secs(300);
/// assert_eq!(clock.now_unix_secs(), 465_177_900);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_secs: Arc<AtomicU64>,
}

impl ManualClock {
    /// Create a clock reading `now_secs`.
    pub fn new(now_secs: u64) -> Self {
        Self {
            now_secs: Arc::new(AtomicU64::new(now_secs)),
        }
    }

    /// Move time forward.
    pub fn advance_secs(&self, delta_secs: u64) {
        // fetch_update never fails when the closure always returns Some.
        let _ = self
            .now_secs
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |now| Some(now.saturating_add(delta_secs)));
    }

    /// Jump to an absolute time, possibly backwards.
    pub fn set_secs(&self, now_secs: u64) {
        self.now_secs.store(now_secs, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now_unix_secs(&self) -> u64 {
        self.now_secs.load(Ordering::SeqCst)
    }
}

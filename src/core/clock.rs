//! Injectable time source for bonus-time accounting.
//!
//! Bonus time is the only part of the engine that depends on the outside
//! world. All readings go through a `Clock`, so tests and replays can drive
//! time explicitly with `ManualClock` instead of sleeping.
//!
//! ```
//! use std::time::Duration;
//! use memorize::core::{Clock, ManualClock, Timestamp};
//!
//! let clock = ManualClock::new();
//! let shared = clock.clone();
//!
//! let start = clock.now();
//! shared.advance(Duration::from_millis(1500));
//!
//! assert_eq!(clock.now().since(start), Duration::from_millis(1500));
//! assert_eq!(start, Timestamp::ZERO);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// A point in time, measured as an offset from the clock's origin.
///
/// Only differences between timestamps from the same clock are meaningful.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(pub Duration);

impl Timestamp {
    /// The clock origin.
    pub const ZERO: Self = Self(Duration::ZERO);

    /// Create a timestamp at `offset` from the clock origin.
    #[must_use]
    pub const fn from_offset(offset: Duration) -> Self {
        Self(offset)
    }

    /// Time elapsed from `earlier` to `self`, saturating at zero.
    #[must_use]
    pub fn since(self, earlier: Timestamp) -> Duration {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<Duration> for Timestamp {
    type Output = Timestamp;

    fn add(self, rhs: Duration) -> Timestamp {
        Timestamp(self.0.saturating_add(rhs))
    }
}

/// Source of "now" readings.
pub trait Clock {
    /// Current reading.
    fn now(&self) -> Timestamp;
}

/// Wall-clock source backed by the monotonic `Instant`.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Create a clock whose origin is the moment of creation.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp(self.origin.elapsed())
    }
}

/// Clock that only moves when told to.
///
/// Clones share one reading, so a test can keep a handle while the game owns
/// another.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    nanos: Arc<AtomicU64>,
}

impl ManualClock {
    /// Create a clock reading `Timestamp::ZERO`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.nanos.fetch_add(saturating_nanos(by), Ordering::SeqCst);
    }

    /// Set the reading to `offset` from the origin.
    ///
    /// Setting it backwards is allowed; intervals saturate at zero.
    pub fn set(&self, offset: Duration) {
        self.nanos.store(saturating_nanos(offset), Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp(Duration::from_nanos(self.nanos.load(Ordering::SeqCst)))
    }
}

fn saturating_nanos(d: Duration) -> u64 {
    u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Pacing speed.
//!
//! Speed is a delay per delivered event, not a rate: a smaller delay runs
//! faster. The delay never drops below [`MIN_DELAY`], so a paced run can
//! never degenerate into a busy loop.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Lower bound on the pause after each event.
pub const MIN_DELAY: Duration = Duration::from_millis(1);

/// Upper bound on the pause after each event, the largest delay that fits
/// in a `u64` nanosecond count.
pub const MAX_DELAY: Duration = Duration::from_nanos(u64::MAX);

/// Pause used when no speed has been configured.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(50);

/// Slowest accepted slider position.
pub const SLIDER_MIN: u8 = 1;

/// Fastest accepted slider position.
pub const SLIDER_MAX: u8 = 100;

/// A pacing delay applied after every delivered event.
///
/// # Examples
///
/// ```
/// use sortviz::model::Speed;
/// use std::time::Duration;
///
/// assert_eq!(Speed::from_slider(50).delay(), Duration::from_millis(500));
/// assert_eq!(Speed::from_slider(100).delay(), Duration::from_millis(1));
/// assert_eq!(Speed::new(Duration::ZERO).delay(), Duration::from_millis(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Duration", into = "Duration")]
pub struct Speed(Duration);

impl Speed {
    /// Creates a speed from a delay, clamped to `[MIN_DELAY, MAX_DELAY]`.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self(delay.clamp(MIN_DELAY, MAX_DELAY))
    }

    /// Creates a speed from a delay in seconds.
    ///
    /// Delays too long to represent saturate at [`MAX_DELAY`]; negative and
    /// NaN inputs fall back to [`MIN_DELAY`].
    #[must_use]
    pub fn from_secs_f64(secs: f64) -> Self {
        match Duration::try_from_secs_f64(secs) {
            Ok(delay) => Self::new(delay),
            Err(_) if secs > 0.0 => Self(MAX_DELAY),
            Err(_) => Self(MIN_DELAY),
        }
    }

    /// Maps a raw slider position to a delay of `max(0.001, (100 - raw) / 100)`
    /// seconds. Positions outside `[1, 100]` are clamped first.
    #[must_use]
    pub fn from_slider(raw: u8) -> Self {
        let raw = raw.clamp(SLIDER_MIN, SLIDER_MAX);
        Self::new(Duration::from_millis(u64::from(SLIDER_MAX - raw) * 10))
    }

    /// Creates a speed from a nanosecond count.
    #[must_use]
    pub fn from_nanos(nanos: u64) -> Self {
        Self::new(Duration::from_nanos(nanos))
    }

    /// The pause applied after each event.
    #[inline]
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.0
    }

    /// The pause in nanoseconds.
    #[must_use]
    pub fn as_nanos(&self) -> u64 {
        u64::try_from(self.0.as_nanos()).unwrap_or(u64::MAX)
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(DEFAULT_DELAY)
    }
}

impl From<Duration> for Speed {
    fn from(delay: Duration) -> Self {
        Self::new(delay)
    }
}

impl From<Speed> for Duration {
    fn from(speed: Speed) -> Self {
        speed.0
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}s/event", self.0.as_secs_f64())
    }
}

//! Time representation for the trim editor.
//!
//! Playback engines report positions as fractional seconds, so time is
//! carried as `f64` seconds behind a newtype. All public parameters and
//! return values use `TimeCode` rather than bare floats.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A point on the untrimmed clip's timeline, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeCode(f64);

impl TimeCode {
    /// Zero time constant.
    pub const ZERO: Self = Self(0.0);

    /// Create a TimeCode from seconds.
    #[inline]
    pub const fn from_secs(seconds: f64) -> Self {
        Self(seconds)
    }

    /// Seconds as f64.
    #[inline]
    pub fn as_secs(self) -> f64 {
        self.0
    }

    /// Create a TimeCode from milliseconds.
    #[inline]
    pub fn from_millis(millis: f64) -> Self {
        Self(millis / 1000.0)
    }

    /// Check if this time is zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// Clamp into `[min, max]`.
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self(self.0.clamp(min.0, max.0))
    }

    /// The smaller of two times.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// The larger of two times.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }
}

impl Default for TimeCode {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for TimeCode {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for TimeCode {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for TimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}s", self.0)
    }
}

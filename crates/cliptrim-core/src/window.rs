//! The user-authored trim window.
//!
//! A `TrimWindow` is the `(start, end)` sub-interval of a clip that will
//! actually be sent. Construction enforces the `start < end` invariant;
//! values that overshoot `[0, duration]` by floating-point noise are
//! clamped back into range rather than rejected.

use crate::error::{Result, TrimError};
use crate::time::TimeCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated `(start, end)` trim interval within a clip.
///
/// Fields are private so the `start < end` invariant cannot be broken after
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrimWindow {
    start: TimeCode,
    end: TimeCode,
}

impl TrimWindow {
    /// Create a trim window, clamping `start` and `end` into
    /// `[0, duration]`.
    ///
    /// Returns `TrimError::InvalidWindow` if, after clamping, `start >= end`.
    pub fn new(start: TimeCode, end: TimeCode, duration: TimeCode) -> Result<Self> {
        let clamped_start = start.clamp(TimeCode::ZERO, duration);
        let clamped_end = end.clamp(TimeCode::ZERO, duration);
        if clamped_start >= clamped_end {
            return Err(TrimError::InvalidWindow {
                start,
                end,
                duration,
            });
        }
        Ok(Self {
            start: clamped_start,
            end: clamped_end,
        })
    }

    /// The full-clip window `[0, duration]`, the default when a clip loads.
    pub fn full(duration: TimeCode) -> Result<Self> {
        Self::new(TimeCode::ZERO, duration, duration)
    }

    /// Start of the window (inclusive).
    #[inline]
    pub fn start(self) -> TimeCode {
        self.start
    }

    /// End of the window (inclusive).
    #[inline]
    pub fn end(self) -> TimeCode {
        self.end
    }

    /// Length of the window.
    #[inline]
    pub fn duration(self) -> TimeCode {
        self.end - self.start
    }

    /// Check if a time falls within the window.
    #[inline]
    pub fn contains(self, time: TimeCode) -> bool {
        time >= self.start && time <= self.end
    }
}

impl fmt::Display for TrimWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

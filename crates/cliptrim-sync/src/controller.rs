//! The playback/trim synchronization controller.
//!
//! Two guarded reactive rules keep the playback cursor and the trim
//! window consistent:
//! - `will_start_playback` corrects the cursor back to the trim start
//!   before a resume when it sits outside the window or too close to the
//!   trim end to advance from.
//! - `on_playback_time_advanced` halts playback the moment the cursor
//!   passes the trim end.
//!
//! Both rules stand down while a trim-handle drag is in progress: the
//! trimming gesture repositions playback itself and must not be fought.

use cliptrim_core::{Result, TimeCode, TrimWindow};
use crossbeam_channel::Receiver;
use serde::{Deserialize, Serialize};
use std::thread::{self, ThreadId};
use tracing::debug;

use crate::event::{EventHub, SyncEvent};
use crate::source::PlaybackSource;

/// Default resume tolerance before the trim end, in seconds.
///
/// Tuned against playback engines whose position reporting lags near the
/// boundary; resuming inside this band double-triggers the boundary stop
/// or stalls on the last frame.
pub const DEFAULT_BOUNDARY_TOLERANCE_SECS: f64 = 0.1;

/// Tuning knobs for the synchronization rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// How close to the trim end a resume position may be before it is
    /// corrected back to the trim start.
    pub boundary_tolerance: TimeCode,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            boundary_tolerance: TimeCode::from_secs(DEFAULT_BOUNDARY_TOLERANCE_SECS),
        }
    }
}

/// Mediates between a [`PlaybackSource`] and the user-authored trim window.
///
/// Single-threaded by contract: all calls must arrive on the thread that
/// created the controller, which is debug-asserted rather than locked.
#[derive(Debug)]
pub struct TrimSyncController {
    duration: TimeCode,
    window: TrimWindow,
    config: SyncConfig,
    adjusting: bool,
    events: EventHub,
    home_thread: ThreadId,
}

impl TrimSyncController {
    /// Create a controller for a clip of the given duration.
    ///
    /// The initial window is re-validated against `duration`; a window
    /// that does not satisfy `0 <= start < end <= duration` (beyond
    /// float noise, which is clamped) is `TrimError::InvalidWindow`.
    pub fn new(duration: TimeCode, initial_window: TrimWindow, config: SyncConfig) -> Result<Self> {
        let window = TrimWindow::new(initial_window.start(), initial_window.end(), duration)?;
        debug!(%duration, %window, "Trim sync controller configured");
        Ok(Self {
            duration,
            window,
            config,
            adjusting: false,
            events: EventHub::new(),
            home_thread: thread::current().id(),
        })
    }

    /// Total duration of the untrimmed clip.
    #[inline]
    pub fn duration(&self) -> TimeCode {
        self.duration
    }

    /// The current trim window.
    #[inline]
    pub fn window(&self) -> TrimWindow {
        self.window
    }

    /// The active configuration.
    #[inline]
    pub fn config(&self) -> SyncConfig {
        self.config
    }

    /// Whether a trim-handle drag is in progress.
    #[inline]
    pub fn is_adjusting(&self) -> bool {
        self.adjusting
    }

    /// Open a subscription to this controller's events.
    pub fn subscribe(&mut self) -> Receiver<SyncEvent> {
        self.events.subscribe()
    }

    /// Update the trim window from a handle adjustment.
    ///
    /// Bounds off by float noise are clamped into `[0, duration]`;
    /// `start >= end` is rejected and the stored window is untouched.
    /// Does not seek; the trimming gesture owns preview repositioning.
    pub fn set_trim_window(&mut self, start: TimeCode, end: TimeCode) -> Result<()> {
        self.assert_home_thread();
        let window = TrimWindow::new(start, end, self.duration)?;
        self.window = window;
        debug!(%window, "Trim window updated");
        self.events.emit(SyncEvent::WindowChanged { window });
        Ok(())
    }

    /// Mark a trim-handle drag as started. Idempotent.
    ///
    /// While the drag is in progress, resume correction and the boundary
    /// stop are suspended.
    pub fn begin_trim_adjustment(&mut self) {
        self.assert_home_thread();
        if !self.adjusting {
            self.adjusting = true;
            debug!("Trim adjustment started, boundary enforcement suspended");
        }
    }

    /// Mark a trim-handle drag as finished. Idempotent.
    pub fn end_trim_adjustment(&mut self) {
        self.assert_home_thread();
        if self.adjusting {
            self.adjusting = false;
            debug!("Trim adjustment ended, boundary enforcement resumed");
        }
    }

    /// Pre-resume correction. Call immediately before resuming playback.
    ///
    /// Seeks the source back to the trim start and returns `true` when
    /// the reported position is before the window start or within
    /// `boundary_tolerance` of the trim end (inclusive of the end
    /// itself). Returns `false` when playback can resume in place.
    ///
    /// After a corrective seek the caller must let the engine acknowledge
    /// the new position before issuing play; see
    /// [`TrimSession::request_resume`](crate::session::TrimSession::request_resume).
    pub fn will_start_playback(&mut self, source: &mut dyn PlaybackSource) -> bool {
        self.assert_home_thread();
        if self.adjusting {
            return false;
        }

        let position = source.position().clamp(TimeCode::ZERO, self.duration);
        let resume_limit = self.window.end() - self.config.boundary_tolerance;
        if position < self.window.start() || position >= resume_limit {
            debug!(
                from = %position,
                to = %self.window.start(),
                "Resume position outside trim window, correcting"
            );
            source.seek(self.window.start());
            return true;
        }
        false
    }

    /// Boundary enforcement. Call on every position notification while
    /// playing.
    ///
    /// A position past the trim end commands exactly one pause and emits
    /// `StoppedAtBoundary`; the position notification for that tick is
    /// suppressed. Otherwise the position is propagated as
    /// `PositionChanged`.
    pub fn on_playback_time_advanced(&mut self, source: &mut dyn PlaybackSource) {
        self.assert_home_thread();
        if self.adjusting {
            return;
        }

        let position = source.position().clamp(TimeCode::ZERO, self.duration);
        if position > self.window.end() {
            debug!(at = %position, end = %self.window.end(), "Playback passed trim end, stopping");
            source.pause();
            self.events.emit(SyncEvent::StoppedAtBoundary {
                at: self.window.end(),
            });
            return;
        }
        self.events.emit(SyncEvent::PositionChanged { at: position });
    }

    fn assert_home_thread(&self) {
        debug_assert_eq!(
            thread::current().id(),
            self.home_thread,
            "TrimSyncController must be driven from the thread that created it"
        );
    }
}

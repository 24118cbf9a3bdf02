//! One editing session over a loaded clip.
//!
//! The session owns the controller and the playback source for the life
//! of the edit. The host forwards raw input (trim-handle drags, the play
//! button, the engine's periodic ticks) and receives the final trim
//! window back when the user confirms.

use cliptrim_core::{Result, TimeCode, TrimWindow};
use crossbeam_channel::Receiver;
use tracing::{debug, info};
use uuid::Uuid;

use crate::controller::{SyncConfig, TrimSyncController};
use crate::event::SyncEvent;
use crate::source::PlaybackSource;

/// An in-progress trim edit of a single attachment clip.
pub struct TrimSession {
    id: Uuid,
    controller: TrimSyncController,
    source: Box<dyn PlaybackSource>,
    /// Set when a corrective seek was issued on resume; the actual play
    /// command is held back until the next tick so the engine can
    /// acknowledge the seek first.
    pending_play: bool,
}

impl TrimSession {
    /// Open a session for a clip of the given duration. The initial trim
    /// window spans the whole clip.
    pub fn open(
        source: Box<dyn PlaybackSource>,
        duration: TimeCode,
        config: SyncConfig,
    ) -> Result<Self> {
        let window = TrimWindow::full(duration)?;
        let controller = TrimSyncController::new(duration, window, config)?;
        let id = Uuid::new_v4();
        info!(session = %id, %duration, "Trim session opened");
        Ok(Self {
            id,
            controller,
            source,
            pending_play: false,
        })
    }

    /// Session identifier, for log correlation.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The current trim window.
    pub fn window(&self) -> TrimWindow {
        self.controller.window()
    }

    /// Total duration of the untrimmed clip.
    pub fn duration(&self) -> TimeCode {
        self.controller.duration()
    }

    /// Whether the engine is currently playing.
    pub fn is_playing(&self) -> bool {
        self.source.is_playing()
    }

    /// Open a subscription to this session's events.
    pub fn subscribe(&mut self) -> Receiver<SyncEvent> {
        self.controller.subscribe()
    }

    /// A trim handle was grabbed. Suspends boundary enforcement until
    /// [`end_handle_drag`](Self::end_handle_drag).
    pub fn begin_handle_drag(&mut self) {
        self.controller.begin_trim_adjustment();
    }

    /// The trim handles moved. Updates the window and repositions the
    /// preview to the edge that moved, so the user sees the frame they
    /// are trimming to.
    pub fn drag_window(&mut self, start: TimeCode, end: TimeCode) -> Result<()> {
        let before = self.controller.window();
        self.controller.set_trim_window(start, end)?;
        let after = self.controller.window();
        let target = if after.end() != before.end() {
            after.end()
        } else {
            after.start()
        };
        debug!(session = %self.id, %target, "Previewing trim edge");
        self.source.seek(target);
        Ok(())
    }

    /// The trim handle was released.
    pub fn end_handle_drag(&mut self) {
        self.controller.end_trim_adjustment();
    }

    /// The user pressed play.
    ///
    /// Runs the pre-resume correction first. If a corrective seek was
    /// issued, play is deferred to the next [`tick`](Self::tick) so the
    /// engine acknowledges the seek before it starts advancing;
    /// otherwise playback resumes immediately from the current position.
    pub fn request_resume(&mut self) {
        if self.controller.will_start_playback(self.source.as_mut()) {
            self.pending_play = true;
            debug!(session = %self.id, "Play deferred one tick behind corrective seek");
        } else {
            self.source.play();
        }
    }

    /// The user pressed pause. Cancels any deferred play.
    pub fn request_pause(&mut self) {
        self.pending_play = false;
        self.source.pause();
    }

    /// Host-driven pump, called once per position notification.
    ///
    /// Issues a deferred play if one is pending; otherwise, while the
    /// engine is playing, runs the boundary check and forwards the
    /// position to subscribers.
    pub fn tick(&mut self) {
        if self.pending_play {
            self.pending_play = false;
            self.source.play();
            // The engine's position report may still lag the seek on the
            // tick play was issued; the boundary check resumes next tick.
            return;
        }
        if self.source.is_playing() {
            self.controller
                .on_playback_time_advanced(self.source.as_mut());
        }
    }

    /// Confirm the edit. Stops playback and hands back the final window.
    pub fn finish(mut self) -> TrimWindow {
        self.source.pause();
        let window = self.controller.window();
        info!(session = %self.id, %window, "Trim session finished");
        window
    }

    /// Abandon the edit. Stops playback and discards the window.
    pub fn cancel(mut self) {
        self.source.pause();
        info!(session = %self.id, "Trim session cancelled");
    }
}

//! Events emitted toward the display layer.
//!
//! The controller publishes over unbounded channels so a scrub bar or a
//! play-button icon can observe it without the controller holding any
//! reference back into view code.

use cliptrim_core::{TimeCode, TrimWindow};
use crossbeam_channel::{unbounded, Receiver, Sender};
use serde::{Deserialize, Serialize};

/// A notification from the synchronization layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SyncEvent {
    /// Playback advanced to a new position inside the trim window.
    PositionChanged { at: TimeCode },
    /// Playback was halted because the position passed the trim end.
    /// Suppresses the position notification for the same tick.
    StoppedAtBoundary { at: TimeCode },
    /// The trim window was updated.
    WindowChanged { window: TrimWindow },
}

/// Fan-out of [`SyncEvent`]s to any number of subscribers.
///
/// Each subscriber gets its own channel; disconnected subscribers are
/// dropped on the next emit.
#[derive(Debug, Default)]
pub(crate) struct EventHub {
    senders: Vec<Sender<SyncEvent>>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new subscription.
    pub fn subscribe(&mut self) -> Receiver<SyncEvent> {
        let (tx, rx) = unbounded();
        self.senders.push(tx);
        rx
    }

    /// Send an event to every live subscriber.
    pub fn emit(&mut self, event: SyncEvent) {
        self.senders.retain(|tx| tx.send(event).is_ok());
    }
}

//! The playback engine boundary.

use cliptrim_core::TimeCode;

/// Transport operations the synchronization layer needs from a playback
/// engine.
///
/// The engine owns the playback position and the playing/paused state;
/// the synchronization layer only reads them and issues at most one
/// command per notification. Position reports may drift slightly outside
/// `[0, duration]` near clip boundaries; callers clamp rather than trust
/// them.
pub trait PlaybackSource {
    /// Current read position on the untrimmed clip's timeline.
    fn position(&self) -> TimeCode;

    /// Whether the engine is currently advancing.
    fn is_playing(&self) -> bool;

    /// Jump the read position.
    fn seek(&mut self, to: TimeCode);

    /// Begin or resume playback from the current position.
    fn play(&mut self);

    /// Halt playback, keeping the current position.
    fn pause(&mut self);
}

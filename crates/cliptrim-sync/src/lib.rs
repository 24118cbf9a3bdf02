//! Cliptrim Sync - Playback/trim synchronization
//!
//! Keeps a continuously advancing playback position consistent with the
//! user's trim window while previewing an attachment:
//! - Resume correction: resuming from outside the window seeks back to
//!   the trim start before play is issued.
//! - Boundary stop: playback halts as soon as the position passes the
//!   trim end.
//! - Drag suspension: both rules stand down while the user is dragging
//!   trim handles, since the trimming gesture repositions playback itself.
//!
//! The playback engine sits behind the [`PlaybackSource`] trait; the
//! display layer consumes [`SyncEvent`]s from a channel. Nothing here
//! decodes, renders, or touches files.

pub mod controller;
pub mod event;
pub mod session;
pub mod source;

pub use controller::{SyncConfig, TrimSyncController};
pub use event::SyncEvent;
pub use session::TrimSession;
pub use source::PlaybackSource;

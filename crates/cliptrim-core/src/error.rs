//! Error types for cliptrim.

use crate::time::TimeCode;
use thiserror::Error;

/// Main error type for cliptrim operations.
///
/// There is exactly one failure mode: a caller supplying a trim window that
/// violates `start < end` within `[0, duration]`. Out-of-range playback
/// positions are numerical noise and are clamped, never raised.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum TrimError {
    #[error("invalid trim window: start {start} must precede end {end} within [0, {duration}]")]
    InvalidWindow {
        start: TimeCode,
        end: TimeCode,
        duration: TimeCode,
    },
}

/// Result type alias for cliptrim operations.
pub type Result<T> = std::result::Result<T, TrimError>;

//! Cliptrim Core - Foundation types for the attachment trim editor
//!
//! This crate provides the fundamental types used throughout cliptrim:
//! - Time representation (TimeCode)
//! - The user-authored trim window (TrimWindow)
//! - Error taxonomy (TrimError)

pub mod error;
pub mod time;
pub mod window;

pub use error::{Result, TrimError};
pub use time::TimeCode;
pub use window::TrimWindow;

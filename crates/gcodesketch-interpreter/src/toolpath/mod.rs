//! Toolpath storage
//!
//! This module provides:
//! - The rapid/cut polyline model with stroke continuity
//! - The undo stack that reverses appends point for point

pub mod path;
pub mod undo;

pub use path::{MotionCategory, PathModel, PathSnapshot};
pub use undo::{UndoRecord, UndoStack};

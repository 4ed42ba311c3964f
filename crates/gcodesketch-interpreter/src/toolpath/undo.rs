//! Undo stack for path appends

use gcodesketch_core::Point3D;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::debug;

use super::path::{MotionCategory, PathModel};

/// What one append did to the path
///
/// Holds enough to reverse the append exactly: the number of points that
/// went onto the tail of one polyline and the state they replaced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UndoRecord {
    /// Polyline the points were appended to
    pub category: MotionCategory,
    /// Points appended, including any join prefix
    pub points_appended: usize,
    /// Tool position before the append
    pub previous_position: Point3D,
    /// Category of the append before this one
    pub previous_category: Option<MotionCategory>,
}

/// Last-in first-out list of append records
///
/// With a non-zero depth the oldest records are discarded once the limit is
/// reached; the points they describe stay in the path but can no longer be
/// taken back.
#[derive(Debug, Clone, Default)]
pub struct UndoStack {
    records: VecDeque<UndoRecord>,
    max_depth: usize,
}

impl UndoStack {
    /// Create an unbounded undo stack
    pub fn new() -> Self {
        Self::with_depth(0)
    }

    /// Create with a maximum number of records (0 = unbounded)
    pub fn with_depth(max_depth: usize) -> Self {
        Self {
            records: VecDeque::new(),
            max_depth,
        }
    }

    /// Record an append
    ///
    /// Returns true when an old record had to be dropped to respect the depth.
    pub fn push(&mut self, record: UndoRecord) -> bool {
        self.records.push_back(record);
        if self.max_depth > 0 && self.records.len() > self.max_depth {
            self.records.pop_front();
            debug!("Undo depth {} reached, dropped oldest record", self.max_depth);
            return true;
        }
        false
    }

    /// Undo the most recent append on `path`
    ///
    /// Returns false and leaves `path` untouched when there is nothing to undo.
    pub fn pop_and_apply(&mut self, path: &mut PathModel) -> bool {
        match self.records.pop_back() {
            Some(record) => {
                path.rewind(&record);
                true
            }
            None => false,
        }
    }

    /// Most recent record without removing it
    pub fn peek(&self) -> Option<&UndoRecord> {
        self.records.back()
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.records.is_empty()
    }

    /// Number of records held
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no records are held
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Configured maximum depth (0 = unbounded)
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Forget all records
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

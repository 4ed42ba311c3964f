//! Incremental rapid/cut polyline model

use gcodesketch_core::Point3D;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::undo::UndoRecord;
use crate::gcode::MoveKind;

/// Which polyline a move is drawn into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionCategory {
    /// Non-cutting G0 moves
    Rapid,
    /// G1, G2 and G3 moves
    Cut,
}

impl From<MoveKind> for MotionCategory {
    fn from(kind: MoveKind) -> Self {
        if kind.is_cutting() {
            Self::Cut
        } else {
            Self::Rapid
        }
    }
}

impl std::fmt::Display for MotionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rapid => write!(f, "rapid"),
            Self::Cut => write!(f, "cut"),
        }
    }
}

/// Owned copy of the path for a renderer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathSnapshot {
    pub rapid: Vec<Point3D>,
    pub cut: Vec<Point3D>,
    pub current_position: Point3D,
    pub last_move_was_cut: bool,
}

/// Two polylines, one per motion category, plus the tool position
///
/// Rapid and cut strokes are stored apart but stay visually joined: a
/// segment that starts a new stroke is prefixed with the current position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathModel {
    rapid: Vec<Point3D>,
    cut: Vec<Point3D>,
    current_position: Point3D,
    last_category: Option<MotionCategory>,
}

impl PathModel {
    /// Create an empty path with the tool at the origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Points of the rapid polyline
    pub fn rapid(&self) -> &[Point3D] {
        &self.rapid
    }

    /// Points of the cut polyline
    pub fn cut(&self) -> &[Point3D] {
        &self.cut
    }

    /// Points of the polyline for `category`
    pub fn polyline(&self, category: MotionCategory) -> &[Point3D] {
        match category {
            MotionCategory::Rapid => &self.rapid,
            MotionCategory::Cut => &self.cut,
        }
    }

    fn polyline_mut(&mut self, category: MotionCategory) -> &mut Vec<Point3D> {
        match category {
            MotionCategory::Rapid => &mut self.rapid,
            MotionCategory::Cut => &mut self.cut,
        }
    }

    /// Position after the most recent append (origin when empty)
    pub fn current_position(&self) -> Point3D {
        self.current_position
    }

    /// True when the most recent append went to the cut polyline
    pub fn last_move_was_cut(&self) -> bool {
        self.last_category == Some(MotionCategory::Cut)
    }

    /// True when both polylines are empty
    pub fn is_empty(&self) -> bool {
        self.rapid.is_empty() && self.cut.is_empty()
    }

    /// Append a segment to the polyline for `category`
    ///
    /// When the destination polyline does not already end at the current
    /// position and `points` does not start there, the current position is
    /// inserted first so the new stroke joins the previous one. Returns the
    /// record needed to take the append back. An empty segment changes
    /// nothing and yields a record of zero points.
    pub fn append(&mut self, category: MotionCategory, points: &[Point3D]) -> UndoRecord {
        let mut record = UndoRecord {
            category,
            points_appended: 0,
            previous_position: self.current_position,
            previous_category: self.last_category,
        };
        let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
            return record;
        };

        let join = self.current_position;
        let needs_prefix = self.polyline(category).last() != Some(&join) && first != join;
        record.points_appended = points.len() + usize::from(needs_prefix);

        let polyline = self.polyline_mut(category);
        polyline.reserve(record.points_appended);
        if needs_prefix {
            polyline.push(join);
        }
        polyline.extend_from_slice(points);

        self.current_position = last;
        self.last_category = Some(category);

        trace!(
            "Appended {} point(s) to {} polyline, position now {}",
            record.points_appended,
            category,
            self.current_position
        );
        record
    }

    /// Take back an append described by `record`
    ///
    /// Removes `points_appended` points from the tail of the named polyline
    /// and restores the position and category that preceded the append.
    pub fn rewind(&mut self, record: &UndoRecord) {
        let polyline = self.polyline_mut(record.category);
        let keep = polyline.len().saturating_sub(record.points_appended);
        polyline.truncate(keep);

        self.current_position = record.previous_position;
        self.last_category = record.previous_category;
    }

    /// Reset both polylines and move the tool back to the origin
    pub fn clear(&mut self) {
        self.rapid.clear();
        self.cut.clear();
        self.current_position = Point3D::ORIGIN;
        self.last_category = None;
    }

    /// Copy the current state for rendering
    pub fn snapshot(&self) -> PathSnapshot {
        PathSnapshot {
            rapid: self.rapid.clone(),
            cut: self.cut.clone(),
            current_position: self.current_position,
            last_move_was_cut: self.last_move_was_cut(),
        }
    }
}

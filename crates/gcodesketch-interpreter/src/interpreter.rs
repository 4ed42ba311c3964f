//! Command interpreter
//!
//! Owns one path and one undo stack. Each command is applied all-or-nothing:
//! arc geometry is fully resolved before anything is appended, so a rejected
//! command leaves the path, the undo stack, and the history untouched.

use gcodesketch_core::constants::{DEFAULT_ARC_SEGMENTS, DEFAULT_UNDO_DEPTH};
use gcodesketch_core::{Error, InterpretError, Point3D, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::gcode::{parse_line, Command, MoveKind};
use crate::geometry::{radius_range, solve_arc, RadiusRange};
use crate::toolpath::{MotionCategory, PathModel, PathSnapshot, UndoStack};

/// Tunables for an interpreter instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpreterOptions {
    /// Straight spans per arc
    pub arc_segments: usize,
    /// Undo records kept (0 = unbounded)
    pub undo_depth: usize,
}

impl Default for InterpreterOptions {
    fn default() -> Self {
        Self {
            arc_segments: DEFAULT_ARC_SEGMENTS,
            undo_depth: DEFAULT_UNDO_DEPTH,
        }
    }
}

impl InterpreterOptions {
    pub fn with_arc_segments(mut self, arc_segments: usize) -> Self {
        self.arc_segments = arc_segments.max(1);
        self
    }

    pub fn with_undo_depth(mut self, undo_depth: usize) -> Self {
        self.undo_depth = undo_depth;
        self
    }
}

/// Outcome of a successfully applied command
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Applied {
    /// Polyline that received the points
    pub category: MotionCategory,
    /// Points appended, including any join prefix
    pub points_appended: usize,
    /// Tool position after the command
    pub position: Point3D,
}

/// Incremental toolpath interpreter
#[derive(Debug, Clone)]
pub struct Interpreter {
    options: InterpreterOptions,
    path: PathModel,
    undo: UndoStack,
    history: Vec<Command>,
    redo: Vec<Command>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Create an interpreter with default options
    pub fn new() -> Self {
        Self::with_options(InterpreterOptions::default())
    }

    /// Create an interpreter with explicit options
    pub fn with_options(options: InterpreterOptions) -> Self {
        Self {
            options,
            path: PathModel::new(),
            undo: UndoStack::with_depth(options.undo_depth),
            history: Vec::new(),
            redo: Vec::new(),
        }
    }

    pub fn options(&self) -> &InterpreterOptions {
        &self.options
    }

    /// Apply one command
    ///
    /// Clears the redo list on success.
    pub fn apply(&mut self, command: Command) -> std::result::Result<Applied, InterpretError> {
        let applied = self.apply_inner(command)?;
        self.redo.clear();
        Ok(applied)
    }

    /// Parse `line` and apply the resulting command
    pub fn apply_line(&mut self, line: &str) -> std::result::Result<Applied, InterpretError> {
        let command = parse_line(line).inspect_err(|e| debug!("Rejected {:?}: {}", line, e))?;
        self.apply(command)
    }

    fn apply_inner(&mut self, command: Command) -> std::result::Result<Applied, InterpretError> {
        let category = MotionCategory::from(command.kind);
        let segment = match command.kind {
            MoveKind::Rapid | MoveKind::Linear => vec![command.target],
            MoveKind::ArcClockwise | MoveKind::ArcCounterClockwise => {
                let radius = command.radius.ok_or(InterpretError::MissingRadius {
                    code: command.kind.code(),
                })?;
                solve_arc(
                    self.path.current_position(),
                    command.target,
                    radius,
                    command.kind == MoveKind::ArcClockwise,
                    self.options.arc_segments,
                )
                .inspect_err(|e| debug!("Rejected {}: {}", command, e))?
                .into_points()
            }
        };

        let record = self.path.append(category, &segment);
        self.undo.push(record);
        self.history.push(command);

        debug!(
            "Applied {} ({} point(s) to {} polyline)",
            command, record.points_appended, category
        );
        Ok(Applied {
            category,
            points_appended: record.points_appended,
            position: self.path.current_position(),
        })
    }

    /// Undo the most recent command
    ///
    /// Returns false when there is nothing left to undo.
    pub fn undo(&mut self) -> bool {
        if !self.undo.pop_and_apply(&mut self.path) {
            return false;
        }
        if let Some(command) = self.history.pop() {
            debug!("Undid {}", command);
            self.redo.push(command);
        }
        true
    }

    /// Re-apply the most recently undone command
    ///
    /// Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(command) = self.redo.pop() else {
            return false;
        };
        match self.apply_inner(command) {
            Ok(_) => true,
            Err(e) => {
                warn!("Redo of {} failed: {}", command, e);
                self.redo.clear();
                false
            }
        }
    }

    /// Start a new drawing: empty path, tool at origin, no history
    pub fn clear(&mut self) {
        self.path.clear();
        self.undo.clear();
        self.history.clear();
        self.redo.clear();
        debug!("Interpreter cleared");
    }

    /// Apply a list of lines in order
    ///
    /// Blank lines are skipped. Stops at the first rejected line and reports
    /// its 1-based number; lines before it stay applied.
    pub fn replay<I, S>(&mut self, lines: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut applied = 0;
        for (index, line) in lines.into_iter().enumerate() {
            let line = line.as_ref().trim();
            if line.is_empty() {
                continue;
            }
            self.apply_line(line)
                .map_err(|e| Error::at_line(index + 1, e))?;
            applied += 1;
        }
        debug!("Replayed {} line(s)", applied);
        Ok(applied)
    }

    /// Canonical lines of every applied command, oldest first
    pub fn export_lines(&self) -> Vec<String> {
        self.history.iter().map(Command::to_string).collect()
    }

    /// Applied commands, oldest first
    pub fn history(&self) -> &[Command] {
        &self.history
    }

    pub fn path(&self) -> &PathModel {
        &self.path
    }

    pub fn rapid_polyline(&self) -> &[Point3D] {
        self.path.rapid()
    }

    pub fn cut_polyline(&self) -> &[Point3D] {
        self.path.cut()
    }

    /// Position after the last applied command (origin when empty)
    pub fn current_position(&self) -> Point3D {
        self.path.current_position()
    }

    /// Radius hint for an arc from the current position to `target`
    pub fn radius_range_to(&self, target: &Point3D) -> RadiusRange {
        radius_range(&self.path.current_position(), target)
    }

    /// Owned copy of the polylines for a renderer
    pub fn snapshot(&self) -> PathSnapshot {
        self.path.snapshot()
    }

    pub fn can_undo(&self) -> bool {
        self.undo.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of commands that can currently be undone
    pub fn undo_count(&self) -> usize {
        self.undo.len()
    }
}

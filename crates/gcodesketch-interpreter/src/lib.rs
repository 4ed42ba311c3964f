//! # GCodeSketch Interpreter
//!
//! Turns G0-G3 command lines into renderable rapid and cut polylines.
//! Includes the line parser, the R-format arc solver, the incremental path
//! model with its undo stack, and the interpreter that ties them together.

pub mod gcode;
pub mod geometry;
pub mod interpreter;
pub mod project;
pub mod toolpath;

pub use gcode::{parse_line, parse_lines, Command, MoveKind};
pub use geometry::{radius_range, solve_arc, ArcPath, RadiusRange};
pub use interpreter::{Applied, Interpreter, InterpreterOptions};
pub use project::Project;
pub use toolpath::{MotionCategory, PathModel, PathSnapshot, UndoRecord, UndoStack};

//! # GCodeSketch Core
//!
//! Core types, constants, and error handling shared by the GCodeSketch crates.
//! Provides the coordinate value type and the error taxonomy used by the
//! parser, the arc solver, and the interpreter.

pub mod constants;
pub mod data;
pub mod error;

pub use data::Point3D;

pub use error::{ArcError, Error, InterpretError, ParseError, Result};

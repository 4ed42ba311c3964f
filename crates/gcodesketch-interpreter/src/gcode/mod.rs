//! G-Code command model and line parser
//!
//! This module provides:
//! - Typed motion commands (G0, G1, G2, G3)
//! - Parsing of one `<Letter><Number>` word line into a command
//! - Canonical formatting of a command back into a line

pub mod command;
pub mod parser;

pub use command::*;
pub use parser::*;

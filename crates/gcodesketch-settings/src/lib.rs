//! GCodeSketch Settings Crate
//!
//! Handles interpreter and project configuration and its persistence.

pub mod config;

pub use config::{Config, InterpreterSettings, ProjectSettings, CONFIG_FILE_NAME};

//! # GCodeSketch
//!
//! An incremental G-code toolpath sketcher. Lines of the form
//! `G<n> X.. Y.. Z.. [R..] [F..]` (G0 to G3) are turned into two polylines,
//! one for rapid moves and one for cutting moves, with exact undo.
//!
//! ## Architecture
//!
//! GCodeSketch is organized as a workspace with multiple crates:
//!
//! 1. **gcodesketch-core** - Point type, constants, error types
//! 2. **gcodesketch-interpreter** - Parsing, arc reconstruction, path model, undo
//! 3. **gcodesketch-settings** - JSON/TOML configuration
//! 4. **gcodesketch** - Command line binary that replays a project file

pub use gcodesketch_core::{ArcError, Error, InterpretError, ParseError, Point3D, Result};

pub use gcodesketch_interpreter::{
    parse_line, parse_lines, radius_range, solve_arc, Applied, ArcPath, Command, Interpreter,
    InterpreterOptions, MotionCategory, MoveKind, PathModel, PathSnapshot, Project, RadiusRange,
    UndoRecord, UndoStack,
};

pub use gcodesketch_settings::{Config, InterpreterSettings, ProjectSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty formatting on stderr, keeping stdout free for output
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Replay a project text into a fresh interpreter built from `config`
///
/// The text is split with the configured line separator; the escaped `\n`
/// token is accepted as well.
pub fn sketch_text(name: &str, text: &str, config: &Config) -> Result<Interpreter> {
    let project = Project::from_text(name, text, &config.project.line_separator);
    let mut interpreter = Interpreter::with_options(config.to_options());
    let applied = project.apply_to(&mut interpreter)?;
    tracing::info!("Sketched {} line(s) from {}", applied, name);
    Ok(interpreter)
}

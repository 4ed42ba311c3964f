//! Error handling for GCodeSketch
//!
//! Provides the error types for every layer of the interpreter:
//! - Parse errors (one line of text that is not a valid command)
//! - Arc errors (endpoint/radius data with no circular solution)
//! - Interpret errors (a command the interpreter refused to apply)
//!
//! All error types use `thiserror` and carry the offending field or value so
//! a front end can render a specific rejection message.

use thiserror::Error;

/// Command line parsing error
///
/// Produced by the line parser when a line cannot become a command.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The line holds no words at all
    #[error("Empty command line")]
    Empty,

    /// G word with a value outside G0-G3
    #[error("Unsupported command G{code}")]
    UnsupportedCommand {
        /// The numeric value of the G word.
        code: u32,
    },

    /// A mandatory word is absent
    #[error("Missing required field '{field}'")]
    MissingField {
        /// The letter of the missing word.
        field: char,
    },

    /// A word value that is not a finite real number
    #[error("Invalid number for '{field}': {value:?}")]
    InvalidNumber {
        /// The letter of the offending word.
        field: char,
        /// The text that failed to parse.
        value: String,
    },

    /// A word whose letter is not part of the dialect
    #[error("Unknown word {word:?}")]
    UnknownWord {
        /// The whole offending token.
        word: String,
    },

    /// The same letter appears twice on one line
    #[error("Field '{field}' given more than once")]
    DuplicateWord {
        /// The repeated letter.
        field: char,
    },

    /// Arc radius of zero or less
    #[error("Arc radius must be positive, got {radius}")]
    NonPositiveRadius {
        /// The rejected radius.
        radius: f64,
    },
}

/// Arc reconstruction error
///
/// Produced by the arc solver when no circle of the requested radius joins
/// the two endpoints in the XY plane.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArcError {
    /// Radius shorter than (or equal to) half the chord
    #[error("Radius {radius} too small: must exceed half the chord length {min_radius}")]
    RadiusTooSmall {
        /// The requested radius.
        radius: f64,
        /// Half the distance between the endpoints.
        min_radius: f64,
    },

    /// Endpoints at different heights
    #[error("Arc endpoints are not in one XY plane (start Z {start_z}, end Z {end_z})")]
    NonPlanarArc {
        /// Z of the start point.
        start_z: f64,
        /// Z of the end point.
        end_z: f64,
    },

    /// Start and end coincide, so the circle is undetermined
    #[error("Arc start and end points coincide")]
    DegenerateChord,
}

/// Interpreter error type
///
/// Any of these leaves the interpreter state exactly as it was before the
/// rejected command.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterpretError {
    /// The raw line could not be parsed
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The arc geometry could not be resolved
    #[error("Geometry error: {0}")]
    Geometry(#[from] ArcError),

    /// An arc command built without a radius
    #[error("Arc command G{code} has no radius")]
    MissingRadius {
        /// The G code of the arc command.
        code: u32,
    },
}

/// Main error type for GCodeSketch
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Line parse error
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Arc geometry error
    #[error(transparent)]
    Arc(#[from] ArcError),

    /// Interpreter error, tagged with the 1-based line it came from when known
    #[error("{}{source}", .line.map(|n| format!("Line {n}: ")).unwrap_or_default())]
    Interpret {
        /// The line number within a replayed project.
        line: Option<usize>,
        /// The underlying interpreter error.
        source: InterpretError,
    },

    /// Configuration error
    #[error("Configuration error: {reason}")]
    Config {
        /// The reason the configuration was rejected.
        reason: String,
    },

    /// Serialization error
    #[error("Serialization error: {reason}")]
    Serialization {
        /// The reason serialization failed.
        reason: String,
    },

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(reason: impl Into<String>) -> Self {
        Error::Config {
            reason: reason.into(),
        }
    }

    /// Attach a project line number to an interpreter error
    pub fn at_line(line: usize, source: InterpretError) -> Self {
        Error::Interpret {
            line: Some(line),
            source,
        }
    }

    /// Check if this error came from line parsing
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::Parse(_)
                | Error::Interpret {
                    source: InterpretError::Parse(_),
                    ..
                }
        )
    }

    /// Check if this error came from arc geometry
    pub fn is_geometry_error(&self) -> bool {
        matches!(
            self,
            Error::Arc(_)
                | Error::Interpret {
                    source: InterpretError::Geometry(_),
                    ..
                }
        )
    }
}

impl From<InterpretError> for Error {
    fn from(source: InterpretError) -> Self {
        Error::Interpret { line: None, source }
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

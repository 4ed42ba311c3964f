//! Shared numeric constants

/// Number of straight spans used to approximate one arc.
pub const DEFAULT_ARC_SEGMENTS: usize = 20;

/// Upper bound accepted for the arc resolution setting.
pub const MAX_ARC_SEGMENTS: usize = 10_000;

/// Tolerance used when comparing coordinates that went through trigonometry.
pub const POSITION_TOLERANCE: f64 = 1e-4;

/// Below this chord length two arc endpoints are considered coincident.
pub const MIN_CHORD_LENGTH: f64 = 1e-9;

/// Default number of undo records kept by an interpreter (0 = unbounded).
pub const DEFAULT_UNDO_DEPTH: usize = 0;

/// Separator placed between lines when a command list is flattened to text.
pub const DEFAULT_LINE_SEPARATOR: &str = "\n";

/// Escaped separator token some project stores write instead of a real newline.
pub const ESCAPED_LINE_SEPARATOR: &str = "\\n";

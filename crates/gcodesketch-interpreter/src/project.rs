//! Project text: a named list of command lines
//!
//! Storage is left to the caller. A project travels either as flat text
//! (lines joined by a separator) or as JSON.

use gcodesketch_core::constants::{DEFAULT_LINE_SEPARATOR, ESCAPED_LINE_SEPARATOR};
use gcodesketch_core::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::debug;

use crate::interpreter::Interpreter;

/// A named, ordered list of command lines
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub lines: Vec<String>,
}

/// Strip `;` and `(` comments and surrounding whitespace
fn clean_line(line: &str) -> Option<String> {
    static COMMENT_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = COMMENT_REGEX.get_or_init(|| Regex::new(r"[;(].*").expect("invalid regex pattern"));
    let cleaned = regex.replace(line, "");
    let cleaned = cleaned.trim();
    (!cleaned.is_empty()).then(|| cleaned.to_string())
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Vec::new(),
        }
    }

    /// Capture the applied history of an interpreter
    pub fn from_interpreter(name: impl Into<String>, interpreter: &Interpreter) -> Self {
        Self {
            name: name.into(),
            lines: interpreter.export_lines(),
        }
    }

    /// Split flat text into lines
    ///
    /// Accepts `separator` as well as the escaped two-character `\n` token.
    /// Comments and blank lines are dropped.
    pub fn from_text(name: impl Into<String>, text: &str, separator: &str) -> Self {
        let separator = if separator.is_empty() {
            DEFAULT_LINE_SEPARATOR
        } else {
            separator
        };
        let normalized = text.replace(ESCAPED_LINE_SEPARATOR, separator);
        let lines: Vec<String> = normalized.split(separator).filter_map(clean_line).collect();
        debug!("Read {} project line(s)", lines.len());
        Self {
            name: name.into(),
            lines,
        }
    }

    /// Join the lines with `separator`
    pub fn to_text(&self, separator: &str) -> String {
        self.lines.join(separator)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization {
            reason: format!("Failed to serialize project: {}", e),
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Serialization {
            reason: format!("Invalid project JSON: {}", e),
        })
    }

    /// Replay every line into `interpreter`
    ///
    /// Returns the number of lines applied; see [`Interpreter::replay`].
    pub fn apply_to(&self, interpreter: &mut Interpreter) -> Result<usize> {
        interpreter.replay(&self.lines)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gcodesketch_core::Point3D;

    #[test]
    fn test_from_text_accepts_escaped_separator() {
        let project = Project::from_text("demo", r"G0 X0 Y0 Z0\nG1 X5 Y0 Z0", "\n");
        assert_eq!(project.lines, vec!["G0 X0 Y0 Z0", "G1 X5 Y0 Z0"]);
    }

    #[test]
    fn test_from_text_drops_comments_and_blanks() {
        let text = "; header\r\nG0 X0 Y0 Z0 (start)\n\n  G1 X5 Y0 Z0 ; cut\n";
        let project = Project::from_text("demo", text, "\n");
        assert_eq!(project.lines, vec!["G0 X0 Y0 Z0", "G1 X5 Y0 Z0"]);
    }

    #[test]
    fn test_collector_rows_with_blank_words_replay() {
        let text = r"G0 X0 Y0 Z0 R F\nG1 X10 Y0 Z0 R F100\nG2 X20 Y0 Z0 R6 F100";
        let project = Project::from_text("collected", text, "\n");
        assert_eq!(project.len(), 3);

        let mut interp = Interpreter::new();
        assert_eq!(project.apply_to(&mut interp).unwrap(), 3);
        assert_eq!(interp.rapid_polyline(), &[Point3D::ORIGIN]);
        assert_eq!(interp.current_position(), Point3D::new(20.0, 0.0, 0.0));
        assert_eq!(interp.history()[1].feed_rate, Some(100.0));
        assert_eq!(interp.history()[0].radius, None);
    }

    #[test]
    fn test_custom_separator() {
        let project = Project::from_text("demo", "G0 X0 Y0 Z0|G1 X1 Y0 Z0", "|");
        assert_eq!(project.len(), 2);
        assert_eq!(project.to_text("|"), "G0 X0 Y0 Z0|G1 X1 Y0 Z0");
    }

    #[test]
    fn test_json_round_trip() {
        let mut project = Project::new("square");
        project.lines.push("G1 X1 Y0 Z0".to_string());
        let json = project.to_json().unwrap();
        assert_eq!(Project::from_json(&json).unwrap(), project);
        assert!(Project::from_json("{").is_err());
    }

    #[test]
    fn test_apply_and_capture() {
        let project = Project::from_text("demo", "G0 X0 Y0 Z0\nG2 X10 Y0 Z0 R6", "\n");
        let mut interp = Interpreter::new();
        assert_eq!(project.apply_to(&mut interp).unwrap(), 2);

        let captured = Project::from_interpreter("demo", &interp);
        assert_eq!(captured, project);
    }
}

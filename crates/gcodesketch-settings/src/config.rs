//! Configuration and settings management for GCodeSketch
//!
//! Supports JSON and TOML file formats stored in a platform-specific
//! directory. Configuration is organized into two sections:
//! - Interpreter settings (arc resolution, undo depth)
//! - Project settings (line separator for flat project text)

use gcodesketch_core::constants::{
    DEFAULT_ARC_SEGMENTS, DEFAULT_LINE_SEPARATOR, DEFAULT_UNDO_DEPTH, MAX_ARC_SEGMENTS,
};
use gcodesketch_core::{Error, Result};
use gcodesketch_interpreter::InterpreterOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name used inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Interpreter settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpreterSettings {
    /// Straight spans per sampled arc
    #[serde(default = "default_arc_segments")]
    pub arc_segments: usize,
    /// Undo records kept (0 = unbounded)
    #[serde(default)]
    pub undo_depth: usize,
}

fn default_arc_segments() -> usize {
    DEFAULT_ARC_SEGMENTS
}

impl Default for InterpreterSettings {
    fn default() -> Self {
        Self {
            arc_segments: DEFAULT_ARC_SEGMENTS,
            undo_depth: DEFAULT_UNDO_DEPTH,
        }
    }
}

/// Project text settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSettings {
    /// Separator between lines when a project is stored as flat text
    #[serde(default = "default_line_separator")]
    pub line_separator: String,
}

fn default_line_separator() -> String {
    DEFAULT_LINE_SEPARATOR.to_string()
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            line_separator: default_line_separator(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Interpreter settings
    #[serde(default)]
    pub interpreter: InterpreterSettings,
    /// Project text settings
    #[serde(default)]
    pub project: ProjectSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location of the config file, if the platform has one
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("gcodesketch").join(CONFIG_FILE_NAME))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .map_err(|e| Error::config(format!("Invalid JSON config: {}", e)))?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)
                .map_err(|e| Error::config(format!("Invalid TOML config: {}", e)))?
        } else {
            return Err(Error::config("Config file must be .json or .toml"));
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the file at `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    ///
    /// Missing parent directories are created.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)
                .map_err(|e| Error::Serialization {
                    reason: format!("Failed to serialize config: {}", e),
                })?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)
                .map_err(|e| Error::Serialization {
                    reason: format!("Failed to serialize config: {}", e),
                })?
        } else {
            return Err(Error::config("Config file must be .json or .toml"));
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let segments = self.interpreter.arc_segments;
        if segments == 0 || segments > MAX_ARC_SEGMENTS {
            return Err(Error::config(format!(
                "Arc segments must be between 1 and {}, got {}",
                MAX_ARC_SEGMENTS, segments
            )));
        }

        if self.project.line_separator.is_empty() {
            return Err(Error::config("Line separator must not be empty"));
        }

        Ok(())
    }

    /// Interpreter options described by this config
    pub fn to_options(&self) -> InterpreterOptions {
        InterpreterOptions::default()
            .with_arc_segments(self.interpreter.arc_segments)
            .with_undo_depth(self.interpreter.undo_depth)
    }
}

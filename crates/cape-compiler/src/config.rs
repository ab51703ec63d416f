//! Translator configuration (cape.toml)
//!
//! Only Python generation has tunable knobs today; lowering is not
//! configurable.
//!
//! ```toml
//! [python]
//! indent-width = 2
//! main-guard = "when-main-defined"
//! type-hints = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Validation error
    #[error("Invalid config: {0}")]
    ValidationError(String),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Python generation settings
    pub python: PythonConfig,
}

/// Python generation settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct PythonConfig {
    /// Spaces per nesting level (default: 4)
    pub indent_width: usize,

    /// When to append the `if __name__ == "__main__":` trailer
    pub main_guard: MainGuard,

    /// Annotate function return types (`def main() -> int:`)
    pub type_hints: bool,
}

impl Default for PythonConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            main_guard: MainGuard::Always,
            type_hints: false,
        }
    }
}

impl PythonConfig {
    /// One level of indentation
    pub fn indent_unit(&self) -> String {
        " ".repeat(self.indent_width)
    }
}

/// Policy for the script-entry trailer
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MainGuard {
    /// Always emit the trailer
    #[default]
    Always,
    /// Emit it only when the program defines `main`
    WhenMainDefined,
    /// Never emit it
    Never,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.python.indent_width == 0 {
            return Err(ConfigError::ValidationError(
                "python.indent-width must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

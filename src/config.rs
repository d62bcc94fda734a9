//! Printer configuration.
//!
//! Defaults can be overridden from the environment with `TOLC_PRINT_INDENT`,
//! `TOLC_PRINT_FAIL_MARKER` and `TOLC_PRINT_MAX_DEPTH`.

use crate::error::{Error, Result};

/// Default indentation unit, two spaces per nesting level
pub const DEFAULT_INDENT: &str = "  ";

/// Default delimiter placed on both sides of an in-band failure reason
pub const DEFAULT_FAILURE_MARKER: &str = "\u{2588}";

/// Maximum tree nesting the printer descends into before giving up on a subtree
pub const DEFAULT_MAX_DEPTH: usize = 512;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Text inserted once per indentation level
    pub indent: String,
    /// Delimiter wrapped around failure reasons, e.g. `█NULL_IDENTIFIER█`
    pub failure_marker: String,
    /// Nodes nested deeper than this are replaced by a failure marker
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_string(),
            failure_marker: DEFAULT_FAILURE_MARKER.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from defaults plus `TOLC_PRINT_*` environment overrides
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(indent) = std::env::var("TOLC_PRINT_INDENT") {
            config = config.with_indent(indent)?;
        }
        if let Ok(marker) = std::env::var("TOLC_PRINT_FAIL_MARKER") {
            config = config.with_failure_marker(marker)?;
        }
        if let Ok(depth) = std::env::var("TOLC_PRINT_MAX_DEPTH") {
            let depth = depth
                .trim()
                .parse::<usize>()
                .map_err(|e| Error::config_error(format!("TOLC_PRINT_MAX_DEPTH `{}`: {}", depth, e)))?;
            config = config.with_max_depth(depth)?;
        }
        log::debug!("printer config: {:?}", config);
        Ok(config)
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Result<Self> {
        let indent = indent.into();
        if !indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err(Error::config_error(format!(
                "indent must consist of spaces and tabs, got {:?}",
                indent
            )));
        }
        self.indent = indent;
        Ok(self)
    }

    pub fn with_failure_marker(mut self, marker: impl Into<String>) -> Result<Self> {
        let marker = marker.into();
        if marker.trim().is_empty() {
            return Err(Error::config_error("failure marker must contain a visible character"));
        }
        self.failure_marker = marker;
        Ok(self)
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Result<Self> {
        if max_depth == 0 {
            return Err(Error::config_error("max depth must be at least 1"));
        }
        self.max_depth = max_depth;
        Ok(self)
    }
}

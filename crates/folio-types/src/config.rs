//! Terminal configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) yields the
//! stock portfolio terminal.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// Largest accepted rain grid side.
pub const MAX_RAIN_EXTENT: u16 = 1024;

/// Top-level terminal configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TerminalConfig {
    #[serde(default)]
    pub prompt: PromptConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub matrix: MatrixConfig,
}

/// Prompt parts rendered as `user@host:path$ `.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptConfig {
    #[serde(default = "default_user")]
    pub user: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_path")]
    pub path: String,
}

/// Session behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Pre-populate the scrollback with the welcome banner.
    #[serde(default = "yes")]
    pub show_banner: bool,
    /// How many entries the `history` command lists.
    #[serde(default = "default_history_display_limit")]
    pub history_display_limit: usize,
    /// Scrollback cap (0 = unbounded). Oldest lines are dropped first.
    #[serde(default)]
    pub max_buffer_lines: usize,
}

/// Matrix rain overlay parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixConfig {
    /// Redraw interval in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    #[serde(default = "default_columns")]
    pub columns: u16,
    #[serde(default = "default_rows")]
    pub rows: u16,
    /// Chance per tick that a drop past the bottom restarts at the top.
    #[serde(default = "default_reset_chance")]
    pub reset_chance: f32,
    /// Run the background rain thread. Headless runs turn this off.
    #[serde(default = "yes")]
    pub animate: bool,
}

fn yes() -> bool {
    true
}
fn default_user() -> String {
    "visitor".to_string()
}
fn default_host() -> String {
    "ram".to_string()
}
fn default_path() -> String {
    "~".to_string()
}
fn default_history_display_limit() -> usize {
    15
}
fn default_tick_ms() -> u64 {
    40
}
fn default_columns() -> u16 {
    80
}
fn default_rows() -> u16 {
    24
}
fn default_reset_chance() -> f32 {
    0.025
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            user: default_user(),
            host: default_host(),
            path: default_path(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            show_banner: true,
            history_display_limit: default_history_display_limit(),
            max_buffer_lines: 0,
        }
    }
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            columns: default_columns(),
            rows: default_rows(),
            reset_chance: default_reset_chance(),
            animate: true,
        }
    }
}

impl TerminalConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        log::debug!("Loaded terminal config from {}", path.display());
        Self::from_toml(&text)
    }

    fn validate(&self) -> Result<()> {
        if self.prompt.user.chars().any(char::is_whitespace)
            || self.prompt.host.chars().any(char::is_whitespace)
        {
            return Err(FolioError::Config(
                "prompt user/host must not contain whitespace".to_string(),
            ));
        }
        let grid = 1..=MAX_RAIN_EXTENT;
        if !grid.contains(&self.matrix.columns) || !grid.contains(&self.matrix.rows) {
            return Err(FolioError::Config(format!(
                "matrix.columns and matrix.rows must be within 1..={MAX_RAIN_EXTENT}"
            )));
        }
        if self.matrix.tick_ms == 0 {
            return Err(FolioError::Config("matrix.tick_ms must be > 0".to_string()));
        }
        if !(0.0..=1.0).contains(&self.matrix.reset_chance) {
            return Err(FolioError::Config(
                "matrix.reset_chance must be within 0.0..=1.0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        let cfg = TerminalConfig::from_toml("").unwrap();
        assert_eq!(cfg, TerminalConfig::default());
        assert_eq!(cfg.prompt.user, "visitor");
        assert_eq!(cfg.prompt.host, "ram");
        assert_eq!(cfg.prompt.path, "~");
        assert_eq!(cfg.session.history_display_limit, 15);
        assert!(cfg.session.show_banner);
        assert_eq!(cfg.matrix.tick_ms, 40);
    }

    #[test]
    fn partial_sections() {
        let cfg = TerminalConfig::from_toml(
            r#"
            [prompt]
            user = "guest"

            [session]
            show_banner = false
            "#,
        )
        .unwrap();
        assert_eq!(cfg.prompt.user, "guest");
        assert_eq!(cfg.prompt.host, "ram");
        assert!(!cfg.session.show_banner);
        assert_eq!(cfg.session.history_display_limit, 15);
    }

    #[test]
    fn rejects_whitespace_in_user() {
        let err = TerminalConfig::from_toml("[prompt]\nuser = \"a b\"").unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn rejects_zero_tick() {
        let err = TerminalConfig::from_toml("[matrix]\ntick_ms = 0").unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn rejects_bad_reset_chance() {
        let err = TerminalConfig::from_toml("[matrix]\nreset_chance = 2.0").unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn rejects_empty_rain_grid() {
        let err = TerminalConfig::from_toml("[matrix]\ncolumns = 0").unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn rejects_oversized_rain_grid() {
        let err = TerminalConfig::from_toml("[matrix]\ncolumns = 40000").unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
        let cfg = TerminalConfig::from_toml("[matrix]\ncolumns = 1024").unwrap();
        assert_eq!(cfg.matrix.columns, MAX_RAIN_EXTENT);
    }

    #[test]
    fn animation_can_be_disabled() {
        let cfg = TerminalConfig::from_toml("[matrix]\nanimate = false").unwrap();
        assert!(!cfg.matrix.animate);
        assert_eq!(cfg.matrix.rows, 24);
    }

    #[test]
    fn malformed_toml() {
        let err = TerminalConfig::from_toml("[prompt").unwrap_err();
        assert!(matches!(err, FolioError::TomlParse(_)));
    }

    #[test]
    fn load_missing_file() {
        let err = TerminalConfig::load(Path::new("/nonexistent/folio.toml")).unwrap_err();
        assert!(matches!(err, FolioError::Io(_)));
    }
}

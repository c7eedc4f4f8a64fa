//! Terminal configuration (`kode.toml`).
//!
//! Every field has a default, so an empty file (or no file at all) yields the
//! stock portfolio terminal.

use std::path::Path;

use serde::Deserialize;

use crate::error::{KodeError, Result};

/// Presentation and pacing settings for the terminal widget.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// User name shown in the prompt and returned by `whoami`.
    pub user: String,
    /// Host name shown in the prompt.
    pub host: String,
    /// The single line a cleared transcript starts with.
    pub welcome: String,
    /// Responses longer than this many characters skip the typed reveal.
    pub reveal_threshold: usize,
    /// Delay between revealed characters.
    pub reveal_interval_ms: u32,
    /// Container fade-out when the terminal closes.
    pub close_fade_ms: u32,
    /// Reboot affordance fade-out when the reboot button is clicked.
    pub reboot_fade_ms: u32,
    /// Fade-in of the reboot affordance after a close, and of the container
    /// after a reboot.
    pub open_fade_ms: u32,
    /// Transcript rows visible at once.
    pub viewport_rows: usize,
    /// Reported by `neofetch` as the display resolution.
    pub viewport_width: u32,
    pub viewport_height: u32,
    /// Fixed frame step used by the desktop loop.
    pub frame_ms: u32,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            user: "guest".to_string(),
            host: "divyanshu.dev".to_string(),
            welcome: "Welcome to KODE_OS 1.0 LTS (GNU/Linux 5.15.0-91-generic x86_64)".to_string(),
            reveal_threshold: 100,
            reveal_interval_ms: 5,
            close_fade_ms: 300,
            reboot_fade_ms: 300,
            open_fade_ms: 400,
            viewport_rows: 24,
            viewport_width: 1920,
            viewport_height: 1080,
            frame_ms: 16,
        }
    }
}

impl TerminalConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| KodeError::Config(format!("kode.toml: {e}")))?;
        if config.viewport_rows == 0 {
            return Err(KodeError::Config(
                "kode.toml: viewport_rows must be at least 1".to_string(),
            ));
        }
        if config.frame_ms == 0 {
            return Err(KodeError::Config(
                "kode.toml: frame_ms must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }

    /// Load a configuration file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        log::debug!("Loaded config from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// The `user@host` part of the prompt.
    pub fn prompt_identity(&self) -> String {
        format!("{}@{}", self.user, self.host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = TerminalConfig::from_toml_str("").unwrap();
        assert_eq!(config, TerminalConfig::default());
        assert_eq!(config.reveal_threshold, 100);
        assert_eq!(config.reveal_interval_ms, 5);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = TerminalConfig::from_toml_str(
            r#"
user = "visitor"
reveal_interval_ms = 20
"#,
        )
        .unwrap();
        assert_eq!(config.user, "visitor");
        assert_eq!(config.reveal_interval_ms, 20);
        assert_eq!(config.host, "divyanshu.dev");
        assert_eq!(config.close_fade_ms, 300);
    }

    #[test]
    fn wrong_type_is_config_error() {
        let err = TerminalConfig::from_toml_str("reveal_threshold = \"lots\"").unwrap_err();
        assert!(matches!(err, KodeError::Config(_)));
        assert!(format!("{err}").contains("kode.toml"));
    }

    #[test]
    fn zero_viewport_rejected() {
        let err = TerminalConfig::from_toml_str("viewport_rows = 0").unwrap_err();
        assert!(format!("{err}").contains("viewport_rows"));
    }

    #[test]
    fn zero_frame_step_rejected() {
        let err = TerminalConfig::from_toml_str("frame_ms = 0").unwrap_err();
        assert!(matches!(err, KodeError::Config(_)));
    }

    #[test]
    fn prompt_identity_joins_user_and_host() {
        assert_eq!(
            TerminalConfig::default().prompt_identity(),
            "guest@divyanshu.dev"
        );
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "host = \"example.dev\"").unwrap();
        let config = TerminalConfig::load(file.path()).unwrap();
        assert_eq!(config.host, "example.dev");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TerminalConfig::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, KodeError::Io(_)));
    }
}

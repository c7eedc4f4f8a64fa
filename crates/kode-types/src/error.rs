//! Error types for KODE_OS.

use std::io;

/// Errors produced by the KODE_OS terminal.
///
/// Command failures display exactly the text the terminal prints, so the
/// session can render `err.to_string()` as a response line.
#[derive(Debug, thiserror::Error)]
pub enum KodeError {
    #[error("bash: {0}: command not found")]
    CommandNotFound(String),

    #[error("{0}")]
    Command(String),

    #[error("VFS error: {0}")]
    Vfs(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, KodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_not_found_display() {
        let e = KodeError::CommandNotFound("foo".into());
        assert_eq!(format!("{e}"), "bash: foo: command not found");
    }

    #[test]
    fn command_error_is_verbatim() {
        let e = KodeError::Command("cat: missing operand".into());
        assert_eq!(format!("{e}"), "cat: missing operand");
    }

    #[test]
    fn vfs_error_display() {
        let e = KodeError::Vfs("dangling directory: ~/gone".into());
        assert_eq!(format!("{e}"), "VFS error: dangling directory: ~/gone");
    }

    #[test]
    fn config_error_display() {
        let e = KodeError::Config("missing key".into());
        assert_eq!(format!("{e}"), "config error: missing key");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: KodeError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let toml_err = toml::from_str::<toml::Value>("this is [[[not valid toml").unwrap_err();
        let e: KodeError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn json_error_from_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let e: KodeError = json_err.into();
        assert!(format!("{e}").contains("JSON error"));
    }

    #[test]
    fn result_alias_err() {
        let r: Result<i32> = Err(KodeError::Vfs("oops".into()));
        assert!(r.is_err());
    }
}

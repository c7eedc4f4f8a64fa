//! Simulated shell for the KODE_OS portfolio terminal.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered by name. A [`TerminalSession`] owns the
//! registry together with the virtual file system, the history, the
//! transcript and the window chrome, and is driven by input events plus a
//! periodic `tick(dt_ms)` from the host.

mod commands;
pub mod history;
mod interpreter;
pub mod portfolio;
mod profile_commands;
pub mod reveal;
pub mod session;
mod system_commands;
pub mod transcript;
pub mod window;

/// Register all built-in commands (fs, system, profile) into a registry.
pub use commands::register_builtins;
/// A single executable command trait.
pub use interpreter::Command;
/// Output produced by a command (text or signals).
pub use interpreter::CommandOutput;
/// Registry of available commands with dispatch.
pub use interpreter::CommandRegistry;
/// Shared environment passed to every command.
pub use interpreter::Environment;
/// Split a command line into tokens.
pub use interpreter::tokenize;
/// Register help, the portfolio aliases and git into a registry.
pub use profile_commands::register_profile_commands;
/// The terminal widget state machine.
pub use session::TerminalSession;
/// Register whoami, sudo, date, uname, neofetch and exit into a registry.
pub use system_commands::register_system_commands;

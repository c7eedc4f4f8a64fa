//! Command trait, registry, and dispatch logic.
//!
//! A line is split on whitespace; the first token (lowercased) selects the
//! command and the rest become its arguments. There is no quoting, piping or
//! variable expansion.

use std::collections::HashMap;

use kode_platform::TimeService;
use kode_types::config::TerminalConfig;
use kode_types::error::{KodeError, Result};
use kode_vfs::StaticVfs;

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Text for a single response line. Empty text renders nothing.
    Text(String),
    /// Command produced no visible output.
    None,
    /// Signal to reset the transcript to the welcome line.
    Clear,
    /// Signal to close the terminal window.
    Exit,
}

/// Environment passed to every command.
pub struct Environment<'a> {
    /// Current working directory (VFS path). Commands may replace it.
    pub cwd: String,
    /// The virtual file system.
    pub vfs: &'a StaticVfs,
    /// Time service for `date` and `git log`.
    pub time: Option<&'a dyn TimeService>,
    /// Prompt identity, display size and other presentation settings.
    pub config: &'a TerminalConfig,
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description.
    fn description(&self) -> &str;

    /// Execute the command with the given arguments and environment.
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput>;
}

/// Registry of available commands with dispatch.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Register a command. Replaces any existing command with the same name.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_ascii_lowercase(), cmd);
    }

    /// Whether a command is registered under `name` (case-insensitive).
    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(&name.to_ascii_lowercase())
    }

    /// Parse and execute a command line.
    ///
    /// Blank lines produce [`CommandOutput::None`]. Command names are
    /// case-insensitive; unknown names yield
    /// [`KodeError::CommandNotFound`] carrying the lowercased name.
    pub fn execute(&self, line: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let tokens = tokenize(line);
        let Some((first, rest)) = tokens.split_first() else {
            return Ok(CommandOutput::None);
        };
        let name = first.to_lowercase();
        match self.commands.get(name.as_str()) {
            Some(cmd) => {
                log::debug!("dispatch {name} {rest:?} (cwd {})", env.cwd);
                cmd.execute(rest, env)
            },
            None => Err(KodeError::CommandNotFound(name)),
        }
    }

    /// Return a sorted list of (name, description) pairs.
    pub fn list_commands(&self) -> Vec<(&str, &str)> {
        let mut cmds: Vec<(&str, &str)> = self
            .commands
            .values()
            .map(|c| (c.name(), c.description()))
            .collect();
        cmds.sort_by_key(|(name, _)| *name);
        cmds
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a line on whitespace, dropping empty tokens.
pub fn tokenize(input: &str) -> Vec<&str> {
    input.split_whitespace().collect()
}

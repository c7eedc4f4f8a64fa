//! Built-in file system commands: ls, cd, pwd, cat, clear.

use kode_types::error::{KodeError, Result};
use kode_vfs::{Entry, EntryKind, ROOT, join, parent};

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};

/// File that `cat` always refuses, whatever it holds.
const SECRET_FILE: &str = ".env";

/// Absolute path `pwd` reports for the home directory.
const HOME_PATH: &str = "/home/guest";

/// Register every built-in command into a registry.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(Box::new(LsCmd));
    reg.register(Box::new(CdCmd));
    reg.register(Box::new(PwdCmd));
    reg.register(Box::new(CatCmd));
    reg.register(Box::new(ClearCmd));
    crate::system_commands::register_system_commands(reg);
    crate::profile_commands::register_profile_commands(reg);
}

// ---------------------------------------------------------------------------
// ls
// ---------------------------------------------------------------------------

struct LsCmd;
impl Command for LsCmd {
    fn name(&self) -> &str {
        "ls"
    }
    fn description(&self) -> &str {
        "List directory contents"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let Ok(entries) = env.vfs.readdir(&env.cwd) else {
            return Ok(CommandOutput::Text("Directory not found.".to_string()));
        };
        let names: Vec<String> = entries
            .iter()
            .map(|e| match e.kind() {
                EntryKind::Directory => format!("{}/", e.name),
                EntryKind::File => e.name.clone(),
            })
            .collect();
        Ok(CommandOutput::Text(names.join("  ")))
    }
}

// ---------------------------------------------------------------------------
// cd
// ---------------------------------------------------------------------------

struct CdCmd;
impl Command for CdCmd {
    fn name(&self) -> &str {
        "cd"
    }
    fn description(&self) -> &str {
        "Change working directory"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let target = match args.first().copied() {
            None | Some("~") => ROOT.to_string(),
            Some("..") => parent(&env.cwd).to_string(),
            Some(name) => match env.vfs.lookup(&env.cwd, name) {
                Some(Entry::Dir) => join(&env.cwd, name),
                _ => {
                    return Err(KodeError::Command(format!(
                        "bash: cd: {name}: No such file or directory"
                    )));
                },
            },
        };
        env.cwd = target;
        Ok(CommandOutput::None)
    }
}

// ---------------------------------------------------------------------------
// pwd
// ---------------------------------------------------------------------------

struct PwdCmd;
impl Command for PwdCmd {
    fn name(&self) -> &str {
        "pwd"
    }
    fn description(&self) -> &str {
        "Print working directory"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let rel = env.cwd.strip_prefix(ROOT).unwrap_or(&env.cwd);
        Ok(CommandOutput::Text(format!("{HOME_PATH}{rel}")))
    }
}

// ---------------------------------------------------------------------------
// cat
// ---------------------------------------------------------------------------

struct CatCmd;
impl Command for CatCmd {
    fn name(&self) -> &str {
        "cat"
    }
    fn description(&self) -> &str {
        "Display file contents"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let Some(&name) = args.first() else {
            return Err(KodeError::Command("cat: missing operand".to_string()));
        };
        match env.vfs.lookup(&env.cwd, name) {
            None => Err(KodeError::Command(format!(
                "cat: {name}: No such file or directory"
            ))),
            Some(Entry::Dir) => Err(KodeError::Command(format!("cat: {name}: Is a directory"))),
            Some(Entry::File(_)) if name == SECRET_FILE => Err(KodeError::Command(format!(
                "bash: {SECRET_FILE}: Permission denied"
            ))),
            Some(Entry::File(text)) => Ok(CommandOutput::Text(text.clone())),
        }
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear the terminal screen"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Clear)
    }
}

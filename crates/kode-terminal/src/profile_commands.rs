//! Portfolio commands: help, the profile aliases, and git.

use kode_types::error::{KodeError, Result};
use kode_vfs::ROOT;

use crate::interpreter::{Command, CommandOutput, Environment};
use crate::portfolio::PROJECTS_SUMMARY;

const HELP_TEXT: &str = "Available commands:\n  who, skills, projects, contact\n  ls, cat, cd, pwd, clear\n  git, sudo, uname, date, neofetch, exit";

const GIT_STATUS: &str =
    "On branch main\nYour branch is up to date with 'origin/main'.\n\nworking tree clean";

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "List available commands"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(HELP_TEXT.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Profile aliases
// ---------------------------------------------------------------------------

/// Where an alias takes its text from.
#[derive(Clone, Copy)]
enum Source {
    /// A file in the home directory, read at call time.
    HomeFile(&'static str),
    /// Fixed text.
    Fixed(&'static str),
}

/// A named shortcut to a piece of portfolio content.
struct ProfileCmd {
    name: &'static str,
    description: &'static str,
    source: Source,
}

impl Command for ProfileCmd {
    fn name(&self) -> &str {
        self.name
    }
    fn description(&self) -> &str {
        self.description
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let text = match self.source {
            Source::HomeFile(file) => env.vfs.read(ROOT, file)?.to_string(),
            Source::Fixed(text) => text.to_string(),
        };
        Ok(CommandOutput::Text(text))
    }
}

const PROFILE_ALIASES: [(&str, &str, Source); 8] = [
    ("who", "About the author", Source::HomeFile("about.md")),
    ("about", "About the author", Source::HomeFile("about.md")),
    ("skills", "Technical skills", Source::HomeFile("skills.json")),
    ("stack", "Technical skills", Source::HomeFile("skills.json")),
    ("projects", "Project overview", Source::Fixed(PROJECTS_SUMMARY)),
    ("work", "Project overview", Source::Fixed(PROJECTS_SUMMARY)),
    ("contact", "Contact details", Source::HomeFile("contact.txt")),
    ("email", "Contact details", Source::HomeFile("contact.txt")),
];

// ---------------------------------------------------------------------------
// git
// ---------------------------------------------------------------------------

struct GitCmd;
impl Command for GitCmd {
    fn name(&self) -> &str {
        "git"
    }
    fn description(&self) -> &str {
        "Show repository state"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        match args.first() {
            Some(&"status") => Ok(CommandOutput::Text(GIT_STATUS.to_string())),
            Some(&"log") => {
                let time = env
                    .time
                    .ok_or_else(|| KodeError::Command("git: no time service available".into()))?;
                let date = time.now()?.date_string();
                Ok(CommandOutput::Text(format!(
                    "commit 8f5d2a1 (HEAD -> main)\n\
                     Author: Divyanshu <hello@divyanshu.com>\n\
                     Date:   {date}\n\
                     \n    Initial commit: Created portfolio"
                )))
            },
            _ => Ok(CommandOutput::Text("git: usage: git [status|log]".to_string())),
        }
    }
}

/// Register help, the profile aliases and git.
pub fn register_profile_commands(reg: &mut crate::CommandRegistry) {
    reg.register(Box::new(HelpCmd));
    for (name, description, source) in PROFILE_ALIASES {
        reg.register(Box::new(ProfileCmd {
            name,
            description,
            source,
        }));
    }
    reg.register(Box::new(GitCmd));
}

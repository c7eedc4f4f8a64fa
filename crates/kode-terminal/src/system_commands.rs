//! System commands: whoami, sudo, date, uname, neofetch, exit.

use kode_types::error::Result;

use crate::interpreter::{Command, CommandOutput, Environment};
use crate::portfolio;

const UNAME_ALL: &str = "Linux divyanshu-dev 5.15.0-91-generic #101-Ubuntu SMP \
     Tue Nov 14 13:30:08 UTC 2023 x86_64 x86_64 x86_64 GNU/Linux";

// ---------------------------------------------------------------------------
// whoami
// ---------------------------------------------------------------------------

struct WhoamiCmd;
impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        "whoami"
    }
    fn description(&self) -> &str {
        "Print current user"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(env.config.user.clone()))
    }
}

// ---------------------------------------------------------------------------
// sudo
// ---------------------------------------------------------------------------

struct SudoCmd;
impl Command for SudoCmd {
    fn name(&self) -> &str {
        "sudo"
    }
    fn description(&self) -> &str {
        "Execute a command as another user"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(format!(
            "{} is not in the sudoers file. This incident will be reported.",
            env.config.user
        )))
    }
}

// ---------------------------------------------------------------------------
// date
// ---------------------------------------------------------------------------

struct DateCmd;
impl Command for DateCmd {
    fn name(&self) -> &str {
        "date"
    }
    fn description(&self) -> &str {
        "Show current date and time"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        if let Some(time) = env.time {
            let now = time.now()?;
            Ok(CommandOutput::Text(now.long_string()))
        } else {
            Ok(CommandOutput::Text(
                "date: no time service available".to_string(),
            ))
        }
    }
}

// ---------------------------------------------------------------------------
// uname
// ---------------------------------------------------------------------------

struct UnameCmd;
impl Command for UnameCmd {
    fn name(&self) -> &str {
        "uname"
    }
    fn description(&self) -> &str {
        "Print system information"
    }
    fn execute(&self, args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        let text = match args.first() {
            Some(&"-a") => UNAME_ALL,
            _ => "Linux",
        };
        Ok(CommandOutput::Text(text.to_string()))
    }
}

// ---------------------------------------------------------------------------
// neofetch
// ---------------------------------------------------------------------------

struct NeofetchCmd;
impl Command for NeofetchCmd {
    fn name(&self) -> &str {
        "neofetch"
    }
    fn description(&self) -> &str {
        "Show system info banner"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(portfolio::neofetch(env.config)))
    }
}

// ---------------------------------------------------------------------------
// exit
// ---------------------------------------------------------------------------

struct ExitCmd;
impl Command for ExitCmd {
    fn name(&self) -> &str {
        "exit"
    }
    fn description(&self) -> &str {
        "Close the terminal"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Exit)
    }
}

/// Register system commands.
pub fn register_system_commands(reg: &mut crate::CommandRegistry) {
    reg.register(Box::new(WhoamiCmd));
    reg.register(Box::new(SudoCmd));
    reg.register(Box::new(DateCmd));
    reg.register(Box::new(UnameCmd));
    reg.register(Box::new(NeofetchCmd));
    reg.register(Box::new(ExitCmd));
}

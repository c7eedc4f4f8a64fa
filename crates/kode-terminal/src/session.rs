//! The terminal session: input handling, dispatch, and the host tick.

use std::collections::VecDeque;

use kode_platform::TimeService;
use kode_types::config::TerminalConfig;
use kode_types::error::Result;
use kode_types::input::{ChromeButton, InputEvent, Key};
use kode_vfs::{ROOT, StaticVfs};

use crate::history::{History, Recall};
use crate::interpreter::{CommandOutput, CommandRegistry, Environment};
use crate::portfolio::build_portfolio_vfs;
use crate::reveal::{Reveal, render_response};
use crate::transcript::Transcript;
use crate::window::{WindowController, WindowEvent};

/// One terminal widget and everything it owns.
pub struct TerminalSession {
    config: TerminalConfig,
    registry: CommandRegistry,
    vfs: StaticVfs,
    time: Box<dyn TimeService>,
    cwd: String,
    history: History,
    input: String,
    focused: bool,
    transcript: Transcript,
    reveal: Option<Reveal>,
    /// Lines submitted while a reveal was running, oldest first.
    pending: VecDeque<String>,
    window: WindowController,
}

impl TerminalSession {
    /// Create a session over the portfolio tree with every built-in command.
    pub fn new(config: TerminalConfig, time: Box<dyn TimeService>) -> Result<Self> {
        let vfs = build_portfolio_vfs()?;
        let mut registry = CommandRegistry::new();
        crate::register_builtins(&mut registry);
        log::debug!(
            "session ready: {} commands, {} directories",
            registry.list_commands().len(),
            vfs.dir_count()
        );
        Ok(Self {
            transcript: Transcript::new(config.welcome.clone(), config.viewport_rows),
            window: WindowController::new(&config),
            config,
            registry,
            vfs,
            time,
            cwd: ROOT.to_string(),
            history: History::new(),
            input: String::new(),
            focused: true,
            reveal: None,
            pending: VecDeque::new(),
        })
    }

    /// Feed one input event.
    pub fn handle_input(&mut self, event: &InputEvent) {
        match event {
            InputEvent::TextInput(c) if self.focused => self.input.push(*c),
            InputEvent::Backspace if self.focused => {
                self.input.pop();
            },
            InputEvent::KeyPress(Key::Enter) if self.focused => self.submit(),
            InputEvent::KeyPress(Key::Up) if self.focused => {
                let recall = self.history.up();
                apply_recall(&mut self.input, recall);
            },
            InputEvent::KeyPress(Key::Down) if self.focused => {
                let recall = self.history.down();
                apply_recall(&mut self.input, recall);
            },
            InputEvent::ButtonClick(button) => match button {
                ChromeButton::Minimize => self.window.minimize(),
                ChromeButton::Maximize => self.window.maximize(),
                ChromeButton::Close => {
                    self.window.close();
                },
                ChromeButton::Reboot => {
                    self.window.reboot();
                },
            },
            InputEvent::FocusGained if self.window.layout().container_visible => {
                self.focused = true;
            },
            InputEvent::FocusLost => self.focused = false,
            _ => {},
        }
    }

    /// Submit the input field: record it in history, clear it, and run it
    /// now or once the current reveal settles.
    pub fn submit(&mut self) {
        let raw = std::mem::take(&mut self.input);
        self.history.push(&raw);
        if self.is_busy() {
            log::debug!("queued while revealing: {raw:?}");
            self.pending.push_back(raw);
        } else {
            self.submit_line(&raw);
        }
    }

    /// Echo a raw line and dispatch it.
    pub fn submit_line(&mut self, raw: &str) {
        self.transcript.push_echo(&self.cwd, raw);
        self.dispatch(raw);
        self.transcript.scroll_to_bottom();
    }

    /// Run a line through the registry and render the outcome.
    pub fn dispatch(&mut self, line: &str) {
        let mut env = Environment {
            cwd: self.cwd.clone(),
            vfs: &self.vfs,
            time: Some(self.time.as_ref()),
            config: &self.config,
        };
        let outcome = self.registry.execute(line, &mut env);
        self.cwd = env.cwd;

        match outcome {
            Ok(CommandOutput::Text(text)) => self.respond(&text),
            Ok(CommandOutput::None) => {},
            Ok(CommandOutput::Clear) => self.transcript.reset(),
            Ok(CommandOutput::Exit) => {
                self.window.close();
            },
            Err(e) => self.respond(&e.to_string()),
        }
    }

    fn respond(&mut self, text: &str) {
        self.reveal = render_response(&mut self.transcript, text, &self.config);
    }

    /// Advance the reveal and the window fades by `dt_ms`, then run any
    /// queued lines that are now unblocked.
    pub fn tick(&mut self, dt_ms: u32) {
        if let Some(reveal) = &mut self.reveal
            && reveal.tick(dt_ms, &mut self.transcript)
        {
            self.reveal = None;
        }
        while !self.is_busy() {
            let Some(line) = self.pending.pop_front() else {
                break;
            };
            self.submit_line(&line);
        }
        for event in self.window.tick(dt_ms) {
            match event {
                // The hidden container takes the input field with it.
                WindowEvent::Closed => self.focused = false,
                WindowEvent::Rebooted => self.reset_session(),
                WindowEvent::Opened => {},
            }
        }
    }

    /// Whether a reveal is still running.
    pub fn is_busy(&self) -> bool {
        self.reveal.is_some()
    }

    /// Whether the session has nothing left to reveal or dispatch.
    pub fn is_idle(&self) -> bool {
        !self.is_busy() && self.pending.is_empty()
    }

    /// Back to a fresh prompt: welcome line only, home directory, empty
    /// input, history cursor past the end, input focused. History entries
    /// are kept.
    pub fn reset_session(&mut self) {
        self.reveal = None;
        self.pending.clear();
        self.transcript.reset();
        self.cwd = ROOT.to_string();
        self.input.clear();
        self.history.reset_cursor();
        self.focused = true;
        log::info!("session reset");
    }

    /// `user@host:cwd$`
    pub fn prompt(&self) -> String {
        format!("{}:{}$", self.config.prompt_identity(), self.cwd)
    }

    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn window(&self) -> &WindowController {
        &self.window
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

fn apply_recall(input: &mut String, recall: Recall<'_>) {
    match recall {
        Recall::Entry(text) => *input = text.to_string(),
        Recall::Blank => input.clear(),
        Recall::Unchanged => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::LineKind;
    use crate::window::WindowPhase;
    use kode_platform::SystemTime;

    struct MockTime;
    impl TimeService for MockTime {
        fn now(&self) -> Result<SystemTime> {
            Ok(SystemTime {
                year: 2026,
                month: 10,
                day: 19,
                hour: 8,
                minute: 15,
                second: 0,
            })
        }
    }

    fn session() -> TerminalSession {
        TerminalSession::new(TerminalConfig::default(), Box::new(MockTime)).unwrap()
    }

    fn type_line(s: &mut TerminalSession, line: &str) {
        for c in line.chars() {
            s.handle_input(&InputEvent::TextInput(c));
        }
        s.handle_input(&InputEvent::KeyPress(Key::Enter));
    }

    fn settle(s: &mut TerminalSession) {
        while !s.is_idle() {
            s.tick(5);
        }
    }

    /// Submit a line, let it finish, and return the last transcript text.
    fn run(s: &mut TerminalSession, line: &str) -> String {
        type_line(s, line);
        settle(s);
        s.transcript().lines().last().unwrap().text.clone()
    }

    fn key(s: &mut TerminalSession, k: Key) {
        s.handle_input(&InputEvent::KeyPress(k));
    }

    fn click(s: &mut TerminalSession, b: ChromeButton) {
        s.handle_input(&InputEvent::ButtonClick(b));
    }

    #[test]
    fn unknown_command_reported() {
        let mut s = session();
        assert_eq!(run(&mut s, "foo"), "bash: foo: command not found");
    }

    #[test]
    fn echo_then_response() {
        let mut s = session();
        run(&mut s, "whoami");
        let lines = s.transcript().lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1].kind,
            LineKind::Echo {
                cwd: "~".to_string()
            }
        );
        assert_eq!(lines[1].text, "whoami");
        assert_eq!(lines[2].kind, LineKind::Response);
        assert_eq!(lines[2].text, "guest");
    }

    #[test]
    fn cd_updates_prompt() {
        let mut s = session();
        assert_eq!(s.prompt(), "guest@divyanshu.dev:~$");
        run(&mut s, "cd projects");
        assert_eq!(s.cwd(), "~/projects");
        assert_eq!(s.prompt(), "guest@divyanshu.dev:~/projects$");
        assert_eq!(
            run(&mut s, "ls"),
            "project_alpha.txt  system_tool.exe  youtube_shorts.mp4"
        );
        run(&mut s, "cd");
        assert_eq!(s.cwd(), "~");
    }

    #[test]
    fn echo_records_directory_it_was_typed_in() {
        let mut s = session();
        run(&mut s, "cd projects");
        let echo = &s.transcript().lines()[1];
        assert_eq!(
            echo.kind,
            LineKind::Echo {
                cwd: "~".to_string()
            }
        );
    }

    #[test]
    fn cat_cases() {
        let mut s = session();
        assert_eq!(run(&mut s, "cat .env"), "bash: .env: Permission denied");
        assert_eq!(run(&mut s, "cat nofile"), "cat: nofile: No such file or directory");
        assert_eq!(run(&mut s, "cat projects"), "cat: projects: Is a directory");
    }

    #[test]
    fn history_walks_back() {
        let mut s = session();
        for line in ["ls", "pwd", "whoami"] {
            run(&mut s, line);
        }
        key(&mut s, Key::Up);
        assert_eq!(s.input(), "whoami");
        key(&mut s, Key::Up);
        assert_eq!(s.input(), "pwd");
        key(&mut s, Key::Up);
        assert_eq!(s.input(), "ls");
        key(&mut s, Key::Up);
        assert_eq!(s.input(), "ls");
        key(&mut s, Key::Down);
        assert_eq!(s.input(), "pwd");
        key(&mut s, Key::Down);
        key(&mut s, Key::Down);
        assert_eq!(s.input(), "");
        assert_eq!(s.history().cursor(), 3);
    }

    #[test]
    fn clear_leaves_welcome_only() {
        let mut s = session();
        run(&mut s, "help");
        run(&mut s, "clear");
        let lines = s.transcript().lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].kind, LineKind::Welcome);
        assert_eq!(lines[0].text, s.config().welcome);
    }

    #[test]
    fn blank_line_is_echoed_but_not_recorded() {
        let mut s = session();
        type_line(&mut s, "   ");
        let lines = s.transcript().lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].text, "   ");
        assert!(s.history().is_empty());
        assert!(s.is_idle());
    }

    #[test]
    fn no_output_commands_add_no_response() {
        let mut s = session();
        run(&mut s, "cd projects");
        assert_eq!(s.transcript().lines().len(), 2);
    }

    #[test]
    fn repeated_commands_are_stable() {
        let mut s = session();
        for cmd in [
            "help", "whoami", "sudo", "pwd", "who", "skills", "projects", "contact", "neofetch",
            "date", "git log",
        ] {
            let first = run(&mut s, cmd);
            let second = run(&mut s, cmd);
            assert_eq!(first, second, "{cmd}");
        }
    }

    #[test]
    fn date_comes_from_time_service() {
        let mut s = session();
        assert_eq!(
            run(&mut s, "date"),
            "Mon Oct 19 2026 08:15:00 GMT+0000 (Coordinated Universal Time)"
        );
    }

    #[test]
    fn short_responses_are_revealed_over_time() {
        let mut s = session();
        type_line(&mut s, "whoami");
        assert!(s.is_busy());
        assert_eq!(s.transcript().lines()[2].text, "g");
        s.tick(10);
        assert_eq!(s.transcript().lines()[2].text, "gue");
        settle(&mut s);
        assert_eq!(s.transcript().lines()[2].text, "guest");
    }

    #[test]
    fn long_responses_render_at_once() {
        let mut s = session();
        type_line(&mut s, "neofetch");
        assert!(!s.is_busy());
        assert!(s.transcript().lines()[2].text.contains("Resolution: 1920x1080"));
    }

    #[test]
    fn submissions_during_reveal_are_queued_in_order() {
        let mut s = session();
        type_line(&mut s, "whoami");
        type_line(&mut s, "pwd");
        type_line(&mut s, "foo");
        assert_eq!(s.pending_len(), 2);
        assert_eq!(s.input(), "");
        assert_eq!(s.history().len(), 3);
        assert_eq!(s.transcript().lines().len(), 3);
        settle(&mut s);
        let texts: Vec<&str> = s
            .transcript()
            .lines()
            .iter()
            .map(|l| l.text.as_str())
            .collect();
        assert_eq!(
            texts[1..],
            [
                "whoami",
                "guest",
                "pwd",
                "/home/guest",
                "foo",
                "bash: foo: command not found"
            ]
        );
    }

    #[test]
    fn exit_closes_window() {
        let mut s = session();
        assert_eq!(run(&mut s, "exit"), "exit");
        assert_eq!(s.window().phase(), WindowPhase::Closing);
        s.tick(300);
        assert_eq!(s.window().phase(), WindowPhase::Closed);
        assert!(!s.window().layout().container_visible);
    }

    #[test]
    fn reboot_resets_session() {
        let mut s = session();
        run(&mut s, "cd projects");
        run(&mut s, "ls");
        key(&mut s, Key::Up);
        s.handle_input(&InputEvent::FocusLost);
        click(&mut s, ChromeButton::Close);
        s.tick(300);
        click(&mut s, ChromeButton::Reboot);
        s.tick(300);
        assert_eq!(s.window().phase(), WindowPhase::Opening);
        assert_eq!(s.transcript().lines().len(), 1);
        assert_eq!(s.cwd(), "~");
        assert_eq!(s.input(), "");
        assert!(s.is_focused());
        assert_eq!(s.history().len(), 2);
        assert_eq!(s.history().cursor(), 2);
        s.tick(400);
        assert_eq!(s.window().phase(), WindowPhase::Open);
    }

    #[test]
    fn reboot_before_close_is_ignored() {
        let mut s = session();
        run(&mut s, "whoami");
        click(&mut s, ChromeButton::Reboot);
        s.tick(1_000);
        assert_eq!(s.transcript().lines().len(), 3);
        assert_eq!(s.window().phase(), WindowPhase::Open);
    }

    #[test]
    fn closing_mid_reveal_keeps_revealing() {
        let mut s = session();
        type_line(&mut s, "whoami");
        click(&mut s, ChromeButton::Close);
        settle(&mut s);
        assert_eq!(s.transcript().lines()[2].text, "guest");
    }

    #[test]
    fn reboot_drops_queued_lines() {
        let config = TerminalConfig {
            close_fade_ms: 0,
            reboot_fade_ms: 0,
            open_fade_ms: 0,
            ..TerminalConfig::default()
        };
        let mut s = TerminalSession::new(config, Box::new(MockTime)).unwrap();
        type_line(&mut s, "whoami");
        type_line(&mut s, "pwd");
        click(&mut s, ChromeButton::Close);
        click(&mut s, ChromeButton::Reboot);
        s.tick(0);
        assert_eq!(s.window().phase(), WindowPhase::Closed);
        click(&mut s, ChromeButton::Reboot);
        s.tick(0);
        assert!(s.is_idle());
        assert_eq!(s.transcript().lines().len(), 1);
    }

    #[test]
    fn unfocused_input_ignores_typing() {
        let mut s = session();
        s.handle_input(&InputEvent::FocusLost);
        s.handle_input(&InputEvent::TextInput('x'));
        s.handle_input(&InputEvent::KeyPress(Key::Enter));
        assert_eq!(s.input(), "");
        assert_eq!(s.transcript().lines().len(), 1);
        s.handle_input(&InputEvent::FocusGained);
        s.handle_input(&InputEvent::TextInput('x'));
        s.handle_input(&InputEvent::Backspace);
        s.handle_input(&InputEvent::TextInput('y'));
        assert_eq!(s.input(), "y");
    }

    #[test]
    fn closed_window_takes_no_input() {
        let mut s = session();
        click(&mut s, ChromeButton::Close);
        s.tick(300);
        assert_eq!(s.window().phase(), WindowPhase::Closed);
        assert!(!s.is_focused());
        s.handle_input(&InputEvent::FocusGained);
        type_line(&mut s, "cd projects");
        key(&mut s, Key::Up);
        assert_eq!(s.cwd(), "~");
        assert_eq!(s.input(), "");
        assert_eq!(s.transcript().lines().len(), 1);
        assert!(s.history().is_empty());

        click(&mut s, ChromeButton::Reboot);
        s.tick(300);
        assert!(s.is_focused());
        type_line(&mut s, "cd projects");
        assert_eq!(s.cwd(), "~/projects");
    }

    #[test]
    fn blank_submit_keeps_history_position() {
        let mut s = session();
        run(&mut s, "ls");
        run(&mut s, "pwd");
        key(&mut s, Key::Up);
        assert_eq!(s.input(), "pwd");
        for _ in 0..3 {
            s.handle_input(&InputEvent::Backspace);
        }
        key(&mut s, Key::Enter);
        key(&mut s, Key::Up);
        assert_eq!(s.input(), "ls");
    }

    #[test]
    fn maximize_and_minimize_via_buttons() {
        let mut s = session();
        click(&mut s, ChromeButton::Maximize);
        click(&mut s, ChromeButton::Minimize);
        assert!(s.window().is_maximized());
        assert!(s.window().is_minimized());
        click(&mut s, ChromeButton::Maximize);
        assert!(!s.window().is_maximized());
        assert!(s.window().is_minimized());
    }

    #[test]
    fn transcript_stays_scrolled_to_bottom() {
        let config = TerminalConfig {
            viewport_rows: 3,
            ..TerminalConfig::default()
        };
        let mut s = TerminalSession::new(config, Box::new(MockTime)).unwrap();
        for _ in 0..5 {
            run(&mut s, "whoami");
        }
        assert!(s.transcript().is_at_bottom());
        let rows = s.transcript().visible_rows("guest@divyanshu.dev");
        assert_eq!(rows.last().map(String::as_str), Some("guest"));
    }
}

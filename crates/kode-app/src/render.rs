//! Incremental stdout rendering of the session transcript.

use std::io::{self, Write};

use kode_terminal::TerminalSession;
use kode_terminal::window::{WindowLayout, WindowPhase};
use kode_ui::BrandLogo;

/// ANSI clear-screen and cursor-home.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Prints only what changed since the last frame.
pub struct TranscriptPrinter {
    generation: u64,
    /// Index of the line currently being printed.
    line: usize,
    /// Characters of that line already printed.
    chars: usize,
    phase: WindowPhase,
    layout: Option<WindowLayout>,
}

impl TranscriptPrinter {
    pub fn new() -> Self {
        Self {
            generation: 0,
            line: 0,
            chars: 0,
            phase: WindowPhase::Open,
            layout: None,
        }
    }

    /// Write new transcript text and window changes to `out`.
    pub fn print(&mut self, session: &TerminalSession, out: &mut impl Write) -> io::Result<()> {
        let transcript = session.transcript();
        if transcript.generation() != self.generation {
            self.generation = transcript.generation();
            self.line = 0;
            self.chars = 0;
            write!(out, "{CLEAR_SCREEN}")?;
        }

        let identity = session.config().prompt_identity();
        for (i, line) in transcript.lines().iter().enumerate().skip(self.line) {
            if i > self.line {
                writeln!(out)?;
                self.line = i;
                self.chars = 0;
            }
            let rest: String = line.render(&identity).chars().skip(self.chars).collect();
            self.chars += rest.chars().count();
            write!(out, "{rest}")?;
        }

        let window = session.window();
        if window.phase() != self.phase {
            self.phase = window.phase();
            writeln!(out)?;
            write!(out, "[window {:?}]", self.phase)?;
        }
        let layout = window.layout();
        if self.layout.is_some_and(|prev| prev != layout) {
            writeln!(out)?;
            write!(
                out,
                "[layout {:?}, body {}, nav {}]",
                layout.height,
                if layout.body_visible { "shown" } else { "hidden" },
                if layout.nav_visible { "shown" } else { "hidden" },
            )?;
        }
        self.layout = Some(layout);
        Ok(())
    }
}

impl Default for TranscriptPrinter {
    fn default() -> Self {
        Self::new()
    }
}

/// The brand logo with a bar at the cursor position.
pub fn brand_line(logo: &BrandLogo) -> String {
    format!("{}|{}", logo.before(), logo.after())
}

//! Character-by-character reveal of short responses.

use kode_types::config::TerminalConfig;

use crate::transcript::Transcript;

/// Append `text` as a response line.
///
/// Empty text appends nothing. Text longer than the configured threshold
/// (counted in UTF-16 code units, as browsers measure strings), or any text
/// when the interval is zero, is written in full at once. Otherwise
/// the line starts with its first character and a [`Reveal`] is returned to
/// drive the rest.
pub fn render_response(
    transcript: &mut Transcript,
    text: &str,
    config: &TerminalConfig,
) -> Option<Reveal> {
    if text.is_empty() {
        return None;
    }
    if text.encode_utf16().count() > config.reveal_threshold || config.reveal_interval_ms == 0 {
        transcript.push_response(text);
        transcript.scroll_to_bottom();
        return None;
    }
    let line = transcript.push_response("");
    let mut reveal = Reveal {
        line,
        chars: text.chars().collect(),
        shown: 0,
        elapsed_ms: 0,
        interval_ms: config.reveal_interval_ms,
    };
    reveal.tick(0, transcript);
    Some(reveal)
}

/// An in-flight reveal.
///
/// Character `k` appears `k * interval_ms` after the start; the reveal
/// settles `len * interval_ms` after the start.
#[derive(Debug, Clone)]
pub struct Reveal {
    line: usize,
    chars: Vec<char>,
    shown: usize,
    elapsed_ms: u32,
    interval_ms: u32,
}

impl Reveal {
    /// Advance by `dt_ms`, appending every character that is now due and
    /// scrolling to the bottom after each one. Returns `true` once settled.
    pub fn tick(&mut self, dt_ms: u32, transcript: &mut Transcript) -> bool {
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
        while self.shown < self.chars.len() && self.due(self.shown) {
            transcript.append_char(self.line, self.chars[self.shown]);
            transcript.scroll_to_bottom();
            self.shown += 1;
        }
        self.is_finished()
    }

    fn due(&self, index: usize) -> bool {
        (index as u64) * u64::from(self.interval_ms) <= u64::from(self.elapsed_ms)
    }

    pub fn is_finished(&self) -> bool {
        self.shown == self.chars.len() && self.due(self.chars.len())
    }

    /// Index of the transcript line being revealed.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Characters shown so far.
    pub fn shown(&self) -> usize {
        self.shown
    }

    /// Total time from start until the reveal settles.
    pub fn duration_ms(&self) -> u64 {
        self.chars.len() as u64 * u64::from(self.interval_ms)
    }
}

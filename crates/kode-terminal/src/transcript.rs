//! The visible transcript: echoed commands and their responses.

use kode_ui::ScrollView;

/// Kind of a transcript line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// The banner shown at start and after `clear` or reboot.
    Welcome,
    /// A submitted input line, with the directory it was typed in.
    Echo { cwd: String },
    /// Command output.
    Response,
}

/// One logical line of the transcript. Its text may span several rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    pub kind: LineKind,
    pub text: String,
}

impl RenderedLine {
    /// Number of display rows this line occupies.
    pub fn rows(&self) -> usize {
        self.text.matches('\n').count() + 1
    }

    /// Display text, with the prompt prefixed to echoes.
    pub fn render(&self, identity: &str) -> String {
        match &self.kind {
            LineKind::Echo { cwd } => format!("{identity}:{cwd}$ {}", self.text),
            LineKind::Welcome | LineKind::Response => self.text.clone(),
        }
    }
}

/// Append-only list of rendered lines plus its scroll viewport.
///
/// Lines are never edited once complete; the only mutation besides appending
/// is growing the newest response while it is revealed, and a full
/// [`reset`](Transcript::reset).
#[derive(Debug, Clone)]
pub struct Transcript {
    lines: Vec<RenderedLine>,
    welcome: String,
    view: ScrollView,
    generation: u64,
}

impl Transcript {
    pub fn new(welcome: impl Into<String>, viewport_rows: usize) -> Self {
        let mut transcript = Self {
            lines: Vec::new(),
            welcome: welcome.into(),
            view: ScrollView::new(0, viewport_rows),
            generation: 0,
        };
        transcript.fill_welcome();
        transcript
    }

    fn fill_welcome(&mut self) {
        self.lines = vec![RenderedLine {
            kind: LineKind::Welcome,
            text: self.welcome.clone(),
        }];
        self.view.set_content_rows(1);
        self.view.scroll_top = 0;
    }

    /// Drop everything but a fresh welcome line.
    pub fn reset(&mut self) {
        self.fill_welcome();
        self.generation += 1;
    }

    fn push(&mut self, line: RenderedLine) -> usize {
        let rows = self.view.content_rows + line.rows();
        self.lines.push(line);
        self.view.set_content_rows(rows);
        self.lines.len() - 1
    }

    /// Append an echo of `text` typed in `cwd`.
    pub fn push_echo(&mut self, cwd: &str, text: &str) {
        self.push(RenderedLine {
            kind: LineKind::Echo {
                cwd: cwd.to_string(),
            },
            text: text.to_string(),
        });
    }

    /// Append a response line and return its index.
    pub fn push_response(&mut self, text: &str) -> usize {
        self.push(RenderedLine {
            kind: LineKind::Response,
            text: text.to_string(),
        })
    }

    /// Grow the line at `index` by one character.
    ///
    /// Returns `false` if no such line exists.
    pub fn append_char(&mut self, index: usize, c: char) -> bool {
        let Some(line) = self.lines.get_mut(index) else {
            return false;
        };
        line.text.push(c);
        if c == '\n' {
            let rows = self.view.content_rows + 1;
            self.view.set_content_rows(rows);
        }
        true
    }

    pub fn scroll_to_bottom(&mut self) {
        self.view.scroll_to_bottom();
    }

    pub fn is_at_bottom(&self) -> bool {
        self.view.is_at_bottom()
    }

    pub fn view(&self) -> &ScrollView {
        &self.view
    }

    /// Display rows currently inside the viewport.
    pub fn visible_rows(&self, identity: &str) -> Vec<String> {
        let range = self.view.visible_range();
        self.lines
            .iter()
            .flat_map(|line| {
                line.render(identity)
                    .split('\n')
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .skip(range.start)
            .take(range.len())
            .collect()
    }

    pub fn lines(&self) -> &[RenderedLine] {
        &self.lines
    }

    /// Bumped on every reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELCOME: &str = "Welcome";

    #[test]
    fn starts_with_welcome_only() {
        let t = Transcript::new(WELCOME, 10);
        assert_eq!(t.lines().len(), 1);
        assert_eq!(t.lines()[0].kind, LineKind::Welcome);
        assert_eq!(t.lines()[0].text, WELCOME);
        assert_eq!(t.generation(), 0);
    }

    #[test]
    fn echo_renders_prompt() {
        let mut t = Transcript::new(WELCOME, 10);
        t.push_echo("~/projects", "ls");
        assert_eq!(
            t.lines()[1].render("guest@divyanshu.dev"),
            "guest@divyanshu.dev:~/projects$ ls"
        );
    }

    #[test]
    fn reset_keeps_one_welcome_line() {
        let mut t = Transcript::new(WELCOME, 10);
        t.push_echo("~", "help");
        t.push_response("a\nb\nc");
        t.reset();
        assert_eq!(t.lines().len(), 1);
        assert_eq!(t.lines()[0].text, WELCOME);
        assert_eq!(t.view().content_rows, 1);
        assert_eq!(t.generation(), 1);
    }

    #[test]
    fn rows_count_newlines() {
        let mut t = Transcript::new(WELCOME, 10);
        let idx = t.push_response("");
        assert_eq!(t.view().content_rows, 2);
        t.append_char(idx, 'a');
        t.append_char(idx, '\n');
        t.append_char(idx, 'b');
        assert_eq!(t.lines()[idx].text, "a\nb");
        assert_eq!(t.view().content_rows, 3);
        assert!(!t.append_char(99, 'x'));
    }

    #[test]
    fn visible_rows_follow_bottom() {
        let mut t = Transcript::new(WELCOME, 2);
        t.push_echo("~", "pwd");
        t.push_response("/home/guest");
        t.scroll_to_bottom();
        assert_eq!(
            t.visible_rows("g@h"),
            vec!["g@h:~$ pwd".to_string(), "/home/guest".to_string()]
        );
        t.scroll_to_bottom();
        assert!(t.is_at_bottom());
        assert_eq!(t.view().scroll_top, 1);
    }

    #[test]
    fn short_transcript_shows_everything() {
        let mut t = Transcript::new(WELCOME, 24);
        t.push_response("x");
        t.scroll_to_bottom();
        assert_eq!(t.view().scroll_top, 0);
        assert_eq!(t.visible_rows("g@h").len(), 2);
    }
}

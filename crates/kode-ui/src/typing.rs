//! Brand logo typing animation.
//!
//! The logo text is edited in place by a looping script of cursor moves,
//! insertions and deletions, each followed by a pause. The cursor sits
//! between [`BrandLogo::before`] and [`BrandLogo::after`].

const BASE_TEXT: &str = "DIVYANSHUYADAV";
const SUFFIX: &str = ".DEV";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    /// Restore the base text with the cursor at the end.
    Reset,
    /// Pause only.
    Wait,
    /// Move the cursor one character left.
    Left,
    /// Move the cursor one character right.
    Right,
    /// Insert a character at the cursor.
    Insert(char),
    /// Delete a space directly before the cursor; the pause is skipped when
    /// there is none.
    DeleteSpace,
}

#[derive(Debug, Clone, Copy)]
struct Op {
    action: Action,
    delay_ms: u32,
}

fn script() -> Vec<Op> {
    let op = |action, delay_ms| Op { action, delay_ms };
    let mut ops = vec![op(Action::Reset, 2000)];
    // Cursor between "DIVYANSHU" and "YADAV".
    ops.extend(std::iter::repeat_n(op(Action::Left, 100), 5));
    ops.push(op(Action::Wait, 500));
    ops.push(op(Action::Insert(' '), 500));
    ops.extend(std::iter::repeat_n(op(Action::Right, 100), 5));
    ops.push(op(Action::Wait, 500));
    ops.extend(SUFFIX.chars().map(|c| op(Action::Insert(c), 150)));
    ops.push(op(Action::Wait, 1000));
    // Back over ".DEV" and "YADAV" to the space.
    ops.extend(std::iter::repeat_n(op(Action::Left, 50), 9));
    ops.push(op(Action::DeleteSpace, 200));
    ops.extend(std::iter::repeat_n(op(Action::Right, 50), 9));
    ops.push(op(Action::Wait, 4000));
    ops
}

/// Looping brand logo animation state.
#[derive(Debug, Clone)]
pub struct BrandLogo {
    before: String,
    after: String,
    ops: Vec<Op>,
    index: usize,
    remaining_ms: u32,
}

impl BrandLogo {
    pub fn new() -> Self {
        let mut logo = Self {
            before: String::new(),
            after: String::new(),
            ops: script(),
            index: 0,
            remaining_ms: 0,
        };
        logo.remaining_ms = logo.apply(0);
        logo
    }

    /// Total length of one loop.
    pub fn cycle_ms(&self) -> u32 {
        self.ops.iter().map(|op| op.delay_ms).sum()
    }

    /// Text left of the cursor.
    pub fn before(&self) -> &str {
        &self.before
    }

    /// Text right of the cursor.
    pub fn after(&self) -> &str {
        &self.after
    }

    /// The whole logo text.
    pub fn text(&self) -> String {
        format!("{}{}", self.before, self.after)
    }

    /// Advance the animation by `dt_ms`.
    pub fn tick(&mut self, mut dt_ms: u32) {
        while dt_ms >= self.remaining_ms {
            dt_ms -= self.remaining_ms;
            self.index = (self.index + 1) % self.ops.len();
            self.remaining_ms = self.apply(self.index);
        }
        self.remaining_ms -= dt_ms;
    }

    /// Apply the op at `index` and return how long to pause after it.
    fn apply(&mut self, index: usize) -> u32 {
        let op = self.ops[index];
        match op.action {
            Action::Reset => {
                self.before = BASE_TEXT.to_string();
                self.after.clear();
            },
            Action::Wait => {},
            Action::Left => {
                if let Some(c) = self.before.pop() {
                    self.after.insert(0, c);
                }
            },
            Action::Right => {
                if let Some(c) = self.after.chars().next() {
                    self.after.remove(0);
                    self.before.push(c);
                }
            },
            Action::Insert(c) => self.before.push(c),
            Action::DeleteSpace => {
                if self.before.ends_with(' ') {
                    self.before.pop();
                } else {
                    return 0;
                }
            },
        }
        op.delay_ms
    }
}

impl Default for BrandLogo {
    fn default() -> Self {
        Self::new()
    }
}

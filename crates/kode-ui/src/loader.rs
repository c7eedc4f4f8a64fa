//! Page loader timeline.
//!
//! The title slides in at 300 ms, the progress bar fills over 1.5 s from
//! 800 ms, and at 2500 ms the loader slides away over 1 s while the hero
//! animations start.

use crate::animation::{Tween, easing};

const TEXT_IN_MS: u32 = 300;
const BAR_START_MS: u32 = 800;
const BAR_FILL_MS: u32 = 1500;
const EXIT_START_MS: u32 = 2500;
const EXIT_MS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderStage {
    /// Nothing shown yet.
    Waiting,
    /// Title visible, bar empty.
    Title,
    /// Bar filling.
    Filling,
    /// Bar full, loader about to leave.
    Loaded,
    /// Loader sliding off the top; hero animations running.
    Exiting,
    /// Loader gone.
    Done,
}

#[derive(Debug, Clone)]
pub struct Loader {
    elapsed_ms: u32,
    bar: Tween,
    exit: Tween,
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

impl Loader {
    pub fn new() -> Self {
        Self {
            elapsed_ms: 0,
            bar: Tween::new(0.0, 1.0, BAR_FILL_MS, easing::ease_in_out_quad),
            exit: Tween::new(0.0, 1.0, EXIT_MS, easing::ease_in_out_quad),
        }
    }

    /// Advance by `dt_ms`. Returns `true` on the tick the hero should start.
    pub fn tick(&mut self, dt_ms: u32) -> bool {
        let before = self.elapsed_ms;
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
        self.bar.tick(since(self.elapsed_ms, BAR_START_MS) - since(before, BAR_START_MS));
        self.exit.tick(since(self.elapsed_ms, EXIT_START_MS) - since(before, EXIT_START_MS));
        before < EXIT_START_MS && self.elapsed_ms >= EXIT_START_MS
    }

    pub fn stage(&self) -> LoaderStage {
        let t = self.elapsed_ms;
        if t < TEXT_IN_MS {
            LoaderStage::Waiting
        } else if t < BAR_START_MS {
            LoaderStage::Title
        } else if !self.bar.is_finished() {
            LoaderStage::Filling
        } else if t < EXIT_START_MS {
            LoaderStage::Loaded
        } else if !self.exit.is_finished() {
            LoaderStage::Exiting
        } else {
            LoaderStage::Done
        }
    }

    /// Bar width as a fraction of full.
    pub fn bar_progress(&self) -> f32 {
        self.bar.value()
    }

    /// How far the loader has slid up, as a fraction of its height.
    pub fn exit_progress(&self) -> f32 {
        self.exit.value()
    }

    pub fn hero_started(&self) -> bool {
        self.elapsed_ms >= EXIT_START_MS
    }
}

fn since(elapsed: u32, start: u32) -> u32 {
    elapsed.saturating_sub(start)
}

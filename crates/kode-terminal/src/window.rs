//! Window chrome: minimize, maximize, close and reboot.
//!
//! Minimize and maximize are independent flags. Close and reboot walk the
//! container through a fade cycle:
//!
//! ```text
//! Open --close--> Closing --fade done--> Closed --reboot--> Rebooting
//!   ^                                                           |
//!   +------------- Opening <--------- affordance faded out -----+
//! ```
//!
//! Each fade is a [`Tween`] advanced by [`WindowController::tick`]; a phase's
//! follow-up only happens once its fade has finished.

use kode_types::config::TerminalConfig;
use kode_ui::Tween;
use kode_ui::animation::easing;

const CLOSED_SCALE: f32 = 0.9;
const AFFORDANCE_HIDDEN_SCALE: f32 = 0.9;
const AFFORDANCE_EXIT_SCALE: f32 = 0.95;

/// Open/closed axis of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPhase {
    Open,
    /// Container fading out.
    Closing,
    /// Container hidden; reboot affordance shown.
    Closed,
    /// Reboot affordance fading out.
    Rebooting,
    /// Container fading back in.
    Opening,
}

/// Container height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Height {
    /// Title bar only.
    Header,
    /// The normal 60% of the viewport.
    Default,
    /// The whole viewport.
    FullScreen,
}

/// What the host should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowLayout {
    pub container_visible: bool,
    pub body_visible: bool,
    pub height: Height,
    pub nav_visible: bool,
    pub affordance_visible: bool,
}

/// Phase transitions reported by [`WindowController::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// The container finished fading out.
    Closed,
    /// The affordance finished fading out; the session should reset now.
    Rebooted,
    /// The container finished fading in.
    Opened,
}

fn fade(from: f32, to: f32, duration_ms: u32) -> Tween {
    Tween::new(from, to, duration_ms, easing::ease_out_quad)
}

fn hold(value: f32) -> Tween {
    fade(value, value, 0)
}

#[derive(Debug, Clone)]
pub struct WindowController {
    phase: WindowPhase,
    minimized: bool,
    maximized: bool,
    container_visible: bool,
    affordance_visible: bool,
    container_opacity: Tween,
    container_scale: Tween,
    affordance_opacity: Tween,
    affordance_scale: Tween,
    close_fade_ms: u32,
    reboot_fade_ms: u32,
    open_fade_ms: u32,
}

impl WindowController {
    pub fn new(config: &TerminalConfig) -> Self {
        Self {
            phase: WindowPhase::Open,
            minimized: false,
            maximized: false,
            container_visible: true,
            affordance_visible: false,
            container_opacity: hold(1.0),
            container_scale: hold(1.0),
            affordance_opacity: hold(0.0),
            affordance_scale: hold(AFFORDANCE_HIDDEN_SCALE),
            close_fade_ms: config.close_fade_ms,
            reboot_fade_ms: config.reboot_fade_ms,
            open_fade_ms: config.open_fade_ms,
        }
    }

    /// Toggle the body. Accepted in every phase.
    pub fn minimize(&mut self) {
        self.minimized = !self.minimized;
        log::debug!("window minimized={}", self.minimized);
    }

    /// Toggle full-viewport layout. Entering it un-minimizes; leaving it
    /// keeps the body as it was. Accepted in every phase.
    pub fn maximize(&mut self) {
        self.maximized = !self.maximized;
        if self.maximized && self.minimized {
            self.minimized = false;
        }
        log::debug!("window maximized={}", self.maximized);
    }

    /// Start fading the container out. Only accepted while open or opening.
    pub fn close(&mut self) -> bool {
        if !matches!(self.phase, WindowPhase::Open | WindowPhase::Opening) {
            log::warn!("close ignored in phase {:?}", self.phase);
            return false;
        }
        self.container_opacity = fade(self.container_opacity.value(), 0.0, self.close_fade_ms);
        self.container_scale = fade(self.container_scale.value(), CLOSED_SCALE, self.close_fade_ms);
        self.phase = WindowPhase::Closing;
        log::info!("terminal closing");
        true
    }

    /// Start fading the reboot affordance out. Only accepted while closed.
    pub fn reboot(&mut self) -> bool {
        if self.phase != WindowPhase::Closed {
            log::warn!("reboot ignored in phase {:?}", self.phase);
            return false;
        }
        self.affordance_opacity = fade(self.affordance_opacity.value(), 0.0, self.reboot_fade_ms);
        self.affordance_scale = fade(
            self.affordance_scale.value(),
            AFFORDANCE_EXIT_SCALE,
            self.reboot_fade_ms,
        );
        self.phase = WindowPhase::Rebooting;
        log::info!("terminal rebooting");
        true
    }

    /// Advance the fades and return the phase changes that completed.
    pub fn tick(&mut self, dt_ms: u32) -> Vec<WindowEvent> {
        self.container_opacity.tick(dt_ms);
        self.container_scale.tick(dt_ms);
        self.affordance_opacity.tick(dt_ms);
        self.affordance_scale.tick(dt_ms);

        let mut events = Vec::new();
        while let Some(event) = self.advance_phase() {
            events.push(event);
        }
        events
    }

    fn advance_phase(&mut self) -> Option<WindowEvent> {
        match self.phase {
            WindowPhase::Closing if self.container_opacity.is_finished() => {
                self.container_visible = false;
                self.maximized = false;
                self.affordance_visible = true;
                self.affordance_opacity = fade(0.0, 1.0, self.open_fade_ms);
                self.affordance_scale = fade(AFFORDANCE_HIDDEN_SCALE, 1.0, self.open_fade_ms);
                self.phase = WindowPhase::Closed;
                log::info!("terminal closed");
                Some(WindowEvent::Closed)
            },
            WindowPhase::Rebooting if self.affordance_opacity.is_finished() => {
                self.affordance_visible = false;
                self.container_visible = true;
                self.container_opacity = fade(0.0, 1.0, self.open_fade_ms);
                self.container_scale = fade(CLOSED_SCALE, 1.0, self.open_fade_ms);
                self.phase = WindowPhase::Opening;
                log::info!("terminal rebooted");
                Some(WindowEvent::Rebooted)
            },
            WindowPhase::Opening if self.container_opacity.is_finished() => {
                self.phase = WindowPhase::Open;
                Some(WindowEvent::Opened)
            },
            _ => None,
        }
    }

    pub fn layout(&self) -> WindowLayout {
        let height = if self.minimized {
            Height::Header
        } else if self.maximized {
            Height::FullScreen
        } else {
            Height::Default
        };
        WindowLayout {
            container_visible: self.container_visible,
            body_visible: !self.minimized,
            height,
            nav_visible: !self.maximized,
            affordance_visible: self.affordance_visible,
        }
    }

    pub fn phase(&self) -> WindowPhase {
        self.phase
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    pub fn container_opacity(&self) -> f32 {
        self.container_opacity.value()
    }

    pub fn container_scale(&self) -> f32 {
        self.container_scale.value()
    }

    pub fn affordance_opacity(&self) -> f32 {
        self.affordance_opacity.value()
    }

    pub fn affordance_scale(&self) -> f32 {
        self.affordance_scale.value()
    }
}

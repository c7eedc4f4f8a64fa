//! Platform-agnostic input event types.
//!
//! Every front end maps its native input to these enums. The terminal core
//! never sees raw platform input.

use serde::{Deserialize, Serialize};

/// A platform-agnostic input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Character typed into the input field.
    TextInput(char),
    /// Backspace / delete-left in the input field.
    Backspace,
    /// A navigation or submit key pressed while the input field has focus.
    KeyPress(Key),
    /// One of the terminal chrome buttons clicked.
    ButtonClick(ChromeButton),
    /// The input field gained focus.
    FocusGained,
    /// The input field lost focus.
    FocusLost,
}

/// Keys the terminal input field reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Enter,
    Up,
    Down,
}

/// Window chrome buttons, plus the reboot affordance shown while closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChromeButton {
    Minimize,
    Maximize,
    Close,
    Reboot,
}

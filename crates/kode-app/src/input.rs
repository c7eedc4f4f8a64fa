use kode_types::input::{ChromeButton, InputEvent, Key};

/// What one line of stdin asks the app to do.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Feed these events to the session.
    Events(Vec<InputEvent>),
    /// Print the brand logo as it currently stands.
    ShowBrand,
    Quit,
}

/// Map a stdin line to session input.
///
/// Control lines start with `:`; anything else is typed into the input field
/// and submitted. An empty line submits whatever the field already holds,
/// such as a recalled history entry.
pub fn parse_line(line: &str) -> AppCommand {
    let event = match line.trim() {
        ":up" => InputEvent::KeyPress(Key::Up),
        ":down" => InputEvent::KeyPress(Key::Down),
        ":min" => InputEvent::ButtonClick(ChromeButton::Minimize),
        ":max" => InputEvent::ButtonClick(ChromeButton::Maximize),
        ":close" => InputEvent::ButtonClick(ChromeButton::Close),
        ":reboot" => InputEvent::ButtonClick(ChromeButton::Reboot),
        ":brand" => return AppCommand::ShowBrand,
        ":quit" => return AppCommand::Quit,
        _ => {
            let mut events: Vec<InputEvent> = line.chars().map(InputEvent::TextInput).collect();
            events.push(InputEvent::KeyPress(Key::Enter));
            return AppCommand::Events(events);
        },
    };
    AppCommand::Events(vec![event])
}

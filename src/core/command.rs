//! Keystroke parsing, kept apart from the I/O loop.
//!
//! Input is trimmed and compared case-insensitively. Anything that is not a
//! known command maps to the no-op variant, never to an error.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCommand {
    NextMonth,
    PrevMonth,
    EditToday,
    Quit,
    /// Empty or unrecognized input: just redraw.
    Redisplay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    Toggle(u8),
    Save,
    Clear,
    Ignore,
}

pub fn parse_calendar(line: &str) -> CalendarCommand {
    match line.trim().to_lowercase().as_str() {
        "n" => CalendarCommand::NextMonth,
        "p" => CalendarCommand::PrevMonth,
        "t" => CalendarCommand::EditToday,
        "q" => CalendarCommand::Quit,
        _ => CalendarCommand::Redisplay,
    }
}

pub fn parse_editor(line: &str) -> EditorCommand {
    match line.trim().to_lowercase().as_str() {
        "1" => EditorCommand::Toggle(1),
        "2" => EditorCommand::Toggle(2),
        "3" => EditorCommand::Toggle(3),
        "4" => EditorCommand::Toggle(4),
        "s" => EditorCommand::Save,
        "c" => EditorCommand::Clear,
        _ => EditorCommand::Ignore,
    }
}

use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_OK: &str = "✓";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn styled<T: fmt::Display>(color: &str, icon: &str, msg: T) -> String {
    format!("{}{}{} {}{}", color, BOLD, icon, RESET, msg)
}

pub fn success_line<T: fmt::Display>(msg: T) -> String {
    styled(FG_GREEN, ICON_OK, msg)
}

pub fn warning_line<T: fmt::Display>(msg: T) -> String {
    styled(FG_YELLOW, ICON_WARN, msg)
}

pub fn error_line<T: fmt::Display>(msg: T) -> String {
    styled(FG_RED, ICON_ERR, msg)
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", warning_line(msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", error_line(msg));
}

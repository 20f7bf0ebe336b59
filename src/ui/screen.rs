//! Terminal primitives shared by every screen.

use std::io::{self, Write};

/// Erase the display and move the cursor to the top-left corner.
pub const CLEAR_AND_HOME: &str = "\x1b[2J\x1b[H";

pub fn clear<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(CLEAR_AND_HOME.as_bytes())
}

pub fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "Choice: ")?;
    out.flush()
}

//! UI helper functions for terminal output formatting.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Section heading used by the interactive and inspection commands.
pub fn write_heading(out: &mut dyn Write, title: &str) -> std::io::Result<()> {
    writeln!(out, "== {} ==", title)
}

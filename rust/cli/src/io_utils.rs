//! Stdin and filesystem helpers shared by the commands.
//!
//! - Reading one line of interactive input
//! - Ensuring parent directories exist before file writes

use std::io::BufRead;
use std::path::Path;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// It trims whitespace from the input and returns `None` on EOF or read errors.
///
/// # Arguments
///
/// * `stdin` - Buffered reader to read from (typically stdin)
///
/// # Returns
///
/// * `Some(String)` - Trimmed input line (may be empty after trimming)
/// * `None` - EOF or read error occurred
///
/// # Example
///
/// ```rust
/// # use koikoi_cli::io_utils::read_stdin_line;
/// let mut input = std::io::Cursor::new("  stop \n");
/// assert_eq!(read_stdin_line(&mut input), Some("stop".to_string()));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Create the parent directory of `path` if it has one and it is missing.
pub fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_is_empty_not_eof() {
        let mut input = std::io::Cursor::new("\n");
        assert_eq!(read_stdin_line(&mut input), Some(String::new()));
    }

    #[test]
    fn ensure_parent_dir_creates_nested_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a/b/rounds.jsonl");
        ensure_parent_dir(&target).unwrap();
        assert!(dir.path().join("a/b").is_dir());
    }

    #[test]
    fn bare_file_name_needs_no_dir() {
        assert!(ensure_parent_dir(Path::new("rounds.jsonl")).is_ok());
    }
}

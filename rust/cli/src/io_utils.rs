//! Line-oriented input for interactive commands.

use std::io::BufRead;

/// Reads one line and trims it. `None` on EOF or a read error.
///
/// ```rust
/// use std::io::Cursor;
/// # use headsup_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  raise 40 \n");
/// assert_eq!(read_stdin_line(&mut input).as_deref(), Some("raise 40"));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_stdin_line_empty_after_trim() {
        let mut cursor = Cursor::new(b"   \n");
        assert_eq!(read_stdin_line(&mut cursor), Some(String::new()));
    }

    #[test]
    fn test_read_stdin_line_eof() {
        let mut cursor = Cursor::new(b"");
        assert_eq!(read_stdin_line(&mut cursor), None);
    }
}

//! Interactive license key input.

use std::io::{self, BufRead, Write};

pub const PROMPT: &str = "Enter license key: ";

/// Writes the prompt without a line break and flushes it so it shows before input is read.
pub fn write_prompt<W: Write>(mut writer: W) -> io::Result<()> {
    write!(writer, "{PROMPT}")?;
    writer.flush()
}

/// Reads a single line and strips the trailing line terminator.
///
/// The key is otherwise taken verbatim: no trimming of inner or leading whitespace and
/// no format checks. Invalid UTF-8 sequences become U+FFFD rather than failing the read.
/// A closed stream yields an empty string.
pub fn read_license_key<R: BufRead>(mut reader: R) -> io::Result<String> {
    let mut line = Vec::new();
    let read = reader.read_until(b'\n', &mut line)?;
    if read == 0 {
        log::debug!("stdin closed before a license key was entered");
        return Ok(String::new());
    }

    while matches!(line.last(), Some(b'\n' | b'\r')) {
        line.pop();
    }

    Ok(String::from_utf8_lossy(&line).into_owned())
}

use std::io::{BufRead, Write};

use anyhow::Result;
use greencity_core::InputError;
use tracing::debug;

/// Reads one line. `None` once the input is closed.
///
/// Bytes that are not UTF-8 are replaced rather than rejected, so a garbled
/// line is validated like any other bad input.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Prints `prompt` and keeps asking until `validate` accepts a line.
///
/// Rejections are reported with the error text and never end the loop; only a
/// closed input does, in which case `None` is returned.
pub fn prompt_until<R, W, T, F>(input: &mut R, out: &mut W, prompt: &str, mut validate: F) -> Result<Option<T>>
where
    R: BufRead,
    W: Write,
    F: FnMut(&str) -> Result<T, InputError>,
{
    write!(out, "{}", prompt)?;
    out.flush()?;

    loop {
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };

        match validate(&line) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => {
                debug!(input = line.trim(), error = %e, "input rejected");
                write!(out, "Invalid input: {}. Try again: ", e)?;
                out.flush()?;
            }
        }
    }
}

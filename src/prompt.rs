//! Yes/no confirmation on the interactive streams.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

// Unanchored on the first alternative: any answer starting with "y" is a
// yes ("yellow" included), and since `is_match` searches, the middle
// alternatives match as substrings.
static ACCEPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^y|yes|ok|true$").unwrap());

/// Write `prompt` to `output`, read one line from `input` and interpret it
/// as a yes/no answer.
///
/// The reader and writer are only borrowed for the call, so stream locks
/// held by the caller are released on every exit path.
pub fn confirm<R, W>(prompt: &str, input: &mut R, output: &mut W) -> Result<bool>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{prompt}").context("failed to write confirmation prompt")?;
    output.flush().context("failed to flush confirmation prompt")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read confirmation input")?;

    Ok(accepts(line.trim()))
}

fn accepts(answer: &str) -> bool {
    ACCEPT.is_match(answer)
}

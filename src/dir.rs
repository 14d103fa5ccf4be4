//! Destination-directory inspection.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};

/// Check whether `dir` is safe to scaffold into.
///
/// A path that does not exist counts as empty. Any read failure other than
/// non-existence is fatal and propagates to the caller.
pub fn is_empty(dir: &Path) -> Result<bool> {
    match std::fs::read_dir(dir) {
        Ok(mut entries) => Ok(entries.next().is_none()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(true),
        Err(err) => {
            Err(err).with_context(|| format!("failed to read directory {}", dir.display()))
        }
    }
}

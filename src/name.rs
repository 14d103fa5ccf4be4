//! Project-name derivation from a destination path.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

/// Fallback when the destination path yields no usable characters.
pub const DEFAULT_APP_NAME: &str = "my-activeql";

static NON_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9.-]+").unwrap());
static EDGE_TRIM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-_.]+|-+$").unwrap());

/// Derive an npm-compatible application name from a destination path.
///
/// Takes the last path segment, collapses every run of characters outside
/// `[A-Za-z0-9.-]` into a single dash, strips leading dash/dot/underscore
/// runs and trailing dash runs, and lower-cases the result. Total over all
/// inputs; returns an empty string when nothing survives, in which case the
/// caller substitutes [`DEFAULT_APP_NAME`].
pub fn derive_app_name(path: &Path) -> String {
    let base = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let dashed = NON_NAME.replace_all(&base, "-");
    let trimmed = EDGE_TRIM.replace_all(&dashed, "");
    trimmed.to_lowercase()
}

/// Like [`derive_app_name`] but with the default applied.
pub fn app_name_or_default(path: &Path) -> String {
    let derived = derive_app_name(path);
    if derived.is_empty() {
        DEFAULT_APP_NAME.to_string()
    } else {
        derived
    }
}

//! Checks whether a path is inside the grammar the tree writer supports.
use regex::Regex;
use std::sync::LazyLock;

/// `$`, an optional leading `[n]`, then any number of `.field` or
/// `.field[n]` segments.
static WRITABLE_PATH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\$(\[[0-9]+\])?(\.[0-9A-Za-z_]+(\[[0-9]+\])?)*$")
        .expect("BUG: invalid WRITABLE_PATH_RE regex literal")
});

/// Returns true when `path` can be used as a write target.
///
/// This is narrower than [`crate::tokenize`]: wildcards, `..`, filters, the
/// `@` anchor and repeated bracket groups are all rejected.
pub fn is_writable(path: &str) -> bool {
    WRITABLE_PATH_RE.is_match(path)
}

//! Repository path conventions.
//!
//! Pure string functions. Paths are `/`-separated and relative to the
//! repository root; the root itself is the empty string.

/// True for the repository root.
pub fn is_root(path: &str) -> bool {
    path.trim_matches('/').is_empty()
}

/// Drop the last segment. The parent of the root is the root.
pub fn parent(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    match trimmed.rsplit_once('/') {
        Some((head, _)) => head.to_string(),
        None => String::new(),
    }
}

/// Last segment of a path, or `""` for the root.
pub fn last_segment(path: &str) -> &str {
    let trimmed = path.trim_matches('/');
    trimmed.rsplit('/').next().unwrap_or_default()
}

pub fn join(base: &str, name: &str) -> String {
    let base = base.trim_matches('/');
    let name = name.trim_matches('/');
    if base.is_empty() {
        name.to_string()
    } else {
        format!("{base}/{name}")
    }
}

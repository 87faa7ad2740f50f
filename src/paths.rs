//! Slash-separated path string helpers.
//!
//! Configuration files name their templates and children with forward-slash
//! paths that are resolved lexically against the directory of the declaring
//! file, so these helpers work on strings instead of `std::path::Path`
//! (whose `join` would discard the base when the second part is absolute).

use regex::Regex;
use std::sync::LazyLock;

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\\/]").expect("separator pattern is valid"));

/// Splits a path on both `/` and `\`, keeping empty segments.
///
/// `"/proj/sub"` yields `["", "proj", "sub"]` and `"C:\\a/b"` yields `["C:", "a", "b"]`.
pub fn split_segments(path: &str) -> Vec<&str> {
    SEPARATORS.split(path).collect()
}

/// Joins the non-empty parts with `/` and cleans the result.
///
/// Returns an empty string when every part is empty.
pub fn join<S: AsRef<str>>(parts: &[S]) -> String {
    let joined = parts
        .iter()
        .map(AsRef::as_ref)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if joined.is_empty() {
        return joined;
    }
    clean(&joined)
}

/// Lexically normalises a slash path: repeated separators collapse, `.` segments
/// are dropped, `..` removes the previous segment and a trailing separator is removed.
pub fn clean(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let rooted = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                // `..` cannot climb above the root
                _ if rooted => {}
                _ => segments.push(".."),
            },
            _ => segments.push(segment),
        }
    }

    let body = segments.join("/");
    match (rooted, body.is_empty()) {
        (true, _) => format!("/{body}"),
        (false, true) => ".".to_string(),
        (false, false) => body,
    }
}

/// Everything up to and including the last `/`, or an empty string when there is none.
pub fn containing_dir(path: &str) -> &str {
    match path.rfind('/') {
        Some(index) => &path[..=index],
        None => "",
    }
}

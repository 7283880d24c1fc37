//! Helpers to build the absolute paths expected by the API.
//!
//! The API is case and separator sensitive, so nothing beyond the leading
//! separator is ever changed. The empty path is the root folder and is kept as is.

use std::borrow::Cow;

/// Separator of the remote paths
pub const SEPARATOR: char = '/';

/// Makes sure a non empty path starts with exactly one separator.
///
/// ```rust
/// use dropbox_files::path::normalize;
///
/// assert_eq!(normalize(""), "");
/// assert_eq!(normalize("docs/report.pdf"), "/docs/report.pdf");
/// assert_eq!(normalize("/docs"), "/docs");
/// ```
pub fn normalize(path: &str) -> Cow<'_, str> {
    if path.is_empty() || path.starts_with(SEPARATOR) {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("{SEPARATOR}{path}"))
    }
}

/// Builds the remote path of `name` inside `folder`, the empty folder being the root.
///
/// ```rust
/// use dropbox_files::path::join;
///
/// assert_eq!(join("", "notes.txt"), "/notes.txt");
/// assert_eq!(join("docs/", "notes.txt"), "/docs/notes.txt");
/// ```
pub fn join(folder: &str, name: &str) -> String {
    let folder = normalize(folder);
    format!(
        "{}{}{}",
        folder.trim_end_matches(SEPARATOR),
        SEPARATOR,
        name.trim_start_matches(SEPARATOR)
    )
}

/// Name of a local file, without its parent folders
pub fn file_name(local: &std::path::Path) -> Option<&str> {
    local.file_name().and_then(|name| name.to_str())
}

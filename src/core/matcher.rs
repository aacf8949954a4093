// Prefix matching against directory names
//
// The list is already in recency order, so the first hit is the one we want.

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Find the first entry whose last path component starts with `query`
///
/// Comparison is case-insensitive. Entries without a last component
/// (like `/`) compare as the empty string.
///
/// # Examples
/// ```
/// use nearest_lib::core::matcher::find_match;
///
/// let dirs = ["/home/u/Projects", "/home/u/Photos"];
/// assert_eq!(find_match("pho", &dirs), Some("/home/u/Photos"));
/// ```
pub fn find_match<'a, S: AsRef<str>>(query: &str, entries: &'a [S]) -> Option<&'a str> {
    let query = query.to_lowercase();

    entries
        .iter()
        .map(|entry| entry.as_ref())
        .find(|entry| dir_name(entry).to_lowercase().starts_with(&query))
}

/// Look for a subdirectory of `dir` whose name starts with `prefix`
///
/// Case-sensitive. Names are checked in sorted order so the result
/// doesn't depend on how the filesystem happens to list them.
pub fn find_subdirectory_with_prefix(dir: &Path, prefix: &str) -> Result<Option<PathBuf>> {
    let mut candidates: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(prefix))
        })
        .collect();

    candidates.sort();
    Ok(candidates.into_iter().next())
}

fn dir_name(entry: &str) -> String {
    Path::new(entry)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

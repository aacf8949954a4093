/// Argument classification
///
/// Decides whether the argument is a path we take as-is, a path to make
/// absolute, or a prefix to look up in the list.

use crate::error::{NearestError, Result};
use std::path::{is_separator, Component, Path, PathBuf};

/// What kind of argument the user gave us
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    /// Already absolute, recorded verbatim
    Absolute(&'a str),
    /// Contains a separator, resolved against the working directory
    Relative(&'a str),
    /// Bare name prefix
    Prefix(&'a str),
}

impl<'a> Target<'a> {
    pub fn classify(argument: &'a str) -> Self {
        if Path::new(argument).is_absolute() {
            Target::Absolute(argument)
        } else if argument.chars().any(is_separator) {
            Target::Relative(argument)
        } else {
            Target::Prefix(argument)
        }
    }
}

/// Make `argument` absolute against `cwd`
///
/// `.` and `..` are folded lexically and trailing separators dropped.
/// Symlinks are left alone and nothing has to exist on disk.
pub fn resolve_relative(cwd: &Path, argument: &str) -> Result<String> {
    let joined = cwd.join(argument);
    let mut resolved = PathBuf::new();

    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                resolved.pop();
            }
            other => resolved.push(other.as_os_str()),
        }
    }

    path_to_string(resolved)
}

pub(crate) fn path_to_string(path: PathBuf) -> Result<String> {
    path.into_os_string().into_string().map_err(|raw| {
        NearestError::InvalidArgument(format!("path is not valid UTF-8: {}", raw.to_string_lossy()))
    })
}

// Resolves one argument to a directory and records the jump
//
// read list -> resolve target -> move to front -> write list

use crate::config::Config;
use crate::core::matcher::find_subdirectory_with_prefix;
use crate::core::resolver::{path_to_string, resolve_relative, Target};
use crate::error::{NearestError, Result};
use crate::store::{DirList, ListFile};
use std::path::PathBuf;
use tracing::{debug, warn};

pub struct Navigator {
    list_file: ListFile,
    cwd: PathBuf,
}

impl Navigator {
    /// Create a navigator for the configured list, resolving relative
    /// arguments against `cwd`
    pub fn new<P: Into<PathBuf>>(config: &Config, cwd: P) -> Self {
        Self {
            list_file: ListFile::new(&config.storage_path),
            cwd: cwd.into(),
        }
    }

    #[cfg(test)]
    pub(crate) fn list_file(&self) -> &ListFile {
        &self.list_file
    }

    /// Resolve `argument`, move it to the front of the list and save
    ///
    /// # Returns
    /// * `Ok(String)` - The directory to change into
    /// * `Err(NearestError::NoMatch)` - Bare prefix matched nothing; the list is not rewritten
    /// * `Err(NearestError)` - Reading or writing the list failed
    pub fn navigate(&self, argument: &str) -> Result<String> {
        let mut list = self.list_file.read()?;
        let target = self.resolve(argument, &list)?;

        let known = list.contains(&target);
        list.promote(&target);
        self.list_file.write(&list)?;

        debug!(target = %target, known, entries = list.len(), "recorded jump");
        Ok(target)
    }

    /// Work out the target directory without touching the list file
    pub fn resolve(&self, argument: &str, list: &DirList) -> Result<String> {
        match Target::classify(argument) {
            Target::Absolute(path) => {
                debug!(path, "absolute argument");
                Ok(path.to_string())
            }
            Target::Relative(path) => {
                let resolved = resolve_relative(&self.cwd, path)?;
                debug!(path, resolved = %resolved, "relative argument");
                Ok(resolved)
            }
            Target::Prefix(prefix) => {
                if let Some(found) = list.find_match(prefix) {
                    debug!(prefix, found, "matched list entry");
                    return Ok(found.to_string());
                }

                match self.find_in_cwd(prefix) {
                    Some(found) => {
                        debug!(prefix, found = %found.display(), "matched subdirectory of cwd");
                        path_to_string(found)
                    }
                    None => Err(NearestError::NoMatch(prefix.to_string())),
                }
            }
        }
    }

    // An unreadable cwd just means no fallback match
    fn find_in_cwd(&self, prefix: &str) -> Option<PathBuf> {
        match find_subdirectory_with_prefix(&self.cwd, prefix) {
            Ok(found) => found,
            Err(e) => {
                warn!(cwd = %self.cwd.display(), error = %e, "could not scan working directory");
                None
            }
        }
    }
}

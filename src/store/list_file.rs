/// List file storage
///
/// Reads and rewrites the CSV file that holds the directory list.
/// One record per line, no header, first field is the path.

use crate::error::{NearestError, Result};
use crate::store::DirList;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, trace, warn};

/// Handle on the list file at a fixed path
#[derive(Debug, Clone)]
pub struct ListFile {
    path: PathBuf,
}

impl ListFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[cfg(test)]
    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Read the list, creating an empty file if there is none yet
    ///
    /// # Returns
    /// * `Ok(DirList)` - Entries in file order (empty for a new file)
    /// * `Err(NearestError)` - If the file exists but can't be read or parsed
    pub fn read(&self) -> Result<DirList> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                self.create_empty()?;
                return Ok(DirList::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut entries = Vec::new();
        for record in reader.records() {
            let record = record?;
            // Only the first field matters; blank records are dropped
            match record.get(0) {
                Some(dir) if !dir.is_empty() => entries.push(dir.to_string()),
                _ => trace!(line = ?record.position().map(|p| p.line()), "skipping empty record"),
            }
        }

        debug!(path = %self.path.display(), count = entries.len(), "read directory list");
        Ok(DirList::from(entries))
    }

    /// Replace the file contents with `list`
    ///
    /// Writes to a temp file next to the list and renames it into place,
    /// so a crash mid-write leaves the old list intact. A symlinked list
    /// is written through, leaving the link in place.
    pub fn write(&self, list: &DirList) -> Result<()> {
        let target = self.write_target();
        let dir = parent_dir(&target);
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(tmp.as_file_mut());
            for entry in list.entries() {
                writer.write_record([entry.as_str()])?;
            }
            writer.flush()?;
        }
        tmp.as_file().sync_all()?;

        tmp.persist(&target)
            .map_err(|e| NearestError::Persist {
                path: target.clone(),
                source: e.error,
            })?;

        debug!(path = %target.display(), count = list.len(), "wrote directory list");
        Ok(())
    }

    fn create_empty(&self) -> Result<()> {
        fs::create_dir_all(parent_dir(&self.path))?;
        File::create(&self.path)?;
        debug!(path = %self.path.display(), "created empty directory list");
        Ok(())
    }

    // Renaming over a symlink would replace the link itself
    fn write_target(&self) -> PathBuf {
        match fs::symlink_metadata(&self.path) {
            Ok(meta) if meta.file_type().is_symlink() => match fs::canonicalize(&self.path) {
                Ok(resolved) => resolved,
                Err(e) => {
                    warn!(path = %self.path.display(), error = %e, "dangling list symlink, replacing it");
                    self.path.clone()
                }
            },
            _ => self.path.clone(),
        }
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_file() -> (ListFile, TempDir) {
        let temp = TempDir::new().unwrap();
        let list_file = ListFile::new(temp.path().join("cd-nearest.csv"));
        (list_file, temp)
    }

    #[test]
    fn test_read_missing_creates_empty_file() {
        let (list_file, _temp) = create_test_file();
        assert!(!list_file.path().exists());

        let list = list_file.read().unwrap();
        assert!(list.is_empty());
        assert!(list_file.path().exists());
        assert_eq!(fs::read_to_string(list_file.path()).unwrap(), "");
    }

    #[test]
    fn test_read_creates_missing_parent() {
        let temp = TempDir::new().unwrap();
        let list_file = ListFile::new(temp.path().join("Documents").join("cd-nearest.csv"));

        let list = list_file.read().unwrap();
        assert!(list.is_empty());
        assert!(list_file.path().exists());
    }

    #[test]
    fn test_round_trip() {
        let (list_file, _temp) = create_test_file();
        let list = DirList::from_entries([
            "/home/u/Projects",
            "/home/u/Photos",
            "/srv/with,comma",
            "/srv/with \"quotes\"",
        ]);

        list_file.write(&list).unwrap();
        assert_eq!(list_file.read().unwrap(), list);
    }

    #[test]
    fn test_write_one_record_per_line() {
        let (list_file, _temp) = create_test_file();
        list_file
            .write(&DirList::from_entries(["/a", "/b"]))
            .unwrap();

        let content = fs::read_to_string(list_file.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, ["/a", "/b"]);
    }

    #[test]
    fn test_write_truncates_previous_content() {
        let (list_file, _temp) = create_test_file();
        list_file
            .write(&DirList::from_entries(["/a", "/b", "/c"]))
            .unwrap();
        list_file.write(&DirList::from_entries(["/z"])).unwrap();

        assert_eq!(list_file.read().unwrap().entries(), ["/z"]);
    }

    #[test]
    fn test_read_takes_first_field_and_skips_blank_lines() {
        let (list_file, _temp) = create_test_file();
        fs::write(list_file.path(), "/a,extra\n\n/b\r\n\"/c,d\"\n").unwrap();

        let list = list_file.read().unwrap();
        assert_eq!(list.entries(), ["/a", "/b", "/c,d"]);
    }

    #[test]
    fn test_write_leaves_no_temp_files() {
        let (list_file, temp) = create_test_file();
        list_file.write(&DirList::from_entries(["/a"])).unwrap();

        let names: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, ["cd-nearest.csv"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_keeps_symlinked_list() {
        let temp = TempDir::new().unwrap();
        let real = temp.path().join("dotfiles").join("cd-nearest.csv");
        fs::create_dir(temp.path().join("dotfiles")).unwrap();
        fs::write(&real, "/old\n").unwrap();

        let link = temp.path().join("cd-nearest.csv");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let list_file = ListFile::new(&link);
        list_file.write(&DirList::from_entries(["/new", "/old"])).unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&real).unwrap().lines().collect::<Vec<_>>(), ["/new", "/old"]);
        assert_eq!(list_file.read().unwrap().entries(), ["/new", "/old"]);
    }

    #[test]
    fn test_read_directory_is_error() {
        let temp = TempDir::new().unwrap();
        let list_file = ListFile::new(temp.path());

        assert!(list_file.read().is_err());
    }
}

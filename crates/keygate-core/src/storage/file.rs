//! File-backed persistence slot.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{PersistenceSlot, USERS_SLOT};
use crate::error::StorageResult;

/// Persistence slot stored as `<dir>/users.json`.
///
/// Writes go to a temporary sibling file that is then renamed over the
/// target, so a crash leaves either the old or the new contents.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Create a slot for the users file inside `dir`.
    ///
    /// The directory is created on first write.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{USERS_SLOT}.json")),
        }
    }

    /// Create a slot backed by an explicit file path.
    #[must_use]
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl PersistenceSlot for FileSlot {
    fn read(&self) -> StorageResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                debug!("Read {} bytes from {:?}", contents.len(), self.path);
                Ok(Some(contents))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No users file at {:?}", self.path);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, contents: &str) -> StorageResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let temp = self.temp_path();
        if let Err(e) = fs::write(&temp, contents).and_then(|()| fs::rename(&temp, &self.path)) {
            let _ = fs::remove_file(&temp);
            return Err(e.into());
        }

        debug!("Wrote {} bytes to {:?}", contents.len(), self.path);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::redundant_clone)]
mod tests {
    use super::*;

    #[test]
    fn test_in_dir_uses_slot_name() {
        let slot = FileSlot::in_dir("/tmp/keygate");
        assert_eq!(slot.path(), Path::new("/tmp/keygate/users.json"));
    }

    #[test]
    fn test_temp_path_is_sibling() {
        let slot = FileSlot::at_path("/data/users.json");
        assert_eq!(slot.temp_path(), PathBuf::from("/data/users.json.tmp"));
    }

    #[test]
    fn test_missing_file_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::in_dir(dir.path());
        assert_eq!(slot.read().unwrap(), None);
    }

    #[test]
    fn test_write_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut slot = FileSlot::in_dir(dir.path().join("nested").join("keygate"));

        slot.write("[]").unwrap();

        assert_eq!(slot.read().unwrap().as_deref(), Some("[]"));
        assert!(!slot.temp_path().exists());
    }

    #[test]
    fn test_write_replaces_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut slot = FileSlot::in_dir(dir.path());

        slot.write("first").unwrap();
        slot.write("second").unwrap();

        assert_eq!(fs::read_to_string(slot.path()).unwrap(), "second");
    }

    #[test]
    fn test_write_into_file_parent_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let mut slot = FileSlot::in_dir(&blocker);
        assert!(slot.write("[]").is_err());
    }

    #[test]
    fn test_failed_write_removes_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut slot = FileSlot::in_dir(dir.path());
        fs::create_dir_all(slot.path().join("occupied")).unwrap();

        assert!(slot.write("[]").is_err());
        assert!(!slot.temp_path().exists());
        assert!(slot.path().is_dir());
    }
}

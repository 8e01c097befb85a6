use super::{StorageBackend, StoreFile};
use crate::error::{Result, TodoError};
use log::warn;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use uuid::Uuid;

/// File-based backend rooted at a single data directory.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    /// Opens the backend and makes sure `root` exists.
    ///
    /// A directory that cannot be created is only logged here; the next write
    /// will try again and report through the usual save path.
    pub fn open<P: Into<PathBuf>>(root: P) -> Self {
        let backend = Self { root: root.into() };
        if let Err(e) = backend.ensure_dir() {
            warn!(
                "Could not create data directory {}: {}",
                backend.root.display(),
                e
            );
        }
        backend
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(TodoError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read(&self, file: StoreFile) -> Result<Option<String>> {
        match fs::read_to_string(self.location(file)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(TodoError::Io(e)),
        }
    }

    fn write(&self, file: StoreFile, content: &str) -> Result<()> {
        self.ensure_dir()?;

        // Atomic write: a reader never sees a half-written store file
        let tmp_path = self
            .root
            .join(format!(".{}-{}.tmp", file.file_name(), Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(TodoError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, self.location(file)) {
            let _ = fs::remove_file(&tmp_path);
            return Err(TodoError::Io(e));
        }
        Ok(())
    }

    fn location(&self, file: StoreFile) -> PathBuf {
        self.root.join(file.file_name())
    }
}

//! In-memory file system for tests
//!
//! Uses `Arc<Mutex<>>` internally so it can be cloned and shared.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.lock().unwrap().insert(path.into(), content.into());
        self
    }

    pub fn get(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }
}

impl FileSystem for MockFileSystem {
    fn read(&self, path: &Path) -> FsResult<String> {
        self.get(path)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}

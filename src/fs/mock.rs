// src/fs/mock.rs

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::FileSystem;

/// In-memory filesystem that only knows about directories.
///
/// Adding a directory implicitly adds all of its ancestors. Clones share the
/// same underlying set, so a test can keep a handle and remove a checkout
/// while the monitor is running.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    dirs: Arc<Mutex<HashSet<PathBuf>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dirs<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let fs = Self::new();
        for d in dirs {
            fs.add_dir(d);
        }
        fs
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut dirs = self.dirs.lock().unwrap();
        for ancestor in path.as_ref().ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }

    pub fn remove_dir(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let mut dirs = self.dirs.lock().unwrap();
        dirs.retain(|d| !d.starts_with(path));
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.dirs.lock().unwrap().contains(path)
    }
}

// src/fs/mod.rs

//! Filesystem access used by the checker.
//!
//! The checker only needs to know whether a configured checkout is present
//! before shelling out into it; routing that through a trait lets tests use
//! [`mock::MockFileSystem`] instead of creating real directories.

use std::fmt::Debug;
use std::path::Path;

pub mod mock;

/// Abstract filesystem interface.
pub trait FileSystem: Send + Sync + Debug {
    fn exists(&self, path: &Path) -> bool;
}

/// Implementation that uses `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

//! Local filesystem adapter.

use std::path::Path;

use crate::ports::FileSystem;

/// Checks paths against the real filesystem (symlinks are followed).
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

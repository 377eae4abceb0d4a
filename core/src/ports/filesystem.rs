//! Filesystem stat port (interface).

use std::path::Path;

/// Port for checking whether a path exists.
pub trait FileSystem: Send + Sync {
    fn exists(&self, path: &Path) -> bool;
}

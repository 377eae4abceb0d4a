//! Project root discovery.

use std::path::{Path, PathBuf};

use crate::domain::{ProjectRoot, PROJECT_MARKERS};
use crate::ports::FileSystem;

/// Walk upward from `start` looking for a directory with project markers.
///
/// Every marker is checked at each level; the first level with at least one
/// hit is the root and all of its hits are returned. The walk stops below the
/// filesystem root (the root itself is never treated as a project) or when no
/// parent is left. An empty `start` returns `None` without touching `fs`.
pub fn locate_project_root<F: FileSystem>(fs: &F, start: &Path) -> Option<ProjectRoot> {
    if start.as_os_str().is_empty() {
        return None;
    }

    let mut dir = start;
    loop {
        let parent = dir.parent()?;

        let markers: Vec<PathBuf> = PROJECT_MARKERS
            .iter()
            .map(|marker| dir.join(marker))
            .filter(|path| fs.exists(path))
            .collect();

        if !markers.is_empty() {
            return Some(ProjectRoot {
                path: dir.to_path_buf(),
                markers,
            });
        }

        if parent.as_os_str().is_empty() || parent == dir {
            return None;
        }
        dir = parent;
    }
}

//! Extended analysis of a single process.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{ServiceType, Technology};

/// Marker files (or directories) that identify a project root.
pub const PROJECT_MARKERS: &[&str] = &[
    "package.json",     // Node.js
    "go.mod",           // Go
    "requirements.txt", // Python
    "pom.xml",          // Java
    "docker-compose.yml",
    "docker-compose.yaml",
    ".git",
    "Cargo.toml",     // Rust
    "Gemfile",        // Ruby
    "pyproject.toml", // Python (modern)
    "composer.json",  // PHP
];

/// An inferred project root and the markers found there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRoot {
    pub path: PathBuf,
    /// Absolute marker paths, in [`PROJECT_MARKERS`] order. Never empty.
    pub markers: Vec<PathBuf>,
}

/// Everything known about a process holding one or more ports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessAnalysis {
    pub pid: u32,
    pub name: String,
    pub command_line: String,
    /// Empty when the working directory could not be read.
    pub working_dir: String,
    pub user: String,
    pub technology: Technology,
    pub service_type: ServiceType,
    /// Ports the process had open at analysis time, without duplicates.
    pub detected_ports: Vec<u16>,
    pub project_path: Option<PathBuf>,
    pub config_files: Vec<PathBuf>,
}

impl ProcessAnalysis {
    /// Attach the project root (if any) found above the working directory.
    ///
    /// Both `project_path` and `config_files` are set here and nowhere else,
    /// so config files are only ever present together with a project path.
    pub fn with_project(mut self, project: Option<ProjectRoot>) -> Self {
        match project {
            Some(root) => {
                self.project_path = Some(root.path);
                self.config_files = root.markers;
            }
            None => {
                self.project_path = None;
                self.config_files = Vec::new();
            }
        }
        self
    }

    /// Record detected ports, dropping repeats.
    pub fn with_ports(mut self, ports: impl IntoIterator<Item = u16>) -> Self {
        self.detected_ports.clear();
        for port in ports {
            if !self.detected_ports.contains(&port) {
                self.detected_ports.push(port);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis() -> ProcessAnalysis {
        ProcessAnalysis {
            pid: 1234,
            name: "node".to_string(),
            command_line: "node server.js".to_string(),
            working_dir: "/srv/app".to_string(),
            user: "alice".to_string(),
            technology: Technology::Node,
            service_type: ServiceType::Web,
            detected_ports: Vec::new(),
            project_path: None,
            config_files: Vec::new(),
        }
    }

    #[test]
    fn test_with_ports_deduplicates() {
        let a = analysis().with_ports([3000, 9229, 3000, 9229, 3001]);
        assert_eq!(a.detected_ports, vec![3000, 9229, 3001]);
    }

    #[test]
    fn test_with_project_sets_both_fields() {
        let root = ProjectRoot {
            path: PathBuf::from("/srv/app"),
            markers: vec![PathBuf::from("/srv/app/package.json")],
        };
        let a = analysis().with_project(Some(root));
        assert_eq!(a.project_path, Some(PathBuf::from("/srv/app")));
        assert_eq!(a.config_files.len(), 1);

        let a = a.with_project(None);
        assert!(a.project_path.is_none());
        assert!(a.config_files.is_empty());
    }
}

//! Extended process analysis.

use std::path::Path;

use tracing::{debug, warn};

use crate::adapters::{OsFileSystem, PlatformInspector};
use crate::config::ToolPaths;
use crate::domain::{classify, ProcessAnalysis, ProcessAttribute, ProjectRoot};
use crate::error::Result;
use crate::ports::{FileSystem, ProcessInspector};

use super::project_locator::locate_project_root;

/// Application service that builds a [`ProcessAnalysis`] for a pid.
pub struct ProcessAnalyzer<I: ProcessInspector, F: FileSystem> {
    inspector: I,
    fs: F,
}

impl ProcessAnalyzer<PlatformInspector, OsFileSystem> {
    /// Analyzer backed by the platform's lookup tools and the real filesystem.
    pub fn for_platform(paths: ToolPaths) -> Self {
        Self::new(PlatformInspector::with_tools(paths), OsFileSystem)
    }
}

impl<I: ProcessInspector, F: FileSystem> ProcessAnalyzer<I, F> {
    pub fn new(inspector: I, fs: F) -> Self {
        Self { inspector, fs }
    }

    /// Analyze a running process.
    ///
    /// Fails only if the name, command line or user of `pid` cannot be read,
    /// which means the process is gone or not visible. A missing working
    /// directory or port listing leaves those parts empty.
    pub async fn analyze(&self, pid: u32) -> Result<ProcessAnalysis> {
        let name = self.inspector.attribute(pid, ProcessAttribute::Name).await?;
        let command_line = self
            .inspector
            .attribute(pid, ProcessAttribute::CommandLine)
            .await?;
        let working_dir = match self.inspector.attribute(pid, ProcessAttribute::WorkingDir).await {
            Ok(dir) => dir,
            Err(e) => {
                debug!(pid = pid, error = %e, "Working directory unavailable");
                String::new()
            }
        };
        let user = self.inspector.attribute(pid, ProcessAttribute::User).await?;

        let (technology, service_type) = classify(&name, &command_line);
        let project = self.find_project_root(Path::new(&working_dir));

        let ports = match self.extract_ports(pid).await {
            Ok(ports) => ports,
            Err(e) => {
                warn!(pid = pid, error = %e, "Could not list process ports");
                Vec::new()
            }
        };

        let analysis = ProcessAnalysis {
            pid,
            name,
            command_line,
            working_dir,
            user,
            technology,
            service_type,
            detected_ports: Vec::new(),
            project_path: None,
            config_files: Vec::new(),
        };

        Ok(analysis.with_project(project).with_ports(ports))
    }

    /// Find the project root above `dir`.
    pub fn find_project_root(&self, dir: &Path) -> Option<ProjectRoot> {
        locate_project_root(&self.fs, dir)
    }

    /// List the ports `pid` currently has open.
    pub async fn extract_ports(&self, pid: u32) -> Result<Vec<u16>> {
        self.inspector.descriptor_ports(pid).await
    }
}

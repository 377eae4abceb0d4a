//! In-memory fakes of the capability traits, for service tests.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::domain::{ProcessAttribute, SocketOwner};
use crate::error::{Error, Result};
use crate::ports::{BindProbe, FileSystem, ProcessInspector};

/// Bind probe where only the listed ports are free.
#[derive(Default)]
pub struct FakeProbe {
    free: HashSet<u16>,
    pub probed: Mutex<Vec<u16>>,
}

impl FakeProbe {
    pub fn with_free(ports: &[u16]) -> Self {
        Self {
            free: ports.iter().copied().collect(),
            probed: Mutex::new(Vec::new()),
        }
    }
}

impl BindProbe for FakeProbe {
    async fn is_bindable(&self, port: u16) -> bool {
        self.probed.lock().push(port);
        self.free.contains(&port)
    }
}

/// Process inspector answering from fixed tables.
///
/// Unknown ports yield `NoProcessFound`, unknown attributes fail with
/// `CommandFailed`, and unknown pids have no ports.
#[derive(Default)]
pub struct FakeInspector {
    owners: HashMap<u16, SocketOwner>,
    attributes: HashMap<(u32, ProcessAttribute), String>,
    ports: HashMap<u32, Vec<u16>>,
    tools_missing: bool,
    ports_unreadable: bool,
    pub lookups: Mutex<Vec<String>>,
}

impl FakeInspector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_owner(mut self, port: u16, name: &str, pid: u32) -> Self {
        self.owners.insert(port, SocketOwner::new(name, pid));
        self
    }

    pub fn with_attribute(mut self, pid: u32, attribute: ProcessAttribute, value: &str) -> Self {
        self.attributes.insert((pid, attribute), value.to_string());
        self
    }

    pub fn with_ports(mut self, pid: u32, ports: &[u16]) -> Self {
        self.ports.insert(pid, ports.to_vec());
        self
    }

    /// Make every lookup fail as if lsof and ps were not installed.
    pub fn without_tools(mut self) -> Self {
        self.tools_missing = true;
        self
    }

    /// Make only the port listing fail, leaving ps lookups intact.
    pub fn with_unreadable_ports(mut self) -> Self {
        self.ports_unreadable = true;
        self
    }

    fn check_tools(&self) -> Result<()> {
        if self.tools_missing {
            return Err(Error::ToolNotFound("lsof".to_string()));
        }
        Ok(())
    }
}

impl ProcessInspector for FakeInspector {
    async fn socket_owner(&self, port: u16) -> Result<SocketOwner> {
        self.lookups.lock().push(format!("owner:{}", port));
        self.check_tools()?;
        self.owners
            .get(&port)
            .cloned()
            .ok_or(Error::NoProcessFound { tool: "lsof", port })
    }

    async fn attribute(&self, pid: u32, attribute: ProcessAttribute) -> Result<String> {
        self.lookups.lock().push(format!("{}:{}", attribute, pid));
        self.check_tools()?;
        self.attributes
            .get(&(pid, attribute))
            .cloned()
            .ok_or_else(|| Error::CommandFailed(format!("ps failed for pid {}", pid)))
    }

    async fn descriptor_ports(&self, pid: u32) -> Result<Vec<u16>> {
        self.lookups.lock().push(format!("ports:{}", pid));
        self.check_tools()?;
        if self.ports_unreadable {
            return Err(Error::PermissionDenied(format!("Cannot list sockets of pid {}", pid)));
        }
        Ok(self.ports.get(&pid).cloned().unwrap_or_default())
    }
}

/// Filesystem holding a fixed set of paths, counting every stat.
#[derive(Default)]
pub struct FakeFileSystem {
    paths: HashSet<PathBuf>,
    pub stats: Mutex<Vec<PathBuf>>,
}

impl FakeFileSystem {
    pub fn with_paths(paths: &[&str]) -> Self {
        Self {
            paths: paths.iter().map(PathBuf::from).collect(),
            stats: Mutex::new(Vec::new()),
        }
    }

    pub fn stat_count(&self) -> usize {
        self.stats.lock().len()
    }
}

impl FileSystem for FakeFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.stats.lock().push(path.to_path_buf());
        self.paths.contains(path)
    }
}

//! Process inspector adapters.
//!
//! Platform-specific implementations of [`ProcessInspector`]. Raw tool output
//! is handed to `crate::parser`; this layer only runs the tools.

#[cfg(target_os = "macos")]
mod darwin;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "windows")]
mod windows;

#[cfg(unix)]
mod command;

#[cfg(unix)]
mod unix;

use crate::config::ToolPaths;
use crate::domain::{ProcessAttribute, SocketOwner};
use crate::error::Result;
use crate::ports::ProcessInspector;

/// The process inspector for the current platform.
pub struct PlatformInspector {
    #[cfg(target_os = "macos")]
    inner: darwin::DarwinInspector,

    #[cfg(target_os = "linux")]
    inner: linux::LinuxInspector,

    #[cfg(target_os = "windows")]
    inner: windows::WindowsInspector,
}

impl PlatformInspector {
    /// Create an inspector that finds its tools on `PATH`.
    pub fn new() -> Self {
        Self::with_tools(ToolPaths::default())
    }

    /// Create an inspector using the given tool programs.
    #[cfg_attr(target_os = "windows", allow(unused_variables))]
    pub fn with_tools(paths: ToolPaths) -> Self {
        Self {
            #[cfg(target_os = "macos")]
            inner: darwin::DarwinInspector::new(paths),

            #[cfg(target_os = "linux")]
            inner: linux::LinuxInspector::new(paths),

            #[cfg(target_os = "windows")]
            inner: windows::WindowsInspector::new(),
        }
    }
}

impl Default for PlatformInspector {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessInspector for PlatformInspector {
    async fn socket_owner(&self, port: u16) -> Result<SocketOwner> {
        self.inner.socket_owner(port).await
    }

    async fn attribute(&self, pid: u32, attribute: ProcessAttribute) -> Result<String> {
        self.inner.attribute(pid, attribute).await
    }

    async fn descriptor_ports(&self, pid: u32) -> Result<Vec<u16>> {
        self.inner.descriptor_ports(pid).await
    }
}

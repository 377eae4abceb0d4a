//! Windows process inspector.
//!
//! No lookups are available on Windows yet; the bind probe still works, so
//! scans report availability and mark occupied ports as unattributed.

use crate::domain::{ProcessAttribute, SocketOwner};
use crate::error::{Error, Result};
use crate::ports::ProcessInspector;

/// Windows-specific inspector.
pub struct WindowsInspector;

impl WindowsInspector {
    pub fn new() -> Self {
        Self
    }

    fn unsupported<T>() -> Result<T> {
        Err(Error::UnsupportedPlatform(
            "process lookups are not implemented on Windows".to_string(),
        ))
    }
}

impl Default for WindowsInspector {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessInspector for WindowsInspector {
    async fn socket_owner(&self, _port: u16) -> Result<SocketOwner> {
        Self::unsupported()
    }

    async fn attribute(&self, _pid: u32, _attribute: ProcessAttribute) -> Result<String> {
        Self::unsupported()
    }

    async fn descriptor_ports(&self, _pid: u32) -> Result<Vec<u16>> {
        Self::unsupported()
    }
}

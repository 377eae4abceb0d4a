//! macOS process inspector using lsof and ps.

use crate::config::ToolPaths;
use crate::domain::{ProcessAttribute, SocketOwner};
use crate::error::Result;
use crate::ports::ProcessInspector;

use super::unix::UnixTools;

/// macOS-specific inspector.
pub struct DarwinInspector {
    tools: UnixTools,
}

impl DarwinInspector {
    pub fn new(paths: ToolPaths) -> Self {
        Self {
            tools: UnixTools::new(paths),
        }
    }
}

impl ProcessInspector for DarwinInspector {
    async fn socket_owner(&self, port: u16) -> Result<SocketOwner> {
        self.tools.socket_owner(port).await
    }

    async fn attribute(&self, pid: u32, attribute: ProcessAttribute) -> Result<String> {
        match attribute {
            // No procfs on macOS; lsof reports the cwd descriptor.
            ProcessAttribute::WorkingDir => self.tools.working_dir(pid).await,
            _ => self.tools.ps_attribute(pid, attribute).await,
        }
    }

    async fn descriptor_ports(&self, pid: u32) -> Result<Vec<u16>> {
        self.tools.descriptor_ports(pid).await
    }
}

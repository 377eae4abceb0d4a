//! Linux process inspector.
//!
//! Uses lsof and ps like macOS, reads the working directory from `/proc`,
//! and falls back to `ss` when lsof is not installed.

use tracing::debug;

use crate::config::ToolPaths;
use crate::domain::{ProcessAttribute, SocketOwner};
use crate::error::{Error, Result};
use crate::parser::ss;
use crate::ports::ProcessInspector;

use super::command::run;
use super::unix::UnixTools;

/// Linux-specific inspector.
pub struct LinuxInspector {
    tools: UnixTools,
}

impl LinuxInspector {
    pub fn new(paths: ToolPaths) -> Self {
        Self {
            tools: UnixTools::new(paths),
        }
    }

    /// Executes: `ss -Htlnp sport = :<port>`
    ///
    /// Flags explained:
    /// -H, --no-header     Suppress header line
    /// -t, --tcp           display only TCP sockets
    /// -l, --listening     display listening sockets
    /// -n, --numeric       don't resolve service names
    /// -p, --processes     show process using socket
    async fn ss_socket_owner(&self, port: u16) -> Result<SocketOwner> {
        let filter = format!(":{}", port);
        let output = run(&self.tools.paths.ss, &["-Htlnp", "sport", "=", &filter]).await?;
        ss::parse_socket_owner(&output.stdout, port)
    }

    /// Executes: `ss -Htanp` and keeps the rows owned by `pid`.
    async fn ss_descriptor_ports(&self, pid: u32) -> Result<Vec<u16>> {
        let output = run(&self.tools.paths.ss, &["-Htanp"]).await?;
        ss::parse_process_ports(&output.stdout, pid)
    }

    async fn proc_working_dir(&self, pid: u32) -> Result<String> {
        let link = format!("/proc/{}/cwd", pid);
        let target = tokio::fs::read_link(&link).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::PermissionDenied => {
                Error::PermissionDenied(format!("Cannot read {}: {}", link, e))
            }
            _ => Error::Io(e),
        })?;
        Ok(target.to_string_lossy().into_owned())
    }
}

impl ProcessInspector for LinuxInspector {
    async fn socket_owner(&self, port: u16) -> Result<SocketOwner> {
        match self.tools.socket_owner(port).await {
            Err(Error::ToolNotFound(tool)) => {
                debug!(port = port, tool = %tool, "lsof unavailable, falling back to ss");
                self.ss_socket_owner(port).await
            }
            result => result,
        }
    }

    async fn attribute(&self, pid: u32, attribute: ProcessAttribute) -> Result<String> {
        match attribute {
            ProcessAttribute::WorkingDir => match self.proc_working_dir(pid).await {
                Ok(dir) => Ok(dir),
                Err(e) => {
                    debug!(pid = pid, error = %e, "procfs cwd unreadable, trying lsof");
                    self.tools.working_dir(pid).await
                }
            },
            _ => self.tools.ps_attribute(pid, attribute).await,
        }
    }

    async fn descriptor_ports(&self, pid: u32) -> Result<Vec<u16>> {
        match self.tools.descriptor_ports(pid).await {
            Err(Error::ToolNotFound(tool)) => {
                debug!(pid = pid, tool = %tool, "lsof unavailable, falling back to ss");
                self.ss_descriptor_ports(pid).await
            }
            result => result,
        }
    }
}

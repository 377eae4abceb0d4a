//! lsof and ps lookups shared by the macOS and Linux inspectors.

use tracing::debug;

use super::command::run;
use crate::config::ToolPaths;
use crate::domain::{ProcessAttribute, SocketOwner};
use crate::error::{Error, Result};
use crate::parser::{self, lsof};

/// lsof/ps front-end with configurable program paths.
#[derive(Debug, Clone)]
pub(super) struct UnixTools {
    pub paths: ToolPaths,
}

impl UnixTools {
    pub fn new(paths: ToolPaths) -> Self {
        Self { paths }
    }

    /// Executes: `lsof -i :<port> -P -n`
    ///
    /// Flags:
    /// - -i :<port>: Internet files on this port
    /// - -P: numeric ports
    /// - -n: no host name resolution
    pub async fn socket_owner(&self, port: u16) -> Result<SocketOwner> {
        let filter = format!(":{}", port);
        let output = run(&self.paths.lsof, &["-i", &filter, "-P", "-n"]).await?;

        // lsof exits with 1 when nothing matched; the parser reports that.
        lsof::parse_socket_owner(&output.stdout, port)
    }

    /// Executes: `ps -p <pid> -o <field>=`
    ///
    /// The trailing `=` suppresses the header, so the output is the bare value.
    pub async fn ps_attribute(&self, pid: u32, attribute: ProcessAttribute) -> Result<String> {
        let Some(field) = attribute.ps_field() else {
            return Err(Error::UnsupportedPlatform(format!("ps cannot report {}", attribute)));
        };

        let pid_arg = pid.to_string();
        let format = format!("{}=", field);
        let output = run(&self.paths.ps, &["-p", &pid_arg, "-o", &format]).await?;

        if !output.status.success() {
            return Err(Error::CommandFailed(format!(
                "ps failed for pid {} with status: {}",
                pid, output.status
            )));
        }

        parser::single_value(&output.stdout)
            .ok_or_else(|| Error::ParseError(format!("Empty {} for pid {}", attribute, pid)))
    }

    /// Executes: `lsof -a -p <pid> -d cwd -Fn`
    pub async fn working_dir(&self, pid: u32) -> Result<String> {
        let pid_arg = pid.to_string();
        let output = run(&self.paths.lsof, &["-a", "-p", &pid_arg, "-d", "cwd", "-Fn"]).await?;

        lsof::parse_cwd(&output.stdout)
            .ok_or_else(|| Error::ParseError(format!("No working directory for pid {}", pid)))
    }

    /// Executes: `lsof -a -p <pid> -i -P -n`
    ///
    /// `-a` ANDs the pid and internet filters; without it lsof lists every
    /// internet socket on the system as well.
    pub async fn descriptor_ports(&self, pid: u32) -> Result<Vec<u16>> {
        let pid_arg = pid.to_string();
        let output = run(&self.paths.lsof, &["-a", "-p", &pid_arg, "-i", "-P", "-n"]).await?;

        let ports = lsof::parse_descriptor_ports(&output.stdout);
        debug!(pid = pid, count = ports.len(), "Extracted descriptor ports");
        Ok(ports)
    }
}

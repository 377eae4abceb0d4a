//! Per-process detail lookups for an occupied port.

use tracing::debug;

use crate::domain::{ProcessAttribute, ProcessDetails, UNKNOWN};
use crate::ports::ProcessInspector;

/// Fetch owner, command line, resident memory and start time of `pid`.
///
/// Each attribute is looked up on its own; one that fails is recorded as
/// `unknown` and the others are still filled in. Never fails as a whole.
pub async fn enrich<I: ProcessInspector>(inspector: &I, pid: u32) -> ProcessDetails {
    let user = lookup(inspector, pid, ProcessAttribute::User).await;
    let command_line = lookup(inspector, pid, ProcessAttribute::CommandLine).await;
    let memory_usage = match inspector.attribute(pid, ProcessAttribute::ResidentMemory).await {
        Ok(raw) => normalize_memory(&raw),
        Err(e) => {
            debug!(pid = pid, error = %e, "Resident memory lookup failed");
            UNKNOWN.to_string()
        }
    };
    let start_time = lookup(inspector, pid, ProcessAttribute::StartTime).await;

    ProcessDetails {
        user,
        command_line,
        memory_usage,
        start_time,
    }
}

async fn lookup<I: ProcessInspector>(inspector: &I, pid: u32, attribute: ProcessAttribute) -> String {
    match inspector.attribute(pid, attribute).await {
        Ok(value) => value,
        Err(e) => {
            debug!(pid = pid, attribute = %attribute, error = %e, "Attribute lookup failed");
            UNKNOWN.to_string()
        }
    }
}

/// Convert a resident-memory reading in kilobytes to whole megabytes.
///
/// Values that are not a plain number are passed through with a `KB` suffix.
///
/// ```
/// use portscout_core::application::normalize_memory;
///
/// assert_eq!(normalize_memory("204800"), "200MB");
/// assert_eq!(normalize_memory("xyz"), "xyzKB");
/// ```
pub fn normalize_memory(raw: &str) -> String {
    let raw = raw.trim();
    match raw.parse::<u64>() {
        Ok(kb) => format!("{}MB", kb / 1024),
        Err(_) => format!("{}KB", raw),
    }
}

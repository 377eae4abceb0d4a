//! Port status data structure.

use serde::{Deserialize, Serialize};

use super::{ProcessDetails, SocketOwner};

/// Result of probing a single port.
///
/// A status is created once per probed port and never changes afterwards.
/// Process fields are only filled in when the port is occupied and the owner
/// could be attributed; `error` explains why attribution (or the probe
/// itself) did not complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortStatus {
    /// The probed port number.
    pub port: u16,

    /// True iff a test listener could be bound on the port.
    pub is_available: bool,

    /// Name of the process holding the port.
    pub process_name: String,

    /// Process ID of the holder, `0` when unknown.
    pub pid: u32,

    /// Username of the process owner.
    pub user: String,

    /// Full command line of the holder.
    pub command_line: String,

    /// Resident memory, e.g. "200MB".
    pub memory_usage: String,

    /// Process start time as reported by the OS.
    pub start_time: String,

    /// Why the probe or attribution failed, if it did.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PortStatus {
    fn empty(port: u16, is_available: bool) -> Self {
        Self {
            port,
            is_available,
            process_name: String::new(),
            pid: 0,
            user: String::new(),
            command_line: String::new(),
            memory_usage: String::new(),
            start_time: String::new(),
            error: None,
        }
    }

    /// A port that could be bound.
    pub fn available(port: u16) -> Self {
        Self::empty(port, true)
    }

    /// An occupied port whose owner was identified.
    pub fn occupied(port: u16, owner: SocketOwner, details: ProcessDetails) -> Self {
        Self {
            port,
            is_available: false,
            process_name: owner.process_name,
            pid: owner.pid,
            user: details.user,
            command_line: details.command_line,
            memory_usage: details.memory_usage,
            start_time: details.start_time,
            error: None,
        }
    }

    /// An occupied port whose owner could not be identified.
    pub fn unattributed(port: u16, error: impl std::fmt::Display) -> Self {
        Self {
            error: Some(error.to_string()),
            ..Self::empty(port, false)
        }
    }

    /// A port that could not be probed at all.
    ///
    /// Never reported as available; it carries the same fields as an
    /// unattributed port, with `error` saying why the probe was skipped.
    pub fn failed(port: u16, error: impl std::fmt::Display) -> Self {
        Self::unattributed(port, error)
    }

    /// Whether some other process holds this port.
    pub fn is_conflict(&self) -> bool {
        !self.is_available
    }

    /// Whether the owning process was identified.
    pub fn is_attributed(&self) -> bool {
        !self.is_available && self.pid != 0
    }
}

impl std::fmt::Display for PortStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_available {
            write!(f, ":{} available", self.port)
        } else if self.is_attributed() {
            write!(f, ":{} occupied by {} (PID: {})", self.port, self.process_name, self.pid)
        } else {
            write!(
                f,
                ":{} occupied ({})",
                self.port,
                self.error.as_deref().unwrap_or("owner unknown")
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> ProcessDetails {
        ProcessDetails {
            user: "alice".to_string(),
            command_line: "python app.py".to_string(),
            memory_usage: "200MB".to_string(),
            start_time: "Mon Oct 19 09:12:01 2026".to_string(),
        }
    }

    #[test]
    fn test_available_has_no_process_fields() {
        let status = PortStatus::available(3000);
        assert!(status.is_available);
        assert!(!status.is_conflict());
        assert!(status.process_name.is_empty());
        assert_eq!(status.pid, 0);
        assert!(status.user.is_empty());
        assert!(status.error.is_none());
    }

    #[test]
    fn test_occupied() {
        let owner = SocketOwner::new("python", 4242);
        let status = PortStatus::occupied(8501, owner, details());
        assert!(!status.is_available);
        assert!(status.is_attributed());
        assert_eq!(status.process_name, "python");
        assert_eq!(status.pid, 4242);
        assert_eq!(status.memory_usage, "200MB");
    }

    #[test]
    fn test_unattributed_keeps_error() {
        let status = PortStatus::unattributed(5432, "Command not found: lsof");
        assert!(status.is_conflict());
        assert!(!status.is_attributed());
        assert_eq!(status.error.as_deref(), Some("Command not found: lsof"));
    }

    #[test]
    fn test_failed_is_never_available() {
        let status = PortStatus::failed(0, "Invalid port: 0");
        assert!(!status.is_available);
        assert!(!status.is_attributed());
        assert_eq!(status, PortStatus::unattributed(0, "Invalid port: 0"));
        assert_eq!(status.to_string(), ":0 occupied (Invalid port: 0)");
    }

    #[test]
    fn test_display() {
        assert_eq!(PortStatus::available(3000).to_string(), ":3000 available");
        let status = PortStatus::occupied(8501, SocketOwner::new("python", 4242), details());
        assert_eq!(status.to_string(), ":8501 occupied by python (PID: 4242)");
    }

    #[test]
    fn test_json_omits_missing_error() {
        let json = serde_json::to_string(&PortStatus::available(3000)).unwrap();
        assert!(json.contains("\"isAvailable\":true"));
        assert!(!json.contains("error"));
    }
}

//! Raw process records returned by the OS lookups.

use serde::{Deserialize, Serialize};

/// Placeholder stored in a field whose lookup failed.
pub const UNKNOWN: &str = "unknown";

/// The process holding a socket, as read from a socket listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocketOwner {
    pub process_name: String,
    pub pid: u32,
}

impl SocketOwner {
    pub fn new(process_name: impl Into<String>, pid: u32) -> Self {
        Self {
            process_name: process_name.into(),
            pid,
        }
    }
}

/// Per-process attributes gathered for an occupied port.
///
/// Every field holds either the value reported by the OS or [`UNKNOWN`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDetails {
    pub user: String,
    pub command_line: String,
    pub memory_usage: String,
    pub start_time: String,
}

impl Default for ProcessDetails {
    fn default() -> Self {
        Self {
            user: UNKNOWN.to_string(),
            command_line: UNKNOWN.to_string(),
            memory_usage: UNKNOWN.to_string(),
            start_time: UNKNOWN.to_string(),
        }
    }
}

/// Selector for a single per-process attribute lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessAttribute {
    /// Short executable name.
    Name,
    /// Owning user.
    User,
    /// Full command line.
    CommandLine,
    /// Resident set size in kilobytes.
    ResidentMemory,
    /// Start timestamp.
    StartTime,
    /// Current working directory.
    WorkingDir,
}

impl ProcessAttribute {
    /// The `ps -o` column for this attribute, if `ps` can report it.
    pub fn ps_field(&self) -> Option<&'static str> {
        match self {
            ProcessAttribute::Name => Some("comm"),
            ProcessAttribute::User => Some("user"),
            ProcessAttribute::CommandLine => Some("command"),
            ProcessAttribute::ResidentMemory => Some("rss"),
            ProcessAttribute::StartTime => Some("lstart"),
            ProcessAttribute::WorkingDir => None,
        }
    }
}

impl std::fmt::Display for ProcessAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ProcessAttribute::Name => "name",
            ProcessAttribute::User => "user",
            ProcessAttribute::CommandLine => "command line",
            ProcessAttribute::ResidentMemory => "resident memory",
            ProcessAttribute::StartTime => "start time",
            ProcessAttribute::WorkingDir => "working directory",
        };
        f.write_str(name)
    }
}

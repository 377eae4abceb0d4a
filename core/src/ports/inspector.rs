//! Process inspection port (interface).

use crate::domain::{ProcessAttribute, SocketOwner};
use crate::error::Result;

/// Port for looking up processes and their sockets.
///
/// This trait defines the interface over the OS process-listing tools.
/// Implementations handle platform-specific details (lsof, ps, ss, /proc).
pub trait ProcessInspector: Send + Sync {
    /// Identify the process holding `port`.
    ///
    /// Fails with `NoProcessFound` when the listing has no usable row, and
    /// with `CommandFailed`/`ToolNotFound`/`PermissionDenied` when the lookup
    /// tool itself could not be run.
    fn socket_owner(
        &self,
        port: u16,
    ) -> impl std::future::Future<Output = Result<SocketOwner>> + Send;

    /// Read a single attribute of a process.
    fn attribute(
        &self,
        pid: u32,
        attribute: ProcessAttribute,
    ) -> impl std::future::Future<Output = Result<String>> + Send;

    /// List every port the process has an open network descriptor on.
    ///
    /// Unparseable rows are skipped; only a failure to run the tool is an error.
    fn descriptor_ports(
        &self,
        pid: u32,
    ) -> impl std::future::Future<Output = Result<Vec<u16>>> + Send;
}

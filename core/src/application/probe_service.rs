//! Port probing application service.

use tracing::{debug, warn};

use crate::adapters::{PlatformInspector, TcpBindProbe};
use crate::config::ToolPaths;
use crate::domain::PortStatus;
use crate::error::Error;
use crate::ports::{BindProbe, ProcessInspector};

use super::enricher::enrich;

/// Application service for checking ports.
///
/// A port is first bind-tested; only when the bind fails is the inspector
/// asked who holds it. Both collaborators are injected so the service can be
/// tested without touching the network or running tools.
pub struct PortProbeService<P: BindProbe, I: ProcessInspector> {
    probe: P,
    inspector: I,
}

impl PortProbeService<TcpBindProbe, PlatformInspector> {
    /// Service backed by real sockets and the platform's lookup tools.
    pub fn for_platform(paths: ToolPaths) -> Self {
        Self::new(TcpBindProbe::new(), PlatformInspector::with_tools(paths))
    }
}

impl<P: BindProbe, I: ProcessInspector> PortProbeService<P, I> {
    /// Create a new port service with the given collaborators.
    pub fn new(probe: P, inspector: I) -> Self {
        Self { probe, inspector }
    }

    /// Check a single port.
    ///
    /// Never fails: lookup problems are recorded in `PortStatus::error`.
    pub async fn check_port(&self, port: u16) -> PortStatus {
        if port == 0 {
            return PortStatus::failed(port, Error::InvalidPort("0 is not a valid port".to_string()));
        }

        if self.probe.is_bindable(port).await {
            debug!(port = port, "Port available");
            return PortStatus::available(port);
        }

        let owner = match self.inspector.socket_owner(port).await {
            Ok(owner) => owner,
            Err(e) => {
                warn!(port = port, error = %e, "Could not attribute occupied port");
                return PortStatus::unattributed(port, e);
            }
        };

        debug!(port = port, pid = owner.pid, process = %owner.process_name, "Port occupied");
        let details = enrich(&self.inspector, owner.pid).await;
        PortStatus::occupied(port, owner, details)
    }

    /// Check ports one at a time, in the given order.
    ///
    /// Returns exactly one status per input port, in the same order.
    pub async fn scan(&self, ports: &[u16]) -> Vec<PortStatus> {
        let mut statuses = Vec::with_capacity(ports.len());
        for &port in ports {
            statuses.push(self.check_port(port).await);
        }
        statuses
    }
}

//! TCP bind-test adapter.

use std::io;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use tokio::net::TcpListener;
use tracing::debug;

use crate::ports::BindProbe;

/// Probes a port by binding a listener on all interfaces.
///
/// The IPv6 wildcard is tried first so listeners bound only to `[::1]` or
/// another IPv6 address are seen, then the IPv4 wildcard. Each listener is
/// dropped before the next bind. If the host has no IPv6 support the IPv4
/// result alone decides.
#[derive(Debug, Default, Clone, Copy)]
pub struct TcpBindProbe;

impl TcpBindProbe {
    pub fn new() -> Self {
        Self
    }
}

async fn bind_once(addr: IpAddr, port: u16) -> io::Result<()> {
    // The listener is dropped here, releasing the port right away.
    TcpListener::bind((addr, port)).await.map(drop)
}

impl BindProbe for TcpBindProbe {
    async fn is_bindable(&self, port: u16) -> bool {
        match bind_once(IpAddr::V6(Ipv6Addr::UNSPECIFIED), port).await {
            Ok(()) => {}
            Err(e) if matches!(e.kind(), io::ErrorKind::AddrInUse | io::ErrorKind::PermissionDenied) => {
                debug!(port = port, error = %e, "IPv6 bind test failed");
                return false;
            }
            Err(e) => debug!(port = port, error = %e, "IPv6 unavailable, testing IPv4 only"),
        }

        match bind_once(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port).await {
            Ok(()) => true,
            Err(e) => {
                debug!(port = port, error = %e, "Bind test failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_free_port_is_bindable() {
        let port = {
            let held = TcpListener::bind((Ipv4Addr::UNSPECIFIED, 0)).await.unwrap();
            held.local_addr().unwrap().port()
        };

        assert!(TcpBindProbe::new().is_bindable(port).await);
    }

    #[tokio::test]
    async fn test_held_port_is_not_bindable() {
        let held = TcpListener::bind((Ipv4Addr::UNSPECIFIED, 0)).await.unwrap();
        let port = held.local_addr().unwrap().port();

        assert!(!TcpBindProbe::new().is_bindable(port).await);
        drop(held);
    }

    // BSD stacks let a wildcard bind coexist with a specific-address
    // listener under SO_REUSEADDR, so these two only hold on Linux.
    #[cfg(target_os = "linux")]
    #[tokio::test]
    async fn test_loopback_ipv4_listener_is_seen() {
        let held = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
        let port = held.local_addr().unwrap().port();

        assert!(!TcpBindProbe::new().is_bindable(port).await);
        drop(held);
    }

    #[cfg(target_os = "linux")]
    #[tokio::test]
    async fn test_ipv6_only_listener_is_seen() {
        // Hosts without IPv6 cannot hold such a listener at all.
        let Ok(held) = TcpListener::bind((Ipv6Addr::LOCALHOST, 0)).await else {
            return;
        };
        let port = held.local_addr().unwrap().port();

        assert!(!TcpBindProbe::new().is_bindable(port).await);
        drop(held);
    }

    #[tokio::test]
    async fn test_probe_releases_port() {
        let port = {
            let held = TcpListener::bind((Ipv4Addr::UNSPECIFIED, 0)).await.unwrap();
            held.local_addr().unwrap().port()
        };

        let probe = TcpBindProbe::new();
        assert!(probe.is_bindable(port).await);
        assert!(probe.is_bindable(port).await);
        assert!(TcpListener::bind((Ipv4Addr::UNSPECIFIED, port)).await.is_ok());
    }
}

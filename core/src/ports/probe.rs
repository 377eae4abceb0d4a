//! Bind-test port (interface).

/// Port for testing whether a TCP port can be acquired.
pub trait BindProbe: Send + Sync {
    /// Try to bind a listener on `port` and release it immediately.
    ///
    /// Returns `true` if the bind succeeded. A failure does not say whether
    /// the port is in use or merely privileged.
    fn is_bindable(&self, port: u16) -> impl std::future::Future<Output = bool> + Send;
}

//! Adapters layer - External system implementations.
//!
//! This module contains implementations of the port traits defined in `ports`.
//! Each adapter handles communication with the operating system.

pub mod filesystem;
pub mod inspector;
pub mod probe;

// Re-export main types for convenience
pub use filesystem::OsFileSystem;
pub use inspector::PlatformInspector;
pub use probe::TcpBindProbe;

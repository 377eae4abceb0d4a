//! Ports layer - Trait definitions (interfaces).
//!
//! This module defines the capabilities the application layer needs from the
//! operating system. Implementations live in `adapters`; tests supply fakes.

mod filesystem;
mod inspector;
mod probe;

pub use filesystem::FileSystem;
pub use inspector::ProcessInspector;
pub use probe::BindProbe;

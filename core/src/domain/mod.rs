//! Domain layer - Pure data models and classification rules.
//!
//! This module contains the records produced by a scan or an analysis.
//! These types have no I/O dependencies and can be tested in isolation.

mod analysis;
mod process;
mod status;
pub mod technology;

// Re-export all domain types
pub use analysis::{ProcessAnalysis, ProjectRoot, PROJECT_MARKERS};
pub use process::{ProcessAttribute, ProcessDetails, SocketOwner, UNKNOWN};
pub use status::PortStatus;
pub use technology::{classify, ServiceType, Technology, TECHNOLOGY_RULES};

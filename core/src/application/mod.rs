//! Application layer - Use case services.
//!
//! This module contains application services that orchestrate
//! domain logic and adapter interactions.
//!
//! Services are designed to be thin orchestrators that:
//! - Accept domain types as inputs
//! - Use ports (traits) for external dependencies
//! - Return domain types as outputs

mod analyzer;
mod enricher;
mod probe_service;
mod project_locator;

#[cfg(test)]
pub(crate) mod fakes;

pub use analyzer::ProcessAnalyzer;
pub use enricher::{enrich, normalize_memory};
pub use probe_service::PortProbeService;
pub use project_locator::locate_project_root;

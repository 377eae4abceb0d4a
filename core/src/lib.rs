//! Portscout Core Library
//!
//! Port probing and process attribution for local development machines.
//! Provides functionality to:
//! - Test whether TCP ports can be bound
//! - Identify the process holding an occupied port
//! - Classify a process by technology and service type
//! - Locate the project a process was started from
//! - Manage user configuration (default output format, tool paths)
//!
//! # Architecture
//! This library follows hexagonal architecture (ports & adapters):
//! - `domain`: Pure business logic and data models
//! - `ports`: Trait definitions (interfaces)
//! - `adapters`: External system implementations
//! - `application`: Use case services
//! - `parser`: Pure parsers for tool output
//!
//! # Platform Support
//! - macOS: Uses `lsof` and `ps` commands
//! - Linux: Uses `lsof` and `ps`, falling back to `ss` and `/proc`
//! - Windows: Bind tests only; process attribution is not supported

// Hexagonal architecture layers
pub mod adapters;
pub mod application;
pub mod domain;
pub mod parser;
pub mod ports;

pub mod config;
pub mod error;

// Re-export domain types (primary API)
pub use domain::{classify, PortStatus, ProcessAnalysis, ProjectRoot, ServiceType, Technology};

// Re-export other commonly used types
pub use adapters::{OsFileSystem, PlatformInspector, TcpBindProbe};
pub use application::{PortProbeService, ProcessAnalyzer};
pub use config::{Config, ConfigStore, OutputFormat, ToolPaths};
pub use error::{Error, Result};

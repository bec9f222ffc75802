//! Collaborator accessors for the resolvers.
//!
//! This module provides the injectable seams the resolvers depend on:
//! - Running external commands and capturing text ([`ProcessRunner`])
//! - Querying the adapter instrumentation store ([`AdapterQuery`])
//! - Reading the NIC binding order from the registry ([`RegistryReader`])
//! - Emitting warnings ([`WarnLogger`])
//! - Platform-specific real implementations ([`platform`])

mod log;
pub mod platform;
mod process;
mod query;
mod registry;

pub use log::{TracingWarn, WarnLogger};
pub use process::{ProcessCommand, ProcessError, ProcessRunner, SystemProcessRunner};
pub use query::{AdapterQuery, AdapterRecord, QueryError};
pub use registry::{RegistryError, RegistryReader};

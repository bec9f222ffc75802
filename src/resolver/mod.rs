//! Platform resolvers behind one shared interface.
//!
//! Each platform gets its own implementation of [`MacResolver`]:
//! - [`UnixResolver`] parses routing and interface-configuration command
//!   output on BSD-style systems.
//! - [`WindowsResolver`] ranks adapter records from the instrumentation
//!   store against the registry binding order.
//!
//! [`platform_resolver`] picks the implementation for the running platform
//! once at startup.

mod unix;
mod windows;

pub use unix::{InterfaceName, NO_DEFAULT_ROUTE_WARNING, UnixResolver};
pub use windows::WindowsResolver;

use thiserror::Error;

use crate::mac::MacAddress;
use crate::system::{ProcessError, QueryError, RegistryError};

/// Error type for resolution failures.
///
/// Only a broken collaborator surfaces here; a host without a resolvable
/// address is a normal `Ok(None)` outcome.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// An external command could not be run.
    #[error("External command failed: {0}")]
    Process(#[from] ProcessError),

    /// The adapter instrumentation store could not be queried.
    #[error("Adapter query failed: {0}")]
    Query(#[from] QueryError),

    /// The registry binding order could not be read.
    #[error("Registry read failed: {0}")]
    Registry(#[from] RegistryError),
}

/// Shared interface over the platform resolvers.
pub trait MacResolver: Send + Sync {
    /// Resolves the MAC address of the host's primary network interface.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] only when a collaborator accessor fails;
    /// finding no address is `Ok(None)`.
    fn macaddress(&self) -> Result<Option<MacAddress>, ResolveError>;
}

/// Builds the resolver matching the running platform.
#[cfg(windows)]
#[must_use]
pub fn platform_resolver() -> Box<dyn MacResolver> {
    use crate::system::platform::{HklmRegistry, IpHelperQuery};

    Box::new(WindowsResolver::new(IpHelperQuery::new(), HklmRegistry::new()))
}

/// Builds the resolver matching the running platform.
#[cfg(not(windows))]
#[must_use]
pub fn platform_resolver() -> Box<dyn MacResolver> {
    use crate::system::{SystemProcessRunner, TracingWarn};

    Box::new(UnixResolver::new(
        SystemProcessRunner::new(),
        TracingWarn::new(),
    ))
}

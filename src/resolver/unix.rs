//! MAC address resolution on BSD-style Unix systems.
//!
//! Two lookups, no retries: the routing table names the default interface,
//! and that interface's configuration output carries the hardware address.
//! Without a default route the resolver warns once and takes the first
//! non-loopback interface block from the full listing instead.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::{MacResolver, ResolveError};
use crate::mac::MacAddress;
use crate::system::{ProcessCommand, ProcessError, ProcessRunner, WarnLogger};

#[cfg(test)]
#[path = "unix_tests.rs"]
mod tests;

/// Warning emitted when the fallback scan replaces the default-route path.
pub const NO_DEFAULT_ROUTE_WARNING: &str =
    "Could not find a default route. Using first non-loopback interface";

/// Token index of the Netif column in a BSD `netstat -rn` route line.
const NETIF_COLUMN: usize = 5;

/// Matches a hardware-address token: `ether`/`lladdr` followed by six
/// colon-separated one- or two-digit hex octets.
static HARDWARE_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:ether|lladdr)\s+([0-9A-Fa-f]{1,2}(?::[0-9A-Fa-f]{1,2}){5})")
        .expect("hardware address pattern is valid")
});

/// Matches an interface block header line (`en0: flags=...`).
static BLOCK_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^\s:]+):\s*flags").expect("block header pattern is valid"));

/// An opaque Unix network interface name.
///
/// Empty is a valid value meaning "no default route".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InterfaceName(String);

impl InterfaceName {
    /// Creates an interface name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for the "no default route" sentinel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for InterfaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// BSD/Darwin-style [`MacResolver`] over external command output.
///
/// Both collaborators are injected so tests substitute fakes without
/// touching global state.
#[derive(Debug)]
pub struct UnixResolver<R, L> {
    runner: R,
    logger: L,
}

impl<R: ProcessRunner, L: WarnLogger> UnixResolver<R, L> {
    /// Creates a resolver over the given process runner and warn logger.
    #[must_use]
    pub const fn new(runner: R, logger: L) -> Self {
        Self { runner, logger }
    }

    /// Determines the interface named by the first default-route line in
    /// the routing table output.
    ///
    /// An empty name is the normal "no default route" signal, not an
    /// error; the macaddress path falls back on it.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError`] when the routing command cannot be run.
    pub fn default_interface(&self) -> Result<InterfaceName, ProcessError> {
        let output = self.runner.run(&ProcessCommand::route_table())?;
        Ok(default_interface_in(&output))
    }

    fn scoped_macaddress(&self, interface: &InterfaceName) -> Result<Option<MacAddress>, ProcessError> {
        let command = ProcessCommand::interface_config(Some(interface.as_str()));
        let output = self.runner.run(&command)?;
        Ok(first_hardware_address(&output))
    }

    fn fallback_macaddress(&self) -> Result<Option<MacAddress>, ProcessError> {
        self.logger.warn(NO_DEFAULT_ROUTE_WARNING);
        let output = self.runner.run(&ProcessCommand::interface_config(None))?;
        Ok(first_non_loopback_address(&output))
    }
}

impl<R: ProcessRunner, L: WarnLogger> MacResolver for UnixResolver<R, L> {
    fn macaddress(&self) -> Result<Option<MacAddress>, ResolveError> {
        let interface = self.default_interface()?;
        if interface.is_empty() {
            return Ok(self.fallback_macaddress()?);
        }
        Ok(self.scoped_macaddress(&interface)?)
    }
}

/// Extracts the interface name from the first default-route line.
///
/// A default line missing the Netif column is non-matching rather than an
/// error; any later default line may still match.
fn default_interface_in(route_output: &str) -> InterfaceName {
    let name = route_output
        .lines()
        .filter(|line| line.starts_with("default"))
        .find_map(|line| line.split_whitespace().nth(NETIF_COLUMN))
        .unwrap_or("");
    InterfaceName::new(name)
}

/// Extracts and normalizes the first hardware-address token found.
fn first_hardware_address(output: &str) -> Option<MacAddress> {
    let captures = HARDWARE_ADDRESS.captures(output)?;
    MacAddress::standardize(captures.get(1).map(|token| token.as_str()))
}

/// Scans interface blocks in output order for the first non-loopback
/// block containing a hardware address.
///
/// Loopback-named blocks are skipped entirely, address or not; output
/// order is authoritative, so the first qualifying block wins.
fn first_non_loopback_address(output: &str) -> Option<MacAddress> {
    let mut in_loopback_block = false;

    for line in output.lines() {
        if let Some(captures) = BLOCK_HEADER.captures(line) {
            in_loopback_block = captures
                .get(1)
                .is_some_and(|name| is_loopback_name(name.as_str()));
        }
        if in_loopback_block {
            continue;
        }
        if let Some(mac) = first_hardware_address(line) {
            return Some(mac);
        }
    }

    None
}

/// Returns true for loopback interface names (`lo`, `lo0`, ...).
fn is_loopback_name(name: &str) -> bool {
    name.strip_prefix("lo")
        .is_some_and(|rest| rest.chars().all(|c| c.is_ascii_digit()))
}

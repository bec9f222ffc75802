//! MAC address resolution on Windows via adapter records.
//!
//! Windows can expose several adapters bound to the same logical
//! connection. The IP connection metric reflects what the OS itself would
//! route through, and the registry binding order is its secondary
//! tie-break for equally-metric adapters; ranking by both in that order
//! reproduces OS adapter selection.

use super::{MacResolver, ResolveError};
use crate::mac::MacAddress;
use crate::system::{AdapterQuery, AdapterRecord, RegistryReader};

#[cfg(test)]
#[path = "windows_tests.rs"]
mod tests;

/// Windows [`MacResolver`] over injected instrumentation and registry
/// accessors.
#[derive(Debug)]
pub struct WindowsResolver<Q, R> {
    query: Q,
    registry: R,
}

impl<Q: AdapterQuery, R: RegistryReader> WindowsResolver<Q, R> {
    /// Creates a resolver over the given adapter query and registry reader.
    #[must_use]
    pub const fn new(query: Q, registry: R) -> Self {
        Self { query, registry }
    }
}

impl<Q: AdapterQuery, R: RegistryReader> MacResolver for WindowsResolver<Q, R> {
    fn macaddress(&self) -> Result<Option<MacAddress>, ResolveError> {
        let binding_order = self.registry.nic_binding_order()?;
        let records = self.query.network_adapters()?;

        // Records without a MAC are unbound; they never error the call.
        // A single survivor trivially wins the ranking.
        let best = records
            .iter()
            .filter(|record| record.is_active())
            .min_by_key(|record| rank(record, &binding_order));

        Ok(best.and_then(|record| MacAddress::standardize(record.mac_address.as_deref())))
    }
}

/// Two-level rank: ascending metric, then ascending binding-order position.
///
/// A record with no metric, or whose setting ID does not appear in the
/// binding list, sorts after all that have one. Ties beyond both levels
/// keep query order (`min_by_key` returns the first minimum).
fn rank(record: &AdapterRecord, binding_order: &[String]) -> (u32, usize) {
    let metric = record.ip_connection_metric.unwrap_or(u32::MAX);
    let position = record
        .setting_id
        .as_deref()
        .and_then(|id| binding_order.iter().position(|entry| entry.contains(id)))
        .unwrap_or(usize::MAX);
    (metric, position)
}

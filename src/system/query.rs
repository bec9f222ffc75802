//! Adapter instrumentation query trait and record type.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for adapter instrumentation queries.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Windows API call failed.
    #[cfg(windows)]
    #[error("Windows API error: {0}")]
    WindowsApi(#[from] windows::core::Error),

    /// Platform-specific error with a generic message.
    #[error("Platform error: {message}")]
    Platform {
        /// Error message describing the platform-specific failure.
        message: String,
    },
}

/// One queried network adapter.
///
/// Field names mirror the instrumentation store's spellings so records
/// deserialize directly from its output. A missing `MACAddress` signals an
/// inactive, unbound adapter. Records are built fresh per query and never
/// persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterRecord {
    /// Hardware address; absent for inactive adapters.
    #[serde(rename = "MACAddress")]
    pub mac_address: Option<String>,
    /// Routing-preference weight; lower is preferred by the OS.
    #[serde(rename = "IPConnectionMetric")]
    pub ip_connection_metric: Option<u32>,
    /// GUID-shaped identifier matched against the binding-order list.
    #[serde(rename = "SettingID")]
    pub setting_id: Option<String>,
}

impl AdapterRecord {
    /// Returns true if the adapter is active (bound to a device).
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.mac_address.is_some()
    }
}

/// Trait for querying the adapter instrumentation store.
///
/// The "is a network adapter" filter is accessor-defined; implementations
/// return every adapter the store considers a network adapter, in store
/// order. The resolver filters and ranks the records. The real Windows
/// implementation is [`crate::system::platform::IpHelperQuery`].
pub trait AdapterQuery: Send + Sync {
    /// Queries all network adapter records.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] when the underlying store cannot be queried;
    /// an adapter with missing fields is a normal record, never an error.
    fn network_adapters(&self) -> Result<Vec<AdapterRecord>, QueryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_without_mac_is_inactive() {
        let record = AdapterRecord::default();
        assert!(!record.is_active());
    }

    #[test]
    fn record_with_mac_is_active() {
        let record = AdapterRecord {
            mac_address: Some("00:0C:29:0C:9E:9F".to_string()),
            ..AdapterRecord::default()
        };
        assert!(record.is_active());
    }

    #[test]
    fn deserializes_store_shaped_fields() {
        let json = r#"{
            "MACAddress": "00:0C:29:0C:9E:9F",
            "IPConnectionMetric": 10,
            "SettingID": "{4AE6B55C-6DD6-427D-A5BB-13535D4BE926}"
        }"#;

        let record: AdapterRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.mac_address.as_deref(), Some("00:0C:29:0C:9E:9F"));
        assert_eq!(record.ip_connection_metric, Some(10));
        assert_eq!(
            record.setting_id.as_deref(),
            Some("{4AE6B55C-6DD6-427D-A5BB-13535D4BE926}")
        );
    }

    #[test]
    fn missing_store_fields_deserialize_as_absent() {
        let record: AdapterRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record, AdapterRecord::default());
    }

    #[test]
    fn null_mac_deserializes_as_absent() {
        let record: AdapterRecord = serde_json::from_str(r#"{"MACAddress": null}"#).unwrap();
        assert!(!record.is_active());
    }
}

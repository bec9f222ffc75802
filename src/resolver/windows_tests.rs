//! Tests for the Windows resolver against fake accessors.

use std::sync::Mutex;

use super::*;
use crate::resolver::ResolveError;
use crate::system::{QueryError, RegistryError};

const SETTING_ID_0: &str = "{4AE6B55C-6DD6-427D-A5BB-13535D4BE926}";
const SETTING_ID_1: &str = "{38762816-7957-42AC-8DAA-3B08D0C857C7}";

/// Binding order listing device 0 before device 1.
fn nic_bindings() -> Vec<String> {
    vec![
        format!("\\Device\\{SETTING_ID_0}"),
        format!("\\Device\\{SETTING_ID_1}"),
    ]
}

fn adapter(
    mac: Option<&str>,
    metric: Option<u32>,
    setting_id: Option<&str>,
) -> AdapterRecord {
    AdapterRecord {
        mac_address: mac.map(str::to_string),
        ip_connection_metric: metric,
        setting_id: setting_id.map(str::to_string),
    }
}

// ============================================================================
// Fakes
// ============================================================================

/// Fake query handing out one queued result.
struct FakeQuery {
    result: Mutex<Option<Result<Vec<AdapterRecord>, QueryError>>>,
}

impl FakeQuery {
    fn returning(records: Vec<AdapterRecord>) -> Self {
        Self {
            result: Mutex::new(Some(Ok(records))),
        }
    }

    fn failing() -> Self {
        Self {
            result: Mutex::new(Some(Err(QueryError::Platform {
                message: "store unavailable".to_string(),
            }))),
        }
    }
}

impl AdapterQuery for FakeQuery {
    fn network_adapters(&self) -> Result<Vec<AdapterRecord>, QueryError> {
        self.result
            .lock()
            .unwrap()
            .take()
            .expect("adapter query invoked once per resolution")
    }
}

/// Fake registry handing out one queued binding list.
struct FakeRegistry {
    result: Mutex<Option<Result<Vec<String>, RegistryError>>>,
}

impl FakeRegistry {
    fn returning(bindings: Vec<String>) -> Self {
        Self {
            result: Mutex::new(Some(Ok(bindings))),
        }
    }

    fn failing() -> Self {
        Self {
            result: Mutex::new(Some(Err(RegistryError::Platform {
                message: "key unreadable".to_string(),
            }))),
        }
    }
}

impl RegistryReader for FakeRegistry {
    fn nic_binding_order(&self) -> Result<Vec<String>, RegistryError> {
        self.result
            .lock()
            .unwrap()
            .take()
            .expect("binding order read once per resolution")
    }
}

fn resolve(records: Vec<AdapterRecord>) -> Option<MacAddress> {
    WindowsResolver::new(
        FakeQuery::returning(records),
        FakeRegistry::returning(nic_bindings()),
    )
    .macaddress()
    .unwrap()
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn no_adapters_resolves_absent() {
    assert_eq!(resolve(vec![]), None);
}

#[test]
fn only_inactive_adapters_resolves_absent() {
    let records = vec![adapter(None, Some(5), Some(SETTING_ID_0))];
    assert_eq!(resolve(records), None);
}

#[test]
fn single_adapter_returns_its_address_verbatim() {
    let records = vec![adapter(Some("00:0C:29:0C:9E:9F"), None, None)];
    let mac = resolve(records).unwrap();
    assert_eq!(mac.as_str(), "00:0C:29:0C:9E:9F");
}

#[test]
fn single_adapter_address_is_normalized() {
    let records = vec![adapter(Some("0:ab:cd:e:12:3"), None, None)];
    let mac = resolve(records).unwrap();
    assert_eq!(mac.as_str(), "00:ab:cd:0e:12:03");
}

#[test]
fn inactive_adapter_is_excluded_before_ranking() {
    let records = vec![
        adapter(None, Some(1), Some(SETTING_ID_0)),
        adapter(Some("00:0C:29:0C:9E:AF"), Some(10), Some(SETTING_ID_1)),
    ];
    let mac = resolve(records).unwrap();
    assert_eq!(mac.as_str(), "00:0C:29:0C:9E:AF");
}

#[test]
fn lowest_metric_wins() {
    let records = vec![
        adapter(Some("00:0C:29:0C:9E:9F"), Some(10), Some(SETTING_ID_0)),
        adapter(Some("00:0C:29:0C:9E:AF"), Some(5), Some(SETTING_ID_1)),
    ];
    let mac = resolve(records).unwrap();
    assert_eq!(mac.as_str(), "00:0C:29:0C:9E:AF");
}

#[test]
fn absent_metric_sorts_after_any_metric() {
    let records = vec![
        adapter(Some("23:24:df:12:12:00"), None, Some(SETTING_ID_0)),
        adapter(Some("23:24:df:12:12:11"), Some(500), Some(SETTING_ID_1)),
    ];
    let mac = resolve(records).unwrap();
    assert_eq!(mac.as_str(), "23:24:df:12:12:11");
}

#[test]
fn equal_metric_ties_go_to_earlier_binding_order() {
    let records = vec![
        adapter(Some("23:24:df:12:12:00"), Some(5), Some(SETTING_ID_0)),
        adapter(Some("23:24:df:12:12:11"), Some(5), Some(SETTING_ID_1)),
    ];
    let mac = resolve(records).unwrap();
    assert_eq!(mac.as_str(), "23:24:df:12:12:00");
}

#[test]
fn binding_order_wins_regardless_of_query_order() {
    let records = vec![
        adapter(Some("23:24:df:12:12:00"), Some(5), Some(SETTING_ID_1)),
        adapter(Some("23:24:df:12:12:11"), Some(5), Some(SETTING_ID_0)),
    ];
    let mac = resolve(records).unwrap();
    assert_eq!(mac.as_str(), "23:24:df:12:12:11");
}

#[test]
fn setting_id_missing_from_binding_list_sorts_last() {
    let records = vec![
        adapter(Some("23:24:df:12:12:00"), Some(5), Some("{0000-unlisted}")),
        adapter(Some("23:24:df:12:12:11"), Some(5), Some(SETTING_ID_1)),
    ];
    let mac = resolve(records).unwrap();
    assert_eq!(mac.as_str(), "23:24:df:12:12:11");
}

#[test]
fn equal_metric_and_both_unlisted_keeps_query_order() {
    let records = vec![
        adapter(Some("23:24:df:12:12:00"), Some(5), None),
        adapter(Some("23:24:df:12:12:11"), Some(5), None),
    ];
    let mac = resolve(records).unwrap();
    assert_eq!(mac.as_str(), "23:24:df:12:12:00");
}

// ============================================================================
// Accessor failures
// ============================================================================

#[test]
fn query_failure_propagates() {
    let resolver = WindowsResolver::new(
        FakeQuery::failing(),
        FakeRegistry::returning(nic_bindings()),
    );

    let error = resolver.macaddress().unwrap_err();
    assert!(matches!(error, ResolveError::Query(_)));
}

#[test]
fn registry_failure_propagates() {
    let resolver = WindowsResolver::new(
        FakeQuery::returning(vec![adapter(Some("00:0C:29:0C:9E:9F"), None, None)]),
        FakeRegistry::failing(),
    );

    let error = resolver.macaddress().unwrap_err();
    assert!(matches!(error, ResolveError::Registry(_)));
}

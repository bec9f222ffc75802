//! Windows accessors over the IP Helper API and the registry.
//!
//! [`IpHelperQuery`] enumerates adapters with `GetAdaptersAddresses` and
//! shapes each one into an [`AdapterRecord`]; [`HklmRegistry`] reads the
//! TCP/IP NIC binding order with `RegGetValueW`.

use windows::Win32::Foundation::{ERROR_BUFFER_OVERFLOW, NO_ERROR, WIN32_ERROR};
use windows::Win32::NetworkManagement::IpHelper::{
    GAA_FLAG_SKIP_ANYCAST, GAA_FLAG_SKIP_DNS_SERVER, GAA_FLAG_SKIP_MULTICAST,
    GAA_FLAG_SKIP_UNICAST, GetAdaptersAddresses, IF_TYPE_SOFTWARE_LOOPBACK,
    IP_ADAPTER_ADDRESSES_LH,
};
use windows::Win32::NetworkManagement::Ndis::IfOperStatusUp;
use windows::Win32::Networking::WinSock::AF_UNSPEC;
use windows::Win32::System::Registry::{HKEY_LOCAL_MACHINE, RRF_RT_REG_MULTI_SZ, RegGetValueW};
use windows::core::w;

use crate::mac::MacAddress;
use crate::system::{AdapterQuery, AdapterRecord, QueryError, RegistryError, RegistryReader};

/// Interface type for PPP (Point-to-Point Protocol) adapters.
/// Value from Windows SDK `iptypes.h` - not exported by the `windows` crate.
const IF_TYPE_PPP: u32 = 23;

/// Interface type for tunnel adapters (VPN, etc.).
/// Value from Windows SDK `iptypes.h` - not exported by the `windows` crate.
const IF_TYPE_TUNNEL: u32 = 131;

/// Buffer size hint for `GetAdaptersAddresses`.
/// The API will tell us the actual required size if this is insufficient.
const INITIAL_BUFFER_SIZE: u32 = 16384;

/// Length of a MAC address in octets.
const MAC_LEN: usize = 6;

/// Windows [`AdapterQuery`] using `GetAdaptersAddresses`.
///
/// Adapters that are down or carry no six-octet physical address come back
/// with an absent MAC, mirroring the instrumentation store leaving the
/// field empty for unbound adapters. Software-loopback, tunnel and PPP
/// interfaces are not network adapters for this query.
#[derive(Debug, Clone, Default)]
pub struct IpHelperQuery {
    _private: (),
}

impl IpHelperQuery {
    /// Creates a new IP Helper adapter query.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl AdapterQuery for IpHelperQuery {
    fn network_adapters(&self) -> Result<Vec<AdapterRecord>, QueryError> {
        query_adapters()
    }
}

/// Windows [`RegistryReader`] over `HKEY_LOCAL_MACHINE`.
#[derive(Debug, Clone, Default)]
pub struct HklmRegistry {
    _private: (),
}

impl HklmRegistry {
    /// Creates a new HKLM registry reader.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl RegistryReader for HklmRegistry {
    fn nic_binding_order(&self) -> Result<Vec<String>, RegistryError> {
        read_binding_list()
    }
}

/// Enumerates adapters and shapes them into records.
fn query_adapters() -> Result<Vec<AdapterRecord>, QueryError> {
    let raw_adapters = get_adapter_addresses()?;

    let mut records = Vec::new();
    // SAFETY: GetAdaptersAddresses returns a properly aligned buffer for IP_ADAPTER_ADDRESSES_LH.
    // The Windows API guarantees alignment of the returned data structures.
    #[allow(clippy::cast_ptr_alignment)]
    let mut current = raw_adapters.as_ptr().cast::<IP_ADAPTER_ADDRESSES_LH>();

    // SAFETY: We iterate through a linked list returned by GetAdaptersAddresses.
    // The list is valid as long as the buffer (`raw_adapters`) is alive.
    while !current.is_null() {
        let adapter = unsafe { &*current };

        if let Some(record) = parse_adapter(adapter) {
            records.push(record);
        }

        current = adapter.Next;
    }

    Ok(records)
}

/// Calls `GetAdaptersAddresses` and returns the raw buffer containing adapter data.
///
/// This function handles the two-call pattern:
/// 1. First call with estimated buffer size
/// 2. Retry with exact size if buffer was too small
fn get_adapter_addresses() -> Result<Vec<u8>, QueryError> {
    // Only per-adapter fields are consumed; skip every address list.
    let flags = GAA_FLAG_SKIP_UNICAST
        | GAA_FLAG_SKIP_ANYCAST
        | GAA_FLAG_SKIP_MULTICAST
        | GAA_FLAG_SKIP_DNS_SERVER;
    let family = u32::from(AF_UNSPEC.0);

    let mut buffer: Vec<u8> = vec![0u8; INITIAL_BUFFER_SIZE as usize];
    let mut size = INITIAL_BUFFER_SIZE;

    // SAFETY: We provide a valid buffer and size. The function writes adapter
    // information to the buffer and updates `size` with the required length.
    let result = unsafe {
        GetAdaptersAddresses(
            family,
            flags,
            None,
            Some(buffer.as_mut_ptr().cast()),
            &raw mut size,
        )
    };

    handle_api_result(result, &mut buffer, &mut size, flags, family)?;

    Ok(buffer)
}

/// Handles the result of `GetAdaptersAddresses`, potentially retrying with a larger buffer.
///
/// # Coverage Note
///
/// This function is excluded from coverage because:
/// - Buffer overflow case requires a system with network adapter data exceeding 16KB
/// - Error paths require actual Windows API failures which cannot be mocked
#[cfg(not(tarpaulin_include))]
fn handle_api_result(
    result: u32,
    buffer: &mut Vec<u8>,
    size: &mut u32,
    flags: windows::Win32::NetworkManagement::IpHelper::GET_ADAPTERS_ADDRESSES_FLAGS,
    family: u32,
) -> Result<(), QueryError> {
    if result == ERROR_BUFFER_OVERFLOW.0 {
        buffer.resize(*size as usize, 0);

        // SAFETY: Same as above, but with correctly sized buffer
        let result = unsafe {
            GetAdaptersAddresses(
                family,
                flags,
                None,
                Some(buffer.as_mut_ptr().cast()),
                &raw mut *size,
            )
        };

        if result != NO_ERROR.0 {
            return Err(windows::core::Error::from(WIN32_ERROR(result)).into());
        }
    } else if result != NO_ERROR.0 {
        return Err(windows::core::Error::from(WIN32_ERROR(result)).into());
    }

    Ok(())
}

/// Shapes a single `IP_ADAPTER_ADDRESSES_LH` into an [`AdapterRecord`].
///
/// Returns `None` for interface types the query does not consider
/// network adapters.
fn parse_adapter(adapter: &IP_ADAPTER_ADDRESSES_LH) -> Option<AdapterRecord> {
    if !is_network_adapter(adapter.IfType) {
        return None;
    }

    // SAFETY: AdapterName points to a NUL-terminated GUID string owned by
    // the adapter buffer.
    let setting_id = unsafe { adapter.AdapterName.to_string().ok() };

    Some(AdapterRecord {
        mac_address: physical_address(adapter)
            .map(|octets| MacAddress::from_octets(octets).into_string()),
        ip_connection_metric: Some(adapter.Ipv4Metric),
        setting_id,
    })
}

/// Maps Windows `IF_TYPE_*` constants to the query's adapter filter.
const fn is_network_adapter(if_type: u32) -> bool {
    !matches!(
        if_type,
        IF_TYPE_SOFTWARE_LOOPBACK | IF_TYPE_TUNNEL | IF_TYPE_PPP
    )
}

/// Extracts the six-octet physical address of an operational adapter.
fn physical_address(adapter: &IP_ADAPTER_ADDRESSES_LH) -> Option<[u8; MAC_LEN]> {
    if adapter.OperStatus != IfOperStatusUp {
        return None;
    }
    if adapter.PhysicalAddressLength as usize != MAC_LEN {
        return None;
    }

    let mut octets = [0u8; MAC_LEN];
    octets.copy_from_slice(&adapter.PhysicalAddress[..MAC_LEN]);
    Some(octets)
}

/// Reads the `REG_MULTI_SZ` NIC binding list from `Tcpip\Linkage\Bind`.
///
/// # Coverage Note
///
/// Error paths require actual registry failures which cannot be mocked.
#[cfg(not(tarpaulin_include))]
fn read_binding_list() -> Result<Vec<String>, RegistryError> {
    let subkey = w!(r"SYSTEM\CurrentControlSet\Services\Tcpip\Linkage");
    let value = w!("Bind");

    let mut size: u32 = 0;
    // SAFETY: Size query only; no data pointer is passed.
    unsafe {
        RegGetValueW(
            HKEY_LOCAL_MACHINE,
            subkey,
            value,
            RRF_RT_REG_MULTI_SZ,
            None,
            None,
            Some(&raw mut size),
        )
        .ok()?;
    }

    let mut buffer = vec![0u16; (size as usize).div_ceil(2)];
    // SAFETY: The buffer holds `size` bytes; the API writes at most that many.
    unsafe {
        RegGetValueW(
            HKEY_LOCAL_MACHINE,
            subkey,
            value,
            RRF_RT_REG_MULTI_SZ,
            None,
            Some(buffer.as_mut_ptr().cast()),
            Some(&raw mut size),
        )
        .ok()?;
    }

    Ok(split_multi_sz(&buffer))
}

/// Splits a NUL-delimited `REG_MULTI_SZ` buffer into its strings.
fn split_multi_sz(buffer: &[u16]) -> Vec<String> {
    buffer
        .split(|&ch| ch == 0)
        .filter(|chunk| !chunk.is_empty())
        .map(String::from_utf16_lossy)
        .collect()
}

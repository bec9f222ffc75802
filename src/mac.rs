//! MAC address value type and normalization.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A hardware (MAC) address in canonical textual form.
///
/// Canonical form is six colon-separated octets, each exactly two hex
/// digits. The canonical rendering of raw octets is a pure function of
/// their numeric values, so two inputs denoting the same octets always
/// normalize to identical text.
///
/// # Examples
///
/// ```
/// use macfact::mac::MacAddress;
///
/// let mac = MacAddress::standardize(Some("0:ab:cd:e:12:3")).unwrap();
/// assert_eq!(mac.as_str(), "00:ab:cd:0e:12:03");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MacAddress(String);

impl MacAddress {
    /// Normalizes a raw MAC address string, padding one-digit octets.
    ///
    /// Absent input (`None` or an empty string) yields `None`; this never
    /// fails. Tokens of length other than one pass through unchanged —
    /// the normalizer pads, it does not validate. Hex-digit case is
    /// preserved; callers comparing values canonicalize at that boundary.
    #[must_use]
    pub fn standardize(raw: Option<&str>) -> Option<Self> {
        let raw = raw?;
        if raw.is_empty() {
            return None;
        }

        let octets: Vec<String> = raw.split(':').map(pad_octet).collect();
        Some(Self(octets.join(":")))
    }

    /// Renders six raw octets as a canonical lowercase address.
    #[must_use]
    pub fn from_octets(octets: [u8; 6]) -> Self {
        let [a, b, c, d, e, f] = octets;
        Self(format!("{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{f:02x}"))
    }

    /// Returns the canonical textual form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the address, returning the canonical string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Left-pads a one-digit octet token with a zero.
fn pad_octet(token: &str) -> String {
    if token.len() == 1 {
        format!("0{token}")
    } else {
        token.to_string()
    }
}

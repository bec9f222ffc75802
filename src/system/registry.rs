//! Registry access trait for the NIC binding order.

use thiserror::Error;

/// Error type for registry reads.
#[derive(Debug, Error)]
pub enum RegistryError {
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

/// Trait for reading the registry's NIC binding order.
///
/// The binding order is an ordered list of device path strings, each
/// embedding a GUID-shaped setting identifier. It is read once per
/// resolution call and used as the second-level tie-break key. The real
/// implementation is [`crate::system::platform::HklmRegistry`].
pub trait RegistryReader: Send + Sync {
    /// Reads the ordered NIC binding list.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when the key cannot be read.
    fn nic_binding_order(&self) -> Result<Vec<String>, RegistryError>;
}

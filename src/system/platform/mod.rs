//! Platform-specific accessor implementations.
//!
//! # Platform Support
//!
//! - **Windows**: [`IpHelperQuery`] over `GetAdaptersAddresses` and
//!   [`HklmRegistry`] over `RegGetValueW`.
//! - **Unix**: the portable [`crate::system::SystemProcessRunner`] covers
//!   the BSD command path; nothing platform-specific is needed here.

#[cfg(windows)]
mod windows;

#[cfg(windows)]
pub use windows::{HklmRegistry, IpHelperQuery};

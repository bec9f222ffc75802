//! macfact: primary-interface MAC address resolution.
//!
//! A library for determining the hardware (MAC) address of a host's
//! primary network interface, abstracting over divergent platform
//! mechanisms: routing-table and interface-configuration output on
//! BSD-style Unix, adapter records ranked against the NIC binding order
//! on Windows.

pub mod mac;
pub mod resolver;
pub mod system;

//! Domain models for the subnet calculator.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`Ipv4`] - IPv4 address with CIDR notation support, plus the address codec
//! - [`Network`] and [`HostRange`] - metadata derived from one CIDR
//! - [`ChildSubnet`] - one partition produced by a split

mod ipv4;
mod network;
mod subnet;

// Re-export public types
pub use ipv4::{
    block_size, broadcast_addr, cut_addr, format_address, get_cidr_mask, parse_address, Ipv4,
};
pub use network::{HostRange, Network};
pub use subnet::ChildSubnet;

//! Child subnet produced by a split.

use super::ipv4::{format_address, serialize_address, Ipv4};
use super::network::HostRange;
use crate::config::MAX_LENGTH;
use serde::Serialize;
use std::net::Ipv4Addr;

/// One partition of a parent network, in allocation order.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ChildSubnet {
    /// 1-based position in generation order.
    pub index: usize,
    pub cidr: Ipv4,
    #[serde(serialize_with = "serialize_address")]
    pub network_address: u32,
    pub prefix_length: u8,
    #[serde(serialize_with = "serialize_address")]
    pub broadcast_address: u32,
    pub host_range: Option<HostRange>,
    pub usable_hosts: u64,
}

impl ChildSubnet {
    /// Child of `2^(32 - prefix_length)` addresses starting at `network_address`.
    ///
    /// `network_address` must be aligned to `prefix_length`, and `prefix_length`
    /// must be at most /32.
    pub fn from_block(index: usize, network_address: u32, prefix_length: u8) -> ChildSubnet {
        debug_assert!(prefix_length <= MAX_LENGTH);
        let size = 1u64 << (MAX_LENGTH - prefix_length);
        let broadcast_address = (u64::from(network_address) + size - 1) as u32;
        ChildSubnet {
            index,
            cidr: Ipv4 {
                addr: Ipv4Addr::from(network_address),
                mask: prefix_length,
            },
            network_address,
            prefix_length,
            broadcast_address,
            host_range: HostRange::between(network_address, broadcast_address),
            usable_hosts: size.saturating_sub(2),
        }
    }

    pub fn cidr(&self) -> Ipv4 {
        self.cidr
    }

    pub fn broadcast(&self) -> String {
        format_address(self.broadcast_address)
    }

    pub fn first_usable(&self) -> Option<String> {
        self.host_range.map(|r| format_address(r.first))
    }

    pub fn last_usable(&self) -> Option<String> {
        self.host_range.map(|r| format_address(r.last))
    }
}

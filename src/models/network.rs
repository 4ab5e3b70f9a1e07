//! Derived network metadata for one CIDR.

use super::ipv4::{format_address, serialize_address, Ipv4};
use serde::Serialize;
use std::net::Ipv4Addr;

/// First and last usable host of a block.
///
/// Only exists when the block has at least one address between the network
/// and broadcast addresses, i.e. for prefixes up to /30.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct HostRange {
    #[serde(serialize_with = "serialize_address")]
    pub first: u32,
    #[serde(serialize_with = "serialize_address")]
    pub last: u32,
}

impl HostRange {
    /// Usable range between `network` and `broadcast`, or `None` when fewer than
    /// 2 addresses remain.
    pub fn between(network: u32, broadcast: u32) -> Option<HostRange> {
        if broadcast.checked_sub(network)? >= 2 {
            Some(HostRange {
                first: network + 1,
                last: broadcast - 1,
            })
        } else {
            None
        }
    }

    pub fn first_addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.first)
    }

    pub fn last_addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.last)
    }
}

/// Result of analysing one address/prefix pair.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Network {
    /// Address as entered, before masking.
    #[serde(serialize_with = "serialize_address")]
    pub base_address: u32,
    pub prefix_length: u8,
    #[serde(serialize_with = "serialize_address")]
    pub network_address: u32,
    #[serde(serialize_with = "serialize_address")]
    pub broadcast_address: u32,
    #[serde(serialize_with = "serialize_address")]
    pub subnet_mask: u32,
    #[serde(serialize_with = "serialize_address")]
    pub wildcard_mask: u32,
    /// 2^(32 - prefix); needs 64 bits for /0.
    pub total_hosts: u64,
    pub usable_hosts: u64,
    pub host_range: Option<HostRange>,
}

impl Network {
    /// Host bits left after the prefix.
    pub fn available_bits(&self) -> u8 {
        crate::config::MAX_LENGTH - self.prefix_length
    }

    /// Number of addresses between network and broadcast, inclusive.
    pub fn span(&self) -> u64 {
        u64::from(self.broadcast_address - self.network_address) + 1
    }

    /// The network in `a.b.c.d/n` form, using the masked address.
    pub fn cidr(&self) -> Ipv4 {
        Ipv4 {
            addr: Ipv4Addr::from(self.network_address),
            mask: self.prefix_length,
        }
    }

    pub fn contains(&self, addr: u32) -> bool {
        self.network_address <= addr && addr <= self.broadcast_address
    }

    pub fn first_usable(&self) -> Option<String> {
        self.host_range.map(|r| format_address(r.first))
    }

    pub fn last_usable(&self) -> Option<String> {
        self.host_range.map(|r| format_address(r.last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_range_between() {
        let range = HostRange::between(0x0A000000, 0x0A0000FF).unwrap();
        assert_eq!(range.first_addr(), Ipv4Addr::new(10, 0, 0, 1));
        assert_eq!(range.last_addr(), Ipv4Addr::new(10, 0, 0, 254));

        // /30 keeps two hosts
        let range = HostRange::between(0xC0A80100, 0xC0A80103).unwrap();
        assert_eq!(range.last - range.first, 1);

        // /31 and /32 have none
        assert_eq!(HostRange::between(0xC0A80100, 0xC0A80101), None);
        assert_eq!(HostRange::between(0xC0A80100, 0xC0A80100), None);
        assert_eq!(HostRange::between(5, 1), None);
    }

    #[test]
    fn test_host_range_serialises_as_dotted_quads() {
        let range = HostRange::between(0x0A000000, 0x0A0000FF).unwrap();
        let json = serde_json::to_value(range).unwrap();
        assert_eq!(json["first"], "10.0.0.1");
        assert_eq!(json["last"], "10.0.0.254");
    }
}

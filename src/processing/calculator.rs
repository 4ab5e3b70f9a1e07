//! Network metadata derivation.

use super::classifier::{classify, Classification};
use super::parser::parse_cidr;
use crate::error::CalcError;
use crate::models::{block_size, get_cidr_mask, HostRange, Network};
use serde::Serialize;

/// The full record for one CIDR: derived network plus its classification.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct NetworkReport {
    #[serde(flatten)]
    pub network: Network,
    #[serde(flatten)]
    pub classification: Classification,
}

/// Derive network, broadcast, masks and host counts for `address/prefix_length`.
///
/// Pure: identical inputs give identical output.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::models::format_address;
/// use ipv4_subnet_calc::processing::derive_network;
/// let net = derive_network(0x0A000005, 24).unwrap();
/// assert_eq!(format_address(net.network_address), "10.0.0.0");
/// assert_eq!(net.usable_hosts, 254);
/// ```
pub fn derive_network(address: u32, prefix_length: u8) -> Result<Network, CalcError> {
    let subnet_mask = get_cidr_mask(prefix_length)?;
    let wildcard_mask = !subnet_mask;
    let network_address = address & subnet_mask;
    let broadcast_address = network_address | wildcard_mask;

    let total_hosts = block_size(prefix_length)?;
    let usable_hosts = total_hosts.saturating_sub(2);
    let host_range = if usable_hosts > 0 {
        HostRange::between(network_address, broadcast_address)
    } else {
        None
    };

    log::debug!(
        "derive_network({}/{prefix_length}) total_hosts={total_hosts} usable_hosts={usable_hosts}",
        crate::models::format_address(address)
    );

    Ok(Network {
        base_address: address,
        prefix_length,
        network_address,
        broadcast_address,
        subnet_mask,
        wildcard_mask,
        total_hosts,
        usable_hosts,
        host_range,
    })
}

/// Parse a CIDR string and build its [`NetworkReport`].
pub fn calculate(cidr: &str) -> Result<NetworkReport, CalcError> {
    let (address, prefix_length) = parse_cidr(cidr)?;
    let network = derive_network(address, prefix_length)?;
    Ok(NetworkReport {
        network,
        classification: classify(address),
    })
}

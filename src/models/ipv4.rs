//! IPv4 address codec and CIDR notation utilities.
//!
//! Addresses are carried as `u32` in big-endian octet order. [`Ipv4`] pairs an
//! address with a prefix length and is the string form used for CIDRs in
//! output and serialisation.

use crate::config::MAX_LENGTH;
use crate::error::CalcError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Parse a dotted-quad string into a 32-bit address.
///
/// Requires exactly four decimal tokens, each in 0-255.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::models::parse_address;
/// assert_eq!(parse_address("10.0.0.1").unwrap(), 0x0A000001);
/// assert!(parse_address("10.0.0").is_err());
/// ```
pub fn parse_address(text: &str) -> Result<u32, CalcError> {
    let tokens: Vec<&str> = text.split('.').collect();
    if tokens.len() != 4 {
        return Err(CalcError::format(
            text,
            format!("expected 4 octets, found {}", tokens.len()),
        ));
    }

    tokens.iter().try_fold(0u32, |acc, token| -> Result<u32, CalcError> {
        let octet = parse_octet(text, token)?;
        Ok((acc << 8) | u32::from(octet))
    })
}

fn parse_octet(text: &str, token: &str) -> Result<u8, CalcError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CalcError::format(
            text,
            format!("octet '{token}' is not a number"),
        ));
    }
    // Any all-digit token that overflows u8 (including very long ones) is out of range.
    token.parse::<u8>().map_err(|_| {
        CalcError::format(
            text,
            format!("IP address octets must be between 0 and 255, got '{token}'"),
        )
    })
}

/// Format a 32-bit address as four dot separated octets.
pub fn format_address(addr: u32) -> String {
    Ipv4Addr::from(addr).to_string()
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// Computed in 64 bits so both /0 and /32 come out right without a 32-bit shift.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(0).unwrap(), 0);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, CalcError> {
    check_length(len)?;
    let right_len = MAX_LENGTH - len;
    let all_bits = u32::MAX as u64;

    let mask = (all_bits >> right_len) << right_len;

    Ok(mask as u32)
}

/// Get the network address for a given address and prefix length.
pub fn cut_addr(addr: u32, len: u8) -> Result<u32, CalcError> {
    Ok(addr & get_cidr_mask(len)?)
}

/// Calculate the broadcast address for a given address and prefix length.
pub fn broadcast_addr(addr: u32, len: u8) -> Result<u32, CalcError> {
    let mask = get_cidr_mask(len)?;
    Ok((addr & mask) | !mask)
}

/// Number of addresses in a block of the given prefix length (2^(32-len)).
pub fn block_size(len: u8) -> Result<u64, CalcError> {
    check_length(len)?;
    Ok(1u64 << (MAX_LENGTH - len))
}

fn check_length(len: u8) -> Result<(), CalcError> {
    if len > MAX_LENGTH {
        Err(CalcError::PrefixRange {
            prefix: len.to_string(),
        })
    } else {
        Ok(())
    }
}

pub(crate) fn serialize_address<S>(addr: &u32, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_address(*addr))
}

/// IPv4 address with CIDR notation support.
#[derive(Eq, Ord, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(de::Error::custom)
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4, CalcError> {
        let (addr, mask) = crate::processing::parse_cidr(addr_cidr)?;
        Ok(Ipv4 {
            addr: Ipv4Addr::from(addr),
            mask,
        })
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        let bits = u32::from(self.addr);
        Ipv4Addr::from(cut_addr(bits, self.mask.min(MAX_LENGTH)).unwrap_or(bits))
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        let bits = u32::from(self.addr);
        Ipv4Addr::from(broadcast_addr(bits, self.mask.min(MAX_LENGTH)).unwrap_or(bits))
    }

    /// True when `ip` falls inside this block.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        self.lo() <= ip && ip <= self.hi()
    }
}

impl FromStr for Ipv4 {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4::new(s)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

impl PartialEq for Ipv4 {
    fn eq(&self, other: &Ipv4) -> bool {
        self.addr == other.addr && self.mask == other.mask
    }
}

impl PartialOrd for Ipv4 {
    fn partial_cmp(&self, other: &Ipv4) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

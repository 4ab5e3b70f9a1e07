//! CIDR string parsing.
//!
//! Validates `a.b.c.d/n` text in three steps: overall shape, prefix range,
//! then the address octets.

use crate::config::MAX_LENGTH;
use crate::error::CalcError;
use crate::models::parse_address;
use regex::Regex;
use std::sync::OnceLock;

/// Regex for the overall `address/prefix` shape; octet count is checked by the codec.
static CIDR_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_cidr_regex() -> &'static Regex {
    CIDR_REGEX.get_or_init(|| Regex::new(r"^([0-9.]+)/([0-9]+)$").expect("Invalid Regex"))
}

/// Parse a CIDR string into its raw (address, prefix length) pair.
///
/// The address is returned as entered, masks are not applied here.
///
/// # Errors
/// * [`CalcError::Syntax`] - not shaped like `x.x.x.x/y`
/// * [`CalcError::PrefixRange`] - prefix outside 0-32
/// * [`CalcError::Format`] - wrong octet count or an octet outside 0-255
pub fn parse_cidr(cidr: &str) -> Result<(u32, u8), CalcError> {
    let cidr = cidr.trim();
    log::trace!("parse_cidr({cidr})");

    let caps = get_cidr_regex()
        .captures(cidr)
        .ok_or_else(|| CalcError::Syntax {
            input: cidr.to_string(),
        })?;
    let (addr_text, prefix_text) = (&caps[1], &caps[2]);

    let prefix = match prefix_text.parse::<u8>() {
        Ok(p) if p <= MAX_LENGTH => p,
        _ => {
            return Err(CalcError::PrefixRange {
                prefix: prefix_text.to_string(),
            })
        }
    };

    let addr = parse_address(addr_text)?;
    Ok((addr, prefix))
}

//! Legacy class and special-use category of an address.

use serde::Serialize;
use std::fmt;

/// Classful network label, from the first octet.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AddressClass {
    A,
    B,
    C,
    /// Multicast.
    D,
    /// Reserved.
    E,
    /// First octet 0 or 127.
    Unknown,
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            AddressClass::A => "Class A",
            AddressClass::B => "Class B",
            AddressClass::C => "Class C",
            AddressClass::D => "Class D (Multicast)",
            AddressClass::E => "Class E (Reserved)",
            AddressClass::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// Special-use category, from the first two octets.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum AddressCategory {
    Private,
    Loopback,
    LinkLocal,
    Public,
}

impl fmt::Display for AddressCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            AddressCategory::Private => "Private (RFC 1918)",
            AddressCategory::Loopback => "Loopback (RFC 1122)",
            AddressCategory::LinkLocal => "Link-Local (RFC 3927)",
            AddressCategory::Public => "Public",
        };
        f.write_str(label)
    }
}

#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Classification {
    pub class: AddressClass,
    pub category: AddressCategory,
}

/// Classify an address by its leading octets.
///
/// 127.x is `Unknown` by class but `Loopback` by category; both are reported as-is.
pub fn classify(addr: u32) -> Classification {
    let [first, second, _, _] = addr.to_be_bytes();

    let class = match first {
        1..=126 => AddressClass::A,
        128..=191 => AddressClass::B,
        192..=223 => AddressClass::C,
        224..=239 => AddressClass::D,
        240..=255 => AddressClass::E,
        _ => AddressClass::Unknown,
    };

    let category = match (first, second) {
        (10, _) => AddressCategory::Private,
        (172, 16..=31) => AddressCategory::Private,
        (192, 168) => AddressCategory::Private,
        (127, _) => AddressCategory::Loopback,
        (169, 254) => AddressCategory::LinkLocal,
        _ => AddressCategory::Public,
    };

    Classification { class, category }
}

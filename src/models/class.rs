//! Historical address classes and address type analysis.

use super::ipv4::{Ipv4Address, Network};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classful network category, decided by the first octet.
///
/// Only A, B and C exist here: loopback counts as A, and 0 plus the
/// multicast/reserved range 224-255 fall back to C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressClass {
    A,
    B,
    C,
}

impl AddressClass {
    pub fn classify(addr: Ipv4Address) -> AddressClass {
        match addr.first_octet() {
            1..=127 => AddressClass::A,
            128..=191 => AddressClass::B,
            192..=223 => AddressClass::C,
            _ => AddressClass::C,
        }
    }

    /// Default prefix length of the class: 8, 16 or 24.
    pub const fn natural_prefix(self) -> u8 {
        match self {
            AddressClass::A => 8,
            AddressClass::B => 16,
            AddressClass::C => 24,
        }
    }

    pub const fn natural_mask(self) -> Ipv4Address {
        match self {
            AddressClass::A => Ipv4Address::new(255, 0, 0, 0),
            AddressClass::B => Ipv4Address::new(255, 255, 0, 0),
            AddressClass::C => Ipv4Address::new(255, 255, 255, 0),
        }
    }
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AddressClass::A => "A",
            AddressClass::B => "B",
            AddressClass::C => "C",
        };
        f.write_str(name)
    }
}

/// Classify an address into class A, B or C.
pub fn classify(addr: Ipv4Address) -> AddressClass {
    AddressClass::classify(addr)
}

/// Natural (mask, prefix length) pair of a class.
pub fn natural_prefix(class: AddressClass) -> (Ipv4Address, u8) {
    (class.natural_mask(), class.natural_prefix())
}

/// What kind of address this is, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressKind {
    Private,
    Loopback,
    Multicast,
    Public,
}

const LOOPBACK: [&str; 1] = ["127.0.0.0/8"];
const MULTICAST: [&str; 1] = ["224.0.0.0/4"];
/// Special-purpose blocks treated as non-public, loopback included.
const PRIVATE: [&str; 14] = [
    "0.0.0.0/8",
    "10.0.0.0/8",
    "127.0.0.0/8",
    "169.254.0.0/16",
    "172.16.0.0/12",
    "192.0.0.0/29",
    "192.0.0.170/31",
    "192.0.2.0/24",
    "192.168.0.0/16",
    "198.18.0.0/15",
    "198.51.100.0/24",
    "203.0.113.0/24",
    "240.0.0.0/4",
    "255.255.255.255/32",
];

fn in_any(addr: Ipv4Address, blocks: &[&str]) -> bool {
    blocks
        .iter()
        .filter_map(|b| b.parse::<Network>().ok())
        .any(|net| net.contains(addr))
}

impl AddressKind {
    /// Private is checked first, so 127/8 reports as private and
    /// `Loopback` only shows up if `PRIVATE` stops covering it.
    pub fn of(addr: Ipv4Address) -> AddressKind {
        if in_any(addr, &PRIVATE) {
            AddressKind::Private
        } else if in_any(addr, &LOOPBACK) {
            AddressKind::Loopback
        } else if in_any(addr, &MULTICAST) {
            AddressKind::Multicast
        } else {
            AddressKind::Public
        }
    }
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AddressKind::Private => "Private IP",
            AddressKind::Loopback => "Loopback IP",
            AddressKind::Multicast => "Multicast IP",
            AddressKind::Public => "Public IP",
        };
        f.write_str(label)
    }
}

//! IPv4 address and CIDR block value types.
//!
//! Provides [`Ipv4Address`], a plain 32-bit value, and [`Network`], an
//! address with a prefix length, along with the mask arithmetic both use.

use crate::error::AddressError;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::OnceLock;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Matches one dotted-decimal field made only of ASCII digits.
static OCTET_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_octet_regex() -> &'static Regex {
    OCTET_REGEX.get_or_init(|| Regex::new(r"^[0-9]+$").expect("Invalid Regex"))
}

/// Mask with the top `len` bits set. `len` must be at most 32.
fn prefix_bits(len: u8) -> u32 {
    u32::MAX.checked_shl(u32::from(MAX_LENGTH - len)).unwrap_or(0)
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnetta::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, AddressError> {
    if len > MAX_LENGTH {
        Err(AddressError::PrefixTooLong(u32::from(len)))
    } else {
        Ok(prefix_bits(len))
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Address, len: u8) -> Result<Ipv4Address, AddressError> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Address(addr.0 & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Address, len: u8) -> Result<Ipv4Address, AddressError> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Address((addr.0 & mask) | !mask))
}

/// Number of addresses in a block of the given prefix length.
pub fn block_size(len: u8) -> Result<u64, AddressError> {
    if len > MAX_LENGTH {
        Err(AddressError::PrefixTooLong(u32::from(len)))
    } else {
        Ok(1u64 << (MAX_LENGTH - len))
    }
}

/// An IPv4 address held as its 32-bit big-endian value.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash, Default)]
pub struct Ipv4Address(u32);

impl Ipv4Address {
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Ipv4Address {
        Ipv4Address(u32::from_be_bytes([a, b, c, d]))
    }

    pub const fn from_bits(bits: u32) -> Ipv4Address {
        Ipv4Address(bits)
    }

    pub const fn to_bits(self) -> u32 {
        self.0
    }

    pub const fn octets(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    pub const fn first_octet(self) -> u8 {
        self.octets()[0]
    }

    /// Address `offset` positions above this one, or `None` past 255.255.255.255.
    pub fn checked_add(self, offset: u32) -> Option<Ipv4Address> {
        self.0.checked_add(offset).map(Ipv4Address)
    }

    /// Address `offset` positions below this one, or `None` before 0.0.0.0.
    pub fn checked_sub(self, offset: u32) -> Option<Ipv4Address> {
        self.0.checked_sub(offset).map(Ipv4Address)
    }

    /// The dotted form of a prefix length, e.g. `/26` -> `255.255.255.192`.
    pub fn netmask(len: u8) -> Result<Ipv4Address, AddressError> {
        get_cidr_mask(len).map(Ipv4Address)
    }
}

impl FromStr for Ipv4Address {
    type Err = AddressError;

    /// Parse strict dotted-decimal notation: four fields, digits only,
    /// each 0-255, no leading zeros.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AddressError::Empty);
        }
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 4 {
            return Err(AddressError::FieldCount(parts.len()));
        }

        let mut octets = [0u8; 4];
        for (octet, part) in octets.iter_mut().zip(&parts) {
            if !get_octet_regex().is_match(part) {
                return Err(AddressError::NotNumeric(part.to_string()));
            }
            if part.len() > 1 && part.starts_with('0') {
                return Err(AddressError::LeadingZero(part.to_string()));
            }
            *octet = part
                .parse()
                .map_err(|_| AddressError::OctetOutOfRange(part.to_string()))?;
        }
        Ok(Ipv4Address(u32::from_be_bytes(octets)))
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [a, b, c, d] = self.octets();
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

impl From<Ipv4Addr> for Ipv4Address {
    fn from(addr: Ipv4Addr) -> Self {
        Ipv4Address(u32::from(addr))
    }
}

impl From<Ipv4Address> for Ipv4Addr {
    fn from(addr: Ipv4Address) -> Self {
        Ipv4Addr::from(addr.0)
    }
}

impl Serialize for Ipv4Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Ipv4Address {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4Address::from_str(&s)
            .map_err(|e| de::Error::custom(format!("invalid IP address {s}: {e}")))
    }
}

/// IPv4 block in CIDR notation. The prefix is always within 0..=32.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Network {
    addr: Ipv4Address,
    prefix: u8,
}

impl Network {
    /// Create a block from any address inside it; the address is kept as given.
    pub fn new(addr: Ipv4Address, prefix: u8) -> Result<Network, AddressError> {
        if prefix > MAX_LENGTH {
            return Err(AddressError::PrefixTooLong(u32::from(prefix)));
        }
        Ok(Network { addr, prefix })
    }

    /// Create the block of length `prefix` that contains `addr`, aligned down.
    pub fn containing(addr: Ipv4Address, prefix: u8) -> Result<Network, AddressError> {
        let addr = cut_addr(addr, prefix)?;
        Ok(Network { addr, prefix })
    }

    pub fn addr(&self) -> Ipv4Address {
        self.addr
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Get the lowest (network) address in the block.
    pub fn lo(&self) -> Ipv4Address {
        Ipv4Address(self.addr.0 & prefix_bits(self.prefix))
    }

    /// Get the highest (broadcast) address in the block.
    pub fn hi(&self) -> Ipv4Address {
        Ipv4Address(self.lo().0 | !prefix_bits(self.prefix))
    }

    pub fn netmask(&self) -> Ipv4Address {
        Ipv4Address(prefix_bits(self.prefix))
    }

    /// Bitwise complement of the netmask.
    pub fn hostmask(&self) -> Ipv4Address {
        Ipv4Address(!prefix_bits(self.prefix))
    }

    /// Total number of addresses, network and broadcast included.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix)
    }

    pub fn contains(&self, addr: Ipv4Address) -> bool {
        self.lo() <= addr && addr <= self.hi()
    }
}

impl FromStr for Network {
    type Err = AddressError;

    /// Parse `a.b.c.d/n`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (addr, prefix) = s
            .split_once('/')
            .ok_or_else(|| AddressError::CidrFormat(s.to_string()))?;
        let addr: Ipv4Address = addr.parse()?;
        let prefix: u32 = prefix
            .parse()
            .map_err(|_| AddressError::CidrFormat(s.to_string()))?;
        let prefix = u8::try_from(prefix).map_err(|_| AddressError::PrefixTooLong(prefix))?;
        Network::new(addr, prefix)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> Result<Network, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Network::from_str(&s).map_err(|e| de::Error::custom(format!("invalid CIDR {s}: {e}")))
    }
}

//! Subnetting plan and per-subnet detail records.

use super::class::AddressClass;
use super::ipv4::{Ipv4Address, Network};
use crate::error::PlanError;
use serde::Serialize;

/// Result of one planning call.
///
/// `subnets` tiles `natural_network` in ascending order with blocks of
/// `prefix_length`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnettingPlan {
    /// Class of the original address.
    pub ip_class: AddressClass,
    /// Address the plan was requested for, as typed.
    pub original_ip: Ipv4Address,
    /// Class network the subnets are carved from.
    pub natural_network: Network,
    /// New prefix length of every subnet.
    pub prefix_length: u8,
    pub subnet_mask: Ipv4Address,
    pub wildcard_mask: Ipv4Address,
    /// Bits borrowed beyond the natural prefix.
    pub subnet_bits: u8,
    /// Bits left for hosts, `32 - prefix_length`.
    pub host_bits: u8,
    pub total_subnets: u64,
    /// Usable hosts per subnet, network and broadcast excluded.
    pub hosts_per_subnet: u64,
    pub subnets: Vec<Network>,
}

impl SubnettingPlan {
    /// Detail of the subnet at zero-based `index`.
    pub fn subnet_detail(&self, index: u64) -> Result<SubnetDetail, PlanError> {
        let out_of_range = PlanError::IndexOutOfRange {
            index,
            total: self.total_subnets,
        };
        if index >= self.total_subnets {
            return Err(out_of_range);
        }
        let subnet = usize::try_from(index)
            .ok()
            .and_then(|i| self.subnets.get(i))
            .ok_or(out_of_range)?;
        Ok(SubnetDetail::of(*subnet))
    }
}

/// Address layout of a single subnet.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetDetail {
    pub network_address: Ipv4Address,
    pub broadcast_address: Ipv4Address,
    /// `None` when the block has no usable host (/31, /32).
    pub first_usable_ip: Option<Ipv4Address>,
    pub last_usable_ip: Option<Ipv4Address>,
    pub subnet_mask: Ipv4Address,
    pub prefix_length: u8,
    pub total_addresses: u64,
    pub usable_addresses: u64,
}

impl SubnetDetail {
    pub fn of(network: Network) -> SubnetDetail {
        let network_address = network.lo();
        let broadcast_address = network.hi();
        let total_addresses = network.size();
        let usable_addresses = total_addresses.saturating_sub(2);

        let (first_usable_ip, last_usable_ip) = if usable_addresses > 0 {
            (network_address.checked_add(1), broadcast_address.checked_sub(1))
        } else {
            (None, None)
        };

        SubnetDetail {
            network_address,
            broadcast_address,
            first_usable_ip,
            last_usable_ip,
            subnet_mask: network.netmask(),
            prefix_length: network.prefix(),
            total_addresses,
            usable_addresses,
        }
    }
}

impl From<Network> for SubnetDetail {
    fn from(network: Network) -> Self {
        SubnetDetail::of(network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(cidr: &str) -> SubnetDetail {
        SubnetDetail::of(cidr.parse().unwrap())
    }

    #[test]
    fn test_detail_slash_26() {
        let d = detail("192.168.1.0/26");
        assert_eq!(d.network_address.to_string(), "192.168.1.0");
        assert_eq!(d.broadcast_address.to_string(), "192.168.1.63");
        assert_eq!(d.first_usable_ip, Some(Ipv4Address::new(192, 168, 1, 1)));
        assert_eq!(d.last_usable_ip, Some(Ipv4Address::new(192, 168, 1, 62)));
        assert_eq!(d.subnet_mask.to_string(), "255.255.255.192");
        assert_eq!(d.prefix_length, 26);
        assert_eq!(d.total_addresses, 64);
        assert_eq!(d.usable_addresses, 62);
    }

    #[test]
    fn test_detail_aligns_unaligned_block() {
        let d = detail("192.168.1.77/26");
        assert_eq!(d.network_address.to_string(), "192.168.1.64");
        assert_eq!(d.broadcast_address.to_string(), "192.168.1.127");
    }

    #[test]
    fn test_detail_slash_30() {
        let d = detail("10.0.0.4/30");
        assert_eq!(d.first_usable_ip, Some(Ipv4Address::new(10, 0, 0, 5)));
        assert_eq!(d.last_usable_ip, Some(Ipv4Address::new(10, 0, 0, 6)));
        assert_eq!(d.usable_addresses, 2);
    }

    #[test]
    fn test_detail_without_usable_hosts() {
        let d = detail("10.0.0.4/31");
        assert_eq!(d.broadcast_address.to_string(), "10.0.0.5");
        assert_eq!(d.first_usable_ip, None);
        assert_eq!(d.last_usable_ip, None);
        assert_eq!(d.total_addresses, 2);
        assert_eq!(d.usable_addresses, 0);

        let d = detail("255.255.255.255/32");
        assert_eq!(d.network_address, d.broadcast_address);
        assert_eq!(d.first_usable_ip, None);
        assert_eq!(d.usable_addresses, 0);
        assert_eq!(d.total_addresses, 1);
    }

    #[test]
    fn test_detail_whole_space() {
        let d = detail("0.0.0.0/0");
        assert_eq!(d.broadcast_address.to_string(), "255.255.255.255");
        assert_eq!(d.total_addresses, 1 << 32);
        assert_eq!(d.usable_addresses, (1 << 32) - 2);
        assert_eq!(d.last_usable_ip.unwrap().to_string(), "255.255.255.254");
    }

    #[test]
    fn test_detail_serializes_missing_range_as_null() {
        let json = serde_json::to_value(detail("10.0.0.0/32")).unwrap();
        assert!(json["first_usable_ip"].is_null());
        assert_eq!(json["network_address"], "10.0.0.0");
    }
}

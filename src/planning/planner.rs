//! Fixed-length subnetting of a classful network.
//!
//! A [`SubnetPlanner`] is bound to one address and its class. Each planning
//! call borrows bits past the natural prefix, either enough for a number of
//! subnets or few enough to leave room for a number of hosts, and returns a
//! fresh [`SubnettingPlan`].

use crate::error::PlanError;
use crate::models::{AddressClass, Ipv4Address, Network, SubnettingPlan, MAX_LENGTH};
use std::fmt;

/// Longest prefix that still leaves usable hosts once network and
/// broadcast are reserved.
pub const MAX_USABLE_PREFIX: u8 = 30;

/// What a plan has to satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// At least this many subnets.
    Subnets(u64),
    /// At least this many usable hosts in every subnet.
    Hosts(u64),
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::Subnets(n) => write!(f, "{n} subnets"),
            Requirement::Hosts(n) => write!(f, "{n} hosts per subnet"),
        }
    }
}

/// `ceil(log2(x))` on integers, with `ceil_log2(0) == ceil_log2(1) == 0`.
pub fn ceil_log2(x: u64) -> u32 {
    if x <= 1 {
        0
    } else {
        u64::BITS - (x - 1).leading_zeros()
    }
}

/// Planner bound to one (address, class) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetPlanner {
    address: Ipv4Address,
    class: AddressClass,
    natural_prefix: u8,
}

impl SubnetPlanner {
    pub fn new(address: Ipv4Address, class: AddressClass) -> SubnetPlanner {
        SubnetPlanner {
            address,
            class,
            natural_prefix: class.natural_prefix(),
        }
    }

    /// Planner for `address` using its own class.
    pub fn for_address(address: Ipv4Address) -> SubnetPlanner {
        SubnetPlanner::new(address, AddressClass::classify(address))
    }

    pub fn address(&self) -> Ipv4Address {
        self.address
    }

    pub fn class(&self) -> AddressClass {
        self.class
    }

    pub fn natural_prefix(&self) -> u8 {
        self.natural_prefix
    }

    pub fn plan(&self, requirement: Requirement) -> Result<SubnettingPlan, PlanError> {
        match requirement {
            Requirement::Subnets(n) => self.plan_from_subnet_count(n),
            Requirement::Hosts(h) => self.plan_from_host_count(h),
        }
    }

    /// Smallest split of the natural network into at least `n` subnets.
    pub fn plan_from_subnet_count(&self, n: u64) -> Result<SubnettingPlan, PlanError> {
        if n == 0 {
            return Err(PlanError::InvalidArgument(
                "number of subnets must be at least 1".to_string(),
            ));
        }
        let subnet_bits = ceil_log2(n);
        let new_prefix = u32::from(self.natural_prefix) + subnet_bits;
        log::debug!(
            "plan_from_subnet_count({n}) class={} subnet_bits={subnet_bits} new_prefix={new_prefix}",
            self.class
        );

        if new_prefix > u32::from(MAX_USABLE_PREFIX) {
            log::info!("{n} subnets do not fit class {} (/{new_prefix})", self.class);
            return Err(self.capacity_exceeded(Requirement::Subnets(n)));
        }
        // new_prefix <= 30 here, so both fit in u8
        self.build_plan(new_prefix as u8, subnet_bits as u8)
    }

    /// Largest split of the natural network that still gives `h` usable
    /// hosts per subnet.
    pub fn plan_from_host_count(&self, h: u64) -> Result<SubnettingPlan, PlanError> {
        if h == 0 {
            return Err(PlanError::InvalidArgument(
                "number of hosts per subnet must be at least 1".to_string(),
            ));
        }
        let addresses_needed = h.saturating_add(2);
        let host_bits = ceil_log2(addresses_needed);
        log::debug!(
            "plan_from_host_count({h}) class={} addresses_needed={addresses_needed} host_bits={host_bits}",
            self.class
        );

        let new_prefix = i64::from(MAX_LENGTH) - i64::from(host_bits);
        if new_prefix <= i64::from(self.natural_prefix) {
            log::info!("{h} hosts per subnet do not fit class {}", self.class);
            return Err(self.capacity_exceeded(Requirement::Hosts(h)));
        }
        // natural_prefix < new_prefix <= 30
        let new_prefix = new_prefix as u8;
        self.build_plan(new_prefix, new_prefix - self.natural_prefix)
    }

    fn capacity_exceeded(&self, requirement: Requirement) -> PlanError {
        PlanError::CapacityExceeded {
            requirement,
            class: self.class,
        }
    }

    /// Tile the natural network with `2^subnet_bits` blocks of `new_prefix`.
    fn build_plan(&self, new_prefix: u8, subnet_bits: u8) -> Result<SubnettingPlan, PlanError> {
        let block = |addr: Ipv4Address, prefix: u8| {
            Network::containing(addr, prefix)
                .map_err(|e| PlanError::InvalidArgument(format!("prefix /{prefix}: {e}")))
        };
        let natural_network = block(self.address, self.natural_prefix)?;
        let first = block(natural_network.lo(), new_prefix)?;

        let host_bits = MAX_LENGTH - new_prefix;
        let total_subnets = 1u64 << subnet_bits;
        let base = natural_network.lo().to_bits();

        // offsets stay below the natural network size, so they fit in u32
        let subnets = (0..total_subnets)
            .map(|k| block(Ipv4Address::from_bits(base | (k << host_bits) as u32), new_prefix))
            .collect::<Result<Vec<Network>, PlanError>>()?;

        log::trace!(
            "build_plan natural={natural_network} /{new_prefix} subnets={}",
            subnets.len()
        );

        Ok(SubnettingPlan {
            ip_class: self.class,
            original_ip: self.address,
            natural_network,
            prefix_length: new_prefix,
            subnet_mask: first.netmask(),
            wildcard_mask: first.hostmask(),
            subnet_bits,
            host_bits,
            total_subnets,
            hosts_per_subnet: first.size().saturating_sub(2),
            subnets,
        })
    }
}

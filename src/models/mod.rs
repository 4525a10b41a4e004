//! Domain models for IPv4 subnetting.
//!
//! This module contains the value types used throughout the crate:
//! - [`Ipv4Address`] and [`Network`] - addresses and CIDR blocks
//! - [`AddressClass`] and [`AddressKind`] - classification of an address
//! - [`SubnettingPlan`] and [`SubnetDetail`] - planning results

mod class;
mod ipv4;
mod plan;

// Re-export public types
pub use class::{classify, natural_prefix, AddressClass, AddressKind};
pub use ipv4::{
    block_size, broadcast_addr, cut_addr, get_cidr_mask, Ipv4Address, Network, MAX_LENGTH,
};
pub use plan::{SubnetDetail, SubnettingPlan};

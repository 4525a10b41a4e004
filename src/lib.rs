//! Subnetta - IPv4 subnetting plans.
//!
//! Classify an address, split its classful network for a number of subnets
//! or hosts per subnet, and inspect the resulting subnets.
//!
//! ```
//! use subnetta::{Ipv4Address, SubnetPlanner};
//!
//! let addr: Ipv4Address = "192.168.1.0".parse().unwrap();
//! let plan = SubnetPlanner::for_address(addr).plan_from_subnet_count(4).unwrap();
//! assert_eq!(plan.subnet_mask.to_string(), "255.255.255.192");
//! assert_eq!(plan.subnet_detail(0).unwrap().broadcast_address.to_string(), "192.168.1.63");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod planning;

pub use error::{AddressError, CliError, PlanError};
pub use models::{
    AddressClass, AddressKind, Ipv4Address, Network, SubnetDetail, SubnettingPlan,
};
pub use planning::{Requirement, SubnetPlanner};

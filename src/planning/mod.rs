//! Subnet planning.
//!
//! - [`planner`] - [`SubnetPlanner`] and the prefix arithmetic behind it

mod planner;

pub use planner::{ceil_log2, Requirement, SubnetPlanner, MAX_USABLE_PREFIX};

//! Parsing of user answers.
//!
//! Each parser returns a typed result; looping until the answer is valid is
//! left to the caller.

use crate::error::{AddressError, PlanError};
use crate::models::Ipv4Address;
use crate::planning::Requirement;

/// How the user wants to size the subnets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// (a) number of subnets needed
    SubnetCount,
    /// (b) number of hosts per subnet
    HostCount,
}

impl Method {
    pub fn requirement(self, value: u64) -> Requirement {
        match self {
            Method::SubnetCount => Requirement::Subnets(value),
            Method::HostCount => Requirement::Hosts(value),
        }
    }
}

pub fn parse_address(input: &str) -> Result<Ipv4Address, AddressError> {
    input.parse()
}

pub fn parse_method(input: &str) -> Option<Method> {
    match input.trim().to_lowercase().as_str() {
        "a" => Some(Method::SubnetCount),
        "b" => Some(Method::HostCount),
        _ => None,
    }
}

pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// A whole number of at least 1.
pub fn parse_count(input: &str) -> Result<u64, PlanError> {
    let input = input.trim();
    match input.parse::<u64>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(PlanError::InvalidArgument(format!(
            "'{input}' is not an integer greater than or equal to 1"
        ))),
    }
}

/// Convert a 1-based subnet number into a zero-based index below `total`.
pub fn subnet_index(number: u64, total: u64) -> Result<u64, PlanError> {
    let index = number
        .checked_sub(1)
        .ok_or_else(|| PlanError::InvalidArgument("subnet numbers start at 1".to_string()))?;
    if index >= total {
        return Err(PlanError::IndexOutOfRange { index, total });
    }
    Ok(index)
}

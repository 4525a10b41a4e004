//! Error types for address parsing and subnet planning.

use crate::models::AddressClass;
use crate::planning::Requirement;

/// Failure to turn text into an [`Ipv4Address`](crate::models::Ipv4Address)
/// or a [`Network`](crate::models::Network).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("empty address")]
    Empty,

    #[error("expected 4 dot-separated octets, found {0}")]
    FieldCount(usize),

    #[error("octet '{0}' is not a decimal number")]
    NotNumeric(String),

    #[error("octet '{0}' has a leading zero")]
    LeadingZero(String),

    #[error("octet '{0}' is out of range 0-255")]
    OctetOutOfRange(String),

    #[error("invalid CIDR format: {0}")]
    CidrFormat(String),

    #[error("prefix length {0} is too long (max 32)")]
    PrefixTooLong(u32),
}

/// Failure of a planning operation or a subnet lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error("cannot fit {requirement} in a class {class} network")]
    CapacityExceeded {
        requirement: Requirement,
        class: AddressClass,
    },

    #[error("subnet index {index} is out of range (0..{total})")]
    IndexOutOfRange { index: u64, total: u64 },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Everything the command line front end can fail with.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Address(#[from] AddressError),

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

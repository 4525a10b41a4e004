//! JSON export of a plan.

use crate::models::{AddressKind, SubnetDetail, SubnettingPlan};
use serde::Serialize;

/// A detail record together with the 1-based number it was requested by.
#[derive(Serialize, Debug)]
pub struct NumberedDetail {
    pub number: u64,
    #[serde(flatten)]
    pub detail: SubnetDetail,
}

/// Everything one-shot mode knows about a request.
#[derive(Serialize, Debug)]
pub struct Report<'a> {
    pub address_kind: AddressKind,
    pub plan: &'a SubnettingPlan,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<NumberedDetail>,
}

impl<'a> Report<'a> {
    pub fn new(plan: &'a SubnettingPlan, details: Vec<NumberedDetail>) -> Report<'a> {
        Report {
            address_kind: AddressKind::of(plan.original_ip),
            plan,
            details,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

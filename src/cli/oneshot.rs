//! Single calculation driven by command line arguments.

use super::input::subnet_index;
use crate::error::CliError;
use crate::models::Ipv4Address;
use crate::output::{
    write_address_info, write_plan_summary, write_subnet_detail, write_subnet_table,
    NumberedDetail, Report,
};
use crate::planning::{Requirement, SubnetPlanner};
use std::io::Write;

/// What one-shot mode was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneShot {
    pub addr: Ipv4Address,
    pub requirement: Requirement,
    /// 1-based subnet numbers to print in detail.
    pub show: Vec<u64>,
    pub json: bool,
}

/// Plan, look up the requested subnets, and print everything.
///
/// Nothing is written when planning or a lookup fails.
pub fn run_once<W: Write>(out: &mut W, job: &OneShot, preview_rows: usize) -> Result<(), CliError> {
    log::info!("#Start run_once({}, {})", job.addr, job.requirement);

    let plan = SubnetPlanner::for_address(job.addr).plan(job.requirement)?;
    let details = job
        .show
        .iter()
        .map(|&number| -> Result<NumberedDetail, CliError> {
            let index = subnet_index(number, plan.total_subnets)?;
            Ok(NumberedDetail {
                number,
                detail: plan.subnet_detail(index)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if job.json {
        writeln!(out, "{}", Report::new(&plan, details).to_json()?)?;
    } else {
        write_address_info(out, job.addr)?;
        write_plan_summary(out, &plan)?;
        write_subnet_table(out, &plan, preview_rows)?;
        for d in &details {
            write_subnet_detail(out, d.number, &d.detail)?;
        }
    }
    out.flush()?;
    Ok(())
}

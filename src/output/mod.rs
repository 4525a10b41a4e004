//! Output formatting for subnetting results.
//!
//! - [`banner`] - start-up banner
//! - [`json`] - JSON export
//! - [`terminal`] - colored terminal output

mod banner;
mod json;
mod terminal;

pub use banner::write_banner;
pub use json::{NumberedDetail, Report};
pub use terminal::{
    format_cell, format_usable, write_address_info, write_plan_summary, write_subnet_detail,
    write_subnet_table,
};

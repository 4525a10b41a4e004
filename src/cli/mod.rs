//! Command line front end.
//!
//! - [`args`] - `clap` argument definitions
//! - [`input`] - parsing of typed answers
//! - [`oneshot`] - single calculation from arguments
//! - [`session`] - interactive prompt loop

mod args;
mod input;
mod oneshot;
mod session;

pub use args::Args;
pub use input::{
    parse_address, parse_count, parse_method, parse_yes_no, subnet_index, Method,
};
pub use oneshot::{run_once, OneShot};
pub use session::Session;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planning::Requirement;
    use clap::Parser;

    #[test]
    fn test_one_shot_from_args() {
        let args = Args::try_parse_from(["subnetta", "--ip", "10.0.0.0", "--hosts", "100"]).unwrap();
        let job = args.one_shot().unwrap();
        assert_eq!(job.requirement, Requirement::Hosts(100));
        assert!(!job.json);

        let args = Args::try_parse_from(["subnetta"]).unwrap();
        assert!(args.one_shot().is_none());
    }
}

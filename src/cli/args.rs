//! Command line arguments.

use super::oneshot::OneShot;
use crate::models::Ipv4Address;
use crate::planning::Requirement;
use clap::{ArgGroup, Parser};

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "subnetta",
    version,
    about = "Subnetta - IPv4 Subnetting Tool",
    after_help = "Without --ip the tool runs interactively.\nExample: subnetta --ip 192.168.1.0 --subnets 4 --show 2"
)]
#[command(group(ArgGroup::new("requirement").args(["subnets", "hosts"])))]
pub struct Args {
    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Do not print the banner
    #[arg(long)]
    pub no_banner: bool,

    /// Number of subnets listed in the preview table
    #[arg(long, value_name = "ROWS")]
    pub preview: Option<usize>,

    /// Base IPv4 address; runs a single calculation and exits
    #[arg(long, value_name = "ADDRESS", requires = "requirement")]
    pub ip: Option<Ipv4Address>,

    /// Number of subnets needed
    #[arg(long, value_name = "N", requires = "ip")]
    pub subnets: Option<u64>,

    /// Number of usable hosts needed per subnet
    #[arg(long, value_name = "N", requires = "ip")]
    pub hosts: Option<u64>,

    /// Also print details of subnet number N (1-based, repeatable)
    #[arg(long, value_name = "N", requires = "ip")]
    pub show: Vec<u64>,

    /// Print the result as JSON
    #[arg(long, requires = "ip")]
    pub json: bool,
}

impl Args {
    /// The requested plan, set only in one-shot mode.
    pub fn requirement(&self) -> Option<Requirement> {
        match (self.subnets, self.hosts) {
            (Some(n), _) => Some(Requirement::Subnets(n)),
            (None, Some(h)) => Some(Requirement::Hosts(h)),
            (None, None) => None,
        }
    }

    /// One-shot job described by the arguments, `None` for interactive mode.
    pub fn one_shot(&self) -> Option<OneShot> {
        Some(OneShot {
            addr: self.ip?,
            requirement: self.requirement()?,
            show: self.show.clone(),
            json: self.json,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interactive_defaults() {
        let args = Args::try_parse_from(["subnetta"]).unwrap();
        assert!(args.ip.is_none());
        assert!(!args.no_color);
        assert_eq!(args.requirement(), None);
    }

    #[test]
    fn test_one_shot_subnets() {
        let args = Args::try_parse_from([
            "subnetta", "--ip", "192.168.1.0", "--subnets", "4", "--show", "1", "--show", "4",
        ])
        .unwrap();
        assert_eq!(args.ip, Some(Ipv4Address::new(192, 168, 1, 0)));
        assert_eq!(args.requirement(), Some(Requirement::Subnets(4)));
        assert_eq!(args.show, vec![1, 4]);
    }

    #[test]
    fn test_one_shot_hosts() {
        let args =
            Args::try_parse_from(["subnetta", "--ip", "10.0.0.0", "--hosts", "30", "--json"])
                .unwrap();
        assert_eq!(args.requirement(), Some(Requirement::Hosts(30)));
        assert!(args.json);
    }

    #[test]
    fn test_rejects_bad_combinations() {
        // both requirements
        assert!(Args::try_parse_from([
            "subnetta", "--ip", "10.0.0.0", "--hosts", "30", "--subnets", "2"
        ])
        .is_err());
        // ip without requirement
        assert!(Args::try_parse_from(["subnetta", "--ip", "10.0.0.0"]).is_err());
        // requirement without ip
        assert!(Args::try_parse_from(["subnetta", "--subnets", "2"]).is_err());
        // malformed address
        assert!(Args::try_parse_from(["subnetta", "--ip", "10.0.0", "--subnets", "2"]).is_err());
        // negative count
        assert!(
            Args::try_parse_from(["subnetta", "--ip", "10.0.0.0", "--subnets", "-2"]).is_err()
        );
    }
}

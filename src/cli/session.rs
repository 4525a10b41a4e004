//! Interactive prompt loop.
//!
//! Walks the user through address, method, requirement, results and subnet
//! lookups, then offers another round. Reads from any [`BufRead`] and writes
//! to any [`Write`]; end of input ends the session cleanly.

use super::input::{
    parse_address, parse_count, parse_method, parse_yes_no, subnet_index, Method,
};
use crate::models::SubnettingPlan;
use crate::output::{
    write_address_info, write_plan_summary, write_subnet_detail, write_subnet_table,
};
use crate::planning::SubnetPlanner;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Whether the outer loop should run another round.
enum Flow {
    Again,
    Quit,
}

pub struct Session<R, W> {
    input: R,
    out: W,
    preview_rows: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, preview_rows: usize) -> Session<R, W> {
        Session {
            input,
            out,
            preview_rows,
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Run rounds until the user declines or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        log::info!("#Start interactive session");
        let mut rounds = 0u32;
        loop {
            match self.round()? {
                Flow::Again => {
                    rounds += 1;
                    writeln!(self.out, "\n{}\n", "=".repeat(70))?;
                }
                Flow::Quit => break,
            }
        }
        log::info!("#End interactive session after {rounds} completed rounds");
        self.out.flush()
    }

    /// One calculation. `Flow::Quit` on end of input or when the user is done.
    fn round(&mut self) -> io::Result<Flow> {
        writeln!(self.out, "\n{}", "Step 1: IPv4 Address Input".bold().yellow())?;
        writeln!(
            self.out,
            "{}",
            "Please enter an IPv4 address (e.g., 192.168.1.0, 10.0.0.0)".white()
        )?;
        let Some(addr) = self.ask_until("IPv4 Address: ", |s| {
            parse_address(s).map_err(|e| {
                format!(
                    "Invalid IPv4 address format ({e}). Please use dotted decimal notation (e.g., 192.168.1.0)"
                )
            })
        })?
        else {
            return self.goodbye();
        };
        write_address_info(&mut self.out, addr)?;

        writeln!(self.out, "\n{}", "Step 2: Subnetting Method".bold().yellow())?;
        writeln!(
            self.out,
            "{}",
            "How would you like to specify your subnetting requirements?".white()
        )?;
        writeln!(self.out, "{}", "(a) Number of subnets needed".green())?;
        writeln!(self.out, "{}", "(b) Number of hosts per subnet".green())?;
        let Some(method) = self.ask_until("Enter your choice (a/b): ", |s| {
            parse_method(s).ok_or_else(|| "Please enter 'a' or 'b'".to_string())
        })?
        else {
            return self.goodbye();
        };

        let prompt = match method {
            Method::SubnetCount => "Number of subnets needed: ",
            Method::HostCount => "Number of hosts per subnet: ",
        };
        let Some(value) = self.ask_until(prompt, |s| parse_count(s).map_err(|e| e.to_string()))?
        else {
            return self.goodbye();
        };

        let planner = SubnetPlanner::for_address(addr);
        let plan = match planner.plan(method.requirement(value)) {
            Ok(plan) => plan,
            Err(e) => {
                log::warn!("planning failed for {addr}: {e}");
                writeln!(self.out, "{}", format!("Error: {e}").red())?;
                return Ok(Flow::Again);
            }
        };

        write_plan_summary(&mut self.out, &plan)?;
        write_subnet_table(&mut self.out, &plan, self.preview_rows)?;

        if let Flow::Quit = self.lookup_subnets(&plan)? {
            return Ok(Flow::Quit);
        }

        writeln!(self.out, "\n{}", "Continue or Exit".bold().yellow())?;
        match self.ask_until("Do you want to perform another calculation? (y/n): ", yes_no)? {
            Some(true) => Ok(Flow::Again),
            Some(false) => {
                writeln!(self.out, "\n{}", "Thank you for using Subnetta!".green())?;
                writeln!(self.out, "{}", "Happy subnetting!".cyan())?;
                Ok(Flow::Quit)
            }
            None => self.goodbye(),
        }
    }

    /// Offer per-subnet details until the user says no.
    fn lookup_subnets(&mut self, plan: &SubnettingPlan) -> io::Result<Flow> {
        writeln!(self.out, "\n{}", "Specific Subnet Lookup".bold().yellow())?;
        loop {
            match self.ask_until(
                "Do you want to view details of a specific subnet? (y/n): ",
                yes_no,
            )? {
                Some(true) => {}
                Some(false) => return Ok(Flow::Again),
                None => return self.goodbye(),
            }

            let prompt = format!("Enter subnet number (1-{}): ", plan.total_subnets);
            let Some(number) = self.ask_until(&prompt, |s| parse_count(s).map_err(|e| e.to_string()))?
            else {
                return self.goodbye();
            };

            let detail = subnet_index(number, plan.total_subnets)
                .and_then(|index| plan.subnet_detail(index));
            match detail {
                Ok(detail) => write_subnet_detail(&mut self.out, number, &detail)?,
                Err(e) => {
                    log::debug!("subnet lookup {number} rejected: {e}");
                    writeln!(
                        self.out,
                        "{}",
                        format!(
                            "Subnet number {number} exceeds total subnets ({})",
                            plan.total_subnets
                        )
                        .red()
                    )?;
                }
            }
        }
    }

    fn goodbye(&mut self) -> io::Result<Flow> {
        writeln!(self.out, "\n\nExiting Subnetta. Goodbye!")?;
        Ok(Flow::Quit)
    }

    /// Read one trimmed line after printing `prompt`; `None` at end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", prompt.cyan())?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask until `parse` accepts the answer, printing its error otherwise.
    fn ask_until<T, F>(&mut self, prompt: &str, parse: F) -> io::Result<Option<T>>
    where
        F: Fn(&str) -> Result<T, String>,
    {
        while let Some(answer) = self.ask(prompt)? {
            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(msg) => writeln!(self.out, "{}", msg.red())?,
            }
        }
        Ok(None)
    }
}

fn yes_no(s: &str) -> Result<bool, String> {
    parse_yes_no(s).ok_or_else(|| "Please enter 'y' or 'n'".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> String {
        colored::control::set_override(false);
        let mut session = Session::new(script.as_bytes(), Vec::new(), 10);
        session.run().unwrap();
        String::from_utf8(session.into_output()).unwrap()
    }

    #[test]
    fn test_full_round_then_exit() {
        let out = run_script("192.168.1.0\na\n4\ny\n1\nn\nn\n");
        assert!(out.contains("IP Class: Class C"));
        assert!(out.contains("Subnet Mask: 255.255.255.192"));
        assert!(out.contains("Subnet #1 Details:"));
        assert!(out.contains("Last Usable IP: 192.168.1.62"));
        assert!(out.contains("Thank you for using Subnetta!"));
        assert!(!out.contains("Goodbye"));
    }

    #[test]
    fn test_retries_invalid_answers() {
        let out = run_script("300.1.1.1\n10.0.0.0\nx\nb\nzero\n0\n16382\nn\nn\n");
        assert!(out.contains("Invalid IPv4 address format"));
        assert!(out.contains("Please enter 'a' or 'b'"));
        assert!(out.contains("'zero' is not an integer"));
        assert!(out.contains("'0' is not an integer"));
        assert!(out.contains("Prefix Length: /18"));
        assert!(out.contains("... and 1014 more subnets"));
    }

    #[test]
    fn test_capacity_error_restarts_round() {
        let out = run_script("192.168.1.0\nb\n300\n192.168.1.0\nb\n30\nn\nn\n");
        assert!(out.contains("Error: cannot fit 300 hosts per subnet in a class C network"));
        assert!(out.contains("Prefix Length: /27"));
        assert_eq!(out.matches("Step 1: IPv4 Address Input").count(), 2);
    }

    #[test]
    fn test_subnet_number_out_of_range() {
        let out = run_script("192.168.1.0\na\n4\ny\n5\ny\n4\nn\nn\n");
        assert!(out.contains("Subnet number 5 exceeds total subnets (4)"));
        assert!(out.contains("Subnet #4 Details:"));
        assert!(out.contains("Network Address: 192.168.1.192"));
    }

    #[test]
    fn test_eof_says_goodbye() {
        let out = run_script("192.168.1.0\n");
        assert!(out.ends_with("Exiting Subnetta. Goodbye!\n"));

        let out = run_script("");
        assert!(out.contains("Goodbye"));
    }

    #[test]
    fn test_second_round() {
        let out = run_script("192.168.1.0\na\n2\nn\ny\n172.16.0.0\na\n256\nn\nn\n");
        assert!(out.contains("Prefix Length: /25"));
        assert!(out.contains("Prefix Length: /24"));
        assert!(out.contains("Usable Hosts per Subnet: 254"));
    }
}

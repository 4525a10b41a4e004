//! Terminal output with colors.
//!
//! Every writer takes any [`Write`] so the same code serves stdout and the
//! in-memory buffers used by tests. Colors come from `colored` and follow
//! its global override, see [`crate::config::apply_color`].

use crate::models::{AddressClass, AddressKind, Ipv4Address, SubnetDetail, SubnettingPlan};
use colored::{ColoredString, Colorize};
use itertools::Itertools;
use std::io::{self, Write};

/// Format a value as a left-aligned field, never truncated.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_cell<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    format!("{value_str:<width$}")
}

/// Usable address for display, `None` when the block has none.
pub fn format_usable(addr: Option<Ipv4Address>) -> String {
    addr.map(|a| a.to_string())
        .unwrap_or_else(|| "None".to_string())
}

fn label(text: &str) -> ColoredString {
    text.white()
}

fn heading(text: &str) -> ColoredString {
    text.bold().green()
}

fn kind_colored(kind: AddressKind) -> ColoredString {
    let text = kind.to_string();
    match kind {
        AddressKind::Private => text.green(),
        AddressKind::Loopback => text.blue(),
        AddressKind::Multicast => text.magenta(),
        AddressKind::Public => text.yellow(),
    }
}

/// Print the class, kind and default mask of an address.
pub fn write_address_info<W: Write>(out: &mut W, addr: Ipv4Address) -> io::Result<()> {
    let class = AddressClass::classify(addr);
    log::debug!("write_address_info({addr}) class={class}");

    writeln!(out, "\n{}", heading("IP Address Analysis:"))?;
    writeln!(out, "{} {}", label("IP Address:"), addr.to_string().yellow())?;
    writeln!(out, "{} {}", label("IP Class:"), format!("Class {class}").yellow())?;
    writeln!(out, "{} {}", label("Type:"), kind_colored(AddressKind::of(addr)))?;
    writeln!(
        out,
        "{} {}",
        label("Default Subnet Mask:"),
        format!("{} (/{})", class.natural_mask(), class.natural_prefix()).yellow()
    )
}

/// Print the summary block of a plan.
pub fn write_plan_summary<W: Write>(out: &mut W, plan: &SubnettingPlan) -> io::Result<()> {
    writeln!(out, "\n{}", heading("Subnetting Results:"))?;
    writeln!(out, "{}", "=".repeat(60))?;

    let rows: [(&str, ColoredString); 9] = [
        ("Original IP:", plan.original_ip.to_string().yellow()),
        ("IP Class:", format!("Class {}", plan.ip_class).yellow()),
        ("Subnet Mask:", plan.subnet_mask.to_string().yellow()),
        ("Prefix Length:", format!("/{}", plan.prefix_length).yellow()),
        ("Wildcard Mask:", plan.wildcard_mask.to_string().yellow()),
        ("Total Subnets:", plan.total_subnets.to_string().green()),
        (
            "Usable Hosts per Subnet:",
            plan.hosts_per_subnet.to_string().green(),
        ),
        ("Subnet Bits:", plan.subnet_bits.to_string().blue()),
        ("Host Bits:", plan.host_bits.to_string().blue()),
    ];
    for (name, value) in rows {
        writeln!(out, "{} {}", label(name), value)?;
    }
    Ok(())
}

/// Print the first `preview_rows` subnets as a table.
pub fn write_subnet_table<W: Write>(
    out: &mut W,
    plan: &SubnettingPlan,
    preview_rows: usize,
) -> io::Result<()> {
    const WIDTHS: [usize; 5] = [4, 18, 15, 15, 15];
    let shown = plan.subnets.len().min(preview_rows);

    writeln!(
        out,
        "\n{}",
        format!("First {shown} Subnets:").bold().cyan()
    )?;
    writeln!(out, "{}", "-".repeat(80))?;
    let header = ["#", "Network", "First IP", "Last IP", "Broadcast"]
        .iter()
        .zip(WIDTHS)
        .map(|(h, w)| format_cell(h, w))
        .join(" ");
    writeln!(out, "{}", header.bold())?;
    writeln!(out, "{}", "-".repeat(80))?;

    for (i, subnet) in plan.subnets.iter().take(shown).enumerate() {
        let d = SubnetDetail::of(*subnet);
        let row = [
            (i + 1).to_string(),
            subnet.to_string(),
            format_usable(d.first_usable_ip),
            format_usable(d.last_usable_ip),
            d.broadcast_address.to_string(),
        ]
        .iter()
        .zip(WIDTHS)
        .map(|(v, w)| format_cell(v, w))
        .join(" ");
        writeln!(out, "{}", row.trim_end().white())?;
    }

    let remaining = plan.subnets.len() - shown;
    if remaining > 0 {
        writeln!(
            out,
            "{}",
            format!("... and {remaining} more subnets").yellow()
        )?;
    }
    Ok(())
}

/// Print the details of subnet number `number` (1-based, as shown to users).
pub fn write_subnet_detail<W: Write>(
    out: &mut W,
    number: u64,
    detail: &SubnetDetail,
) -> io::Result<()> {
    writeln!(out, "\n{}", heading(&format!("Subnet #{number} Details:")))?;
    writeln!(out, "{}", "=".repeat(50))?;

    let rows: [(&str, ColoredString); 8] = [
        ("Network Address:", detail.network_address.to_string().yellow()),
        ("Subnet Mask:", detail.subnet_mask.to_string().yellow()),
        ("Prefix Length:", format!("/{}", detail.prefix_length).yellow()),
        ("First Usable IP:", format_usable(detail.first_usable_ip).green()),
        ("Last Usable IP:", format_usable(detail.last_usable_ip).green()),
        (
            "Broadcast Address:",
            detail.broadcast_address.to_string().yellow(),
        ),
        ("Total Addresses:", detail.total_addresses.to_string().blue()),
        ("Usable Addresses:", detail.usable_addresses.to_string().blue()),
    ];
    for (name, value) in rows {
        writeln!(out, "{} {}", label(name), value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planning::SubnetPlanner;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_format_cell() {
        assert_eq!(format_cell("test", 6), "test  ");
        assert_eq!(format_cell("long_value", 5), "long_value");
        assert_eq!(format_cell(42, 4), "42  ");
    }

    #[test]
    fn test_format_usable() {
        assert_eq!(format_usable(None), "None");
        assert_eq!(
            format_usable(Some(Ipv4Address::new(10, 0, 0, 1))),
            "10.0.0.1"
        );
    }

    #[test]
    fn test_address_info() {
        let text = render(|out| write_address_info(out, "127.0.0.1".parse().unwrap()));
        assert!(text.contains("IP Class: Class A"));
        assert!(text.contains("Type: Private IP"));
        assert!(text.contains("Default Subnet Mask: 255.0.0.0 (/8)"));
    }

    #[test]
    fn test_plan_summary() {
        let plan = SubnetPlanner::for_address("192.168.1.0".parse().unwrap())
            .plan_from_subnet_count(4)
            .unwrap();
        let text = render(|out| write_plan_summary(out, &plan));
        assert!(text.contains("Subnet Mask: 255.255.255.192"));
        assert!(text.contains("Prefix Length: /26"));
        assert!(text.contains("Wildcard Mask: 0.0.0.63"));
        assert!(text.contains("Usable Hosts per Subnet: 62"));
        assert!(text.contains("Host Bits: 6"));
    }

    #[test]
    fn test_subnet_table_truncates() {
        let plan = SubnetPlanner::for_address("192.168.1.0".parse().unwrap())
            .plan_from_host_count(2)
            .unwrap();
        let text = render(|out| write_subnet_table(out, &plan, 10));
        assert!(text.contains("First 10 Subnets:"));
        assert!(text.contains("1    192.168.1.0/30"));
        assert!(text.contains("10   192.168.1.36/30    192.168.1.37    192.168.1.38    192.168.1.39"));
        assert!(!text.contains("192.168.1.40/30"));
        assert!(text.contains("... and 54 more subnets"));
    }

    #[test]
    fn test_subnet_table_short_plan() {
        let plan = SubnetPlanner::for_address("192.168.1.0".parse().unwrap())
            .plan_from_subnet_count(2)
            .unwrap();
        let text = render(|out| write_subnet_table(out, &plan, 10));
        assert!(text.contains("First 2 Subnets:"));
        assert!(!text.contains("more subnets"));
    }

    #[test]
    fn test_subnet_detail() {
        let detail = SubnetDetail::of("192.168.1.0/26".parse().unwrap());
        let text = render(|out| write_subnet_detail(out, 1, &detail));
        assert!(text.contains("Subnet #1 Details:"));
        assert!(text.contains("First Usable IP: 192.168.1.1"));
        assert!(text.contains("Last Usable IP: 192.168.1.62"));
        assert!(text.contains("Broadcast Address: 192.168.1.63"));
        assert!(text.contains("Usable Addresses: 62"));

        let detail = SubnetDetail::of("10.0.0.0/32".parse().unwrap());
        let text = render(|out| write_subnet_detail(out, 7, &detail));
        assert!(text.contains("First Usable IP: None"));
    }
}

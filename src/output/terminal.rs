//! Terminal output utilities.
//!
//! Provides formatting helpers and the human readable report.

use crate::models::{format_address, ChildSubnet};
use crate::processing::NetworkReport;
use colored::Colorize;

/// Shown where a network has no usable host range.
pub const NOT_APPLICABLE: &str = "N/A";

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Insert thousands separators, e.g. `16777214` -> `16,777,214`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn or_na(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_APPLICABLE.to_string())
}

/// Render the network record as labelled lines.
pub fn render_report(report: &NetworkReport) -> String {
    let net = &report.network;
    let rows = [
        ("Network Address", format_address(net.network_address)),
        ("Subnet Mask", format_address(net.subnet_mask)),
        ("Wildcard Mask", format_address(net.wildcard_mask)),
        ("Broadcast Address", format_address(net.broadcast_address)),
        ("First Usable IP", or_na(net.first_usable())),
        ("Last Usable IP", or_na(net.last_usable())),
        ("Total Hosts", group_thousands(net.total_hosts)),
        ("Usable Hosts", group_thousands(net.usable_hosts)),
    ];

    let mut out = String::new();
    out.push_str(&format!("{}\n", net.cidr().to_string().bold()));
    for (label, value) in rows {
        out.push_str(&format!("  {:<18} {}\n", format!("{label}:").cyan(), value));
    }
    out.push_str(&format!(
        "  {:<18} {}\n",
        "Network Class:".cyan(),
        report.classification.class
    ));
    out.push_str(&format!(
        "  {:<18} {}\n",
        "Address Type:".cyan(),
        report.classification.category
    ));
    out
}

/// Render child subnets as one line each.
pub fn render_subnets(subnets: &[ChildSubnet]) -> String {
    let mut out = String::new();
    for s in subnets {
        out.push_str(&format!(
            "{index:>6}  {cidr:<18} first={first:<15} last={last:<15} \
             broadcast={broadcast:<15} hosts={hosts}\n",
            index = format!("#{}", s.index).green(),
            cidr = s.cidr.to_string(),
            first = or_na(s.first_usable()),
            last = or_na(s.last_usable()),
            broadcast = s.broadcast(),
            hosts = group_thousands(s.usable_hosts),
        ));
    }
    out
}

pub fn print_report(report: &NetworkReport) {
    print!("{}", render_report(report));
}

/// Print child subnets with a count header; `total` may exceed `subnets.len()` when truncated.
pub fn print_subnets(subnets: &[ChildSubnet], total: usize) {
    println!("{} {}", "Subnets:".bold(), total);
    print!("{}", render_subnets(subnets));
    if total > subnets.len() {
        println!(
            "{} showing first {} of {} subnets",
            "NOTE".on_red(),
            subnets.len(),
            total
        );
    }
}

pub fn print_error(err: &dyn std::error::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::{calculate, split, SplitStrategy};

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("test", 6), "\"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 6), "  \"42\"");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(254), "254");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(65534), "65,534");
        assert_eq!(group_thousands(4294967296), "4,294,967,296");
    }

    #[test]
    fn test_render_report() {
        colored::control::set_override(false);
        let report = calculate("10.0.0.0/24").unwrap();
        let text = render_report(&report);
        assert!(text.starts_with("10.0.0.0/24\n"));
        assert!(text.contains("Subnet Mask:"));
        assert!(text.contains("255.255.255.0"));
        assert!(text.contains("10.0.0.254"));
        assert!(text.contains("Class A"));
        assert!(text.contains("Private (RFC 1918)"));

        let text = render_report(&calculate("10.0.0.1/32").unwrap());
        assert_eq!(text.matches(NOT_APPLICABLE).count(), 2);
    }

    #[test]
    fn test_render_subnets() {
        colored::control::set_override(false);
        let parent = calculate("172.16.0.0/22").unwrap().network;
        let children: Vec<ChildSubnet> = split(&parent, SplitStrategy::SubnetCount(4))
            .unwrap()
            .collect();
        let text = render_subnets(&children);
        assert_eq!(text.lines().count(), 4);
        assert!(text.lines().nth(3).unwrap().contains("172.16.3.0/24"));
        assert!(text.contains("hosts=254"));
    }

    #[test]
    fn test_render_subnets_line_layout() {
        colored::control::set_override(false);
        let parent = calculate("10.0.0.0/24").unwrap().network;
        let children: Vec<ChildSubnet> = split(&parent, SplitStrategy::TargetMask(25))
            .unwrap()
            .collect();
        let text = render_subnets(&children);
        let first = concat!(
            "    #1  10.0.0.0/25        first=10.0.0.1        last=10.0.0.126      ",
            "broadcast=10.0.0.127      hosts=126\n",
        );
        assert!(text.starts_with(first));
        assert_eq!(text.matches('\n').count(), 2);
        assert!(text.ends_with("hosts=126\n"));
    }
}

//! CSV output formatting for network and subnet records.

use crate::models::{format_address, ChildSubnet};
use crate::processing::NetworkReport;
use itertools::Itertools;

use super::terminal::{format_field, NOT_APPLICABLE};

const REPORT_HEADER: [&str; 11] = [
    "cidr",
    "network",
    "mask",
    "wildcard",
    "broadcast",
    "first_usable",
    "last_usable",
    "total_hosts",
    "usable_hosts",
    "class",
    "category",
];

const SUBNET_HEADER: [&str; 6] = [
    "index",
    "cidr",
    "first_usable",
    "last_usable",
    "broadcast",
    "usable_hosts",
];

fn header_row(names: &[&str], width: usize) -> String {
    names.iter().map(|n| format_field(n, width)).join(",")
}

/// Network record as a header line plus one data line.
pub fn render_report_csv(report: &NetworkReport) -> String {
    let net = &report.network;
    let row = [
        format_field(net.cidr(), 18),
        format_field(format_address(net.network_address), 17),
        format_field(format_address(net.subnet_mask), 17),
        format_field(format_address(net.wildcard_mask), 17),
        format_field(format_address(net.broadcast_address), 17),
        format_field(net.first_usable().unwrap_or_else(|| NOT_APPLICABLE.to_string()), 17),
        format_field(net.last_usable().unwrap_or_else(|| NOT_APPLICABLE.to_string()), 17),
        format_field(net.total_hosts, 12),
        format_field(net.usable_hosts, 12),
        format_field(report.classification.class, 21),
        format_field(report.classification.category, 23),
    ]
    .join(",");
    format!("{}\n{row}\n", header_row(&REPORT_HEADER, 0))
}

/// Child subnets as a header line plus one line per subnet.
pub fn render_subnets_csv(subnets: &[ChildSubnet]) -> String {
    let mut out = header_row(&SUBNET_HEADER, 0);
    out.push('\n');
    for s in subnets {
        out.push_str(&csv_row(s));
        out.push('\n');
    }
    out
}

fn csv_row(s: &ChildSubnet) -> String {
    format!(
        r#"{index},{cidr},{first},{last},{broadcast},{hosts}"#,
        index = format_field(s.index, 6),
        cidr = format_field(s.cidr, 20),
        first = format_field(s.first_usable().unwrap_or_else(|| NOT_APPLICABLE.to_string()), 17),
        last = format_field(s.last_usable().unwrap_or_else(|| NOT_APPLICABLE.to_string()), 17),
        broadcast = format_field(s.broadcast(), 17),
        hosts = format_field(s.usable_hosts, 12),
    )
}

//! Output formatting for calculator results.
//!
//! This module handles formatting and outputting network data:
//! - [`csv`] - CSV output formatting
//! - [`json`] - JSON documents
//! - [`terminal`] - Terminal output with colors

mod csv;
mod json;
mod terminal;

pub use csv::{render_report_csv, render_subnets_csv};
pub use json::{render_error_json, render_json, JsonDocument, JsonSplit};
pub use terminal::{
    format_field, group_thousands, print_error, print_report, print_subnets, render_report,
    render_subnets, NOT_APPLICABLE,
};

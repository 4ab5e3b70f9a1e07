//! Subnet calculation logic.
//!
//! This module contains the address arithmetic:
//! - [`parser`] - CIDR text to (address, prefix) pair
//! - [`calculator`] - Network, broadcast, masks and host counts
//! - [`classifier`] - Legacy class and special-use category
//! - [`splitter`] - Partitioning a network into child subnets

mod calculator;
mod classifier;
mod parser;
mod splitter;

// Re-export public functions
pub use calculator::{calculate, derive_network, NetworkReport};
pub use classifier::{classify, AddressCategory, AddressClass, Classification};
pub use parser::parse_cidr;
pub use splitter::{child_prefix, split, SplitBounds, SplitKind, SplitStrategy, Subnets};

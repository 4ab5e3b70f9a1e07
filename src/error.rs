//! Error types for CIDR parsing, network derivation and subnet splitting.

use thiserror::Error;

/// Every recoverable failure the calculator can report.
///
/// None of these are fatal: a failed parse clears the held network, a failed
/// split leaves it untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The text is not shaped like `a.b.c.d/n`.
    #[error("Invalid CIDR format '{input}'. Use format: x.x.x.x/y")]
    Syntax { input: String },

    /// An address octet is missing, non-numeric or outside 0-255.
    #[error("Invalid IPv4 address '{input}': {reason}")]
    Format { input: String, reason: String },

    /// Prefix length outside 0-32.
    #[error("Subnet mask /{prefix} must be between 0 and 32")]
    PrefixRange { prefix: String },

    /// A split would need a prefix longer than /30.
    #[error("Cannot split into /{prefix} subnets: maximum mask length is /30")]
    Capacity { prefix: u32 },

    /// A host-count split does not fit inside the parent network.
    #[error("Not enough address space in /{parent_prefix} for {hosts} hosts per subnet")]
    InsufficientSpace { hosts: u32, parent_prefix: u8 },

    /// Target mask is not strictly longer than the parent, or exceeds /30.
    #[error(
        "Target mask /{target} must be larger than current mask /{parent_prefix} and at most /30"
    )]
    InvalidTargetMask { target: u32, parent_prefix: u8 },

    /// Split parameter missing, non-numeric, below 2 or out of bounds.
    #[error("Invalid split parameter: {0}")]
    InvalidParameter(String),

    /// A split was requested with no network held.
    #[error("No network to split, enter a valid CIDR first")]
    NoNetwork,
}

impl CalcError {
    /// Stable tag for machine readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            CalcError::Syntax { .. } => "syntax",
            CalcError::Format { .. } => "format",
            CalcError::PrefixRange { .. } => "prefix-range",
            CalcError::Capacity { .. } => "capacity",
            CalcError::InsufficientSpace { .. } => "insufficient-space",
            CalcError::InvalidTargetMask { .. } => "invalid-target-mask",
            CalcError::InvalidParameter(_) => "invalid-parameter",
            CalcError::NoNetwork => "no-network",
        }
    }

    pub(crate) fn format(input: &str, reason: impl Into<String>) -> Self {
        CalcError::Format {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_rule() {
        let err = CalcError::PrefixRange {
            prefix: "33".to_string(),
        };
        assert_eq!(err.to_string(), "Subnet mask /33 must be between 0 and 32");

        let err = CalcError::InvalidTargetMask {
            target: 24,
            parent_prefix: 24,
        };
        assert!(err.to_string().contains("/24 must be larger than current mask /24"));
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(CalcError::NoNetwork.kind(), "no-network");
        assert_eq!(CalcError::Capacity { prefix: 31 }.kind(), "capacity");
        assert_eq!(CalcError::format("1.2.3", "expected 4 octets").kind(), "format");
    }
}

//! Subnet splitting.
//!
//! Partitions a parent [`Network`] into equal child subnets under one of three
//! strategies. All strategies share the generation step in [`Subnets`]: children
//! start at the parent network address, advance by the child block size, and
//! never start past the parent broadcast address.

use crate::config::{
    HOST_COUNT_MAX, MAX_LENGTH, MAX_SPLIT_LENGTH, MIN_SPLIT_PARAMETER, SUBNET_COUNT_MAX,
};
use crate::error::CalcError;
use crate::models::{block_size, ChildSubnet, Network};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Strategy selector without its parameter.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SplitKind {
    #[value(alias = "subnets")]
    SubnetCount,
    #[value(alias = "hosts")]
    HostCount,
    #[value(alias = "mask")]
    TargetMask,
}

impl fmt::Display for SplitKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tag = match self {
            SplitKind::SubnetCount => "subnet-count",
            SplitKind::HostCount => "host-count",
            SplitKind::TargetMask => "target-mask",
        };
        f.write_str(tag)
    }
}

impl FromStr for SplitKind {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "subnet-count" | "subnets" => Ok(SplitKind::SubnetCount),
            "host-count" | "hosts" => Ok(SplitKind::HostCount),
            "target-mask" | "mask" => Ok(SplitKind::TargetMask),
            other => Err(CalcError::InvalidParameter(format!(
                "unknown split strategy '{other}', expected subnet-count, host-count or target-mask"
            ))),
        }
    }
}

/// How to split a parent network, with its numeric parameter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SplitStrategy {
    /// Split into at least this many equal subnets.
    SubnetCount(u32),
    /// Smallest subnets that hold this many usable hosts each.
    HostCount(u32),
    /// Split into subnets of this prefix length.
    TargetMask(u32),
}

impl SplitStrategy {
    pub fn new(kind: SplitKind, value: u32) -> SplitStrategy {
        match kind {
            SplitKind::SubnetCount => SplitStrategy::SubnetCount(value),
            SplitKind::HostCount => SplitStrategy::HostCount(value),
            SplitKind::TargetMask => SplitStrategy::TargetMask(value),
        }
    }

    /// Build a strategy from a selector tag and the raw parameter text.
    ///
    /// Fails with [`CalcError::InvalidParameter`] when the tag is unknown or
    /// the value is missing, non-numeric or below 2.
    pub fn parse(selector: &str, value: Option<&str>) -> Result<SplitStrategy, CalcError> {
        let kind: SplitKind = selector.parse()?;
        let text = value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| CalcError::InvalidParameter("a number is required".to_string()))?;
        let value: u32 = text.parse().map_err(|_| {
            CalcError::InvalidParameter(format!("'{text}' is not a valid number"))
        })?;
        if value < MIN_SPLIT_PARAMETER {
            return Err(CalcError::InvalidParameter(format!(
                "please enter a valid number (minimum {MIN_SPLIT_PARAMETER}), got {value}"
            )));
        }
        Ok(SplitStrategy::new(kind, value))
    }

    pub fn kind(&self) -> SplitKind {
        match self {
            SplitStrategy::SubnetCount(_) => SplitKind::SubnetCount,
            SplitStrategy::HostCount(_) => SplitKind::HostCount,
            SplitStrategy::TargetMask(_) => SplitKind::TargetMask,
        }
    }

    pub fn value(&self) -> u32 {
        match *self {
            SplitStrategy::SubnetCount(v)
            | SplitStrategy::HostCount(v)
            | SplitStrategy::TargetMask(v) => v,
        }
    }
}

impl fmt::Display for SplitStrategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.value())
    }
}

/// Inclusive range of parameter values offered for a strategy on a given parent.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct SplitBounds {
    pub min: u32,
    pub max: u32,
}

impl SplitBounds {
    pub fn for_strategy(kind: SplitKind, parent: &Network) -> SplitBounds {
        match kind {
            SplitKind::SubnetCount => SplitBounds {
                min: MIN_SPLIT_PARAMETER,
                max: SUBNET_COUNT_MAX,
            },
            SplitKind::HostCount => SplitBounds {
                min: MIN_SPLIT_PARAMETER,
                max: HOST_COUNT_MAX,
            },
            SplitKind::TargetMask => SplitBounds {
                min: u32::from(parent.prefix_length) + 1,
                max: u32::from(MAX_SPLIT_LENGTH),
            },
        }
    }

    /// Empty when `min > max`, e.g. target mask on a /30 parent.
    pub fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

/// Number of bits needed to count `n` distinct values, i.e. ceil(log2(n)).
fn ceil_log2(n: u64) -> u32 {
    if n <= 1 {
        0
    } else {
        u64::BITS - (n - 1).leading_zeros()
    }
}

fn check_minimum(value: u32, what: &str) -> Result<(), CalcError> {
    if value < MIN_SPLIT_PARAMETER {
        Err(CalcError::InvalidParameter(format!(
            "{what} must be at least {MIN_SPLIT_PARAMETER}, got {value}"
        )))
    } else {
        Ok(())
    }
}

/// Prefix length of the children a strategy produces from `parent`.
pub fn child_prefix(parent: &Network, strategy: SplitStrategy) -> Result<u8, CalcError> {
    let parent_prefix = parent.prefix_length;
    let max_split = u32::from(MAX_SPLIT_LENGTH);

    let new_prefix = match strategy {
        SplitStrategy::SubnetCount(count) => {
            check_minimum(count, "subnet count")?;
            let new_prefix = u32::from(parent_prefix) + ceil_log2(u64::from(count));
            if new_prefix > max_split {
                return Err(CalcError::Capacity { prefix: new_prefix });
            }
            new_prefix
        }
        SplitStrategy::HostCount(hosts) => {
            check_minimum(hosts, "host count")?;
            // network and broadcast are reserved
            let host_bits = ceil_log2(u64::from(hosts) + 2);
            let new_prefix = i64::from(MAX_LENGTH) - i64::from(host_bits);
            if new_prefix <= i64::from(parent_prefix) {
                return Err(CalcError::InsufficientSpace {
                    hosts,
                    parent_prefix,
                });
            }
            if new_prefix > i64::from(max_split) {
                return Err(CalcError::Capacity {
                    prefix: new_prefix as u32,
                });
            }
            new_prefix as u32
        }
        SplitStrategy::TargetMask(target) => {
            if target <= u32::from(parent_prefix) || target > max_split {
                return Err(CalcError::InvalidTargetMask {
                    target,
                    parent_prefix,
                });
            }
            target
        }
    };

    // bounded by MAX_SPLIT_LENGTH above
    Ok(new_prefix as u8)
}

/// Split `parent` into child subnets.
///
/// The children are produced lazily in address order; collect them to get the
/// full sequence. Re-running with the same inputs yields the same children.
pub fn split(parent: &Network, strategy: SplitStrategy) -> Result<Subnets, CalcError> {
    let new_prefix = child_prefix(parent, strategy)?;
    let subnet_size = block_size(new_prefix)?;
    let capacity = parent.span() / subnet_size;

    let requested = match strategy {
        SplitStrategy::SubnetCount(count) => u64::from(count),
        SplitStrategy::HostCount(_) | SplitStrategy::TargetMask(_) => capacity,
    };

    log::debug!(
        "split({cidr}, {strategy}) -> /{new_prefix} size={subnet_size} \
         requested={requested} capacity={capacity}",
        cidr = parent.cidr()
    );
    if requested > capacity {
        log::warn!(
            "Requested {requested} subnets but {cidr} only fits {capacity} /{new_prefix} subnets",
            cidr = parent.cidr()
        );
    }

    Ok(Subnets {
        start: u64::from(parent.network_address),
        broadcast: u64::from(parent.broadcast_address),
        subnet_size,
        prefix: new_prefix,
        count: requested.min(capacity),
        next: 0,
    })
}

/// Lazy sequence of child subnets from [`split`].
#[derive(Debug, Clone)]
pub struct Subnets {
    start: u64,
    broadcast: u64,
    subnet_size: u64,
    prefix: u8,
    count: u64,
    next: u64,
}

impl Subnets {
    /// Prefix length shared by every child.
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Addresses per child.
    pub fn subnet_size(&self) -> u64 {
        self.subnet_size
    }
}

impl Iterator for Subnets {
    type Item = ChildSubnet;

    fn next(&mut self) -> Option<ChildSubnet> {
        if self.next >= self.count {
            return None;
        }
        let subnet_start = self.start + self.next * self.subnet_size;
        if subnet_start > self.broadcast {
            self.next = self.count;
            return None;
        }
        self.next += 1;

        // `start` is aligned to `prefix` and the step is one block, so every
        // child start is aligned too.
        let child = ChildSubnet::from_block(self.next as usize, subnet_start as u32, self.prefix);
        log::trace!("split child #{} {}", child.index, child.cidr);
        Some(child)
    }

    fn nth(&mut self, n: usize) -> Option<ChildSubnet> {
        self.next = self.next.saturating_add(n as u64).min(self.count);
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Subnets {}

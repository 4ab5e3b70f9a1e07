//! IPv4 subnet calculator.
//!
//! Parses CIDR notation, derives network/broadcast addresses, masks and
//! usable host ranges, classifies the address, and splits a network into
//! child subnets by subnet count, host count or target mask.
//!
//! The arithmetic lives in [`processing`] as pure functions. [`SubnetCalculator`]
//! holds the "current network" for front ends that work on one network at a time.

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::CalcError;
pub use models::{ChildSubnet, HostRange, Ipv4, Network};
pub use processing::{calculate, split, NetworkReport, SplitBounds, SplitKind, SplitStrategy};

/// Holds the currently selected network.
///
/// A successful [`calculate`](SubnetCalculator::calculate) replaces the held
/// network; empty or invalid input clears it. Splits read it but never change it.
#[derive(Debug, Default, Clone)]
pub struct SubnetCalculator {
    current: Option<NetworkReport>,
}

impl SubnetCalculator {
    pub fn new() -> SubnetCalculator {
        SubnetCalculator::default()
    }

    /// Parse `cidr` and make it the held network.
    ///
    /// # Returns
    /// * `Ok(None)` - input was blank, nothing is held
    /// * `Ok(Some(report))` - the new held network
    /// * `Err` - input was invalid, nothing is held
    pub fn calculate(&mut self, cidr: &str) -> Result<Option<&NetworkReport>, CalcError> {
        if cidr.trim().is_empty() {
            log::debug!("Empty input, clearing held network");
            self.current = None;
            return Ok(None);
        }

        match processing::calculate(cidr) {
            Ok(report) => {
                log::info!("Calculated {}", report.network.cidr());
                self.current = Some(report);
                Ok(self.current.as_ref())
            }
            Err(e) => {
                log::debug!("Clearing held network: {e}");
                self.current = None;
                Err(e)
            }
        }
    }

    pub fn current(&self) -> Option<&NetworkReport> {
        self.current.as_ref()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Splitting is offered only below /30.
    pub fn can_split(&self) -> bool {
        self.current
            .map(|r| r.network.prefix_length < config::MAX_SPLIT_LENGTH)
            .unwrap_or(false)
    }

    /// Parameter range accepted for `kind` on the held network.
    pub fn split_bounds(&self, kind: SplitKind) -> Option<SplitBounds> {
        self.current
            .as_ref()
            .map(|r| SplitBounds::for_strategy(kind, &r.network))
    }

    /// Split the held network into child subnets.
    pub fn split(&self, strategy: SplitStrategy) -> Result<Vec<ChildSubnet>, CalcError> {
        let report = self.current.as_ref().ok_or(CalcError::NoNetwork)?;
        let subnets = processing::split(&report.network, strategy)?;
        Ok(subnets.collect())
    }

    /// Split the held network from a strategy tag and raw parameter text,
    /// keeping at most `limit` children.
    ///
    /// The engine rules decide first, so a target mask that does not subdivide
    /// the network is `InvalidTargetMask` and a /30 parent is `Capacity`. The
    /// offered subnet and host count maximums are checked only once the split
    /// itself is valid.
    pub fn split_request(
        &self,
        kind: SplitKind,
        value: Option<&str>,
        limit: usize,
    ) -> Result<SplitOutcome, CalcError> {
        let report = self.current.as_ref().ok_or(CalcError::NoNetwork)?;
        let strategy = SplitStrategy::parse(&kind.to_string(), value)?;
        let subnets = processing::split(&report.network, strategy)?;

        let bounds = SplitBounds::for_strategy(kind, &report.network);
        if !bounds.contains(strategy.value()) {
            return Err(CalcError::InvalidParameter(format!(
                "{kind} must be between {} and {}, got {}",
                bounds.min,
                bounds.max,
                strategy.value()
            )));
        }

        let total = subnets.len();
        log::info!(
            "Split {} by {strategy} into {total} subnets",
            report.network.cidr()
        );
        Ok(SplitOutcome {
            strategy,
            total,
            subnets: subnets.take(limit).collect(),
        })
    }
}

/// Children of one split request, possibly cut short of `total`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOutcome {
    pub strategy: SplitStrategy,
    /// Number of children the split produces.
    pub total: usize,
    /// The first children, up to the requested limit.
    pub subnets: Vec<ChildSubnet>,
}

impl SplitOutcome {
    pub fn is_truncated(&self) -> bool {
        self.total > self.subnets.len()
    }
}

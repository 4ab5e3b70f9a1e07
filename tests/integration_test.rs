//! Integration tests for ipv4-subnet-calc
//!
//! These tests verify the complete workflow from CIDR text to split subnets.

use ipv4_subnet_calc::{
    models::format_address,
    processing::{calculate, split, AddressCategory, AddressClass},
    CalcError, ChildSubnet, SplitKind, SplitStrategy, SubnetCalculator,
};

#[test]
fn test_full_workflow() {
    let mut calc = SubnetCalculator::new();
    let report = *calc
        .calculate("172.16.0.0/22")
        .expect("Failed to calculate")
        .expect("Expected a network");

    assert_eq!(format_address(report.network.subnet_mask), "255.255.252.0");
    assert_eq!(report.network.usable_hosts, 1022);
    assert_eq!(report.classification.class, AddressClass::B);
    assert_eq!(report.classification.category, AddressCategory::Private);

    let strategy = SplitStrategy::parse("subnet-count", Some("4")).expect("Bad split request");
    let children = calc.split(strategy).expect("Failed to split");
    let names: Vec<String> = children.iter().map(|c| c.cidr().to_string()).collect();
    assert_eq!(
        names,
        vec!["172.16.0.0/24", "172.16.1.0/24", "172.16.2.0/24", "172.16.3.0/24"]
    );
    assert!(children.iter().all(|c| c.usable_hosts == 254));
}

#[test]
fn test_documented_examples() {
    let net = calculate("10.0.0.0/24").unwrap().network;
    assert_eq!(format_address(net.network_address), "10.0.0.0");
    assert_eq!(format_address(net.subnet_mask), "255.255.255.0");
    assert_eq!(format_address(net.broadcast_address), "10.0.0.255");
    assert_eq!(net.first_usable().as_deref(), Some("10.0.0.1"));
    assert_eq!(net.last_usable().as_deref(), Some("10.0.0.254"));
    assert_eq!(net.usable_hosts, 254);

    let net = calculate("0.0.0.0/0").unwrap().network;
    assert_eq!(net.total_hosts, 4_294_967_296);
    assert_eq!(net.network_address, 0);
}

#[test]
fn test_slash_30_cannot_split() {
    let mut calc = SubnetCalculator::new();
    let report = *calc.calculate("192.168.1.0/30").unwrap().unwrap();
    assert_eq!(report.network.usable_hosts, 2);
    assert_eq!(report.network.first_usable().as_deref(), Some("192.168.1.1"));
    assert_eq!(report.network.last_usable().as_deref(), Some("192.168.1.2"));
    assert!(!calc.can_split());
    assert!(calc
        .split_bounds(SplitKind::TargetMask)
        .map(|b| b.is_empty())
        .unwrap_or(false));
    assert!(calc.split(SplitStrategy::SubnetCount(2)).is_err());
    assert!(calc.split(SplitStrategy::TargetMask(31)).is_err());
}

#[test]
fn test_malformed_input() {
    assert!(matches!(calculate("10.0.0/24"), Err(CalcError::Format { .. })));
    assert!(matches!(calculate("10.0.0.0/33"), Err(CalcError::PrefixRange { .. })));
    assert!(matches!(calculate("999.1.1.1/24"), Err(CalcError::Format { .. })));
    assert!(matches!(calculate("10.0.0.0"), Err(CalcError::Syntax { .. })));
}

#[test]
fn test_split_strategies_agree() {
    let parent = calculate("10.20.0.0/16").unwrap().network;
    let children = |strategy| split(&parent, strategy).unwrap().collect::<Vec<ChildSubnet>>();
    let by_mask = children(SplitStrategy::TargetMask(20));
    let by_count = children(SplitStrategy::SubnetCount(16));
    // 4000 hosts + 2 reserved -> 12 host bits -> /20
    let by_hosts = children(SplitStrategy::HostCount(4000));
    assert_eq!(by_mask.len(), 16);
    assert_eq!(by_mask, by_count);
    assert_eq!(by_mask, by_hosts);
    assert_eq!(by_mask.last().unwrap().cidr().to_string(), "10.20.240.0/20");
}

#[test]
fn test_subnet_count_rounds_up_to_power_of_two() {
    // 5 subnets need 3 bits; all 5 fit in the 8 /27 blocks of a /24
    let parent = calculate("10.0.0.0/24").unwrap().network;
    let children: Vec<ChildSubnet> =
        split(&parent, SplitStrategy::SubnetCount(5)).unwrap().collect();
    assert_eq!(children.len(), 5);
    assert_eq!(children.last().unwrap().cidr().to_string(), "10.0.0.128/27");
    assert_eq!(children.last().unwrap().broadcast(), "10.0.0.159");
}

//! Integration tests for vlsm-planner
//!
//! These tests verify the complete workflow from CIDR text to rendered plan.

use std::net::Ipv4Addr;

use vlsm_planner::build_plan;
use vlsm_planner::models::{BaseNetwork, SegmentRequest};
use vlsm_planner::output::{plan_csv, plan_table};
use vlsm_planner::processing::allocate;

#[test]
fn test_full_workflow() {
    let plan = build_plan("192.168.1.0/24", &[50, 10, 2]).expect("Failed to build plan");

    assert_eq!(plan.len(), 3);

    assert_eq!(plan[0].required_hosts, 50);
    assert_eq!(plan[0].network, Ipv4Addr::new(192, 168, 1, 0));
    assert_eq!(plan[0].prefix, 26);
    assert_eq!(plan[0].broadcast, Ipv4Addr::new(192, 168, 1, 63));
    assert_eq!(plan[0].first_usable, Some(Ipv4Addr::new(192, 168, 1, 1)));
    assert_eq!(plan[0].last_usable, Some(Ipv4Addr::new(192, 168, 1, 62)));

    assert_eq!(plan[1].required_hosts, 10);
    assert_eq!(plan[1].network, Ipv4Addr::new(192, 168, 1, 64));
    assert_eq!(plan[1].prefix, 28);
    assert_eq!(plan[1].broadcast, Ipv4Addr::new(192, 168, 1, 79));

    assert_eq!(plan[2].required_hosts, 2);
    assert_eq!(plan[2].network, Ipv4Addr::new(192, 168, 1, 80));
    assert_eq!(plan[2].prefix, 30);
    assert_eq!(plan[2].broadcast, Ipv4Addr::new(192, 168, 1, 83));

    // Output order matches input order.
    let indices: Vec<usize> = plan.iter().map(|s| s.original_index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn test_rendered_outputs() {
    let base = BaseNetwork::parse("192.168.1.0/24").unwrap();
    let plan = build_plan("192.168.1.0/24", &[50, 10, 2]).unwrap();

    let table = plan_table(&base, &plan);
    assert!(table.contains("Base Network: 192.168.1.0/24"));
    assert!(table.contains("192.168.1.64/28"));
    assert!(table.contains("192.168.1.1 - 192.168.1.62"));

    let csv = plan_csv(&base, &plan);
    assert_eq!(csv.lines().count(), 4, "header plus three rows");
    assert!(csv.contains("\"192.168.1.80/30\""));
}

#[test]
fn test_plan_serializes_to_json() {
    let plan = build_plan("10.0.0.0/24", &[20]).unwrap();
    let json = serde_json::to_string_pretty(&plan).expect("Failed to serialize plan");
    assert!(json.contains("\"network\": \"10.0.0.0\""));
    assert!(json.contains("\"mask\": \"255.255.255.224\""));
}

#[test]
fn test_exhaustion_fails_whole_plan() {
    let err = build_plan("10.0.0.0/30", &[10]).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("need 16 addresses"), "got: {msg}");
    assert!(msg.contains("only 4 remaining"), "got: {msg}");
}

#[test]
fn test_input_validation() {
    assert!(build_plan("192.168.1.0", &[10]).is_err());
    assert!(build_plan("192.168.1.0/40", &[10]).is_err());
    assert!(build_plan("192.168.1.300/24", &[10]).is_err());
    assert!(build_plan("192.168.1.0/24", &[]).is_err());
    assert!(build_plan("192.168.1.0/24", &[0]).is_err());
    assert!(build_plan("192.168.1.0/24", &[65535]).is_err());
}

#[test]
fn test_plans_are_idempotent() {
    let segments: Vec<SegmentRequest> = [300u32, 60, 2, 17, 17]
        .iter()
        .enumerate()
        .map(|(i, &h)| SegmentRequest::new(i, h))
        .collect();
    let base = BaseNetwork::parse("172.16.0.0/20").unwrap();

    let first = allocate(&base, &segments).unwrap();
    let second = allocate(&base, &segments).unwrap();
    assert_eq!(first, second);
}

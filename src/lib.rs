//! VLSM allocation planner.
//!
//! Splits a base IPv4 network into the smallest adequate, non-overlapping
//! subnets for a list of per-segment host counts. The core (`models`,
//! `processing`) is pure; `shell` and `output` handle prompting and display.

pub mod error;
pub mod models;
pub mod output;
pub mod processing;
pub mod shell;

pub use error::{AllocationError, FormatError};

use models::{AllocatedSubnet, BaseNetwork, SegmentRequest, MAX_SEGMENT_HOSTS};

/// Parse a base network and allocate one subnet per host count, in one call.
///
/// Convenience wrapper over [`BaseNetwork::parse`] and
/// [`processing::allocate`] for callers that do not need the interactive
/// shell. The returned plan is in the same order as `hosts`.
pub fn build_plan(
    base_cidr: &str,
    hosts: &[u32],
) -> Result<Vec<AllocatedSubnet>, Box<dyn std::error::Error>> {
    if hosts.is_empty() {
        return Err("at least one segment is required".into());
    }
    for &h in hosts {
        if h == 0 || h > MAX_SEGMENT_HOSTS {
            return Err(
                format!("segment host count {h} out of range 1..={MAX_SEGMENT_HOSTS}").into(),
            );
        }
    }

    let base = BaseNetwork::parse(base_cidr)?;
    let segments: Vec<SegmentRequest> = hosts
        .iter()
        .enumerate()
        .map(|(i, &h)| SegmentRequest::new(i, h))
        .collect();
    Ok(processing::allocate(&base, &segments)?)
}

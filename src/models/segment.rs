//! Segment demand and allocation result records.

use std::net::Ipv4Addr;

use serde::Serialize;

/// Maximum hosts a single segment may request (a /16 minus network/broadcast).
pub const MAX_SEGMENT_HOSTS: u32 = 65534;

/// One user-supplied segment demand.
///
/// `original_index` is the 0-based input position; the allocator sorts by
/// demand internally but the final plan is handed back in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SegmentRequest {
    pub original_index: usize,
    /// Positive host count, 1..=[`MAX_SEGMENT_HOSTS`] by policy.
    pub required_hosts: u32,
}

impl SegmentRequest {
    pub fn new(original_index: usize, required_hosts: u32) -> SegmentRequest {
        SegmentRequest {
            original_index,
            required_hosts,
        }
    }
}

/// Final addressing details for one segment.
///
/// Produced by the allocator; ranges of distinct subnets in a plan are
/// disjoint and contained in the base network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AllocatedSubnet {
    pub original_index: usize,
    pub required_hosts: u32,
    /// First address of the block.
    pub network: Ipv4Addr,
    /// Last address of the block.
    pub broadcast: Ipv4Addr,
    pub prefix: u8,
    /// Dotted-quad subnet mask.
    pub mask: Ipv4Addr,
    /// Addresses in the block, always a power of two.
    pub block_size: u64,
    /// `block_size - 2` (network and broadcast reserved), 0 for tiny blocks.
    pub usable_hosts: u64,
    /// `network + 1`, or `None` when the block has no usable hosts.
    pub first_usable: Option<Ipv4Addr>,
    /// `broadcast - 1`, or `None` when the block has no usable hosts.
    pub last_usable: Option<Ipv4Addr>,
}

impl AllocatedSubnet {
    /// CIDR notation of the allocated block, e.g. `192.168.1.64/28`.
    pub fn cidr(&self) -> String {
        format!("{}/{}", self.network, self.prefix)
    }
}

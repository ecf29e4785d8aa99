//! Domain models for the VLSM planner.
//!
//! - [`ipv4`] - address codec and mask math
//! - [`network`] - the parent block ([`BaseNetwork`])
//! - [`segment`] - segment demands and allocation results

mod ipv4;
mod network;
mod segment;

// Re-export public types
pub use ipv4::{block_size, broadcast_addr, decode, encode, mask_for, prefix_mask, MAX_LENGTH};
pub use network::BaseNetwork;
pub use segment::{AllocatedSubnet, SegmentRequest, MAX_SEGMENT_HOSTS};

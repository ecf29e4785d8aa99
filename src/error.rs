//! Error types for the VLSM planner.
//!
//! Parsing problems are recoverable ([`FormatError`], the shell re-prompts);
//! running out of address space fails the whole plan ([`AllocationError`]).

/// Malformed base-network or address text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// Input did not split into exactly `address/prefix`.
    #[error("expected address/prefix (e.g. 192.168.1.0/24), got {0:?}")]
    MissingPrefix(String),

    /// Prefix length was not an integer in 0..=32.
    #[error("prefix length must be an integer between 0 and 32, got {0:?}")]
    InvalidPrefix(String),

    /// Address did not have exactly four dotted octets.
    #[error("expected four dotted octets, got {0:?}")]
    InvalidAddress(String),

    /// An octet was not an integer in 0..=255.
    #[error("octet must be an integer between 0 and 255, got {0:?}")]
    InvalidOctet(String),
}

/// Not enough address space left to place a segment.
///
/// Returned by [`allocate`](crate::processing::allocate) when the next block
/// does not fit in the base network. The plan fails as a whole; no partial
/// result is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "not enough IP space for segment {original_index} ({required_hosts} hosts): \
     need {requested} addresses but only {remaining} remaining"
)]
pub struct AllocationError {
    /// Input position of the segment that failed to fit.
    pub original_index: usize,
    /// Host requirement of that segment.
    pub required_hosts: u32,
    /// Addresses the segment's block needs.
    pub requested: u64,
    /// Addresses left in the base network at that point.
    pub remaining: u64,
}

//! Allocation logic for the VLSM planner.
//!
//! - [`sizing`] - minimal power-of-two block per segment
//! - [`allocator`] - sequential placement within the base network

mod allocator;
mod sizing;

// Re-export public functions
pub use allocator::allocate;
pub use sizing::SubnetSizing;

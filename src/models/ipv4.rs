//! IPv4 address codec and mask utilities.
//!
//! Converts between dotted-quad text and the `u32` representation used by the
//! allocator, and derives subnet masks from CIDR prefix lengths.

use std::net::Ipv4Addr;

use crate::error::FormatError;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Parse a dotted-quad address into its `u32` form.
///
/// Requires exactly four octets, each an integer in 0..=255.
///
/// # Examples
/// ```
/// use vlsm_planner::models::encode;
/// assert_eq!(encode("192.168.1.0").unwrap(), 0xC0A80100);
/// ```
pub fn encode(dotted: &str) -> Result<u32, FormatError> {
    let parts: Vec<&str> = dotted.split('.').collect();
    if parts.len() != 4 {
        return Err(FormatError::InvalidAddress(dotted.to_string()));
    }
    let mut bits: u32 = 0;
    for part in parts {
        let octet: u8 = part
            .parse()
            .map_err(|_| FormatError::InvalidOctet(part.to_string()))?;
        bits = (bits << 8) | u32::from(octet);
    }
    Ok(bits)
}

/// Render a `u32` address as a dotted quad. Total inverse of [`encode`].
pub fn decode(bits: u32) -> String {
    Ipv4Addr::from(bits).to_string()
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use vlsm_planner::models::prefix_mask;
/// assert_eq!(prefix_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn prefix_mask(len: u8) -> Result<u32, FormatError> {
    if len > MAX_LENGTH {
        Err(FormatError::InvalidPrefix(len.to_string()))
    } else {
        Ok(mask_for(len))
    }
}

/// Mask for a prefix length already known to be in range.
///
/// The widening shift keeps prefix 0 well defined (mask 0).
pub fn mask_for(len: u8) -> u32 {
    debug_assert!(len <= MAX_LENGTH);
    let right_len = MAX_LENGTH - len;
    let all_bits = u32::MAX as u64;

    ((all_bits >> right_len) << right_len) as u32
}

/// Number of addresses in a block with the given prefix length.
///
/// u64 so that prefix 0 (the whole address space) does not overflow.
pub fn block_size(len: u8) -> u64 {
    debug_assert!(len <= MAX_LENGTH);
    1u64 << (MAX_LENGTH - len)
}

/// Broadcast (last) address of the block containing `addr` under `mask`.
pub fn broadcast_addr(addr: u32, mask: u32) -> u32 {
    (addr & mask) | !mask
}

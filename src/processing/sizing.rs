//! Subnet sizing for a single segment.

use crate::models::{mask_for, MAX_LENGTH};

/// Derived sizing for one segment's subnet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetSizing {
    /// Addresses in the block, always a power of two.
    pub block_size: u64,
    /// Prefix length, `32 - log2(block_size)`.
    pub prefix: u8,
    /// Subnet mask derived from `prefix`.
    pub mask: u32,
    /// `block_size - 2`, 0 when the block has no room for hosts.
    pub usable_hosts: u64,
}

impl SubnetSizing {
    /// Smallest power-of-two block that fits `required_hosts` plus the
    /// network and broadcast addresses.
    ///
    /// `required_hosts == 2` is forced to a /30 point-to-point block. The
    /// generic `+2` rule already lands on /30 for two hosts, so this is a
    /// defensive override rather than a behavior change; the allocator
    /// applies the authoritative `<= 2` floor on top of it.
    ///
    /// Has no failure mode; callers pre-validate the host count
    /// (1..=[`MAX_SEGMENT_HOSTS`](crate::models::MAX_SEGMENT_HOSTS)).
    pub fn for_hosts(required_hosts: u32) -> SubnetSizing {
        let total = u64::from(required_hosts) + 2;
        let mut block_size: u64 = 1;
        while block_size < total {
            block_size *= 2;
        }

        let mut prefix = MAX_LENGTH - block_size.trailing_zeros() as u8;
        if required_hosts == 2 && prefix != 30 {
            prefix = 30;
            block_size = 4;
        }

        SubnetSizing {
            block_size,
            prefix,
            mask: mask_for(prefix),
            usable_hosts: block_size.saturating_sub(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MAX_SEGMENT_HOSTS;

    #[test]
    fn test_for_hosts() {
        let sizing = SubnetSizing::for_hosts(50);
        assert_eq!(sizing.block_size, 64);
        assert_eq!(sizing.prefix, 26);
        assert_eq!(sizing.mask, 0xFFFFFFC0);
        assert_eq!(sizing.usable_hosts, 62);

        let sizing = SubnetSizing::for_hosts(10);
        assert_eq!(sizing.block_size, 16);
        assert_eq!(sizing.prefix, 28);
        assert_eq!(sizing.usable_hosts, 14);

        let sizing = SubnetSizing::for_hosts(254);
        assert_eq!(sizing.block_size, 256);
        assert_eq!(sizing.prefix, 24);

        // One over a full /24 spills into a /23.
        let sizing = SubnetSizing::for_hosts(255);
        assert_eq!(sizing.block_size, 512);
        assert_eq!(sizing.prefix, 23);
    }

    #[test]
    fn test_minimum_block() {
        // A single host still needs a /30 (network + broadcast reserved).
        let sizing = SubnetSizing::for_hosts(1);
        assert_eq!(sizing.block_size, 4);
        assert_eq!(sizing.prefix, 30);
        assert_eq!(sizing.usable_hosts, 2);
    }

    #[test]
    fn test_two_host_special_case() {
        let sizing = SubnetSizing::for_hosts(2);
        assert_eq!(sizing.prefix, 30);
        assert_eq!(sizing.block_size, 4);
        assert_eq!(sizing.mask, 0xFFFFFFFC);
        assert_eq!(sizing.usable_hosts, 2);
    }

    #[test]
    fn test_max_policy_hosts() {
        let sizing = SubnetSizing::for_hosts(MAX_SEGMENT_HOSTS);
        assert_eq!(sizing.block_size, 65536);
        assert_eq!(sizing.prefix, 16);
        assert_eq!(sizing.usable_hosts, 65534);
    }

    #[test]
    fn test_smallest_adequate_power_of_two() {
        for hosts in 1..=2048u32 {
            let sizing = SubnetSizing::for_hosts(hosts);
            assert!(sizing.block_size.is_power_of_two(), "hosts={hosts}");
            assert!(
                sizing.block_size >= u64::from(hosts) + 2,
                "hosts={hosts} block={}",
                sizing.block_size
            );
            assert!(
                sizing.block_size == 4 || sizing.block_size / 2 < u64::from(hosts) + 2,
                "hosts={hosts} block={} is not minimal",
                sizing.block_size
            );
            assert_eq!(sizing.usable_hosts, sizing.block_size - 2);
        }
    }
}

//! Sequential VLSM allocation over a base network.

use std::net::Ipv4Addr;

use itertools::Itertools;

use super::sizing::SubnetSizing;
use crate::error::AllocationError;
use crate::models::{mask_for, AllocatedSubnet, BaseNetwork, SegmentRequest};

/// Carve one subnet per segment out of `base`, largest demand first.
///
/// Placement walks a cursor from the base network address, assigning
/// contiguous blocks with no alignment gaps. The returned plan is re-sorted
/// by `original_index`, so output order matches input order regardless of
/// allocation order. Deterministic for a fixed input.
///
/// Fails all-or-nothing: the first segment that does not fit aborts the plan
/// with an [`AllocationError`]; no partial plan is returned.
pub fn allocate(
    base: &BaseNetwork,
    segments: &[SegmentRequest],
) -> Result<Vec<AllocatedSubnet>, AllocationError> {
    log::debug!(
        "allocate {} segments in {} ({} addresses)",
        segments.len(),
        base,
        base.total_addresses()
    );

    // Largest blocks first to avoid fragmentation waste; sorted_by is a
    // stable ordered view, ties keep input order and the input slice itself
    // is never reordered.
    let by_demand = segments
        .iter()
        .sorted_by(|a, b| b.required_hosts.cmp(&a.required_hosts));

    let last = u64::from(u32::from(base.broadcast));
    let mut cursor = u64::from(u32::from(base.network));
    let mut plan = Vec::with_capacity(segments.len());

    for segment in by_demand {
        let mut sizing = SubnetSizing::for_hosts(segment.required_hosts);
        // Authoritative /30 floor at allocation time. The sizer never
        // produces a block under 4 for a positive host count, so this is
        // unreachable in practice, kept as the broader policy check.
        if segment.required_hosts <= 2 && sizing.block_size < 4 {
            sizing = SubnetSizing {
                block_size: 4,
                prefix: 30,
                mask: mask_for(30),
                usable_hosts: 2,
            };
        }

        let remaining = last + 1 - cursor;
        if sizing.block_size > remaining {
            log::warn!(
                "segment {} needs {} addresses but only {} remain in {}",
                segment.original_index,
                sizing.block_size,
                remaining,
                base
            );
            return Err(AllocationError {
                original_index: segment.original_index,
                required_hosts: segment.required_hosts,
                requested: sizing.block_size,
                remaining,
            });
        }

        let network = cursor as u32;
        let broadcast = (cursor + sizing.block_size - 1) as u32;
        let (first_usable, last_usable) = if sizing.block_size > 2 {
            (
                Some(Ipv4Addr::from(network + 1)),
                Some(Ipv4Addr::from(broadcast - 1)),
            )
        } else {
            (None, None)
        };

        plan.push(AllocatedSubnet {
            original_index: segment.original_index,
            required_hosts: segment.required_hosts,
            network: Ipv4Addr::from(network),
            broadcast: Ipv4Addr::from(broadcast),
            prefix: sizing.prefix,
            mask: Ipv4Addr::from(sizing.mask),
            block_size: sizing.block_size,
            usable_hosts: sizing.usable_hosts,
            first_usable,
            last_usable,
        });
        cursor += sizing.block_size;
    }

    // Second ordered view: hand results back in input order.
    plan.sort_by_key(|s| s.original_index);
    Ok(plan)
}

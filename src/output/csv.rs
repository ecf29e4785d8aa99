//! CSV rendering for allocation plans.

use itertools::Itertools;

use super::terminal::format_field;
use crate::models::{AllocatedSubnet, BaseNetwork};

const HEADER: &str = r#" "seg", "hosts",     "subnet_cidr",            "mask",       "broadcast",    "first_usable",     "last_usable", "size", "usable""#;

/// Render an allocation plan as quoted CSV, one row per segment.
pub fn plan_csv(base: &BaseNetwork, plan: &[AllocatedSubnet]) -> String {
    log::debug!("render csv for {} subnets in {}", plan.len(), base);

    let rows = plan.iter().enumerate().map(|(i, subnet)| {
        format!(
            "{seg},{hosts},{cidr},{mask},{broadcast},{first},{last},{size},{usable}",
            seg = format_field(i + 1, 6),
            hosts = format_field(subnet.required_hosts, 8),
            cidr = format_field(subnet.cidr(), 18),
            mask = format_field(subnet.mask, 18),
            broadcast = format_field(subnet.broadcast, 17),
            first = format_field(opt_addr(subnet.first_usable), 17),
            last = format_field(opt_addr(subnet.last_usable), 17),
            size = format_field(subnet.block_size, 7),
            usable = format_field(subnet.usable_hosts, 9),
        )
    });

    std::iter::once(HEADER.to_string()).chain(rows).join("\n")
}

fn opt_addr(addr: Option<std::net::Ipv4Addr>) -> String {
    addr.map(|a| a.to_string()).unwrap_or_else(|| "N/A".to_string())
}

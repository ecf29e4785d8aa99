//! Plain-text table rendering for allocation plans.

use crate::models::{AllocatedSubnet, BaseNetwork};

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Usable address range of a subnet, or a placeholder for blocks without one.
fn usable_range(subnet: &AllocatedSubnet) -> String {
    match (subnet.first_usable, subnet.last_usable) {
        (Some(first), Some(last)) => format!("{first} - {last}"),
        _ => "No usable IPs".to_string(),
    }
}

/// Render an allocation plan as a human-readable table.
///
/// Rows come out in the plan's order, which the allocator guarantees to be
/// the original input order.
pub fn plan_table(base: &BaseNetwork, plan: &[AllocatedSubnet]) -> String {
    let mut out = String::new();
    out.push_str(&"=".repeat(100));
    out.push('\n');
    out.push_str("SUBNETTING RESULTS\n");
    out.push_str(&"=".repeat(100));
    out.push('\n');
    out.push_str(&format!("Base Network: {base}\n"));
    out.push_str(&format!(
        "Total IPs available: {}\n",
        base.total_addresses()
    ));
    out.push_str(&"-".repeat(100));
    out.push('\n');
    out.push_str(&format!(
        "{:<4} {:<6} {:<19} {:<16} {:<16} {:<29} {:<6}\n",
        "Seg", "Hosts", "Network", "Mask", "Broadcast", "Usable Range", "Size"
    ));
    out.push_str(&"-".repeat(100));
    out.push('\n');

    let mut addresses_used: u64 = 0;
    let mut usable_total: u64 = 0;
    for (i, subnet) in plan.iter().enumerate() {
        out.push_str(&format!(
            "{:<4} {:<6} {:<19} {:<16} {:<16} {:<29} /{:<5}\n",
            i + 1,
            subnet.required_hosts,
            subnet.cidr(),
            subnet.mask,
            subnet.broadcast,
            usable_range(subnet),
            subnet.prefix
        ));
        addresses_used += subnet.block_size;
        usable_total += subnet.usable_hosts;
    }

    out.push_str(&"-".repeat(100));
    out.push('\n');
    out.push_str(&format!(
        "Addresses used: {addresses_used} of {total}, usable hosts: {usable_total}\n",
        total = base.total_addresses()
    ));
    out
}

//! Base network parsing and representation.

use std::net::Ipv4Addr;

use serde::Serialize;

use super::ipv4::{self, MAX_LENGTH};
use crate::error::FormatError;

/// The parent address block that subnets are carved out of.
///
/// Built once per run via [`BaseNetwork::parse`] and immutable afterwards.
/// Host bits in the input address are discarded, not rejected:
/// `192.168.1.77/24` parses to network `192.168.1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BaseNetwork {
    /// First address of the block (host bits zeroed).
    pub network: Ipv4Addr,
    /// Prefix length, 0..=32.
    pub prefix: u8,
    /// Subnet mask with the top `prefix` bits set.
    #[serde(serialize_with = "serialize_mask")]
    pub mask: u32,
    /// Last address of the block.
    pub broadcast: Ipv4Addr,
}

fn serialize_mask<S: serde::Serializer>(mask: &u32, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ipv4::decode(*mask))
}

impl BaseNetwork {
    /// Parse CIDR text like `192.168.1.0/24` into a [`BaseNetwork`].
    ///
    /// Pure function with no retry logic; the interactive shell owns
    /// re-prompting on [`FormatError`].
    pub fn parse(text: &str) -> Result<BaseNetwork, FormatError> {
        let text = text.trim();
        let parts: Vec<&str> = text.split('/').collect();
        if parts.len() != 2 {
            return Err(FormatError::MissingPrefix(text.to_string()));
        }

        let prefix: u8 = parts[1]
            .parse()
            .map_err(|_| FormatError::InvalidPrefix(parts[1].to_string()))?;
        if prefix > MAX_LENGTH {
            return Err(FormatError::InvalidPrefix(parts[1].to_string()));
        }

        let raw = ipv4::encode(parts[0])?;
        let mask = ipv4::prefix_mask(prefix)?;
        let network = raw & mask;
        let broadcast = ipv4::broadcast_addr(network, mask);

        Ok(BaseNetwork {
            network: Ipv4Addr::from(network),
            prefix,
            mask,
            broadcast: Ipv4Addr::from(broadcast),
        })
    }

    /// Total number of addresses in the block, `2^(32-prefix)`.
    pub fn total_addresses(&self) -> u64 {
        ipv4::block_size(self.prefix)
    }
}

impl std::fmt::Display for BaseNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.network, self.prefix)
    }
}

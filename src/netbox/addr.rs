// SPDX-License-Identifier: Apache-2.0

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::{DhcpError, ErrorKind};

const IPV4_LEN: u32 = 4;
const IPV6_LEN: u32 = 16;

/// IP address with network mask, parsed from NetBox CIDR notation.
#[derive(Debug, PartialEq, Eq, Clone)]
#[non_exhaustive]
pub struct IpNet {
    pub ip: IpAddr,
    /// 4 bytes for IPv4 address, 16 bytes for IPv6 address.
    /// Empty if prefix length is out of range.
    pub mask: Vec<u8>,
}

impl IpNet {
    /// The 4-byte form of this address: IPv4 or IPv4-mapped IPv6 address.
    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        match self.ip {
            IpAddr::V4(ip) => Some(ip),
            IpAddr::V6(ip) => ip.to_ipv4_mapped(),
        }
    }

    /// IPv6 address without 4-byte form.
    pub fn ipv6(&self) -> Option<Ipv6Addr> {
        match self.ip {
            IpAddr::V4(_) => None,
            IpAddr::V6(ip) => {
                if ip.to_ipv4_mapped().is_some() {
                    None
                } else {
                    Some(ip)
                }
            }
        }
    }

    /// Number of leading one bits, `None` for empty or non-canonical mask.
    pub fn prefix_len(&self) -> Option<u8> {
        if self.mask.is_empty() {
            return None;
        }
        let mut ones = 0u8;
        let mut zero_found = false;
        for byte in &self.mask {
            for i in (0..8).rev() {
                if byte & (1u8 << i) != 0 {
                    if zero_found {
                        return None;
                    }
                    ones += 1;
                } else {
                    zero_found = true;
                }
            }
        }
        Some(ones)
    }
}

impl std::fmt::Display for IpNet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.prefix_len() {
            Some(p) => write!(f, "{}/{p}", self.ip),
            None => write!(f, "{}/<invalid mask>", self.ip),
        }
    }
}

/// Parse `<ip>/<prefix_len>`.
///
/// The mask width is decided by the parsed address, and a prefix length
/// out of `0..=width` produces an empty mask instead of an error.
pub fn parse_addr(addr: &str) -> Result<IpNet, DhcpError> {
    let parts: Vec<&str> = addr.splitn(2, '/').collect();
    if parts.len() != 2 {
        return Err(DhcpError::new(
            ErrorKind::InvalidAddress,
            format!("invalid address: got {} components, want 2", parts.len()),
        ));
    }
    let ip = parts[0].parse::<IpAddr>().map_err(|_| {
        DhcpError::new(
            ErrorKind::InvalidAddress,
            format!("invalid IP address '{}'", parts[0]),
        )
    })?;
    let ones = parts[1].parse::<i64>().map_err(|e| {
        DhcpError::new(
            ErrorKind::InvalidAddress,
            format!("invalid netmask length '{}': {e}", parts[1]),
        )
    })?;

    let mut ret = IpNet {
        ip,
        mask: Vec::new(),
    };
    let bits = if ret.ipv4().is_some() {
        IPV4_LEN * 8
    } else {
        IPV6_LEN * 8
    };
    ret.mask = cidr_mask(ones, bits);
    Ok(ret)
}

fn cidr_mask(ones: i64, bits: u32) -> Vec<u8> {
    if ones < 0 || ones > i64::from(bits) {
        return Vec::new();
    }
    let mut remain = ones as u32;
    (0..bits / 8)
        .map(|_| {
            let byte_ones = remain.min(8);
            remain -= byte_ones;
            // Highest `byte_ones` bits set
            ((0xff00u16 >> byte_ones) & 0xff) as u8
        })
        .collect()
}

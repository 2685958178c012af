// SPDX-License-Identifier: Apache-2.0

use crate::{buffer::Buffer, DhcpError, ErrorContext, ErrorKind};

#[derive(Debug, PartialEq, Eq, Clone)]
#[non_exhaustive]
pub enum DhcpV6Duid {
    /// DUID Based on Link-Layer Address Plus Time
    LinkLayerAddressPlusTime(DhcpV6DuidLinkLayerAddrPlusTime),
    /// DUID Based on Link-Layer Address
    LinkLayerAddress(DhcpV6DuidLinkLayerAddr),
    /// Opaque byte array
    Raw(Vec<u8>),
}

const DUID_TYPE_LLT: u16 = 1;
const DUID_TYPE_LL: u16 = 3;

impl DhcpV6Duid {
    pub fn parse(raw: &[u8]) -> Self {
        let mut buf = Buffer::new(raw);
        // RFC 8415, 11. DHCP Unique Identifier (DUID)
        //   Clients and servers MUST treat DUIDs as opaque values and MUST only
        //   compare DUIDs for equality.
        //
        // Hence we do not raise parsing error here but fallback to treat
        // DUID as opaque byte array.
        match buf.peek_u16_be() {
            Ok(DUID_TYPE_LLT) => {
                match DhcpV6DuidLinkLayerAddrPlusTime::parse(&mut buf) {
                    Ok(v) => Self::LinkLayerAddressPlusTime(v),
                    Err(e) => {
                        log::debug!("Treating DUID as opaque: {e}");
                        Self::Raw(raw.to_vec())
                    }
                }
            }
            Ok(DUID_TYPE_LL) => match DhcpV6DuidLinkLayerAddr::parse(&mut buf) {
                Ok(v) => Self::LinkLayerAddress(v),
                Err(e) => {
                    log::debug!("Treating DUID as opaque: {e}");
                    Self::Raw(raw.to_vec())
                }
            },
            _ => Self::Raw(raw.to_vec()),
        }
    }

    /// Link-layer address carried by DUID-LL or DUID-LLT.
    pub fn link_layer_address(&self) -> Option<&[u8]> {
        match self {
            Self::LinkLayerAddressPlusTime(v) => {
                Some(v.link_layer_address.as_slice())
            }
            Self::LinkLayerAddress(v) => Some(v.link_layer_address.as_slice()),
            Self::Raw(_) => None,
        }
    }
}

// Type 1
#[derive(Debug, PartialEq, Eq, Clone)]
#[non_exhaustive]
pub struct DhcpV6DuidLinkLayerAddrPlusTime {
    pub hardware_type: u16,
    /// Seconds since UTC midnight 2000 January 1, modulo 2^32
    pub time: u32,
    pub link_layer_address: Vec<u8>,
}

impl DhcpV6DuidLinkLayerAddrPlusTime {
    pub(crate) fn parse(buf: &mut Buffer) -> Result<Self, DhcpError> {
        let subtype = buf
            .get_u16_be()
            .context("Invalid DHCPv6 DUID LLT subtype")?;
        if subtype != DUID_TYPE_LLT {
            return Err(DhcpError::new(
                ErrorKind::InvalidDhcpMessage,
                format!(
                    "Invalid DHCPv6 DUID LLT subtype, expecting \
                     {DUID_TYPE_LLT}, got {subtype}"
                ),
            ));
        }
        Ok(Self {
            hardware_type: buf
                .get_u16_be()
                .context("Invalid DHCPv6 DUID LLT hardware type")?,
            time: buf.get_u32_be().context("Invalid DHCPv6 DUID LLT time")?,
            link_layer_address: buf.get_remains().to_vec(),
        })
    }
}

// Type 3
#[derive(Debug, PartialEq, Eq, Clone)]
#[non_exhaustive]
pub struct DhcpV6DuidLinkLayerAddr {
    pub hardware_type: u16,
    pub link_layer_address: Vec<u8>,
}

impl DhcpV6DuidLinkLayerAddr {
    pub(crate) fn parse(buf: &mut Buffer) -> Result<Self, DhcpError> {
        let subtype =
            buf.get_u16_be().context("Invalid DHCPv6 DUID LL subtype")?;
        if subtype != DUID_TYPE_LL {
            return Err(DhcpError::new(
                ErrorKind::InvalidDhcpMessage,
                format!(
                    "Invalid DHCPv6 DUID LL subtype, expecting \
                     {DUID_TYPE_LL}, got {subtype}"
                ),
            ));
        }
        Ok(Self {
            hardware_type: buf
                .get_u16_be()
                .context("Invalid DHCPv6 DUID LL hardware type")?,
            link_layer_address: buf.get_remains().to_vec(),
        })
    }
}

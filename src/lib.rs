// SPDX-License-Identifier: Apache-2.0

//! DHCPv4/DHCPv6 server plugin assigning to clients the primary IP
//! addresses NetBox holds for the device owning the client MAC address.

mod buffer;
mod config;
mod dhcpv4;
mod dhcpv6;
mod error;
mod handler;
mod mac;
mod netbox;
mod plugin;
mod traits;

#[cfg(test)]
mod integ_tests;

pub use crate::config::NetBoxConfig;
pub use crate::dhcpv6::{
    DhcpV6Duid, DhcpV6DuidLinkLayerAddr, DhcpV6DuidLinkLayerAddrPlusTime,
};
pub use crate::error::{DhcpError, ErrorKind};
pub use crate::handler::NetBoxHandler;
pub use crate::netbox::{parse_addr, IpNet, NetBox, NetBoxHttpClient};
pub use crate::plugin::NetBoxPlugin;
pub use crate::traits::{DhcpHandler, HandlerAction, NetBoxRequest};

pub(crate) use crate::error::ErrorContext;

// SPDX-License-Identifier: Apache-2.0

mod addr;
mod http;
mod reply;

pub use self::{
    addr::{parse_addr, IpNet},
    http::NetBoxHttpClient,
};

use self::reply::{NetBoxDevice, NetBoxInterfacesReply};
use crate::{DhcpError, ErrorContext, ErrorKind, NetBoxRequest};

const INTERFACES_PATH: &str = "dcim/interfaces";
const DEVICES_PATH: &str = "dcim/devices";

/// Lease lookup against NetBox.
///
/// Each [NetBox::get_ips()] does two fresh API calls, nothing is cached.
#[derive(Debug, Clone)]
pub struct NetBox<R> {
    requester: R,
}

impl<R> NetBox<R>
where
    R: NetBoxRequest + Sync,
{
    pub fn new(requester: R) -> Self {
        Self { requester }
    }

    pub fn requester(&self) -> &R {
        &self.requester
    }

    /// Primary IPv4 and IPv6 address, in that order, of the device owning
    /// the interface with specified MAC address.
    ///
    /// Only the first page of `/api/dcim/interfaces` is searched.
    pub async fn get_ips(&self, mac: &str) -> Result<Vec<IpNet>, DhcpError> {
        let mac = mac.to_lowercase();

        let raw = self.requester.request(INTERFACES_PATH).await?;
        let reply: NetBoxInterfacesReply = serde_json::from_slice(&raw)?;
        if let Some(next) = reply.next.as_deref() {
            log::debug!(
                "Only searching {} of {} NetBox interfaces, next page {next} \
                 is not queried",
                reply.results.len(),
                reply.count
            );
        }

        let iface = match reply.results.iter().find(|i| i.has_mac(&mac)) {
            Some(i) => i,
            None => {
                return Err(DhcpError::new(
                    ErrorKind::NotFound,
                    format!("mac {mac} not found"),
                ));
            }
        };
        if !iface.enabled {
            return Err(DhcpError::new(
                ErrorKind::NotEnabled,
                format!("device with mac {mac} is not enabled"),
            ));
        }
        let device_ref = match iface.device.as_ref() {
            Some(d) => d,
            None => {
                return Err(DhcpError::new(
                    ErrorKind::NotFound,
                    format!(
                        "interface {} with mac {mac} has no device",
                        iface.id
                    ),
                ));
            }
        };
        log::debug!(
            "Found interface {}({}) of device {}({}) for mac {mac}",
            iface.name.as_deref().unwrap_or_default(),
            iface.id,
            device_ref.name.as_deref().unwrap_or_default(),
            device_ref.id,
        );

        let raw = self
            .requester
            .request(&format!("{DEVICES_PATH}/{}", device_ref.id))
            .await?;
        let device: NetBoxDevice = serde_json::from_slice(&raw)?;

        let mut ips = Vec::new();
        for ip in [device.primary_ip4.as_ref(), device.primary_ip6.as_ref()]
            .into_iter()
            .flatten()
        {
            ips.push(
                parse_addr(&ip.address).context(format!(
                    "failed to parse address '{}'",
                    ip.address
                ))?,
            );
        }
        log::debug!(
            "Found {} IP(s) for mac {mac} on device {}({}): {}",
            ips.len(),
            device.name.as_deref().unwrap_or_default(),
            device.id,
            ips.iter()
                .map(|ip| ip.to_string())
                .collect::<Vec<String>>()
                .join(", ")
        );
        Ok(ips)
    }
}

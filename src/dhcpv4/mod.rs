// SPDX-License-Identifier: Apache-2.0

use dhcproto::v4;

use crate::{
    mac::mac_to_string, DhcpHandler, HandlerAction, IpNet, NetBoxHandler,
    NetBoxRequest,
};

// Size of `chaddr` field in BOOTP header
const CHADDR_MAX_LEN: u8 = 16;

impl<R> DhcpHandler<v4::Message> for NetBoxHandler<R>
where
    R: NetBoxRequest + Send + Sync,
{
    /// Set `yiaddr` to the primary IPv4 address of the device.
    ///
    /// Declined if `hlen` exceeds `chaddr` or NetBox lookup failed. If the
    /// device has no IPv4 address, reply is left untouched but still treated
    /// as handled.
    async fn handle(
        &self,
        req: &v4::Message,
        resp: &mut v4::Message,
    ) -> HandlerAction {
        log::debug!("Received DHCPv4 packet: {req:?}");
        if req.hlen() > CHADDR_MAX_LEN {
            log::warn!(
                "Invalid hardware address length {}, dropping request",
                req.hlen()
            );
            return HandlerAction::Declined;
        }
        let mac = mac_to_string(req.chaddr());
        let ips = match self.netbox().get_ips(&mac).await {
            Ok(i) => i,
            Err(e) => {
                log::warn!("No IPs found for MAC {mac}: {e}");
                return HandlerAction::Declined;
            }
        };
        if let Some(ip) = ips.iter().find_map(IpNet::ipv4) {
            resp.set_yiaddr(ip);
        }
        HandlerAction::Handled
    }
}

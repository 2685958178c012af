// SPDX-License-Identifier: Apache-2.0

mod duid;

pub use self::duid::{
    DhcpV6Duid, DhcpV6DuidLinkLayerAddr, DhcpV6DuidLinkLayerAddrPlusTime,
};

use dhcproto::v6;

use crate::{
    mac::mac_to_string, DhcpHandler, HandlerAction, IpNet, NetBoxHandler,
    NetBoxRequest,
};

// Default lifetime, can be overridden by other plugins
const LEASE_LIFETIME_SEC: u32 = 3600;

/// Client MAC address from DUID-LL or DUID-LLT in Client Identifier option.
pub(crate) fn client_mac(msg: &v6::Message) -> Option<String> {
    if let Some(v6::DhcpOption::ClientId(raw)) =
        msg.opts().get(v6::OptionCode::ClientId)
    {
        DhcpV6Duid::parse(raw).link_layer_address().map(mac_to_string)
    } else {
        None
    }
}

fn iaid(msg: &v6::Message) -> Option<u32> {
    if let Some(v6::DhcpOption::IANA(ia_na)) =
        msg.opts().get(v6::OptionCode::IANA)
    {
        Some(ia_na.id)
    } else {
        None
    }
}

impl<R> DhcpHandler<v6::Message> for NetBoxHandler<R>
where
    R: NetBoxRequest + Send + Sync,
{
    /// Append IA_NA holding the primary IPv6 address of the device.
    ///
    /// Declined if request has no client MAC or IA_NA, or NetBox lookup
    /// failed. If the device has no IPv6 address, no option is added but
    /// still treated as handled.
    async fn handle(
        &self,
        req: &v6::Message,
        resp: &mut v6::Message,
    ) -> HandlerAction {
        log::debug!("Received DHCPv6 packet: {req:?}");
        let mac = match client_mac(req) {
            Some(m) => m,
            None => {
                log::warn!("Could not find client MAC, dropping request");
                return HandlerAction::Declined;
            }
        };
        let iaid = match iaid(req) {
            Some(i) => i,
            None => {
                log::warn!(
                    "No option IA_NA found in request, dropping request"
                );
                return HandlerAction::Declined;
            }
        };
        log::debug!("Retrieving IP addresses for MAC {mac}");
        let ips = match self.netbox().get_ips(&mac).await {
            Ok(i) => i,
            Err(e) => {
                log::warn!("No IPs found for MAC {mac}: {e}");
                return HandlerAction::Declined;
            }
        };
        if let Some(addr) = ips.iter().find_map(IpNet::ipv6) {
            let mut opts = v6::DhcpOptions::new();
            opts.insert(v6::DhcpOption::IAAddr(v6::IAAddr {
                addr,
                preferred_life: LEASE_LIFETIME_SEC,
                valid_life: LEASE_LIFETIME_SEC,
                opts: v6::DhcpOptions::new(),
            }));
            resp.opts_mut().insert(v6::DhcpOption::IANA(v6::IANA {
                id: iaid,
                t1: 0,
                t2: 0,
                opts,
            }));
        }
        log::info!("Resp {resp:?}");
        HandlerAction::Handled
    }
}

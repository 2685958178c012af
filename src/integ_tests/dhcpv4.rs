// SPDX-License-Identifier: Apache-2.0

use std::net::Ipv4Addr;
use std::sync::Arc;

use dhcproto::v4;

use super::env::{
    FakeNetBoxServer, DISABLED_MAC, DUAL_STACK_IPV4, DUAL_STACK_MAC,
    IPV4_ONLY_IPV4, IPV4_ONLY_MAC,
};
use crate::{DhcpHandler, HandlerAction, NetBox, NetBoxHandler};

fn request(mac: &[u8]) -> v4::Message {
    v4::Message::new(
        Ipv4Addr::UNSPECIFIED,
        Ipv4Addr::UNSPECIFIED,
        Ipv4Addr::UNSPECIFIED,
        Ipv4Addr::UNSPECIFIED,
        mac,
    )
}

#[tokio::test]
async fn test_dhcpv4_offer() {
    let srv = FakeNetBoxServer::start().await;
    let handler = NetBoxHandler::new(Arc::new(NetBox::new(srv.client())));

    for (mac, ip) in [
        (DUAL_STACK_MAC, DUAL_STACK_IPV4),
        (IPV4_ONLY_MAC, IPV4_ONLY_IPV4),
    ] {
        let req = request(&mac);
        let mut resp = request(&mac);
        assert_eq!(
            handler.handle(&req, &mut resp).await,
            HandlerAction::Handled
        );
        assert_eq!(resp.yiaddr(), ip);
    }
    // Each request does its own interface and device lookup
    assert_eq!(srv.requests().len(), 4);
}

#[tokio::test]
async fn test_dhcpv4_disabled_interface() {
    let srv = FakeNetBoxServer::start().await;
    let handler = NetBoxHandler::new(Arc::new(NetBox::new(srv.client())));

    let req = request(&DISABLED_MAC);
    let mut resp = request(&DISABLED_MAC);
    assert_eq!(
        handler.handle(&req, &mut resp).await,
        HandlerAction::Declined
    );
    assert_eq!(resp.yiaddr(), Ipv4Addr::UNSPECIFIED);
}

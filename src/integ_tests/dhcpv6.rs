// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use dhcproto::v6;

use super::env::{FakeNetBoxServer, DUAL_STACK_IPV6, DUAL_STACK_MAC};
use crate::{DhcpHandler, HandlerAction, NetBox, NetBoxHandler};

const TEST_IAID: u32 = 1;

fn solicit() -> v6::Message {
    // DUID-LLT of ethernet hardware type
    let mut duid = vec![0x00, 0x01, 0x00, 0x01, 0x2c, 0x4b, 0x6e, 0x0d];
    duid.extend_from_slice(&DUAL_STACK_MAC);

    let mut msg = v6::Message::new(v6::MessageType::Solicit);
    msg.opts_mut().insert(v6::DhcpOption::ClientId(duid));
    msg.opts_mut().insert(v6::DhcpOption::IANA(v6::IANA {
        id: TEST_IAID,
        t1: 0,
        t2: 0,
        opts: v6::DhcpOptions::new(),
    }));
    msg
}

#[tokio::test]
async fn test_dhcpv6_advertise() {
    let srv = FakeNetBoxServer::start().await;
    let handler = NetBoxHandler::new(Arc::new(NetBox::new(srv.client())));

    let req = solicit();
    let mut resp = v6::Message::new(v6::MessageType::Advertise);
    assert_eq!(
        handler.handle(&req, &mut resp).await,
        HandlerAction::Handled
    );

    let ia_na = match resp.opts().get(v6::OptionCode::IANA) {
        Some(v6::DhcpOption::IANA(i)) => i,
        _ => panic!("No IA_NA in reply {resp:?}"),
    };
    assert_eq!(ia_na.id, TEST_IAID);
    assert_eq!((ia_na.t1, ia_na.t2), (0, 0));
    match ia_na.opts.get(v6::OptionCode::IAAddr) {
        Some(v6::DhcpOption::IAAddr(a)) => {
            assert_eq!(a.addr, DUAL_STACK_IPV6);
            assert_eq!(a.preferred_life, 3600);
            assert_eq!(a.valid_life, 3600);
        }
        _ => panic!("No IA address in {ia_na:?}"),
    }
    assert_eq!(
        srv.requests()
            .into_iter()
            .map(|r| r.path)
            .collect::<Vec<String>>(),
        vec![
            "/api/dcim/interfaces".to_string(),
            "/api/dcim/devices/20".to_string()
        ]
    );
}

// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use crate::{NetBox, NetBoxHttpClient};

/// DHCP server plugin handler setting the NetBox primary IP of the client
/// device into the reply.
///
/// Implements [crate::DhcpHandler] for both `dhcproto::v4::Message` and
/// `dhcproto::v6::Message`, sharing the same [NetBox] lookup.
#[derive(Debug)]
pub struct NetBoxHandler<R = NetBoxHttpClient> {
    netbox: Arc<NetBox<R>>,
}

impl<R> Clone for NetBoxHandler<R> {
    fn clone(&self) -> Self {
        Self {
            netbox: self.netbox.clone(),
        }
    }
}

impl<R> NetBoxHandler<R> {
    pub fn new(netbox: Arc<NetBox<R>>) -> Self {
        Self { netbox }
    }

    pub fn netbox(&self) -> &NetBox<R> {
        &self.netbox
    }
}

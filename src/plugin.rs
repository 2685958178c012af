// SPDX-License-Identifier: Apache-2.0

//! Plugin entry points.
//!
//! Example of DHCP server plugin configuration:
//!
//! ```text
//! server6:
//!   listen: '[::]547'
//!   plugins:
//!     - server_id: LL aa:bb:cc:dd:ee:ff
//!     - netbox: https://netbox.example.org my_api_token
//! ```
//!
//! This will send requests to `https://netbox.example.org/api/<path>` using
//! `my_api_token` for authentication.

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::{
    DhcpError, NetBox, NetBoxConfig, NetBoxHandler, NetBoxHttpClient,
};

/// Owns the NetBox client shared by DHCPv4 and DHCPv6 handlers.
///
/// The first successful setup decides the configuration, later setups
/// reuse it and ignore their arguments.
#[derive(Debug, Default)]
pub struct NetBoxPlugin {
    netbox: OnceCell<Arc<NetBox<NetBoxHttpClient>>>,
}

impl NetBoxPlugin {
    pub const NAME: &'static str = "netbox";

    pub fn new() -> Self {
        Self::default()
    }

    /// The shared NetBox client, `None` before first successful setup.
    pub fn netbox(&self) -> Option<&NetBox<NetBoxHttpClient>> {
        self.netbox.get().map(|n| n.as_ref())
    }

    pub async fn setup4(
        &self,
        args: &[String],
    ) -> Result<NetBoxHandler, DhcpError> {
        let handler = NetBoxHandler::new(self.init(args).await?);
        log::info!("Loaded {} plugin for DHCPv4.", Self::NAME);
        Ok(handler)
    }

    pub async fn setup6(
        &self,
        args: &[String],
    ) -> Result<NetBoxHandler, DhcpError> {
        let handler = NetBoxHandler::new(self.init(args).await?);
        log::info!("Loaded {} plugin for DHCPv6.", Self::NAME);
        Ok(handler)
    }

    async fn init(
        &self,
        args: &[String],
    ) -> Result<Arc<NetBox<NetBoxHttpClient>>, DhcpError> {
        self.netbox
            .get_or_try_init(|| async {
                let config = NetBoxConfig::try_from(args)?;
                log::debug!("Initializing NetBox client with {config:?}");
                Ok::<_, DhcpError>(Arc::new(NetBox::new(
                    NetBoxHttpClient::new(config),
                )))
            })
            .await
            .cloned()
    }
}

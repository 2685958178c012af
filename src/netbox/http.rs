// SPDX-License-Identifier: Apache-2.0

use reqwest::header::{ACCEPT, AUTHORIZATION};

use crate::{DhcpError, NetBoxConfig, NetBoxRequest};

// Pretty print is only a hint for human reading the traffic.
const ACCEPT_JSON: &str = "application/json; indent=4";

/// [NetBoxRequest] over HTTP(S).
///
/// No timeout or retry is applied beyond the defaults of the HTTP client,
/// and HTTP status code is not checked: an error page simply fails to
/// deserialize later on.
#[derive(Debug, Clone)]
pub struct NetBoxHttpClient {
    config: NetBoxConfig,
    client: reqwest::Client,
}

impl NetBoxHttpClient {
    pub fn new(config: NetBoxConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Use prepared HTTP client, e.g. with custom root certificates or
    /// proxy settings.
    pub fn new_with_client(
        config: NetBoxConfig,
        client: reqwest::Client,
    ) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &NetBoxConfig {
        &self.config
    }
}

impl NetBoxRequest for NetBoxHttpClient {
    async fn request(&self, path: &str) -> Result<Vec<u8>, DhcpError> {
        let url = self.config.api_url(path)?;
        log::trace!("Sending NetBox request GET {url}");
        let reply = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("Token {}", self.config.api_token))
            .header(ACCEPT, ACCEPT_JSON)
            .send()
            .await?;
        log::trace!("Got NetBox reply status {}", reply.status());
        Ok(reply.bytes().await?.to_vec())
    }
}

// SPDX-License-Identifier: Apache-2.0

use reqwest::Url;

use crate::{DhcpError, ErrorKind};

/// NetBox API endpoint and token.
///
/// Requests are sent to `<endpoint>/api/<path>` with header
/// `Authorization: Token <token>`.
#[derive(PartialEq, Eq, Clone)]
pub struct NetBoxConfig {
    pub(crate) endpoint: Url,
    pub(crate) api_token: String,
}

impl NetBoxConfig {
    pub fn new(endpoint: &str, api_token: &str) -> Result<Self, DhcpError> {
        let endpoint = Url::parse(endpoint).map_err(|e| {
            DhcpError::new(
                ErrorKind::InvalidArgument,
                format!("invalid URL '{endpoint}': {e}"),
            )
        })?;
        Ok(Self {
            endpoint,
            api_token: api_token.to_string(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// `<endpoint>/api/<path>`, keeping query and fragment of endpoint.
    pub(crate) fn api_url(&self, path: &str) -> Result<Url, DhcpError> {
        if self.endpoint.cannot_be_a_base() {
            return Err(DhcpError::new(
                ErrorKind::NetBoxRequestFailed,
                format!(
                    "NetBox endpoint '{}' cannot hold API path {path}",
                    self.endpoint
                ),
            ));
        }
        let mut url = self.endpoint.clone();
        let api_path =
            format!("{}/api/{path}", url.path().trim_end_matches('/'));
        url.set_path(&api_path);
        Ok(url)
    }
}

// Never print the API token.
impl std::fmt::Debug for NetBoxConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetBoxConfig")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_token", &"<hidden>")
            .finish()
    }
}

/// Build from plugin arguments: `<endpoint> <api_token>`.
impl TryFrom<&[String]> for NetBoxConfig {
    type Error = DhcpError;

    fn try_from(args: &[String]) -> Result<Self, DhcpError> {
        if let [endpoint, api_token] = args {
            Self::new(endpoint, api_token)
        } else {
            Err(DhcpError::new(
                ErrorKind::InvalidArgument,
                format!("got {} arguments, want 2", args.len()),
            ))
        }
    }
}

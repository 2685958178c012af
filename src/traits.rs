// SPDX-License-Identifier: Apache-2.0

use std::future::Future;

use crate::DhcpError;

/// Raw access to the NetBox REST API.
pub trait NetBoxRequest {
    /// Send one GET request to `<endpoint>/api/<path>` and return the reply
    /// body. The `path` should already be URL encoded.
    fn request(
        &self,
        path: &str,
    ) -> impl Future<Output = Result<Vec<u8>, DhcpError>> + Send;
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum HandlerAction {
    /// Response is updated, stop processing the plugin chain.
    Handled,
    /// Response untouched, let the next plugin process the request.
    Declined,
}

/// Plugin hook invoked by DHCP server for each request.
pub trait DhcpHandler<M> {
    fn handle(
        &self,
        req: &M,
        resp: &mut M,
    ) -> impl Future<Output = HandlerAction> + Send;
}

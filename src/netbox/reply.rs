// SPDX-License-Identifier: Apache-2.0

// Only the fields used for lease lookup are modeled, serde ignores the rest
// of the NetBox objects.

use serde::Deserialize;

/// Reply of `/api/dcim/interfaces`.
#[derive(Debug, PartialEq, Eq, Clone, Default, Deserialize)]
pub(crate) struct NetBoxInterfacesReply {
    #[serde(default)]
    pub(crate) count: u64,
    #[serde(default)]
    pub(crate) next: Option<String>,
    #[serde(default)]
    pub(crate) results: Vec<NetBoxInterface>,
}

#[derive(Debug, PartialEq, Eq, Clone, Default, Deserialize)]
pub(crate) struct NetBoxInterface {
    pub(crate) id: u64,
    #[serde(default)]
    pub(crate) device: Option<NetBoxDeviceRef>,
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) mac_address: Option<String>,
    #[serde(default)]
    pub(crate) enabled: bool,
}

impl NetBoxInterface {
    pub(crate) fn has_mac(&self, mac: &str) -> bool {
        self.mac_address
            .as_deref()
            .map(|m| m.to_lowercase() == mac)
            .unwrap_or_default()
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Default, Deserialize)]
pub(crate) struct NetBoxDeviceRef {
    pub(crate) id: u64,
    #[serde(default)]
    pub(crate) name: Option<String>,
}

/// Reply of `/api/dcim/devices/<id>`.
#[derive(Debug, PartialEq, Eq, Clone, Default, Deserialize)]
pub(crate) struct NetBoxDevice {
    pub(crate) id: u64,
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) primary_ip4: Option<NetBoxIpAddress>,
    #[serde(default)]
    pub(crate) primary_ip6: Option<NetBoxIpAddress>,
}

#[derive(Debug, PartialEq, Eq, Clone, Default, Deserialize)]
pub(crate) struct NetBoxIpAddress {
    /// CIDR notation, e.g. `192.0.2.1/24`
    pub(crate) address: String,
}

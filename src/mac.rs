// SPDX-License-Identifier: Apache-2.0

/// Format hardware address as lowercase colon separated hex, e.g.
/// `00:11:22:aa:bb:cc`.
pub(crate) fn mac_to_string(mac: &[u8]) -> String {
    mac.iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<String>>()
        .join(":")
}

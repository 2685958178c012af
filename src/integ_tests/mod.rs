// SPDX-License-Identifier: Apache-2.0

#[cfg(test)]
mod dhcpv4;
#[cfg(test)]
mod dhcpv6;

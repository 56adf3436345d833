// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Immutable device identity read from `getprop`.
//!
//! Unlike the state snapshot, every field here is required: a property dump
//! without one of the keys fails with [`ParseError::MissingField`].

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Builds the pattern for a `[<...key...>]: [<value>]` property line.
fn property_pattern(key: &str) -> Regex {
    Regex::new(&format!(r"{}.*?\[(.*?)]", regex::escape(key))).expect("valid property pattern")
}

static WIFI_MAC: LazyLock<Regex> = LazyLock::new(|| property_pattern(WIFI_MAC_KEY));
static SERIAL_NUMBER: LazyLock<Regex> = LazyLock::new(|| property_pattern("serialno"));
static MANUFACTURER: LazyLock<Regex> = LazyLock::new(|| property_pattern("manufacturer"));
static MODEL: LazyLock<Regex> = LazyLock::new(|| property_pattern("product.model"));
static SOFTWARE_VERSION: LazyLock<Regex> = LazyLock::new(|| property_pattern("version.release"));
static INTERFACE_MAC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ether (.*?) brd").expect("valid interface pattern"));

/// Property key that carries the wireless MAC on devices exposing it.
const WIFI_MAC_KEY: &str = "wifimac";

/// Identity of a device, read once per session.
///
/// # Examples
///
/// ```
/// use droidtv_lib::StaticProperties;
///
/// let getprop = "\
/// [ro.boot.wifimac]: [a0:b1:c2:d3:e4:f5]
/// [ro.product.manufacturer]: [NVIDIA]
/// [ro.product.model]: [SHIELD Android TV]
/// [ro.serialno]: [0123456789ABC]
/// [ro.build.version.release]: [11]
/// ";
///
/// assert!(!StaticProperties::needs_interface_dump(getprop));
/// let props = StaticProperties::parse(getprop, None)?;
/// assert_eq!(props.manufacturer, "NVIDIA");
/// assert_eq!(props.wifi_mac, "a0:b1:c2:d3:e4:f5");
/// # Ok::<(), droidtv_lib::ParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StaticProperties {
    /// MAC address of the wireless interface.
    pub wifi_mac: String,
    /// Device serial number.
    pub serial_number: String,
    /// Manufacturer name.
    pub manufacturer: String,
    /// Model name.
    pub model: String,
    /// Android release, e.g. `11`.
    pub software_version: String,
}

impl StaticProperties {
    /// Returns `true` when the property dump has no wireless MAC key and the
    /// interface dump must be fetched.
    #[must_use]
    pub fn needs_interface_dump(getprop: &str) -> bool {
        !getprop.contains(WIFI_MAC_KEY)
    }

    /// Extracts the identity from a property dump.
    ///
    /// `interface` is the output of `ip addr show wlan0` and is only read
    /// when the property dump lacks the wireless MAC.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MissingField`] naming the first key that could
    /// not be found.
    pub fn parse(getprop: &str, interface: Option<&str>) -> Result<Self, ParseError> {
        let wifi_mac = if Self::needs_interface_dump(getprop) {
            lookup(&INTERFACE_MAC, interface.unwrap_or_default(), "ether")?
        } else {
            lookup(&WIFI_MAC, getprop, WIFI_MAC_KEY)?
        };

        Ok(Self {
            wifi_mac,
            serial_number: lookup(&SERIAL_NUMBER, getprop, "serialno")?,
            manufacturer: lookup(&MANUFACTURER, getprop, "manufacturer")?,
            model: lookup(&MODEL, getprop, "product.model")?,
            software_version: lookup(&SOFTWARE_VERSION, getprop, "version.release")?,
        })
    }
}

/// Returns the first capture of `pattern`, or a missing-field error.
fn lookup(pattern: &Regex, haystack: &str, field: &str) -> Result<String, ParseError> {
    pattern
        .captures(haystack)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| ParseError::MissingField(field.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const GETPROP: &str = "\
[dalvik.vm.heapsize]: [384m]
[ro.boot.serialno]: [0423118006553]
[ro.build.version.release]: [9]
[ro.product.manufacturer]: [NVIDIA]
[ro.product.model]: [SHIELD Android TV]
[ro.serialno]: [0423118006553]
";

    const IP_ADDR: &str = "\
3: wlan0: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc mq state UP group default qlen 1000
    link/ether 00:04:4b:8a:1c:2e brd ff:ff:ff:ff:ff:ff
    inet 192.168.1.42/24 brd 192.168.1.255 scope global wlan0
";

    #[test]
    fn parses_all_fields_with_interface_fallback() {
        assert!(StaticProperties::needs_interface_dump(GETPROP));
        let props = StaticProperties::parse(GETPROP, Some(IP_ADDR)).unwrap();
        assert_eq!(
            props,
            StaticProperties {
                wifi_mac: "00:04:4b:8a:1c:2e".to_string(),
                serial_number: "0423118006553".to_string(),
                manufacturer: "NVIDIA".to_string(),
                model: "SHIELD Android TV".to_string(),
                software_version: "9".to_string(),
            }
        );
    }

    #[test]
    fn prefers_wifimac_property() {
        let getprop = format!("[ro.boot.wifimac]: [11:22:33:44:55:66]\n{GETPROP}");
        assert!(!StaticProperties::needs_interface_dump(&getprop));
        let props = StaticProperties::parse(&getprop, Some(IP_ADDR)).unwrap();
        assert_eq!(props.wifi_mac, "11:22:33:44:55:66");
    }

    #[test]
    fn missing_serial_fails() {
        let getprop = GETPROP
            .lines()
            .filter(|line| !line.contains("serialno"))
            .collect::<Vec<_>>()
            .join("\n");
        let err = StaticProperties::parse(&getprop, Some(IP_ADDR)).unwrap_err();
        assert_eq!(err, ParseError::MissingField("serialno".to_string()));
    }

    #[test]
    fn missing_interface_dump_fails() {
        let err = StaticProperties::parse(GETPROP, None).unwrap_err();
        assert_eq!(err, ParseError::MissingField("ether".to_string()));
    }

    #[test]
    fn keys_are_matched_literally() {
        // `product.model` must not match `productXmodel`
        let getprop = GETPROP.replace("product.model", "productXmodel");
        let err = StaticProperties::parse(&getprop, Some(IP_ADDR)).unwrap_err();
        assert_eq!(err, ParseError::MissingField("product.model".to_string()));
    }
}

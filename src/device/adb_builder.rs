// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ADB device builder.

use std::time::Duration;

use crate::device::Device;
use crate::error::{DeviceError, Error};
use crate::protocol::{AdbConfig, AdbShell};

/// Builder for devices reached through the system adb client.
///
/// This builder can be created in two ways:
/// - `Device::adb("host")` - Simple host string
/// - `Device::adb_config(AdbConfig::new("host").with_port(5556))` - Advanced configuration
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use droidtv_lib::Device;
///
/// # async fn example() -> droidtv_lib::Result<()> {
/// // Reads the device identity while building
/// let device = Device::adb("192.168.1.42")
///     .with_timeout(Duration::from_secs(5))
///     .build()
///     .await?;
///
/// // No command sent until first use
/// let device = Device::adb("192.168.1.43").build_without_probe()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AdbDeviceBuilder {
    config: AdbConfig,
}

impl AdbDeviceBuilder {
    /// Creates a new builder with the specified configuration.
    pub(crate) fn new(config: AdbConfig) -> Self {
        Self { config }
    }

    /// Sets the network ADB port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.config = self.config.with_port(port);
        self
    }

    /// Sets the adb client executable.
    #[must_use]
    pub fn with_adb_path(mut self, path: impl Into<String>) -> Self {
        self.config = self.config.with_adb_path(path);
        self
    }

    /// Sets the per-command timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &AdbConfig {
        &self.config
    }

    /// Builds the device and reads its identity.
    ///
    /// The identity is cached for the lifetime of the device. Use
    /// [`build_without_probe`](Self::build_without_probe) to skip the query.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The configuration is invalid
    /// - The device cannot be reached
    /// - A required property is missing
    pub async fn build(self) -> Result<Device<AdbShell>, Error> {
        let device = self.build_without_probe()?;
        device.properties().await?;
        Ok(device)
    }

    /// Builds the device without sending any command.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid.
    pub fn build_without_probe(self) -> Result<Device<AdbShell>, Error> {
        if self.config.host().trim().is_empty() {
            return Err(DeviceError::InvalidConfiguration("host is empty".to_string()).into());
        }
        Ok(Device::new(self.config.into_channel()))
    }
}

// ========== ADB Device Entry Point ==========

impl Device<AdbShell> {
    /// Creates a builder for an ADB device from a host string.
    ///
    /// This is a convenience method equivalent to
    /// `Device::adb_config(AdbConfig::new(host))`.
    #[must_use]
    pub fn adb(host: impl Into<String>) -> AdbDeviceBuilder {
        AdbDeviceBuilder::new(AdbConfig::new(host))
    }

    /// Creates a builder for an ADB device from an `AdbConfig`.
    #[must_use]
    pub fn adb_config(config: AdbConfig) -> AdbDeviceBuilder {
        AdbDeviceBuilder::new(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_applies_options() {
        let builder = Device::adb("192.168.1.42")
            .with_port(5556)
            .with_adb_path("/opt/adb")
            .with_timeout(Duration::from_secs(2));

        assert_eq!(builder.config().serial(), "192.168.1.42:5556");
        assert_eq!(builder.config().adb_path(), "/opt/adb");
        assert_eq!(builder.config().timeout(), Duration::from_secs(2));
    }

    #[test]
    fn builder_from_config() {
        let config = AdbConfig::new("tv.local").with_port(6000);
        let device = Device::adb_config(config).build_without_probe().unwrap();
        assert_eq!(device.channel().config().serial(), "tv.local:6000");
        assert!(device.cached_properties().is_none());
    }

    #[test]
    fn empty_host_is_rejected() {
        let result = Device::adb("  ").build_without_probe();
        assert!(matches!(
            result,
            Err(Error::Device(DeviceError::InvalidConfiguration(_)))
        ));
    }

    #[tokio::test]
    async fn build_fails_when_adb_is_missing() {
        let result = Device::adb("192.168.1.42")
            .with_adb_path("/nonexistent/droidtv-adb")
            .build()
            .await;
        assert!(matches!(result, Err(Error::Protocol(_))));
    }
}

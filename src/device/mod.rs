// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Session object for one Android TV device.
//!
//! A [`Device`] owns its [`CommandChannel`] and the identity read from the
//! device, which is fetched at most once per session.
//!
//! # State updates
//!
//! [`Device::update`] issues one composite query, decodes it and resolves
//! the semantic state. It never fails: a device that does not answer yields
//! a [`DeviceStatus`] whose [`is_available`](DeviceStatus::is_available)
//! returns `false`.
//!
//! ```no_run
//! use droidtv_lib::Device;
//!
//! # async fn example() -> droidtv_lib::Result<()> {
//! let device = Device::adb("192.168.1.42").build().await?;
//!
//! let status = device.update().await;
//! println!("{} ({:?})", status.state, status.current_package());
//!
//! device.power_off().await?;
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "process")]
mod adb_builder;

#[cfg(feature = "process")]
pub use adb_builder::AdbDeviceBuilder;

use parking_lot::RwLock;

use crate::command::{
    AudioCommand, CompositeQuery, IntentCommand, PowerCommand, PropertyCommand, ShellCommand,
};
use crate::error::Error;
use crate::properties::StaticProperties;
use crate::protocol::CommandChannel;
use crate::snapshot::{AudioSnapshot, DecodedSnapshot, decode, extract_audio};
use crate::state::{AudioState, DeviceStatus};

/// An Android TV device reached through a command channel.
///
/// # Type Parameter
///
/// `C` is the transport. Use [`Device::adb`] for the system adb client, or
/// [`Device::new`] with any custom [`CommandChannel`].
#[derive(Debug)]
pub struct Device<C: CommandChannel> {
    channel: C,
    properties: RwLock<Option<StaticProperties>>,
}

impl<C: CommandChannel> Device<C> {
    /// Creates a session over the given channel.
    ///
    /// No command is sent until an operation is called.
    #[must_use]
    pub fn new(channel: C) -> Self {
        Self {
            channel,
            properties: RwLock::new(None),
        }
    }

    /// Returns the underlying channel.
    #[must_use]
    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// Runs a command, collapsing transport failures into `None`.
    async fn output<S: ShellCommand + Sync + ?Sized>(&self, command: &S) -> Option<String> {
        match self.channel.send_command(command).await {
            Ok(output) => Some(output),
            Err(e) => {
                tracing::warn!(error = %e, "Shell command failed, treating output as absent");
                None
            }
        }
    }

    // ========== State ==========

    /// Queries every state input in one round trip and decodes it.
    ///
    /// See [`CompositeQuery`] for the meaning of `lazy`. Never fails; fields
    /// that could not be read are `None`.
    pub async fn snapshot(&self, lazy: bool) -> DecodedSnapshot {
        let output = self.output(&CompositeQuery::new(lazy)).await;
        decode(output.as_deref())
    }

    /// Queries and resolves the current device state.
    ///
    /// Uses the lazy composite query. Never fails.
    pub async fn update(&self) -> DeviceStatus {
        let status = DeviceStatus::from_snapshot(self.snapshot(true).await);
        tracing::debug!(
            state = %status.state,
            available = status.is_available(),
            app = ?status.current_package(),
            "Resolved device state"
        );
        status
    }

    /// Dumps the audio subsystem and extracts the music stream details.
    ///
    /// Returns `None` when the device did not answer or printed nothing.
    pub async fn audio(&self) -> Option<AudioSnapshot> {
        let output = self.output(&AudioCommand::Dump).await?;
        if output.is_empty() {
            return None;
        }
        Some(extract_audio(&output))
    }

    /// Runs the standalone audio state probe.
    ///
    /// Unlike the composite query, this probe reports `paused` over
    /// `started` when both appear.
    pub async fn audio_state(&self) -> Option<AudioState> {
        let output = self.output(&AudioCommand::State).await?;
        AudioState::from_probe(&output)
    }

    // ========== Identity ==========

    /// Returns the device identity, querying it on first use.
    ///
    /// Concurrent first calls may each query the device; the last result
    /// is kept.
    ///
    /// # Errors
    ///
    /// Returns error if a command fails or a property is missing.
    pub async fn properties(&self) -> Result<StaticProperties, Error> {
        if let Some(props) = self.cached_properties() {
            return Ok(props);
        }

        let props = self.fetch_properties().await?;
        *self.properties.write() = Some(props.clone());
        Ok(props)
    }

    /// Returns the identity if it has already been fetched.
    #[must_use]
    pub fn cached_properties(&self) -> Option<StaticProperties> {
        self.properties.read().clone()
    }

    async fn fetch_properties(&self) -> Result<StaticProperties, Error> {
        let getprop = self.channel.send_command(&PropertyCommand::GetProp).await?;

        let interface = if StaticProperties::needs_interface_dump(&getprop) {
            Some(
                self.channel
                    .send_command(&PropertyCommand::WifiInterface)
                    .await?,
            )
        } else {
            None
        };

        let props = StaticProperties::parse(&getprop, interface.as_deref())?;
        tracing::debug!(
            manufacturer = %props.manufacturer,
            model = %props.model,
            serial = %props.serial_number,
            "Read device properties"
        );
        Ok(props)
    }

    // ========== Control ==========

    /// Presses the power key if the screen is off.
    ///
    /// # Errors
    ///
    /// Returns error if the command could not be delivered.
    pub async fn power_on(&self) -> Result<(), Error> {
        self.channel.send_command(&PowerCommand::On).await?;
        Ok(())
    }

    /// Presses the power key if the screen is on.
    ///
    /// # Errors
    ///
    /// Returns error if the command could not be delivered.
    pub async fn power_off(&self) -> Result<(), Error> {
        self.channel.send_command(&PowerCommand::Off).await?;
        Ok(())
    }

    /// Opens a URI with the VIEW intent.
    ///
    /// # Errors
    ///
    /// Returns error if the command could not be delivered.
    pub async fn start_intent(&self, uri: impl Into<String>) -> Result<(), Error> {
        self.channel
            .send_command(&IntentCommand::view(uri))
            .await?;
        Ok(())
    }
}

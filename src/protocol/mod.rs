// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command channels for reaching the device shell.
//!
//! The decoding pipeline never talks to a device directly. It goes through a
//! [`CommandChannel`], which owns the transport: connection setup, timeouts
//! and serialization of concurrent commands all live behind this trait.
//!
//! # Channels
//!
//! - [`AdbShell`]: runs commands through the system `adb` client
//!   (requires the `process` feature)

#[cfg(feature = "process")]
mod adb;

#[cfg(feature = "process")]
pub use adb::{AdbConfig, AdbShell};

use crate::command::ShellCommand;
use crate::error::ProtocolError;

/// Trait for transports that execute shell commands on the device.
///
/// Implementations must allow at most one command in flight at a time;
/// callers may issue queries concurrently.
///
/// An `Ok` carrying an empty string means the command ran and printed
/// nothing, which is a meaningful answer for the chained state query.
#[allow(async_fn_in_trait)]
pub trait CommandChannel {
    /// Runs a raw command line and returns its standard output.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the command could not be delivered or
    /// timed out.
    async fn send_raw(&self, command: &str) -> Result<String, ProtocolError>;

    /// Runs a typed command.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the command could not be delivered or
    /// timed out.
    async fn send_command<C: ShellCommand + Sync + ?Sized>(
        &self,
        command: &C,
    ) -> Result<String, ProtocolError> {
        self.send_raw(&command.to_shell()).await
    }
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `droidtv` library.
//!
//! Only the operations that are expected to always succeed against a
//! normally configured device report errors: command transport on the
//! power/intent path, and static property extraction. The state snapshot
//! path never fails; missing data surfaces as `None` fields instead.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred while talking to the device shell.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while extracting data from shell output.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error occurred during device operations.
    #[error("device error: {0}")]
    Device(#[from] DeviceError),
}

/// Errors raised by a [`CommandChannel`](crate::protocol::CommandChannel).
///
/// The snapshot path collapses every variant into an absent output.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The `adb` client could not be started.
    #[error("failed to spawn adb: {0}")]
    Spawn(#[from] std::io::Error),

    /// The adb client reported that the device could not be reached.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Command timed out.
    #[error("command timed out after {0} ms")]
    Timeout(u64),
}

/// Errors related to extracting fields from shell output.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Expected key is missing from the output.
    #[error("field not found: {0}")]
    MissingField(String),
}

/// Errors related to device operations.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// Device configuration is invalid.
    #[error("invalid device configuration: {0}")]
    InvalidConfiguration(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `droidtv` Lib - A Rust library to read the state of Android TV devices.
//!
//! Android TV devices expose no structured state API over ADB, only a shell.
//! This library sends one chained shell command per update, decodes its
//! text output into typed optional fields, and resolves those fields into a
//! small set of semantic states.
//!
//! # Supported Features
//!
//! - **State updates**: Off, idle, playing or paused, in one round trip
//! - **Media details**: Focused app, audio output device, volume, mute flag
//! - **Identity**: Manufacturer, model, serial number, Wi-Fi MAC, Android release
//! - **Power control**: Turn the screen on/off, launch VIEW intents
//!
//! # Quick Start
//!
//! ```no_run
//! use droidtv_lib::{Device, SemanticState};
//!
//! #[tokio::main]
//! async fn main() -> droidtv_lib::Result<()> {
//!     // Reads the device identity while building
//!     let device = Device::adb("192.168.1.42").build().await?;
//!
//!     let status = device.update().await;
//!     if status.state == SemanticState::Off {
//!         device.power_on().await?;
//!     }
//!
//!     let props = device.properties().await?;
//!     println!("{} {}", props.manufacturer, props.model);
//!     Ok(())
//! }
//! ```
//!
//! ## Decoding without a device
//!
//! The decoding pipeline is pure and can be driven with captured output:
//!
//! ```
//! use droidtv_lib::snapshot::decode;
//! use droidtv_lib::state::{SemanticState, resolve_state};
//!
//! let snapshot = decode(Some("11  Wake Locks: size=1\nmCurrentFocus=Window{1a2b u0 com.plexapp.android/.Main}"));
//! assert_eq!(resolve_state(&snapshot), SemanticState::Playing);
//! assert_eq!(snapshot.current_app.unwrap().package, "com.plexapp.android");
//! ```

pub mod command;
mod device;
pub mod error;
mod properties;
pub mod protocol;
pub mod snapshot;
pub mod state;

pub use command::{
    AudioCommand, CompositeQuery, IntentCommand, PowerCommand, PropertyCommand, ShellCommand,
};
pub use device::Device;
#[cfg(feature = "process")]
pub use device::AdbDeviceBuilder;
pub use error::{DeviceError, Error, ParseError, ProtocolError, Result};
pub use properties::StaticProperties;
pub use protocol::CommandChannel;
#[cfg(feature = "process")]
pub use protocol::{AdbConfig, AdbShell};
pub use snapshot::{AudioSnapshot, CurrentApp, DecodedSnapshot};
pub use state::{AudioState, DeviceStatus, SemanticState, resolve_state};

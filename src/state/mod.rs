// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Semantic device states.
//!
//! A [`DecodedSnapshot`](crate::snapshot::DecodedSnapshot) holds raw
//! observations; [`resolve_state`] folds them into one [`SemanticState`]
//! using a fixed precedence. [`DeviceStatus`] bundles the resolved state
//! with the media details reported alongside it.
//!
//! # Examples
//!
//! ```
//! use droidtv_lib::snapshot::decode;
//! use droidtv_lib::state::{SemanticState, resolve_state};
//!
//! let snapshot = decode(Some(""));
//! assert_eq!(resolve_state(&snapshot), SemanticState::Off);
//! ```

mod resolver;
mod status;

pub use resolver::resolve_state;
pub use status::DeviceStatus;

use std::fmt;

use serde::{Deserialize, Serialize};

/// The state reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticState {
    /// Screen is off or the state could not be read.
    Off,
    /// Screen is on but the device is not awake.
    Idle,
    /// Media is playing.
    Playing,
    /// Media is paused, or the device is on without a playback signal.
    Paused,
}

impl SemanticState {
    /// Returns the lowercase name of the state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Idle => "idle",
            Self::Playing => "playing",
            Self::Paused => "paused",
        }
    }
}

impl fmt::Display for SemanticState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Playback state observed in the audio subsystem dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioState {
    /// A player reports `started`.
    Playing,
    /// A player reports `paused`.
    Paused,
    /// No player activity was found.
    Idle,
}

impl AudioState {
    /// Classifies an audio dump by its player keywords.
    ///
    /// `started` wins over `paused` when both appear.
    #[must_use]
    pub fn from_dump(dump: &str) -> Self {
        if dump.contains("started") {
            Self::Playing
        } else if dump.contains("paused") {
            Self::Paused
        } else {
            Self::Idle
        }
    }

    /// Decodes the single-character audio state probe.
    ///
    /// Returns `None` for output the probe never produces.
    #[must_use]
    pub fn from_probe(output: &str) -> Option<Self> {
        // shells without escape handling in plain `echo` leave the `\c`
        let code = output.trim();
        match code.strip_suffix(r"\c").unwrap_or(code) {
            "1" => Some(Self::Paused),
            "2" => Some(Self::Playing),
            "0" | "" => Some(Self::Idle),
            _ => None,
        }
    }

    /// Returns `true` when the state is a definite playback signal.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Playing | Self::Paused)
    }
}

impl From<AudioState> for SemanticState {
    fn from(value: AudioState) -> Self {
        match value {
            AudioState::Playing => Self::Playing,
            AudioState::Paused => Self::Paused,
            AudioState::Idle => Self::Idle,
        }
    }
}

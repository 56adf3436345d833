// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoding of the composite state query output.
//!
//! The output of [`CompositeQuery`](crate::command::CompositeQuery) is plain
//! text with a positional layout:
//!
//! ```text
//! 11  Wake Locks: size=1
//! mCurrentFocus=Window{5f3b0a u0 com.netflix.ninja/com.netflix.ninja.MainActivity}
//! <dumpsys audio output...>
//! ```
//!
//! The first two characters are the screen-on and awake flags, glued to the
//! wake lock line. Output may stop anywhere; [`decode`] returns whatever
//! fields were readable and leaves the rest as `None`.
//!
//! # Examples
//!
//! ```
//! use droidtv_lib::snapshot::decode;
//!
//! let snapshot = decode(Some("11Wake Locks: size=2"));
//! assert_eq!(snapshot.screen_on, Some(true));
//! assert_eq!(snapshot.awake, Some(true));
//! assert_eq!(snapshot.wake_lock_size, Some(2));
//! assert!(snapshot.current_app.is_none());
//! ```

mod audio;
mod decoder;

pub use audio::{AudioSnapshot, extract_audio};
pub use decoder::decode;

use serde::{Deserialize, Serialize};

use crate::state::AudioState;

/// Wake lock count reported when the wake lock line is too short to hold one.
pub const UNKNOWN_WAKE_LOCK_SIZE: i32 = -1;

/// The application owning the focused window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrentApp {
    /// Package name, e.g. `com.netflix.ninja`.
    pub package: String,
    /// Activity class, when the window descriptor names one.
    pub activity: Option<String>,
}

/// Typed result of one composite query.
///
/// Fields decode strictly left to right; a field is only set when every
/// field before it was read from the output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecodedSnapshot {
    /// Whether the display is on.
    pub screen_on: Option<bool>,
    /// Whether the device is awake.
    pub awake: Option<bool>,
    /// Number of wake locks held, or [`UNKNOWN_WAKE_LOCK_SIZE`].
    pub wake_lock_size: Option<i32>,
    /// Focused application.
    pub current_app: Option<CurrentApp>,
    /// Player state from the audio dump.
    pub audio_state: Option<AudioState>,
    /// Output device of the music stream, e.g. `speaker` or `hdmi`.
    pub playback_device: Option<String>,
    /// Whether the music stream is muted.
    pub muted: Option<bool>,
    /// Music stream volume as a fraction in `0.0..=1.0`.
    pub volume: Option<f32>,
}

impl DecodedSnapshot {
    /// Creates a snapshot with every field unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when nothing was decoded, i.e. the transport failed.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.screen_on.is_none()
    }

    /// Copies the audio fields of an extracted audio block.
    pub(crate) fn apply_audio(&mut self, audio: AudioSnapshot) {
        self.audio_state = Some(audio.state);
        self.playback_device = audio.device;
        self.muted = audio.muted;
        self.volume = audio.volume;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_snapshot_is_unknown() {
        let snapshot = DecodedSnapshot::new();
        assert!(snapshot.is_unknown());
        assert_eq!(snapshot, DecodedSnapshot::default());
    }

    #[test]
    fn apply_audio_copies_fields() {
        let mut snapshot = DecodedSnapshot::new();
        snapshot.apply_audio(AudioSnapshot {
            state: AudioState::Paused,
            device: Some("hdmi".to_string()),
            muted: Some(true),
            volume: None,
        });
        assert_eq!(snapshot.audio_state, Some(AudioState::Paused));
        assert_eq!(snapshot.playback_device.as_deref(), Some("hdmi"));
        assert_eq!(snapshot.muted, Some(true));
        assert!(snapshot.volume.is_none());
    }

    #[test]
    fn snapshot_serializes_unset_fields_as_null() {
        let json = serde_json::to_value(DecodedSnapshot::new()).unwrap();
        assert!(json["screen_on"].is_null());
        assert!(json["volume"].is_null());
    }
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Result of a full state update.

use serde::{Deserialize, Serialize};

use crate::snapshot::{CurrentApp, DecodedSnapshot};

use super::{SemanticState, resolve_state};

/// Resolved state plus the media details decoded alongside it.
///
/// Unset details are `None`, never a default such as `false` or `0.0`.
///
/// # Examples
///
/// ```
/// use droidtv_lib::snapshot::decode;
/// use droidtv_lib::state::{DeviceStatus, SemanticState};
///
/// let status = DeviceStatus::from_snapshot(decode(Some("11size=1\ncom.plexapp.android/.Main")));
/// assert_eq!(status.state, SemanticState::Playing);
/// assert_eq!(status.current_package(), Some("com.plexapp.android"));
/// assert!(status.volume.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceStatus {
    /// The resolved state.
    pub state: SemanticState,
    /// Focused application.
    pub current_app: Option<CurrentApp>,
    /// Output device of the music stream.
    pub playback_device: Option<String>,
    /// Whether the music stream is muted.
    pub muted: Option<bool>,
    /// Music stream volume as a fraction.
    pub volume: Option<f32>,
    available: bool,
}

impl DeviceStatus {
    /// Resolves a snapshot and keeps its media details.
    #[must_use]
    pub fn from_snapshot(snapshot: DecodedSnapshot) -> Self {
        let state = resolve_state(&snapshot);
        Self {
            state,
            available: !snapshot.is_unknown(),
            current_app: snapshot.current_app,
            playback_device: snapshot.playback_device,
            muted: snapshot.muted,
            volume: snapshot.volume,
        }
    }

    /// Returns `false` when the device did not answer, in which case
    /// `state` is [`SemanticState::Off`] only by convention.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Returns the package name of the focused application.
    #[must_use]
    pub fn current_package(&self) -> Option<&str> {
        self.current_app.as_ref().map(|app| app.package.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::decode;

    #[test]
    fn unavailable_when_transport_failed() {
        let status = DeviceStatus::from_snapshot(decode(None));
        assert!(!status.is_available());
        assert_eq!(status.state, SemanticState::Off);
        assert!(status.current_app.is_none());
    }

    #[test]
    fn screen_off_is_available() {
        let status = DeviceStatus::from_snapshot(decode(Some("")));
        assert!(status.is_available());
        assert_eq!(status.state, SemanticState::Off);
    }

    #[test]
    fn off_still_reports_details() {
        let snapshot = DecodedSnapshot {
            screen_on: Some(false),
            playback_device: Some("hdmi".to_string()),
            muted: Some(true),
            ..DecodedSnapshot::default()
        };
        let status = DeviceStatus::from_snapshot(snapshot);
        assert_eq!(status.state, SemanticState::Off);
        assert_eq!(status.playback_device.as_deref(), Some("hdmi"));
        assert_eq!(status.muted, Some(true));
    }
}

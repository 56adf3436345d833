// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Extraction of music stream details from a `dumpsys audio` dump.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::state::AudioState;

/// Opens the music stream section.
const BLOCK_START: &str = "STREAM_MUSIC";

/// Opens the next stream section.
const BLOCK_END: &str = "- STREAM";

/// Highest step of the native music volume scale.
const MAX_VOLUME_STEP: f32 = 15.0;

/// Precedes the output device of a stream.
const DEVICE_MARKER: &str = "Devices: ";

/// Precedes the mute flag of a stream.
const MUTED_MARKER: &str = "Muted: ";

/// Music stream details extracted from an audio dump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioSnapshot {
    /// Player state, derived from the whole dump.
    pub state: AudioState,
    /// Output device of the music stream.
    pub device: Option<String>,
    /// Mute flag of the music stream. `None` when the block has no flag.
    pub muted: Option<bool>,
    /// Volume of the music stream on `device`, as a fraction.
    pub volume: Option<f32>,
}

/// Extracts the player state and music stream details from an audio dump.
///
/// The player state is always reported. Device, mute flag and volume come
/// from the first music stream block only and stay `None` when the block or
/// the individual entry is missing.
///
/// # Examples
///
/// ```
/// use droidtv_lib::snapshot::extract_audio;
/// use droidtv_lib::state::AudioState;
///
/// let dump = "- STREAM_MUSIC:\n   Muted: false\n   Current: 2 (speaker): 15\n   Devices: speaker\n- STREAM_ALARM:";
/// let audio = extract_audio(dump);
/// assert_eq!(audio.state, AudioState::Idle);
/// assert_eq!(audio.device.as_deref(), Some("speaker"));
/// assert_eq!(audio.muted, Some(false));
/// assert_eq!(audio.volume, Some(1.0));
/// ```
#[must_use]
pub fn extract_audio(dump: &str) -> AudioSnapshot {
    let state = AudioState::from_dump(dump);

    let Some(block) = music_block(dump) else {
        tracing::debug!("No music stream block in audio dump");
        return AudioSnapshot {
            state,
            device: None,
            muted: None,
            volume: None,
        };
    };

    let device = token_after(block, DEVICE_MARKER);
    let volume = device.as_deref().and_then(|d| device_volume(block, d));
    let muted = token_after(block, MUTED_MARKER).map(|token| token == "true");

    AudioSnapshot {
        state,
        device,
        muted,
        volume,
    }
}

/// Returns the text between the first music stream marker and the next
/// stream marker after it.
fn music_block(dump: &str) -> Option<&str> {
    let start = dump.find(BLOCK_START)? + BLOCK_START.len();
    let len = dump[start..].find(BLOCK_END)?;
    Some(&dump[start..start + len])
}

/// Returns the word right after the first occurrence of `marker`.
///
/// Later occurrences are never consulted, so an empty first entry yields
/// `None`.
fn token_after(block: &str, marker: &str) -> Option<String> {
    let start = block.find(marker)? + marker.len();
    let token: String = block[start..]
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    (!token.is_empty()).then_some(token)
}

fn first_capture(pattern: &Regex, haystack: &str) -> Option<String> {
    pattern
        .captures(haystack)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Finds the `<device>): <step>` entry and rescales the step.
fn device_volume(block: &str, device: &str) -> Option<f32> {
    let pattern = Regex::new(&format!(r"{}\)\s*:\s*(\d+)", regex::escape(device))).ok()?;
    let step: u16 = first_capture(&pattern, block)?.parse().ok()?;
    Some(volume_fraction(step))
}

/// Converts a native volume step to a fraction rounded to two decimals.
#[must_use]
pub(crate) fn volume_fraction(step: u16) -> f32 {
    let fraction = (f32::from(step) / MAX_VOLUME_STEP).min(1.0);
    (fraction * 100.0).round() / 100.0
}

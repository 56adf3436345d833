// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Precedence rules from snapshot to semantic state.

use crate::snapshot::DecodedSnapshot;

use super::SemanticState;

/// Resolves a snapshot into a single semantic state.
///
/// Rules are evaluated in order and the first match wins:
///
/// 1. screen not known to be on: [`SemanticState::Off`]
/// 2. audio dump reports playing or paused: that state
/// 3. device not known to be awake: [`SemanticState::Idle`]
/// 4. exactly one wake lock held: [`SemanticState::Playing`]
/// 5. otherwise: [`SemanticState::Paused`]
///
/// This is a pure function of its input.
///
/// # Examples
///
/// ```
/// use droidtv_lib::snapshot::decode;
/// use droidtv_lib::state::{SemanticState, resolve_state};
///
/// assert_eq!(resolve_state(&decode(Some("10"))), SemanticState::Idle);
/// assert_eq!(resolve_state(&decode(Some("11size=1"))), SemanticState::Playing);
/// assert_eq!(resolve_state(&decode(Some("11size=2"))), SemanticState::Paused);
/// ```
#[must_use]
pub fn resolve_state(snapshot: &DecodedSnapshot) -> SemanticState {
    if snapshot.screen_on != Some(true) {
        return SemanticState::Off;
    }

    if let Some(audio) = snapshot.audio_state.filter(|a| a.is_active()) {
        return audio.into();
    }

    if snapshot.awake != Some(true) {
        return SemanticState::Idle;
    }

    // a single wake lock is the media player keeping the device up
    if snapshot.wake_lock_size == Some(1) {
        SemanticState::Playing
    } else {
        SemanticState::Paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AudioState;

    fn awake_snapshot() -> DecodedSnapshot {
        DecodedSnapshot {
            screen_on: Some(true),
            awake: Some(true),
            ..DecodedSnapshot::default()
        }
    }

    #[test]
    fn unknown_snapshot_is_off() {
        assert_eq!(resolve_state(&DecodedSnapshot::new()), SemanticState::Off);
    }

    #[test]
    fn screen_off_wins_over_audio() {
        let snapshot = DecodedSnapshot {
            screen_on: Some(false),
            audio_state: Some(AudioState::Playing),
            ..awake_snapshot()
        };
        assert_eq!(resolve_state(&snapshot), SemanticState::Off);
    }

    #[test]
    fn audio_state_wins_over_wake_locks() {
        let snapshot = DecodedSnapshot {
            wake_lock_size: Some(1),
            audio_state: Some(AudioState::Paused),
            ..awake_snapshot()
        };
        assert_eq!(resolve_state(&snapshot), SemanticState::Paused);

        let snapshot = DecodedSnapshot {
            awake: Some(false),
            audio_state: Some(AudioState::Playing),
            ..awake_snapshot()
        };
        assert_eq!(resolve_state(&snapshot), SemanticState::Playing);
    }

    #[test]
    fn idle_audio_falls_through() {
        let snapshot = DecodedSnapshot {
            wake_lock_size: Some(1),
            audio_state: Some(AudioState::Idle),
            ..awake_snapshot()
        };
        assert_eq!(resolve_state(&snapshot), SemanticState::Playing);
    }

    #[test]
    fn asleep_is_idle() {
        let snapshot = DecodedSnapshot {
            awake: Some(false),
            wake_lock_size: Some(1),
            ..awake_snapshot()
        };
        assert_eq!(resolve_state(&snapshot), SemanticState::Idle);
    }

    #[test]
    fn unknown_awake_is_idle() {
        let snapshot = DecodedSnapshot {
            awake: None,
            ..awake_snapshot()
        };
        assert_eq!(resolve_state(&snapshot), SemanticState::Idle);
    }

    #[test]
    fn wake_lock_counts() {
        for (count, expected) in [
            (Some(1), SemanticState::Playing),
            (Some(0), SemanticState::Paused),
            (Some(2), SemanticState::Paused),
            (Some(-1), SemanticState::Paused),
            (None, SemanticState::Paused),
        ] {
            let snapshot = DecodedSnapshot {
                wake_lock_size: count,
                ..awake_snapshot()
            };
            assert_eq!(resolve_state(&snapshot), expected, "count {count:?}");
        }
    }

    #[test]
    fn resolving_twice_gives_same_state() {
        let snapshot = DecodedSnapshot {
            wake_lock_size: Some(1),
            ..awake_snapshot()
        };
        assert_eq!(resolve_state(&snapshot), resolve_state(&snapshot));
    }
}

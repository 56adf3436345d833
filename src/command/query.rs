// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Composite state query.

use crate::command::{
    AUDIO_DUMP, AWAKE, CURRENT_APP, SCREEN_ON, SUCCESS1, SUCCESS1_FAILURE0, ShellCommand,
    WAKE_LOCK_SIZE,
};

/// One chained command that reads every state input in a single round trip.
///
/// The output is, in order: the screen-on character, the awake character,
/// the wake lock line, the focused window line and the audio dump. Each part
/// only runs when the previous one succeeded, so truncated output is always
/// cut from the end.
///
/// With `lazy` set, a failed probe prints nothing and stops the chain; this
/// is cheaper on the device and is what periodic updates use. Without it
/// every probe prints `1` or `0`.
///
/// # Examples
///
/// ```
/// use droidtv_lib::command::{CompositeQuery, ShellCommand};
///
/// let cmd = CompositeQuery::lazy().to_shell();
/// assert!(cmd.starts_with("dumpsys power"));
/// assert!(cmd.ends_with("&& dumpsys audio"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositeQuery {
    lazy: bool,
}

impl CompositeQuery {
    /// Creates a query with the given probe encoding.
    #[must_use]
    pub const fn new(lazy: bool) -> Self {
        Self { lazy }
    }

    /// Creates a query that stops at the first failed probe.
    #[must_use]
    pub const fn lazy() -> Self {
        Self::new(true)
    }

    /// Creates a query that reports `0` for a failed probe.
    #[must_use]
    pub const fn eager() -> Self {
        Self::new(false)
    }

    /// Returns whether the query uses the lazy encoding.
    #[must_use]
    pub const fn is_lazy(&self) -> bool {
        self.lazy
    }

    const fn marker(&self) -> &'static str {
        if self.lazy { SUCCESS1 } else { SUCCESS1_FAILURE0 }
    }
}

impl ShellCommand for CompositeQuery {
    fn to_shell(&self) -> String {
        let marker = self.marker();
        format!(
            "{SCREEN_ON}{marker} && {AWAKE}{marker} && {WAKE_LOCK_SIZE} && {CURRENT_APP} && {AUDIO_DUMP}"
        )
    }
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Audio and intent commands.

use crate::command::{AUDIO_DUMP, ShellCommand};

/// Standalone audio subsystem queries.
///
/// # Examples
///
/// ```
/// use droidtv_lib::command::{AudioCommand, ShellCommand};
///
/// assert_eq!(AudioCommand::Dump.to_shell(), "dumpsys audio");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCommand {
    /// Full audio subsystem dump.
    Dump,
    /// Single character probe: `1` paused, `2` started, `0` otherwise.
    State,
}

impl ShellCommand for AudioCommand {
    fn to_shell(&self) -> String {
        match self {
            Self::Dump => AUDIO_DUMP.to_string(),
            Self::State => concat!(
                r"dumpsys audio | grep -q paused && echo -e '1\c' || ",
                r"(dumpsys audio | grep -q started && echo '2\c' || echo '0\c')"
            )
            .to_string(),
        }
    }
}

/// Opens a URI through the Android VIEW intent.
///
/// # Examples
///
/// ```
/// use droidtv_lib::command::{IntentCommand, ShellCommand};
///
/// let cmd = IntentCommand::view("https://example.com/watch");
/// assert_eq!(
///     cmd.to_shell(),
///     "am start -a android.intent.action.VIEW -d https://example.com/watch"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentCommand {
    uri: String,
}

impl IntentCommand {
    /// Creates a VIEW intent for the given URI.
    #[must_use]
    pub fn view(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }

    /// Returns the target URI.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }
}

impl ShellCommand for IntentCommand {
    fn to_shell(&self) -> String {
        format!("am start -a android.intent.action.VIEW -d {}", self.uri)
    }
}

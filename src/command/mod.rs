// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shell command definitions.
//!
//! This module provides typed representations of the shell commands sent to
//! an Android TV device over ADB.
//!
//! # Available Commands
//!
//! | Command Type | Purpose | Example |
//! |-------------|---------|---------|
//! | [`CompositeQuery`] | Query all state in one round trip | Screen, wake lock, app, audio |
//! | [`PowerCommand`] | Conditional power key press | On, Off |
//! | [`PropertyCommand`] | Read identity properties | `getprop` |
//! | [`AudioCommand`] | Query the audio subsystem | `dumpsys audio` |
//! | [`IntentCommand`] | Launch a VIEW intent | Open a URI |
//!
//! # Examples
//!
//! ```
//! use droidtv_lib::command::{PowerCommand, ShellCommand};
//!
//! let cmd = PowerCommand::Off;
//! assert!(cmd.to_shell().ends_with("&& input keyevent 26"));
//! ```

mod media;
mod power;
mod properties;
mod query;

pub use media::{AudioCommand, IntentCommand};
pub use power::PowerCommand;
pub use properties::PropertyCommand;
pub use query::CompositeQuery;

/// Succeeds only when the display is on.
pub const SCREEN_ON: &str = "dumpsys power | grep 'Display Power' | grep -q 'state=ON'";

/// Succeeds only when the device is awake.
pub const AWAKE: &str = "dumpsys power | grep mWakefulness | grep -q Awake";

/// Prints the wake lock summary line (`... size=<n>`).
pub const WAKE_LOCK_SIZE: &str = "dumpsys power | grep Locks | grep 'size='";

/// Prints the focused window descriptor.
pub const CURRENT_APP: &str = "dumpsys window windows | grep mCurrentFocus";

/// Dumps the audio subsystem state.
pub const AUDIO_DUMP: &str = "dumpsys audio";

/// Prints `1` without a newline when the preceding probe succeeded.
pub const SUCCESS1: &str = r" && echo -e '1\c'";

/// Prints `1` or `0` without a newline depending on the preceding probe.
pub const SUCCESS1_FAILURE0: &str = r" && echo -e '1\c' || echo -e '0\c'";

/// Android key code of the power button.
pub const KEY_POWER: u16 = 26;

/// A command that can be run in the device shell.
pub trait ShellCommand {
    /// Returns the full shell command line.
    fn to_shell(&self) -> String;
}

impl ShellCommand for str {
    fn to_shell(&self) -> String {
        self.to_string()
    }
}

impl ShellCommand for String {
    fn to_shell(&self) -> String {
        self.clone()
    }
}

impl<T: ShellCommand + ?Sized> ShellCommand for &T {
    fn to_shell(&self) -> String {
        (**self).to_shell()
    }
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power control commands.

use crate::command::{KEY_POWER, SCREEN_ON, ShellCommand};

/// Command that presses the power key only when it would change the state.
///
/// Android exposes a single power toggle, so both variants first probe the
/// screen and send the key event conditionally.
///
/// # Examples
///
/// ```
/// use droidtv_lib::command::{PowerCommand, ShellCommand};
///
/// assert!(PowerCommand::On.to_shell().ends_with("|| input keyevent 26"));
/// assert!(PowerCommand::Off.to_shell().ends_with("&& input keyevent 26"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerCommand {
    /// Press power if the screen is off.
    On,
    /// Press power if the screen is on.
    Off,
}

impl ShellCommand for PowerCommand {
    fn to_shell(&self) -> String {
        let operator = match self {
            Self::On => "||",
            Self::Off => "&&",
        };
        format!("{SCREEN_ON} {operator} input keyevent {KEY_POWER}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_on_presses_key_when_probe_fails() {
        assert_eq!(
            PowerCommand::On.to_shell(),
            "dumpsys power | grep 'Display Power' | grep -q 'state=ON' || input keyevent 26"
        );
    }

    #[test]
    fn power_off_presses_key_when_probe_succeeds() {
        assert_eq!(
            PowerCommand::Off.to_shell(),
            "dumpsys power | grep 'Display Power' | grep -q 'state=ON' && input keyevent 26"
        );
    }
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Identity property queries.

use crate::command::ShellCommand;

/// Commands used to read immutable device identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyCommand {
    /// Dump every system property as `[key]: [value]` lines.
    GetProp,
    /// Describe the wireless interface, used when `getprop` lacks a MAC.
    WifiInterface,
}

impl ShellCommand for PropertyCommand {
    fn to_shell(&self) -> String {
        match self {
            Self::GetProp => "getprop",
            Self::WifiInterface => "ip addr show wlan0",
        }
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_commands() {
        assert_eq!(PropertyCommand::GetProp.to_shell(), "getprop");
        assert_eq!(PropertyCommand::WifiInterface.to_shell(), "ip addr show wlan0");
    }
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Commands that change the unit's settings.

use crate::command::{API_PREFIX, Command};
use crate::types::{DeviceMode, FanSpeed};

/// Turns night mode on (`true`) or off (`false`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NightModeCommand(pub bool);

impl Command for NightModeCommand {
    fn path(&self) -> String {
        format!("{API_PREFIX}/set/feature/night")
    }

    fn payload(&self) -> Option<String> {
        Some(if self.0 { "1" } else { "0" }.to_string())
    }
}

/// Sets the fan speed.
///
/// The unit may accept a speed it does not support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FanSpeedCommand(pub FanSpeed);

impl Command for FanSpeedCommand {
    fn path(&self) -> String {
        format!("{API_PREFIX}/set/fan")
    }

    fn payload(&self) -> Option<String> {
        Some(self.0.wire_value().to_string())
    }
}

/// Sets the operating mode. The mode name is the last path segment.
///
/// The unit may accept a mode it does not support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeCommand(pub DeviceMode);

impl Command for ModeCommand {
    fn path(&self) -> String {
        format!("{API_PREFIX}/set/mode/{}", self.0.as_str())
    }

    fn payload(&self) -> Option<String> {
        None
    }
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status query.

use crate::command::{API_PREFIX, Command};

/// Reads the unit's current status.
///
/// The answer is parsed with [`DeviceStatus::parse`](crate::response::DeviceStatus::parse).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCommand;

impl Command for StatusCommand {
    fn path(&self) -> String {
        format!("{API_PREFIX}/status")
    }

    fn payload(&self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_path() {
        assert_eq!(StatusCommand.path(), "/api/v/1/status");
        assert_eq!(StatusCommand.form_body(), None);
    }
}

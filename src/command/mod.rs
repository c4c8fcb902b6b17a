// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device request definitions.
//!
//! Each request is a `GET` to a fixed path below [`API_PREFIX`], with an
//! optional form-encoded body holding a single `value` field.
//!
//! | Command Type | Path | Body |
//! |--------------|------|------|
//! | [`StatusCommand`] | `/api/v/1/status` | none |
//! | [`NightModeCommand`] | `/api/v/1/set/feature/night` | `value=0\|1` |
//! | [`FanSpeedCommand`] | `/api/v/1/set/fan` | `value=0..4` |
//! | [`ModeCommand`] | `/api/v/1/set/mode/{name}` | none |
//!
//! # Examples
//!
//! ```
//! use velair_lib::command::{Command, FanSpeedCommand, ModeCommand};
//! use velair_lib::types::{DeviceMode, FanSpeed};
//!
//! let fan = FanSpeedCommand(FanSpeed::High);
//! assert_eq!(fan.path(), "/api/v/1/set/fan");
//! assert_eq!(fan.form_body(), Some("value=3".to_string()));
//!
//! let mode = ModeCommand(DeviceMode::FanOnly);
//! assert_eq!(mode.path(), "/api/v/1/set/mode/fanonly");
//! assert_eq!(mode.form_body(), None);
//! ```

mod control;
mod status;

pub use control::{FanSpeedCommand, ModeCommand, NightModeCommand};
pub use status::StatusCommand;

/// Path prefix shared by every endpoint.
pub const API_PREFIX: &str = "/api/v/1";

/// Content type of requests that carry a form body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A request that can be sent to the unit.
pub trait Command {
    /// Returns the request path, including [`API_PREFIX`].
    fn path(&self) -> String;

    /// Returns the `value` form field, if the request has a body.
    fn payload(&self) -> Option<String>;

    /// Returns the url-encoded form body.
    fn form_body(&self) -> Option<String> {
        self.payload()
            .map(|value| format!("value={}", urlencoding::encode(&value)))
    }
}

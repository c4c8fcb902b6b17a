// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status response parsing.

use serde::{Deserialize, Serialize};

use crate::error::{Error, ParseError};
use crate::response::envelope::{self, Envelope};
use crate::types::{DeviceMode, FanSpeed};

/// Snapshot of the unit's state, as returned by the status endpoint.
///
/// # Examples
///
/// ```
/// use velair_lib::response::DeviceStatus;
/// use velair_lib::types::{DeviceMode, FanSpeed};
///
/// let body = br#"{
///     "success": true,
///     "RESULT": {"fs": 2, "nm": 1, "ps": 0, "sp": 22, "t": 25, "wm": 1},
///     "setup": {"name": "LivingRoom"}
/// }"#;
/// let status = DeviceStatus::parse(body).unwrap();
/// assert_eq!(status.name, "LivingRoom");
/// assert_eq!(status.fan_speed, FanSpeed::Medium);
/// assert_eq!(status.mode, DeviceMode::Cooling);
/// assert!(status.night_mode);
/// assert!(!status.power);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceStatus {
    /// Name configured on the unit.
    pub name: String,
    /// Current fan speed.
    pub fan_speed: FanSpeed,
    /// Whether night mode is on.
    pub night_mode: bool,
    /// Whether the unit is powered on.
    pub power: bool,
    /// Target temperature in Celsius.
    pub set_point: i64,
    /// Measured temperature in Celsius.
    pub temperature: i64,
    /// Current operating mode.
    pub mode: DeviceMode,
}

impl DeviceStatus {
    /// Parses a status response body.
    ///
    /// # Errors
    ///
    /// - `Error::Parse` if the body is not a status envelope
    /// - `Error::Device` if the unit reported a failure
    /// - `Error::Value` if the fan speed or mode is out of range
    pub fn parse(body: &[u8]) -> Result<Self, Error> {
        envelope::decode::<RawStatus>(body)?.into_status()
    }
}

/// Status envelope as sent on the wire.
#[derive(Debug, Deserialize)]
struct RawStatus {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    error: Option<String>,
    #[serde(rename = "RESULT", default)]
    result: Option<RawResult>,
    #[serde(default)]
    setup: Option<RawSetup>,
}

/// Fields are optional so that a failure envelope with a partial
/// `RESULT` is still classified by its error first.
#[derive(Debug, Deserialize)]
struct RawResult {
    fs: Option<i64>,
    nm: Option<i64>,
    ps: Option<i64>,
    sp: Option<i64>,
    t: Option<i64>,
    wm: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct RawSetup {
    #[serde(default)]
    name: Option<String>,
}

impl Envelope for RawStatus {
    fn success(&self) -> bool {
        self.success.unwrap_or(false)
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl RawStatus {
    fn into_status(self) -> Result<DeviceStatus, Error> {
        let result = self.result.ok_or(ParseError::MissingField("RESULT"))?;
        let field = |value: Option<i64>, name| value.ok_or(ParseError::MissingField(name));

        Ok(DeviceStatus {
            name: self.setup.and_then(|setup| setup.name).unwrap_or_default(),
            fan_speed: FanSpeed::from_wire(field(result.fs, "RESULT.fs")?)?,
            night_mode: field(result.nm, "RESULT.nm")? == 1,
            power: field(result.ps, "RESULT.ps")? == 1,
            set_point: field(result.sp, "RESULT.sp")?,
            temperature: field(result.t, "RESULT.t")?,
            mode: DeviceMode::from_wire(field(result.wm, "RESULT.wm")?)?,
        })
    }
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan speed of the indoor unit.
//!
//! # Device Methods
//!
//! Use [`FanSpeed`] with these [`Device`](crate::Device) methods:
//! - [`set_fan_speed()`](crate::Device::set_fan_speed) - Change the speed
//! - [`get_status()`](crate::Device::get_status) - Read the current speed

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Fan speed (wire values 0-4).
///
/// Not every unit supports every speed. The unit may acknowledge a speed
/// it cannot run at without changing anything.
///
/// # Examples
///
/// ```
/// use velair_lib::types::FanSpeed;
///
/// let speed = FanSpeed::from_wire(2).unwrap();
/// assert_eq!(speed, FanSpeed::Medium);
/// assert_eq!(speed.wire_value(), 2);
/// assert_eq!(speed.as_str(), "medium");
///
/// assert!(FanSpeed::from_wire(5).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum FanSpeed {
    /// The unit picks the speed.
    Auto = 0,
    /// Low speed.
    Low = 1,
    /// Medium speed.
    Medium = 2,
    /// High speed.
    High = 3,
    /// Maximum speed.
    Maximum = 4,
}

impl FanSpeed {
    /// All speeds in wire order.
    pub const ALL: [Self; 5] = [Self::Auto, Self::Low, Self::Medium, Self::High, Self::Maximum];

    /// Decodes a wire value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidFanSpeed` if `raw` is outside [0, 4].
    pub fn from_wire(raw: i64) -> Result<Self, ValueError> {
        match raw {
            0 => Ok(Self::Auto),
            1 => Ok(Self::Low),
            2 => Ok(Self::Medium),
            3 => Ok(Self::High),
            4 => Ok(Self::Maximum),
            _ => Err(ValueError::InvalidFanSpeed(raw)),
        }
    }

    /// Returns the wire value sent in the `value` form field.
    #[must_use]
    pub const fn wire_value(&self) -> u8 {
        *self as u8
    }

    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Maximum => "maximum",
        }
    }

    /// Returns the name for a raw wire value, or `"unknown"` if it does
    /// not denote a speed.
    #[must_use]
    pub fn name_of(raw: i64) -> &'static str {
        Self::from_wire(raw).map_or("unknown", |speed| speed.as_str())
    }
}

impl fmt::Display for FanSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FanSpeed {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|speed| speed.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValueError::UnknownName {
                kind: "fan speed",
                name: s.to_string(),
            })
    }
}

impl TryFrom<i64> for FanSpeed {
    type Error = ValueError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_wire(value)
    }
}

impl From<FanSpeed> for u8 {
    fn from(speed: FanSpeed) -> Self {
        speed.wire_value()
    }
}

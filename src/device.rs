// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level device abstraction for Velair units.

use std::sync::Arc;

use crate::command::{Command, FanSpeedCommand, ModeCommand, NightModeCommand, StatusCommand};
use crate::error::Error;
use crate::protocol::{CommandResponse, Protocol};
use crate::response::DeviceStatus;
use crate::types::{DeviceMode, FanSpeed};

#[cfg(feature = "http")]
use crate::protocol::{HttpClient, HttpConfig};

/// An air conditioning unit.
///
/// Every operation is a single request. It returns either a fully
/// validated value or one classified [`Error`]. Nothing is cached and
/// nothing is retried.
///
/// # Examples
///
/// ```no_run
/// use velair_lib::Device;
/// use velair_lib::protocol::HttpConfig;
/// use velair_lib::types::{DeviceMode, FanSpeed};
///
/// # async fn example() -> velair_lib::Result<()> {
/// let device = Device::http(HttpConfig::new("192.168.1.40"))?;
///
/// let status = device.get_status().await?;
/// if status.mode != DeviceMode::Cooling {
///     device.set_mode(DeviceMode::Cooling).await?;
/// }
/// device.set_fan_speed(FanSpeed::Low).await?;
/// device.set_night_mode(true).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Device<P: Protocol> {
    protocol: Arc<P>,
}

impl<P: Protocol> Clone for Device<P> {
    fn clone(&self) -> Self {
        Self {
            protocol: Arc::clone(&self.protocol),
        }
    }
}

#[cfg(feature = "http")]
impl Device<HttpClient> {
    /// Creates a device reached over HTTP.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn http(config: HttpConfig) -> Result<Self, Error> {
        Ok(Self::new(config.into_client()?))
    }
}

impl<P: Protocol> Device<P> {
    /// Creates a device on top of any transport.
    pub fn new(protocol: P) -> Self {
        Self {
            protocol: Arc::new(protocol),
        }
    }

    /// Sends a command to the unit and returns the raw answer.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails.
    pub async fn send_command<C: Command + Sync>(
        &self,
        command: &C,
    ) -> Result<CommandResponse, Error> {
        self.protocol
            .send_command(command)
            .await
            .map_err(Error::Protocol)
    }

    /// Reads the unit's current status.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails, the unit reports a failure,
    /// or the answer is malformed or out of range.
    pub async fn get_status(&self) -> Result<DeviceStatus, Error> {
        self.send_command(&StatusCommand).await?.status()
    }

    /// Turns night mode on or off.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails or the unit rejects the request.
    pub async fn set_night_mode(&self, enable: bool) -> Result<(), Error> {
        self.send_command(&NightModeCommand(enable)).await?.ack()
    }

    /// Sets the fan speed.
    ///
    /// Success does not guarantee the unit changed speed; some units do
    /// not support every speed.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails or the unit rejects the request.
    pub async fn set_fan_speed(&self, speed: FanSpeed) -> Result<(), Error> {
        self.send_command(&FanSpeedCommand(speed)).await?.ack()
    }

    /// Sets the operating mode.
    ///
    /// Success does not guarantee the unit changed mode; some units
    /// acknowledge dehumidification without supporting it.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails or the unit rejects the request.
    pub async fn set_mode(&self, mode: DeviceMode) -> Result<(), Error> {
        self.send_command(&ModeCommand(mode)).await?.ack()
    }
}

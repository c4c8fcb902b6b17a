// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `Velair` Lib - A Rust library to control Velair VSD air conditioners.
//!
//! The units expose a small HTTP API answering with JSON. This library
//! reads their status and changes their settings, turning every answer
//! into either a validated value or a single classified error.
//!
//! # Supported Features
//!
//! - **Status**: power, mode, fan speed, set point, temperature, night mode
//! - **Fan speed**: auto, low, medium, high, maximum
//! - **Mode**: heating, cooling, dehumidification, fan only, auto
//! - **Night mode**: on/off
//!
//! Some units accept speeds or modes they do not support and report
//! success anyway; the library cannot tell.
//!
//! # Quick Start
//!
//! ```no_run
//! use velair_lib::{Device, DeviceMode, FanSpeed, HttpConfig};
//!
//! #[tokio::main]
//! async fn main() -> velair_lib::Result<()> {
//!     let device = Device::http(HttpConfig::new("192.168.1.40"))?;
//!
//!     let status = device.get_status().await?;
//!     println!(
//!         "{}: {} at {}°C (target {}°C), fan {}",
//!         status.name, status.mode, status.temperature, status.set_point, status.fan_speed
//!     );
//!
//!     device.set_mode(DeviceMode::Cooling).await?;
//!     device.set_fan_speed(FanSpeed::Auto).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Parsing Without a Transport
//!
//! The decoders work on raw bytes and can be used with any HTTP stack:
//!
//! ```
//! use velair_lib::{CommandAck, DeviceStatus};
//!
//! let err = DeviceStatus::parse(br#"{"success": false, "error": "busy"}"#).unwrap_err();
//! assert!(err.is_device_error());
//!
//! assert!(CommandAck::parse(br#"{"success": true}"#).is_ok());
//! ```

pub mod command;
mod device;
pub mod error;
pub mod protocol;
pub mod response;
pub mod types;

pub use command::{Command, FanSpeedCommand, ModeCommand, NightModeCommand, StatusCommand};
pub use device::Device;
pub use error::{DeviceError, Error, ParseError, ProtocolError, Result, ValueError};
#[cfg(feature = "http")]
pub use protocol::{HttpClient, HttpConfig};
pub use protocol::{CommandResponse, Protocol};
pub use response::{CommandAck, DeviceStatus};
pub use types::{DeviceMode, FanSpeed};

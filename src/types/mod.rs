// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for air conditioner control.
//!
//! Both enumerations are closed: wire integers are validated on the way
//! in, so a value of these types always denotes a real speed or mode.
//!
//! # Types
//!
//! - [`FanSpeed`] - Fan speed (wire 0-4)
//! - [`DeviceMode`] - Operating mode (wire 0, 1, 3, 4, 5)

mod mode;
mod speed;

pub use mode::DeviceMode;
pub use speed::FanSpeed;

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for the unit's JSON answers.
//!
//! Every answer shares one envelope (see [`Envelope`]); the status
//! endpoint adds a `RESULT` and a `setup` object, the set endpoints add
//! nothing. Parsing never yields a partially-populated value.

mod ack;
mod envelope;
mod status;

pub use ack::CommandAck;
pub use envelope::{Envelope, decode};
pub use status::DeviceStatus;

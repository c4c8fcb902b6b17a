// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport for sending requests to the unit.
//!
//! The transport only moves bytes: it sends a [`Command`] and hands back
//! the raw body of a `200 OK` answer. Classifying that body is left to
//! [`crate::response`].

#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::{HttpClient, HttpConfig};

use crate::command::Command;
use crate::error::{Error, ProtocolError};
use crate::response::{CommandAck, DeviceStatus};

/// Raw answer to a request.
#[derive(Debug, Clone)]
pub struct CommandResponse {
    body: Vec<u8>,
}

impl CommandResponse {
    /// Creates a new response with the given body.
    #[must_use]
    pub fn new(body: impl Into<Vec<u8>>) -> Self {
        Self { body: body.into() }
    }

    /// Returns the raw body.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Parses the body as a status envelope.
    ///
    /// # Errors
    ///
    /// See [`DeviceStatus::parse`].
    pub fn status(&self) -> Result<DeviceStatus, Error> {
        DeviceStatus::parse(&self.body)
    }

    /// Parses the body as a command acknowledgement.
    ///
    /// # Errors
    ///
    /// See [`CommandAck::parse`].
    pub fn ack(&self) -> Result<(), Error> {
        CommandAck::parse(&self.body)
    }
}

/// Trait for transports that can send requests to the unit.
#[allow(async_fn_in_trait)]
pub trait Protocol {
    /// Sends a request and returns the raw answer.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the exchange fails or the unit answers
    /// with a status other than `200 OK`.
    async fn send_command<C: Command + Sync>(
        &self,
        command: &C,
    ) -> Result<CommandResponse, ProtocolError>;
}

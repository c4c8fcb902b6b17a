// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Success/error envelope shared by every response.
//!
//! The unit wraps each answer in an object carrying a `success` flag and
//! an optional `error` message. An error message is authoritative: units
//! have been seen to answer `success: true` together with an error, for
//! instance when asked for a mode they do not support.

use serde::de::DeserializeOwned;

use crate::error::{DeviceError, Error, ParseError};

/// A response shape carrying the success/error envelope.
pub trait Envelope: DeserializeOwned {
    /// The `success` flag (`false` when absent or null).
    fn success(&self) -> bool;

    /// The `error` message, if any.
    fn error(&self) -> Option<&str>;

    /// Checks the envelope.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError::Reported` if a non-empty error message is
    /// present, whatever `success` says, and `DeviceError::Unspecified`
    /// if `success` is false without a message.
    fn check(&self) -> Result<(), DeviceError> {
        match (self.success(), self.error().filter(|msg| !msg.is_empty())) {
            (_, Some(msg)) => Err(DeviceError::Reported(msg.to_string())),
            (false, None) => Err(DeviceError::Unspecified),
            (true, None) => Ok(()),
        }
    }
}

/// Parses `body` as envelope shape `E` and validates it.
///
/// # Errors
///
/// Returns `ParseError::Json` if `body` is not JSON of shape `E`, or the
/// error from [`Envelope::check`].
pub fn decode<E: Envelope>(body: &[u8]) -> Result<E, Error> {
    let envelope: E = serde_json::from_slice(body).map_err(ParseError::Json)?;
    envelope.check()?;
    Ok(envelope)
}

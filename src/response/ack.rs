// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command acknowledgement parsing.

use serde::Deserialize;

use crate::error::Error;
use crate::response::envelope::{self, Envelope};

/// Acknowledgement returned by the set endpoints.
///
/// A valid acknowledgement only means the unit accepted the request. It
/// does not prove the setting took effect.
///
/// # Examples
///
/// ```
/// use velair_lib::response::CommandAck;
///
/// assert!(CommandAck::parse(br#"{"success": true}"#).is_ok());
/// assert!(CommandAck::parse(br#"{"success": false}"#).is_err());
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct CommandAck {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    error: Option<String>,
}

impl CommandAck {
    /// Parses and validates a command response body.
    ///
    /// # Errors
    ///
    /// - `Error::Parse` if the body is not a command envelope
    /// - `Error::Device` if the unit reported a failure
    pub fn parse(body: &[u8]) -> Result<(), Error> {
        envelope::decode::<Self>(body).map(|_| ())
    }
}

impl Envelope for CommandAck {
    fn success(&self) -> bool {
        self.success.unwrap_or(false)
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeviceError;

    #[test]
    fn ack_success() {
        assert!(CommandAck::parse(br#"{"success":true}"#).is_ok());
        assert!(CommandAck::parse(br#"{"success":true,"error":""}"#).is_ok());
    }

    #[test]
    fn ack_device_error() {
        let err = CommandAck::parse(br#"{"success":false,"error":"busy"}"#).unwrap_err();
        assert!(matches!(err, Error::Device(DeviceError::Reported(ref m)) if m == "busy"));
    }

    #[test]
    fn ack_error_overrides_success() {
        let err = CommandAck::parse(br#"{"success":true,"error":"unsupported"}"#).unwrap_err();
        assert!(matches!(err, Error::Device(DeviceError::Reported(ref m)) if m == "unsupported"));
    }

    #[test]
    fn ack_without_message() {
        let err = CommandAck::parse(br#"{"success":false}"#).unwrap_err();
        assert!(err.is_ambiguous_failure());
    }

    #[test]
    fn ack_null_success_is_failure() {
        let err = CommandAck::parse(br#"{"success":null}"#).unwrap_err();
        assert!(err.is_ambiguous_failure());

        let err = CommandAck::parse(br#"{"success":null,"error":"busy"}"#).unwrap_err();
        assert!(err.is_device_error());
    }

    #[test]
    fn ack_empty_body_is_malformed() {
        let err = CommandAck::parse(b"").unwrap_err();
        assert!(err.is_malformed_response());
    }
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `Velair` library.
//!
//! Failures are layered the same way for every operation: value
//! validation, transport, response parsing, and errors reported by the
//! unit itself. Each public operation yields exactly one of these.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// A wire integer fell outside its enumeration.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The HTTP exchange failed before a body could be decoded.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The response body is not a well-formed envelope.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The unit reported a failure.
    #[error("device error: {0}")]
    Device(#[from] DeviceError),
}

impl Error {
    /// Returns `true` if the response body could not be parsed as the
    /// expected envelope.
    #[must_use]
    pub fn is_malformed_response(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Returns `true` if the unit supplied an error message.
    #[must_use]
    pub fn is_device_error(&self) -> bool {
        matches!(self, Self::Device(DeviceError::Reported(_)))
    }

    /// Returns `true` if the unit signaled failure without saying why.
    #[must_use]
    pub fn is_ambiguous_failure(&self) -> bool {
        matches!(self, Self::Device(DeviceError::Unspecified))
    }

    /// Returns `true` if a reported fan speed or mode was out of range.
    #[must_use]
    pub fn is_invalid_value(&self) -> bool {
        matches!(
            self,
            Self::Value(ValueError::InvalidFanSpeed(_) | ValueError::InvalidDeviceMode(_))
        )
    }
}

/// Errors related to value validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A fan speed wire value outside [0, 4].
    #[error("invalid fan speed {0}")]
    InvalidFanSpeed(i64),

    /// A device mode wire value outside {0, 1, 3, 4, 5}.
    #[error("invalid device mode {0}")]
    InvalidDeviceMode(i64),

    /// A name that matches no fan speed or mode.
    #[error("unknown {kind} name: {name}")]
    UnknownName {
        /// What was being parsed ("fan speed" or "device mode").
        kind: &'static str,
        /// The rejected input.
        name: String,
    },
}

/// Errors related to the HTTP exchange.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The unit answered with something other than `200 OK`.
    #[error("unexpected HTTP status code {0}")]
    UnexpectedStatus(u16),

    /// Invalid host or URL.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to parsing response envelopes.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The body is not JSON of the expected shape.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A successful envelope lacks a section its shape requires.
    #[error("missing field in response: {0}")]
    MissingField(&'static str),
}

/// Failures reported by the unit in the response envelope.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// The envelope carried an error message. This wins over `success`.
    #[error("error from device: {0}")]
    Reported(String),

    /// `success` was false and no message was given.
    #[error("unsuccessful request but no error defined")]
    Unspecified,
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

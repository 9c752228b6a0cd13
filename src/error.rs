// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the Shelly client library.
//!
//! Failures are grouped by where they happen: option validation, the HTTP
//! transport, decoding and walking the JSON envelope, and device-level
//! checks (unsupported operations, state that did not take effect).

use thiserror::Error;

use crate::device::Operation;
use crate::types::DeviceKind;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred during protocol communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while decoding or walking a response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error occurred during a device operation.
    #[error("device error: {0}")]
    Device(#[from] DeviceError),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is lower than the allowed minimum.
    #[error("invalid {field} < {min}: {actual}")]
    BelowMinimum {
        /// Name of the rejected setting.
        field: &'static str,
        /// Minimum allowed value.
        min: i64,
        /// The value that was provided.
        actual: i64,
    },

    /// A numeric value is greater than the allowed maximum.
    #[error("invalid {field} > {max}: {actual}")]
    AboveMaximum {
        /// Name of the rejected setting.
        field: &'static str,
        /// Maximum allowed value.
        max: i64,
        /// The value that was provided.
        actual: i64,
    },

    /// A device kind name did not match any known kind.
    #[error("{0} does not belong to DeviceKind values")]
    UnknownDeviceKind(String),

    /// A hex color string could not be parsed.
    #[error("invalid color string: {0}")]
    InvalidColor(String),
}

/// Errors related to HTTP communication with the device.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The device answered with a non-success status.
    #[error("HTTP {status} - {reason}")]
    Status {
        /// Numeric HTTP status code.
        status: u16,
        /// Canonical reason phrase, if known.
        reason: String,
    },

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// A request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Errors related to decoding a response envelope and extracting values.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The body is not a JSON object.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A dot path segment is absent from the envelope.
    #[error("key '{0}' not found")]
    KeyNotFound(String),

    /// The resolved value is not a boolean.
    #[error("value is not a bool")]
    NotABool,

    /// The resolved value is not a number.
    #[error("value is not a float")]
    NotAFloat,
}

/// Errors related to device operations.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// The device kind does not support the requested operation.
    #[error("can't {operation}, invalid device type {kind}")]
    UnsupportedOperation {
        /// The rejected operation.
        operation: Operation,
        /// The kind of the device the client is bound to.
        kind: DeviceKind,
    },

    /// The device reported a different power state than the one requested.
    #[error("invalid: requested power {requested}, device reports {reported}")]
    StateMismatch {
        /// Requested power state.
        requested: bool,
        /// Power state reported back by the device.
        reported: bool,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

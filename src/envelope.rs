// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response envelope decoding and dot-path extraction.
//!
//! Shelly devices answer every command with a JSON object. Rather than
//! declaring a struct for each endpoint, the client decodes the body into an
//! [`Envelope`] and pulls single values out of it with a dot path such as
//! `"meters.0"` or `"ison"`.
//!
//! # Path semantics
//!
//! The path is split on `.` and walked left to right. Each segment must be a
//! key of the current object, otherwise extraction fails with
//! [`ParseError::KeyNotFound`] naming that segment. When a segment resolves
//! to something other than an object the walk stops there and that value is
//! the leaf; any remaining segments are ignored.
//!
//! # Examples
//!
//! ```
//! use shelly_lib::envelope::Envelope;
//!
//! let envelope = Envelope::parse(r#"{"ison": true, "meter": {"power": 12}}"#).unwrap();
//! assert!(envelope.get_bool("ison").unwrap());
//! assert_eq!(envelope.get_f64("meter.power").unwrap(), 12.0);
//! assert!(envelope.get_bool("missing").is_err());
//! ```

use serde_json::{Map, Value};

use crate::error::ParseError;

/// A decoded JSON object returned by a device.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    root: Map<String, Value>,
}

impl Envelope {
    /// Decodes a response body.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the body is not valid JSON or is not an
    /// object.
    pub fn parse(body: &str) -> Result<Self, ParseError> {
        let root = serde_json::from_str(body)?;
        Ok(Self { root })
    }

    /// Returns the top-level object.
    #[must_use]
    pub fn root(&self) -> &Map<String, Value> {
        &self.root
    }

    /// Resolves `path` to a value without any type coercion.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::KeyNotFound` if a segment is missing.
    pub fn resolve(&self, path: &str) -> Result<&Value, ParseError> {
        resolve(&self.root, path)
    }

    /// Resolves `path` and coerces the leaf to `T`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::KeyNotFound` if a segment is missing, or the
    /// coercion error of `T` if the leaf has the wrong type.
    pub fn get<T: FromLeaf>(&self, path: &str) -> Result<T, ParseError> {
        extract(&self.root, path)
    }

    /// Extracts a boolean.
    ///
    /// # Errors
    ///
    /// See [`Envelope::get`].
    pub fn get_bool(&self, path: &str) -> Result<bool, ParseError> {
        self.get(path)
    }

    /// Extracts a number, accepting both integer and float encodings.
    ///
    /// # Errors
    ///
    /// See [`Envelope::get`].
    pub fn get_f64(&self, path: &str) -> Result<f64, ParseError> {
        self.get(path)
    }

    /// Extracts any value as its display string.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::KeyNotFound` if a segment is missing.
    pub fn get_string(&self, path: &str) -> Result<String, ParseError> {
        self.get(path)
    }
}

/// Conversion from a resolved JSON leaf to a Rust value.
pub trait FromLeaf: Sized {
    /// Converts the leaf.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` naming the expected type when the leaf does
    /// not have it.
    fn from_leaf(value: &Value) -> Result<Self, ParseError>;
}

impl FromLeaf for bool {
    fn from_leaf(value: &Value) -> Result<Self, ParseError> {
        value.as_bool().ok_or(ParseError::NotABool)
    }
}

impl FromLeaf for f64 {
    // Integers are promoted; precision loss only matters above 2^53.
    #[allow(clippy::cast_precision_loss)]
    fn from_leaf(value: &Value) -> Result<Self, ParseError> {
        let Value::Number(number) = value else {
            return Err(ParseError::NotAFloat);
        };
        if let Some(i) = number.as_i64() {
            return Ok(i as f64);
        }
        if let Some(u) = number.as_u64() {
            return Ok(u as f64);
        }
        number.as_f64().ok_or(ParseError::NotAFloat)
    }
}

impl FromLeaf for String {
    fn from_leaf(value: &Value) -> Result<Self, ParseError> {
        Ok(match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

/// Walks `path` from `root` and returns the value it stops at.
///
/// # Errors
///
/// Returns `ParseError::KeyNotFound` with the first missing segment.
pub fn resolve<'a>(root: &'a Map<String, Value>, path: &str) -> Result<&'a Value, ParseError> {
    let mut container = root;
    let mut leaf = None;

    for key in path.split('.') {
        let value = container
            .get(key)
            .ok_or_else(|| ParseError::KeyNotFound(key.to_string()))?;
        leaf = Some(value);

        let Value::Object(next) = value else {
            break;
        };
        container = next;
    }

    // split always yields at least one segment
    leaf.ok_or_else(|| ParseError::KeyNotFound(path.to_string()))
}

/// Walks `path` from `root` and coerces the leaf to `T`.
///
/// # Errors
///
/// See [`resolve`] and [`FromLeaf::from_leaf`].
pub fn extract<T: FromLeaf>(root: &Map<String, Value>, path: &str) -> Result<T, ParseError> {
    resolve(root, path).and_then(T::from_leaf)
}

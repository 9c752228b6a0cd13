// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport layer for talking to Shelly devices.
//!
//! The client only needs two primitives: issue a GET or a POST against a
//! full URL and get the response body back as text. [`Transport`] captures
//! exactly that, so the reqwest-based [`HttpTransport`] can be swapped for a
//! fake in tests or for another HTTP stack.

#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::{HttpConfig, HttpTransport};

use serde_json::Value;

use crate::error::ProtocolError;

/// A way of performing HTTP requests against a device.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Performs a GET request and returns the response body.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails or the device answers
    /// with a non-success status.
    async fn get(&self, url: &str) -> Result<String, ProtocolError>;

    /// Performs a POST request and returns the response body.
    ///
    /// When `body` is present it is sent as JSON with a
    /// `Content-Type: application/json` header; otherwise the body is empty.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the body cannot be encoded, the request
    /// fails, or the device answers with a non-success status.
    async fn post(&self, url: &str, body: Option<&Value>) -> Result<String, ProtocolError>;
}

/// Appends `params` to `url` as a query string, sorted by key.
pub(crate) fn with_query(url: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return url.to_string();
    }

    let mut sorted: Vec<_> = params.iter().collect();
    sorted.sort_by_key(|(key, _)| *key);

    let query = sorted
        .into_iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&");

    format!("{url}?{query}")
}

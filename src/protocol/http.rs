// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport implementation based on reqwest.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;

use crate::error::ProtocolError;
use crate::protocol::Transport;

// ============================================================================
// HttpConfig - Connection settings shared by every request
// ============================================================================

/// Configuration for the HTTP transport.
///
/// # Examples
///
/// ```
/// use shelly_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new()
///     .with_connect_timeout(Duration::from_secs(2))
///     .with_timeout(Duration::from_secs(5))
///     .with_user_agent("my-home/1.0");
/// assert_eq!(config.timeout(), Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    connect_timeout: Duration,
    timeout: Duration,
    user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpConfig {
    /// Default connection timeout.
    pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
    /// Default response timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);
    /// Default `User-Agent` header.
    pub const DEFAULT_USER_AGENT: &'static str = "shelly-rs";

    /// Creates a configuration with default timeouts.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connect_timeout: Self::DEFAULT_CONNECT_TIMEOUT,
            timeout: Self::DEFAULT_TIMEOUT,
            user_agent: Self::DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Sets the connection timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets the response timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Returns the connection timeout.
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Returns the response timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the `User-Agent` header.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Creates an `HttpTransport` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn into_transport(self) -> Result<HttpTransport, ProtocolError> {
        let client = Client::builder()
            .connect_timeout(self.connect_timeout)
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpTransport { client })
    }
}

// ============================================================================
// HttpTransport
// ============================================================================

/// reqwest-backed [`Transport`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new() -> Result<Self, ProtocolError> {
        HttpConfig::new().into_transport()
    }

    async fn send(request: RequestBuilder) -> Result<String, ProtocolError> {
        let response = request.send().await.map_err(ProtocolError::Http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProtocolError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.text().await.map_err(ProtocolError::Http)?;

        tracing::debug!(body = %body, "Received HTTP response");

        Ok(body)
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<String, ProtocolError> {
        tracing::debug!(url = %url, "Sending HTTP GET");
        Self::send(self.client.get(url)).await
    }

    async fn post(&self, url: &str, body: Option<&Value>) -> Result<String, ProtocolError> {
        tracing::debug!(url = %url, has_body = body.is_some(), "Sending HTTP POST");

        let request = match body {
            Some(value) => {
                let encoded = serde_json::to_string(value).map_err(ProtocolError::Encode)?;
                self.client
                    .post(url)
                    .header(CONTENT_TYPE, "application/json")
                    .body(encoded)
            }
            None => self.client.post(url).body(String::new()),
        };

        Self::send(request).await
    }
}

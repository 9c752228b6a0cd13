// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level client bound to a single Shelly device.
//!
//! Every public method performs at most one HTTP round trip. Operations the
//! device kind does not support are refused before anything is sent.
//!
//! ```no_run
//! use shelly_lib::{Client, Device};
//! use shelly_lib::options::WhiteModeOptions;
//!
//! # async fn example() -> shelly_lib::Result<()> {
//! let bulb = Client::new(Device::bulb_rgbw("hot-pink"))?;
//!
//! bulb.set_power_on().await?;
//!
//! let white = WhiteModeOptions::builder()
//!     .brightness(34)
//!     .temperature(6500)
//!     .validate()?;
//! bulb.set_mode_white(&white).await?;
//! assert!(bulb.is_mode_white().await?);
//! # Ok(())
//! # }
//! ```

use crate::device::{Device, Operation};
use crate::envelope::Envelope;
use crate::error::{DeviceError, Error, ProtocolError};
use crate::options::{ColorModeOptions, WhiteModeOptions};
use crate::protocol::{Transport, with_query};
use crate::types::LightMode;

#[cfg(feature = "http")]
use crate::protocol::{HttpConfig, HttpTransport};

/// Client for one Shelly device.
///
/// The type parameter selects the transport; [`HttpTransport`] is used by
/// [`Client::new`].
#[derive(Debug, Clone)]
pub struct Client<T: Transport> {
    device: Device,
    transport: T,
}

#[cfg(feature = "http")]
impl Client<HttpTransport> {
    /// Creates a client using the default HTTP configuration.
    ///
    /// # Notes
    ///
    /// The underlying HTTP client is built once here and reused by every
    /// operation. Timeouts and user agent are fixed for the life of the
    /// `Client`; build a new one to change them.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(device: Device) -> Result<Self, Error> {
        Self::with_config(device, HttpConfig::new())
    }

    /// Creates a client using a custom HTTP configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn with_config(device: Device, config: HttpConfig) -> Result<Self, Error> {
        let transport = config.into_transport()?;
        Ok(Self::with_transport(device, transport))
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client on top of an arbitrary transport.
    #[must_use]
    pub fn with_transport(device: Device, transport: T) -> Self {
        Self { device, transport }
    }

    /// Returns the device this client is bound to.
    #[must_use]
    pub fn device(&self) -> &Device {
        &self.device
    }

    // ========== Power Control ==========

    /// Turns the relay or light on.
    ///
    /// # Errors
    ///
    /// See [`Client::set_power`].
    pub async fn set_power_on(&self) -> Result<(), Error> {
        self.set_power(true).await
    }

    /// Turns the relay or light off.
    ///
    /// # Errors
    ///
    /// See [`Client::set_power`].
    pub async fn set_power_off(&self) -> Result<(), Error> {
        self.set_power(false).await
    }

    /// Sets the power state and checks that the device reports it back.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the response lacks a boolean
    /// `ison`, or the reported state differs from `on`.
    pub async fn set_power(&self, on: bool) -> Result<(), Error> {
        let path = self.route(Operation::SetPower)?;
        let turn = if on { "on" } else { "off" };
        let url = self.url(path, &[("turn", turn.to_string())])?;

        let body = self.transport.post(&url, None).await?;
        let reported = Envelope::parse(&body)?.get_bool("ison")?;

        if reported != on {
            tracing::warn!(
                host = %self.device.hostname(),
                requested = on,
                reported,
                "Power state did not take effect"
            );
            return Err(DeviceError::StateMismatch {
                requested: on,
                reported,
            }
            .into());
        }
        Ok(())
    }

    /// Returns whether the relay or light is on.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response lacks a boolean
    /// `ison`.
    pub async fn is_power_on(&self) -> Result<bool, Error> {
        let envelope = self.fetch(Operation::ReadPower).await?;
        Ok(envelope.get_bool("ison")?)
    }

    // ========== Metering ==========

    /// Returns the current power draw in Watts. Plug S only.
    ///
    /// # Errors
    ///
    /// Returns error if the device is not a plug, the request fails, or the
    /// response lacks a numeric `power`.
    pub async fn current_power(&self) -> Result<f64, Error> {
        let envelope = self.fetch(Operation::ReadCurrentPower).await?;
        Ok(envelope.get_f64("power")?)
    }

    // ========== Light Mode ==========

    /// Switches a bulb to white mode with the given settings.
    ///
    /// The response is not checked against the requested settings.
    ///
    /// # Errors
    ///
    /// Returns error if the device is not a bulb or the request fails.
    pub async fn set_mode_white(&self, options: &WhiteModeOptions) -> Result<(), Error> {
        self.send_mode(Operation::SetModeWhite, LightMode::White, options.query_params())
            .await
    }

    /// Switches a bulb to color mode with the given settings.
    ///
    /// The response is not checked against the requested settings.
    ///
    /// # Errors
    ///
    /// Returns error if the device is not a bulb or the request fails.
    pub async fn set_mode_color(&self, options: &ColorModeOptions) -> Result<(), Error> {
        self.send_mode(Operation::SetModeColor, LightMode::Color, options.query_params())
            .await
    }

    /// Returns the raw `mode` reported by a bulb.
    ///
    /// # Errors
    ///
    /// Returns error if the device is not a bulb, the request fails, or the
    /// response has no `mode`.
    pub async fn mode(&self) -> Result<String, Error> {
        let envelope = self.fetch(Operation::ReadMode).await?;
        Ok(envelope.get_string("mode")?)
    }

    /// Returns whether a bulb is in white mode.
    ///
    /// # Errors
    ///
    /// See [`Client::mode`].
    pub async fn is_mode_white(&self) -> Result<bool, Error> {
        Ok(self.mode().await? == LightMode::White.as_str())
    }

    /// Returns whether a bulb is in color mode.
    ///
    /// # Errors
    ///
    /// See [`Client::mode`].
    pub async fn is_mode_color(&self) -> Result<bool, Error> {
        Ok(self.mode().await? == LightMode::Color.as_str())
    }

    // ========== Helpers ==========

    /// Resolves the command path, refusing unsupported operations.
    fn route(&self, operation: Operation) -> Result<&'static str, Error> {
        self.device.command_path(operation).map_err(|err| {
            tracing::debug!(
                operation = %operation,
                kind = %self.device.kind(),
                "Operation not supported by device kind"
            );
            Error::Device(err)
        })
    }

    fn url(&self, path: &str, params: &[(&str, String)]) -> Result<String, ProtocolError> {
        let base = self.device.base_url()?;
        Ok(with_query(&format!("{base}{path}"), params))
    }

    /// Sends a GET for `operation` and decodes the response envelope.
    async fn fetch(&self, operation: Operation) -> Result<Envelope, Error> {
        let path = self.route(operation)?;
        let url = self.url(path, &[])?;
        let body = self.transport.get(&url).await?;
        Ok(Envelope::parse(&body)?)
    }

    async fn send_mode(
        &self,
        operation: Operation,
        mode: LightMode,
        mut params: Vec<(&'static str, String)>,
    ) -> Result<(), Error> {
        let path = self.route(operation)?;
        params.push(("mode", mode.to_string()));

        let url = self.url(path, &params)?;
        // TODO: compare the echoed light state with the requested options
        let body = self.transport.get(&url).await?;
        tracing::debug!(mode = %mode, body = %body, "Light mode set");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::Value;

    use super::*;
    use crate::error::ParseError;
    use crate::types::{DeviceKind, RgbColor};

    /// Records every request and answers with a canned body.
    #[derive(Debug)]
    struct FakeTransport {
        body: String,
        requests: Mutex<Vec<(&'static str, String)>>,
    }

    impl FakeTransport {
        fn answering(body: &str) -> Self {
            Self {
                body: body.to_string(),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<(&'static str, String)> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl Transport for FakeTransport {
        async fn get(&self, url: &str) -> Result<String, ProtocolError> {
            self.requests.lock().unwrap().push(("GET", url.to_string()));
            Ok(self.body.clone())
        }

        async fn post(&self, url: &str, body: Option<&Value>) -> Result<String, ProtocolError> {
            assert!(body.is_none());
            self.requests.lock().unwrap().push(("POST", url.to_string()));
            Ok(self.body.clone())
        }
    }

    fn client(kind: DeviceKind, body: &str) -> Client<FakeTransport> {
        Client::with_transport(
            Device::new("http://shelly", kind),
            FakeTransport::answering(body),
        )
    }

    #[tokio::test]
    async fn set_power_on_plug() {
        let c = client(DeviceKind::PlugS, r#"{"ison": true}"#);
        c.set_power_on().await.unwrap();
        assert_eq!(
            c.transport.requests(),
            vec![("POST", "http://shelly/relay/0?turn=on".to_string())]
        );
    }

    #[tokio::test]
    async fn set_power_off_bulb() {
        let c = client(DeviceKind::BulbRgbw, r#"{"ison": false}"#);
        c.set_power_off().await.unwrap();
        assert_eq!(
            c.transport.requests(),
            vec![("POST", "http://shelly/light/0?turn=off".to_string())]
        );
    }

    #[tokio::test]
    async fn empty_host_is_refused_without_requests() {
        for hostname in ["", "http://"] {
            let c = Client::with_transport(
                Device::plug_s(hostname),
                FakeTransport::answering(r#"{"ison": true}"#),
            );

            let err = c.is_power_on().await.unwrap_err();
            assert!(matches!(
                err,
                Error::Protocol(ProtocolError::InvalidAddress(_))
            ));
            let err = c.set_power_on().await.unwrap_err();
            assert!(matches!(
                err,
                Error::Protocol(ProtocolError::InvalidAddress(_))
            ));
            assert!(c.transport.requests().is_empty());
        }
    }

    #[tokio::test]
    async fn unsupported_operation_reported_before_address() {
        let c = Client::with_transport(
            Device::bulb_rgbw(""),
            FakeTransport::answering("{}"),
        );
        let err = c.current_power().await.unwrap_err();
        assert!(matches!(err, Error::Device(_)));
        assert!(c.transport.requests().is_empty());
    }

    #[tokio::test]
    async fn set_power_mismatch() {
        let c = client(DeviceKind::PlugS, r#"{"ison": false}"#);
        let err = c.set_power(true).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Device(DeviceError::StateMismatch {
                requested: true,
                reported: false
            })
        ));
    }

    #[tokio::test]
    async fn set_power_missing_ison() {
        let c = client(DeviceKind::PlugS, r#"{"power": 0}"#);
        let err = c.set_power(false).await.unwrap_err();
        assert!(matches!(err, Error::Parse(ParseError::KeyNotFound(k)) if k == "ison"));
    }

    #[tokio::test]
    async fn is_power_on_reads_ison() {
        let c = client(DeviceKind::BulbRgbw, r#"{"ison": true, "mode": "color"}"#);
        assert!(c.is_power_on().await.unwrap());
        assert_eq!(
            c.transport.requests(),
            vec![("GET", "http://shelly/light/0".to_string())]
        );
    }

    #[tokio::test]
    async fn is_power_on_wrong_type() {
        let c = client(DeviceKind::PlugS, r#"{"ison": "yes"}"#);
        let err = c.is_power_on().await.unwrap_err();
        assert!(matches!(err, Error::Parse(ParseError::NotABool)));
    }

    #[tokio::test]
    async fn current_power_integer_encoding() {
        let c = client(DeviceKind::PlugS, r#"{"power": 5, "is_valid": true}"#);
        let watts = c.current_power().await.unwrap();
        assert!((watts - 5.0).abs() < f64::EPSILON);
        assert_eq!(
            c.transport.requests(),
            vec![("GET", "http://shelly/meter/0".to_string())]
        );
    }

    #[tokio::test]
    async fn current_power_float_encoding() {
        let c = client(DeviceKind::PlugS, r#"{"power": 37.52}"#);
        let watts = c.current_power().await.unwrap();
        assert!((watts - 37.52).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn current_power_on_bulb_sends_nothing() {
        let c = client(DeviceKind::BulbRgbw, r#"{"power": 5}"#);
        let err = c.current_power().await.unwrap_err();
        assert!(matches!(
            err,
            Error::Device(DeviceError::UnsupportedOperation {
                operation: Operation::ReadCurrentPower,
                kind: DeviceKind::BulbRgbw,
            })
        ));
        assert!(c.transport.requests().is_empty());
    }

    #[tokio::test]
    async fn light_operations_on_plug_send_nothing() {
        let c = client(DeviceKind::PlugS, r#"{"mode": "white"}"#);
        let white = WhiteModeOptions::builder().validate().unwrap();
        let color = ColorModeOptions::builder().validate().unwrap();

        assert!(c.set_mode_white(&white).await.is_err());
        assert!(c.set_mode_color(&color).await.is_err());
        assert!(c.is_mode_white().await.is_err());
        assert!(c.is_mode_color().await.is_err());
        assert!(c.transport.requests().is_empty());
    }

    #[tokio::test]
    async fn set_mode_white_query() {
        let c = client(DeviceKind::BulbRgbw, "{}");
        let options = WhiteModeOptions::builder()
            .brightness(34)
            .transition_time(2000)
            .temperature(6500)
            .validate()
            .unwrap();
        c.set_mode_white(&options).await.unwrap();
        assert_eq!(
            c.transport.requests(),
            vec![(
                "GET",
                "http://shelly/light/0/set?brightness=34&mode=white&temp=6500&transition=2000"
                    .to_string()
            )]
        );
    }

    #[tokio::test]
    async fn set_mode_color_query() {
        let c = client(DeviceKind::BulbRgbw, "{}");
        let options = ColorModeOptions::builder()
            .color(RgbColor::new(1.0, 0.6, 0.1))
            .gain(100)
            .validate()
            .unwrap();
        c.set_mode_color(&options).await.unwrap();
        assert_eq!(
            c.transport.requests(),
            vec![(
                "GET",
                "http://shelly/light/0/set?blue=25&gain=100&green=153&mode=color&red=255"
                    .to_string()
            )]
        );
    }

    #[tokio::test]
    async fn set_mode_does_not_inspect_response() {
        let c = client(DeviceKind::BulbRgbw, "not json at all");
        let options = WhiteModeOptions::builder().validate().unwrap();
        assert!(c.set_mode_white(&options).await.is_ok());
    }

    #[tokio::test]
    async fn mode_queries() {
        let c = client(DeviceKind::BulbRgbw, r#"{"ison": true, "mode": "color"}"#);
        assert_eq!(c.mode().await.unwrap(), "color");
        assert!(c.is_mode_color().await.unwrap());
        assert!(!c.is_mode_white().await.unwrap());
        assert_eq!(c.transport.requests().len(), 3);
    }

    #[tokio::test]
    async fn malformed_body_is_parse_error() {
        let c = client(DeviceKind::PlugS, "<html>oops</html>");
        let err = c.is_power_on().await.unwrap_err();
        assert!(matches!(err, Error::Parse(ParseError::Json(_))));
    }
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device identity and command routing.
//!
//! A [`Device`] names one physical endpoint: where it lives and what kind of
//! hardware it is. The kind decides which HTTP command path serves each
//! [`Operation`], and which operations are refused outright.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DeviceError, ProtocolError};
use crate::types::DeviceKind;

/// A Shelly device reachable over HTTP.
///
/// # Examples
///
/// ```
/// use shelly_lib::Device;
/// use shelly_lib::types::DeviceKind;
///
/// let plug = Device::new("http://dark-salmon", DeviceKind::PlugS);
/// assert_eq!(plug.base_url().unwrap(), "http://dark-salmon/");
///
/// let bulb = Device::bulb_rgbw("192.168.1.40");
/// assert_eq!(bulb.base_url().unwrap(), "http://192.168.1.40/");
///
/// assert!(Device::plug_s("").base_url().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    hostname: String,
    kind: DeviceKind,
}

impl Device {
    /// Creates a device from a hostname, with or without an `http://` prefix.
    #[must_use]
    pub fn new(hostname: impl Into<String>, kind: DeviceKind) -> Self {
        Self {
            hostname: hostname.into(),
            kind,
        }
    }

    /// Creates a Plug S device.
    #[must_use]
    pub fn plug_s(hostname: impl Into<String>) -> Self {
        Self::new(hostname, DeviceKind::PlugS)
    }

    /// Creates a Bulb RGBW device.
    #[must_use]
    pub fn bulb_rgbw(hostname: impl Into<String>) -> Self {
        Self::new(hostname, DeviceKind::BulbRgbw)
    }

    /// Returns the hostname as given.
    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Returns the device kind.
    #[must_use]
    pub const fn kind(&self) -> DeviceKind {
        self.kind
    }

    /// Returns the base URL commands are appended to, always `http://<host>/`.
    ///
    /// A single trailing `/` on the hostname is tolerated.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::InvalidAddress` if the host part is empty or
    /// contains a `/` or whitespace.
    pub fn base_url(&self) -> Result<String, ProtocolError> {
        let host = self
            .hostname
            .strip_prefix("http://")
            .unwrap_or(&self.hostname);
        let host = host.strip_suffix('/').unwrap_or(host);

        if host.is_empty() {
            return Err(ProtocolError::InvalidAddress("host is required".to_string()));
        }
        if host.contains('/') || host.contains(char::is_whitespace) {
            return Err(ProtocolError::InvalidAddress(self.hostname.clone()));
        }

        Ok(format!("http://{host}/"))
    }

    /// Returns the command path serving `operation` on this device.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError::UnsupportedOperation` when this device kind has
    /// no such command.
    pub fn command_path(&self, operation: Operation) -> Result<&'static str, DeviceError> {
        command_path(self.kind, operation).ok_or(DeviceError::UnsupportedOperation {
            operation,
            kind: self.kind,
        })
    }
}

/// The logical operations the client can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Switch the relay or light on or off.
    SetPower,
    /// Read whether the relay or light is on.
    ReadPower,
    /// Read the instantaneous power draw in Watts.
    ReadCurrentPower,
    /// Switch a bulb to white mode.
    SetModeWhite,
    /// Switch a bulb to color mode.
    SetModeColor,
    /// Read the current mode of a bulb.
    ReadMode,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::SetPower => "change power state",
            Self::ReadPower => "check for power on",
            Self::ReadCurrentPower => "read current power",
            Self::SetModeWhite => "set light mode to white",
            Self::SetModeColor => "set light mode to color",
            Self::ReadMode => "read mode",
        };
        f.write_str(text)
    }
}

/// Routing table from (kind, operation) to command path.
const fn command_path(kind: DeviceKind, operation: Operation) -> Option<&'static str> {
    match (kind, operation) {
        (DeviceKind::PlugS, Operation::SetPower | Operation::ReadPower) => Some("relay/0"),
        (DeviceKind::PlugS, Operation::ReadCurrentPower) => Some("meter/0"),
        (
            DeviceKind::BulbRgbw,
            Operation::SetPower | Operation::ReadPower | Operation::ReadMode,
        ) => Some("light/0"),
        (DeviceKind::BulbRgbw, Operation::SetModeWhite | Operation::SetModeColor) => {
            Some("light/0/set")
        }
        _ => None,
    }
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device kinds and light modes.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// The kinds of Shelly devices this library can drive.
///
/// Names round-trip through [`Display`](fmt::Display) and [`FromStr`];
/// parsing is case-insensitive.
///
/// # Examples
///
/// ```
/// use shelly_lib::types::DeviceKind;
///
/// assert_eq!(DeviceKind::PlugS.to_string(), "PlugS");
/// assert_eq!("bulbrgbw".parse::<DeviceKind>().unwrap(), DeviceKind::BulbRgbw);
/// assert!("Dimmer2".parse::<DeviceKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DeviceKind {
    /// Shelly Plug S: one relay with power metering.
    PlugS,
    /// Shelly Bulb RGBW: a light with white and color modes.
    BulbRgbw,
}

impl DeviceKind {
    /// Every known kind, in declaration order.
    pub const ALL: [Self; 2] = [Self::PlugS, Self::BulbRgbw];

    /// Returns the canonical name of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PlugS => "PlugS",
            Self::BulbRgbw => "BulbRGBW",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceKind {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValueError::UnknownDeviceKind(s.to_string()))
    }
}

impl TryFrom<String> for DeviceKind {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DeviceKind> for String {
    fn from(kind: DeviceKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Operating mode of a color bulb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightMode {
    /// Tunable white, driven by color temperature.
    White,
    /// RGB color.
    Color,
}

impl LightMode {
    /// Returns the value used for the `mode` field on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Color => "color",
        }
    }
}

impl fmt::Display for LightMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

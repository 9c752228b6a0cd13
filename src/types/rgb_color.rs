// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Normalized RGB color with hex parsing.
//!
//! Channels are stored as `f64` in `[0.0, 1.0]` and scaled to the device's
//! 0-255 integer range only when a color-mode command is sent.

use std::str::FromStr;

use crate::error::ValueError;

/// RGB color with normalized channels.
///
/// Channel values are trusted: [`RgbColor::new`] performs no range check.
/// Scaling to the wire format multiplies by 255 and truncates toward zero.
///
/// # Examples
///
/// ```
/// use shelly_lib::types::RgbColor;
///
/// let color = RgbColor::new(1.0, 0.6, 0.0);
/// assert_eq!(color.to_wire(), [255, 153, 0]);
///
/// let teal = RgbColor::from_hex("#5599aa").unwrap();
/// assert_eq!(teal.to_wire(), [0x55, 0x99, 0xaa]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RgbColor {
    red: f64,
    green: f64,
    blue: f64,
}

impl RgbColor {
    /// Creates a color from normalized channels.
    #[must_use]
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Parses a color from a hex string.
    ///
    /// Accepts `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidColor` if the string is not a hex color.
    pub fn from_hex(hex: &str) -> Result<Self, ValueError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ValueError::InvalidColor(hex.to_string()));
        }

        let bytes = match digits.len() {
            3 => {
                let mut out = [0u8; 3];
                for (slot, i) in out.iter_mut().zip(0..3) {
                    *slot = parse_hex(hex, &digits[i..=i])? * 17;
                }
                out
            }
            6 => {
                let mut out = [0u8; 3];
                for (slot, i) in out.iter_mut().zip([0, 2, 4]) {
                    *slot = parse_hex(hex, &digits[i..i + 2])?;
                }
                out
            }
            _ => return Err(ValueError::InvalidColor(hex.to_string())),
        };

        Ok(Self::new(
            f64::from(bytes[0]) / 255.0,
            f64::from(bytes[1]) / 255.0,
            f64::from(bytes[2]) / 255.0,
        ))
    }

    /// Returns the red channel.
    #[must_use]
    pub const fn red(&self) -> f64 {
        self.red
    }

    /// Returns the green channel.
    #[must_use]
    pub const fn green(&self) -> f64 {
        self.green
    }

    /// Returns the blue channel.
    #[must_use]
    pub const fn blue(&self) -> f64 {
        self.blue
    }

    /// Scales the channels to the device range as `[red, green, blue]`.
    ///
    /// Each channel is multiplied by 255 and truncated toward zero.
    #[must_use]
    pub fn to_wire(&self) -> [i64; 3] {
        [
            scale_channel(self.red),
            scale_channel(self.green),
            scale_channel(self.blue),
        ]
    }
}

impl FromStr for RgbColor {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn scale_channel(channel: f64) -> i64 {
    (channel * 255.0) as i64
}

fn parse_hex(input: &str, digits: &str) -> Result<u8, ValueError> {
    u8::from_str_radix(digits, 16).map_err(|_| ValueError::InvalidColor(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaling_boundaries() {
        assert_eq!(RgbColor::new(1.0, 1.0, 1.0).to_wire(), [255, 255, 255]);
        assert_eq!(RgbColor::new(0.0, 0.0, 0.0).to_wire(), [0, 0, 0]);
    }

    #[test]
    fn scaling_truncates_toward_zero() {
        // 0.1 * 255 = 25.5 and 0.5 * 255 = 127.5
        assert_eq!(RgbColor::new(0.6, 0.1, 0.5).to_wire(), [153, 25, 127]);
    }

    #[test]
    fn channels_are_not_validated() {
        let color = RgbColor::new(1.2, -0.5, 0.0);
        assert_eq!(color.to_wire(), [306, -127, 0]);
    }

    #[test]
    fn parse_long_hex() {
        let color = RgbColor::from_hex("#FF8000").unwrap();
        assert_eq!(color.to_wire(), [255, 128, 0]);
        assert!((color.red() - 1.0).abs() < f64::EPSILON);
        assert!(color.blue().abs() < f64::EPSILON);
    }

    #[test]
    fn parse_short_hex() {
        let color: RgbColor = "f00".parse().unwrap();
        assert_eq!(color.to_wire(), [255, 0, 0]);
    }

    #[test]
    fn parse_invalid_hex() {
        assert!(RgbColor::from_hex("#12345").is_err());
        assert!(RgbColor::from_hex("#GG0000").is_err());
        assert!(RgbColor::from_hex("").is_err());
        assert!(RgbColor::from_hex("##fff").is_err());
        assert!(RgbColor::from_hex("##ff8000").is_err());
        assert!(RgbColor::from_hex("#ééé").is_err());
    }
}

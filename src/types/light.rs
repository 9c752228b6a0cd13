// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Range-checked light settings.
//!
//! Each type accepts a raw integer and refuses anything outside the range
//! the device firmware accepts, so a constructed value can always be sent
//! as-is.

use std::fmt;

use crate::error::ValueError;

/// Checks `value` against the inclusive range `[min, max]`.
fn check_range(field: &'static str, value: i64, min: u16, max: u16) -> Result<u16, ValueError> {
    if value < i64::from(min) {
        return Err(ValueError::BelowMinimum {
            field,
            min: i64::from(min),
            actual: value,
        });
    }
    if value > i64::from(max) {
        return Err(ValueError::AboveMaximum {
            field,
            max: i64::from(max),
            actual: value,
        });
    }
    // Safe: value lies within [min, max], which fits in u16
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let checked = value as u16;
    Ok(checked)
}

/// Brightness level as a percentage (0-100).
///
/// # Examples
///
/// ```
/// use shelly_lib::types::Brightness;
///
/// let b = Brightness::new(75).unwrap();
/// assert_eq!(b.value(), 75);
///
/// assert!(Brightness::new(-1).is_err());
/// assert!(Brightness::new(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Brightness(u8);

impl Brightness {
    /// Minimum brightness (0%).
    pub const MIN: Self = Self(0);

    /// Maximum brightness (100%).
    pub const MAX: Self = Self(100);

    /// Creates a new brightness value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::BelowMinimum` or `ValueError::AboveMaximum` if
    /// `value` is outside [0, 100].
    pub fn new(value: i64) -> Result<Self, ValueError> {
        let v = check_range("brightness", value, 0, 100)?;
        // Safe: bounded by 100
        #[allow(clippy::cast_possible_truncation)]
        let v = v as u8;
        Ok(Self(v))
    }

    /// Returns the brightness percentage.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Color channel gain as a percentage (0-100).
///
/// Only meaningful in color mode, where it scales the RGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Gain(u8);

impl Gain {
    /// Creates a new gain value.
    ///
    /// # Errors
    ///
    /// Returns a range error if `value` is outside [0, 100].
    pub fn new(value: i64) -> Result<Self, ValueError> {
        let v = check_range("gain", value, 0, 100)?;
        #[allow(clippy::cast_possible_truncation)]
        let v = v as u8;
        Ok(Self(v))
    }

    /// Returns the gain percentage.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

/// Fade duration between two light states, in milliseconds (0-5000).
///
/// # Examples
///
/// ```
/// use shelly_lib::types::TransitionTime;
///
/// let t = TransitionTime::from_millis(2000).unwrap();
/// assert_eq!(t.as_millis(), 2000);
/// assert!(TransitionTime::from_millis(5001).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransitionTime(u16);

impl TransitionTime {
    /// Longest transition the firmware accepts.
    pub const MAX_MILLIS: u16 = 5_000;

    /// Creates a transition time from milliseconds.
    ///
    /// # Errors
    ///
    /// Returns a range error if `millis` is outside [0, 5000].
    pub fn from_millis(millis: i64) -> Result<Self, ValueError> {
        check_range("transition time (ms)", millis, 0, Self::MAX_MILLIS).map(Self)
    }

    /// Returns the transition time in milliseconds.
    #[must_use]
    pub const fn as_millis(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for TransitionTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// White color temperature in Kelvin (3000-6500).
///
/// Lower values are warmer, higher values are cooler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColorTemperature(u16);

impl ColorTemperature {
    /// Warmest supported temperature.
    pub const WARM: Self = Self(3_000);

    /// Coolest supported temperature.
    pub const COOL: Self = Self(6_500);

    /// Creates a color temperature from Kelvin.
    ///
    /// # Errors
    ///
    /// Returns a range error if `kelvin` is outside [3000, 6500].
    pub fn from_kelvin(kelvin: i64) -> Result<Self, ValueError> {
        check_range("temp (kelvin)", kelvin, Self::WARM.0, Self::COOL.0).map(Self)
    }

    /// Returns the temperature in Kelvin.
    #[must_use]
    pub const fn kelvin(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for ColorTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}K", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_boundaries() {
        assert_eq!(Brightness::new(0).unwrap(), Brightness::MIN);
        assert_eq!(Brightness::new(100).unwrap(), Brightness::MAX);
        assert!(matches!(
            Brightness::new(-1),
            Err(ValueError::BelowMinimum { min: 0, actual: -1, .. })
        ));
        assert!(matches!(
            Brightness::new(101),
            Err(ValueError::AboveMaximum { max: 100, actual: 101, .. })
        ));
    }

    #[test]
    fn gain_boundaries() {
        assert_eq!(Gain::new(0).unwrap().value(), 0);
        assert_eq!(Gain::new(100).unwrap().value(), 100);
        assert!(Gain::new(-3).is_err());
        assert!(Gain::new(250).is_err());
    }

    #[test]
    fn gain_error_names_gain() {
        let err = Gain::new(101).unwrap_err();
        assert_eq!(err.to_string(), "invalid gain > 100: 101");
    }

    #[test]
    fn transition_boundaries() {
        assert_eq!(TransitionTime::from_millis(0).unwrap().as_millis(), 0);
        assert_eq!(TransitionTime::from_millis(5_000).unwrap().as_millis(), 5_000);
        assert!(TransitionTime::from_millis(-1).is_err());
        assert!(TransitionTime::from_millis(5_001).is_err());
    }

    #[test]
    fn color_temperature_boundaries() {
        assert_eq!(ColorTemperature::from_kelvin(3_000).unwrap(), ColorTemperature::WARM);
        assert_eq!(ColorTemperature::from_kelvin(6_500).unwrap(), ColorTemperature::COOL);
        assert!(matches!(
            ColorTemperature::from_kelvin(2_999),
            Err(ValueError::BelowMinimum { min: 3_000, .. })
        ));
        assert!(matches!(
            ColorTemperature::from_kelvin(6_501),
            Err(ValueError::AboveMaximum { max: 6_500, .. })
        ));
    }

    #[test]
    fn display() {
        assert_eq!(Brightness::new(34).unwrap().to_string(), "34%");
        assert_eq!(TransitionTime::from_millis(2000).unwrap().to_string(), "2000ms");
        assert_eq!(ColorTemperature::COOL.to_string(), "6500K");
    }
}

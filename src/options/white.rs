// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! White-mode options.

use crate::error::ValueError;
use crate::options::FirstError;
use crate::types::{Brightness, ColorTemperature, TransitionTime};

/// Validated settings sent along with a switch to white mode.
///
/// Unset fields are left out of the request, so the bulb keeps its current
/// value for them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhiteModeOptions {
    brightness: Option<Brightness>,
    transition: Option<TransitionTime>,
    temperature: Option<ColorTemperature>,
}

impl WhiteModeOptions {
    /// Starts an empty builder.
    pub fn builder() -> WhiteModeOptionsBuilder {
        WhiteModeOptionsBuilder::new()
    }

    /// Returns the brightness, if set.
    #[must_use]
    pub const fn brightness(&self) -> Option<Brightness> {
        self.brightness
    }

    /// Returns the transition time, if set.
    #[must_use]
    pub const fn transition(&self) -> Option<TransitionTime> {
        self.transition
    }

    /// Returns the color temperature, if set.
    #[must_use]
    pub const fn temperature(&self) -> Option<ColorTemperature> {
        self.temperature
    }

    /// Query parameters for the set fields, excluding `mode`.
    pub(crate) fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(b) = self.brightness {
            params.push(("brightness", b.value().to_string()));
        }
        if let Some(t) = self.transition {
            params.push(("transition", t.as_millis().to_string()));
        }
        if let Some(k) = self.temperature {
            params.push(("temp", k.kelvin().to_string()));
        }
        params
    }
}

/// Chainable builder for [`WhiteModeOptions`].
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct WhiteModeOptionsBuilder {
    options: WhiteModeOptions,
    error: FirstError,
}

impl WhiteModeOptionsBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the brightness in percent (0-100).
    pub fn brightness(mut self, brightness: i64) -> Self {
        self.error
            .record(&mut self.options.brightness, Brightness::new(brightness));
        self
    }

    /// Sets the transition time in milliseconds (0-5000).
    pub fn transition_time(mut self, milliseconds: i64) -> Self {
        self.error.record(
            &mut self.options.transition,
            TransitionTime::from_millis(milliseconds),
        );
        self
    }

    /// Sets the color temperature in Kelvin (3000-6500).
    pub fn temperature(mut self, kelvin: i64) -> Self {
        self.error.record(
            &mut self.options.temperature,
            ColorTemperature::from_kelvin(kelvin),
        );
        self
    }

    /// Returns the first recorded validation error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&ValueError> {
        self.error.get()
    }

    /// Finalizes the builder.
    ///
    /// # Errors
    ///
    /// Returns the first validation error recorded by a setter.
    pub fn validate(self) -> Result<WhiteModeOptions, ValueError> {
        self.error.finish(self.options)
    }

    /// Finalizes the builder, treating a validation error as a bug.
    ///
    /// # Panics
    ///
    /// Panics with the first recorded validation error.
    #[must_use]
    pub fn must_validate(self) -> WhiteModeOptions {
        match self.validate() {
            Ok(options) => options,
            Err(err) => panic!("{err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_validates() {
        let options = WhiteModeOptions::builder().validate().unwrap();
        assert_eq!(options, WhiteModeOptions::default());
        assert!(options.query_params().is_empty());
    }

    #[test]
    fn all_fields_populated() {
        let options = WhiteModeOptions::builder()
            .brightness(34)
            .transition_time(2000)
            .temperature(6500)
            .validate()
            .unwrap();

        assert_eq!(options.brightness().unwrap().value(), 34);
        assert_eq!(options.transition().unwrap().as_millis(), 2000);
        assert_eq!(options.temperature().unwrap().kelvin(), 6500);
        assert_eq!(
            options.query_params(),
            vec![
                ("brightness", "34".to_string()),
                ("transition", "2000".to_string()),
                ("temp", "6500".to_string()),
            ]
        );
    }

    #[test]
    fn unset_fields_stay_unset() {
        let options = WhiteModeOptions::builder()
            .temperature(3000)
            .validate()
            .unwrap();
        assert!(options.brightness().is_none());
        assert!(options.transition().is_none());
        assert_eq!(options.query_params(), vec![("temp", "3000".to_string())]);
    }

    #[test]
    fn brightness_boundaries() {
        assert!(WhiteModeOptions::builder().brightness(0).validate().is_ok());
        assert!(WhiteModeOptions::builder().brightness(100).validate().is_ok());
        assert!(WhiteModeOptions::builder().brightness(-1).validate().is_err());
        assert!(WhiteModeOptions::builder().brightness(101).validate().is_err());
    }

    #[test]
    fn temperature_out_of_range() {
        let err = WhiteModeOptions::builder()
            .temperature(2500)
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid temp (kelvin) < 3000: 2500");
    }

    #[test]
    fn error_visible_before_finalize() {
        let builder = WhiteModeOptions::builder().transition_time(9000);
        assert!(matches!(
            builder.error(),
            Some(ValueError::AboveMaximum { max: 5000, .. })
        ));
    }

    #[test]
    fn first_error_wins() {
        let err = WhiteModeOptions::builder()
            .transition_time(-1)
            .brightness(500)
            .temperature(1)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            ValueError::BelowMinimum {
                field: "transition time (ms)",
                ..
            }
        ));
    }

    #[test]
    fn later_valid_setter_does_not_clear_error() {
        let result = WhiteModeOptions::builder()
            .brightness(101)
            .brightness(50)
            .validate();
        assert!(result.is_err());
    }

    #[test]
    fn must_validate_returns_options() {
        let options = WhiteModeOptions::builder().brightness(10).must_validate();
        assert_eq!(options.brightness().unwrap().value(), 10);
    }

    #[test]
    #[should_panic(expected = "invalid brightness > 100: 101")]
    fn must_validate_panics_on_error() {
        let _ = WhiteModeOptions::builder().brightness(101).must_validate();
    }
}

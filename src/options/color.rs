// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color-mode options.

use crate::error::ValueError;
use crate::options::FirstError;
use crate::types::{Brightness, Gain, RgbColor, TransitionTime};

/// Validated settings sent along with a switch to color mode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorModeOptions {
    brightness: Option<Brightness>,
    transition: Option<TransitionTime>,
    gain: Option<Gain>,
    color: Option<RgbColor>,
}

impl ColorModeOptions {
    /// Starts an empty builder.
    pub fn builder() -> ColorModeOptionsBuilder {
        ColorModeOptionsBuilder::new()
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

    /// Returns the gain, if set.
    #[must_use]
    pub const fn gain(&self) -> Option<Gain> {
        self.gain
    }

    /// Returns the color, if set.
    #[must_use]
    pub const fn color(&self) -> Option<RgbColor> {
        self.color
    }

    /// Query parameters for the set fields, excluding `mode`.
    ///
    /// The color is split into `red`, `green` and `blue` scaled to 0-255.
    pub(crate) fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(color) = self.color {
            let [red, green, blue] = color.to_wire();
            params.push(("red", red.to_string()));
            params.push(("green", green.to_string()));
            params.push(("blue", blue.to_string()));
        }
        if let Some(b) = self.brightness {
            params.push(("brightness", b.value().to_string()));
        }
        if let Some(g) = self.gain {
            params.push(("gain", g.value().to_string()));
        }
        if let Some(t) = self.transition {
            params.push(("transition", t.as_millis().to_string()));
        }
        params
    }
}

/// Chainable builder for [`ColorModeOptions`].
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct ColorModeOptionsBuilder {
    options: ColorModeOptions,
    error: FirstError,
}

impl ColorModeOptionsBuilder {
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

    /// Sets the gain in percent (0-100).
    pub fn gain(mut self, gain: i64) -> Self {
        self.error.record(&mut self.options.gain, Gain::new(gain));
        self
    }

    /// Sets the color. Channels are taken as-is.
    pub fn color(mut self, color: RgbColor) -> Self {
        self.options.color = Some(color);
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
    pub fn validate(self) -> Result<ColorModeOptions, ValueError> {
        self.error.finish(self.options)
    }

    /// Finalizes the builder, treating a validation error as a bug.
    ///
    /// # Panics
    ///
    /// Panics with the first recorded validation error.
    #[must_use]
    pub fn must_validate(self) -> ColorModeOptions {
        match self.validate() {
            Ok(options) => options,
            Err(err) => panic!("{err}"),
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for Shelly device control.
//!
//! Numeric settings are range-checked at construction, so anything that
//! reaches a command is already valid for the firmware.
//!
//! # Types
//!
//! - [`DeviceKind`] - Plug S or Bulb RGBW
//! - [`LightMode`] - White or color mode of a bulb
//! - [`Brightness`] - Brightness level (0-100%)
//! - [`Gain`] - Color gain (0-100%)
//! - [`TransitionTime`] - Fade duration (0-5000 ms)
//! - [`ColorTemperature`] - White temperature (3000-6500 K)
//! - [`RgbColor`] - Normalized RGB color

mod kind;
mod light;
mod rgb_color;

pub use kind::{DeviceKind, LightMode};
pub use light::{Brightness, ColorTemperature, Gain, TransitionTime};
pub use rgb_color::RgbColor;

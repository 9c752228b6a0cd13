// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Option sets for switching a bulb to white or color mode.
//!
//! Both option sets are assembled through a chainable builder. Each setter
//! validates its own input; a failure is recorded instead of breaking the
//! chain, and only surfaces when the builder is finalized. If several
//! setters fail, the error of the first one in call order is reported.
//!
//! # Examples
//!
//! ```
//! use shelly_lib::options::{ColorModeOptions, WhiteModeOptions};
//! use shelly_lib::types::RgbColor;
//!
//! let white = WhiteModeOptions::builder()
//!     .brightness(34)
//!     .transition_time(2000)
//!     .temperature(6500)
//!     .validate()
//!     .unwrap();
//! assert_eq!(white.brightness().unwrap().value(), 34);
//!
//! let err = ColorModeOptions::builder()
//!     .brightness(200)
//!     .gain(50)
//!     .color(RgbColor::new(1.0, 0.0, 0.0))
//!     .validate()
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "invalid brightness > 100: 200");
//! ```

mod color;
mod white;

pub use color::{ColorModeOptions, ColorModeOptionsBuilder};
pub use white::{WhiteModeOptions, WhiteModeOptionsBuilder};

use crate::error::ValueError;

/// Holds the first validation error seen by a builder.
#[derive(Debug, Clone, Default)]
struct FirstError(Option<ValueError>);

impl FirstError {
    /// Stores a validated value in `slot`, or remembers the error if none
    /// has been recorded yet.
    fn record<T>(&mut self, slot: &mut Option<T>, result: Result<T, ValueError>) {
        match result {
            Ok(value) => *slot = Some(value),
            Err(err) => {
                self.0.get_or_insert(err);
            }
        }
    }

    fn get(&self) -> Option<&ValueError> {
        self.0.as_ref()
    }

    fn finish<T>(self, options: T) -> Result<T, ValueError> {
        match self.0 {
            Some(err) => Err(err),
            None => Ok(options),
        }
    }
}

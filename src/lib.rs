// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shelly Lib - A Rust library to control Shelly devices over HTTP.
//!
//! This library talks to first-generation Shelly devices through their
//! local HTTP API. A [`Client`] is bound to one [`Device`] and exposes the
//! operations that device kind supports.
//!
//! # Supported Devices
//!
//! - **Plug S**: power on/off, power state, instantaneous power draw
//! - **Bulb RGBW**: power on/off, power state, white and color modes
//!
//! # Quick Start
//!
//! ```no_run
//! use shelly_lib::{Client, Device};
//!
//! #[tokio::main]
//! async fn main() -> shelly_lib::Result<()> {
//!     let plug = Client::new(Device::plug_s("192.168.1.20"))?;
//!
//!     plug.set_power_on().await?;
//!     println!("drawing {} W", plug.current_power().await?);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Light Modes
//!
//! Mode settings are collected with a builder that validates each value and
//! reports the first problem when finalized:
//!
//! ```no_run
//! use shelly_lib::{Client, Device};
//! use shelly_lib::options::ColorModeOptions;
//! use shelly_lib::types::RgbColor;
//!
//! # async fn example() -> shelly_lib::Result<()> {
//! let bulb = Client::new(Device::bulb_rgbw("hot-pink"))?;
//!
//! let options = ColorModeOptions::builder()
//!     .brightness(12)
//!     .transition_time(2000)
//!     .gain(100)
//!     .color(RgbColor::from_hex("#5599aa")?)
//!     .validate()?;
//!
//! bulb.set_mode_color(&options).await?;
//! assert!(bulb.is_mode_color().await?);
//! # Ok(())
//! # }
//! ```

mod client;
mod device;
pub mod envelope;
pub mod error;
pub mod options;
pub mod protocol;
pub mod types;

pub use client::Client;
pub use device::{Device, Operation};
pub use error::{DeviceError, Error, ParseError, ProtocolError, Result, ValueError};
pub use options::{ColorModeOptions, WhiteModeOptions};
#[cfg(feature = "http")]
pub use protocol::{HttpConfig, HttpTransport};
pub use protocol::Transport;
pub use types::{DeviceKind, LightMode, RgbColor};

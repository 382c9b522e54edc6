// SPDX-License-Identifier: MPL-2.0
//! `iced_preview` is a click-to-preview image component for the Iced GUI framework.
//!
//! An inline image, when preview is enabled, opens a full-window overlay on
//! click showing the image scaled to fit a fraction of the viewport while
//! keeping its aspect ratio. Clicking the overlay closes it.
//!
//! The toolkit-independent pieces live in [`preview`]; the Iced component is
//! [`ui::preview_image`] and [`app`] is a small gallery hosting it.

#![doc(html_root_url = "https://docs.rs/iced_preview/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod preview;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::{Error, Result};

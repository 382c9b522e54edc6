// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! - [`preview_image`] - The click-to-preview image component
//! - [`styles`] - Backdrop and thumbnail frame styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod preview_image;
pub mod styles;

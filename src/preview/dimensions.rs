// SPDX-License-Identifier: MPL-2.0
//! Pixel measurement newtypes.
//!
//! [`Dimensions`] is the value type passed between the probe, the size
//! calculator and the overlay. [`PreviewScale`] is the validated form of the
//! configured viewport fraction.

use crate::config::defaults::{
    DEFAULT_PREVIEW_SCALE, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MAX_PREVIEW_SCALE,
    MIN_PREVIEW_SCALE,
};
use crate::error::ProbeError;

// =============================================================================
// Dimensions
// =============================================================================

/// Width and height in pixels, both strictly positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    width: f32,
    height: f32,
}

impl Dimensions {
    /// Viewport used when the configured window size is unusable.
    pub const DEFAULT_VIEWPORT: Dimensions = Dimensions {
        width: DEFAULT_WINDOW_WIDTH,
        height: DEFAULT_WINDOW_HEIGHT,
    };

    /// Creates dimensions, returning `None` unless both sides are positive and finite.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Option<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if valid(width) && valid(height) {
            Some(Self { width, height })
        } else {
            None
        }
    }

    /// Creates dimensions from integer pixel counts, as reported by decoders.
    pub fn from_pixels(width: u32, height: u32) -> Result<Self, ProbeError> {
        Self::new(width as f32, height as f32).ok_or(ProbeError::InvalidDimensions {
            width: width as f32,
            height: height as f32,
        })
    }

    #[must_use]
    pub fn width(self) -> f32 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> f32 {
        self.height
    }

    /// Width divided by height.
    #[must_use]
    pub fn aspect_ratio(self) -> f32 {
        self.width / self.height
    }

    /// Whether the image is wider than it is tall. Squares are not landscape.
    #[must_use]
    pub fn is_landscape(self) -> bool {
        self.width > self.height
    }
}

impl From<Dimensions> for iced::Size {
    fn from(dimensions: Dimensions) -> Self {
        iced::Size::new(dimensions.width, dimensions.height)
    }
}

impl TryFrom<iced::Size> for Dimensions {
    type Error = ProbeError;

    fn try_from(size: iced::Size) -> Result<Self, Self::Error> {
        Self::new(size.width, size.height).ok_or(ProbeError::InvalidDimensions {
            width: size.width,
            height: size.height,
        })
    }
}

// =============================================================================
// PreviewScale
// =============================================================================

/// Fraction of the viewport the preview may occupy, clamped to a usable range.
///
/// [`compute_fit_size`](super::compute_fit_size) itself accepts any `f32`;
/// this type only guards values coming from configuration and the CLI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewScale(f32);

impl PreviewScale {
    /// Creates a new scale, clamping the value to the valid range.
    /// Non-finite input falls back to the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Self(value.clamp(MIN_PREVIEW_SCALE, MAX_PREVIEW_SCALE))
        } else {
            Self::default()
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for PreviewScale {
    fn default() -> Self {
        Self(DEFAULT_PREVIEW_SCALE)
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Preview**: Viewport fraction and backdrop dimming
//! - **Probe**: Timeout and size limits for dimension probes
//! - **Thumbnail**: Inline image sizing
//! - **Window**: Initial window size, used as the viewport until the first resize

// ==========================================================================
// Preview Defaults
// ==========================================================================

/// Fraction of the viewport a preview occupies along its constrained side.
pub const DEFAULT_PREVIEW_SCALE: f32 = 0.7;

/// Smallest accepted configured scale.
pub const MIN_PREVIEW_SCALE: f32 = 0.05;

/// Largest accepted configured scale.
pub const MAX_PREVIEW_SCALE: f32 = 1.0;

/// Alpha of the black backdrop behind an open preview.
pub const DEFAULT_BACKDROP_OPACITY: f32 = 0.8;

// ==========================================================================
// Probe Defaults
// ==========================================================================

/// Time allowed for fetching and measuring an image (in seconds).
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 15;

/// Maximum probe timeout (in seconds).
pub const MAX_PROBE_TIMEOUT_SECS: u64 = 300;

/// Largest image body a probe will download (32 MiB).
pub const DEFAULT_PROBE_MAX_BYTES: u64 = 32 * 1024 * 1024;

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Default inline image width in logical pixels.
pub const DEFAULT_THUMBNAIL_WIDTH: f32 = 240.0;

/// Default inline image height in logical pixels.
pub const DEFAULT_THUMBNAIL_HEIGHT: f32 = 180.0;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const DEFAULT_WINDOW_WIDTH: f32 = 1024.0;

pub const DEFAULT_WINDOW_HEIGHT: f32 = 768.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_PREVIEW_SCALE > 0.0);
    assert!(MAX_PREVIEW_SCALE >= MIN_PREVIEW_SCALE);
    assert!(DEFAULT_PREVIEW_SCALE >= MIN_PREVIEW_SCALE);
    assert!(DEFAULT_PREVIEW_SCALE <= MAX_PREVIEW_SCALE);

    assert!(DEFAULT_BACKDROP_OPACITY >= 0.0);
    assert!(DEFAULT_BACKDROP_OPACITY <= 1.0);

    assert!(DEFAULT_PROBE_TIMEOUT_SECS > 0);
    assert!(DEFAULT_PROBE_TIMEOUT_SECS <= MAX_PROBE_TIMEOUT_SECS);
    assert!(DEFAULT_PROBE_MAX_BYTES > 0);

    assert!(DEFAULT_THUMBNAIL_WIDTH > 0.0);
    assert!(DEFAULT_THUMBNAIL_HEIGHT > 0.0);
    assert!(DEFAULT_WINDOW_WIDTH > 0.0);
    assert!(DEFAULT_WINDOW_HEIGHT > 0.0);
};

// SPDX-License-Identifier: MPL-2.0
//! Toolkit-independent description of what a preview renders.
//!
//! A [`Scene`] is always an inline thumbnail plus, while open, an overlay. The
//! Iced adapter in `ui::preview_image` turns it into widgets.

use super::{Dimensions, ImageSource, PreviewController, ViewState};
use crate::config::defaults::DEFAULT_BACKDROP_OPACITY;

/// Full-window dimming layer behind the previewed image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Backdrop {
    /// Alpha of the black fill, in `0.0..=1.0`.
    pub opacity: f32,
}

impl Backdrop {
    #[must_use]
    pub fn new(opacity: f32) -> Self {
        Self {
            opacity: if opacity.is_finite() {
                opacity.clamp(0.0, 1.0)
            } else {
                DEFAULT_BACKDROP_OPACITY
            },
        }
    }
}

impl Default for Backdrop {
    fn default() -> Self {
        Self {
            opacity: DEFAULT_BACKDROP_OPACITY,
        }
    }
}

/// The always-present inline image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thumbnail<'a> {
    pub source: &'a ImageSource,
    pub class_name: Option<&'a str>,
    /// Whether a click should request the preview.
    pub clickable: bool,
}

/// The modal layer shown while the preview is open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlay<'a> {
    pub source: &'a ImageSource,
    /// Size of the centered image.
    pub size: Dimensions,
    pub backdrop: Backdrop,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene<'a> {
    pub thumbnail: Thumbnail<'a>,
    pub overlay: Option<Overlay<'a>>,
}

/// Describes the current rendering of `controller`.
#[must_use]
pub fn scene<'a>(
    controller: &'a PreviewController,
    class_name: Option<&'a str>,
    backdrop: Backdrop,
) -> Scene<'a> {
    let source = controller.source();
    let overlay = match controller.state() {
        ViewState::Open { display_size } => Some(Overlay {
            source,
            size: display_size,
            backdrop,
        }),
        ViewState::Closed => None,
    };

    Scene {
        thumbnail: Thumbnail {
            source,
            class_name,
            clickable: controller.preview_enabled(),
        },
        overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::PreviewScale;
    use crate::test_utils::assert_abs_diff_eq;

    fn controller(preview: bool) -> PreviewController {
        PreviewController::new(
            ImageSource::parse("cat.png").unwrap(),
            preview,
            PreviewScale::default(),
            Dimensions::new(1000.0, 800.0).unwrap(),
        )
    }

    #[test]
    fn closed_controller_renders_thumbnail_only() {
        let ctrl = controller(true);
        let scene = scene(&ctrl, Some("avatar"), Backdrop::default());
        assert!(scene.overlay.is_none());
        assert_eq!(scene.thumbnail.class_name, Some("avatar"));
        assert!(scene.thumbnail.clickable);
        assert_eq!(scene.thumbnail.source, ctrl.source());
    }

    #[test]
    fn open_controller_renders_overlay_at_display_size() {
        let mut ctrl = controller(true);
        let ticket = ctrl.open().unwrap();
        ctrl.resolve(&ticket, Ok(Dimensions::new(1080.0, 1920.0).unwrap()));

        let scene = scene(&ctrl, None, Backdrop::default());
        let overlay = scene.overlay.expect("overlay while open");
        assert_eq!(Some(overlay.size), ctrl.display_size());
        assert_abs_diff_eq!(overlay.backdrop.opacity, 0.8);
    }

    #[test]
    fn disabled_preview_is_not_clickable() {
        let ctrl = controller(false);
        assert!(!scene(&ctrl, None, Backdrop::default()).thumbnail.clickable);
    }

    #[test]
    fn backdrop_opacity_is_clamped() {
        assert_abs_diff_eq!(Backdrop::new(3.0).opacity, 1.0);
        assert_abs_diff_eq!(Backdrop::new(-1.0).opacity, 0.0);
        assert_abs_diff_eq!(Backdrop::new(f32::NAN).opacity, DEFAULT_BACKDROP_OPACITY);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Fit-to-screen size calculation for the preview overlay.

use super::Dimensions;

/// Computes the on-screen size of a previewed image.
///
/// When the image is relatively at least as wide as the viewport, the width
/// drives the result: landscape images take the full viewport width, portrait
/// and square ones take `scale` of it. Otherwise the height drives the result
/// at `scale` of the viewport height. The other side always follows the
/// natural aspect ratio.
///
/// `scale` is used as given; values above `1.0` are not clamped. A scale
/// that is zero, negative or NaN cannot produce a positive size, so the
/// natural size is returned unchanged. Callers wanting a bounded scale go
/// through [`PreviewScale`](super::PreviewScale).
#[must_use]
pub fn compute_fit_size(natural: Dimensions, viewport: Dimensions, scale: f32) -> Dimensions {
    let image_ratio = natural.aspect_ratio();
    let viewport_ratio = viewport.aspect_ratio();

    let (width, height) = if image_ratio >= viewport_ratio {
        let width = if natural.is_landscape() {
            viewport.width()
        } else {
            viewport.width() * scale
        };
        (width, width / image_ratio)
    } else {
        let height = viewport.height() * scale;
        (height * image_ratio, height)
    };

    Dimensions::new(width, height).unwrap_or(natural)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, assert_relative_eq, F32_EPSILON};

    fn dims(width: f32, height: f32) -> Dimensions {
        Dimensions::new(width, height).unwrap()
    }

    #[test]
    fn landscape_in_tall_viewport_takes_full_width() {
        let size = compute_fit_size(dims(1920.0, 1080.0), dims(1000.0, 2000.0), 0.7);
        assert_abs_diff_eq!(size.width(), 1000.0);
        assert_abs_diff_eq!(size.height(), 562.5, epsilon = F32_EPSILON);
    }

    #[test]
    fn portrait_in_wide_viewport_uses_scaled_height() {
        let size = compute_fit_size(dims(1080.0, 1920.0), dims(1000.0, 800.0), 0.7);
        assert_abs_diff_eq!(size.height(), 560.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(size.width(), 315.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn square_image_in_square_viewport_takes_width_branch() {
        let size = compute_fit_size(dims(400.0, 400.0), dims(800.0, 800.0), 0.7);
        // Equal ratios use the width branch; a square is not landscape.
        assert_abs_diff_eq!(size.width(), 560.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(size.height(), 560.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn portrait_wider_than_viewport_uses_scaled_width() {
        // 0.8 image ratio vs 0.5 viewport ratio: width branch, not landscape.
        let size = compute_fit_size(dims(800.0, 1000.0), dims(500.0, 1000.0), 0.5);
        assert_abs_diff_eq!(size.width(), 250.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(size.height(), 312.5, epsilon = F32_EPSILON);
    }

    #[test]
    fn landscape_narrower_than_viewport_uses_scaled_height() {
        // 1.25 image ratio vs 2.0 viewport ratio: height branch.
        let size = compute_fit_size(dims(1250.0, 1000.0), dims(2000.0, 1000.0), 0.7);
        assert_abs_diff_eq!(size.height(), 700.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(size.width(), 875.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn scale_above_one_is_not_clamped() {
        let size = compute_fit_size(dims(100.0, 400.0), dims(1000.0, 1000.0), 1.5);
        assert_abs_diff_eq!(size.height(), 1500.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn unusable_scale_returns_natural_size() {
        let natural = dims(1080.0, 1920.0);
        for scale in [0.0, -0.5, f32::NAN] {
            assert_eq!(compute_fit_size(natural, dims(1000.0, 800.0), scale), natural);
        }
    }

    #[test]
    fn aspect_ratio_is_preserved_across_inputs() {
        let naturals = [
            (1.0, 1.0),
            (3000.0, 17.0),
            (17.0, 3000.0),
            (640.0, 480.0),
            (480.0, 640.0),
            (1.0, 2.0),
        ];
        let viewports = [(1920.0, 1080.0), (1080.0, 1920.0), (800.0, 800.0), (3.0, 1.0)];
        let scales = [0.05, 0.3, 0.7, 1.0];

        for &(nw, nh) in &naturals {
            for &(vw, vh) in &viewports {
                for &scale in &scales {
                    let natural = dims(nw, nh);
                    let viewport = dims(vw, vh);
                    let size = compute_fit_size(natural, viewport, scale);
                    assert_relative_eq!(
                        size.aspect_ratio(),
                        natural.aspect_ratio(),
                        max_relative = 1e-4
                    );

                    if natural.aspect_ratio() >= viewport.aspect_ratio() {
                        let expected = if natural.is_landscape() { vw } else { vw * scale };
                        assert_relative_eq!(size.width(), expected, max_relative = 1e-5);
                    } else {
                        assert_relative_eq!(size.height(), vh * scale, max_relative = 1e-5);
                    }
                }
            }
        }
    }
}

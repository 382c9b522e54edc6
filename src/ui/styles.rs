// SPDX-License-Identifier: MPL-2.0
//! Container styles for thumbnails and the preview backdrop.

use crate::preview::Backdrop;
use crate::ui::design_tokens::{border, opacity, palette};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Black fill at the backdrop's opacity, covering the whole window.
pub fn backdrop(backdrop: Backdrop) -> impl Fn(&Theme) -> container::Style {
    let color = Color {
        a: backdrop.opacity,
        ..palette::BLACK
    };
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

/// Thin frame around an inline image.
pub fn thumbnail_frame(radius: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(Background::Color(palette.background.weak.color)),
            border: Border {
                color: Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette.background.strong.text
                },
                width: border::WIDTH_SM,
                radius: radius.into(),
            },
            ..Default::default()
        }
    }
}

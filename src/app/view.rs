// SPDX-License-Identifier: MPL-2.0
//! View rendering for the gallery.

use super::Message;
use crate::config::Config;
use crate::preview::Backdrop;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::preview_image;
use iced::widget::{center, scrollable, text, Column, Container, Row, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub config: &'a Config,
    pub images: &'a [preview_image::State],
    pub backdrop: Backdrop,
    pub rejected: &'a [String],
}

/// Renders the gallery with the open preview, if any, stacked on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = if ctx.images.is_empty() && ctx.rejected.is_empty() {
        center(text("No images. Pass paths or URLs on the command line.").size(typography::BODY))
            .into()
    } else {
        view_gallery(&ctx)
    };

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(content);

    for (index, image) in ctx.images.iter().enumerate() {
        if let Some(overlay) = image.view_overlay(ctx.backdrop) {
            layers = layers.push(overlay.map(move |msg| Message::Image(index, msg)));
        }
    }

    layers.into()
}

fn view_gallery<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let thumbnails = ctx.images.iter().enumerate().map(|(index, image)| {
        let style = ctx.config.thumbnail_style(image.class_name());
        image
            .view_thumbnail(style)
            .map(move |msg| Message::Image(index, msg))
    });

    let gallery = Row::with_children(thumbnails)
        .spacing(spacing::MD)
        .wrap()
        .vertical_spacing(spacing::MD);

    let mut column = Column::new().spacing(spacing::LG).push(gallery);

    if !ctx.rejected.is_empty() {
        let notes = ctx.rejected.iter().fold(
            Column::new().spacing(spacing::XS),
            |notes, url| {
                let label = if url.is_empty() { "(empty)" } else { url.as_str() };
                notes.push(
                    text(format!("Skipped: {label}"))
                        .size(typography::CAPTION)
                        .color(palette::GRAY_400),
                )
            },
        );
        column = column.push(notes);
    }

    scrollable(
        Container::new(column)
            .padding(spacing::LG)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Message handling for the gallery.

use super::{App, Message};
use crate::preview::Dimensions;
use crate::ui::preview_image::{self, Effect};
use iced::Task;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Image(index, msg) => handle_image_message(app, index, msg),
        Message::WindowResized(size) => {
            match Dimensions::try_from(size) {
                Ok(viewport) => {
                    app.viewport = viewport;
                    for image in &mut app.images {
                        image.set_viewport(viewport);
                    }
                }
                // Minimized windows report a zero size; keep the last real one.
                Err(err) => tracing::debug!(error = %err, "ignoring window size"),
            }
            Task::none()
        }
        Message::EscapePressed => {
            for image in &mut app.images {
                image.close();
            }
            Task::none()
        }
    }
}

fn handle_image_message(app: &mut App, index: usize, msg: preview_image::Message) -> Task<Message> {
    let Some(image) = app.images.get_mut(index) else {
        return Task::none();
    };

    let (effect, task) = image.handle_message(msg);

    match effect {
        Effect::Opened(size) => {
            tracing::debug!(index, ?size, "preview opened");
            // Only one overlay at a time.
            for (other, image) in app.images.iter_mut().enumerate() {
                if other != index {
                    image.close();
                }
            }
        }
        Effect::Closed => tracing::debug!(index, "preview closed"),
        Effect::None => {}
    }

    task.map(move |msg| Message::Image(index, msg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Flags;
    use crate::config::Config;
    use crate::error::ProbeError;
    use crate::preview::{DimensionProbe, ImageSource, LoadedImage};
    use crate::test_utils::assert_abs_diff_eq;
    use futures_util::future::BoxFuture;
    use futures_util::FutureExt;
    use std::sync::Arc;

    #[derive(Debug)]
    struct OfflineProbe;

    impl DimensionProbe for OfflineProbe {
        fn dimensions(&self, _source: ImageSource) -> BoxFuture<'static, crate::Result<Dimensions>> {
            async { Err(ProbeError::Fetch("offline".into()).into()) }.boxed()
        }

        fn load(&self, _source: ImageSource) -> BoxFuture<'static, crate::Result<LoadedImage>> {
            async { Err(ProbeError::Fetch("offline".into()).into()) }.boxed()
        }
    }

    fn app_with(urls: &[&str]) -> App {
        let flags = Flags {
            urls: urls.iter().map(|u| u.to_string()).collect(),
            preview: true,
            ..Flags::default()
        };
        let (app, _task) = App::new(flags, Config::default(), Arc::new(OfflineProbe));
        app
    }

    /// Opens image `index` as if its probe had returned `natural`.
    fn open_image(app: &mut App, index: usize, natural: (f32, f32)) {
        let ticket = app.images[index].begin_probe().expect("preview enabled");
        let natural = Dimensions::new(natural.0, natural.1).unwrap();
        let _ = update(
            app,
            Message::Image(
                index,
                preview_image::Message::ProbeFinished(
                    ticket,
                    Ok(preview_image::Measured {
                        natural,
                        visual: None,
                    }),
                ),
            ),
        );
    }

    #[test]
    fn mounts_valid_urls_and_rejects_empty_ones() {
        let app = app_with(&["a.png", "", "https://example.com/b.jpg"]);
        assert_eq!(app.images().len(), 2);
        assert_eq!(app.rejected, vec![String::new()]);
    }

    #[test]
    fn resize_updates_viewport_of_every_image() {
        let mut app = app_with(&["a.png", "b.png"]);
        let _ = update(&mut app, Message::WindowResized(iced::Size::new(1000.0, 2000.0)));

        assert_abs_diff_eq!(app.viewport().height(), 2000.0);
        for image in app.images() {
            assert_abs_diff_eq!(image.controller().viewport().width(), 1000.0);
        }
    }

    #[test]
    fn zero_size_resize_is_ignored() {
        let mut app = app_with(&["a.png"]);
        let before = app.viewport();
        let _ = update(&mut app, Message::WindowResized(iced::Size::new(0.0, 0.0)));
        assert_eq!(app.viewport(), before);
    }

    #[test]
    fn opening_one_preview_closes_the_others() {
        let mut app = app_with(&["a.png", "b.png"]);
        open_image(&mut app, 0, (100.0, 50.0));
        assert!(app.images()[0].is_open());

        open_image(&mut app, 1, (50.0, 100.0));
        assert!(!app.images()[0].is_open());
        assert!(app.images()[1].is_open());
    }

    #[test]
    fn escape_closes_open_preview() {
        let mut app = app_with(&["a.png"]);
        open_image(&mut app, 0, (1920.0, 1080.0));
        assert!(app.images()[0].is_open());

        let _ = update(&mut app, Message::EscapePressed);
        assert!(!app.images()[0].is_open());
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut app = app_with(&["a.png"]);
        let _ = update(&mut app, Message::Image(7, preview_image::Message::BackdropPressed));
        assert!(!app.images()[0].is_open());
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Gallery application hosting previewable images.
//!
//! The `App` struct owns one [`preview_image::State`] per image given on the
//! command line, keeps their viewport in sync with the window size, and
//! stacks the open preview (if any) above the gallery.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::error::Result;
use crate::preview::{Backdrop, DimensionProbe, Dimensions, PreviewScale, SystemProbe};
use crate::ui::preview_image::{self, Props};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    config: Config,
    images: Vec<preview_image::State>,
    /// Last known window size, used as the preview viewport.
    viewport: Dimensions,
    backdrop: Backdrop,
    /// URLs that could not be mounted, shown under the gallery.
    rejected: Vec<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("images", &self.images.len())
            .field("viewport", &self.viewport)
            .finish()
    }
}

/// Everything the boot function needs, built before the event loop starts.
struct Boot {
    flags: Flags,
    config: Config,
    probe: Arc<dyn DimensionProbe>,
}

/// Builds the window settings from the configured initial size.
pub fn window_settings(config: &Config) -> window::Settings {
    window::Settings {
        size: config.initial_viewport().into(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or the window cannot
/// be created.
pub fn run(flags: Flags) -> Result<()> {
    use std::cell::RefCell;

    paths::init_cli_override(flags.config_dir.clone());

    let (config, warning) = config::load();
    if let Some(warning) = warning {
        tracing::warn!("{warning}");
    }

    let probe: Arc<dyn DimensionProbe> = Arc::new(SystemProbe::new(config.probe_settings())?);
    let window = window_settings(&config);

    // Wrap boot data in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming it once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(Boot {
        flags,
        config,
        probe,
    }));
    let boot = move || match boot_state.borrow_mut().take() {
        Some(boot) => App::new(boot.flags, boot.config, boot.probe),
        None => (App::empty(Config::default()), Task::none()),
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window)
        .subscription(App::subscription)
        .run()?;
    Ok(())
}

impl App {
    fn empty(config: Config) -> Self {
        Self {
            viewport: config.initial_viewport(),
            backdrop: config.backdrop(),
            config,
            images: Vec::new(),
            rejected: Vec::new(),
        }
    }

    /// Mounts one preview component per URL and starts remote thumbnail loads.
    pub fn new(
        flags: Flags,
        config: Config,
        probe: Arc<dyn DimensionProbe>,
    ) -> (Self, Task<Message>) {
        let scale = flags
            .scale
            .map(PreviewScale::new)
            .unwrap_or_else(|| config.preview_scale());
        let mut app = Self::empty(config);
        let mut tasks = Vec::new();

        for url in flags.urls {
            let mut props = Props::new(url.clone()).preview(flags.preview);
            if let Some(class_name) = &flags.class_name {
                props = props.class_name(class_name.clone());
            }

            match preview_image::State::new(props, scale, app.viewport, Arc::clone(&probe)) {
                Ok((state, task)) => {
                    let index = app.images.len();
                    app.images.push(state);
                    tasks.push(task.map(move |msg| Message::Image(index, msg)));
                }
                Err(err) => {
                    tracing::warn!(%url, error = %err, "skipping image");
                    app.rejected.push(url);
                }
            }
        }

        tracing::debug!(count = app.images.len(), "gallery mounted");
        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        match self.images.len() {
            1 => "iced_preview - 1 image".to_string(),
            n => format!("iced_preview - {n} images"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            config: &self.config,
            images: &self.images,
            backdrop: self.backdrop,
            rejected: &self.rejected,
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    #[must_use]
    pub fn images(&self) -> &[preview_image::State] {
        &self.images
    }

    #[must_use]
    pub fn viewport(&self) -> Dimensions {
        self.viewport
    }
}

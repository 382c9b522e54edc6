// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::preview_image;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// A message for the image at this gallery index.
    Image(usize, preview_image::Message),
    /// The window was resized to this logical size.
    WindowResized(iced::Size),
    /// Escape was pressed and no widget captured it.
    EscapePressed,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Flags {
    /// Image URLs or paths, in display order.
    pub urls: Vec<String>,
    /// Whether clicking an image opens its preview.
    pub preview: bool,
    /// Thumbnail class applied to every image.
    pub class_name: Option<String>,
    /// Preview scale overriding the configured one.
    pub scale: Option<f32>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_PREVIEW_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}

// SPDX-License-Identifier: MPL-2.0
//! Click-to-preview image component.
//!
//! [`State`] renders an inline image; when preview is enabled, clicking it
//! probes the image's natural size and opens a full-window overlay with the
//! image fitted to the viewport. Clicking anywhere on the overlay closes it.
//!
//! The overlay is returned separately by [`State::view_overlay`] so the host
//! can stack it above its whole layout.

use crate::config::ThumbnailStyle;
use crate::error::{Error, ProbeError};
use crate::preview::{
    self, Backdrop, DimensionProbe, Dimensions, ImageSource, LoadedImage, PreviewController,
    PreviewScale, ProbeTicket, Resolution,
};
use crate::ui::design_tokens::typography;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{center, image, mouse_area, opaque, svg, text, Container};
use iced::{mouse, ContentFit, Element, Length, Task};
use std::sync::Arc;

/// Options accepted by the component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Props {
    /// Image location: an `http(s)://` URL, a `file://` URL or a path.
    pub url: String,
    /// Whether clicking the image opens the preview.
    pub preview: bool,
    /// Selects a `[thumbnail.classes.<name>]` entry for the inline image.
    pub class_name: Option<String>,
}

impl Props {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            preview: false,
            class_name: None,
        }
    }

    #[must_use]
    pub fn preview(mut self, enabled: bool) -> Self {
        self.preview = enabled;
        self
    }

    #[must_use]
    pub fn class_name(mut self, name: impl Into<String>) -> Self {
        self.class_name = Some(name.into());
        self
    }
}

/// Decoded handle for whichever widget can draw the source.
#[derive(Debug, Clone)]
pub enum Visual {
    Raster(image::Handle),
    Vector(svg::Handle),
}

impl Visual {
    fn from_path(source: &ImageSource) -> Option<Self> {
        match source {
            ImageSource::Local(path) if source.is_svg() => {
                Some(Visual::Vector(svg::Handle::from_path(path)))
            }
            ImageSource::Local(path) => Some(Visual::Raster(image::Handle::from_path(path))),
            ImageSource::Remote(_) => None,
        }
    }

    fn from_bytes(bytes: Vec<u8>, is_svg: bool) -> Self {
        if is_svg {
            Visual::Vector(svg::Handle::from_memory(bytes))
        } else {
            Visual::Raster(image::Handle::from_bytes(bytes))
        }
    }

    fn view<'a, Message: 'a>(&self, width: f32, height: f32) -> Element<'a, Message> {
        match self {
            Visual::Raster(handle) => image(handle.clone())
                .width(Length::Fixed(width))
                .height(Length::Fixed(height))
                .content_fit(ContentFit::Contain)
                .into(),
            Visual::Vector(handle) => svg(handle.clone())
                .width(Length::Fixed(width))
                .height(Length::Fixed(height))
                .content_fit(ContentFit::Contain)
                .into(),
        }
    }
}

/// Natural size of the image, plus a visual when the bytes were loaded for it.
#[derive(Debug, Clone)]
pub struct Measured {
    pub natural: Dimensions,
    pub visual: Option<Visual>,
}

impl Measured {
    fn from_loaded(loaded: LoadedImage, is_svg: bool) -> Self {
        Self {
            natural: loaded.natural,
            visual: Some(Visual::from_bytes(loaded.bytes, is_svg)),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    /// The inline image was clicked.
    ThumbnailPressed,
    /// The overlay was clicked.
    BackdropPressed,
    /// A dimension probe finished.
    ProbeFinished(ProbeTicket, Result<Measured, Error>),
    /// Remote bytes for the inline image arrived.
    VisualLoaded(Result<Measured, Error>),
}

/// What the host may want to react to after a message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    Opened(Dimensions),
    Closed,
}

/// One mounted previewable image.
#[derive(Debug)]
pub struct State {
    controller: PreviewController,
    class_name: Option<String>,
    visual: Option<Visual>,
    /// Natural size from the last successful measurement.
    natural: Option<Dimensions>,
    probe: Arc<dyn DimensionProbe>,
}

impl State {
    /// Mounts the component. Remote images start loading immediately.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSource`] when `props.url` is empty.
    pub fn new(
        props: Props,
        scale: PreviewScale,
        viewport: Dimensions,
        probe: Arc<dyn DimensionProbe>,
    ) -> Result<(Self, Task<Message>), Error> {
        let source = ImageSource::parse(&props.url)?;
        let visual = Visual::from_path(&source);

        let task = if visual.is_none() {
            load_visual(source.clone(), Arc::clone(&probe))
        } else {
            Task::none()
        };

        let state = Self {
            controller: PreviewController::new(source, props.preview, scale, viewport),
            class_name: props.class_name,
            visual,
            natural: None,
            probe,
        };
        Ok((state, task))
    }

    #[must_use]
    pub fn controller(&self) -> &PreviewController {
        &self.controller
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.controller.is_open()
    }

    #[must_use]
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    pub fn set_viewport(&mut self, viewport: Dimensions) {
        self.controller.set_viewport(viewport);
    }

    /// Closes the preview from outside, e.g. on Escape.
    pub fn close(&mut self) -> Effect {
        let was_open = self.controller.is_open();
        self.controller.close();
        if was_open {
            Effect::Closed
        } else {
            Effect::None
        }
    }

    /// Issues a ticket for a new probe, or `None` when preview is disabled.
    pub(crate) fn begin_probe(&mut self) -> Option<ProbeTicket> {
        self.controller.open()
    }

    /// Whether the next probe must also load the picture it measures.
    fn wants_visual(&self) -> bool {
        self.visual.is_none()
    }

    /// Reuses a known size when the picture is already loaded.
    fn measure(&self, ticket: ProbeTicket) -> Task<Message> {
        match self.natural {
            Some(natural) if !self.wants_visual() => Task::done(Message::ProbeFinished(
                ticket,
                Ok(Measured {
                    natural,
                    visual: None,
                }),
            )),
            _ => run_probe(ticket, Arc::clone(&self.probe), self.wants_visual()),
        }
    }

    /// Handle a component message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::ThumbnailPressed => match self.begin_probe() {
                Some(ticket) => (Effect::None, self.measure(ticket)),
                None => (Effect::None, Task::none()),
            },
            Message::BackdropPressed => (self.close(), Task::none()),
            Message::ProbeFinished(ticket, result) => {
                let (result, visual) = match result {
                    Ok(Measured { natural, visual }) if visual.is_some() || !self.wants_visual() => {
                        (Ok(natural), visual)
                    }
                    Ok(_) => (
                        Err(ProbeError::Decode("no image to display".into()).into()),
                        None,
                    ),
                    Err(err) => (Err(err), None),
                };
                let natural = result.as_ref().ok().copied();

                match self.controller.resolve(&ticket, result) {
                    Resolution::Opened(size) => {
                        if visual.is_some() {
                            self.visual = visual;
                        }
                        self.natural = natural;
                        (Effect::Opened(size), Task::none())
                    }
                    Resolution::Failed | Resolution::Ignored => (Effect::None, Task::none()),
                }
            }
            Message::VisualLoaded(result) => {
                match result {
                    Ok(measured) => {
                        self.natural = Some(measured.natural);
                        if measured.visual.is_some() {
                            self.visual = measured.visual;
                        }
                    }
                    Err(err) => tracing::warn!(
                        source = %self.controller.source(),
                        error = %err,
                        "failed to load image"
                    ),
                }
                (Effect::None, Task::none())
            }
        }
    }

    /// The inline image, sized by `style`.
    pub fn view_thumbnail(&self, style: ThumbnailStyle) -> Element<'_, Message> {
        let scene = preview::scene(&self.controller, self.class_name(), Backdrop::default());

        let content: Element<'_, Message> = match &self.visual {
            Some(visual) => visual.view(style.width, style.height),
            None => text("…").size(typography::CAPTION).into(),
        };

        let framed = Container::new(content)
            .width(Length::Fixed(style.width))
            .height(Length::Fixed(style.height))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::thumbnail_frame(style.radius));

        let area = mouse_area(framed);
        if scene.thumbnail.clickable {
            area.on_press(Message::ThumbnailPressed)
                .interaction(mouse::Interaction::Pointer)
                .into()
        } else {
            area.into()
        }
    }

    /// The full-window overlay, or `None` while closed.
    pub fn view_overlay(&self, backdrop: Backdrop) -> Option<Element<'_, Message>> {
        let overlay = preview::scene(&self.controller, self.class_name(), backdrop).overlay?;
        let size = overlay.size;
        let picture = self.visual.as_ref()?.view(size.width(), size.height());

        let layer = center(picture)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::backdrop(overlay.backdrop));

        Some(opaque(mouse_area(layer).on_press(Message::BackdropPressed)))
    }
}

/// Runs a dimension probe off the update loop.
///
/// With `with_visual` the image bytes are loaded and measured together, so
/// the preview never opens without a picture. The result is reported even
/// when the component went away in the meantime; a dead ticket
/// short-circuits to [`ProbeError::Detached`] so nothing is fetched.
fn run_probe(ticket: ProbeTicket, probe: Arc<dyn DimensionProbe>, with_visual: bool) -> Task<Message> {
    Task::perform(probe_if_live(ticket, probe, with_visual), |(ticket, result)| {
        Message::ProbeFinished(ticket, result)
    })
}

async fn probe_if_live(
    ticket: ProbeTicket,
    probe: Arc<dyn DimensionProbe>,
    with_visual: bool,
) -> (ProbeTicket, Result<Measured, Error>) {
    let source = ticket.source().clone();
    let is_svg = source.is_svg();

    let result = if !ticket.is_live() {
        Err(ProbeError::Detached.into())
    } else if with_visual {
        probe
            .load(source)
            .await
            .map(|loaded| Measured::from_loaded(loaded, is_svg))
    } else {
        probe.dimensions(source).await.map(|natural| Measured {
            natural,
            visual: None,
        })
    };
    (ticket, result)
}

fn load_visual(source: ImageSource, probe: Arc<dyn DimensionProbe>) -> Task<Message> {
    let is_svg = source.is_svg();
    Task::perform(
        async move {
            probe
                .load(source)
                .await
                .map(|loaded| Measured::from_loaded(loaded, is_svg))
        },
        Message::VisualLoaded,
    )
}

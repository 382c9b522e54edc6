// SPDX-License-Identifier: MPL-2.0
//! Open/close state machine for a single preview instance.
//!
//! The controller never performs I/O itself. [`PreviewController::open`] hands
//! out a [`ProbeTicket`]; whoever runs the probe feeds the outcome back through
//! [`PreviewController::resolve`]. Tickets are not ordered: when several are
//! in flight, the last one resolved decides the display size.

use super::{compute_fit_size, Dimensions, ImageSource, PreviewScale, ViewState};
use crate::error::Result;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

/// Identity of one mounted controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId(u64);

impl InstanceId {
    fn next() -> Self {
        Self(NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed))
    }
}

/// A pending dimension probe issued by [`PreviewController::open`].
#[derive(Debug, Clone)]
pub struct ProbeTicket {
    instance: InstanceId,
    sequence: u64,
    source: ImageSource,
    mounted: Weak<()>,
}

impl ProbeTicket {
    #[must_use]
    pub fn source(&self) -> &ImageSource {
        &self.source
    }

    #[must_use]
    pub fn instance(&self) -> InstanceId {
        self.instance
    }

    /// Position of this ticket among those issued by the same controller.
    #[must_use]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// False once the issuing controller has been dropped.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.mounted.strong_count() > 0
    }
}

/// Outcome of feeding a probe result back into the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    /// The preview is now open at this size.
    Opened(Dimensions),
    /// The probe failed; the state was left untouched.
    Failed,
    /// The ticket belongs to another controller.
    Ignored,
}

/// View model behind one previewable image.
#[derive(Debug)]
pub struct PreviewController {
    instance: InstanceId,
    source: ImageSource,
    preview_enabled: bool,
    scale: PreviewScale,
    viewport: Dimensions,
    state: ViewState,
    issued: u64,
    /// Dropped together with the controller; tickets hold a weak handle to it.
    mounted: Arc<()>,
}

impl PreviewController {
    #[must_use]
    pub fn new(
        source: ImageSource,
        preview_enabled: bool,
        scale: PreviewScale,
        viewport: Dimensions,
    ) -> Self {
        Self {
            instance: InstanceId::next(),
            source,
            preview_enabled,
            scale,
            viewport,
            state: ViewState::Closed,
            issued: 0,
            mounted: Arc::new(()),
        }
    }

    #[must_use]
    pub fn instance(&self) -> InstanceId {
        self.instance
    }

    #[must_use]
    pub fn source(&self) -> &ImageSource {
        &self.source
    }

    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    #[must_use]
    pub fn display_size(&self) -> Option<Dimensions> {
        self.state.display_size()
    }

    #[must_use]
    pub fn preview_enabled(&self) -> bool {
        self.preview_enabled
    }

    #[must_use]
    pub fn viewport(&self) -> Dimensions {
        self.viewport
    }

    /// Records the viewport used by subsequent resolutions.
    ///
    /// An already open preview keeps its size until it is reopened.
    pub fn set_viewport(&mut self, viewport: Dimensions) {
        self.viewport = viewport;
    }

    /// Requests the preview. Callable from any state; each call starts a new probe.
    ///
    /// Returns `None` when preview is disabled for this image.
    pub fn open(&mut self) -> Option<ProbeTicket> {
        if !self.preview_enabled {
            return None;
        }

        self.issued += 1;
        tracing::debug!(
            instance = self.instance.0,
            sequence = self.issued,
            source = %self.source,
            "preview requested"
        );

        Some(ProbeTicket {
            instance: self.instance,
            sequence: self.issued,
            source: self.source.clone(),
            mounted: Arc::downgrade(&self.mounted),
        })
    }

    /// Applies the outcome of a probe.
    ///
    /// Success opens the preview sized for the current viewport. Failure is
    /// logged and otherwise ignored.
    pub fn resolve(&mut self, ticket: &ProbeTicket, result: Result<Dimensions>) -> Resolution {
        if ticket.instance != self.instance {
            return Resolution::Ignored;
        }

        match result {
            Ok(natural) => {
                let display_size = compute_fit_size(natural, self.viewport, self.scale.value());
                self.state = ViewState::Open { display_size };
                tracing::debug!(
                    instance = self.instance.0,
                    sequence = ticket.sequence,
                    width = display_size.width(),
                    height = display_size.height(),
                    "preview opened"
                );
                Resolution::Opened(display_size)
            }
            Err(err) => {
                tracing::warn!(
                    instance = self.instance.0,
                    sequence = ticket.sequence,
                    source = %ticket.source,
                    error = %err,
                    "preview probe failed"
                );
                Resolution::Failed
            }
        }
    }

    /// Hides the preview. Idempotent.
    pub fn close(&mut self) {
        if self.state.is_open() {
            tracing::debug!(instance = self.instance.0, "preview closed");
        }
        self.state = ViewState::Closed;
    }
}

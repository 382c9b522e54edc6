// SPDX-License-Identifier: MPL-2.0
//! Click-to-preview core, independent of any widget toolkit.
//!
//! - [`compute_fit_size`]: fits an image's natural size into the viewport
//! - [`PreviewController`]: open/closed state machine driven by probes
//! - [`DimensionProbe`]: asynchronous natural-size lookup
//! - [`scene`]: what to draw for a given state

pub mod controller;
pub mod dimensions;
pub mod fit;
pub mod probe;
pub mod scene;
pub mod source;
pub mod state;

pub use controller::{InstanceId, PreviewController, ProbeTicket, Resolution};
pub use dimensions::{Dimensions, PreviewScale};
pub use fit::compute_fit_size;
pub use probe::{DimensionProbe, LoadedImage, ProbeSettings, SystemProbe};
pub use scene::{scene, Backdrop, Overlay, Scene, Thumbnail};
pub use source::ImageSource;
pub use state::ViewState;

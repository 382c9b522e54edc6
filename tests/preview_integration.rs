// SPDX-License-Identifier: MPL-2.0
use approx::assert_abs_diff_eq;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use iced_preview::config::{self, Config, PreviewConfig};
use iced_preview::error::ProbeError;
use iced_preview::preview::{
    compute_fit_size, scene, Backdrop, DimensionProbe, Dimensions, ImageSource, LoadedImage,
    PreviewController, PreviewScale, ProbeSettings, Resolution, SystemProbe, ViewState,
};
use iced_preview::Error;
use std::sync::Arc;
use tempfile::tempdir;

const EPSILON: f32 = 1e-3;

fn dims(width: f32, height: f32) -> Dimensions {
    Dimensions::new(width, height).expect("positive size")
}

/// Probe answering every request with the same natural size.
#[derive(Debug)]
struct StaticProbe(Dimensions);

impl DimensionProbe for StaticProbe {
    fn dimensions(&self, _source: ImageSource) -> BoxFuture<'static, iced_preview::Result<Dimensions>> {
        let size = self.0;
        async move { Ok(size) }.boxed()
    }

    fn load(&self, _source: ImageSource) -> BoxFuture<'static, iced_preview::Result<LoadedImage>> {
        async { Err(ProbeError::Fetch("no bytes".into()).into()) }.boxed()
    }
}

#[test]
fn landscape_image_in_landscape_viewport_takes_full_width() {
    let size = compute_fit_size(dims(1920.0, 1080.0), dims(1000.0, 800.0), 0.7);
    assert_abs_diff_eq!(size.width(), 1000.0, epsilon = EPSILON);
    assert_abs_diff_eq!(size.height(), 562.5, epsilon = EPSILON);
}

#[test]
fn portrait_image_in_landscape_viewport_is_height_bound() {
    let size = compute_fit_size(dims(1080.0, 1920.0), dims(1000.0, 800.0), 0.7);
    assert_abs_diff_eq!(size.height(), 560.0, epsilon = EPSILON);
    assert_abs_diff_eq!(size.width(), 315.0, epsilon = EPSILON);
}

#[tokio::test]
async fn click_probe_open_close_cycle() {
    let probe: Arc<dyn DimensionProbe> = Arc::new(StaticProbe(dims(1080.0, 1920.0)));
    let mut controller = PreviewController::new(
        ImageSource::parse("https://example.com/tall.jpg").expect("valid url"),
        true,
        PreviewScale::default(),
        dims(1000.0, 800.0),
    );

    let ticket = controller.open().expect("preview enabled");
    assert_eq!(controller.state(), ViewState::Closed);

    let result = probe.dimensions(ticket.source().clone()).await;
    let resolution = controller.resolve(&ticket, result);
    let Resolution::Opened(size) = resolution else {
        panic!("expected the preview to open, got {resolution:?}");
    };
    assert_abs_diff_eq!(size.width(), 315.0, epsilon = EPSILON);

    let rendered = scene(&controller, Some("avatar"), Backdrop::default());
    assert!(rendered.overlay.is_some());
    assert_eq!(rendered.thumbnail.class_name, Some("avatar"));

    controller.close();
    assert!(scene(&controller, None, Backdrop::default()).overlay.is_none());
}

#[test]
fn failed_probe_never_opens() {
    let mut controller = PreviewController::new(
        ImageSource::parse("missing.png").expect("valid path"),
        true,
        PreviewScale::default(),
        Dimensions::DEFAULT_VIEWPORT,
    );
    let ticket = controller.open().expect("preview enabled");
    let resolution = controller.resolve(&ticket, Err(Error::Probe(ProbeError::TimedOut)));

    assert_eq!(resolution, Resolution::Failed);
    assert!(!controller.is_open());
}

#[test]
fn config_round_trip_through_disk() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        preview: PreviewConfig {
            scale: Some(0.5),
            backdrop_opacity: Some(0.6),
        },
        ..Config::default()
    };
    config::save_to_path(&config, &path).expect("Failed to write config");
    let loaded = config::load_from_path(&path).expect("Failed to read config");

    assert_eq!(loaded, config);
    assert_abs_diff_eq!(loaded.preview_scale().value(), 0.5);
    assert_abs_diff_eq!(loaded.backdrop().opacity, 0.6);
}

#[test]
fn invalid_config_falls_back_to_defaults_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[preview\nscale = ")
        .expect("Failed to write config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert!(warning.is_some());
}

#[tokio::test]
async fn system_probe_measures_local_png() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("wide.png");
    image_rs::RgbaImage::new(64, 16)
        .save(&path)
        .expect("Failed to write png");

    let probe = SystemProbe::new(ProbeSettings::default()).expect("client builds");
    let source = ImageSource::Local(path);
    let size = probe.dimensions(source).await.expect("probe succeeds");

    assert_abs_diff_eq!(size.width(), 64.0);
    assert_abs_diff_eq!(size.height(), 16.0);
}

// SPDX-License-Identifier: MPL-2.0
//! Natural-dimension probing.
//!
//! [`DimensionProbe`] is the seam between the preview state machine and the
//! outside world. [`SystemProbe`] fetches remote images with `reqwest`, reads
//! local ones from disk, and measures them without a full decode: raster
//! formats through the `image` header reader, SVG through `usvg`.

use super::{Dimensions, ImageSource};
use crate::config::defaults::{DEFAULT_PROBE_MAX_BYTES, DEFAULT_PROBE_TIMEOUT_SECS};
use crate::error::{Error, ProbeError, Result};
use futures_util::future::BoxFuture;
use resvg::usvg;
use std::fmt;
use std::io::Cursor;
use std::path::PathBuf;
use std::time::Duration;

/// Maximum number of redirects followed for remote images.
const MAX_REDIRECTS: usize = 10;

const USER_AGENT: &str = concat!("iced_preview/", env!("CARGO_PKG_VERSION"));

/// Asynchronous access to an image's natural size and bytes.
pub trait DimensionProbe: fmt::Debug + Send + Sync {
    /// Resolves the intrinsic pixel size of the image.
    fn dimensions(&self, source: ImageSource) -> BoxFuture<'static, Result<Dimensions>>;

    /// Loads the encoded image for display, measured from the same bytes.
    fn load(&self, source: ImageSource) -> BoxFuture<'static, Result<LoadedImage>>;
}

/// Encoded image bytes together with the natural size read from them.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedImage {
    pub bytes: Vec<u8>,
    pub natural: Dimensions,
}

/// Limits applied to every probe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeSettings {
    pub timeout: Duration,
    pub max_bytes: u64,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_PROBE_TIMEOUT_SECS),
            max_bytes: DEFAULT_PROBE_MAX_BYTES,
        }
    }
}

/// Production probe backed by the network and the filesystem.
#[derive(Debug, Clone)]
pub struct SystemProbe {
    client: reqwest::Client,
    settings: ProbeSettings,
}

impl SystemProbe {
    /// Builds the HTTP client used for remote sources.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Fetch`] if the TLS backend cannot be initialized.
    pub fn new(settings: ProbeSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(USER_AGENT)
            .timeout(settings.timeout)
            .build()
            .map_err(|e| ProbeError::Fetch(e.to_string()))?;
        Ok(Self { client, settings })
    }
}

impl DimensionProbe for SystemProbe {
    fn dimensions(&self, source: ImageSource) -> BoxFuture<'static, Result<Dimensions>> {
        let client = self.client.clone();
        let settings = self.settings;
        Box::pin(async move {
            tracing::debug!(%source, "probing natural dimensions");
            let probe = probe_dimensions(client, source, settings.max_bytes);
            match tokio::time::timeout(settings.timeout, probe).await {
                Ok(result) => result,
                Err(_) => Err(ProbeError::TimedOut.into()),
            }
        })
    }

    fn load(&self, source: ImageSource) -> BoxFuture<'static, Result<LoadedImage>> {
        let client = self.client.clone();
        let settings = self.settings;
        Box::pin(async move {
            tracing::debug!(%source, "loading image");
            let load = load_image(client, source, settings.max_bytes);
            match tokio::time::timeout(settings.timeout, load).await {
                Ok(result) => result,
                Err(_) => Err(ProbeError::TimedOut.into()),
            }
        })
    }
}

async fn probe_dimensions(
    client: reqwest::Client,
    source: ImageSource,
    max_bytes: u64,
) -> Result<Dimensions> {
    let is_svg = source.is_svg();
    match source {
        ImageSource::Local(path) if !is_svg => measure_file(path).await,
        source => Ok(load_image(client, source, max_bytes).await?.natural),
    }
}

async fn load_image(
    client: reqwest::Client,
    source: ImageSource,
    max_bytes: u64,
) -> Result<LoadedImage> {
    let is_svg = source.is_svg();
    let bytes = load_bytes(client, source, max_bytes).await?;
    run_blocking(move || {
        let natural = measure_bytes(&bytes, is_svg)?;
        Ok(LoadedImage { bytes, natural })
    })
    .await
}

async fn load_bytes(client: reqwest::Client, source: ImageSource, max_bytes: u64) -> Result<Vec<u8>> {
    match source {
        ImageSource::Remote(url) => fetch_bytes(&client, &url, max_bytes).await,
        ImageSource::Local(path) => read_local(path, max_bytes).await,
    }
}

/// Downloads a remote image, refusing bodies larger than `max_bytes`.
pub async fn fetch_bytes(client: &reqwest::Client, url: &str, max_bytes: u64) -> Result<Vec<u8>> {
    use futures_util::StreamExt;

    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(ProbeError::HttpStatus(response.status().as_u16()).into());
    }

    if response.content_length().is_some_and(|len| len > max_bytes) {
        return Err(ProbeError::TooLarge { limit: max_bytes }.into());
    }

    let mut body = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if body.len() as u64 + chunk.len() as u64 > max_bytes {
            return Err(ProbeError::TooLarge { limit: max_bytes }.into());
        }
        body.extend_from_slice(&chunk);
    }

    Ok(body)
}

async fn read_local(path: PathBuf, max_bytes: u64) -> Result<Vec<u8>> {
    let metadata = tokio::fs::metadata(&path).await?;
    if metadata.len() > max_bytes {
        return Err(ProbeError::TooLarge { limit: max_bytes }.into());
    }
    Ok(tokio::fs::read(&path).await?)
}

async fn measure_file(path: PathBuf) -> Result<Dimensions> {
    run_blocking(move || {
        let (width, height) = image_rs::image_dimensions(&path)?;
        Ok(Dimensions::from_pixels(width, height)?)
    })
    .await
}

async fn run_blocking<T, F>(work: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| Error::Probe(ProbeError::Decode(e.to_string())))?
}

/// Reads the natural size from encoded image bytes.
///
/// Raster formats only have their header parsed.
///
/// # Errors
///
/// Returns [`Error::Svg`] for unparsable SVG, [`ProbeError::Decode`] for
/// unrecognized raster data, and [`ProbeError::InvalidDimensions`] for empty images.
pub fn measure_bytes(bytes: &[u8], is_svg: bool) -> Result<Dimensions> {
    if is_svg {
        let tree = usvg::Tree::from_data(bytes, &usvg::Options::default())
            .map_err(|e| Error::Svg(e.to_string()))?;
        let size = tree.size();
        return Dimensions::new(size.width(), size.height()).ok_or_else(|| {
            ProbeError::InvalidDimensions {
                width: size.width(),
                height: size.height(),
            }
            .into()
        });
    }

    let (width, height) = image_rs::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .into_dimensions()?;
    Ok(Dimensions::from_pixels(width, height)?)
}

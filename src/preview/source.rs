// SPDX-License-Identifier: MPL-2.0
//! Image source resolution for the `url` prop.

use crate::error::{Error, Result};
use std::fmt;
use std::path::{Path, PathBuf};

/// Where an image comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageSource {
    /// An `http://` or `https://` URL.
    Remote(String),
    /// A file on disk, given as a plain path or a `file://` URL.
    Local(PathBuf),
}

impl ImageSource {
    /// Resolves a `url` prop into a source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSource`] when the string is empty or the
    /// `file://` URL has no path.
    pub fn parse(url: &str) -> Result<Self> {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidSource("image url is empty".into()));
        }

        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Ok(ImageSource::Remote(trimmed.to_string()));
        }

        if lower.starts_with("file://") {
            let path = &trimmed["file://".len()..];
            if path.is_empty() {
                return Err(Error::InvalidSource(format!("no path in {trimmed}")));
            }
            return Ok(ImageSource::Local(PathBuf::from(path)));
        }

        Ok(ImageSource::Local(PathBuf::from(trimmed)))
    }

    /// Whether the source names an SVG document, judged by its extension.
    #[must_use]
    pub fn is_svg(&self) -> bool {
        let extension = match self {
            ImageSource::Local(path) => path
                .extension()
                .and_then(|s| s.to_str())
                .map(str::to_owned),
            ImageSource::Remote(url) => {
                // Ignore query string and fragment.
                let path = url.split(['?', '#']).next().unwrap_or(url);
                Path::new(path)
                    .extension()
                    .and_then(|s| s.to_str())
                    .map(str::to_owned)
            }
        };
        extension.is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
    }

    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, ImageSource::Remote(_))
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::Remote(url) => write!(f, "{}", url),
            ImageSource::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_and_https_are_remote() {
        assert!(ImageSource::parse("https://example.com/a.png")
            .unwrap()
            .is_remote());
        assert!(ImageSource::parse("HTTP://example.com/a.png")
            .unwrap()
            .is_remote());
    }

    #[test]
    fn file_url_becomes_local_path() {
        let source = ImageSource::parse("file:///tmp/cat.jpg").unwrap();
        assert_eq!(source, ImageSource::Local(PathBuf::from("/tmp/cat.jpg")));
    }

    #[test]
    fn bare_path_is_local() {
        let source = ImageSource::parse("  photos/cat.jpg ").unwrap();
        assert_eq!(source, ImageSource::Local(PathBuf::from("photos/cat.jpg")));
    }

    #[test]
    fn empty_url_is_rejected() {
        assert!(matches!(
            ImageSource::parse("   "),
            Err(Error::InvalidSource(_))
        ));
        assert!(matches!(
            ImageSource::parse("file://"),
            Err(Error::InvalidSource(_))
        ));
    }

    #[test]
    fn svg_detection_ignores_query_and_case() {
        assert!(ImageSource::parse("https://x.org/logo.SVG?v=2")
            .unwrap()
            .is_svg());
        assert!(ImageSource::parse("icons/logo.svg").unwrap().is_svg());
        assert!(!ImageSource::parse("https://x.org/svg/photo.png#top")
            .unwrap()
            .is_svg());
    }

    #[test]
    fn display_round_trips_the_input() {
        let url = "https://example.com/a.png";
        assert_eq!(ImageSource::parse(url).unwrap().to_string(), url);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Open/closed view state of a preview.

use super::Dimensions;

/// Whether the overlay is visible, and at which size.
///
/// The size only exists while open, so an open preview always has a positive
/// display size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Closed,
    Open {
        display_size: Dimensions,
    },
}

impl ViewState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, ViewState::Open { .. })
    }

    /// Size of the overlay image, `None` while closed.
    #[must_use]
    pub fn display_size(&self) -> Option<Dimensions> {
        match self {
            ViewState::Open { display_size } => Some(*display_size),
            ViewState::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_closed_without_size() {
        let state = ViewState::default();
        assert!(!state.is_open());
        assert!(state.display_size().is_none());
    }

    #[test]
    fn open_exposes_display_size() {
        let size = Dimensions::new(315.0, 560.0).unwrap();
        let state = ViewState::Open { display_size: size };
        assert!(state.is_open());
        assert_eq!(state.display_size(), Some(size));
    }
}

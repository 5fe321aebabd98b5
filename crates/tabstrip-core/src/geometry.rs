//! Geometry helpers shared by the tab control and its configuration.
//!
//! Positions and sizes reuse ratatui's [`Rect`], [`Position`] and [`Size`];
//! this module only adds the content inset type the control needs.

use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};

/// Inset applied around a tab page's content area.
///
/// # Example
///
/// ```
/// use tabstrip_core::Padding;
///
/// let padding = Padding::new(1, 2, 3, 4);
/// assert_eq!(padding.horizontal(), 4);
/// assert_eq!(padding.vertical(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub left: u16,
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
}

impl Padding {
    #[must_use]
    pub const fn new(left: u16, top: u16, right: u16, bottom: u16) -> Self {
        Padding {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same inset on all four sides.
    #[must_use]
    pub const fn uniform(all: u16) -> Self {
        Padding::new(all, all, all, all)
    }

    /// Sum of the left and right insets.
    #[must_use]
    pub const fn horizontal(&self) -> u16 {
        self.left.saturating_add(self.right)
    }

    /// Sum of the top and bottom insets.
    #[must_use]
    pub const fn vertical(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }
}

/// Translates a control-local rectangle into the coordinate space of `area`.
#[must_use]
pub fn offset_rect(local: Rect, area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(local.x),
        area.y.saturating_add(local.y),
        local.width,
        local.height,
    )
}

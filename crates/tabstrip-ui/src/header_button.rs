//! Header buttons
//!
//! A [`HeaderButton`] is the clickable proxy of one tab page in the header
//! strip. It knows its own geometry and whether it is drawn in the active
//! or the inactive ("hidden") style; all layout decisions are made by the
//! owning [`crate::TabControl`].

use ratatui::layout::{Position, Rect};
use ratatui::style::Color;
use tabstrip_core::{CellWidth, Surface, TabColors, TextMeasure};

/// Button for one page in the header strip.
///
/// The hidden style is independent from visibility: an unselected page's
/// button is drawn in the hidden style (inset from the top of the strip,
/// inactive fill) but is still visible as long as it fits in the strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderButton {
    text: String,
    x: u16,
    y: u16,
    width: u16,
    height: u16,
    visible: bool,
    hidden_style: bool,
}

impl HeaderButton {
    pub(crate) fn new(text: impl Into<String>, x: u16, width: u16, item_height: u16) -> Self {
        HeaderButton {
            text: text.into(),
            x,
            y: 0,
            width,
            height: item_height,
            visible: true,
            hidden_style: false,
        }
    }

    /// Label copied from the page when the button was created.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn x(&self) -> u16 {
        self.x
    }

    pub fn y(&self) -> u16 {
        self.y
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Button rectangle in control coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Whether the layout placed the button inside the visible strip.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the button is drawn in the inactive style.
    pub fn is_hidden_style(&self) -> bool {
        self.hidden_style
    }

    pub(crate) fn set_x(&mut self, x: u16) {
        self.x = x;
    }

    pub(crate) fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Switches to the inactive style.
    pub(crate) fn hide(&mut self, item_height: u16, inset: u16) {
        self.hidden_style = true;
        self.restyle(item_height, inset);
    }

    /// Switches to the active style.
    pub(crate) fn show(&mut self, item_height: u16, inset: u16) {
        self.hidden_style = false;
        self.restyle(item_height, inset);
    }

    /// Re-applies the current style for a (possibly new) strip height.
    pub(crate) fn restyle(&mut self, item_height: u16, inset: u16) {
        if self.hidden_style {
            self.y = inset.min(item_height);
            self.height = item_height - self.y;
        } else {
            self.y = 0;
            self.height = item_height;
        }
    }

    /// Fill color for the current style.
    pub fn fill_color(&self, colors: &TabColors, hovered: bool) -> Color {
        match (self.hidden_style, hovered) {
            (false, false) => colors.active_tab,
            (false, true) => colors.active_tab_hover,
            (true, false) => colors.inactive_tab,
            (true, true) => colors.inactive_tab_hover,
        }
    }

    /// Paints the button, clipped to the header panel.
    ///
    /// Draws the fill, the top/left/right edges (the bottom edge is the
    /// control's separator line) and the centered label.
    pub fn paint(&self, surface: &mut dyn Surface, colors: &TabColors, hovered: bool, clip: Rect) {
        let bounds = self.bounds();
        let area = bounds.intersection(clip);
        if area.is_empty() {
            return;
        }

        surface.fill_rect(area, self.fill_color(colors, hovered));

        let pen = colors.border;
        let last_col = area.right() - 1;
        let last_row = area.bottom() - 1;
        surface.draw_line(pen, Position::new(area.x, area.y), Position::new(last_col, area.y));
        if area.x == bounds.x {
            surface.draw_line(pen, Position::new(area.x, area.y), Position::new(area.x, last_row));
        }
        if area.right() == bounds.right() {
            surface.draw_line(
                pen,
                Position::new(last_col, area.y),
                Position::new(last_col, last_row),
            );
        }

        let label_width = CellWidth.measure(&self.text);
        let label_x = bounds
            .x
            .saturating_add(self.width.saturating_sub(label_width) / 2);
        let label_y = bounds.y.saturating_add(self.height / 2);
        if label_x < area.right() && label_y < area.bottom() {
            surface.draw_text(
                Position::new(label_x, label_y),
                &self.text,
                colors.text,
                area.right() - label_x,
            );
        }
    }
}

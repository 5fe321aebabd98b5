//! Border of the tab control
//!
//! The border frames the content area and connects to the header strip.
//! Below the selected button the separator line is left open so that the
//! active tab visually joins its page.

use ratatui::layout::{Position, Rect};
use ratatui::style::Color;
use tabstrip_core::Surface;

use crate::tab_control::TabControl;

/// Draws the border of a [`TabControl`].
pub struct BorderRenderer<'a> {
    control: &'a TabControl,
}

impl<'a> BorderRenderer<'a> {
    pub fn new(control: &'a TabControl) -> Self {
        BorderRenderer { control }
    }

    /// Paints the border with the given pen color.
    ///
    /// An empty control gets a plain rectangle. Otherwise the bottom, left
    /// and right edges are drawn below the header strip, plus the separator
    /// at the strip's lower edge with a gap under the selected button when
    /// that button is on screen.
    pub fn paint(&self, surface: &mut dyn Surface, pen: Color) {
        let size = self.control.size();
        let (width, height) = (size.width, size.height);
        if self.control.tab_count() == 0 {
            surface.draw_rect(pen, Rect::new(0, 0, width, height));
            return;
        }

        let strip = self.control.item_size().height;
        let last_col = width.saturating_sub(1);
        let last_row = height.saturating_sub(1);

        surface.draw_line(pen, Position::new(0, last_row), Position::new(width, last_row));
        surface.draw_line(pen, Position::new(0, strip), Position::new(0, height));
        surface.draw_line(pen, Position::new(last_col, strip), Position::new(last_col, height));

        match self.control.active_button() {
            Some(button) if button.is_visible() => {
                let gap_start = button.x().saturating_add(1);
                let gap_end = button.x().saturating_add(button.width()).saturating_sub(1);
                surface.draw_line(pen, Position::new(0, strip), Position::new(gap_start, strip));
                surface.draw_line(pen, Position::new(gap_end, strip), Position::new(width, strip));
            }
            _ => surface.draw_line(pen, Position::new(0, strip), Position::new(width, strip)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabstrip_core::{DrawOp, RecordingSurface};

    fn lines(control: &TabControl) -> Vec<(Position, Position)> {
        let mut surface = RecordingSurface::new();
        BorderRenderer::new(control).paint(&mut surface, Color::Gray);
        surface.lines().collect()
    }

    fn p(x: u16, y: u16) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn test_empty_control_draws_rectangle() {
        let control = TabControl::new();
        let mut surface = RecordingSurface::new();
        BorderRenderer::new(&control).paint(&mut surface, Color::Gray);
        assert_eq!(
            surface.ops(),
            &[DrawOp::Rect {
                color: Color::Gray,
                rect: Rect::new(0, 0, 200, 100),
            }]
        );
    }

    #[test]
    fn test_separator_gap_under_selected_button() {
        let mut control = TabControl::new();
        control.tab_pages_mut().add_text("One");
        control.tab_pages_mut().add_text("Two");

        assert_eq!(
            lines(&control),
            vec![
                (p(0, 99), p(200, 99)),
                (p(0, 30), p(0, 100)),
                (p(199, 30), p(199, 100)),
                (p(0, 30), p(1, 30)),
                (p(41, 30), p(200, 30)),
            ]
        );

        control.select_tab(Some(1)).unwrap();
        let separator = &lines(&control)[3..];
        assert_eq!(separator, &[(p(0, 30), p(42, 30)), (p(82, 30), p(200, 30))]);
    }

    #[test]
    fn test_full_separator_without_selection() {
        let mut control = TabControl::new();
        control.tab_pages_mut().add_text("One");
        control.select_tab(None).unwrap();
        assert_eq!(lines(&control).last(), Some(&(p(0, 30), p(200, 30))));
    }

    #[test]
    fn test_full_separator_when_selected_button_scrolled_away() {
        let mut control = TabControl::new();
        for i in 0..6 {
            control.tab_pages_mut().add_text(format!("{i}"));
        }
        control.scroll_right();
        assert!(!control.header_button(0).unwrap().is_visible());
        assert_eq!(control.selected_index(), Some(0));

        let lines = lines(&control);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3], (p(0, 30), p(200, 30)));
    }

    #[test]
    fn test_gap_end_saturates_for_widest_button() {
        let mut control = TabControl::new();
        control.tab_pages_mut().add_text("One");
        control.tab_pages_mut().add_text("Two");
        control.select_tab(Some(1)).unwrap();
        control.set_page_button_width(1, u16::MAX).unwrap();
        assert!(control.header_button(1).unwrap().is_visible());

        let separator = &lines(&control)[3..];
        assert_eq!(
            separator,
            &[(p(0, 30), p(42, 30)), (p(u16::MAX - 1, 30), p(200, 30))]
        );
    }
}

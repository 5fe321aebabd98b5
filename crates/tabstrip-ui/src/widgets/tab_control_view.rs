//! Ratatui widget for the tab control

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use tabstrip_core::TabTheme;

use crate::surface::BufferSurface;
use crate::tab_control::TabControl;

/// Renders a [`TabControl`]'s chrome: background, header strip, scroll
/// buttons and border.
///
/// Page content is up to the host, which draws it into
/// [`TabControl::page_area`].
pub struct TabControlView<'a> {
    control: &'a TabControl,
    theme: &'a TabTheme,
}

impl<'a> TabControlView<'a> {
    pub fn new(control: &'a TabControl, theme: &'a TabTheme) -> Self {
        Self { control, theme }
    }
}

impl Widget for TabControlView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let mut surface = BufferSurface::new(buf, area);
        self.control.paint(&mut surface, self.theme);
    }
}

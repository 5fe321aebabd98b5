//! Header strip layout and scrolling

use ratatui::layout::{Rect, Size};
use tabstrip_core::{CoreError, CoreResult, TextMeasure};

use super::{LayoutMetrics, TabControl};

/// Whether the header buttons fit in the control, and if not, how the
/// strip is scrolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowMode {
    /// All buttons fit; no scroll buttons are shown.
    #[default]
    NoOverflow,
    /// Buttons overflow and the strip starts at the first button.
    OverflowAtStart,
    /// Buttons overflow and the strip is scrolled past the first button.
    OverflowScrolled,
}

impl OverflowMode {
    /// Derives the mode from the total button width, the control width and
    /// the current view index.
    ///
    /// # Example
    ///
    /// ```
    /// use tabstrip_ui::OverflowMode;
    ///
    /// assert_eq!(OverflowMode::resolve(200, 200, 0), OverflowMode::NoOverflow);
    /// assert_eq!(OverflowMode::resolve(201, 200, 0), OverflowMode::OverflowAtStart);
    /// assert_eq!(OverflowMode::resolve(201, 200, 2), OverflowMode::OverflowScrolled);
    /// ```
    pub fn resolve(header_width: u32, control_width: u16, view_index: usize) -> Self {
        if header_width <= u32::from(control_width) {
            OverflowMode::NoOverflow
        } else if view_index == 0 {
            OverflowMode::OverflowAtStart
        } else {
            OverflowMode::OverflowScrolled
        }
    }

    /// Whether scroll buttons are shown in this mode.
    pub fn is_overflowing(self) -> bool {
        self != OverflowMode::NoOverflow
    }
}

/// The two scroll buttons, in control coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavButtons {
    pub left: Rect,
    pub right: Rect,
}

impl NavButtons {
    /// Places the scroll buttons at the right end of the header strip.
    ///
    /// The right button is flush with the right edge, the left button sits
    /// directly before it, and both are lifted `nav_gap` above the bottom
    /// of the strip.
    fn place(control_width: u16, item_height: u16, metrics: &LayoutMetrics) -> Self {
        let size = metrics.nav_button_size;
        let y = item_height.saturating_sub(size.saturating_add(metrics.nav_gap));
        let right = Rect::new(control_width.saturating_sub(size), y, size, size);
        let left = Rect::new(right.x.saturating_sub(size), y, size, size);
        NavButtons { left, right }
    }
}

impl TabControl {
    // === Queries ===

    /// Sum of all header button widths.
    pub fn header_width(&self) -> u32 {
        self.entries
            .iter()
            .map(|entry| u32::from(entry.button.width()))
            .sum()
    }

    pub fn overflow_mode(&self) -> OverflowMode {
        self.mode
    }

    /// Scroll buttons, present exactly while the strip overflows.
    pub fn navigation_buttons(&self) -> Option<NavButtons> {
        self.nav
    }

    /// Index of the first button shown in the strip.
    pub fn view_index(&self) -> usize {
        self.view_index
    }

    /// The header panel hosting the buttons.
    pub fn header_panel(&self) -> Rect {
        self.panel
    }

    /// Content area every page is sized to.
    pub fn display_rectangle(&self) -> Rect {
        let Size { width, height } = self.size;
        Rect::new(
            self.padding.left,
            self.item_size.height.saturating_add(self.padding.top),
            width.saturating_sub(self.padding.horizontal()),
            height
                .saturating_sub(self.item_size.height)
                .saturating_sub(self.padding.vertical()),
        )
    }

    /// Whether the last button ends inside the header panel.
    pub fn all_buttons_rendered(&self) -> bool {
        self.entries.last().map_or(true, |entry| {
            u32::from(entry.button.x()) + u32::from(entry.button.width())
                < u32::from(self.panel.width)
        })
    }

    /// Largest view index scrolling may reach.
    ///
    /// Without scroll buttons this is the page count. With scroll buttons
    /// it is the last page index, or 0 when the strip has no room left of
    /// the scroll buttons at all.
    pub(crate) fn max_view_index(&self) -> usize {
        match self.nav {
            None => self.entries.len(),
            Some(nav) if nav.left.x == 0 => 0,
            Some(_) => self.entries.len().saturating_sub(1),
        }
    }

    // === Scrolling ===

    /// Scrolls the strip one button to the right.
    ///
    /// Does nothing without overflow, or once the last button is fully
    /// shown.
    pub fn scroll_right(&mut self) {
        if self.nav.is_none() || self.all_buttons_rendered() {
            return;
        }
        self.view_index = (self.view_index + 1).min(self.max_view_index());
        tracing::trace!("header strip scrolled right to {}", self.view_index);
        self.update_layout();
    }

    /// Scrolls the strip one button to the left.
    pub fn scroll_left(&mut self) {
        if self.nav.is_none() {
            return;
        }
        self.view_index = self.view_index.saturating_sub(1);
        tracing::trace!("header strip scrolled left to {}", self.view_index);
        self.update_layout();
    }

    // === Button sizing ===

    /// Sets the width of one header button and re-flows the strip.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::IndexOutOfRange`] if there is no page at
    /// `index`.
    pub fn set_page_button_width(&mut self, index: usize, width: u16) -> CoreResult<()> {
        let count = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or_else(|| CoreError::out_of_range(index, count))?;
        entry.button.set_width(width);
        self.update_layout();
        Ok(())
    }

    /// Sizes one header button to its label plus the configured label
    /// padding, returning the new width.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::IndexOutOfRange`] if there is no page at
    /// `index`.
    pub fn fit_page_button_to_text(
        &mut self,
        index: usize,
        measure: &dyn TextMeasure,
    ) -> CoreResult<u16> {
        let count = self.entries.len();
        let text_width = self
            .entries
            .get(index)
            .map(|entry| measure.measure(entry.button.text()))
            .ok_or_else(|| CoreError::out_of_range(index, count))?;
        let width = text_width.saturating_add(self.metrics.label_padding);
        self.set_page_button_width(index, width)?;
        Ok(width)
    }

    // === Layout passes ===

    /// Re-evaluates overflow, places or removes the scroll buttons and
    /// re-flows the buttons.
    pub(crate) fn update_layout(&mut self) {
        let header_width = self.header_width();
        if header_width > u32::from(self.size.width) {
            let nav = NavButtons::place(self.size.width, self.item_size.height, &self.metrics);
            self.panel.width = nav.left.x.saturating_sub(self.metrics.nav_gap);
            self.nav = Some(nav);
            self.view_index = self.view_index.min(self.max_view_index());
        } else {
            self.nav = None;
            self.panel.width = self.size.width;
            self.view_index = 0;
        }
        self.panel.height = self.item_size.height;

        let mode = OverflowMode::resolve(header_width, self.size.width, self.view_index);
        if mode.is_overflowing() != self.mode.is_overflowing() {
            tracing::debug!(
                "header overflow changed: {:?} -> {:?} (header {} / control {})",
                self.mode,
                mode,
                header_width,
                self.size.width
            );
        }
        self.mode = mode;
        self.update_buttons();
    }

    /// Positions the buttons from the left edge of the panel.
    ///
    /// Consecutive buttons overlap by one column so that neighbours share a
    /// border. With scroll buttons, buttons before the view index are
    /// hidden and the rest are visible while they start left of the scroll
    /// buttons; otherwise every button starting inside the panel is
    /// visible.
    fn update_buttons(&mut self) {
        let (first, limit) = match self.nav {
            Some(nav) => (self.view_index, nav.left.x),
            None => (0, self.panel.width),
        };

        let mut x: u32 = 0;
        for (index, entry) in self.entries.iter_mut().enumerate() {
            let button = &mut entry.button;
            if index < first {
                button.set_visible(false);
                continue;
            }
            let left = u16::try_from(x).unwrap_or(u16::MAX);
            button.set_x(left);
            button.set_visible(left < limit);
            x += u32::from(button.width().saturating_sub(1));
        }
    }

    /// Sizes every page to the display rectangle and refreshes button
    /// heights for the current item height.
    pub(crate) fn update_sizes(&mut self) {
        let display = self.display_rectangle();
        let item_height = self.item_size.height;
        let inset = self.metrics.inactive_inset;
        for entry in &mut self.entries {
            entry.page.set_bounds(display);
            entry.button.restyle(item_height, inset);
        }
        self.panel.height = item_height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabstrip_core::{CellWidth, TabControlConfig};

    fn strip(width: u16, item_width: u16, pages: usize) -> TabControl {
        let config = TabControlConfig {
            width,
            item_width,
            ..TabControlConfig::default()
        };
        let mut control = TabControl::with_config(&config);
        for i in 0..pages {
            control.tab_pages_mut().add_text(format!("Page {i}"));
        }
        control
    }

    fn xs(control: &TabControl) -> Vec<u16> {
        control.header_buttons().map(|b| b.x()).collect()
    }

    fn visible(control: &TabControl) -> Vec<bool> {
        control.header_buttons().map(|b| b.is_visible()).collect()
    }

    // ==================== Overflow Mode Tests ====================

    #[test]
    fn test_resolve_boundaries() {
        assert_eq!(OverflowMode::resolve(0, 0, 0), OverflowMode::NoOverflow);
        assert_eq!(OverflowMode::resolve(100, 100, 3), OverflowMode::NoOverflow);
        assert_eq!(OverflowMode::resolve(101, 100, 0), OverflowMode::OverflowAtStart);
        assert_eq!(OverflowMode::resolve(101, 100, 1), OverflowMode::OverflowScrolled);
        assert!(!OverflowMode::NoOverflow.is_overflowing());
        assert!(OverflowMode::OverflowAtStart.is_overflowing());
    }

    #[test]
    fn test_nav_placement() {
        let metrics = LayoutMetrics {
            nav_button_size: 16,
            nav_gap: 2,
            inactive_inset: 2,
            label_padding: 12,
        };
        let nav = NavButtons::place(100, 30, &metrics);
        assert_eq!(nav.right, Rect::new(84, 12, 16, 16));
        assert_eq!(nav.left, Rect::new(68, 12, 16, 16));
    }

    #[test]
    fn test_nav_placement_saturates() {
        let metrics = LayoutMetrics {
            nav_button_size: 16,
            nav_gap: 2,
            inactive_inset: 2,
            label_padding: 12,
        };
        let nav = NavButtons::place(20, 10, &metrics);
        assert_eq!(nav.right, Rect::new(4, 0, 16, 16));
        assert_eq!(nav.left.x, 0);
    }

    // ==================== Button Flow Tests ====================

    #[test]
    fn test_buttons_overlap_by_one() {
        let control = strip(200, 42, 3);
        assert_eq!(xs(&control), vec![0, 41, 82]);
        assert_eq!(visible(&control), vec![true, true, true]);
        assert_eq!(control.header_width(), 126);
        assert_eq!(control.header_panel(), Rect::new(0, 0, 200, 30));
    }

    #[test]
    fn test_exact_fit_does_not_overflow() {
        let control = strip(126, 42, 3);
        assert_eq!(control.overflow_mode(), OverflowMode::NoOverflow);
        assert!(control.navigation_buttons().is_none());
    }

    #[test]
    fn test_overflow_shows_nav_and_shrinks_panel() {
        let control = strip(100, 40, 5);
        assert_eq!(control.overflow_mode(), OverflowMode::OverflowAtStart);
        let nav = control.navigation_buttons().unwrap();
        assert_eq!(nav.right.x, 84);
        assert_eq!(nav.left.x, 68);
        assert_eq!(control.header_panel().width, 66);
        assert_eq!(xs(&control), vec![0, 39, 78, 117, 156]);
        assert_eq!(visible(&control), vec![true, true, false, false, false]);
    }

    #[test]
    fn test_overflow_ends_when_pages_removed() {
        let mut control = strip(100, 40, 5);
        control.scroll_right();
        assert_eq!(control.view_index(), 1);

        control.tab_pages_mut().remove_at(4).unwrap();
        control.tab_pages_mut().remove_at(3).unwrap();
        control.tab_pages_mut().remove_at(2).unwrap();

        assert_eq!(control.overflow_mode(), OverflowMode::NoOverflow);
        assert!(control.navigation_buttons().is_none());
        assert_eq!(control.view_index(), 0);
        assert_eq!(control.header_panel().width, 100);
        assert_eq!(visible(&control), vec![true, true]);
    }

    #[test]
    fn test_widening_a_button_triggers_overflow() {
        let mut control = strip(200, 42, 3);
        control.set_page_button_width(1, 150).unwrap();
        assert_eq!(control.overflow_mode(), OverflowMode::OverflowAtStart);
        assert_eq!(xs(&control), vec![0, 41, 190]);
    }

    #[test]
    fn test_set_page_button_width_out_of_range() {
        let mut control = strip(200, 42, 1);
        let err = control.set_page_button_width(3, 10).unwrap_err();
        assert!(matches!(err, CoreError::IndexOutOfRange { index: 3, count: 1 }));
    }

    #[test]
    fn test_fit_page_button_to_text() {
        let mut control = strip(200, 42, 2);
        let width = control.fit_page_button_to_text(1, &CellWidth).unwrap();
        // "Page 1" plus 12 columns of label padding
        assert_eq!(width, 18);
        assert_eq!(control.header_button(1).unwrap().width(), 18);
        assert!(control.fit_page_button_to_text(5, &CellWidth).is_err());
    }

    #[test]
    fn test_resize_toggles_overflow() {
        let mut control = strip(200, 42, 3);
        control.resize(Size::new(100, 100));
        assert!(control.overflow_mode().is_overflowing());
        control.resize(Size::new(300, 100));
        assert_eq!(control.overflow_mode(), OverflowMode::NoOverflow);
    }

    // ==================== Scrolling Tests ====================

    #[test]
    fn test_scroll_without_overflow_is_noop() {
        let mut control = strip(200, 42, 3);
        control.scroll_right();
        assert_eq!(control.view_index(), 0);
        control.scroll_left();
        assert_eq!(control.view_index(), 0);
    }

    #[test]
    fn test_scroll_right_hides_leading_buttons() {
        let mut control = strip(100, 40, 5);
        control.scroll_right();
        assert_eq!(control.overflow_mode(), OverflowMode::OverflowScrolled);
        assert_eq!(visible(&control), vec![false, true, true, false, false]);
        assert_eq!(control.header_button(1).unwrap().x(), 0);
        assert_eq!(control.header_button(2).unwrap().x(), 39);
    }

    #[test]
    fn test_scroll_right_stops_when_last_button_fits() {
        let mut control = strip(100, 40, 5);
        for _ in 0..10 {
            control.scroll_right();
        }
        assert_eq!(control.view_index(), 4);
        assert!(control.all_buttons_rendered());
        assert_eq!(visible(&control), vec![false, false, false, false, true]);
    }

    #[test]
    fn test_scroll_left_saturates_at_start() {
        let mut control = strip(100, 40, 5);
        control.scroll_right();
        control.scroll_left();
        control.scroll_left();
        assert_eq!(control.view_index(), 0);
        assert_eq!(control.overflow_mode(), OverflowMode::OverflowAtStart);
    }

    #[test]
    fn test_max_view_index() {
        let control = strip(200, 42, 3);
        assert_eq!(control.max_view_index(), 3);
        let control = strip(100, 40, 5);
        assert_eq!(control.max_view_index(), 4);
    }

    #[test]
    fn test_no_room_for_strip_keeps_view_at_start() {
        let mut control = strip(30, 40, 3);
        assert_eq!(control.navigation_buttons().unwrap().left.x, 0);
        control.scroll_right();
        assert_eq!(control.view_index(), 0);
        assert!(control.header_buttons().all(|b| !b.is_visible()));
    }

    // ==================== Sizing Tests ====================

    #[test]
    fn test_update_sizes_sets_page_bounds() {
        let control = strip(200, 42, 2);
        let display = control.display_rectangle();
        assert!(control.tab_pages().iter().all(|page| page.bounds() == display));
    }

    #[test]
    fn test_all_buttons_rendered_empty() {
        let control = strip(200, 42, 0);
        assert!(control.all_buttons_rendered());
    }
}

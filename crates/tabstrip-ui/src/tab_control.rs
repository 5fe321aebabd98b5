//! The tab control
//!
//! [`TabControl`] owns an ordered list of tab pages, each paired with a
//! [`HeaderButton`], and keeps three things consistent:
//!
//! - exactly one page visible (the selected one), or none
//! - the header strip layout, including scrolling when the buttons are
//!   wider than the control
//! - page bounds that follow the control size, item size and padding
//!
//! Pages are added and removed through [`TabControl::tab_pages_mut`] or
//! [`TabControl::controls`]; input arrives as [`Message`] values through
//! [`TabControl::handle_message`].

mod layout;
mod lifecycle;
mod selection;

pub use layout::{NavButtons, OverflowMode};

use ratatui::layout::{Position, Rect, Size};
use tabstrip_core::{
    CellWidth, Message, NavIcons, Padding, Surface, TabControlConfig, TabHandle, TabPage,
    TabTheme, TextMeasure,
};

use crate::controls::ControlCollection;
use crate::header_button::HeaderButton;
use crate::tab_pages::{TabPages, TabPagesMut};
use crate::widgets::BorderRenderer;

/// Header strip metrics that stay fixed for the lifetime of a control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMetrics {
    /// Edge length of the square scroll buttons
    pub nav_button_size: u16,
    /// Gap between the header panel and the scroll buttons, also used as
    /// the scroll buttons' lift above the bottom of the strip
    pub nav_gap: u16,
    /// Top inset of buttons drawn in the hidden style
    pub inactive_inset: u16,
    /// Width added to a measured label when fitting a button to its text
    pub label_padding: u16,
}

impl From<&TabControlConfig> for LayoutMetrics {
    fn from(config: &TabControlConfig) -> Self {
        LayoutMetrics {
            nav_button_size: config.nav_button_size,
            nav_gap: config.nav_gap,
            inactive_inset: config.inactive_inset,
            label_padding: config.label_padding,
        }
    }
}

/// A page together with its header button.
#[derive(Debug)]
pub(crate) struct TabEntry {
    pub(crate) handle: TabHandle,
    pub(crate) page: TabPage,
    pub(crate) button: HeaderButton,
}

/// What lies under a control-local position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    NavLeft,
    NavRight,
    /// A visible header button
    Header(TabHandle),
    /// The content area of the selected page
    Content(TabHandle),
    /// Anything else inside the control: strip background, padding, border
    Chrome,
}

/// Tabbed container with a scrollable header strip.
///
/// # Example
///
/// ```
/// use tabstrip_core::TabControlConfig;
/// use tabstrip_ui::TabControl;
///
/// let mut control = TabControl::with_config(&TabControlConfig::default());
/// control.tab_pages_mut().add_text("General");
/// control.tab_pages_mut().add_text("Advanced");
///
/// assert_eq!(control.tab_count(), 2);
/// assert_eq!(control.selected_index(), Some(0));
/// assert!(control.tab_pages()[0].is_visible());
/// ```
#[derive(Debug)]
pub struct TabControl {
    entries: Vec<TabEntry>,
    next_handle: u64,
    selected: Option<usize>,
    view_index: usize,
    mode: OverflowMode,
    nav: Option<NavButtons>,
    /// Header panel hosting the buttons, in control coordinates
    panel: Rect,
    size: Size,
    item_size: Size,
    padding: Padding,
    metrics: LayoutMetrics,
    nav_icons: NavIcons,
    hover: Option<Position>,
}

impl Default for TabControl {
    fn default() -> Self {
        TabControl::with_config(&TabControlConfig::default())
    }
}

impl TabControl {
    /// Creates an empty control with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        TabControl::default()
    }

    /// Creates an empty control from a configuration.
    #[must_use]
    pub fn with_config(config: &TabControlConfig) -> Self {
        let size = Size::new(config.width, config.height);
        let item_size = Size::new(config.item_width, config.item_height);
        let mut control = TabControl {
            entries: Vec::new(),
            next_handle: 1,
            selected: None,
            view_index: 0,
            mode: OverflowMode::NoOverflow,
            nav: None,
            panel: Rect::new(0, 0, size.width, item_size.height),
            size,
            item_size,
            padding: config.padding,
            metrics: LayoutMetrics::from(config),
            nav_icons: config.nav_icons.clone(),
            hover: None,
        };
        control.update_sizes();
        control.update_layout();
        control
    }

    // === Properties ===

    /// Current control size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Default button width and header strip height.
    pub fn item_size(&self) -> Size {
        self.item_size
    }

    /// Changes the item size, refreshing page bounds and the strip layout.
    ///
    /// Existing buttons keep their widths; only new buttons use the new
    /// item width.
    pub fn set_item_size(&mut self, item_size: Size) {
        self.item_size = item_size;
        self.update_sizes();
        self.update_layout();
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Changes the content padding and refreshes page bounds.
    pub fn set_padding(&mut self, padding: Padding) {
        self.padding = padding;
        self.update_sizes();
    }

    pub fn metrics(&self) -> LayoutMetrics {
        self.metrics
    }

    pub fn nav_icons(&self) -> &NavIcons {
        &self.nav_icons
    }

    pub fn tab_count(&self) -> usize {
        self.entries.len()
    }

    /// Handle of the page at `index`.
    pub fn handle_at(&self, index: usize) -> Option<TabHandle> {
        self.entries.get(index).map(|entry| entry.handle)
    }

    /// Current index of the page with `handle`.
    pub fn index_of(&self, handle: TabHandle) -> Option<usize> {
        self.entries.iter().position(|entry| entry.handle == handle)
    }

    /// Page with `handle`, if it is still in the control.
    pub fn page(&self, handle: TabHandle) -> Option<&TabPage> {
        self.entries
            .iter()
            .find(|entry| entry.handle == handle)
            .map(|entry| &entry.page)
    }

    /// Read access to the pages in display order.
    pub fn tab_pages(&self) -> TabPages<'_> {
        TabPages::new(&self.entries)
    }

    /// Collection-style access for adding and removing pages.
    pub fn tab_pages_mut(&mut self) -> TabPagesMut<'_> {
        TabPagesMut::new(self)
    }

    /// Child-control access that only admits [`TabPage`]s.
    pub fn controls(&mut self) -> ControlCollection<'_> {
        ControlCollection::new(self)
    }

    /// Header buttons in page order.
    pub fn header_buttons(&self) -> impl Iterator<Item = &HeaderButton> + '_ {
        self.entries.iter().map(|entry| &entry.button)
    }

    pub fn header_button(&self, index: usize) -> Option<&HeaderButton> {
        self.entries.get(index).map(|entry| &entry.button)
    }

    /// Last pointer position reported through [`Message::Hover`].
    pub fn hover_position(&self) -> Option<Position> {
        self.hover
    }

    /// Bounds of the selected page translated into `area`, the screen
    /// rectangle the control is rendered to.
    pub fn page_area(&self, area: Rect) -> Option<Rect> {
        self.selected_tab()
            .map(|page| tabstrip_core::offset_rect(page.bounds(), area).intersection(area))
    }

    // === Geometry ===

    /// Resizes the control, refreshing page bounds and the strip layout.
    pub fn resize(&mut self, size: Size) {
        if size == self.size {
            return;
        }
        tracing::trace!("tab control resized to {}x{}", size.width, size.height);
        self.size = size;
        self.update_sizes();
        self.update_layout();
    }

    // === Input ===

    /// Handles a message, returning it when the control did not consume it.
    ///
    /// Clicks on header buttons select their page, clicks on the scroll
    /// buttons scroll the strip. Clicks anywhere else are returned so the
    /// host can route them to the page content.
    pub fn handle_message(&mut self, msg: &Message) -> Option<Message> {
        match *msg {
            Message::Click(at) => {
                match self.hit_test(at) {
                    Some(HitTarget::NavLeft) => self.scroll_left(),
                    Some(HitTarget::NavRight) => self.scroll_right(),
                    Some(HitTarget::Header(handle)) => self.select_tab_by_handle(handle),
                    _ => return Some(*msg),
                }
                None
            }
            Message::Hover(at) => {
                self.hover = at;
                None
            }
            Message::Resize(size) => {
                self.resize(size);
                None
            }
            Message::SelectTab(handle) => {
                self.select_tab_by_handle(handle);
                None
            }
            Message::ScrollLeft => {
                self.scroll_left();
                None
            }
            Message::ScrollRight => {
                self.scroll_right();
                None
            }
            Message::None => None,
        }
    }

    /// Finds what lies under a control-local position.
    ///
    /// Returns `None` outside the control. Header buttons overlap by one
    /// column; the shared column belongs to the right-hand button, which
    /// is painted last.
    pub fn hit_test(&self, at: Position) -> Option<HitTarget> {
        if !Rect::from((Position::ORIGIN, self.size)).contains(at) {
            return None;
        }

        if let Some(nav) = self.nav {
            if nav.left.contains(at) {
                return Some(HitTarget::NavLeft);
            }
            if nav.right.contains(at) {
                return Some(HitTarget::NavRight);
            }
        }

        if self.panel.contains(at) {
            let header = self
                .entries
                .iter()
                .rev()
                .find(|entry| entry.button.is_visible() && entry.button.bounds().contains(at));
            if let Some(entry) = header {
                return Some(HitTarget::Header(entry.handle));
            }
        }

        let content = self
            .selected
            .and_then(|index| self.entries.get(index))
            .filter(|entry| entry.page.bounds().contains(at));
        match content {
            Some(entry) => Some(HitTarget::Content(entry.handle)),
            None => Some(HitTarget::Chrome),
        }
    }

    // === Painting ===

    /// Paints the control chrome in control-local coordinates.
    ///
    /// Background first, then the visible header buttons clipped to the
    /// header panel, then the scroll buttons, and the border last so that
    /// it is drawn on top of everything else.
    pub fn paint(&self, surface: &mut dyn Surface, theme: &TabTheme) {
        let colors = &theme.colors;
        surface.fill_rect(Rect::from((Position::ORIGIN, self.size)), colors.background);

        let hovered = self.hover.and_then(|at| self.hit_test(at));
        for entry in self.entries.iter().filter(|entry| entry.button.is_visible()) {
            let is_hovered = hovered == Some(HitTarget::Header(entry.handle));
            entry.button.paint(surface, colors, is_hovered, self.panel);
        }

        if let Some(nav) = self.nav {
            let buttons = [
                (nav.left, &self.nav_icons.left),
                (nav.right, &self.nav_icons.right),
            ];
            for (rect, icon) in buttons {
                surface.fill_rect(rect, colors.nav_background);
                let icon_width = CellWidth.measure(icon);
                let at = Position::new(
                    rect.x + rect.width.saturating_sub(icon_width) / 2,
                    rect.y + rect.height / 2,
                );
                surface.draw_text(at, icon, colors.nav_arrow, rect.width);
            }
        }

        BorderRenderer::new(self).paint(surface, colors.border);
    }

    /// Button of the selected page.
    pub(crate) fn active_button(&self) -> Option<&HeaderButton> {
        self.selected
            .and_then(|index| self.entries.get(index))
            .map(|entry| &entry.button)
    }

    fn issue_handle(&mut self) -> TabHandle {
        let handle = TabHandle::from_raw(self.next_handle);
        self.next_handle += 1;
        handle
    }
}

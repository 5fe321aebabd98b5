//! Tab pages and their handles.
//!
//! A [`TabPage`] is the content container the host application hands to a
//! tab control. The control owns the page once it is added and drives its
//! `visible` flag and `bounds`; everything else about the page belongs to
//! the application.

use std::any::Any;
use std::fmt;

use ratatui::layout::Rect;

use crate::control::Control;

/// Stable identifier of a page inside a tab control.
///
/// Handles are issued by the control when a page is added and are never
/// reused, so a handle kept after its page was removed simply stops
/// matching anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TabHandle(u64);

impl TabHandle {
    /// Creates a handle from its raw value.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        TabHandle(raw)
    }

    /// Returns the raw value of this handle.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TabHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tab#{}", self.0)
    }
}

/// Image shown next to a page label, resolved by the host's image list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    /// Position in the host image list
    Index(usize),
    /// Key in the host image list
    Key(String),
}

/// Content page hosted by a tab control.
///
/// # Example
///
/// ```
/// use tabstrip_core::TabPage;
///
/// let page = TabPage::new("Settings").with_name("settings");
/// assert_eq!(page.text(), "Settings");
/// assert_eq!(page.name(), "settings");
/// assert!(!page.is_visible());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabPage {
    name: String,
    text: String,
    image: Option<ImageRef>,
    visible: bool,
    bounds: Rect,
}

impl TabPage {
    /// Creates an unnamed page with the given label text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        TabPage {
            text: text.into(),
            ..TabPage::default()
        }
    }

    /// Sets the page's name, used as its lookup key.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the page's image by image-list key.
    #[must_use]
    pub fn with_image_key(mut self, key: impl Into<String>) -> Self {
        self.image = Some(ImageRef::Key(key.into()));
        self
    }

    /// Sets the page's image by image-list index.
    #[must_use]
    pub fn with_image_index(mut self, index: usize) -> Self {
        self.image = Some(ImageRef::Index(index));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The page's content rectangle, relative to the owning control.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Sets the visibility flag.
    ///
    /// Tab controls overwrite this on every selection change; it is public
    /// so hosts can prepare pages before handing them over.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Sets the content rectangle.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }
}

impl Control for TabPage {
    fn name(&self) -> &str {
        &self.name
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_page_is_hidden_and_unnamed() {
        let page = TabPage::new("General");
        assert_eq!(page.text(), "General");
        assert_eq!(page.name(), "");
        assert!(!page.is_visible());
        assert!(page.image().is_none());
        assert_eq!(page.bounds(), Rect::default());
    }

    #[test]
    fn test_builder_sets_image() {
        let by_key = TabPage::new("Logs").with_image_key("scroll");
        assert_eq!(by_key.image(), Some(&ImageRef::Key("scroll".to_string())));

        let by_index = TabPage::new("Logs").with_image_index(3);
        assert_eq!(by_index.image(), Some(&ImageRef::Index(3)));
    }

    #[test]
    fn test_setters() {
        let mut page = TabPage::new("Logs");
        page.set_visible(true);
        page.set_bounds(Rect::new(3, 33, 194, 64));
        assert!(page.is_visible());
        assert_eq!(page.bounds(), Rect::new(3, 33, 194, 64));
    }

    #[test]
    fn test_handle_display_and_raw() {
        let handle = TabHandle::from_raw(7);
        assert_eq!(handle.raw(), 7);
        assert_eq!(handle.to_string(), "tab#7");
    }

    #[test]
    fn test_page_is_a_control() {
        let control: Box<dyn Control> = Box::new(TabPage::new("A").with_name("a"));
        assert_eq!(control.name(), "a");
        let page = control
            .into_any()
            .downcast::<TabPage>()
            .expect("should downcast");
        assert_eq!(page.text(), "A");
    }
}

//! Tab page collections
//!
//! [`TabPages`] is a read-only view of a control's pages in display order.
//! [`TabPagesMut`] adds the collection-style mutators; every one of them is
//! routed through the control's [`ControlCollection`] so that button
//! creation, selection and layout stay in one place.

use std::ops::Index;

use tabstrip_core::{Control, CoreResult, TabHandle, TabPage};

use crate::controls::ControlCollection;
use crate::tab_control::{TabControl, TabEntry};

/// Read-only view of a control's pages.
#[derive(Clone, Copy)]
pub struct TabPages<'a> {
    entries: &'a [TabEntry],
}

impl<'a> TabPages<'a> {
    pub(crate) fn new(entries: &'a [TabEntry]) -> Self {
        TabPages { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a TabPage> {
        self.entries.get(index).map(|entry| &entry.page)
    }

    /// First page whose name equals `key`.
    pub fn get_by_key(&self, key: &str) -> Option<&'a TabPage> {
        self.index_of_key(key).and_then(|index| self.get(index))
    }

    pub fn handle_at(&self, index: usize) -> Option<TabHandle> {
        self.entries.get(index).map(|entry| entry.handle)
    }

    pub fn index_of(&self, handle: TabHandle) -> Option<usize> {
        self.entries.iter().position(|entry| entry.handle == handle)
    }

    /// Index of the first page whose name equals `key`.
    pub fn index_of_key(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.page.name() == key)
    }

    pub fn contains(&self, handle: TabHandle) -> bool {
        self.index_of(handle).is_some()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index_of_key(key).is_some()
    }

    /// Pages in display order.
    pub fn iter(&self) -> impl Iterator<Item = &'a TabPage> + 'a {
        self.entries.iter().map(|entry| &entry.page)
    }

    /// Handles in display order.
    pub fn handles(&self) -> impl Iterator<Item = TabHandle> + 'a {
        self.entries.iter().map(|entry| entry.handle)
    }
}

impl Index<usize> for TabPages<'_> {
    type Output = TabPage;

    fn index(&self, index: usize) -> &TabPage {
        &self.entries[index].page
    }
}

/// Mutable collection of a control's pages.
///
/// # Example
///
/// ```
/// use tabstrip_ui::TabControl;
///
/// let mut control = TabControl::new();
/// let mut pages = control.tab_pages_mut();
/// pages.add_keyed("general", "General");
/// pages.add_keyed("advanced", "Advanced");
/// pages.remove_by_key("general");
///
/// assert_eq!(control.tab_count(), 1);
/// assert_eq!(control.tab_pages()[0].text(), "Advanced");
/// ```
pub struct TabPagesMut<'a> {
    owner: &'a mut TabControl,
}

impl<'a> TabPagesMut<'a> {
    pub(crate) fn new(owner: &'a mut TabControl) -> Self {
        TabPagesMut { owner }
    }

    /// Read-only view of the same pages.
    pub fn view(&self) -> TabPages<'_> {
        self.owner.tab_pages()
    }

    pub fn len(&self) -> usize {
        self.owner.tab_count()
    }

    pub fn is_empty(&self) -> bool {
        self.owner.tab_count() == 0
    }

    fn controls(&mut self) -> ControlCollection<'_> {
        self.owner.controls()
    }

    // === Adding ===

    /// Appends a page.
    pub fn add(&mut self, page: TabPage) -> TabHandle {
        self.controls().add_page(page)
    }

    /// Appends an unnamed page with the given label.
    pub fn add_text(&mut self, text: impl Into<String>) -> TabHandle {
        self.add(TabPage::new(text))
    }

    /// Appends a page named `key` with the given label.
    pub fn add_keyed(&mut self, key: impl Into<String>, text: impl Into<String>) -> TabHandle {
        self.add(TabPage::new(text).with_name(key))
    }

    /// Appends a page with an image referenced by image-list key.
    pub fn add_with_image_key(
        &mut self,
        key: impl Into<String>,
        text: impl Into<String>,
        image_key: impl Into<String>,
    ) -> TabHandle {
        self.add(TabPage::new(text).with_name(key).with_image_key(image_key))
    }

    /// Appends a page with an image referenced by image-list index.
    pub fn add_with_image_index(
        &mut self,
        key: impl Into<String>,
        text: impl Into<String>,
        image_index: usize,
    ) -> TabHandle {
        self.add(TabPage::new(text).with_name(key).with_image_index(image_index))
    }

    /// Appends every page in order.
    pub fn add_range(&mut self, pages: impl IntoIterator<Item = TabPage>) -> Vec<TabHandle> {
        pages.into_iter().map(|page| self.add(page)).collect()
    }

    /// Appends a control, which must be a [`TabPage`], and returns its
    /// index.
    ///
    /// # Errors
    ///
    /// Returns [`tabstrip_core::CoreError::NotATabPage`] for other controls.
    pub fn add_control(&mut self, control: Box<dyn Control>) -> CoreResult<usize> {
        self.controls().add(control)?;
        Ok(self.owner.tab_count() - 1)
    }

    // === Inserting ===

    /// Inserts a page at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`tabstrip_core::CoreError::IndexOutOfRange`] if `index` is
    /// past the end.
    pub fn insert(&mut self, index: usize, page: TabPage) -> CoreResult<TabHandle> {
        self.controls().insert_page(index, page)
    }

    /// Inserts an unnamed page with the given label.
    ///
    /// # Errors
    ///
    /// See [`TabPagesMut::insert`].
    pub fn insert_text(&mut self, index: usize, text: impl Into<String>) -> CoreResult<TabHandle> {
        self.insert(index, TabPage::new(text))
    }

    /// Inserts a page named `key` with the given label.
    ///
    /// # Errors
    ///
    /// See [`TabPagesMut::insert`].
    pub fn insert_keyed(
        &mut self,
        index: usize,
        key: impl Into<String>,
        text: impl Into<String>,
    ) -> CoreResult<TabHandle> {
        self.insert(index, TabPage::new(text).with_name(key))
    }

    /// Inserts a page with an image referenced by image-list key.
    ///
    /// # Errors
    ///
    /// See [`TabPagesMut::insert`].
    pub fn insert_with_image_key(
        &mut self,
        index: usize,
        key: impl Into<String>,
        text: impl Into<String>,
        image_key: impl Into<String>,
    ) -> CoreResult<TabHandle> {
        self.insert(index, TabPage::new(text).with_name(key).with_image_key(image_key))
    }

    /// Inserts a page with an image referenced by image-list index.
    ///
    /// # Errors
    ///
    /// See [`TabPagesMut::insert`].
    pub fn insert_with_image_index(
        &mut self,
        index: usize,
        key: impl Into<String>,
        text: impl Into<String>,
        image_index: usize,
    ) -> CoreResult<TabHandle> {
        self.insert(
            index,
            TabPage::new(text).with_name(key).with_image_index(image_index),
        )
    }

    /// Inserts a control, which must be a [`TabPage`], at `index`.
    ///
    /// # Errors
    ///
    /// See [`ControlCollection::insert`].
    pub fn insert_control(
        &mut self,
        index: usize,
        control: Box<dyn Control>,
    ) -> CoreResult<TabHandle> {
        self.controls().insert(index, control)
    }

    // === Removing ===

    /// Removes the page with `handle`; see [`ControlCollection::remove`].
    pub fn remove(&mut self, handle: TabHandle) -> Option<TabPage> {
        self.controls().remove(handle)
    }

    /// Removes the page at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`tabstrip_core::CoreError::IndexOutOfRange`] when there is
    /// no page at `index`.
    pub fn remove_at(&mut self, index: usize) -> CoreResult<TabPage> {
        self.controls().remove_at(index)
    }

    /// Removes the first page named `key`. Unknown keys are ignored.
    pub fn remove_by_key(&mut self, key: &str) -> Option<TabPage> {
        let handle = self
            .view()
            .index_of_key(key)
            .and_then(|index| self.owner.handle_at(index))?;
        self.remove(handle)
    }

    /// Removes every page.
    pub fn clear(&mut self) {
        self.controls().clear();
    }
}

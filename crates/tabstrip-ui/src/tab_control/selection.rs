//! Page selection
//!
//! At most one page is visible at a time: the selected one. Its button is
//! drawn in the active style, every other button in the hidden style.

use tabstrip_core::{CoreError, CoreResult, TabHandle, TabPage};

use super::TabControl;

impl TabControl {
    /// Index of the selected page.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Selects the page at `index`, or clears the selection for `None`.
    ///
    /// # Errors
    ///
    /// See [`TabControl::select_tab`].
    pub fn set_selected_index(&mut self, index: Option<usize>) -> CoreResult<()> {
        self.select_tab(index)
    }

    /// The selected page.
    pub fn selected_tab(&self) -> Option<&TabPage> {
        self.selected
            .and_then(|index| self.entries.get(index))
            .map(|entry| &entry.page)
    }

    /// Handle of the selected page.
    pub fn selected_handle(&self) -> Option<TabHandle> {
        self.selected
            .and_then(|index| self.entries.get(index))
            .map(|entry| entry.handle)
    }

    /// Selects the page with `handle`; unknown handles are ignored.
    pub fn set_selected_tab(&mut self, handle: TabHandle) {
        self.select_tab_by_handle(handle);
    }

    /// Selects the page at `index`.
    ///
    /// The previously selected page is hidden first. `None` leaves the
    /// control without a selection.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::IndexOutOfRange`] when `index` is not a valid
    /// page index. The control is then left without a selection.
    pub fn select_tab(&mut self, index: Option<usize>) -> CoreResult<()> {
        self.hide_selected_page();
        self.selected = None;

        let Some(index) = index else {
            tracing::trace!("tab selection cleared");
            return Ok(());
        };
        let count = self.entries.len();
        if index >= count {
            tracing::warn!("cannot select tab {} of {}", index, count);
            return Err(CoreError::out_of_range(index, count));
        }
        self.show_page(index);
        Ok(())
    }

    /// Selects the first page whose name matches `name`.
    ///
    /// Does nothing if no page has that name.
    pub fn select_tab_by_name(&mut self, name: &str) {
        if let Some(index) = self.entries.iter().position(|entry| entry.page.name() == name) {
            self.activate(index);
        }
    }

    /// Selects the page with `handle`.
    ///
    /// Does nothing if the page is no longer in the control.
    pub fn select_tab_by_handle(&mut self, handle: TabHandle) {
        if let Some(index) = self.index_of(handle) {
            self.activate(index);
        }
    }

    /// Hides the current page and shows the page at `index`, which must be
    /// valid.
    pub(crate) fn activate(&mut self, index: usize) {
        debug_assert!(index < self.entries.len());
        self.hide_selected_page();
        self.show_page(index);
    }

    fn hide_selected_page(&mut self) {
        let item_height = self.item_size.height;
        let inset = self.metrics.inactive_inset;
        if let Some(entry) = self.selected.and_then(|index| self.entries.get_mut(index)) {
            entry.button.hide(item_height, inset);
            entry.page.set_visible(false);
        }
    }

    fn show_page(&mut self, index: usize) {
        let item_height = self.item_size.height;
        let inset = self.metrics.inactive_inset;
        self.selected = Some(index);
        if let Some(entry) = self.entries.get_mut(index) {
            entry.button.show(item_height, inset);
            entry.page.set_visible(true);
            tracing::debug!("selected tab {} ({})", index, entry.handle);
        }
    }
}

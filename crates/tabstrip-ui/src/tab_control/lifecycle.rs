//! Adding and removing pages
//!
//! These are the primitives behind [`crate::ControlCollection`]; they keep
//! the selection pointing at the same page across index shifts and re-run
//! the layout after every structural change.

use std::mem;

use tabstrip_core::{CoreError, CoreResult, TabHandle, TabPage};

use super::{OverflowMode, TabControl, TabEntry};
use crate::header_button::HeaderButton;

impl TabControl {
    /// Inserts `page` at `index` with a new header button and returns the
    /// page's handle.
    ///
    /// `index` must be at most the page count. The page is sized to the
    /// display rectangle and starts hidden; if nothing is selected
    /// afterwards, the first page becomes selected.
    pub(crate) fn insert_page(&mut self, index: usize, mut page: TabPage) -> TabHandle {
        debug_assert!(index <= self.entries.len());
        let handle = self.issue_handle();
        page.set_bounds(self.display_rectangle());
        page.set_visible(false);

        let width = self.item_size.width;
        let offset = u16::try_from(index).unwrap_or(u16::MAX);
        let x = offset.saturating_mul(width).saturating_sub(offset);
        let mut button = HeaderButton::new(page.text(), x, width, self.item_size.height);
        button.hide(self.item_size.height, self.metrics.inactive_inset);

        self.entries.insert(index, TabEntry { handle, page, button });
        if let Some(selected) = self.selected.filter(|&selected| index <= selected) {
            self.selected = Some(selected + 1);
        }
        tracing::debug!(
            "added tab {} at {} ({} pages)",
            handle,
            index,
            self.entries.len()
        );

        if self.selected.is_none() {
            self.activate(0);
        }
        self.update_layout();
        handle
    }

    /// Removes the page at `index` together with its button.
    ///
    /// Selection after removal:
    ///
    /// - a selected page after `index` keeps its selection at the shifted
    ///   index
    /// - if the removed page was selected, the page that moved into its
    ///   slot is selected, or the new last page when it was the last one
    /// - removing the only page leaves no selection
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::IndexOutOfRange`] when there is no page at
    /// `index`.
    pub(crate) fn remove_page(&mut self, index: usize) -> CoreResult<TabPage> {
        let count = self.entries.len();
        if index >= count {
            tracing::warn!("cannot remove tab {} of {}", index, count);
            return Err(CoreError::out_of_range(index, count));
        }

        let TabEntry { handle, mut page, .. } = self.entries.remove(index);
        page.set_visible(false);
        let remaining = self.entries.len();
        self.selected = match self.selected {
            Some(selected) if selected > index => Some(selected - 1),
            Some(selected) if selected >= remaining => remaining.checked_sub(1),
            other => other,
        };
        tracing::debug!("removed tab {} at {} ({} pages)", handle, index, remaining);

        if let Some(selected) = self.selected {
            self.activate(selected);
        }
        self.update_layout();
        Ok(page)
    }

    /// Drops every page and button and resets selection and scrolling.
    pub(crate) fn remove_all(&mut self) {
        self.selected = None;
        self.view_index = 0;
        self.mode = OverflowMode::NoOverflow;
        self.hover = None;

        let disposed = mem::take(&mut self.entries);
        self.nav = None;
        tracing::debug!("cleared {} tabs", disposed.len());
        drop(disposed);

        self.update_layout();
    }
}

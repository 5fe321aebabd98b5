//! Child-control collection of a tab control
//!
//! A tab control's only children are its pages. [`ControlCollection`] is
//! the gatekeeper for that rule: anything that is not a [`TabPage`] is
//! rejected before the control is touched.

use tabstrip_core::{Control, CoreError, CoreResult, TabHandle, TabPage};

use crate::tab_control::TabControl;

/// Child-control view of a [`TabControl`] that only admits [`TabPage`]s.
pub struct ControlCollection<'a> {
    owner: &'a mut TabControl,
}

impl<'a> ControlCollection<'a> {
    pub(crate) fn new(owner: &'a mut TabControl) -> Self {
        ControlCollection { owner }
    }

    pub fn len(&self) -> usize {
        self.owner.tab_count()
    }

    pub fn is_empty(&self) -> bool {
        self.owner.tab_count() == 0
    }

    pub fn contains(&self, handle: TabHandle) -> bool {
        self.owner.index_of(handle).is_some()
    }

    /// Appends a control, which must be a [`TabPage`].
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotATabPage`] for any other control; the tab
    /// control is left unchanged.
    pub fn add(&mut self, control: Box<dyn Control>) -> CoreResult<TabHandle> {
        let page = into_tab_page(control)?;
        Ok(self.add_page(page))
    }

    /// Inserts a control, which must be a [`TabPage`], at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::IndexOutOfRange`] if `index` is past the end and
    /// [`CoreError::NotATabPage`] for controls that are not pages. In both
    /// cases the tab control is left unchanged.
    pub fn insert(&mut self, index: usize, control: Box<dyn Control>) -> CoreResult<TabHandle> {
        let count = self.owner.tab_count();
        if index > count {
            return Err(CoreError::out_of_range(index, count));
        }
        let page = into_tab_page(control)?;
        Ok(self.owner.insert_page(index, page))
    }

    /// Appends a page.
    pub fn add_page(&mut self, page: TabPage) -> TabHandle {
        let index = self.owner.tab_count();
        self.owner.insert_page(index, page)
    }

    /// Inserts a page at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::IndexOutOfRange`] if `index` is past the end.
    pub fn insert_page(&mut self, index: usize, page: TabPage) -> CoreResult<TabHandle> {
        let count = self.owner.tab_count();
        if index > count {
            return Err(CoreError::out_of_range(index, count));
        }
        Ok(self.owner.insert_page(index, page))
    }

    /// Removes the page with `handle` and returns it.
    ///
    /// If it was the selected page, the first remaining page becomes
    /// selected. Unknown handles are ignored.
    pub fn remove(&mut self, handle: TabHandle) -> Option<TabPage> {
        let index = self.owner.index_of(handle)?;
        let was_selected = self.owner.selected_index() == Some(index);
        let page = self.owner.remove_page(index).ok()?;
        if was_selected && self.owner.tab_count() > 0 {
            self.owner.activate(0);
        }
        Some(page)
    }

    /// Removes the page at `index` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::IndexOutOfRange`] when there is no page at
    /// `index`.
    pub fn remove_at(&mut self, index: usize) -> CoreResult<TabPage> {
        let count = self.owner.tab_count();
        let handle = self
            .owner
            .handle_at(index)
            .ok_or_else(|| CoreError::out_of_range(index, count))?;
        self.remove(handle)
            .ok_or_else(|| CoreError::out_of_range(index, count))
    }

    /// Removes every page.
    pub fn clear(&mut self) {
        self.owner.remove_all();
    }
}

fn into_tab_page(control: Box<dyn Control>) -> CoreResult<TabPage> {
    let kind = control.kind();
    control
        .into_any()
        .downcast::<TabPage>()
        .map(|page| *page)
        .map_err(|_| {
            tracing::warn!("rejected non-page control `{}`", kind);
            CoreError::NotATabPage {
                kind: kind.to_string(),
            }
        })
}

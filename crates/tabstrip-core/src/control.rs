//! Child control trait for the tab control's child collection.
//!
//! The tab control only ever holds [`crate::TabPage`] children, but its
//! child collection is typed against [`Control`] so that hosts holding
//! heterogeneous widgets can hand them over and get a type-contract error
//! back instead of a silent drop.

use std::any::{self, Any};

/// A widget that can be offered to a container's child collection.
///
/// # Example
///
/// ```
/// use tabstrip_core::{Control, TabPage};
///
/// let page: Box<dyn Control> = Box::new(TabPage::new("General"));
/// assert!(page.kind().ends_with("TabPage"));
/// ```
pub trait Control: Any {
    /// Returns the control's name (its lookup key).
    fn name(&self) -> &str;

    /// Returns a human readable type name, used in error messages.
    fn kind(&self) -> &'static str {
        any::type_name::<Self>()
    }

    /// Converts the boxed control into `Box<dyn Any>` for downcasting.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

//! # tabstrip-ui
//!
//! Tab control engine and terminal widgets, built on [`tabstrip_core`].
//!
//! - [`TabControl`] - Owns the pages, the selection and the header strip layout
//! - [`TabPages`] / [`TabPagesMut`] - Collection-style access to the pages
//! - [`ControlCollection`] - Child-control gatekeeper that only admits pages
//! - [`HeaderButton`] - Per-page button in the header strip
//! - [`TabControlView`] - ratatui widget rendering a control
//! - [`BufferSurface`] - [`tabstrip_core::Surface`] over a ratatui buffer
//!
//! ## Overflow
//!
//! When the header buttons are wider than the control, two scroll buttons
//! appear at the right end of the strip and the strip can be scrolled one
//! button at a time. The state is summarized by [`OverflowMode`].
//!
//! ## Example
//!
//! ```
//! use ratatui::layout::Size;
//! use tabstrip_core::Message;
//! use tabstrip_ui::{OverflowMode, TabControl};
//!
//! let mut control = TabControl::new();
//! for name in ["Files", "Search", "Git", "Debug", "Extensions"] {
//!     control.tab_pages_mut().add_text(name);
//! }
//! assert_eq!(control.overflow_mode(), OverflowMode::OverflowAtStart);
//!
//! control.handle_message(&Message::ScrollRight);
//! assert_eq!(control.view_index(), 1);
//!
//! control.handle_message(&Message::Resize(Size::new(400, 100)));
//! assert_eq!(control.overflow_mode(), OverflowMode::NoOverflow);
//! ```

pub mod controls;
pub mod header_button;
pub mod surface;
pub mod tab_control;
pub mod tab_pages;
pub mod widgets;

pub use controls::ControlCollection;
pub use header_button::HeaderButton;
pub use surface::BufferSurface;
pub use tab_control::{HitTarget, LayoutMetrics, NavButtons, OverflowMode, TabControl};
pub use tab_pages::{TabPages, TabPagesMut};
pub use widgets::{BorderRenderer, TabControlView};

//! Painting and ratatui widgets for the tab control
//!
//! ## Available Widgets
//!
//! - [`TabControlView`] - Renders a [`crate::TabControl`] into a ratatui buffer
//! - [`BorderRenderer`] - Draws the control border and the header separator
//!
//! ## Example
//!
//! ```ignore
//! use tabstrip_ui::{TabControl, TabControlView};
//! use tabstrip_core::TabTheme;
//!
//! let theme = TabTheme::dark();
//! terminal.draw(|frame| {
//!     frame.render_widget(TabControlView::new(&control, &theme), frame.area());
//! })?;
//! ```

pub mod border;
pub mod tab_control_view;

pub use border::BorderRenderer;
pub use tab_control_view::TabControlView;

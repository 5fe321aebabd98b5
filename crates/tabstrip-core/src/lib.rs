//! # tabstrip-core
//!
//! Core traits and types for the tabstrip tab control.
//!
//! This crate holds everything the tab control engine shares with its
//! hosts but that does not depend on the engine itself: page values and
//! their handles, the child-control trait, input messages, the drawing
//! surface abstraction, theming and configuration.
//!
//! ## Core Abstractions
//!
//! - [`TabPage`] / [`TabHandle`] - Content pages and their stable identities
//! - [`Control`] - Trait for anything offered to a container's children
//! - [`Message`] - Input messages dispatched to a control
//! - [`Surface`] - Drawing backend used when painting
//! - [`TextMeasure`] - Label measurement for button sizing
//! - [`TabTheme`] - Color theme
//! - [`TabControlConfig`] - TOML-backed configuration
//! - [`CoreError`] - Error type for control operations
//!
//! ## Example
//!
//! ```
//! use tabstrip_core::{Padding, TabControlConfig, TabPage, TabTheme};
//!
//! let config = TabControlConfig {
//!     padding: Padding::uniform(1),
//!     theme: TabTheme::dark(),
//!     ..TabControlConfig::default()
//! };
//! assert!(config.validate().is_ok());
//!
//! let page = TabPage::new("Overview").with_name("overview");
//! assert_eq!(page.name(), "overview");
//! ```

pub mod config;
pub mod control;
pub mod error;
pub mod event;
pub mod geometry;
pub mod measure;
pub mod page;
pub mod surface;
pub mod theme;

pub use config::{NavIcons, TabControlConfig};
pub use control::Control;
pub use error::{CoreError, CoreResult};
pub use event::Message;
pub use geometry::{offset_rect, Padding};
pub use measure::{CellWidth, TextMeasure};
pub use page::{ImageRef, TabHandle, TabPage};
pub use surface::{DrawOp, RecordingSurface, Surface};
pub use theme::{TabColors, TabTheme};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_exports() {
        let _ = TabHandle::from_raw(0);
        let _ = TabPage::new("a");
        let _ = Padding::uniform(1);
        let _ = CoreError::out_of_range(0, 0);
        let _ = Message::None;
        let _ = RecordingSurface::new();
        let _ = CellWidth;
    }

    #[test]
    fn test_core_result_usage() {
        fn example_function() -> CoreResult<u32> {
            Ok(42)
        }

        fn failing_function() -> CoreResult<u32> {
            Err(CoreError::out_of_range(3, 1))
        }

        assert_eq!(example_function().ok(), Some(42));
        assert!(failing_function().is_err());
    }
}

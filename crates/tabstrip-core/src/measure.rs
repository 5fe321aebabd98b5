//! Text measurement used to size header buttons to their labels.

use unicode_width::UnicodeWidthStr;

/// Measures the rendered width of a label.
pub trait TextMeasure {
    fn measure(&self, text: &str) -> u16;
}

/// Measures text in terminal cells.
///
/// # Example
///
/// ```
/// use tabstrip_core::{CellWidth, TextMeasure};
///
/// assert_eq!(CellWidth.measure("Tabs"), 4);
/// assert_eq!(CellWidth.measure("日本"), 4);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CellWidth;

impl TextMeasure for CellWidth {
    fn measure(&self, text: &str) -> u16 {
        u16::try_from(text.width()).unwrap_or(u16::MAX)
    }
}

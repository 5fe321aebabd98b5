//! Drawing surface abstraction
//!
//! The tab control paints through the [`Surface`] trait so that the layout
//! engine does not depend on a particular graphics backend. Coordinates are
//! local to the control being painted; the surface is responsible for
//! translating and clipping them.
//!
//! [`RecordingSurface`] keeps every call as a [`DrawOp`], which is what the
//! engine's tests assert against and what hosts can replay onto their own
//! backend.

use ratatui::layout::{Position, Rect};
use ratatui::style::Color;

/// A drawing backend supporting filled rectangles, pen lines and text.
pub trait Surface {
    /// Fills `rect` with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draws a straight line between two points with the given pen color.
    ///
    /// Both endpoints are inclusive. Cell-based surfaces only support
    /// horizontal and vertical segments.
    fn draw_line(&mut self, color: Color, from: Position, to: Position);

    /// Draws the outline of `rect`.
    fn draw_rect(&mut self, color: Color, rect: Rect);

    /// Draws `text` starting at `at`, clipped to `max_width` columns.
    fn draw_text(&mut self, at: Position, text: &str, color: Color, max_width: u16);
}

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    Fill { rect: Rect, color: Color },
    Line { color: Color, from: Position, to: Position },
    Rect { color: Color, rect: Rect },
    Text { at: Position, text: String, color: Color },
}

/// A [`Surface`] that records calls instead of drawing them.
///
/// # Example
///
/// ```
/// use ratatui::layout::{Position, Rect};
/// use ratatui::style::Color;
/// use tabstrip_core::{DrawOp, RecordingSurface, Surface};
///
/// let mut surface = RecordingSurface::new();
/// surface.draw_line(Color::Gray, Position::new(0, 0), Position::new(9, 0));
/// assert_eq!(surface.lines().count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        RecordingSurface::default()
    }

    /// All recorded operations, in call order.
    #[must_use]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Recorded line segments as `(from, to)` pairs.
    pub fn lines(&self) -> impl Iterator<Item = (Position, Position)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Line { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
    }

    /// Recorded text runs.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Forgets everything recorded so far.
    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::Fill { rect, color });
    }

    fn draw_line(&mut self, color: Color, from: Position, to: Position) {
        self.ops.push(DrawOp::Line { color, from, to });
    }

    fn draw_rect(&mut self, color: Color, rect: Rect) {
        self.ops.push(DrawOp::Rect { color, rect });
    }

    fn draw_text(&mut self, at: Position, text: &str, color: Color, max_width: u16) {
        let clipped: String = text.chars().take(usize::from(max_width)).collect();
        self.ops.push(DrawOp::Text {
            at,
            text: clipped,
            color,
        });
    }
}

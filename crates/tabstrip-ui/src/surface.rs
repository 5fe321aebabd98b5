//! Terminal drawing surface
//!
//! [`BufferSurface`] implements [`Surface`] on top of a ratatui [`Buffer`].
//! Control-local coordinates are translated into the render area and
//! clipped to it. Lines are drawn with box-drawing characters and merged
//! with lines already in the buffer, so borders that meet form proper
//! corners and junctions.

use std::collections::HashMap;

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols::line;
use tabstrip_core::{offset_rect, Surface};

const UP: u8 = 0b0001;
const DOWN: u8 = 0b0010;
const LEFT: u8 = 0b0100;
const RIGHT: u8 = 0b1000;

/// A [`Surface`] drawing into a region of a ratatui [`Buffer`].
pub struct BufferSurface<'a> {
    buf: &'a mut Buffer,
    area: Rect,
    /// Stroke directions drawn through this surface, per screen cell
    strokes: HashMap<Position, u8>,
}

impl<'a> BufferSurface<'a> {
    /// Creates a surface whose origin is the top-left corner of `area`.
    pub fn new(buf: &'a mut Buffer, area: Rect) -> Self {
        let area = area.intersection(buf.area);
        BufferSurface {
            buf,
            area,
            strokes: HashMap::new(),
        }
    }

    /// The screen region this surface draws into.
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Merges a line stroke into the cell at a local position.
    fn stroke(&mut self, x: u16, y: u16, edges: u8, color: Color) {
        let at = Position::new(self.area.x + x, self.area.y + y);
        if let Some(cell) = self.buf.cell_mut(at) {
            let existing = match self.strokes.get(&at) {
                Some(drawn) => *drawn,
                None => edges_of(cell.symbol()),
            };
            let merged = existing | edges;
            cell.set_symbol(symbol_for(merged)).set_fg(color);
            self.strokes.insert(at, merged);
        }
    }
}

impl Surface for BufferSurface<'_> {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let target = offset_rect(rect, self.area).intersection(self.area);
        for at in target.positions() {
            if let Some(cell) = self.buf.cell_mut(at) {
                cell.set_symbol(" ").set_bg(color);
            }
            self.strokes.remove(&at);
        }
    }

    fn draw_line(&mut self, color: Color, from: Position, to: Position) {
        if self.area.is_empty() {
            return;
        }
        let max_x = self.area.width - 1;
        let max_y = self.area.height - 1;

        if from.y == to.y {
            if from.y > max_y {
                return;
            }
            let start = from.x.min(to.x);
            let end = from.x.max(to.x).min(max_x);
            for x in start..=end {
                let mut edges = 0;
                if x > start {
                    edges |= LEFT;
                }
                if x < end {
                    edges |= RIGHT;
                }
                self.stroke(x, from.y, if edges == 0 { LEFT | RIGHT } else { edges }, color);
            }
        } else if from.x == to.x {
            if from.x > max_x {
                return;
            }
            let start = from.y.min(to.y);
            let end = from.y.max(to.y).min(max_y);
            for y in start..=end {
                let mut edges = 0;
                if y > start {
                    edges |= UP;
                }
                if y < end {
                    edges |= DOWN;
                }
                self.stroke(from.x, y, if edges == 0 { UP | DOWN } else { edges }, color);
            }
        } else {
            tracing::trace!("skipping diagonal line {:?} -> {:?}", from, to);
        }
    }

    fn draw_rect(&mut self, color: Color, rect: Rect) {
        if rect.is_empty() {
            return;
        }
        let right = rect.right() - 1;
        let bottom = rect.bottom() - 1;
        let corners = [
            Position::new(rect.x, rect.y),
            Position::new(right, rect.y),
            Position::new(right, bottom),
            Position::new(rect.x, bottom),
        ];
        for (index, from) in corners.iter().enumerate() {
            let to = corners[(index + 1) % corners.len()];
            self.draw_line(color, *from, to);
        }
    }

    fn draw_text(&mut self, at: Position, text: &str, color: Color, max_width: u16) {
        if at.x >= self.area.width || at.y >= self.area.height {
            return;
        }
        let width = max_width.min(self.area.width - at.x);
        self.buf.set_stringn(
            self.area.x + at.x,
            self.area.y + at.y,
            text,
            usize::from(width),
            Style::default().fg(color),
        );
    }
}

fn edges_of(symbol: &str) -> u8 {
    match symbol {
        line::VERTICAL => UP | DOWN,
        line::HORIZONTAL => LEFT | RIGHT,
        line::TOP_LEFT => DOWN | RIGHT,
        line::TOP_RIGHT => DOWN | LEFT,
        line::BOTTOM_LEFT => UP | RIGHT,
        line::BOTTOM_RIGHT => UP | LEFT,
        line::VERTICAL_RIGHT => UP | DOWN | RIGHT,
        line::VERTICAL_LEFT => UP | DOWN | LEFT,
        line::HORIZONTAL_DOWN => LEFT | RIGHT | DOWN,
        line::HORIZONTAL_UP => LEFT | RIGHT | UP,
        line::CROSS => UP | DOWN | LEFT | RIGHT,
        _ => 0,
    }
}

fn symbol_for(edges: u8) -> &'static str {
    let vertical = edges & (UP | DOWN);
    let horizontal = edges & (LEFT | RIGHT);
    match (vertical, horizontal) {
        (_, 0) => line::VERTICAL,
        (0, _) => line::HORIZONTAL,
        (DOWN, RIGHT) => line::TOP_LEFT,
        (DOWN, LEFT) => line::TOP_RIGHT,
        (UP, RIGHT) => line::BOTTOM_LEFT,
        (UP, LEFT) => line::BOTTOM_RIGHT,
        (DOWN, _) => line::HORIZONTAL_DOWN,
        (UP, _) => line::HORIZONTAL_UP,
        (_, RIGHT) => line::VERTICAL_RIGHT,
        (_, LEFT) => line::VERTICAL_LEFT,
        _ => line::CROSS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    // ==================== Line Tests ====================

    #[test]
    fn test_horizontal_line() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 1));
        let mut surface = BufferSurface::new(&mut buf, Rect::new(0, 0, 6, 1));
        surface.draw_line(Color::Gray, Position::new(1, 0), Position::new(4, 0));
        assert_eq!(row(&buf, 0), " ──── ");
        assert_eq!(buf[(2, 0)].fg, Color::Gray);
    }

    #[test]
    fn test_lines_are_clipped_to_area() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 3));
        let mut surface = BufferSurface::new(&mut buf, Rect::new(0, 0, 4, 2));
        surface.draw_line(Color::Gray, Position::new(0, 1), Position::new(40, 1));
        surface.draw_line(Color::Gray, Position::new(0, 5), Position::new(3, 5));
        assert_eq!(row(&buf, 1), "────  ");
        assert_eq!(row(&buf, 2), "      ");
    }

    #[test]
    fn test_lines_merge_into_corners() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 3));
        let mut surface = BufferSurface::new(&mut buf, Rect::new(0, 0, 4, 3));
        surface.draw_line(Color::Gray, Position::new(0, 0), Position::new(3, 0));
        surface.draw_line(Color::Gray, Position::new(0, 0), Position::new(0, 2));
        surface.draw_line(Color::Gray, Position::new(2, 0), Position::new(2, 2));
        assert_eq!(row(&buf, 0), "┌─┬─");
        assert_eq!(row(&buf, 1), "│ │ ");
    }

    #[test]
    fn test_single_cell_lines() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 1));
        let mut surface = BufferSurface::new(&mut buf, Rect::new(0, 0, 3, 1));
        surface.draw_line(Color::Gray, Position::new(0, 0), Position::new(0, 0));
        surface.draw_line(Color::Gray, Position::new(2, 0), Position::new(2, 3));
        assert_eq!(row(&buf, 0), "─ │");
    }

    #[test]
    fn test_draw_rect() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 3));
        let mut surface = BufferSurface::new(&mut buf, Rect::new(0, 0, 4, 3));
        surface.draw_rect(Color::Gray, Rect::new(0, 0, 4, 3));
        assert_eq!(row(&buf, 0), "┌──┐");
        assert_eq!(row(&buf, 1), "│  │");
        assert_eq!(row(&buf, 2), "└──┘");
    }

    // ==================== Fill And Text Tests ====================

    #[test]
    fn test_fill_is_translated_and_clears_symbols() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 3));
        buf.set_string(0, 1, "xxxxxx", Style::default());
        let mut surface = BufferSurface::new(&mut buf, Rect::new(2, 1, 4, 2));
        surface.fill_rect(Rect::new(0, 0, 2, 1), Color::Blue);

        assert_eq!(row(&buf, 1), "xx  xx");
        assert_eq!(buf[(2, 1)].bg, Color::Blue);
        assert_eq!(buf[(4, 1)].bg, Color::Reset);
    }

    #[test]
    fn test_text_is_clipped() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 8, 1));
        let mut surface = BufferSurface::new(&mut buf, Rect::new(0, 0, 5, 1));
        surface.draw_text(Position::new(2, 0), "General", Color::White, 20);
        assert_eq!(row(&buf, 0), "  Gen   ");
    }

    #[test]
    fn test_text_outside_area_is_dropped() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 1));
        let mut surface = BufferSurface::new(&mut buf, Rect::new(0, 0, 4, 1));
        surface.draw_text(Position::new(4, 0), "x", Color::White, 1);
        assert_eq!(row(&buf, 0), "    ");
    }

    #[test]
    fn test_symbol_table_round_trips_edges() {
        for edges in 1..16u8 {
            let vertical = edges & (UP | DOWN);
            let horizontal = edges & (LEFT | RIGHT);
            // single-sided strokes widen to a full bar
            if vertical == 0 || horizontal == 0 {
                continue;
            }
            assert_eq!(edges_of(symbol_for(edges)), edges, "edges {edges:#06b}");
        }
    }
}

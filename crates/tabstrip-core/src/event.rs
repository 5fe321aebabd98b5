//! Input messages understood by the tab control
//!
//! The surrounding framework owns event dispatch; it translates raw input
//! into [`Message`] values in control-local coordinates and hands them to
//! the control, which either consumes them or returns them unhandled.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect, Size};

use crate::page::TabHandle;

/// Messages that can be dispatched to a tab control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Message {
    // === Pointer ===
    /// Primary button pressed at a control-local position
    Click(Position),
    /// Pointer moved; `None` when it left the control
    Hover(Option<Position>),

    // === Geometry ===
    /// The control was resized
    Resize(Size),

    // === Navigation ===
    /// Select the page with the given handle
    SelectTab(TabHandle),
    /// Scroll the header strip one button to the left
    ScrollLeft,
    /// Scroll the header strip one button to the right
    ScrollRight,

    // === No-op ===
    /// No operation (used for optional returns)
    #[default]
    None,
}

impl Message {
    /// Converts a terminal mouse event into a control-local message.
    ///
    /// `area` is where the control is rendered on screen. Presses outside
    /// the area and buttons other than the primary one produce `None`;
    /// movement outside the area produces `Hover(None)` so hover styling
    /// can be cleared.
    ///
    /// # Example
    ///
    /// ```
    /// use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    /// use ratatui::layout::{Position, Rect};
    /// use tabstrip_core::Message;
    ///
    /// let event = MouseEvent {
    ///     kind: MouseEventKind::Down(MouseButton::Left),
    ///     column: 12,
    ///     row: 3,
    ///     modifiers: KeyModifiers::NONE,
    /// };
    /// let msg = Message::from_mouse(&event, Rect::new(10, 2, 40, 10));
    /// assert_eq!(msg, Some(Message::Click(Position::new(2, 1))));
    /// ```
    #[must_use]
    pub fn from_mouse(event: &MouseEvent, area: Rect) -> Option<Message> {
        let screen = Position::new(event.column, event.row);
        let local = area
            .contains(screen)
            .then(|| Position::new(screen.x - area.x, screen.y - area.y));

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => local.map(Message::Click),
            MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(Message::Hover(local)),
            _ => None,
        }
    }

    /// Returns true if this is the no-op message
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Message::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_default_is_none() {
        assert!(Message::default().is_none());
        assert!(!Message::ScrollLeft.is_none());
    }

    #[test]
    fn test_left_click_inside_is_translated() {
        let area = Rect::new(5, 5, 20, 10);
        let msg = Message::from_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), 5, 6), area);
        assert_eq!(msg, Some(Message::Click(Position::new(0, 1))));
    }

    #[test]
    fn test_click_outside_is_dropped() {
        let area = Rect::new(5, 5, 20, 10);
        let msg = Message::from_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), 30, 6), area);
        assert_eq!(msg, None);
    }

    #[test]
    fn test_right_click_is_dropped() {
        let area = Rect::new(0, 0, 20, 10);
        let msg = Message::from_mouse(&mouse(MouseEventKind::Down(MouseButton::Right), 1, 1), area);
        assert_eq!(msg, None);
    }

    #[test]
    fn test_move_outside_clears_hover() {
        let area = Rect::new(0, 0, 20, 10);
        let inside = Message::from_mouse(&mouse(MouseEventKind::Moved, 3, 2), area);
        assert_eq!(inside, Some(Message::Hover(Some(Position::new(3, 2)))));

        let outside = Message::from_mouse(&mouse(MouseEventKind::Moved, 40, 2), area);
        assert_eq!(outside, Some(Message::Hover(None)));
    }

    #[test]
    fn test_scroll_wheel_is_ignored() {
        let area = Rect::new(0, 0, 20, 10);
        let msg = Message::from_mouse(&mouse(MouseEventKind::ScrollDown, 3, 2), area);
        assert_eq!(msg, None);
    }
}

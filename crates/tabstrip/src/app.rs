//! Demo application state

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tabstrip_core::{CellWidth, CoreResult, Message, TabControlConfig, TabTheme};
use tabstrip_ui::{TabControl, TabControlView};

const HELP: &str = "a:add  i:insert  d:remove  c:clear  tab:next  \u{2190}/\u{2192}:scroll  +/-:width  f:fit  q:quit";

/// The demo: one tab control filling the screen above a status line.
pub struct DemoApp {
    control: TabControl,
    theme: TabTheme,
    /// Screen area the control was last rendered to
    area: Rect,
    next_page: usize,
    status: String,
    should_quit: bool,
}

impl DemoApp {
    pub fn new(config: &TabControlConfig, pages: usize) -> Self {
        let mut app = DemoApp {
            control: TabControl::with_config(config),
            theme: config.theme.clone(),
            area: Rect::default(),
            next_page: 1,
            status: String::new(),
            should_quit: false,
        };
        for _ in 0..pages {
            app.add_page();
        }
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let [main, status] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

        if main.as_size() != self.control.size() {
            self.control
                .handle_message(&Message::Resize(main.as_size()));
        }
        self.area = main;

        frame.render_widget(TabControlView::new(&self.control, &self.theme), main);
        if let Some(content) = self.control.page_area(main) {
            let body = Paragraph::new(self.page_lines())
                .style(Style::default().fg(self.theme.colors.text));
            frame.render_widget(body, content);
        }
        frame.render_widget(Paragraph::new(self.status_line()), status);
    }

    fn page_lines(&self) -> Vec<Line<'static>> {
        let (Some(page), Some(handle)) =
            (self.control.selected_tab(), self.control.selected_handle())
        else {
            return vec![Line::from("No pages. Press `a` to add one.")];
        };
        vec![
            Line::from(page.text().to_string()).bold(),
            Line::from(format!("name:   {}", page.name())),
            Line::from(format!("handle: {handle}")),
            Line::from(format!("bounds: {}", page.bounds())),
            Line::from(""),
            Line::from(HELP).dim(),
        ]
    }

    fn status_line(&self) -> Line<'static> {
        let selected = self
            .control
            .selected_index()
            .map_or_else(|| "-".to_string(), |index| index.to_string());
        Line::from(format!(
            " {} pages | selected {} | view {} | {:?} | {}",
            self.control.tab_count(),
            selected,
            self.control.view_index(),
            self.control.overflow_mode(),
            self.status
        ))
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if let Err(e) = self.apply_key(key) {
            tracing::warn!("key {:?} failed: {}", key.code, e);
            self.status = e.to_string();
        }
    }

    fn apply_key(&mut self, key: KeyEvent) -> CoreResult<()> {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) | (_, KeyCode::Char('q')) => {
                self.should_quit = true;
            }
            (_, KeyCode::Char('a')) => self.add_page(),
            (_, KeyCode::Char('i')) => self.insert_page()?,
            (_, KeyCode::Char('d')) => self.remove_selected(),
            (_, KeyCode::Char('c')) => {
                self.control.tab_pages_mut().clear();
                self.status = "cleared".to_string();
            }
            (_, KeyCode::Left) => {
                self.control.handle_message(&Message::ScrollLeft);
            }
            (_, KeyCode::Right) => {
                self.control.handle_message(&Message::ScrollRight);
            }
            (_, KeyCode::Tab) => self.cycle(true)?,
            (_, KeyCode::BackTab) => self.cycle(false)?,
            (_, KeyCode::Char('+')) => self.resize_selected(true)?,
            (_, KeyCode::Char('-')) => self.resize_selected(false)?,
            (_, KeyCode::Char('f')) => {
                if let Some(index) = self.control.selected_index() {
                    let width = self.control.fit_page_button_to_text(index, &CellWidth)?;
                    self.status = format!("fitted to {width}");
                }
            }
            _ => {}
        }
        Ok(())
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let Some(msg) = Message::from_mouse(&mouse, self.area) else {
            return;
        };
        if let Some(Message::Click(at)) = self.control.handle_message(&msg) {
            self.status = format!("content click at {},{}", at.x, at.y);
        }
    }

    fn add_page(&mut self) {
        let n = self.next_page;
        self.next_page += 1;
        self.control
            .tab_pages_mut()
            .add_keyed(format!("page{n}"), format!("Page {n}"));
    }

    fn insert_page(&mut self) -> CoreResult<()> {
        let n = self.next_page;
        self.next_page += 1;
        let index = self.control.selected_index().unwrap_or(0);
        let handle = self
            .control
            .tab_pages_mut()
            .insert_keyed(index, format!("page{n}"), format!("Page {n}"))?;
        self.control.set_selected_tab(handle);
        Ok(())
    }

    fn remove_selected(&mut self) {
        let Some(handle) = self.control.selected_handle() else {
            return;
        };
        if let Some(page) = self.control.tab_pages_mut().remove(handle) {
            self.status = format!("removed {}", page.text());
        }
    }

    fn cycle(&mut self, forward: bool) -> CoreResult<()> {
        let count = self.control.tab_count();
        if count == 0 {
            return Ok(());
        }
        let current = self.control.selected_index().unwrap_or(0);
        let next = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
        self.control.select_tab(Some(next))
    }

    fn resize_selected(&mut self, grow: bool) -> CoreResult<()> {
        let Some(index) = self.control.selected_index() else {
            return Ok(());
        };
        let width = self.control.header_button(index).map_or(0, |b| b.width());
        let width = if grow {
            width.saturating_add(1)
        } else {
            width.saturating_sub(1).max(1)
        };
        self.control.set_page_button_width(index, width)
    }
}

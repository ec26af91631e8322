//! Row detail popup
//!
//! Lays out every field of the selected record: the uppercased key on one
//! line and the formatted value below it. Closing is reported as
//! [`Action::CloseDetail`] so the owning table can update its controller.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::model::record::{self, Record};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Margin, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

const CLOSE_LABEL: &str = "[ Close ]";
const MAX_WIDTH: u16 = 72;

/// Detail popup for one record
#[derive(Default)]
pub struct DetailView {
    pub scroll_offset: usize,
    /// Popup area of the last draw; clicks outside it dismiss the popup
    popup: Rect,
    close_button: Rect,
}

impl DetailView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget scroll position, called when a new row is opened
    pub fn reset(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn draw_with_record(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        title: &str,
        index: usize,
        rec: &Record,
    ) -> Result<()> {
        let content = build_detail_lines(rec);

        let width = MAX_WIDTH.min(area.width.saturating_sub(4));
        let height = (content.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup = centered_popup(area, width, height);
        self.popup = popup;

        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" #{} {} ", index + 1, title))
            .title_style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )
            .border_style(Style::default().fg(Color::Magenta));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let content_area = Rect {
            height: inner.height.saturating_sub(2),
            ..inner
        };
        let footer_area = Rect {
            y: inner.y + inner.height.saturating_sub(1),
            height: inner.height.min(1),
            ..inner
        };

        let total = content.len();
        let visible_height = content_area.height as usize;
        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        frame.render_widget(
            Paragraph::new(content).scroll((self.scroll_offset as u16, 0)),
            content_area,
        );

        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(max_scroll).position(self.scroll_offset);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                popup.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        let label_width = (CLOSE_LABEL.chars().count() as u16).min(footer_area.width);
        self.close_button = Rect {
            x: footer_area.x + (footer_area.width - label_width) / 2,
            width: label_width,
            ..footer_area
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                CLOSE_LABEL,
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center),
            footer_area,
        );

        Ok(())
    }
}

impl Component for DetailView {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter | KeyCode::Backspace => {
                Some(Action::CloseDetail)
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(10);
                None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let action = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let pointer = Position::new(mouse.column, mouse.row);
                let outside = !self.popup.contains(pointer);
                let on_close = self.close_button.contains(pointer);
                (outside || on_close).then_some(Action::CloseDetail)
            }
            MouseEventKind::ScrollDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            MouseEventKind::ScrollUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Needs the selected record, so the app calls draw_with_record
        Ok(())
    }
}

/// Glyph shown before a field label, chosen from the key name
pub fn field_icon(key: &str) -> Option<&'static str> {
    let key = key.to_lowercase();
    let has = |needles: &[&str]| needles.iter().any(|n| key.contains(n));

    if has(&["name", "user"]) {
        Some("◉")
    } else if has(&["role", "job", "position"]) {
        Some("◆")
    } else if has(&["age", "date", "time"]) {
        Some("◷")
    } else if has(&["status", "state"]) {
        Some("◈")
    } else {
        None
    }
}

/// Build the field list for a record
pub fn build_detail_lines(rec: &Record) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if rec.is_empty() {
        lines.push(Line::from(Span::styled(
            record::MISSING_VALUE,
            Style::default().fg(Color::DarkGray),
        )));
        return lines;
    }

    for (position, (key, value)) in rec.iter().enumerate() {
        if position > 0 {
            lines.push(Line::from(""));
        }

        let mut label = Vec::new();
        if let Some(icon) = field_icon(key) {
            label.push(Span::styled(
                format!("{} ", icon),
                Style::default().fg(Color::Magenta),
            ));
        }
        label.push(Span::styled(
            key.to_uppercase(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::from(label));

        let value_style = if record::is_structured(value) {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        for text in record::detail_text(Some(value)).lines() {
            lines.push(Line::from(Span::styled(format!("  {}", text), value_style)));
        }
    }

    lines
}

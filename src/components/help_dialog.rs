//! Help dialog component
//!
//! Keyboard and mouse reference, scrollable with keys or the wheel.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Rows",
        &[
            ("j / ↓", "Next row"),
            ("k / ↑", "Previous row"),
            ("g / G", "First / last row"),
            ("Ctrl+d / PgDn", "Ten rows down"),
            ("Ctrl+u / PgUp", "Ten rows up"),
            ("h / l", "Scroll left / right"),
            ("Enter / Space", "Open row details"),
        ],
    ),
    (
        "Gallery",
        &[
            ("Tab", "Next table"),
            ("Shift+Tab", "Previous table"),
            ("1-9", "Jump to table"),
        ],
    ),
    (
        "Row Details",
        &[
            ("j / k", "Scroll fields"),
            ("Esc / q / Enter", "Close"),
        ],
    ),
    (
        "Mouse",
        &[
            ("Move", "Highlight the row under the pointer"),
            ("Click row", "Open row details"),
            ("Click tab", "Switch table"),
            ("Click outside", "Close row details"),
            ("Wheel", "Scroll"),
        ],
    ),
    (
        "General",
        &[
            ("?", "Show this help"),
            ("t", "Switch light / dark theme"),
            ("r", "Reload the records file"),
            ("q / Esc", "Quit"),
            ("Ctrl+c", "Quit immediately"),
        ],
    ),
];

const KEY_COLUMN: usize = 16;

/// Help dialog showing all shortcuts
#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl HelpDialog {
    fn scroll_by(&mut self, delta: isize) {
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta);
    }
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q' | '?') => return Ok(Some(Action::CloseModal)),
            KeyCode::Char('j') | KeyCode::Down => self.scroll_by(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_by(-1),
            KeyCode::PageDown => self.scroll_by(10),
            KeyCode::PageUp => self.scroll_by(-10),
            _ => {}
        }
        Ok(None)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll_by(1),
            MouseEventKind::ScrollUp => self.scroll_by(-1),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let content = build_help_content();
        let total = content.len();

        let popup = centered_popup(
            area,
            60.min(area.width.saturating_sub(4)),
            (total as u16 + 2).min(area.height.saturating_sub(2)),
        );
        frame.render_widget(Clear, popup);

        let visible_height = popup.height.saturating_sub(2) as usize;
        let max_scroll = total.saturating_sub(visible_height);
        self.scroll_offset = self.scroll_offset.min(max_scroll);

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Shortcuts ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll_offset as u16, 0));
        frame.render_widget(paragraph, popup);

        if total > visible_height {
            let mut state = ScrollbarState::new(max_scroll).position(self.scroll_offset);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                popup.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut state,
            );
        }

        Ok(())
    }
}

fn build_help_content() -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    for (section, shortcuts) in SHORTCUTS {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("  {}", section), heading)));
        for (key, description) in *shortcuts {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:width$}", key, width = KEY_COLUMN), key_style),
                Span::raw(*description),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  q, Esc or ? closes this help",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

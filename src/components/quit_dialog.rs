//! Quit confirmation dialog component

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const QUIT_LABEL: &str = " y Quit ";
const STAY_LABEL: &str = " n Stay ";
const BUTTON_GAP: u16 = 4;

/// Quit confirmation with clickable Quit and Stay buttons
#[derive(Default)]
pub struct QuitDialog {
    quit_button: Rect,
    stay_button: Rect,
}

impl QuitDialog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for QuitDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('y' | 'Y' | 'q') => Some(Action::ForceQuit),
            KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        let pointer = Position::new(mouse.column, mouse.row);
        if self.quit_button.contains(pointer) {
            Ok(Some(Action::ForceQuit))
        } else if self.stay_button.contains(pointer) {
            Ok(Some(Action::CloseModal))
        } else {
            Ok(None)
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup = centered_popup(area, 40, 7);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Quit? ")
            .title_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let question = Rect {
            y: inner.y + 1,
            height: inner.height.min(1),
            ..inner
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Leave the table gallery?",
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            question,
        );

        // Buttons centred on the last inner line
        let quit_width = QUIT_LABEL.len() as u16;
        let stay_width = STAY_LABEL.len() as u16;
        let total = quit_width + BUTTON_GAP + stay_width;
        let y = inner.y + inner.height.saturating_sub(2);
        let x = inner.x + inner.width.saturating_sub(total) / 2;
        self.quit_button = Rect::new(x, y, quit_width, 1).intersection(inner);
        self.stay_button = Rect::new(x + quit_width + BUTTON_GAP, y, stay_width, 1).intersection(inner);

        let button = |color: Color| {
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD)
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(QUIT_LABEL, button(Color::Green)))),
            self.quit_button,
        );
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(STAY_LABEL, button(Color::Red)))),
            self.stay_button,
        );

        Ok(())
    }
}

//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that routes events to the active table, the row detail popup or the top
//! modal. It owns no table state itself; each table keeps its own cursor and
//! detail selection.

use crate::action::Action;
use crate::component::Component;
use crate::components::{calculate_main_layout, DetailView, HelpDialog, QuitDialog, TableComponent};
use crate::model::{Modal, ModalStack};
use crate::services;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// One table per gallery entry
    pub tables: Vec<TableComponent>,

    /// Index of the table currently shown
    pub active: usize,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: Option<String>,

    /// Records file the tables were loaded from, for reloading
    pub data_source: Option<PathBuf>,

    /// Screen position of each tab title from the last draw
    tab_areas: Vec<Rect>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub detail_view: DetailView,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

impl App {
    pub fn new(tables: Vec<TableComponent>) -> App {
        App {
            tables,
            active: 0,
            modals: ModalStack::new(),
            should_quit: false,
            status_message: None,
            data_source: None,
            tab_areas: Vec::new(),
            detail_view: DetailView::new(),
            quit_dialog: QuitDialog::new(),
            help_dialog: HelpDialog::default(),
        }
    }

    pub fn with_data_source(mut self, path: Option<PathBuf>) -> App {
        self.data_source = path;
        self
    }

    pub fn active_table(&self) -> Option<&TableComponent> {
        self.tables.get(self.active)
    }

    fn active_table_mut(&mut self) -> Option<&mut TableComponent> {
        self.tables.get_mut(self.active)
    }

    fn detail_open(&self) -> bool {
        self.active_table().is_some_and(|t| t.detail().is_open())
    }

    /// A popup or modal currently takes the input
    fn overlay_open(&self) -> bool {
        !self.modals.is_empty() || self.detail_open()
    }

    fn toggle_theme(&mut self) {
        let Some(theme) = self.active_table().map(|t| t.theme().toggled()) else {
            return;
        };
        for table in &mut self.tables {
            table.set_theme(theme);
        }
        log::info!("Switched to the {} theme", theme.name());
        self.status_message = Some(format!("{} theme", theme.name()));
    }

    fn reload_data(&mut self) {
        let Some(ref path) = self.data_source else {
            self.status_message = Some("Demo data cannot be reloaded".to_string());
            return;
        };

        match services::load_records(path) {
            Ok(records) => {
                for table in &mut self.tables {
                    table.set_records(records.clone());
                }
                self.status_message = Some(format!("Reloaded {} records", records.len()));
            }
            Err(e) => {
                log::warn!("Reload of {} failed: {}", path.display(), e);
                self.status_message = Some(format!("Reload failed: {}", e));
            }
        }
    }

    fn select_table(&mut self, index: usize) {
        if index < self.tables.len() && index != self.active {
            self.active = index;
            self.status_message = None;
            log::debug!("Showing table {} '{}'", index, self.tables[index].title());
        }
    }
}

impl Component for App {
    fn init(&mut self) -> Result<()> {
        for table in &mut self.tables {
            table.init()?;
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        if let Some(modal) = self.modals.top().cloned() {
            return self.handle_modal_key_event(&modal, key);
        }

        if self.detail_open() {
            return self.detail_view.handle_key_event(key);
        }

        let action = match key.code {
            KeyCode::Tab => Some(Action::NextTable),
            KeyCode::BackTab => Some(Action::PrevTable),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            KeyCode::Char('r') => Some(Action::ReloadData),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::OpenQuitDialog),
            KeyCode::Char(c @ '1'..='9') => Some(Action::SelectTable(c as usize - '1' as usize)),
            _ => match self.active_table_mut() {
                Some(table) => table.handle_key_event(key)?,
                None => None,
            },
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if let Some(modal) = self.modals.top().cloned() {
            return match modal {
                Modal::QuitConfirm => self.quit_dialog.handle_mouse_event(mouse),
                Modal::Help => self.help_dialog.handle_mouse_event(mouse),
            };
        }

        if self.detail_open() {
            return self.detail_view.handle_mouse_event(mouse);
        }

        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let pointer = Position::new(mouse.column, mouse.row);
            if let Some(index) = self.tab_areas.iter().position(|r| r.contains(pointer)) {
                return Ok(Some(Action::SelectTable(index)));
            }
        }

        match self.active_table_mut() {
            Some(table) => table.handle_mouse_event(mouse),
            None => Ok(None),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick | Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Gallery
            // ─────────────────────────────────────────────────────────────────
            Action::NextTable => {
                if !self.tables.is_empty() {
                    self.select_table((self.active + 1) % self.tables.len());
                }
            }
            Action::PrevTable => {
                if !self.tables.is_empty() {
                    let len = self.tables.len();
                    self.select_table((self.active + len - 1) % len);
                }
            }
            Action::SelectTable(index) => self.select_table(index),
            Action::ToggleTheme => self.toggle_theme(),
            Action::ReloadData => self.reload_data(),

            // ─────────────────────────────────────────────────────────────────
            // Row Details
            // ─────────────────────────────────────────────────────────────────
            Action::RowActivated(index) => {
                let title = self.active_table().map(|t| t.title().to_string());
                if let Some(title) = title {
                    self.status_message = Some(format!("Row {} selected in {}", index + 1, title));
                }
                self.detail_view.reset();
            }
            Action::CloseDetail => {
                if let Some(table) = self.active_table_mut() {
                    table.close_detail();
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.toggle(Modal::Help);
            }
            Action::OpenQuitDialog => {
                if self.modals.top() != Some(&Modal::QuitConfirm) {
                    self.modals.push(Modal::QuitConfirm);
                }
            }
            Action::CloseModal => {
                self.modals.pop();
            }

            // Row navigation, scrolling, hover and activation
            other => {
                if let Some(table) = self.active_table_mut() {
                    return table.update(other);
                }
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_main_layout(area);

        self.render_tabs(frame, layout.tabs);

        if let Some(table) = self.tables.get_mut(self.active) {
            table.draw(frame, layout.table)?;
        } else {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "No tables to show",
                    Style::default().fg(Color::DarkGray),
                )),
                layout.table,
            );
        }

        self.render_status_bar(frame, layout.status);

        if let Some(table) = self.tables.get(self.active) {
            if let Some((index, record)) = table.detail_record() {
                let title = table.options().detail_title.clone();
                self.detail_view
                    .draw_with_record(frame, area, &title, index, record)?;
            }
        }

        // Draw modal overlay if active
        if let Some(modal) = self.modals.top().cloned() {
            self.draw_modal(frame, area, &modal)?;
        }

        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

/// Screen rects of each tab title as laid out by the `Tabs` widget:
/// one column of padding each side and a one-column divider between tabs
fn tab_hit_areas(area: Rect, titles: &[&str]) -> Vec<Rect> {
    let mut x = area.x;
    let right = area.x + area.width;
    let mut areas = Vec::with_capacity(titles.len());

    for title in titles {
        let width = (title.width() as u16).saturating_add(2);
        let clipped = width.min(right.saturating_sub(x));
        areas.push(Rect::new(x, area.y, clipped, area.height.min(1)));
        x = x.saturating_add(width).saturating_add(1);
    }

    areas
}

impl App {
    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            Modal::Help => self.help_dialog.draw(frame, area)?,
        }
        Ok(())
    }

    fn render_tabs(&mut self, frame: &mut Frame, area: Rect) {
        let titles: Vec<&str> = self.tables.iter().map(|t| t.title()).collect();
        self.tab_areas = tab_hit_areas(area, &titles);

        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::BOTTOM))
            .select(self.active)
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_widget(tabs, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![];

        if let Some(table) = self.active_table() {
            spans.push(Span::styled(
                format!(" {}/{} ", self.active + 1, self.tables.len()),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));

            // Read-only tables have no cursor, so only the count is shown
            let total = table.rendered().rows.len();
            let position = if table.options().clickable && total > 0 {
                format!("row {}/{}", table.cursor() + 1, total)
            } else {
                format!("{} rows", total)
            };
            spans.push(Span::styled(position, Style::default().fg(Color::White)));
            if !table.options().clickable {
                spans.push(Span::styled(
                    " (read-only)",
                    Style::default().fg(Color::DarkGray),
                ));
            }
        }

        if let Some(ref status) = self.status_message {
            spans.push(Span::styled(
                format!("  {} ", status),
                Style::default().fg(Color::Yellow),
            ));
        }

        let hint = if self.overlay_open() {
            "  Esc close"
        } else {
            "  ? help  Tab next  t theme  q quit"
        };
        spans.push(Span::styled(hint, Style::default().fg(Color::DarkGray)));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

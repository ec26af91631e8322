//! Table component for record display
//!
//! Rendering happens in two steps. [`render`] turns records and a style
//! into a [`RenderedTable`], a plain value with every cell and colour
//! resolved. Drawing then lays that value out as padded, styled lines and
//! overlays the hover and cursor state.

use crate::action::Action;
use crate::component::Component;
use crate::model::record::{self, Record};
use crate::model::DetailController;
use crate::style::resolve;
use crate::style::{BorderSpec, BorderStyle, CellPadding, RowStyle, StyleConfig, TextAlign, Theme};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Margin, Position, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest a column may grow before its cells are truncated
pub const MAX_COLUMN_WIDTH: usize = 50;

pub const EMPTY_PLACEHOLDER: &str = "No data available";

const CURSOR_GUTTER: &str = "▸ ";
const EMPTY_GUTTER: &str = "  ";
const GUTTER_WIDTH: usize = 2;

const DASHED: border::Set = border::Set {
    top_left: "┌",
    top_right: "┐",
    bottom_left: "└",
    bottom_right: "┘",
    vertical_left: "╎",
    vertical_right: "╎",
    horizontal_top: "╌",
    horizontal_bottom: "╌",
};

const DOTTED: border::Set = border::Set {
    top_left: "┌",
    top_right: "┐",
    bottom_left: "└",
    bottom_right: "┘",
    vertical_left: "┆",
    vertical_right: "┆",
    horizontal_top: "┄",
    horizontal_bottom: "┄",
};

/// Interaction options for one table
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    pub title: Option<String>,
    /// Rows respond to activation only when set
    pub clickable: bool,
    /// Open the detail view on activation
    pub show_detail: bool,
    pub detail_title: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            title: None,
            clickable: true,
            show_detail: true,
            detail_title: "Row Details".to_string(),
        }
    }
}

/// One resolved body row
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRow {
    pub index: usize,
    pub cells: Vec<String>,
    pub style: RowStyle,
}

/// Fully resolved table, independent of terminal size and interaction
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedTable {
    pub title: Option<String>,
    /// Set instead of header and rows when there is nothing to show
    pub placeholder: Option<String>,
    pub header: Vec<String>,
    pub header_style: RowStyle,
    pub rows: Vec<RenderedRow>,
    pub column_widths: Vec<usize>,
    pub header_separator: bool,
    pub row_separator: bool,
    pub separator_color: String,
    pub border: Option<BorderSpec>,
    pub shadow: bool,
    pub padding: CellPadding,
    pub align: TextAlign,
    pub interactive: bool,
}

/// Styled lines plus the body row each line belongs to
pub struct TableLines {
    pub lines: Vec<Line<'static>>,
    pub rows_by_line: Vec<Option<usize>>,
    pub width: usize,
}

/// Resolve records and style into a [`RenderedTable`]
///
/// Columns come from the first record. Fields missing from a later record
/// render as empty cells; fields only present in later records are not
/// shown as columns.
pub fn render(records: &[Record], config: &StyleConfig, options: &TableOptions) -> RenderedTable {
    let header_columns = record::columns(records);

    let rows: Vec<RenderedRow> = records
        .iter()
        .enumerate()
        .map(|(index, rec)| RenderedRow {
            index,
            cells: header_columns
                .iter()
                .map(|key| single_line(&record::cell_text(rec.get(key))))
                .collect(),
            style: resolve::resolve_row_style(index, config),
        })
        .collect();

    let header: Vec<String> = header_columns.iter().map(|k| k.to_uppercase()).collect();

    let mut column_widths: Vec<usize> = header.iter().map(|h| h.width()).collect();
    for row in &rows {
        for (i, cell) in row.cells.iter().enumerate() {
            column_widths[i] = column_widths[i].max(cell.width());
        }
    }
    for width in &mut column_widths {
        *width = (*width).clamp(1, MAX_COLUMN_WIDTH);
    }

    RenderedTable {
        title: options.title.clone(),
        placeholder: records.is_empty().then(|| EMPTY_PLACEHOLDER.to_string()),
        header,
        header_style: resolve::resolve_header_style(config),
        rows,
        column_widths,
        header_separator: resolve::draws_header_separator(config),
        row_separator: resolve::draws_row_separator(config),
        separator_color: resolve::separator_color(config).to_string(),
        border: resolve::resolve_border(config),
        shadow: config.shadow,
        padding: resolve::resolve_padding(config),
        align: resolve::resolve_alignment(config),
        interactive: options.clickable,
    }
}

impl RenderedTable {
    fn gutter_width(&self) -> usize {
        if self.interactive {
            GUTTER_WIDTH
        } else {
            0
        }
    }

    /// Display width of one full table line
    pub fn line_width(&self) -> usize {
        let pad = self.padding.horizontal as usize * 2;
        self.gutter_width() + self.column_widths.iter().map(|w| w + pad).sum::<usize>()
    }

    fn header_line_count(&self) -> usize {
        if self.header_separator {
            2
        } else {
            1
        }
    }

    /// Line number (within the table body) holding the row at `index`
    pub fn line_of_row(&self, index: usize) -> usize {
        let per_row = if self.row_separator { 2 } else { 1 };
        self.header_line_count() + index * per_row
    }

    /// Lay out the table as styled lines
    ///
    /// `highlight` is painted with `hover` colours when given; `cursor`
    /// gets the gutter marker on interactive tables.
    pub fn lines(
        &self,
        highlight: Option<usize>,
        hover: Option<&RowStyle>,
        cursor: Option<usize>,
    ) -> TableLines {
        let width = self.line_width();
        let mut lines = Vec::new();
        let mut rows_by_line = Vec::new();

        if let Some(ref placeholder) = self.placeholder {
            lines.push(Line::from(Span::styled(
                placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            )));
            rows_by_line.push(None);
            return TableLines {
                lines,
                rows_by_line,
                width,
            };
        }

        let header_style = self.header_style.to_style().add_modifier(Modifier::BOLD);
        lines.push(self.compose_line(&self.header, header_style, None));
        rows_by_line.push(None);

        let rule_style = match resolve::parse_color(&self.separator_color) {
            Some(color) => Style::default().fg(color),
            None => Style::default(),
        };

        if self.header_separator {
            lines.push(Line::from(Span::styled("━".repeat(width), rule_style)));
            rows_by_line.push(None);
        }

        for (position, row) in self.rows.iter().enumerate() {
            if self.row_separator && position > 0 {
                lines.push(Line::from(Span::styled("─".repeat(width), rule_style)));
                rows_by_line.push(None);
            }

            let style = match hover {
                Some(hover_style) if highlight == Some(row.index) => hover_style.to_style(),
                _ => row.style.to_style(),
            };
            let marker = (self.interactive && cursor == Some(row.index)).then_some(CURSOR_GUTTER);
            lines.push(self.compose_line(&row.cells, style, marker));
            rows_by_line.push(Some(row.index));
        }

        TableLines {
            lines,
            rows_by_line,
            width,
        }
    }

    fn compose_line(&self, cells: &[String], style: Style, marker: Option<&str>) -> Line<'static> {
        let pad = " ".repeat(self.padding.horizontal as usize);
        let mut text = String::new();

        if self.interactive {
            text.push_str(marker.unwrap_or(EMPTY_GUTTER));
        }
        for (i, width) in self.column_widths.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            text.push_str(&pad);
            text.push_str(&align(&truncate(cell, *width), *width, self.align));
            text.push_str(&pad);
        }

        Line::from(Span::styled(text, style))
    }
}

/// Flatten control characters so a cell stays on one line
fn single_line(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Cut `text` to `width` display columns, marking the cut with `…`
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Pad `text` to exactly `width` display columns
pub fn align(text: &str, width: usize, alignment: TextAlign) -> String {
    let gap = width.saturating_sub(text.width());
    match alignment {
        TextAlign::Right => format!("{}{}", " ".repeat(gap), text),
        TextAlign::Center => {
            let left = gap / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(gap - left))
        }
        _ => format!("{}{}", text, " ".repeat(gap)),
    }
}

fn border_set(spec: &BorderSpec) -> border::Set {
    let rounded = spec.radius > 0;
    let mut set = match spec.style {
        BorderStyle::Double => return border::DOUBLE,
        BorderStyle::Dashed => DASHED,
        BorderStyle::Dotted => DOTTED,
        _ => border::PLAIN,
    };
    if rounded {
        set.top_left = border::ROUNDED.top_left;
        set.top_right = border::ROUNDED.top_right;
        set.bottom_left = border::ROUNDED.bottom_left;
        set.bottom_right = border::ROUNDED.bottom_right;
    }
    set
}

/// Callback invoked with the record and its index on activation
pub type RowActivateFn = Box<dyn FnMut(&Record, usize)>;

/// Table component: records, style, cursor and detail selection
pub struct TableComponent {
    records: Vec<Record>,
    /// Style as given, before the theme fills unset colours
    style: StyleConfig,
    theme: Theme,
    /// `style` with the theme applied; what rendering reads
    config: StyleConfig,
    options: TableOptions,
    /// Derived from records, config and options; rebuilt when they change
    rendered: RenderedTable,
    detail: DetailController,
    on_row_activate: Option<RowActivateFn>,
    cursor: usize,
    hovered: Option<usize>,
    scroll: usize,
    h_scroll: usize,
    /// Inner area of the last draw, for mouse hit-testing
    viewport: Rect,
    rows_by_line: Vec<Option<usize>>,
}

impl TableComponent {
    pub fn new(records: Vec<Record>, style: StyleConfig, options: TableOptions) -> Self {
        let theme = Theme::default();
        let config = style.clone().with_theme(theme);
        let rendered = render(&records, &config, &options);
        Self {
            records,
            style,
            theme,
            config,
            options,
            rendered,
            detail: DetailController::new(),
            on_row_activate: None,
            cursor: 0,
            hovered: None,
            scroll: 0,
            h_scroll: 0,
            viewport: Rect::default(),
            rows_by_line: Vec::new(),
        }
    }

    /// Register the activation callback
    pub fn on_row_activate<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&Record, usize) + 'static,
    {
        self.on_row_activate = Some(Box::new(callback));
        self
    }

    pub fn set_records(&mut self, records: Vec<Record>) {
        self.records = records;
        self.refresh();
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.set_theme(theme);
        self
    }

    /// Replace the style; the current theme still fills unset colours
    pub fn set_config(&mut self, style: StyleConfig) {
        self.style = style;
        self.refresh();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.refresh();
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    fn refresh(&mut self) {
        self.config = self.style.clone().with_theme(self.theme);
        self.rendered = render(&self.records, &self.config, &self.options);
        let len = self.records.len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
        self.hovered = self.hovered.filter(|i| *i < len);
        if self.detail.current().is_some_and(|i| i >= len) {
            self.detail.close();
        }
        self.scroll = 0;
        self.h_scroll = 0;
    }

    pub fn rendered(&self) -> &RenderedTable {
        &self.rendered
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn title(&self) -> &str {
        self.options.title.as_deref().unwrap_or("Table")
    }

    pub fn detail(&self) -> &DetailController {
        &self.detail
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The record whose detail view is open, with its index
    pub fn detail_record(&self) -> Option<(usize, &Record)> {
        let index = self.detail.current()?;
        self.records.get(index).map(|rec| (index, rec))
    }

    pub fn close_detail(&mut self) {
        if let Some(index) = self.detail.current() {
            log::debug!("Closing detail of row {} in '{}'", index, self.title());
        }
        self.detail.close();
    }

    /// Activate the row at `index`
    ///
    /// A no-op on non-clickable tables. Otherwise runs the callback, opens
    /// the detail view when enabled and reports the activation.
    pub fn activate(&mut self, index: usize) -> Option<Action> {
        if !self.options.clickable {
            return None;
        }
        let record = self.records.get(index)?;

        if let Some(callback) = self.on_row_activate.as_mut() {
            callback(record, index);
        }
        self.cursor = index;
        if self.options.show_detail {
            self.detail.open(index);
        }
        Some(Action::RowActivated(index))
    }

    /// Body row under the terminal cell, if any
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let v = self.viewport;
        if !v.contains(Position::new(column, row)) {
            return None;
        }
        let line = (row - v.y) as usize + self.scroll;
        self.rows_by_line.get(line).copied().flatten()
    }

    fn total_lines(&self) -> usize {
        if self.rendered.placeholder.is_some() {
            return 1;
        }
        match self.rendered.rows.len() {
            0 => self.rendered.header_line_count(),
            n => self.rendered.line_of_row(n - 1) + 1,
        }
    }

    fn visible_height(&self) -> usize {
        self.viewport.height as usize
    }

    fn max_scroll(&self) -> usize {
        self.total_lines().saturating_sub(self.visible_height())
    }

    fn move_cursor(&mut self, to: usize) {
        if self.records.is_empty() {
            return;
        }
        self.cursor = to.min(self.records.len() - 1);
        self.hovered = None;

        let height = self.visible_height();
        if height == 0 {
            return;
        }
        let line = self.rendered.line_of_row(self.cursor);
        if self.cursor == 0 {
            self.scroll = 0;
        } else if line < self.scroll {
            self.scroll = line;
        } else if line >= self.scroll + height {
            self.scroll = line + 1 - height;
        }
    }
}

impl Component for TableComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextRow),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevRow),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstRow),
            KeyCode::Char('G') | KeyCode::End => Some(Action::LastRow),
            KeyCode::Char('h') | KeyCode::Left => Some(Action::ScrollLeft),
            KeyCode::Char('l') | KeyCode::Right => Some(Action::ScrollRight),
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::PageDown)
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::PageUp)
            }
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::Enter | KeyCode::Char(' ')
                if self.options.clickable && !self.records.is_empty() =>
            {
                Some(Action::ActivateRow(self.cursor))
            }
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let action = match mouse.kind {
            MouseEventKind::Moved => {
                let row = self.row_at(mouse.column, mouse.row);
                (row != self.hovered).then_some(Action::Hover(row))
            }
            MouseEventKind::Down(MouseButton::Left) if self.options.clickable => self
                .row_at(mouse.column, mouse.row)
                .map(Action::ActivateRow),
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::NextRow => self.move_cursor(self.cursor.saturating_add(1)),
            Action::PrevRow => self.move_cursor(self.cursor.saturating_sub(1)),
            Action::FirstRow => self.move_cursor(0),
            Action::LastRow => self.move_cursor(self.records.len().saturating_sub(1)),
            Action::PageDown => self.move_cursor(self.cursor.saturating_add(10)),
            Action::PageUp => self.move_cursor(self.cursor.saturating_sub(10)),
            Action::ScrollDown => {
                self.scroll = (self.scroll + 1).min(self.max_scroll());
            }
            Action::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            Action::ScrollRight => {
                let max = self
                    .rendered
                    .line_width()
                    .saturating_sub(self.viewport.width as usize);
                self.h_scroll = (self.h_scroll + 4).min(max);
            }
            Action::ScrollLeft => {
                self.h_scroll = self.h_scroll.saturating_sub(4);
            }
            Action::Hover(row) => {
                self.hovered = row;
            }
            Action::ActivateRow(index) => return Ok(self.activate(index)),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let mut area = area;

        if let Some(ref title) = self.rendered.title {
            if area.height > 1 {
                let title_area = Rect { height: 1, ..area };
                frame.render_widget(
                    Paragraph::new(Line::from(Span::styled(
                        title.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ))),
                    title_area,
                );
                area.y += 1;
                area.height -= 1;
            }
        }

        let mut table_area = area;
        if self.rendered.shadow && area.width > 2 && area.height > 2 {
            table_area.width -= 1;
            table_area.height -= 1;

            // One column to the right and one row below, offset by a cell
            let right = Rect::new(area.right() - 1, area.y + 1, 1, table_area.height);
            let bottom = Rect::new(area.x + 1, area.bottom() - 1, table_area.width, 1);
            let shadow = Block::default().style(Style::default().bg(Color::DarkGray));
            frame.render_widget(shadow.clone(), right);
            frame.render_widget(shadow, bottom);
        }

        let block = self.rendered.border.as_ref().map(|spec| {
            let color = resolve::parse_color(&spec.color).unwrap_or(Color::DarkGray);
            Block::default()
                .borders(Borders::ALL)
                .border_set(border_set(spec))
                .border_style(Style::default().fg(color))
        });

        let inner = match block {
            Some(ref b) => b.inner(table_area),
            None => table_area,
        };
        self.viewport = inner;

        let hover = resolve::resolve_hover_style(&self.config);
        let highlight = self
            .hovered
            .or_else(|| self.options.clickable.then_some(self.cursor));
        let cursor = self.options.clickable.then_some(self.cursor);
        let content = self.rendered.lines(highlight, hover.as_ref(), cursor);

        self.scroll = self.scroll.min(self.max_scroll());
        self.h_scroll = self
            .h_scroll
            .min(content.width.saturating_sub(inner.width as usize));
        self.rows_by_line = content.rows_by_line;

        let total = content.lines.len();
        let mut paragraph = Paragraph::new(content.lines)
            .scroll((self.scroll as u16, self.h_scroll as u16));
        if self.rendered.placeholder.is_some() {
            paragraph = paragraph.alignment(Alignment::Center);
        }
        if let Some(b) = block {
            paragraph = paragraph.block(b);
        }
        frame.render_widget(paragraph, table_area);

        let visible_height = inner.height as usize;
        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible_height)).position(self.scroll);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                table_area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::resolve::{DEFAULT_HOVER_BACKGROUND, DEFAULT_ROW_BACKGROUND};
    use ratatui::{backend::TestBackend, Terminal};
    use serde_json::{json, Value};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn records(value: Value) -> Vec<Record> {
        match value {
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::Object(map) => map,
                    _ => panic!("not an object"),
                })
                .collect(),
            _ => panic!("not an array"),
        }
    }

    fn team() -> Vec<Record> {
        records(json!([
            { "name": "Alice", "age": 25, "tags": ["a", "b"] },
            { "name": "Bob", "age": 30, "tags": null },
            { "name": "Charlie", "age": 22 },
            { "name": "Diana", "age": 28, "tags": [] },
            { "name": "Ethan", "age": 35, "tags": [] },
            { "name": "Fay", "age": 41, "tags": [] },
        ]))
    }

    fn draw(table: &mut TableComponent, width: u16, height: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                table.draw(frame, area).unwrap();
            })
            .unwrap();
        terminal
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_empty_records_render_placeholder_only() {
        let rendered = render(&[], &StyleConfig::default(), &TableOptions::default());

        assert_eq!(rendered.placeholder.as_deref(), Some(EMPTY_PLACEHOLDER));
        assert!(rendered.header.is_empty());
        assert!(rendered.rows.is_empty());

        let lines = rendered.lines(None, None, None);
        assert_eq!(lines.lines.len(), 1);
        assert_eq!(lines.rows_by_line, vec![None]);
    }

    #[test]
    fn test_header_is_uppercased_keys_in_order() {
        let rendered = render(&team(), &StyleConfig::default(), &TableOptions::default());
        assert_eq!(rendered.header, vec!["NAME", "AGE", "TAGS"]);
    }

    #[test]
    fn test_cells_stringify_values() {
        let rendered = render(&team(), &StyleConfig::default(), &TableOptions::default());

        assert_eq!(rendered.rows[0].cells, vec!["Alice", "25", r#"["a","b"]"#]);
        // null and missing fields are both blank
        assert_eq!(rendered.rows[1].cells[2], "");
        assert_eq!(rendered.rows[2].cells[2], "");
    }

    #[test]
    fn test_extra_fields_in_later_records_are_ignored() {
        let data = records(json!([{ "a": 1 }, { "a": 2, "b": 3 }]));
        let rendered = render(&data, &StyleConfig::default(), &TableOptions::default());

        assert_eq!(rendered.header, vec!["A"]);
        assert_eq!(rendered.rows[1].cells, vec!["2"]);
    }

    #[test]
    fn test_rows_take_resolved_styles() {
        let config = StyleConfig {
            cycle_colors: vec!["#aaaaaa".into(), "#bbbbbb".into()],
            cycle_start: Some(2),
            cycle_step: Some(3),
            ..Default::default()
        };
        let rendered = render(&team(), &config, &TableOptions::default());

        let backgrounds: Vec<&str> = rendered
            .rows
            .iter()
            .map(|r| r.style.background.as_str())
            .collect();
        assert_eq!(
            backgrounds,
            vec![
                DEFAULT_ROW_BACKGROUND,
                "#aaaaaa",
                DEFAULT_ROW_BACKGROUND,
                DEFAULT_ROW_BACKGROUND,
                "#bbbbbb",
                DEFAULT_ROW_BACKGROUND,
            ]
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let config = StyleConfig {
            bordered: true,
            striped: true,
            ..Default::default()
        };
        let options = TableOptions::default();

        assert_eq!(render(&team(), &config, &options), render(&team(), &config, &options));
    }

    #[test]
    fn test_separator_lines_follow_config() {
        let config = StyleConfig {
            bordered: true,
            ..Default::default()
        };
        let rendered = render(&team(), &config, &TableOptions::default());
        let lines = rendered.lines(None, None, None);

        // header, header rule, then row/rule pairs without a trailing rule
        assert_eq!(lines.lines.len(), 2 + 6 * 2 - 1);
        assert_eq!(lines.rows_by_line[0], None);
        assert_eq!(lines.rows_by_line[2], Some(0));
        assert_eq!(lines.rows_by_line[3], None);
        assert_eq!(lines.rows_by_line[4], Some(1));
        assert_eq!(rendered.line_of_row(1), 4);

        let plain = render(&team(), &StyleConfig::default(), &TableOptions::default());
        assert_eq!(plain.lines(None, None, None).lines.len(), 1 + 6);
    }

    #[test]
    fn test_compact_padding_narrows_lines() {
        let normal = render(&team(), &StyleConfig::default(), &TableOptions::default());
        let compact = render(
            &team(),
            &StyleConfig {
                compact: true,
                ..Default::default()
            },
            &TableOptions::default(),
        );

        assert_eq!(normal.line_width() - compact.line_width(), 2 * 3);
    }

    #[test]
    fn test_non_clickable_has_no_gutter() {
        let options = TableOptions {
            clickable: false,
            ..Default::default()
        };
        let rendered = render(&team(), &StyleConfig::default(), &options);
        let line = &rendered.lines(None, None, Some(0)).lines[1];

        assert!(!line.spans[0].content.starts_with(CURSOR_GUTTER));
    }

    #[test]
    fn test_hover_style_paints_highlighted_row() {
        let config = StyleConfig {
            hover: true,
            ..Default::default()
        };
        let rendered = render(&team(), &config, &TableOptions::default());
        let hover = resolve::resolve_hover_style(&config).unwrap();
        let lines = rendered.lines(Some(1), Some(&hover), Some(1));

        let hovered = &lines.lines[2].spans[0];
        assert_eq!(hovered.style.bg, resolve::parse_color(DEFAULT_HOVER_BACKGROUND));
        assert!(hovered.content.starts_with(CURSOR_GUTTER));
    }

    #[test]
    fn test_truncate_and_align() {
        assert_eq!(truncate("abcdef", 4), "abc…");
        assert_eq!(truncate("abc", 4), "abc");
        assert_eq!(align("ab", 5, TextAlign::Right), "   ab");
        assert_eq!(align("ab", 5, TextAlign::Center), " ab  ");
        assert_eq!(align("ab", 5, TextAlign::Left), "ab   ");
    }

    #[test]
    fn test_long_cells_are_capped() {
        let long = "x".repeat(120);
        let data = records(json!([{ "text": long }]));
        let rendered = render(&data, &StyleConfig::default(), &TableOptions::default());

        assert_eq!(rendered.column_widths, vec![MAX_COLUMN_WIDTH]);
    }

    #[test]
    fn test_activation_opens_single_detail_and_runs_callback() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut table = TableComponent::new(team(), StyleConfig::default(), TableOptions::default())
            .on_row_activate(move |record, index| {
                let name = record.get("name").and_then(Value::as_str).unwrap_or("");
                sink.borrow_mut().push((name.to_string(), index));
            });

        assert_eq!(table.activate(2), Some(Action::RowActivated(2)));
        assert_eq!(table.activate(5), Some(Action::RowActivated(5)));

        assert_eq!(table.detail().current(), Some(5));
        assert_eq!(
            *seen.borrow(),
            vec![("Charlie".to_string(), 2), ("Fay".to_string(), 5)]
        );

        table.close_detail();
        assert_eq!(table.detail().current(), None);
    }

    #[test]
    fn test_activation_is_noop_when_not_clickable() {
        let options = TableOptions {
            clickable: false,
            ..Default::default()
        };
        let mut table = TableComponent::new(team(), StyleConfig::default(), options);

        assert_eq!(table.activate(1), None);
        assert!(!table.detail().is_open());
    }

    #[test]
    fn test_activation_without_detail_still_reports() {
        let options = TableOptions {
            show_detail: false,
            ..Default::default()
        };
        let mut table = TableComponent::new(team(), StyleConfig::default(), options);

        assert_eq!(table.activate(1), Some(Action::RowActivated(1)));
        assert!(!table.detail().is_open());
    }

    #[test]
    fn test_activation_out_of_range_is_ignored() {
        let mut table = TableComponent::new(team(), StyleConfig::default(), TableOptions::default());
        assert_eq!(table.activate(99), None);
    }

    #[test]
    fn test_shrinking_records_closes_stale_detail() {
        let mut table = TableComponent::new(team(), StyleConfig::default(), TableOptions::default());
        table.activate(4);

        table.set_records(team().into_iter().take(2).collect());

        assert!(!table.detail().is_open());
        assert!(table.cursor() <= 1);
    }

    #[test]
    fn test_set_config_re_resolves_live_table() {
        let mut table = TableComponent::new(team(), StyleConfig::default(), TableOptions::default());
        table.update(Action::LastRow).unwrap();
        assert!(!table.rendered().header_separator);

        table.set_config(StyleConfig {
            bordered: true,
            striped: true,
            zebra_color: Some("#eeeeee".into()),
            ..Default::default()
        });

        let rendered = table.rendered();
        assert_eq!(rendered.rows[0].style.background, DEFAULT_ROW_BACKGROUND);
        assert_eq!(rendered.rows[1].style.background, "#eeeeee");
        assert!(rendered.header_separator);
        assert!(rendered.row_separator);
        assert!(rendered.border.is_some());
        assert_eq!(table.cursor(), 5);

        table.set_records(team().into_iter().take(3).collect());
        assert_eq!(table.cursor(), 2);
        assert_eq!(table.rendered().rows.len(), 3);
    }

    #[test]
    fn test_theme_change_keeps_explicit_colours() {
        let style = StyleConfig {
            header_bg_color: Some("#546e7a".into()),
            ..Default::default()
        };
        let mut table = TableComponent::new(team(), style, TableOptions::default());
        assert_eq!(table.rendered().rows[0].style.background, DEFAULT_ROW_BACKGROUND);

        table.set_theme(Theme::Dark);
        assert_eq!(table.theme(), Theme::Dark);
        assert_eq!(table.rendered().rows[0].style.background, "#1e1e1e");
        assert_eq!(table.rendered().header_style.background, "#546e7a");

        table.set_theme(Theme::Light);
        assert_eq!(table.rendered().rows[0].style.background, DEFAULT_ROW_BACKGROUND);
    }

    #[test]
    fn test_shadow_is_offset_strip_outside_frame() {
        let config = StyleConfig {
            bordered: true,
            shadow: true,
            ..Default::default()
        };
        let data = records(json!([{ "name": "Alice", "age": 25 }]));
        let mut table = TableComponent::new(data, config, TableOptions::default());
        let terminal = draw(&mut table, 40, 10);
        let buffer = terminal.backend().buffer();
        let bg = |x: u16, y: u16| buffer.cell((x, y)).map(|cell| cell.bg);

        // Empty cells inside the frame keep the terminal background
        assert_ne!(bg(30, 5), Some(Color::DarkGray));
        assert_ne!(bg(5, 5), Some(Color::DarkGray));

        // Right column and bottom row, starting one cell in
        assert_eq!(bg(39, 5), Some(Color::DarkGray));
        assert_eq!(bg(5, 9), Some(Color::DarkGray));
        assert_ne!(bg(39, 0), Some(Color::DarkGray));
        assert_ne!(bg(0, 9), Some(Color::DarkGray));
    }

    #[test]
    fn test_cursor_navigation_clamps() {
        let mut table = TableComponent::new(team(), StyleConfig::default(), TableOptions::default());

        table.update(Action::PrevRow).unwrap();
        assert_eq!(table.cursor(), 0);

        table.update(Action::LastRow).unwrap();
        assert_eq!(table.cursor(), 5);

        table.update(Action::NextRow).unwrap();
        assert_eq!(table.cursor(), 5);

        table.update(Action::FirstRow).unwrap();
        assert_eq!(table.cursor(), 0);
    }

    #[test]
    fn test_enter_key_activates_cursor_row() {
        let mut table = TableComponent::new(team(), StyleConfig::default(), TableOptions::default());
        table.update(Action::NextRow).unwrap();

        let action = table
            .handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::ActivateRow(1)));

        let follow_up = table.update(Action::ActivateRow(1)).unwrap();
        assert_eq!(follow_up, Some(Action::RowActivated(1)));
        assert_eq!(table.detail().current(), Some(1));
    }

    #[test]
    fn test_draw_shows_header_and_maps_clicks_to_rows() {
        let config = StyleConfig {
            bordered: true,
            ..Default::default()
        };
        let mut table = TableComponent::new(team(), config, TableOptions::default());
        let terminal = draw(&mut table, 60, 20);

        assert!(screen_text(&terminal).contains("NAME"));

        // border row, header, header rule, then the first body row
        assert_eq!(table.row_at(5, 3), Some(0));
        assert_eq!(table.row_at(5, 4), None);
        assert_eq!(table.row_at(5, 5), Some(1));
        assert_eq!(table.row_at(0, 3), None);
    }

    #[test]
    fn test_click_activates_row_under_pointer() {
        let mut table = TableComponent::new(team(), StyleConfig::default(), TableOptions::default());
        draw(&mut table, 60, 20);

        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 2,
            modifiers: KeyModifiers::NONE,
        };
        let action = table.handle_mouse_event(click).unwrap();
        assert_eq!(action, Some(Action::ActivateRow(1)));
    }

    #[test]
    fn test_draw_empty_table_shows_placeholder() {
        let mut table = TableComponent::new(Vec::new(), StyleConfig::default(), TableOptions::default());
        let terminal = draw(&mut table, 40, 5);

        let text = screen_text(&terminal);
        assert!(text.contains(EMPTY_PLACEHOLDER));
        assert!(!text.contains("NAME"));
    }

    #[test]
    fn test_double_border_uses_double_glyphs() {
        let config = StyleConfig {
            bordered: true,
            border_style: Some(BorderStyle::Double),
            ..Default::default()
        };
        let mut table = TableComponent::new(team(), config, TableOptions::default());
        let terminal = draw(&mut table, 60, 20);

        assert!(screen_text(&terminal).starts_with('╔'));
    }

    #[test]
    fn test_cursor_scrolls_into_view() {
        let many: Vec<Record> = (0..40)
            .map(|i| records(json!([{ "n": i }])).remove(0))
            .collect();
        let mut table = TableComponent::new(many, StyleConfig::default(), TableOptions::default());
        draw(&mut table, 20, 10);

        table.update(Action::LastRow).unwrap();
        let terminal = draw(&mut table, 20, 10);

        assert!(screen_text(&terminal).contains("39"));
    }
}

use std::sync::Arc;

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use ptdx_modal::Theme;
use ptdx_modal::config::{KeyResolver, PageAction};
use ptdx_modal::document::Document;
use ptdx_modal::ui::{Component, Handled, Result};

use super::Section;
use super::snippets;

const SCROLL_STEP: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    Open(Section),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowKind {
    Heading,
    Link,
    Text,
    Code,
    Blank,
    Button(Section),
}

#[derive(Debug, Clone)]
struct Row {
    kind: RowKind,
    text: String,
}

impl Row {
    fn new(kind: RowKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// The scrollable showcase document.
pub struct Page {
    rows: Vec<Row>,
    scroll: u16,
    viewport: u16,
    focused: Option<Section>,
    buttons: Vec<(Rect, Section)>,
    document: Document,
    resolver: Arc<KeyResolver>,
}

impl Page {
    pub fn new(document: Document, resolver: Arc<KeyResolver>) -> Self {
        Self {
            rows: build_rows(),
            scroll: 0,
            viewport: 0,
            focused: None,
            buttons: Vec::new(),
            document,
            resolver,
        }
    }

    pub const fn scroll(&self) -> u16 {
        self.scroll
    }

    pub const fn focused(&self) -> Option<Section> {
        self.focused
    }

    fn max_scroll(&self) -> u16 {
        (self.rows.len() as u16).saturating_sub(self.viewport.max(1))
    }

    /// Scroll by `delta` rows, refused while the document is scroll-locked.
    fn scroll_by(&mut self, delta: i32) -> bool {
        if self.document.is_scroll_locked() {
            return false;
        }
        let target = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.max_scroll()));
        self.scroll = u16::try_from(target).unwrap_or(0);
        true
    }

    fn cycle_focus(&mut self, backward: bool) {
        let sections = Section::ALL;
        let index = self
            .focused
            .and_then(|focused| sections.iter().position(|s| *s == focused));
        let next = match (index, backward) {
            (None, false) => 0,
            (None, true) | (Some(0), true) => sections.len() - 1,
            (Some(i), true) => i - 1,
            (Some(i), false) => (i + 1) % sections.len(),
        };
        self.focused = Some(sections[next]);
        self.reveal(sections[next]);
    }

    /// Scroll just enough for a section's button to be visible.
    fn reveal(&mut self, section: Section) {
        let Some(row) = self
            .rows
            .iter()
            .position(|row| row.kind == RowKind::Button(section))
        else {
            return;
        };
        let row = row as u16;
        if row < self.scroll {
            self.scroll_by(i32::from(row) - i32::from(self.scroll));
        } else if self.viewport > 0 && row >= self.scroll + self.viewport {
            self.scroll_by(i32::from(row + 1 - self.viewport) - i32::from(self.scroll));
        }
    }

    fn row_line(&self, row: &Row, theme: &Theme) -> Line<'static> {
        match row.kind {
            RowKind::Heading => Line::from(Span::styled(
                row.text.clone(),
                Style::default()
                    .fg(theme.heading())
                    .add_modifier(Modifier::BOLD),
            )),
            RowKind::Link => Line::from(Span::styled(
                row.text.clone(),
                Style::default()
                    .fg(theme.link())
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )),
            RowKind::Text => Line::from(Span::styled(
                row.text.clone(),
                Style::default().fg(theme.subtext1),
            )),
            RowKind::Code => Line::from(Span::styled(
                format!("  {}", row.text),
                Style::default().fg(theme.text).bg(theme.code_bg()),
            )),
            RowKind::Blank => Line::default(),
            RowKind::Button(section) => {
                let mut style = Style::default().fg(theme.base).bg(theme.blue);
                if self.focused == Some(section) {
                    style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
                }
                Line::from(Span::styled(format!(" {} ", row.text), style))
            }
        }
    }
}

fn build_rows() -> Vec<Row> {
    let mut rows = vec![
        Row::new(RowKind::Link, snippets::INSTALL),
        Row::new(RowKind::Text, snippets::TAGLINE),
        Row::new(RowKind::Blank, ""),
        Row::new(RowKind::Heading, "Global integration example"),
    ];
    push_code(&mut rows, snippets::INTEGRATION);
    rows.push(Row::new(RowKind::Blank, ""));
    rows.push(Row::new(RowKind::Heading, "examples of modals"));

    for section in Section::ALL {
        rows.push(Row::new(RowKind::Blank, ""));
        rows.push(Row::new(RowKind::Button(section), section.button_label()));
        rows.push(Row::new(RowKind::Blank, ""));
        match section {
            Section::Default => push_code(&mut rows, snippets::DEFAULT),
            Section::Variant => push_code(&mut rows, snippets::VARIANT),
            Section::Custom => {
                push_code(&mut rows, snippets::CUSTOM);
                rows.push(Row::new(RowKind::Blank, ""));
                push_code(&mut rows, snippets::CUSTOM_STYLES);
            }
        }
    }
    rows
}

fn push_code(rows: &mut Vec<Row>, code: &str) {
    rows.extend(code.lines().map(|line| Row::new(RowKind::Code, line)));
}

impl Component for Page {
    type Output = PageEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Result<Handled<Self::Output>> {
        let resolver = Arc::clone(&self.resolver);
        let matches = |action| resolver.matches_page(&key, action);

        if matches(PageAction::Quit) {
            return Ok(PageEvent::Quit.into());
        }
        for (action, section) in [
            (PageAction::OpenDefault, Section::Default),
            (PageAction::OpenVariant, Section::Variant),
            (PageAction::OpenCustom, Section::Custom),
        ] {
            if matches(action) {
                self.focused = Some(section);
                return Ok(PageEvent::Open(section).into());
            }
        }
        if matches(PageAction::Press) {
            return Ok(self
                .focused
                .map_or(Handled::Consumed, |section| PageEvent::Open(section).into()));
        }
        if matches(PageAction::Prev) {
            self.cycle_focus(true);
            return Ok(Handled::Consumed);
        }
        if matches(PageAction::Next) {
            self.cycle_focus(false);
            return Ok(Handled::Consumed);
        }

        let page = i32::from(self.viewport.saturating_sub(1).max(1));
        let delta = if matches(PageAction::Up) {
            -1
        } else if matches(PageAction::Down) {
            1
        } else if matches(PageAction::PageUp) {
            -page
        } else if matches(PageAction::PageDown) {
            page
        } else {
            return Ok(Handled::Ignored);
        };
        self.scroll_by(delta);
        Ok(Handled::Consumed)
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<Handled<Self::Output>> {
        match mouse.kind {
            MouseEventKind::ScrollUp => {
                self.scroll_by(-i32::from(SCROLL_STEP));
                Ok(Handled::Consumed)
            }
            MouseEventKind::ScrollDown => {
                self.scroll_by(i32::from(SCROLL_STEP));
                Ok(Handled::Consumed)
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let position = Position::new(mouse.column, mouse.row);
                let hit = self
                    .buttons
                    .iter()
                    .find(|(rect, _)| rect.contains(position))
                    .map(|(_, section)| *section);
                Ok(hit.map_or(Handled::Ignored, |section| {
                    self.focused = Some(section);
                    PageEvent::Open(section).into()
                }))
            }
            _ => Ok(Handled::Ignored),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        self.viewport = area.height;
        self.scroll = self.scroll.min(self.max_scroll());

        let lines: Vec<Line> = self
            .rows
            .iter()
            .map(|row| self.row_line(row, theme))
            .collect();

        self.buttons = self
            .rows
            .iter()
            .enumerate()
            .filter_map(|(index, row)| match row.kind {
                RowKind::Button(section) => Some((index as u16, row, section)),
                _ => None,
            })
            .filter(|(index, _, _)| *index >= self.scroll && *index < self.scroll + area.height)
            .map(|(index, row, section)| {
                let width = (Span::raw(row.text.as_str()).width() as u16 + 2).min(area.width);
                (
                    Rect::new(area.x, area.y + index - self.scroll, width, 1),
                    section,
                )
            })
            .collect();

        let paragraph = Paragraph::new(lines)
            .block(Block::default().style(Style::default().bg(theme.page_bg())))
            .scroll((self.scroll, 0));
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn page() -> (Page, Document) {
        let document = Document::new();
        (
            Page::new(document.clone(), Arc::new(KeyResolver::default())),
            document,
        )
    }

    fn render(page: &mut Page) {
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|frame| page.render(frame, frame.area(), &theme))
            .unwrap();
    }

    #[test]
    fn test_scrolls_only_when_unlocked() {
        let (mut page, document) = page();
        render(&mut page);

        page.handle_key(key(KeyCode::Down)).unwrap();
        assert_eq!(page.scroll(), 1);

        let _lock = document.lock_scroll();
        page.handle_key(key(KeyCode::Down)).unwrap();
        page.handle_mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        })
        .unwrap();
        assert_eq!(page.scroll(), 1);
    }

    #[test]
    fn test_number_keys_open_sections() {
        let (mut page, _) = page();
        assert_eq!(
            page.handle_key(key(KeyCode::Char('2'))).unwrap(),
            Handled::Event(PageEvent::Open(Section::Variant))
        );
        assert_eq!(
            page.handle_key(key(KeyCode::Char('q'))).unwrap(),
            Handled::Event(PageEvent::Quit)
        );
    }

    #[test]
    fn test_tab_focus_then_press() {
        let (mut page, _) = page();
        render(&mut page);
        assert_eq!(page.handle_key(key(KeyCode::Enter)).unwrap(), Handled::Consumed);

        page.handle_key(key(KeyCode::Tab)).unwrap();
        assert_eq!(page.focused(), Some(Section::Default));
        page.handle_key(key(KeyCode::BackTab)).unwrap();
        assert_eq!(page.focused(), Some(Section::Custom));
        assert_eq!(
            page.handle_key(key(KeyCode::Enter)).unwrap(),
            Handled::Event(PageEvent::Open(Section::Custom))
        );
    }

    #[test]
    fn test_clicking_a_visible_button_opens_it() {
        let (mut page, _) = page();
        render(&mut page);
        page.handle_key(key(KeyCode::Tab)).unwrap();
        render(&mut page);
        assert!(page.scroll() > 0);
        let (rect, section) = page.buttons[0];
        let handled = page
            .handle_mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: rect.x,
                row: rect.y,
                modifiers: KeyModifiers::NONE,
            })
            .unwrap();
        assert_eq!(handled, Handled::Event(PageEvent::Open(section)));
    }
}

//! Painting a dialog tree into the frame root.
//!
//! The renderer walks the tree produced by the view: overlay, bordered
//! container, title row with the close button, wrapped content, and a
//! right-aligned footer. Every focusable element that ends up on screen
//! is recorded in a [`HitMap`] for mouse handling.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Margin, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear};

use super::focus::FocusState;
use super::length::Length;
use super::node::{Focusable, Node, Tag};
use super::style::ModalStyles;
use super::view::{self, ElementIds, FORCE_FOCUS_VISIBLE_CLASS};
use crate::Theme;

/// Where a mouse position landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    /// A focusable element, by focus key.
    Target(String),
    /// Inside the container, on nothing interactive.
    Container,
    /// On the overlay outside the container.
    Backdrop,
}

/// Screen regions of the last painted frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    pub overlay: Rect,
    pub container: Rect,
    pub targets: Vec<(Rect, String)>,
}

impl HitMap {
    /// Classify a position; `None` when it is outside the overlay.
    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        let position = Position::new(column, row);
        if let Some((_, key)) = self
            .targets
            .iter()
            .find(|(rect, _)| rect.contains(position))
        {
            return Some(Hit::Target(key.clone()));
        }
        if self.container.contains(position) {
            Some(Hit::Container)
        } else if self.overlay.contains(position) {
            Some(Hit::Backdrop)
        } else {
            None
        }
    }

    pub fn target(&self, key: &str) -> Option<Rect> {
        self.targets
            .iter()
            .find(|(_, k)| k == key)
            .map(|(rect, _)| *rect)
    }
}

/// Everything needed to paint one frame of a dialog.
pub struct Painter<'a> {
    pub tree: &'a Node,
    pub ids: &'a ElementIds,
    pub styles: &'a ModalStyles,
    pub focus: &'a FocusState,
    pub theme: &'a Theme,
    /// Visibility in `[0.0, 1.0]`.
    pub fade: f32,
}

/// One piece of text on a content line.
#[derive(Debug, Clone)]
struct Segment {
    text: String,
    style: Style,
    key: Option<String>,
}

impl Painter<'_> {
    pub fn paint(&self, frame: &mut Frame) -> HitMap {
        let area = frame.area();
        let mut hits = HitMap {
            overlay: area,
            ..HitMap::default()
        };
        let Some(container) = view::container(self.tree) else {
            return hits;
        };

        self.paint_overlay(frame.buffer_mut(), area);

        let width = container
            .attr("style")
            .and_then(|style| style.strip_prefix("width:"))
            .and_then(|width| width.parse::<Length>().ok())
            .unwrap_or_default()
            .resolve(area.width.saturating_sub(2))
            .max(6);
        let inner_width = width
            .saturating_sub(2)
            .saturating_sub(self.styles.padding.saturating_mul(2))
            .max(1);

        let header = container.child_by_class("modal-title").is_some()
            || container.child_by_class("modal-close").is_some();
        let content = self.content_lines(container, inner_width);
        let footer = container.child_by_class("modal-footer");

        let mut height = u16::try_from(content.len())
            .unwrap_or(u16::MAX)
            .saturating_add(2);
        if header {
            height = height.saturating_add(2);
        }
        if footer.is_some() {
            height = height.saturating_add(2);
        }
        let rect = area.centered(
            Constraint::Length(width),
            Constraint::Length(height.min(area.height)),
        );
        hits.container = rect;

        let container_style = self.faded(self.styles.container);
        frame.render_widget(Clear, rect);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(self.styles.border_type)
            .border_style(container_style.patch(self.faded(self.styles.border)))
            .style(container_style);
        let inner = block.inner(rect).inner(Margin::new(
            self.styles.padding.min(rect.width.saturating_sub(3) / 2),
            0,
        ));
        frame.render_widget(block, rect);

        let buf = frame.buffer_mut();
        let mut y = inner.y;
        let bottom = inner.bottom();

        if header && y < bottom {
            self.paint_header(buf, container, Rect::new(inner.x, y, inner.width, 1), &mut hits);
            y += 2;
        }

        for line in &content {
            if y >= bottom {
                break;
            }
            let mut x = inner.x;
            for segment in line {
                let text_width = cells(&segment.text);
                let style = segment
                    .key
                    .as_deref()
                    .map_or(segment.style, |key| self.with_focus(segment.style, key, false));
                let span = Span::styled(segment.text.as_str(), self.faded(style));
                buf.set_span(x, y, &span, inner.right().saturating_sub(x));
                if let Some(key) = &segment.key {
                    let visible = text_width.min(inner.right().saturating_sub(x));
                    hits.targets.push((Rect::new(x, y, visible, 1), key.clone()));
                }
                x = x.saturating_add(text_width);
            }
            y += 1;
        }

        if let Some(footer) = footer {
            let row = bottom.saturating_sub(1).max(y);
            if row < bottom {
                self.paint_footer(buf, footer, Rect::new(inner.x, row, inner.width, 1), &mut hits);
            }
        }

        hits
    }

    fn paint_overlay(&self, buf: &mut Buffer, area: Rect) {
        let tint = self.styles.overlay.bg.unwrap_or_else(|| self.theme.backdrop());
        let bg = blend(self.theme.page_bg(), tint, self.fade);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_bg(bg);
                    if self.fade > 0.5 {
                        cell.modifier.insert(Modifier::DIM);
                    }
                }
            }
        }
    }

    fn paint_header(&self, buf: &mut Buffer, container: &Node, row: Rect, hits: &mut HitMap) {
        if let Some(title) = container.child_by_class("modal-title") {
            let span = Span::styled(title.text_content(), self.faded(self.styles.title));
            buf.set_span(row.x, row.y, &span, row.width.saturating_sub(2));
        }
        if let Some(close) = container.child_by_class("modal-close") {
            let key = close.id().unwrap_or(&self.ids.close);
            let label = close.text().unwrap_or(view::CLOSE_GLYPH);
            let width = cells(label);
            let x = row.right().saturating_sub(width);
            let style = self.with_focus(self.styles.close, key, false);
            buf.set_span(x, row.y, &Span::styled(label, self.faded(style)), width);
            hits.targets.push((Rect::new(x, row.y, width, 1), key.to_string()));
        }
    }

    fn paint_footer(&self, buf: &mut Buffer, footer: &Node, row: Rect, hits: &mut HitMap) {
        let buttons: Vec<(String, Style, String)> = footer
            .children()
            .iter()
            .filter(|node| node.tag() == Tag::Button)
            .filter_map(|node| {
                let key = node.id()?.to_string();
                let base = if node.has_class("modal-btn-confirm") {
                    self.styles.btn_confirm
                } else {
                    self.styles.btn_cancel
                };
                let forced = node.has_class(FORCE_FOCUS_VISIBLE_CLASS);
                let style = self.with_focus(base, &key, forced);
                let label = button_label(node.text().unwrap_or_default(), self.styles.btn_min_width);
                Some((label, style, key))
            })
            .collect();

        let gap = self.styles.footer_gap;
        let gaps = u16::try_from(buttons.len().saturating_sub(1)).unwrap_or(u16::MAX);
        let total = buttons
            .iter()
            .fold(gap.saturating_mul(gaps), |total, (label, _, _)| {
                total.saturating_add(cells(label))
            });

        let mut x = row.right().saturating_sub(total).max(row.x);
        for (label, style, key) in buttons {
            let width = cells(&label);
            let visible = width.min(row.right().saturating_sub(x));
            buf.set_span(x, row.y, &Span::styled(label.as_str(), self.faded(style)), visible);
            hits.targets.push((Rect::new(x, row.y, visible, 1), key));
            x = x.saturating_add(width).saturating_add(gap);
        }
    }

    /// Flatten and wrap the content element into display lines.
    fn content_lines(&self, container: &Node, width: u16) -> Vec<Vec<Segment>> {
        let Some(index) = container
            .children()
            .iter()
            .position(|child| child.has_class("modal-content"))
        else {
            return Vec::new();
        };
        let mut blocks = Vec::new();
        let mut current = Vec::new();
        self.collect(
            &container.children()[index],
            &mut vec![index],
            &mut blocks,
            &mut current,
        );
        flush(&mut blocks, &mut current);

        blocks
            .into_iter()
            .flat_map(|block| wrap(block, usize::from(width)))
            .collect()
    }

    fn collect(
        &self,
        node: &Node,
        path: &mut Vec<usize>,
        blocks: &mut Vec<Vec<Segment>>,
        current: &mut Vec<Segment>,
    ) {
        let key = node
            .is_focusable()
            .then(|| node.focus_key(&self.ids.prefix, path));
        let inline = node.tag().is_inline();
        if !inline {
            flush(blocks, current);
        }

        if let Some(text) = node.text() {
            let text = if node.tag() == Tag::Button {
                format!("[ {text} ]")
            } else {
                text.to_string()
            };
            current.push(Segment {
                text,
                style: self.node_style(node),
                key,
            });
        } else if let Some(key) = key {
            // Focusable without text still needs a visible, clickable cell
            current.push(Segment {
                text: "[ ]".to_string(),
                style: self.node_style(node),
                key: Some(key),
            });
        }

        for (index, child) in node.children().iter().enumerate() {
            path.push(index);
            self.collect(child, path, blocks, current);
            path.pop();
        }

        if !inline {
            flush(blocks, current);
        }
    }

    fn node_style(&self, node: &Node) -> Style {
        let base = self.styles.content;
        match node.tag() {
            Tag::Heading => base
                .fg(self.theme.heading())
                .add_modifier(Modifier::BOLD),
            Tag::Link => base
                .fg(self.theme.link())
                .add_modifier(Modifier::UNDERLINED),
            Tag::Button | Tag::Input | Tag::Select | Tag::TextArea => {
                base.bg(self.theme.code_bg())
            }
            _ => base,
        }
    }

    /// Apply the focus ring when `key` is focused and the ring should show.
    fn with_focus(&self, style: Style, key: &str, forced: bool) -> Style {
        if !self.focus.is_active(key) {
            return style;
        }
        if self.focus.is_visible() {
            style.patch(self.styles.focus_visible)
        } else if forced {
            style.patch(self.styles.force_focus_visible)
        } else {
            style
        }
    }

    /// Blend a style's colors from the page background by the fade level.
    fn faded(&self, style: Style) -> Style {
        if self.fade >= 1.0 {
            return style;
        }
        let page = self.theme.page_bg();
        let mut faded = style;
        if let Some(fg) = style.fg {
            faded.fg = Some(blend(page, fg, self.fade));
        }
        if let Some(bg) = style.bg {
            faded.bg = Some(blend(page, bg, self.fade));
        }
        faded
    }
}

fn flush(blocks: &mut Vec<Vec<Segment>>, current: &mut Vec<Segment>) {
    if !current.is_empty() {
        blocks.push(std::mem::take(current));
    }
}

/// Display width of `text` in cells, saturating at `u16::MAX`.
fn cells(text: &str) -> u16 {
    u16::try_from(Span::raw(text).width()).unwrap_or(u16::MAX)
}

/// Button label padded to at least `min_width` cells.
fn button_label(text: &str, min_width: u16) -> String {
    let padded = format!(" {text} ");
    let width = Span::raw(padded.as_str()).width();
    let min_width = usize::from(min_width);
    if width >= min_width {
        return padded;
    }
    let extra = min_width - width;
    let left = extra / 2;
    format!("{}{padded}{}", " ".repeat(left), " ".repeat(extra - left))
}

/// Greedy word wrap over styled segments. Focusable segments are never split
/// across lines unless they are wider than a whole line.
fn wrap(block: Vec<Segment>, width: usize) -> Vec<Vec<Segment>> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line: Vec<Segment> = Vec::new();
    let mut used = 0;

    let mut tokens = Vec::new();
    for segment in block {
        if segment.key.is_some() {
            tokens.push(segment);
            continue;
        }
        for word in segment.text.split_inclusive(char::is_whitespace) {
            tokens.push(Segment {
                text: word.to_string(),
                style: segment.style,
                key: None,
            });
        }
    }

    for mut token in tokens {
        if used == 0 && token.key.is_none() {
            token.text = token.text.trim_start().to_string();
            if token.text.is_empty() {
                continue;
            }
        }
        let token_width = Span::raw(token.text.trim_end()).width();
        if used > 0 && used + token_width > width {
            lines.push(std::mem::take(&mut line));
            used = 0;
            if token.key.is_none() {
                token.text = token.text.trim_start().to_string();
            }
        }
        // Hard-split anything wider than a full line
        while Span::raw(token.text.as_str()).width() > width && token.key.is_none() {
            let split = split_at_width(&token.text, width);
            let (head, tail) = token.text.split_at(split);
            line.push(Segment {
                text: head.to_string(),
                style: token.style,
                key: None,
            });
            lines.push(std::mem::take(&mut line));
            token.text = tail.to_string();
        }
        used += Span::raw(token.text.as_str()).width();
        line.push(token);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Byte index of the longest prefix of `text` at most `width` cells wide.
fn split_at_width(text: &str, width: usize) -> usize {
    let mut used = 0;
    for (index, ch) in text.char_indices() {
        let ch_width = Span::raw(ch.to_string()).width();
        if used + ch_width > width {
            return index.max(ch.len_utf8().min(text.len()));
        }
        used += ch_width;
    }
    text.len()
}

/// Linear blend between two colors; non-RGB colors switch at the midpoint.
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            Color::Rgb(mix(r1, r2, t), mix(g1, g2, t), mix(b1, b2, t))
        }
        _ if t >= 0.5 => to,
        _ => from,
    }
}

fn mix(a: u8, b: u8, t: f32) -> u8 {
    let value = f32::from(b).mul_add(t, f32::from(a) * (1.0 - t));
    value.round().clamp(0.0, 255.0) as u8
}

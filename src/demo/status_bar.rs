use std::sync::Arc;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use ptdx_modal::Theme;
use ptdx_modal::config::{DialogAction, KeyResolver, PageAction};

/// One-line key hints at the bottom of the screen.
pub struct StatusBar {
    resolver: Arc<KeyResolver>,
}

impl StatusBar {
    pub const fn new(resolver: Arc<KeyResolver>) -> Self {
        Self { resolver }
    }

    /// Hints for the page, or for the dialog when one is active.
    pub fn hints(&self, dialog_active: bool) -> Vec<(String, &'static str)> {
        let r = &self.resolver;
        if dialog_active {
            vec![
                (r.display_dialog(DialogAction::Close), "close"),
                (r.display_dialog(DialogAction::FocusNext), "next"),
                (r.display_dialog(DialogAction::FocusPrev), "prev"),
                (r.display_dialog(DialogAction::Submit), "submit"),
                (r.display_dialog(DialogAction::Activate), "press"),
            ]
        } else {
            vec![
                (r.display_page(PageAction::OpenDefault), "default"),
                (r.display_page(PageAction::OpenVariant), "variant"),
                (r.display_page(PageAction::OpenCustom), "custom"),
                (r.display_page(PageAction::Next), "focus"),
                (r.display_page(PageAction::Press), "open"),
                (r.display_page(PageAction::Down), "scroll"),
                (r.display_page(PageAction::Quit), "quit"),
            ]
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme, dialog_active: bool) {
        let key_style = Style::default()
            .fg(theme.peach)
            .add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(theme.muted());

        let spans: Vec<Span> = self
            .hints(dialog_active)
            .into_iter()
            .flat_map(|(key, label)| {
                [
                    Span::styled(format!(" {key} "), key_style),
                    Span::styled(format!("{label}  "), label_style),
                ]
            })
            .collect();

        let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.mantle));
        frame.render_widget(bar, area);
    }
}

use crate::config::actions::{DialogAction, PageAction};
use crate::config::keybindings::KeybindingsConfig;
use crossterm::event::KeyEvent;
use std::sync::Arc;

pub struct KeyResolver {
    pub keybindings: Arc<KeybindingsConfig>,
}

impl Default for KeyResolver {
    fn default() -> Self {
        Self::new(Arc::new(KeybindingsConfig::default()))
    }
}

impl KeyResolver {
    pub const fn new(keybindings: Arc<KeybindingsConfig>) -> Self {
        Self { keybindings }
    }

    // Dialog actions
    pub fn matches_dialog(&self, event: &KeyEvent, action: DialogAction) -> bool {
        let kb = &self.keybindings.dialog;
        match action {
            DialogAction::Close => kb.close.matches(event),
            DialogAction::Submit => kb.submit.matches(event),
            DialogAction::Activate => kb.activate.matches(event),
            DialogAction::FocusNext => kb.focus_next.matches(event),
            DialogAction::FocusPrev => kb.focus_prev.matches(event),
        }
    }

    pub fn display_dialog(&self, action: DialogAction) -> String {
        let kb = &self.keybindings.dialog;
        match action {
            DialogAction::Close => kb.close.display(),
            DialogAction::Submit => kb.submit.display(),
            DialogAction::Activate => kb.activate.display(),
            DialogAction::FocusNext => kb.focus_next.display(),
            DialogAction::FocusPrev => kb.focus_prev.display(),
        }
    }

    // Page actions
    pub fn matches_page(&self, event: &KeyEvent, action: PageAction) -> bool {
        let kb = &self.keybindings.page;
        match action {
            PageAction::Quit => kb.quit.matches(event),
            PageAction::Up => kb.up.matches(event),
            PageAction::Down => kb.down.matches(event),
            PageAction::PageUp => kb.page_up.matches(event),
            PageAction::PageDown => kb.page_down.matches(event),
            PageAction::Next => kb.next.matches(event),
            PageAction::Prev => kb.prev.matches(event),
            PageAction::Press => kb.press.matches(event),
            PageAction::OpenDefault => kb.open_default.matches(event),
            PageAction::OpenVariant => kb.open_variant.matches(event),
            PageAction::OpenCustom => kb.open_custom.matches(event),
        }
    }

    pub fn display_page(&self, action: PageAction) -> String {
        let kb = &self.keybindings.page;
        match action {
            PageAction::Quit => kb.quit.display(),
            PageAction::Up => kb.up.display(),
            PageAction::Down => kb.down.display(),
            PageAction::PageUp => kb.page_up.display(),
            PageAction::PageDown => kb.page_down.display(),
            PageAction::Next => kb.next.display(),
            PageAction::Prev => kb.prev.display(),
            PageAction::Press => kb.press.display(),
            PageAction::OpenDefault => kb.open_default.display(),
            PageAction::OpenVariant => kb.open_variant.display(),
            PageAction::OpenCustom => kb.open_custom.display(),
        }
    }
}

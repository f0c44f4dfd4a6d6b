use crate::config::key::{Key, KeyBinding};
use crate::config::keybindings::{DialogKeybindings, PageKeybindings};
use crossterm::event::KeyCode;

impl Default for DialogKeybindings {
    fn default() -> Self {
        Self {
            close: Key::new(KeyCode::Esc).into(),
            submit: Key::new(KeyCode::Enter).into(),
            activate: Key::new(KeyCode::Char(' ')).into(),
            focus_next: Key::new(KeyCode::Tab).into(),
            focus_prev: KeyBinding::multiple(vec![
                Key::new(KeyCode::BackTab),
                Key::with_shift(KeyCode::Tab),
            ]),
        }
    }
}

impl Default for PageKeybindings {
    fn default() -> Self {
        Self {
            quit: Key::new(KeyCode::Char('q')).into(),
            up: KeyBinding::multiple(vec![
                Key::new(KeyCode::Char('k')),
                Key::new(KeyCode::Up),
            ]),
            down: KeyBinding::multiple(vec![
                Key::new(KeyCode::Char('j')),
                Key::new(KeyCode::Down),
            ]),
            page_up: Key::new(KeyCode::PageUp).into(),
            page_down: Key::new(KeyCode::PageDown).into(),
            next: Key::new(KeyCode::Tab).into(),
            prev: KeyBinding::multiple(vec![
                Key::new(KeyCode::BackTab),
                Key::with_shift(KeyCode::Tab),
            ]),
            press: KeyBinding::multiple(vec![
                Key::new(KeyCode::Enter),
                Key::new(KeyCode::Char(' ')),
            ]),
            open_default: Key::new(KeyCode::Char('1')).into(),
            open_variant: Key::new(KeyCode::Char('2')).into(),
            open_custom: Key::new(KeyCode::Char('3')).into(),
        }
    }
}

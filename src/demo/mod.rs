//! The showcase page and the dialogs it opens.

mod page;
mod snippets;
mod status_bar;

use std::time::{Duration, Instant};

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;
use tracing::debug;

use ptdx_modal::Theme;
use ptdx_modal::modal::{Modal, ModalContext, ModalEvent, ModalOptions, Variant};
use ptdx_modal::ui::{Component, Handled, Result};

pub use page::{Page, PageEvent};
pub use status_bar::StatusBar;

const TITLE: &str = "Title of the modal";
const TEXT: &str = "custom modal text, custom modal text...";
const AUTO_CLOSE: Duration = Duration::from_millis(2000);

/// Example sections of the page, each with a button opening its dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Default,
    Variant,
    Custom,
}

impl Section {
    pub const ALL: [Self; 3] = [Self::Default, Self::Variant, Self::Custom];

    pub const fn button_label(self) -> &'static str {
        match self {
            Self::Default => "Open Default Modal",
            Self::Variant => "Open Variant Modal",
            Self::Custom => "Open Custom css Modal / multi Modal mode",
        }
    }

    const fn dialog(self) -> Dialog {
        match self {
            Self::Default => Dialog::Default,
            Self::Variant => Dialog::Variant,
            Self::Custom => Dialog::Custom,
        }
    }
}

/// Dialogs hosted by the showcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    Default,
    Variant,
    Custom,
    /// Opened when the custom dialog is confirmed.
    CustomSuccess,
}

impl Dialog {
    fn options(self) -> ModalOptions {
        match self {
            Self::Default => ModalOptions::new().with_title(TITLE).with_content(TEXT),
            Self::Variant => ModalOptions::new()
                .with_footer(false)
                .with_close_button(false)
                .with_content(TEXT)
                .with_variant(Variant::Error)
                .with_time_to_close(AUTO_CLOSE),
            Self::Custom => ModalOptions::new()
                .with_title(TITLE)
                .with_content(TEXT)
                .with_confirm_text("Do")
                .with_cancel_text("Don't")
                .with_class_name("custom-modal"),
            Self::CustomSuccess => ModalOptions::new()
                .with_footer(false)
                .with_close_button(false)
                .with_content("success")
                .with_variant(Variant::Success)
                .with_width("200px")
                .with_time_to_close(AUTO_CLOSE)
                .with_class_name("custom-modal"),
        }
    }
}

/// Owns the dialogs and their open flags, and reacts to their events.
pub struct Showcase {
    dialogs: Vec<(Dialog, Modal)>,
    /// Mounted dialogs, most recently opened last.
    stack: Vec<Dialog>,
}

impl Showcase {
    pub fn new(context: &ModalContext) -> Self {
        let dialogs = [
            Dialog::Default,
            Dialog::Variant,
            Dialog::Custom,
            Dialog::CustomSuccess,
        ]
        .into_iter()
        .map(|dialog| (dialog, Modal::new(dialog.options(), context.clone())))
        .collect();
        Self {
            dialogs,
            stack: Vec::new(),
        }
    }

    pub fn modal(&self, dialog: Dialog) -> Option<&Modal> {
        self.dialogs
            .iter()
            .find(|(d, _)| *d == dialog)
            .map(|(_, modal)| modal)
    }

    fn modal_mut(&mut self, dialog: Dialog) -> Option<&mut Modal> {
        self.dialogs
            .iter_mut()
            .find(|(d, _)| *d == dialog)
            .map(|(_, modal)| modal)
    }

    /// Whether any dialog is on screen.
    pub fn is_active(&self) -> bool {
        !self.stack.is_empty()
    }

    pub fn open(&mut self, section: Section, now: Instant) {
        self.set_open(section.dialog(), true, now);
    }

    fn set_open(&mut self, dialog: Dialog, open: bool, now: Instant) {
        let Some(modal) = self.modal_mut(dialog) else {
            return;
        };
        modal.set_open(open, now);
        if open {
            self.stack.retain(|d| *d != dialog);
            self.stack.push(dialog);
        }
        debug!(?dialog, open, "Dialog flag changed");
    }

    /// React to a dialog's request the way the page wires it.
    pub fn apply(&mut self, dialog: Dialog, event: ModalEvent, now: Instant) {
        debug!(?dialog, ?event, "Dialog event");
        match (dialog, event) {
            (Dialog::Custom, ModalEvent::Confirm) => {
                self.set_open(Dialog::Custom, false, now);
                self.set_open(Dialog::CustomSuccess, true, now);
            }
            (_, ModalEvent::Confirm | ModalEvent::Close(_)) => self.set_open(dialog, false, now),
        }
    }

    /// The dialog receiving input: the most recently opened mounted one.
    fn top(&self) -> Option<Dialog> {
        self.stack.last().copied()
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Result<Handled<()>> {
        let Some(dialog) = self.top() else {
            return Ok(Handled::Ignored);
        };
        let Some(modal) = self.modal_mut(dialog) else {
            return Ok(Handled::Ignored);
        };
        let handled = modal.handle_key(key)?;
        Ok(self.settle(dialog, handled, now))
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) -> Result<Handled<()>> {
        let Some(dialog) = self.top() else {
            return Ok(Handled::Ignored);
        };
        let Some(modal) = self.modal_mut(dialog) else {
            return Ok(Handled::Ignored);
        };
        let handled = modal.handle_mouse(mouse)?;
        Ok(self.settle(dialog, handled, now))
    }

    fn settle(&mut self, dialog: Dialog, handled: Handled<ModalEvent>, now: Instant) -> Handled<()> {
        match handled {
            Handled::Event(event) => {
                self.apply(dialog, event, now);
                Handled::Consumed
            }
            other => other.map(|_| ()),
        }
    }

    pub fn tick(&mut self, now: Instant) {
        let events: Vec<(Dialog, ModalEvent)> = self
            .dialogs
            .iter_mut()
            .filter_map(|(dialog, modal)| modal.tick(now).map(|event| (*dialog, event)))
            .collect();
        for (dialog, event) in events {
            self.apply(dialog, event, now);
        }

        let dialogs = &self.dialogs;
        self.stack.retain(|dialog| {
            dialogs
                .iter()
                .any(|(d, modal)| d == dialog && modal.is_mounted())
        });
    }

    /// Paint mounted dialogs, oldest first.
    pub fn render(&mut self, frame: &mut Frame, theme: &Theme, now: Instant) {
        for dialog in self.stack.clone() {
            if let Some(modal) = self.modal_mut(dialog) {
                modal.draw(frame, theme, now);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_default_dialog_closes_on_escape() {
        let t0 = Instant::now();
        let context = ModalContext::default();
        let mut showcase = Showcase::new(&context);

        showcase.open(Section::Default, t0);
        assert!(showcase.is_active());
        assert!(context.document.is_scroll_locked());

        let handled = showcase.handle_key(key(KeyCode::Esc), t0).unwrap();
        assert_eq!(handled, Handled::Consumed);
        let modal = showcase.modal(Dialog::Default).unwrap();
        assert!(!modal.is_open());
        assert!(modal.is_exiting());

        showcase.tick(t0 + ms(300));
        assert!(!showcase.is_active());
        assert!(!context.document.is_scroll_locked());
    }

    #[test]
    fn test_variant_dialog_auto_closes() {
        let t0 = Instant::now();
        let context = ModalContext::default();
        let mut showcase = Showcase::new(&context);
        showcase.open(Section::Variant, t0);

        showcase.tick(t0 + ms(1999));
        assert!(showcase.modal(Dialog::Variant).unwrap().is_open());
        showcase.tick(t0 + ms(2000));
        assert!(!showcase.modal(Dialog::Variant).unwrap().is_open());
        showcase.tick(t0 + ms(2300));
        assert!(!showcase.is_active());
    }

    #[test]
    fn test_custom_confirm_chains_success_dialog() {
        let t0 = Instant::now();
        let context = ModalContext::default();
        let mut showcase = Showcase::new(&context);
        showcase.open(Section::Custom, t0);

        // Initial focus is on the confirm ("Do") button
        showcase.handle_key(key(KeyCode::Enter), t0).unwrap();
        assert!(!showcase.modal(Dialog::Custom).unwrap().is_open());
        assert!(showcase.modal(Dialog::CustomSuccess).unwrap().is_open());
        assert_eq!(showcase.top(), Some(Dialog::CustomSuccess));

        // The first dialog unmounts while the second stays up
        showcase.tick(t0 + ms(300));
        assert!(!showcase.modal(Dialog::Custom).unwrap().is_mounted());
        assert!(context.document.is_scroll_locked());

        showcase.tick(t0 + ms(2000));
        showcase.tick(t0 + ms(2300));
        assert!(!showcase.is_active());
        assert!(!context.document.is_scroll_locked());
    }

    #[test]
    fn test_keys_ignored_without_dialogs() {
        let context = ModalContext::default();
        let mut showcase = Showcase::new(&context);
        let handled = showcase
            .handle_key(key(KeyCode::Esc), Instant::now())
            .unwrap();
        assert_eq!(handled, Handled::Ignored);
    }
}

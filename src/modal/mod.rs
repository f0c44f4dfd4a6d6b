//! Accessible, animated modal dialog.
//!
//! A [`Modal`] is owned by its host, which decides whether it should be open
//! and reacts to the [`ModalEvent`]s it emits. The dialog itself manages:
//!
//! - mounting and a delayed unmount so the exit fade can play
//! - the page scroll lock and its keyboard listener while mounted
//! - a focus trap over its focusable elements
//! - an optional auto-close timer
//!
//! Time is passed in explicitly, so the host drives it from its tick:
//!
//! ```ignore
//! modal.set_open(true, Instant::now());
//! // every tick
//! if let Some(ModalEvent::Close(_)) = modal.tick(Instant::now()) {
//!     modal.set_open(false, Instant::now());
//! }
//! ```

mod focus;
mod length;
mod lifecycle;
mod node;
mod options;
mod render;
mod style;
mod timer;
mod view;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::Rect;
use tracing::debug;

pub use focus::FocusOrigin;
pub use length::{Length, PX_PER_CELL};
pub use lifecycle::{FADE_DURATION, Phase};
pub use node::{Focusable, Node, Tag};
pub use options::{Content, DEFAULT_CLASS_NAME, ModalOptions, Variant};
pub use render::{Hit, HitMap};
pub use style::{BorderKind, ClassStyles, ColorValue, ModalStyles, Rule, StyleSheet};
pub use view::{CLOSE_LABEL, ElementIds, FORCE_FOCUS_VISIBLE_CLASS};

use crate::Theme;
use crate::config::{DialogAction, KeyResolver};
use crate::document::{Document, MountGuard};
use crate::ui::{Component, Handled, Result};
use focus::FocusState;
use lifecycle::{Lifecycle, Transition};
use render::Painter;
use timer::Timer;
use view::Target;

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

/// Why the dialog asks to be closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Backdrop,
    CloseButton,
    CancelButton,
    Escape,
    /// Enter pressed on a dialog without footer.
    Enter,
    Timeout,
}

/// Requests from the dialog to its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    /// The host should set the dialog closed.
    Close(CloseReason),
    /// The confirm button was activated.
    Confirm,
}

/// Shared environment of the dialogs of one application.
#[derive(Clone)]
pub struct ModalContext {
    pub document: Document,
    pub resolver: Arc<KeyResolver>,
    pub stylesheet: Arc<StyleSheet>,
}

impl Default for ModalContext {
    fn default() -> Self {
        Self {
            document: Document::new(),
            resolver: Arc::new(KeyResolver::default()),
            stylesheet: Arc::new(StyleSheet::builtin()),
        }
    }
}

pub struct Modal {
    ids: ElementIds,
    options: ModalOptions,
    context: ModalContext,
    open_requested: bool,
    lifecycle: Lifecycle,
    auto_close: Option<Timer>,
    guard: Option<MountGuard>,
    focus: FocusState,
    hits: HitMap,
}

impl Modal {
    pub fn new(options: ModalOptions, context: ModalContext) -> Self {
        let instance = NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed);
        Self {
            ids: ElementIds::new(instance),
            options,
            context,
            open_requested: false,
            lifecycle: Lifecycle::default(),
            auto_close: None,
            guard: None,
            focus: FocusState::default(),
            hits: HitMap::default(),
        }
    }

    pub const fn options(&self) -> &ModalOptions {
        &self.options
    }

    pub const fn ids(&self) -> &ElementIds {
        &self.ids
    }

    /// Whether the host currently wants the dialog open.
    pub const fn is_open(&self) -> bool {
        self.open_requested
    }

    pub const fn is_mounted(&self) -> bool {
        self.lifecycle.is_mounted()
    }

    pub const fn is_exiting(&self) -> bool {
        self.lifecycle.is_exiting()
    }

    pub const fn phase(&self) -> Phase {
        self.lifecycle.phase()
    }

    /// Key of the focused element.
    pub fn focused(&self) -> Option<&str> {
        self.focus.active()
    }

    /// Regions of the last rendered frame.
    pub const fn hits(&self) -> &HitMap {
        &self.hits
    }

    /// Apply the host's open flag.
    pub fn set_open(&mut self, open: bool, now: Instant) {
        if open == self.open_requested {
            return;
        }
        self.open_requested = open;

        if open {
            match self.lifecycle.open(now) {
                Some(Transition::Mounted) => {
                    self.guard = Some(self.context.document.mount());
                    debug!(dialog = %self.ids.prefix, "Dialog mounted");
                }
                Some(Transition::Reopened) => {
                    debug!(dialog = %self.ids.prefix, "Dialog reopened, unmount cancelled");
                }
                _ => {}
            }
            self.place_initial_focus();
            self.arm_auto_close(now);
        } else {
            self.auto_close = None;
            if self.lifecycle.close(now).is_some() {
                debug!(dialog = %self.ids.prefix, "Dialog closing");
            }
        }
    }

    /// Replace the display options.
    ///
    /// A changed `time_to_close` restarts the auto-close timer when open; a
    /// changed `show_footer` re-places the initial focus when mounted.
    pub fn set_options(&mut self, options: ModalOptions, now: Instant) {
        let footer_changed = options.show_footer != self.options.show_footer;
        let delay_changed = options.time_to_close != self.options.time_to_close;
        self.options = options;

        if delay_changed && self.open_requested {
            self.arm_auto_close(now);
        }
        if footer_changed && self.is_mounted() {
            self.place_initial_focus();
        }
    }

    /// Advance timers. Returns the auto-close request when it fires.
    pub fn tick(&mut self, now: Instant) -> Option<ModalEvent> {
        let event = (self.open_requested && Timer::fire(&mut self.auto_close, now))
            .then_some(ModalEvent::Close(CloseReason::Timeout));
        if event.is_some() {
            debug!(dialog = %self.ids.prefix, "Auto-close timer fired");
        }

        match self.lifecycle.poll(now) {
            Some(Transition::Unmounted) => self.release(),
            Some(Transition::Settled) => {
                debug!(dialog = %self.ids.prefix, "Dialog fully shown");
            }
            _ => {}
        }
        event
    }

    /// Unmount immediately, skipping the exit fade.
    pub fn teardown(&mut self) {
        self.open_requested = false;
        self.auto_close = None;
        self.lifecycle.reset();
        self.release();
    }

    /// Element tree of the mounted dialog.
    pub fn view(&self) -> Option<Node> {
        self.is_mounted().then(|| {
            view::build(
                &self.options,
                &self.ids,
                self.lifecycle.is_exiting(),
                self.focus.is_forced(&self.ids.confirm),
            )
        })
    }

    /// Paint the dialog over the whole frame at the fade level of `now`.
    pub fn draw(&mut self, frame: &mut Frame, theme: &Theme, now: Instant) {
        let Some(tree) = self.view() else {
            self.hits = HitMap::default();
            return;
        };
        let styles =
            self.context
                .stylesheet
                .resolve(&self.options.class_name, self.options.variant, theme);
        self.hits = Painter {
            tree: &tree,
            ids: &self.ids,
            styles: &styles,
            focus: &self.focus,
            theme,
            fade: self.lifecycle.fade(now),
        }
        .paint(frame);
    }

    fn release(&mut self) {
        if self.guard.take().is_some() {
            debug!(dialog = %self.ids.prefix, "Dialog unmounted");
        }
        self.focus.clear();
        self.hits = HitMap::default();
    }

    fn arm_auto_close(&mut self, now: Instant) {
        self.auto_close = self
            .options
            .auto_close_delay()
            .map(|delay| Timer::start(now, delay));
    }

    /// Confirm button with a footer, else the close button.
    fn place_initial_focus(&mut self) {
        self.focus.clear();
        let (target, force_ring) = if self.options.show_footer {
            (self.options.shows_confirm().then_some(&self.ids.confirm), true)
        } else {
            (self.options.btn_close.then_some(&self.ids.close), false)
        };
        if let Some(key) = target {
            let key = key.clone();
            self.focus.place_initial(&key, force_ring);
        }
    }

    fn focus_targets(&self) -> Vec<String> {
        self.view()
            .map(|tree| view::focus_targets(&tree, &self.ids))
            .unwrap_or_default()
    }

    fn activate(&self, key: &str) -> Handled<ModalEvent> {
        match Target::of(key, &self.ids) {
            Target::Close => ModalEvent::Close(CloseReason::CloseButton).into(),
            Target::Cancel => ModalEvent::Close(CloseReason::CancelButton).into(),
            Target::Confirm => ModalEvent::Confirm.into(),
            Target::Content => Handled::Consumed,
        }
    }

    fn activate_focused(&self) -> Handled<ModalEvent> {
        self.focus
            .active()
            .map_or(Handled::Consumed, |key| self.activate(key))
    }
}

impl Component for Modal {
    type Output = ModalEvent;

    /// Keys only reach the dialog while its listener is registered. All keys
    /// are consumed so nothing leaks to the page underneath.
    fn handle_key(&mut self, key: KeyEvent) -> Result<Handled<Self::Output>> {
        if self.guard.is_none() {
            return Ok(Handled::Ignored);
        }
        let resolver = Arc::clone(&self.context.resolver);

        if resolver.matches_dialog(&key, DialogAction::Close) {
            return Ok(ModalEvent::Close(CloseReason::Escape).into());
        }
        if resolver.matches_dialog(&key, DialogAction::FocusPrev) {
            let targets = self.focus_targets();
            self.focus.cycle(&targets, true);
            return Ok(Handled::Consumed);
        }
        if resolver.matches_dialog(&key, DialogAction::FocusNext) {
            let targets = self.focus_targets();
            self.focus.cycle(&targets, false);
            return Ok(Handled::Consumed);
        }
        if resolver.matches_dialog(&key, DialogAction::Submit) {
            if !self.options.show_footer {
                return Ok(ModalEvent::Close(CloseReason::Enter).into());
            }
            return Ok(self.activate_focused());
        }
        if resolver.matches_dialog(&key, DialogAction::Activate) {
            return Ok(self.activate_focused());
        }
        Ok(Handled::Consumed)
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<Handled<Self::Output>> {
        if self.guard.is_none() {
            return Ok(Handled::Ignored);
        }
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(Handled::Consumed);
        }
        let handled = match self.hits.hit(mouse.column, mouse.row) {
            Some(Hit::Target(key)) => {
                self.focus.focus(&key, FocusOrigin::Pointer);
                self.activate(&key)
            }
            Some(Hit::Backdrop) => ModalEvent::Close(CloseReason::Backdrop).into(),
            Some(Hit::Container) | None => Handled::Consumed,
        };
        Ok(handled)
    }

    /// Dialogs portal into the frame root; `area` is ignored.
    fn render(&mut self, frame: &mut Frame, _area: Rect, theme: &Theme) {
        self.draw(frame, theme, Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::HandledResultExt;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Duration;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(modal: &mut Modal, code: KeyCode) -> Handled<ModalEvent> {
        modal.handle_key(key(code)).unwrap()
    }

    fn click(modal: &mut Modal, column: u16, row: u16) -> Handled<ModalEvent> {
        modal
            .handle_mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            })
            .unwrap()
    }

    fn modal_with(options: ModalOptions) -> (Modal, Document) {
        let context = ModalContext::default();
        let document = context.document.clone();
        (Modal::new(options, context), document)
    }

    fn draw(modal: &mut Modal, now: Instant) {
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| modal.draw(frame, &theme, now)).unwrap();
    }

    #[test]
    fn test_mounted_while_open_or_exiting() {
        let t0 = Instant::now();
        let (mut modal, _) = modal_with(ModalOptions::new());
        assert!(!modal.is_mounted());
        assert!(modal.view().is_none());

        modal.set_open(true, t0);
        assert!(modal.is_mounted());
        assert!(!modal.is_exiting());

        modal.tick(t0 + ms(500));
        assert_eq!(modal.phase(), Phase::Open);

        modal.set_open(false, t0 + ms(1000));
        assert!(modal.is_mounted());
        assert!(modal.is_exiting());
        let tree = modal.view().unwrap();
        assert!(tree.find_by_class("overlay-fade-out").is_some());
        assert!(tree.find_by_class("container-fade-out").is_some());
    }

    #[test]
    fn test_unmounts_exactly_at_fade_end() {
        let t0 = Instant::now();
        let (mut modal, document) = modal_with(ModalOptions::new());
        modal.set_open(true, t0);
        modal.set_open(false, t0 + ms(1000));

        modal.tick(t0 + ms(1299));
        assert!(modal.is_mounted());
        assert!(document.is_scroll_locked());

        modal.tick(t0 + ms(1300));
        assert!(!modal.is_mounted());
        assert!(!document.is_scroll_locked());
        assert_eq!(document.key_listener_count(), 0);

        // Later ticks do nothing more
        modal.tick(t0 + ms(5000));
        assert_eq!(modal.phase(), Phase::Closed);
    }

    #[test]
    fn test_auto_close_fires_once() {
        let t0 = Instant::now();
        let options = ModalOptions::new().with_time_to_close(ms(2000));
        let (mut modal, _) = modal_with(options);
        modal.set_open(true, t0);

        assert_eq!(modal.tick(t0 + ms(1999)), None);
        assert_eq!(
            modal.tick(t0 + ms(2000)),
            Some(ModalEvent::Close(CloseReason::Timeout))
        );
        assert_eq!(modal.tick(t0 + ms(2500)), None);
    }

    #[test]
    fn test_auto_close_cancelled_by_close() {
        let t0 = Instant::now();
        let options = ModalOptions::new().with_time_to_close(ms(2000));
        let (mut modal, _) = modal_with(options);
        modal.set_open(true, t0);
        modal.set_open(false, t0 + ms(500));
        assert_eq!(modal.tick(t0 + ms(2500)), None);
    }

    #[test]
    fn test_changed_delay_restarts_auto_close() {
        let t0 = Instant::now();
        let options = ModalOptions::new().with_time_to_close(ms(2000));
        let (mut modal, _) = modal_with(options.clone());
        modal.set_open(true, t0);

        modal.set_options(options.clone().with_time_to_close(ms(1000)), t0 + ms(1500));
        assert_eq!(modal.tick(t0 + ms(2000)), None);
        assert_eq!(
            modal.tick(t0 + ms(2500)),
            Some(ModalEvent::Close(CloseReason::Timeout))
        );

        // Same delay again does not re-arm
        modal.set_options(options.with_time_to_close(ms(1000)), t0 + ms(2600));
        assert_eq!(modal.tick(t0 + ms(9000)), None);
    }

    #[test]
    fn test_enter_closes_only_without_footer() {
        let t0 = Instant::now();
        let (mut modal, _) = modal_with(ModalOptions::new().with_footer(false));
        modal.set_open(true, t0);
        assert_eq!(
            press(&mut modal, KeyCode::Enter),
            Handled::Event(ModalEvent::Close(CloseReason::Enter))
        );

        let (mut modal, _) = modal_with(ModalOptions::new());
        modal.set_open(true, t0);
        // Initial focus is on confirm, so Enter confirms rather than closing
        assert_eq!(
            press(&mut modal, KeyCode::Enter),
            Handled::Event(ModalEvent::Confirm)
        );
    }

    #[test]
    fn test_escape_always_closes() {
        let t0 = Instant::now();
        let (mut modal, _) = modal_with(ModalOptions::new());
        modal.set_open(true, t0);
        assert_eq!(
            press(&mut modal, KeyCode::Esc),
            Handled::Event(ModalEvent::Close(CloseReason::Escape))
        );
    }

    #[test]
    fn test_keys_ignored_when_not_mounted() {
        let (mut modal, _) = modal_with(ModalOptions::new());
        assert_eq!(press(&mut modal, KeyCode::Esc), Handled::Ignored);
        let (consumed, event) = modal.handle_key(key(KeyCode::Tab)).process();
        assert!(!consumed);
        assert!(event.is_none());
    }

    #[test]
    fn test_other_keys_are_swallowed() {
        let t0 = Instant::now();
        let (mut modal, _) = modal_with(ModalOptions::new());
        modal.set_open(true, t0);
        assert_eq!(press(&mut modal, KeyCode::Char('x')), Handled::Consumed);
    }

    #[test]
    fn test_empty_confirm_text_omits_button() {
        let t0 = Instant::now();
        let (mut modal, _) = modal_with(ModalOptions::new().with_confirm_text(""));
        modal.set_open(true, t0);
        let tree = modal.view().unwrap();
        assert!(tree.find_by_class("modal-btn-confirm").is_none());
        assert!(tree.find_by_class("modal-btn-cancel").is_some());
        assert_eq!(modal.focused(), None);
    }

    #[test]
    fn test_tab_wraps_both_ways() {
        let t0 = Instant::now();
        let (mut modal, _) = modal_with(ModalOptions::new());
        modal.set_open(true, t0);
        let ids = modal.ids().clone();
        assert_eq!(modal.focused(), Some(ids.confirm.as_str()));

        // close, cancel, confirm: Tab on the last goes to the first
        press(&mut modal, KeyCode::Tab);
        assert_eq!(modal.focused(), Some(ids.close.as_str()));

        // Shift+Tab on the first goes to the last
        press(&mut modal, KeyCode::BackTab);
        assert_eq!(modal.focused(), Some(ids.confirm.as_str()));

        modal
            .handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT))
            .unwrap();
        assert_eq!(modal.focused(), Some(ids.cancel.as_str()));
    }

    #[test]
    fn test_tab_without_focusables_is_noop() {
        let t0 = Instant::now();
        let options = ModalOptions::new()
            .with_footer(false)
            .with_close_button(false);
        let (mut modal, _) = modal_with(options);
        modal.set_open(true, t0);
        assert_eq!(press(&mut modal, KeyCode::Tab), Handled::Consumed);
        assert_eq!(modal.focused(), None);
    }

    #[test]
    fn test_forced_ring_until_first_blur() {
        let t0 = Instant::now();
        let (mut modal, _) = modal_with(ModalOptions::new());
        modal.set_open(true, t0);
        let confirm_has_ring = |modal: &Modal| {
            modal
                .view()
                .and_then(|tree| {
                    tree.find_by_class("modal-btn-confirm")
                        .map(|node| node.has_class(FORCE_FOCUS_VISIBLE_CLASS))
                })
                .unwrap_or(false)
        };
        assert!(confirm_has_ring(&modal));

        press(&mut modal, KeyCode::BackTab);
        assert!(!confirm_has_ring(&modal));
        press(&mut modal, KeyCode::Tab);
        assert!(!confirm_has_ring(&modal));
    }

    #[test]
    fn test_initial_focus_without_footer_is_close_button() {
        let t0 = Instant::now();
        let (mut modal, _) = modal_with(ModalOptions::new().with_footer(false));
        modal.set_open(true, t0);
        let close = modal.ids().close.clone();
        assert_eq!(modal.focused(), Some(close.as_str()));
        assert_eq!(
            press(&mut modal, KeyCode::Char(' ')),
            Handled::Event(ModalEvent::Close(CloseReason::CloseButton))
        );
    }

    #[test]
    fn test_footer_toggle_replaces_focus() {
        let t0 = Instant::now();
        let (mut modal, _) = modal_with(ModalOptions::new());
        modal.set_open(true, t0);
        modal.set_options(ModalOptions::new().with_footer(false), t0 + ms(10));
        let close = modal.ids().close.clone();
        assert_eq!(modal.focused(), Some(close.as_str()));
    }

    #[test]
    fn test_reopen_before_unmount_keeps_tree() {
        let t0 = Instant::now();
        let (mut modal, document) = modal_with(ModalOptions::new());
        modal.set_open(true, t0);
        modal.set_open(false, t0 + ms(1000));
        modal.set_open(true, t0 + ms(1100));

        modal.tick(t0 + ms(1400));
        assert!(modal.is_mounted());
        assert!(!modal.is_exiting());
        assert!(document.is_scroll_locked());
        assert_eq!(document.key_listener_count(), 1);
        let confirm = modal.ids().confirm.clone();
        assert_eq!(modal.focused(), Some(confirm.as_str()));
    }

    #[test]
    fn test_scroll_lock_set_and_restored_once() {
        let t0 = Instant::now();
        let (mut modal, document) = modal_with(ModalOptions::new());
        document.set_root_overflow(Some("auto"));

        modal.set_open(true, t0);
        assert_eq!(document.root_overflow().as_deref(), Some("hidden"));
        assert_eq!(document.key_listener_count(), 1);

        modal.set_open(false, t0 + ms(100));
        modal.tick(t0 + ms(400));
        assert_eq!(document.root_overflow().as_deref(), Some("auto"));
        assert_eq!(document.key_listener_count(), 0);
    }

    #[test]
    fn test_drop_while_mounted_releases_document() {
        let t0 = Instant::now();
        let (mut modal, document) = modal_with(ModalOptions::new());
        modal.set_open(true, t0);
        modal.set_open(false, t0 + ms(100));
        drop(modal);
        assert_eq!(document.root_overflow(), None);
        assert_eq!(document.key_listener_count(), 0);
    }

    #[test]
    fn test_teardown_skips_fade() {
        let t0 = Instant::now();
        let (mut modal, document) = modal_with(ModalOptions::new());
        modal.set_open(true, t0);
        modal.teardown();
        assert!(!modal.is_mounted());
        assert!(!modal.is_open());
        assert!(!document.is_scroll_locked());
    }

    #[test]
    fn test_overlapping_dialogs_share_scroll_lock() {
        let t0 = Instant::now();
        let context = ModalContext::default();
        let document = context.document.clone();
        let mut first = Modal::new(ModalOptions::new(), context.clone());
        let mut second = Modal::new(ModalOptions::new(), context);
        assert_ne!(first.ids().prefix, second.ids().prefix);

        first.set_open(true, t0);
        first.set_open(false, t0 + ms(10));
        second.set_open(true, t0 + ms(10));
        first.tick(t0 + ms(400));
        assert!(document.is_scroll_locked());

        second.set_open(false, t0 + ms(500));
        second.tick(t0 + ms(800));
        assert!(!document.is_scroll_locked());
    }

    #[test]
    fn test_mouse_backdrop_buttons_and_container() {
        let t0 = Instant::now();
        let (mut modal, _) = modal_with(ModalOptions::new().with_content("Body"));
        modal.set_open(true, t0);
        draw(&mut modal, t0 + ms(400));

        assert_eq!(
            click(&mut modal, 0, 0),
            Handled::Event(ModalEvent::Close(CloseReason::Backdrop))
        );

        let container = modal.hits().container;
        assert_eq!(
            click(&mut modal, container.x + 1, container.y + 1),
            Handled::Consumed
        );

        let ids = modal.ids().clone();
        let cancel = modal.hits().target(&ids.cancel).unwrap();
        assert_eq!(
            click(&mut modal, cancel.x, cancel.y),
            Handled::Event(ModalEvent::Close(CloseReason::CancelButton))
        );
        assert_eq!(modal.focused(), Some(ids.cancel.as_str()));

        let confirm = modal.hits().target(&ids.confirm).unwrap();
        assert_eq!(
            click(&mut modal, confirm.x, confirm.y),
            Handled::Event(ModalEvent::Confirm)
        );

        let close = modal.hits().target(&ids.close).unwrap();
        assert_eq!(
            click(&mut modal, close.x, close.y),
            Handled::Event(ModalEvent::Close(CloseReason::CloseButton))
        );
    }

    #[test]
    fn test_unmounted_dialog_draws_nothing() {
        let t0 = Instant::now();
        let (mut modal, _) = modal_with(ModalOptions::new());
        draw(&mut modal, t0);
        assert_eq!(modal.hits(), &HitMap::default());
    }
}

use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::{Constraint, Layout, Rect};
use tokio::sync::mpsc;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info};

use ptdx_modal::Theme;
use ptdx_modal::config::{AppConfig, KeyResolver};
use ptdx_modal::modal::{ModalContext, StyleSheet};
use ptdx_modal::ui::{Component, Handled, HandledResultExt};

use crate::demo::{Page, PageEvent, Section, Showcase, StatusBar};
use crate::tui::{Event, Tui};

#[derive(Debug, Clone, PartialEq)]
enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Open(Section),
    Quit,
    Suspend,
    Resume,
    ClearScreen,
}

pub struct App {
    page: Page,
    showcase: Showcase,
    status_bar: StatusBar,
    context: ModalContext,
    theme: Theme,
    tick_rate: f64,
    frame_rate: f64,
    should_quit: bool,
    should_suspend: bool,
    action_tx: UnboundedSender<Action>,
    action_rx: UnboundedReceiver<Action>,
}

impl App {
    pub fn new(
        config: &AppConfig,
        resolver: Arc<KeyResolver>,
        stylesheet: Arc<StyleSheet>,
        theme: Theme,
    ) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let context = ModalContext {
            document: ptdx_modal::document::Document::new(),
            resolver: Arc::clone(&resolver),
            stylesheet,
        };
        Self {
            page: Page::new(context.document.clone(), Arc::clone(&resolver)),
            showcase: Showcase::new(&context),
            status_bar: StatusBar::new(resolver),
            context,
            theme,
            tick_rate: config.ui.tick_rate,
            frame_rate: config.ui.frame_rate,
            should_quit: false,
            should_suspend: false,
            action_tx,
            action_rx,
        }
    }

    /// Open one of the example dialogs.
    pub fn open(&mut self, section: Section) {
        self.showcase.open(section, Instant::now());
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = Tui::new(self.frame_rate, self.tick_rate)?;
        tui.enter()?;

        loop {
            self.handle_events(&mut tui).await?;
            self.handle_actions(&mut tui)?;
            if self.should_suspend {
                tui.suspend()?;
                self.action_tx.send(Action::Resume)?;
                self.action_tx.send(Action::ClearScreen)?;
                tui.resume()?;
            } else if self.should_quit {
                break;
            }
        }

        tui.exit()?;
        info!("Exiting");
        Ok(())
    }

    async fn handle_events(&mut self, tui: &mut Tui) -> color_eyre::Result<()> {
        let Some(event) = tui.next_event().await else {
            return Ok(());
        };

        match event {
            Event::Quit => self.action_tx.send(Action::Quit)?,
            Event::Suspend => self.action_tx.send(Action::Suspend)?,
            Event::Tick => self.action_tx.send(Action::Tick)?,
            Event::Render => self.action_tx.send(Action::Render)?,
            Event::Resize(width, height) => self.action_tx.send(Action::Resize(width, height))?,
            Event::Key(key) => self.handle_key(key)?,
            Event::Mouse(mouse) => self.handle_mouse(mouse)?,
            Event::Error(message) => error!(%message, "Terminal event error"),
            Event::Init => debug!("Event loop started"),
        }
        Ok(())
    }

    /// Dialogs with a registered key listener get keys before the page.
    fn handle_key(&mut self, key: KeyEvent) -> color_eyre::Result<()> {
        if self.context.document.key_listener_count() > 0 {
            let (consumed, _) = self.showcase.handle_key(key, Instant::now()).process();
            if consumed {
                return Ok(());
            }
        }
        let handled = self.page.handle_key(key)?;
        self.handle_page(handled)
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> color_eyre::Result<()> {
        if self.showcase.is_active() {
            let (consumed, _) = self.showcase.handle_mouse(mouse, Instant::now()).process();
            if consumed {
                return Ok(());
            }
        }
        let handled = self.page.handle_mouse(mouse)?;
        self.handle_page(handled)
    }

    fn handle_page(&mut self, handled: Handled<PageEvent>) -> color_eyre::Result<()> {
        match handled.event() {
            Some(PageEvent::Open(section)) => self.action_tx.send(Action::Open(section))?,
            Some(PageEvent::Quit) => self.action_tx.send(Action::Quit)?,
            None => {}
        }
        Ok(())
    }

    fn handle_actions(&mut self, tui: &mut Tui) -> color_eyre::Result<()> {
        while let Ok(action) = self.action_rx.try_recv() {
            if action != Action::Tick && action != Action::Render {
                debug!(?action, "Handling action");
            }

            match action {
                Action::Tick => self.showcase.tick(Instant::now()),
                Action::Render => self.render(tui)?,
                Action::Resize(width, height) => {
                    tui.resize(Rect::new(0, 0, width, height))?;
                    self.render(tui)?;
                }
                Action::Open(section) => self.showcase.open(section, Instant::now()),
                Action::Quit => self.should_quit = true,
                Action::Suspend => self.should_suspend = true,
                Action::Resume => self.should_suspend = false,
                Action::ClearScreen => tui.clear()?,
            }
        }
        Ok(())
    }

    fn render(&mut self, tui: &mut Tui) -> color_eyre::Result<()> {
        let now = Instant::now();
        tui.draw(|frame| {
            let [body, status] =
                Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());
            self.page.render(frame, body, &self.theme);
            self.status_bar
                .render(frame, status, &self.theme, self.showcase.is_active());
            // Dialogs last: they portal over everything
            self.showcase.render(frame, &self.theme, now);
        })?;
        Ok(())
    }
}

//! Component trait for reusable UI building blocks.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::Theme;
use crate::ui::{Handled, Result};

/// Interactive UI building block.
///
/// Components handle key and mouse events and emit generic outputs to
/// their host. They know nothing about the host's state.
pub trait Component {
    /// The output type this component produces.
    type Output;

    /// Handle a key event.
    ///
    /// Returns `Ok(Handled::...)` where:
    /// - `Ignored` - key was not handled, parent should process it
    /// - `Consumed` - key was handled but produced no output
    /// - `Event(output)` - key was handled and produced an output
    fn handle_key(&mut self, key: KeyEvent) -> Result<Handled<Self::Output>> {
        _ = key;
        Ok(Handled::Ignored)
    }

    /// Handle a mouse event.
    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<Handled<Self::Output>> {
        _ = mouse;
        Ok(Handled::Ignored)
    }

    /// Render the component to the frame.
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme);
}

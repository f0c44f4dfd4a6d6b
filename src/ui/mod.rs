//! UI building blocks shared by the modal and its hosts.
//!
//! - [`Component`] - Reusable, interactive UI building blocks
//! - [`Handled`] - Result of handling an input event

mod component;

pub use component::Component;

/// Result type alias for UI operations.
pub type Result<T> = std::result::Result<T, color_eyre::Report>;

/// Result of handling an input event.
///
/// This enum represents the three possible outcomes of handling an event:
/// - `Ignored` - The handler didn't recognize or handle this input
/// - `Consumed` - The input was handled but produced no message
/// - `Event(E)` - The input was handled and produced a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handled<E> {
    /// Input was not handled, parent should process it.
    Ignored,
    /// Input was consumed but produced no event.
    Consumed,
    /// Input was consumed and produced an event.
    Event(E),
}

impl<E> Handled<E> {
    /// Returns true if the input was consumed (not ignored).
    pub const fn is_consumed(&self) -> bool {
        !matches!(self, Self::Ignored)
    }

    /// Returns the event if present.
    pub fn event(self) -> Option<E> {
        match self {
            Self::Event(e) => Some(e),
            _ => None,
        }
    }

    /// Maps the event type using the provided function.
    pub fn map<F, U>(self, f: F) -> Handled<U>
    where
        F: FnOnce(E) -> U,
    {
        match self {
            Self::Ignored => Handled::Ignored,
            Self::Consumed => Handled::Consumed,
            Self::Event(e) => Handled::Event(f(e)),
        }
    }
}

impl<E> From<E> for Handled<E> {
    fn from(event: E) -> Self {
        Self::Event(event)
    }
}

/// Extension trait for processing `Result<Handled<E>>` in event handlers.
pub trait HandledResultExt<E> {
    /// Process the result, returning whether it was consumed and any event.
    ///
    /// Errors are treated as consumed (returns `(true, None)`).
    fn process(self) -> (bool, Option<E>);
}

impl<E> HandledResultExt<E> for Result<Handled<E>> {
    fn process(self) -> (bool, Option<E>) {
        match self {
            Ok(Handled::Event(e)) => (true, Some(e)),
            Ok(Handled::Consumed) => (true, None),
            Ok(Handled::Ignored) => (false, None),
            Err(_) => (true, None),
        }
    }
}

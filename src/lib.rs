//! Accessible, animated modal dialogs for ratatui applications.
//!
//! The [`modal::Modal`] component renders over the whole terminal, locks the
//! host page's scrolling while it is mounted, traps keyboard focus and can
//! close itself after a timeout. See the `ptdx-modal-demo` binary for a
//! showcase of its options.

pub mod config;
pub mod document;
pub mod modal;
pub mod theme;
pub mod ui;

pub use theme::Theme;

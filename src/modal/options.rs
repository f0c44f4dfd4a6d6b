use std::fmt;
use std::time::Duration;

use tracing::warn;

use super::length::Length;
use super::node::Node;

/// Default wrapper class; also the stylesheet key of the base look.
pub const DEFAULT_CLASS_NAME: &str = "modal-wrapper";

/// Visual preset selecting the container border and background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Default,
    Success,
    Error,
}

impl Variant {
    /// Lenient parse: anything unrecognised is [`Variant::Default`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "error" => Self::Error,
            _ => Self::Default,
        }
    }

    /// Container class carrying the variant styling.
    pub const fn container_class(self) -> &'static str {
        match self {
            Self::Default => "modal-container",
            Self::Success => "modal-container-success",
            Self::Error => "modal-container-error",
        }
    }
}

impl From<&str> for Variant {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Default => "default",
            Self::Success => "success",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}

/// Body of the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Plain text, wrapped in a paragraph and used as the accessible description.
    Text(String),
    /// Caller-built tree, rendered as-is.
    Node(Node),
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Node> for Content {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

/// Display configuration of a dialog.
///
/// The open flag is not part of the options: the host owns it and passes it
/// through `Modal::set_open`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalOptions {
    pub content: Option<Content>,
    pub title: Option<String>,
    pub btn_close: bool,
    pub width: Length,
    /// Empty text omits the confirm button.
    pub confirm_text: String,
    /// Empty text omits the cancel button.
    pub cancel_text: String,
    pub show_footer: bool,
    pub class_name: String,
    pub variant: Variant,
    pub time_to_close: Option<Duration>,
}

impl Default for ModalOptions {
    fn default() -> Self {
        Self {
            content: None,
            title: None,
            btn_close: true,
            width: Length::default(),
            confirm_text: "OK".to_string(),
            cancel_text: "Cancel".to_string(),
            show_footer: true,
            class_name: DEFAULT_CLASS_NAME.to_string(),
            variant: Variant::Default,
            time_to_close: None,
        }
    }
}

impl ModalOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<Content>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.title = (!title.is_empty()).then_some(title);
        self
    }

    #[must_use]
    pub const fn with_close_button(mut self, show: bool) -> Self {
        self.btn_close = show;
        self
    }

    /// Set the width from a CSS length; invalid values keep the default width.
    #[must_use]
    pub fn with_width(mut self, width: &str) -> Self {
        self.width = width.parse().unwrap_or_else(|error| {
            warn!(%error, "Ignoring dialog width");
            Length::default()
        });
        self
    }

    #[must_use]
    pub fn with_confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = text.into();
        self
    }

    #[must_use]
    pub fn with_cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = text.into();
        self
    }

    #[must_use]
    pub const fn with_footer(mut self, show: bool) -> Self {
        self.show_footer = show;
        self
    }

    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    #[must_use]
    pub fn with_variant(mut self, variant: impl Into<Variant>) -> Self {
        self.variant = variant.into();
        self
    }

    #[must_use]
    pub const fn with_time_to_close(mut self, delay: Duration) -> Self {
        self.time_to_close = Some(delay);
        self
    }

    /// Auto-close delay, only when positive.
    pub fn auto_close_delay(&self) -> Option<Duration> {
        self.time_to_close.filter(|delay| !delay.is_zero())
    }

    pub const fn has_text_content(&self) -> bool {
        matches!(self.content, Some(Content::Text(_)))
    }

    pub fn shows_confirm(&self) -> bool {
        self.show_footer && !self.confirm_text.is_empty()
    }

    pub fn shows_cancel(&self) -> bool {
        self.show_footer && !self.cancel_text.is_empty()
    }
}

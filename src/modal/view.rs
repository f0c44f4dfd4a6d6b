//! Element tree of a mounted dialog.

use super::node::Node;
use super::options::{Content, ModalOptions};

pub const OVERLAY_CLASS: &str = "modal-overlay";
pub const OVERLAY_FADE_OUT_CLASS: &str = "overlay-fade-out";
pub const BORDER_CLASS: &str = "modal-border";
pub const CONTAINER_FADE_OUT_CLASS: &str = "container-fade-out";
pub const FORCE_FOCUS_VISIBLE_CLASS: &str = "modal-forceFocusVisible";
pub const CLOSE_LABEL: &str = "Close dialog box";
pub const CLOSE_GLYPH: &str = "×";

/// Element ids of one dialog instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIds {
    pub prefix: String,
    pub title: String,
    pub content: String,
    pub close: String,
    pub cancel: String,
    pub confirm: String,
}

impl ElementIds {
    pub fn new(instance: u64) -> Self {
        let prefix = format!("modal-{instance}");
        Self {
            title: format!("{prefix}-title"),
            content: format!("{prefix}-content"),
            close: format!("{prefix}-close"),
            cancel: format!("{prefix}-cancel"),
            confirm: format!("{prefix}-confirm"),
            prefix,
        }
    }
}

/// Build the tree for the current options.
///
/// `exiting` adds the fade-out classes; `force_ring` puts the forced
/// focus-ring class on the confirm button.
pub fn build(options: &ModalOptions, ids: &ElementIds, exiting: bool, force_ring: bool) -> Node {
    let mut overlay = Node::div()
        .with_class(OVERLAY_CLASS)
        .with_attr("role", "dialog")
        .with_attr("aria-modal", "true");
    if exiting {
        overlay = overlay.with_class(OVERLAY_FADE_OUT_CLASS);
    }
    if options.title.is_some() {
        overlay = overlay.with_attr("aria-labelledby", ids.title.as_str());
    }
    if options.has_text_content() {
        overlay = overlay.with_attr("aria-describedby", ids.content.as_str());
    }

    let mut container = Node::div()
        .with_class(BORDER_CLASS)
        .with_class(options.variant.container_class())
        .with_attr("style", format!("width: {}", options.width));
    if exiting {
        container = container.with_class(CONTAINER_FADE_OUT_CLASS);
    }

    if let Some(title) = &options.title {
        container = container.with_child(
            Node::heading(title.as_str())
                .with_class("modal-title")
                .with_id(ids.title.as_str()),
        );
    }

    if options.btn_close {
        container = container.with_child(
            Node::button(CLOSE_GLYPH)
                .with_id(ids.close.as_str())
                .with_class("modal-close")
                .with_attr("aria-label", CLOSE_LABEL)
                .with_attr("title", CLOSE_LABEL),
        );
    }

    let mut body = Node::div().with_class("modal-content");
    match &options.content {
        Some(Content::Text(text)) => {
            body = body
                .with_id(ids.content.as_str())
                .with_child(Node::paragraph(text.as_str()));
        }
        Some(Content::Node(node)) => body = body.with_child(node.clone()),
        None => {}
    }
    container = container.with_child(body);

    if options.show_footer {
        let mut footer = Node::div().with_class("modal-footer");
        if options.shows_cancel() {
            footer = footer.with_child(
                Node::button(options.cancel_text.as_str())
                    .with_id(ids.cancel.as_str())
                    .with_classes("modal-btn modal-btn-cancel")
                    .with_attr("aria-label", "Cancel")
                    .with_attr("title", "Cancel"),
            );
        }
        if options.shows_confirm() {
            let mut confirm = Node::button(options.confirm_text.as_str())
                .with_id(ids.confirm.as_str())
                .with_classes("modal-btn modal-btn-confirm")
                .with_attr("aria-label", "Confirm")
                .with_attr("title", "Confirm");
            if force_ring {
                confirm = confirm.with_class(FORCE_FOCUS_VISIBLE_CLASS);
            }
            footer = footer.with_child(confirm);
        }
        container = container.with_child(footer);
    }

    Node::div()
        .with_classes(&options.class_name)
        .with_child(overlay.with_child(container))
}

/// The bordered container inside a built tree.
pub fn container(tree: &Node) -> Option<&Node> {
    tree.find_by_class(BORDER_CLASS)
}

/// Focus keys of the focusable elements inside the container.
pub fn focus_targets(tree: &Node, ids: &ElementIds) -> Vec<String> {
    container(tree).map_or_else(Vec::new, |container| container.focus_keys(&ids.prefix))
}

/// What a focus key activates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Close,
    Cancel,
    Confirm,
    /// A focusable element inside caller-supplied content.
    Content,
}

impl Target {
    pub fn of(key: &str, ids: &ElementIds) -> Self {
        if key == ids.close {
            Self::Close
        } else if key == ids.cancel {
            Self::Cancel
        } else if key == ids.confirm {
            Self::Confirm
        } else {
            Self::Content
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::node::Tag;
    use crate::modal::options::Variant;

    fn ids() -> ElementIds {
        ElementIds::new(7)
    }

    #[test]
    fn test_aria_linkage_with_title_and_text() {
        let options = ModalOptions::new()
            .with_title("Hello")
            .with_content("Body text");
        let tree = build(&options, &ids(), false, false);

        let overlay = tree.find_by_class(OVERLAY_CLASS).unwrap();
        assert_eq!(overlay.attr("role"), Some("dialog"));
        assert_eq!(overlay.attr("aria-modal"), Some("true"));
        assert_eq!(overlay.attr("aria-labelledby"), Some("modal-7-title"));
        assert_eq!(overlay.attr("aria-describedby"), Some("modal-7-content"));

        let title = tree.find_by_id("modal-7-title").unwrap();
        assert_eq!(title.tag(), Tag::Heading);
        assert!(title.has_class("modal-title"));

        let content = tree.find_by_id("modal-7-content").unwrap();
        assert!(content.has_class("modal-content"));
        assert_eq!(content.children()[0].tag(), Tag::Paragraph);
        assert_eq!(content.text_content(), "Body text");
    }

    #[test]
    fn test_no_aria_references_without_title_or_text() {
        let options = ModalOptions::new().with_content(Node::paragraph("custom"));
        let tree = build(&options, &ids(), false, false);
        let overlay = tree.find_by_class(OVERLAY_CLASS).unwrap();
        assert_eq!(overlay.attr("aria-labelledby"), None);
        assert_eq!(overlay.attr("aria-describedby"), None);
        assert!(tree.find_by_id("modal-7-content").is_none());
        assert!(tree.find_by_class("modal-title").is_none());
    }

    #[test]
    fn test_empty_labels_omit_buttons() {
        let options = ModalOptions::new().with_confirm_text("");
        let tree = build(&options, &ids(), false, false);
        assert!(tree.find_by_class("modal-btn-confirm").is_none());
        assert!(tree.find_by_class("modal-btn-cancel").is_some());

        let options = ModalOptions::new().with_cancel_text("");
        let tree = build(&options, &ids(), false, false);
        assert!(tree.find_by_class("modal-btn-cancel").is_none());
        assert!(tree.find_by_class("modal-footer").is_some());
    }

    #[test]
    fn test_no_footer_and_no_close_button() {
        let options = ModalOptions::new()
            .with_footer(false)
            .with_close_button(false);
        let tree = build(&options, &ids(), false, false);
        assert!(tree.find_by_class("modal-footer").is_none());
        assert!(tree.find_by_class("modal-close").is_none());
        assert!(focus_targets(&tree, &ids()).is_empty());
    }

    #[test]
    fn test_close_button_accessible_name() {
        let tree = build(&ModalOptions::new(), &ids(), false, false);
        let close = tree.find_by_class("modal-close").unwrap();
        assert_eq!(close.attr("aria-label"), Some(CLOSE_LABEL));
        assert_eq!(close.attr("title"), Some(CLOSE_LABEL));
    }

    #[test]
    fn test_classes_follow_state() {
        let options = ModalOptions::new()
            .with_variant(Variant::Error)
            .with_class_name("custom-modal")
            .with_width("200px");
        let tree = build(&options, &ids(), true, true);

        assert!(tree.has_class("custom-modal"));
        assert!(
            tree.find_by_class(OVERLAY_CLASS)
                .unwrap()
                .has_class(OVERLAY_FADE_OUT_CLASS)
        );
        let container = container(&tree).unwrap();
        assert!(container.has_class("modal-container-error"));
        assert!(!container.has_class("modal-container"));
        assert!(container.has_class(CONTAINER_FADE_OUT_CLASS));
        assert_eq!(container.attr("style"), Some("width: 200px"));

        let confirm = tree.find_by_class("modal-btn-confirm").unwrap();
        assert!(confirm.has_class(FORCE_FOCUS_VISIBLE_CLASS));
    }

    #[test]
    fn test_focus_targets_in_document_order() {
        let content = Node::div()
            .with_child(Node::paragraph("Pick one"))
            .with_child(Node::link("docs", "https://example.com"));
        let options = ModalOptions::new().with_content(content);
        let tree = build(&options, &ids(), false, false);

        assert_eq!(
            focus_targets(&tree, &ids()),
            vec![
                "modal-7-close".to_string(),
                "modal-7@1.0.1".to_string(),
                "modal-7-cancel".to_string(),
                "modal-7-confirm".to_string(),
            ]
        );
        assert_eq!(Target::of("modal-7@1.0.1", &ids()), Target::Content);
        assert_eq!(Target::of("modal-7-confirm", &ids()), Target::Confirm);
    }
}

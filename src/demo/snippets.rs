//! Code shown on the showcase page.

pub const INSTALL: &str = "cargo add ptdx-modal";

pub const TAGLINE: &str = "Accessible, animated modal dialogs for ratatui";

pub const INTEGRATION: &str = r#"// integration example
use std::time::Instant;
use ptdx_modal::modal::{Modal, ModalContext, ModalEvent, ModalOptions};

let mut modal = Modal::new(ModalOptions::new(), ModalContext::default());

// open it from the host
modal.set_open(true, Instant::now());

// on every tick
if let Some(ModalEvent::Close(_)) = modal.tick(Instant::now()) {
    modal.set_open(false, Instant::now());
}

// on every frame, after the page
modal.draw(frame, &theme, Instant::now());"#;

pub const DEFAULT: &str = r#"ModalOptions::new()
    .with_title("Title of the modal")
    .with_content("custom modal text, custom modal text...")

// ModalEvent::Close(_) | ModalEvent::Confirm => modal.set_open(false, now)"#;

pub const VARIANT: &str = r#"ModalOptions::new()
    .with_footer(false)
    .with_close_button(false)
    .with_content("custom modal text, custom modal text...")
    .with_variant(Variant::Error)
    .with_time_to_close(Duration::from_millis(2000))"#;

pub const CUSTOM: &str = r#"let custom = ModalOptions::new()
    .with_title("Title of the modal")
    .with_content("custom modal text, custom modal text...")
    .with_confirm_text("Do")
    .with_cancel_text("Don't")
    .with_class_name("custom-modal");

// on ModalEvent::Confirm from the first dialog:
//     custom.set_open(false, now);
//     success.set_open(true, now);

let success = ModalOptions::new()
    .with_footer(false)
    .with_close_button(false)
    .with_content("success")
    .with_variant(Variant::Success)
    .with_width("200px")
    .with_time_to_close(Duration::from_millis(2000))
    .with_class_name("custom-modal");"#;

pub const CUSTOM_STYLES: &str = r##"# config.toml: custom style example

[styles.custom-modal.overlay]
bg = "#4b520b"

[styles.custom-modal.footer]
gap = 3

[styles.custom-modal.border]
border_type = "thick"

[styles.custom-modal.container]
border = "#a9b818"

[styles.custom-modal.btn]
min_width = 12

[styles.custom-modal.btn-confirm]
fg = "black"
bg = "#a9b818"

[styles.custom-modal.btn-cancel]
fg = "#a9b818"
bg = "transparent"

[styles.custom-modal.focus-visible]
underlined = true
bold = true

[styles.custom-modal.force-focus-visible]
underlined = false
reversed = false

[styles.custom-modal.container-success]
padding = 0"##;

#[cfg(test)]
mod tests {
    use super::*;
    use ptdx_modal::modal::StyleSheet;

    #[test]
    fn test_style_snippet_matches_builtin_sheet() {
        #[derive(serde::Deserialize)]
        struct Snippet {
            styles: StyleSheet,
        }
        let snippet: Snippet = toml::from_str(CUSTOM_STYLES).unwrap();
        assert_eq!(snippet.styles, StyleSheet::builtin());
    }
}

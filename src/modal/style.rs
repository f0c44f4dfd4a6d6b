//! Class-keyed style overrides for dialogs.
//!
//! A dialog's `class_name` selects a [`ClassStyles`] entry from the
//! [`StyleSheet`]. Each entry holds optional rules for the parts of the
//! dialog, named after the classes the dialog puts on them (`overlay`,
//! `container`, `btn-confirm`, ...). Rules are patched over the theme-derived
//! base look, so an entry only lists what it changes:
//!
//! ```toml
//! [styles.custom-modal.overlay]
//! bg = "#8a9a18"
//!
//! [styles.custom-modal.footer]
//! gap = 3
//! ```

use std::collections::BTreeMap;
use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::options::Variant;
use crate::Theme;

/// A color written as a name (`red`), hex (`#ff0000`), index or `transparent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorValue(pub Color);

impl FromStr for ColorValue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("transparent") {
            return Ok(Self(Color::Reset));
        }
        Color::from_str(s)
            .map(Self)
            .map_err(|_| format!("Invalid color: {s}"))
    }
}

impl Serialize for ColorValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for ColorValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderKind {
    Plain,
    Rounded,
    Double,
    Thick,
}

impl From<BorderKind> for BorderType {
    fn from(kind: BorderKind) -> Self {
        match kind {
            BorderKind::Plain => Self::Plain,
            BorderKind::Rounded => Self::Rounded,
            BorderKind::Double => Self::Double,
            BorderKind::Thick => Self::Thick,
        }
    }
}

/// Declarations for one part of the dialog. Unset fields inherit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Rule {
    pub fg: Option<ColorValue>,
    pub bg: Option<ColorValue>,
    /// Border color.
    pub border: Option<ColorValue>,
    pub border_type: Option<BorderKind>,
    pub bold: Option<bool>,
    pub reversed: Option<bool>,
    pub underlined: Option<bool>,
    /// Horizontal padding inside the container, in cells.
    pub padding: Option<u16>,
    /// Space between footer buttons, in cells.
    pub gap: Option<u16>,
    /// Minimum button width, in cells.
    pub min_width: Option<u16>,
}

impl Rule {
    /// Text style declared by this rule.
    pub fn style(&self) -> Style {
        let mut style = Style::default();
        if let Some(ColorValue(fg)) = self.fg {
            style = style.fg(fg);
        }
        if let Some(ColorValue(bg)) = self.bg {
            style = style.bg(bg);
        }
        for (flag, modifier) in [
            (self.bold, Modifier::BOLD),
            (self.reversed, Modifier::REVERSED),
            (self.underlined, Modifier::UNDERLINED),
        ] {
            style = match flag {
                Some(true) => style.add_modifier(modifier),
                Some(false) => style.remove_modifier(modifier),
                None => style,
            };
        }
        style
    }
}

/// Rules of one wrapper class.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ClassStyles {
    pub overlay: Option<Rule>,
    pub border: Option<Rule>,
    pub container: Option<Rule>,
    pub container_success: Option<Rule>,
    pub container_error: Option<Rule>,
    pub title: Option<Rule>,
    pub close: Option<Rule>,
    pub content: Option<Rule>,
    pub footer: Option<Rule>,
    pub btn: Option<Rule>,
    pub btn_confirm: Option<Rule>,
    pub btn_cancel: Option<Rule>,
    pub focus_visible: Option<Rule>,
    pub force_focus_visible: Option<Rule>,
}

impl ClassStyles {
    fn variant_container(&self, variant: Variant) -> Option<&Rule> {
        match variant {
            Variant::Default => self.container.as_ref(),
            Variant::Success => self.container_success.as_ref(),
            Variant::Error => self.container_error.as_ref(),
        }
    }
}

/// Class name to rules.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleSheet {
    classes: BTreeMap<String, ClassStyles>,
}

/// Fully resolved look of one dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalStyles {
    pub overlay: Style,
    pub container: Style,
    pub border: Style,
    pub border_type: BorderType,
    pub padding: u16,
    pub title: Style,
    pub close: Style,
    pub content: Style,
    pub footer_gap: u16,
    pub btn_min_width: u16,
    pub btn_cancel: Style,
    pub btn_confirm: Style,
    pub focus_visible: Style,
    pub force_focus_visible: Style,
}

impl StyleSheet {
    /// Built-in sheet: the `custom-modal` look shown in the demo.
    pub fn builtin() -> Self {
        let lime = ColorValue(Color::Rgb(0xa9, 0xb8, 0x18));
        let lime_dim = ColorValue(Color::Rgb(0x4b, 0x52, 0x0b));
        let black = ColorValue(Color::Black);

        let custom = ClassStyles {
            overlay: Some(Rule {
                bg: Some(lime_dim),
                ..Rule::default()
            }),
            border: Some(Rule {
                border_type: Some(BorderKind::Thick),
                ..Rule::default()
            }),
            container: Some(Rule {
                border: Some(lime),
                ..Rule::default()
            }),
            container_success: Some(Rule {
                padding: Some(0),
                ..Rule::default()
            }),
            footer: Some(Rule {
                gap: Some(3),
                ..Rule::default()
            }),
            btn: Some(Rule {
                min_width: Some(12),
                ..Rule::default()
            }),
            btn_confirm: Some(Rule {
                fg: Some(black),
                bg: Some(lime),
                ..Rule::default()
            }),
            btn_cancel: Some(Rule {
                fg: Some(lime),
                bg: Some(ColorValue(Color::Reset)),
                ..Rule::default()
            }),
            focus_visible: Some(Rule {
                underlined: Some(true),
                bold: Some(true),
                ..Rule::default()
            }),
            force_focus_visible: Some(Rule {
                underlined: Some(false),
                reversed: Some(false),
                ..Rule::default()
            }),
            ..ClassStyles::default()
        };

        let mut sheet = Self::default();
        sheet.insert("custom-modal", custom);
        sheet
    }

    pub fn insert(&mut self, class_name: impl Into<String>, styles: ClassStyles) {
        self.classes.insert(class_name.into(), styles);
    }

    pub fn contains(&self, class_name: &str) -> bool {
        self.classes.contains_key(class_name)
    }

    pub fn get(&self, class_name: &str) -> Option<&ClassStyles> {
        self.classes.get(class_name)
    }

    /// Entries of `other` replace same-named entries of `self`.
    #[must_use]
    pub fn merged(mut self, other: Self) -> Self {
        self.classes.extend(other.classes);
        self
    }

    /// Resolve the look of a dialog with the given wrapper class and variant.
    ///
    /// Unknown class names resolve to the plain theme look.
    pub fn resolve(&self, class_name: &str, variant: Variant, theme: &Theme) -> ModalStyles {
        let mut resolved = ModalStyles::base(variant, theme);
        let Some(class) = self.get(class_name) else {
            return resolved;
        };

        // Cascade: generic container rules, then the variant rule
        for rule in [class.border.as_ref(), class.variant_container(variant)]
            .into_iter()
            .flatten()
        {
            resolved.container = resolved.container.patch(container_text(rule));
            if let Some(ColorValue(color)) = rule.border {
                resolved.border = resolved.border.fg(color);
            }
            if let Some(kind) = rule.border_type {
                resolved.border_type = kind.into();
            }
            if let Some(padding) = rule.padding {
                resolved.padding = padding;
            }
        }

        if let Some(rule) = &class.overlay {
            resolved.overlay = resolved.overlay.patch(rule.style());
        }
        if let Some(rule) = &class.title {
            resolved.title = resolved.title.patch(rule.style());
        }
        if let Some(rule) = &class.close {
            resolved.close = resolved.close.patch(rule.style());
        }
        if let Some(rule) = &class.content {
            resolved.content = resolved.content.patch(rule.style());
        }
        if let Some(gap) = class.footer.and_then(|rule| rule.gap) {
            resolved.footer_gap = gap;
        }
        if let Some(rule) = &class.btn {
            resolved.btn_cancel = resolved.btn_cancel.patch(rule.style());
            resolved.btn_confirm = resolved.btn_confirm.patch(rule.style());
            if let Some(min_width) = rule.min_width {
                resolved.btn_min_width = min_width;
            }
        }
        if let Some(rule) = &class.btn_cancel {
            resolved.btn_cancel = resolved.btn_cancel.patch(rule.style());
        }
        if let Some(rule) = &class.btn_confirm {
            resolved.btn_confirm = resolved.btn_confirm.patch(rule.style());
        }
        if let Some(rule) = &class.focus_visible {
            resolved.focus_visible = resolved.focus_visible.patch(rule.style());
            resolved.force_focus_visible = resolved.focus_visible;
        }
        if let Some(rule) = &class.force_focus_visible {
            resolved.force_focus_visible = resolved.force_focus_visible.patch(rule.style());
        }
        resolved
    }
}

/// Container rules only carry colors for the box itself, not its border.
fn container_text(rule: &Rule) -> Style {
    Rule {
        border: None,
        ..*rule
    }
    .style()
}

impl ModalStyles {
    fn base(variant: Variant, theme: &Theme) -> Self {
        let accent = match variant {
            Variant::Default => theme.border(),
            Variant::Success => theme.success(),
            Variant::Error => theme.error(),
        };
        let focus_visible = Style::default()
            .add_modifier(Modifier::REVERSED)
            .add_modifier(Modifier::BOLD);

        Self {
            overlay: Style::default().bg(theme.backdrop()),
            container: Style::default().fg(theme.text).bg(theme.dialog_bg()),
            border: Style::default().fg(accent),
            border_type: theme.border_type,
            padding: 2,
            title: Style::default()
                .fg(theme.heading())
                .add_modifier(Modifier::BOLD),
            close: Style::default().fg(theme.muted()),
            content: Style::default().fg(theme.text),
            footer_gap: 2,
            btn_min_width: 8,
            btn_cancel: Style::default().fg(theme.muted()),
            btn_confirm: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            focus_visible,
            force_focus_visible: focus_visible,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_class_uses_theme_look() {
        let theme = Theme::default();
        let sheet = StyleSheet::builtin();
        let styles = sheet.resolve("nope", Variant::Default, &theme);
        assert_eq!(styles, ModalStyles::base(Variant::Default, &theme));
    }

    #[test]
    fn test_variant_selects_border_color() {
        let theme = Theme::default();
        let sheet = StyleSheet::default();
        let success = sheet.resolve("modal-wrapper", Variant::Success, &theme);
        let error = sheet.resolve("modal-wrapper", Variant::Error, &theme);
        assert_eq!(success.border.fg, Some(theme.success()));
        assert_eq!(error.border.fg, Some(theme.error()));
    }

    #[test]
    fn test_custom_modal_overrides() {
        let theme = Theme::default();
        let sheet = StyleSheet::builtin();

        let styles = sheet.resolve("custom-modal", Variant::Default, &theme);
        assert_eq!(styles.border.fg, Some(Color::Rgb(0xa9, 0xb8, 0x18)));
        assert_eq!(styles.border_type, BorderType::Thick);
        assert_eq!(styles.footer_gap, 3);
        assert_eq!(styles.btn_min_width, 12);
        assert_eq!(styles.padding, 2);
        assert!(
            !styles
                .force_focus_visible
                .add_modifier
                .contains(Modifier::UNDERLINED)
        );

        let success = sheet.resolve("custom-modal", Variant::Success, &theme);
        assert_eq!(success.padding, 0);
        assert_eq!(success.border.fg, Some(theme.success()));
    }

    #[test]
    fn test_sheet_from_toml() {
        let sheet: StyleSheet = toml::from_str(
            r##"
            [loud.overlay]
            bg = "#ff0000"

            [loud.container-error]
            border = "yellow"
            border_type = "double"

            [loud.btn]
            min_width = 20
            bold = true
            "##,
        )
        .unwrap();

        let theme = Theme::default();
        let styles = sheet.resolve("loud", Variant::Error, &theme);
        assert_eq!(styles.overlay.bg, Some(Color::Rgb(0xff, 0, 0)));
        assert_eq!(styles.border.fg, Some(Color::Yellow));
        assert_eq!(styles.border_type, BorderType::Double);
        assert_eq!(styles.btn_min_width, 20);
        assert!(styles.btn_cancel.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        let result: Result<StyleSheet, _> = toml::from_str(
            r#"
            [bad.overlay]
            bg = "not-a-color"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_prefers_user_entries() {
        let mut user = StyleSheet::default();
        user.insert("custom-modal", ClassStyles::default());
        let sheet = StyleSheet::builtin().merged(user);
        let theme = Theme::default();
        let styles = sheet.resolve("custom-modal", Variant::Default, &theme);
        assert_eq!(styles.footer_gap, 2);
    }
}

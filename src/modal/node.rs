//! Element tree of a mounted dialog.
//!
//! A [`Node`] is a small DOM-like element: a tag, an optional id, classes,
//! attributes, text and children. Dialog content can be a caller-built tree,
//! and the dialog itself is exposed as one through `Modal::view`, which is
//! what the focus trap walks and what tests assert accessibility on.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tag {
    #[default]
    Div,
    Heading,
    Paragraph,
    Span,
    Button,
    Link,
    Input,
    Select,
    TextArea,
}

impl Tag {
    /// Inline elements share a line with their siblings when painted.
    pub const fn is_inline(self) -> bool {
        matches!(
            self,
            Self::Span | Self::Button | Self::Link | Self::Input | Self::Select | Self::TextArea
        )
    }
}

/// Whether an element takes part in keyboard focus navigation.
pub trait Focusable {
    fn is_focusable(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Node {
    tag: Tag,
    id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    text: Option<String>,
    children: Vec<Node>,
}

impl Node {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            ..Self::default()
        }
    }

    pub fn div() -> Self {
        Self::new(Tag::Div)
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self::new(Tag::Heading).with_text(text)
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new(Tag::Paragraph).with_text(text)
    }

    pub fn span(text: impl Into<String>) -> Self {
        Self::new(Tag::Span).with_text(text)
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self::new(Tag::Button).with_text(label)
    }

    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self::new(Tag::Link).with_text(text).with_attr("href", href)
    }

    pub fn input(value: impl Into<String>) -> Self {
        Self::new(Tag::Input).with_text(value)
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !class.is_empty() && !self.has_class(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Add every whitespace-separated class in `classes`.
    #[must_use]
    pub fn with_classes(self, classes: &str) -> Self {
        classes
            .split_whitespace()
            .fold(self, |node, class| node.with_class(class))
    }

    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_tab_index(self, index: i32) -> Self {
        self.with_attr("tabindex", index.to_string())
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }

    pub const fn tag(&self) -> Tag {
        self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Parsed `tabindex` attribute, if present and numeric.
    pub fn tab_index(&self) -> Option<i32> {
        self.attr("tabindex").and_then(|value| value.trim().parse().ok())
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.walk(&mut |node, _| {
            if let Some(text) = node.text() {
                out.push_str(text);
            }
        });
        out
    }

    /// First node in document order (including this one) with the given id.
    pub fn find_by_id(&self, id: &str) -> Option<&Self> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_by_id(id))
    }

    /// First node in document order (including this one) carrying `class`.
    pub fn find_by_class(&self, class: &str) -> Option<&Self> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_by_class(class))
    }

    /// First direct child carrying `class`.
    pub fn child_by_class(&self, class: &str) -> Option<&Self> {
        self.children.iter().find(|child| child.has_class(class))
    }

    /// Focus keys of all focusable descendants, in document order.
    ///
    /// The root itself is excluded. Elements with an id are keyed by it,
    /// anonymous ones by their child-index path below the root, prefixed
    /// with `prefix`.
    pub fn focus_keys(&self, prefix: &str) -> Vec<String> {
        let mut keys = Vec::new();
        for (index, child) in self.children.iter().enumerate() {
            child.walk_with_path(&mut vec![index], &mut |node, path| {
                if node.is_focusable() {
                    keys.push(node.focus_key(prefix, path));
                }
            });
        }
        keys
    }

    /// Key used to track focus on this node; see [`Node::focus_keys`].
    pub fn focus_key(&self, prefix: &str, path: &[usize]) -> String {
        self.id.clone().unwrap_or_else(|| {
            let path: Vec<String> = path.iter().map(ToString::to_string).collect();
            format!("{prefix}@{}", path.join("."))
        })
    }

    /// Pre-order traversal with the child-index path of each node.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Self, &[usize])) {
        self.walk_with_path(&mut Vec::new(), visit);
    }

    fn walk_with_path<'a>(
        &'a self,
        path: &mut Vec<usize>,
        visit: &mut impl FnMut(&'a Self, &[usize]),
    ) {
        visit(self, path.as_slice());
        for (index, child) in self.children.iter().enumerate() {
            path.push(index);
            child.walk_with_path(path, visit);
            path.pop();
        }
    }
}

impl Focusable for Node {
    /// Buttons, links with a target, form fields, and anything with a
    /// `tabindex` other than `-1`.
    fn is_focusable(&self) -> bool {
        match self.tag {
            Tag::Button | Tag::Input | Tag::Select | Tag::TextArea => true,
            Tag::Link if self.attr("href").is_some() => true,
            _ => self.tab_index().is_some_and(|index| index != -1),
        }
    }
}

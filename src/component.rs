//! Persisted text-component wire format.
//!
//! Dialog text is stored as a bare string, a `{ text?, translate?,
//! color? }` node, or an arbitrarily nested array of those. This module
//! gives the string-level engine a typed boundary for that JSON shape:
//! deserialize, flatten to plain text, and hand the color field to the
//! palette for resolution. Translation-file lookup itself lives outside
//! the crate; [`TextComponent::plain_with`] takes the lookup as a closure.
//!
//! # Examples
//!
//! ```
//! use mctext::component::TextComponent;
//!
//! let parsed: TextComponent =
//!     serde_json::from_str(r#"[{"translate":"npc.greet"},"!"]"#).unwrap();
//! assert_eq!(parsed.plain(), "npc.greet!");
//! ```

use serde::{Deserialize, Serialize};

use crate::palette;

/// A single component node.
///
/// `translate` takes precedence over `text` when both are present,
/// matching how persisted dialogs resolve their display string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl TextNode {
    /// The lookup key for this node: `translate`, else `text`, else
    /// the empty string.
    #[must_use]
    pub fn key(&self) -> &str {
        self.translate
            .as_deref()
            .or(self.text.as_deref())
            .unwrap_or("")
    }

    /// The node's color resolved to a CSS-usable value.
    ///
    /// Palette names map to their hex entry; anything else (already-hex
    /// values included) passes through unchanged.
    #[must_use]
    pub fn css_color(&self) -> Option<&str> {
        self.color.as_deref().map(palette::resolve)
    }
}

/// A text component as persisted: string, node, or nested list.
///
/// The JSON representation is untagged, so round-tripping preserves the
/// original shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextComponent {
    Plain(String),
    List(Vec<TextComponent>),
    Node(TextNode),
}

impl TextComponent {
    /// Flatten to plain text without translation lookup.
    ///
    /// Strings pass through, lists concatenate in order, and nodes
    /// contribute their lookup key as-is.
    #[must_use]
    pub fn plain(&self) -> String {
        self.plain_with(&mut |key| key.to_string())
    }

    /// Flatten to plain text, resolving each node key through `lookup`.
    ///
    /// The persistence layer supplies the translation table here; node
    /// keys go through `lookup`, literal strings do not.
    pub fn plain_with(&self, lookup: &mut dyn FnMut(&str) -> String) -> String {
        match self {
            Self::Plain(text) => text.clone(),
            Self::List(items) => items.iter().map(|item| item.plain_with(lookup)).collect(),
            Self::Node(node) => lookup(node.key()),
        }
    }
}

impl From<String> for TextComponent {
    fn from(text: String) -> Self {
        Self::Plain(text)
    }
}

impl From<&str> for TextComponent {
    fn from(text: &str) -> Self {
        Self::Plain(text.to_string())
    }
}

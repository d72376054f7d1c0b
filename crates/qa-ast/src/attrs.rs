//! Block attributes: identifier, classes, and key/value pairs.

use std::collections::HashMap;

/// Attributes attached to a block-level element.
///
/// Mirrors the `{#id .class key=value}` attribute triple of the source
/// markup: an optional identifier, the class list in source order, and the
/// remaining key/value attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attrs {
    /// Element identifier (empty when absent).
    pub identifier: String,
    /// Classification classes, in source order.
    pub classes: Vec<String>,
    /// Key/value attributes.
    pub pairs: HashMap<String, String>,
}

impl Attrs {
    /// Create attributes carrying only classes.
    #[must_use]
    pub fn with_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Add a key/value attribute (builder style).
    #[must_use]
    pub fn with_pair(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.pairs.insert(key.into(), value.into());
        self
    }

    /// Check whether a class is present.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Look up a key/value attribute.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.get(key).map(String::as_str)
    }
}

//! Block-level document model.

use crate::{Attrs, Inline};

/// A block-level unit of document content.
///
/// Produced by the upstream parsing stage. Transforms treat every variant as
/// atomic except [`Block::Heading`] (section boundaries) and [`Block::Div`]
/// (candidate containers).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Block {
    /// Paragraph of inline content.
    Para(Vec<Inline>),
    /// Heading with its depth and inline title content.
    Heading {
        /// Heading depth (1 = document title).
        level: u8,
        /// Heading attributes.
        attrs: Attrs,
        /// Inline title content.
        content: Vec<Inline>,
    },
    /// Fenced or indented code block.
    CodeBlock {
        /// Fence language, when given.
        language: Option<String>,
        /// Verbatim code.
        code: String,
    },
    /// Bullet list; one block sequence per item.
    BulletList(Vec<Vec<Block>>),
    /// Block quote.
    BlockQuote(Vec<Block>),
    /// Generic attributed container.
    Div {
        /// Container attributes.
        attrs: Attrs,
        /// Ordered child blocks.
        blocks: Vec<Block>,
    },
    /// Native tabbed-container node.
    TabGroup(TabGroup),
}

impl Block {
    /// Paragraph from plain text.
    #[must_use]
    pub fn para(text: impl Into<String>) -> Self {
        Self::Para(vec![Inline::str(text)])
    }

    /// Unattributed heading from plain text.
    #[must_use]
    pub fn heading(level: u8, title: impl Into<String>) -> Self {
        Self::Heading {
            level,
            attrs: Attrs::default(),
            content: vec![Inline::str(title)],
        }
    }
}

/// Native tabbed-container node.
///
/// One tab per section, titles and content preserved. Only emitted when the
/// host environment supports the primitive; otherwise transforms fall back to
/// a flat, class-tagged [`Block::Div`] that a downstream renderer recognizes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabGroup {
    /// Display heading level for the tab titles.
    pub level: u8,
    /// Styling classes and attributes propagated from the source container.
    pub attrs: Attrs,
    /// The tabs, in source order.
    pub tabs: Vec<Tab>,
}

/// One tab within a [`TabGroup`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tab {
    /// Inline title content shown on the tab button.
    pub title: Vec<Inline>,
    /// Tab body blocks.
    pub blocks: Vec<Block>,
}

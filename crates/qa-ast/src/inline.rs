//! Inline content model.

/// Inline content within a paragraph or heading.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Inline {
    /// Plain text.
    Str(String),
    /// Inline code span.
    Code(String),
    /// Emphasized content.
    Emph(Vec<Inline>),
    /// Strongly emphasized content.
    Strong(Vec<Inline>),
    /// Soft line break.
    SoftBreak,
}

impl Inline {
    /// Plain-text inline.
    #[must_use]
    pub fn str(text: impl Into<String>) -> Self {
        Self::Str(text.into())
    }
}

/// Flatten inline content to plain text, discarding markup.
#[must_use]
pub fn plain_text(inlines: &[Inline]) -> String {
    let mut out = String::new();
    collect_text(inlines, &mut out);
    out
}

fn collect_text(inlines: &[Inline], out: &mut String) {
    for inline in inlines {
        match inline {
            Inline::Str(text) | Inline::Code(text) => out.push_str(text),
            Inline::Emph(inner) | Inline::Strong(inner) => collect_text(inner, out),
            Inline::SoftBreak => out.push(' '),
        }
    }
}

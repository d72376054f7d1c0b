//! Per-format selection defaults loaded from document metadata.
//!
//! The configuration lives in the document's YAML metadata under either the
//! `question-answer` key or the legacy `questionanswer` spelling:
//!
//! ```yaml
//! question-answer:
//!   html: all
//!   latex: question
//!   docx: answer
//! ```

use serde::Deserialize;

use crate::{Format, TabSelect};

/// Per-format default selection modes for one document run.
///
/// Construct fresh for every document. The store is a plain value bound to
/// that run; it is populated once from metadata before any container is
/// transformed and read-only afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TabDefaults {
    html: Option<TabSelect>,
    latex: Option<TabSelect>,
    docx: Option<TabSelect>,
}

impl TabDefaults {
    /// Create an empty store: every format falls back to [`TabSelect::All`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate a store from a YAML metadata block.
    ///
    /// Accepts the configuration under either accepted key; per format, the
    /// first key carrying a value wins. Empty content yields an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed.
    pub fn from_yaml(content: &str) -> Result<Self, MetadataError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(Self::new());
        }

        let meta: DocMetadata = serde_yaml::from_str(trimmed)
            .map_err(|e| MetadataError::Parse(format!("Invalid YAML: {e}")))?;

        let mut defaults = Self::new();
        for section in [meta.question_answer, meta.questionanswer]
            .into_iter()
            .flatten()
        {
            for format in Format::ALL {
                if let Some(raw) = section.get(format) {
                    defaults.set_default(format, raw);
                }
            }
        }
        Ok(defaults)
    }

    /// Set the default mode for a format, unless one is already stored.
    ///
    /// The raw value is normalized totally; an unrecognized string still
    /// fills the slot (with [`TabSelect::All`]) and is reported on the
    /// diagnostic channel.
    pub fn set_default(&mut self, format: Format, raw: &str) {
        if self.slot(format).is_some() {
            return;
        }
        if TabSelect::recognize(raw).is_none() {
            tracing::warn!(
                format = format.name(),
                value = raw,
                "unrecognized tab selection in metadata, defaulting to all"
            );
        }
        *self.slot(format) = Some(TabSelect::normalize(raw));
    }

    /// Default mode for a format ([`TabSelect::All`] when unset).
    #[must_use]
    pub fn get(&self, format: Format) -> TabSelect {
        match format {
            Format::Html => self.html,
            Format::Latex => self.latex,
            Format::Docx => self.docx,
        }
        .unwrap_or_default()
    }

    fn slot(&mut self, format: Format) -> &mut Option<TabSelect> {
        match format {
            Format::Html => &mut self.html,
            Format::Latex => &mut self.latex,
            Format::Docx => &mut self.docx,
        }
    }
}

/// Metadata shape accepted from the document frontmatter.
///
/// Unknown sibling keys are ignored so the block can sit inside arbitrary
/// document metadata.
#[derive(Debug, Default, Deserialize)]
struct DocMetadata {
    #[serde(default, rename = "question-answer")]
    question_answer: Option<FormatMap>,
    #[serde(default)]
    questionanswer: Option<FormatMap>,
}

/// Mapping from format identifier to raw selection string.
#[derive(Debug, Default, Deserialize)]
struct FormatMap {
    #[serde(default)]
    html: Option<String>,
    #[serde(default)]
    latex: Option<String>,
    #[serde(default)]
    docx: Option<String>,
}

impl FormatMap {
    fn get(&self, format: Format) -> Option<&str> {
        match format {
            Format::Html => self.html.as_deref(),
            Format::Latex => self.latex.as_deref(),
            Format::Docx => self.docx.as_deref(),
        }
    }
}

/// Error type for metadata operations.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// YAML parsing error.
    #[error("{0}")]
    Parse(String),
}

//! Selection modes and output formats.

use std::fmt;

/// Which sections of a split container survive into the output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TabSelect {
    /// Keep every section (the default).
    #[default]
    All,
    /// Keep only the first section (conventionally the question).
    First,
    /// Keep only the second section (conventionally the answer).
    Second,
}

impl TabSelect {
    /// Parse a recognized selection string.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Returns `None` for unrecognized input; use
    /// [`normalize`](Self::normalize) for the total variant.
    #[must_use]
    pub fn recognize(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "all" | "both" => Some(Self::All),
            "first" | "question" | "q" => Some(Self::First),
            "second" | "answer" | "a" => Some(Self::Second),
            _ => None,
        }
    }

    /// Normalize a raw selection string to a canonical mode.
    ///
    /// Total: unrecognized or empty input maps to [`TabSelect::All`].
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        Self::recognize(raw).unwrap_or(Self::All)
    }

    /// Canonical name of this mode.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::First => "first",
            Self::Second => "second",
        }
    }
}

/// Output format the document is being rendered to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// HTML output.
    Html,
    /// LaTeX output.
    Latex,
    /// Word processor output.
    Docx,
}

impl Format {
    /// All recognized formats.
    pub const ALL: [Self; 3] = [Self::Html, Self::Latex, Self::Docx];

    /// Parse a format identifier as used in document metadata.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "html" => Some(Self::Html),
            "latex" => Some(Self::Latex),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    /// Format identifier as used in document metadata.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Latex => "latex",
            Self::Docx => "docx",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Per-document tabs processor: container matching, mode resolution, and
//! replacement emission.

use qa_ast::{Attrs, Block};

use crate::consts::{TARGET_ATTR, TRIGGER_CLASS, TRIGGER_CLASS_LEGACY};
use crate::emit::{emit_sections, panel_classes, select_sections};
use crate::split::split_sections;
use crate::{Format, TabDefaults, TabSelect};

/// Result of offering one container to the transform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transformed {
    /// No transformation applies; the container's children are handed back
    /// so the host keeps the original node.
    Unchanged(Vec<Block>),
    /// Replacement blocks for the whole container.
    Replaced(Vec<Block>),
}

/// Question/answer tabs transform for one document run.
///
/// Construct once per document with the output format and the metadata
/// defaults, then call [`apply`](Self::apply) on the document's blocks — or
/// [`transform_container`](Self::transform_container) per candidate container
/// when the host drives the walk itself. Instances must not be reused across
/// documents; the defaults are scoped to one run.
///
/// # Example
///
/// ```
/// use qa_ast::{Attrs, Block};
/// use qa_tabs::{Format, QuestionTabs, TabDefaults};
///
/// let defaults = TabDefaults::from_yaml("question-answer:\n  html: all\n").unwrap();
/// let container = Block::Div {
///     attrs: Attrs::with_classes(["question-answer"]),
///     blocks: vec![
///         Block::heading(2, "Question"),
///         Block::para("What gets split?"),
///         Block::heading(2, "Answer"),
///         Block::para("Heading-bounded groups."),
///     ],
/// };
///
/// let mut tabs = QuestionTabs::new(Format::Html).with_defaults(defaults);
/// let output = tabs.apply(vec![container]);
/// assert!(matches!(output[0], Block::TabGroup(_)));
/// ```
pub struct QuestionTabs {
    format: Format,
    defaults: TabDefaults,
    native_tabs: bool,
    warnings: Vec<String>,
}

impl QuestionTabs {
    /// Create a processor for the given output format.
    ///
    /// The native tab-group primitive is assumed available; disable it with
    /// [`with_native_tabs`](Self::with_native_tabs) for hosts that only
    /// understand the flat fallback.
    #[must_use]
    pub fn new(format: Format) -> Self {
        Self {
            format,
            defaults: TabDefaults::new(),
            native_tabs: true,
            warnings: Vec::new(),
        }
    }

    /// Use per-format defaults populated from document metadata.
    #[must_use]
    pub fn with_defaults(mut self, defaults: TabDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Enable or disable the native tab-group output node.
    #[must_use]
    pub fn with_native_tabs(mut self, enabled: bool) -> Self {
        self.native_tabs = enabled;
        self
    }

    /// Warnings generated during processing.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Check whether a container's classes mark it for transformation.
    #[must_use]
    pub fn is_trigger(attrs: &Attrs) -> bool {
        attrs.has_class(TRIGGER_CLASS) || attrs.has_class(TRIGGER_CLASS_LEGACY)
    }

    /// Transform one candidate container.
    ///
    /// Returns [`Transformed::Unchanged`] when the container carries no
    /// trigger class or splits into no sections; otherwise the replacement
    /// blocks per the effective selection mode and host capability.
    pub fn transform_container(&mut self, attrs: &Attrs, blocks: Vec<Block>) -> Transformed {
        if !Self::is_trigger(attrs) {
            return Transformed::Unchanged(blocks);
        }

        let (sections, _base_level) = split_sections(blocks);
        if sections.is_empty() {
            // Only an empty child list splits into nothing.
            return Transformed::Unchanged(Vec::new());
        }

        let mode = self.resolve_mode(attrs);
        let selected = select_sections(sections, mode);
        match emit_sections(selected, panel_classes(attrs), self.native_tabs) {
            Some(replacement) => Transformed::Replaced(replacement),
            None => Transformed::Unchanged(Vec::new()),
        }
    }

    /// Walk a block tree and replace every eligible container.
    ///
    /// Recurses through divs, block quotes, and list items; everything else
    /// passes through untouched.
    #[must_use]
    pub fn apply(&mut self, blocks: Vec<Block>) -> Vec<Block> {
        let mut out = Vec::with_capacity(blocks.len());
        for block in blocks {
            out.extend(self.rewrite_block(block));
        }
        out
    }

    /// Resolve the effective selection mode for a container.
    ///
    /// A present `target` attribute always wins, even when it has to be
    /// normalized; otherwise the per-format default applies.
    fn resolve_mode(&mut self, attrs: &Attrs) -> TabSelect {
        let Some(raw) = attrs.get(TARGET_ATTR) else {
            return self.defaults.get(self.format);
        };
        if TabSelect::recognize(raw).is_none() {
            self.warnings
                .push(format!("unrecognized target \"{raw}\", defaulting to all"));
        }
        TabSelect::normalize(raw)
    }

    fn rewrite_block(&mut self, block: Block) -> Vec<Block> {
        match block {
            Block::Div { attrs, blocks } => {
                let blocks = self.apply(blocks);
                match self.transform_container(&attrs, blocks) {
                    Transformed::Replaced(replacement) => replacement,
                    Transformed::Unchanged(blocks) => vec![Block::Div { attrs, blocks }],
                }
            }
            Block::BlockQuote(blocks) => vec![Block::BlockQuote(self.apply(blocks))],
            Block::BulletList(items) => vec![Block::BulletList(
                items.into_iter().map(|item| self.apply(item)).collect(),
            )],
            other => vec![other],
        }
    }
}

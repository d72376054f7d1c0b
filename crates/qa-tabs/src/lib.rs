//! Question/answer tab panels for block trees.
//!
//! Given a container block classed `question-answer` (or the legacy
//! `questionanswer` spelling), the transform regroups its children into
//! titled sections at heading boundaries, optionally narrows the output to a
//! single selected section, and replaces the container with either a native
//! [`qa_ast::TabGroup`] node or a flat fallback structure the downstream
//! renderer turns into a tab widget. It restructures the tree and nothing
//! else — no rendering, layout, or styling happens here.
//!
//! # Architecture
//!
//! Three stages, run strictly in sequence per document:
//!
//! 1. **Configuration** ([`TabDefaults`]): per-format default selection
//!    modes, populated once from the document's YAML metadata.
//! 2. **Splitting** ([`split_sections`]): heading-boundary grouping of a
//!    container's children into [`Section`]s.
//! 3. **Selection & emission** ([`QuestionTabs`]): resolves the effective
//!    mode (per-container `target` override over per-format default),
//!    narrows the sections, and picks the output shape.
//!
//! Every malformed input degrades instead of failing: unrecognized selection
//! strings normalize to [`TabSelect::All`], empty containers stay untouched,
//! and hosts without the native tab primitive get the fallback shape.
//!
//! # Example
//!
//! ```
//! use qa_ast::{Attrs, Block};
//! use qa_tabs::{Format, QuestionTabs, TabDefaults};
//!
//! let defaults = TabDefaults::from_yaml("question-answer:\n  docx: answer\n").unwrap();
//! let container = Block::Div {
//!     attrs: Attrs::with_classes(["question-answer"]),
//!     blocks: vec![
//!         Block::heading(2, "Question"),
//!         Block::para("How are sections formed?"),
//!         Block::heading(2, "Answer"),
//!         Block::para("One per base-level heading."),
//!     ],
//! };
//!
//! // For docx only the answer survives, as a flat heading + content run.
//! let mut tabs = QuestionTabs::new(Format::Docx).with_defaults(defaults);
//! let output = tabs.apply(vec![container]);
//! assert_eq!(output.len(), 2);
//! assert!(matches!(output[0], Block::Heading { .. }));
//! ```

mod config;
mod consts;
mod emit;
mod mode;
mod processor;
mod split;

pub use config::{MetadataError, TabDefaults};
pub use consts::{
    DEFAULT_BASE_LEVEL, PANEL_CLASS, PANEL_HEADING_LEVEL, QUESTION_CLASS, TARGET_ATTR,
    TRIGGER_CLASS, TRIGGER_CLASS_LEGACY, UNTITLED_LABEL, VARIANT_CLASS,
};
pub use emit::select_sections;
pub use mode::{Format, TabSelect};
pub use processor::{QuestionTabs, Transformed};
pub use split::{Section, split_sections};

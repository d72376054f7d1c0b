//! Block-tree model shared between the host document pipeline and the
//! `qa-tabs` transform.
//!
//! The pipeline parses source markup into an ordered tree of [`Block`]s
//! before any transform runs; this crate only defines that tree. Most blocks
//! are opaque to downstream transforms — the tabs transform in particular
//! inspects nothing but [`Block::Heading`] levels and titles and
//! [`Block::Div`] attributes.
//!
//! [`TabGroup`] is the native tabbed-container node. It exists in the model
//! unconditionally, but a transform only emits it when the host environment
//! declares support for it; hosts without the primitive receive a flat
//! fallback structure instead.
//!
//! # Example
//!
//! ```
//! use qa_ast::{Attrs, Block};
//!
//! let container = Block::Div {
//!     attrs: Attrs::with_classes(["question-answer"]),
//!     blocks: vec![
//!         Block::heading(2, "Question"),
//!         Block::para("What does the splitter do?"),
//!     ],
//! };
//! assert!(matches!(container, Block::Div { .. }));
//! ```

mod attrs;
mod block;
mod inline;

pub use attrs::Attrs;
pub use block::{Block, Tab, TabGroup};
pub use inline::{Inline, plain_text};

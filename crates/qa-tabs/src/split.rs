//! Heading-boundary section splitting.

use qa_ast::{Block, Inline, plain_text};

use crate::consts::{DEFAULT_BASE_LEVEL, UNTITLED_LABEL};

/// One titled run of blocks produced by [`split_sections`].
///
/// Sections live for a single transform invocation; they are consumed by the
/// emission step and never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    /// Inline title content, taken from the boundary heading.
    pub title: Vec<Inline>,
    /// Content blocks, in source order.
    pub blocks: Vec<Block>,
}

impl Section {
    /// Plain-text rendering of the section title.
    #[must_use]
    pub fn title_text(&self) -> String {
        plain_text(&self.title)
    }
}

/// Partition a container's children into titled sections at heading
/// boundaries.
///
/// The first heading fixes the base level. Every heading at exactly that
/// level starts a new section and is consumed as its title; headings at any
/// other level, and all other blocks, are ordinary content. Content arriving
/// before the first base-level heading opens an implicit section titled
/// `Untitled`.
///
/// Returns the sections together with the base level (3 when the input held
/// no headings at all). Empty input yields no sections. Every input block
/// ends up in exactly one section, in original relative order.
#[must_use]
pub fn split_sections(blocks: Vec<Block>) -> (Vec<Section>, u8) {
    let mut sections = Vec::new();
    let mut current: Option<Section> = None;
    let mut base_level: Option<u8> = None;

    for block in blocks {
        match block {
            Block::Heading {
                level,
                attrs,
                content,
            } => {
                let base = *base_level.get_or_insert(level);
                if level == base {
                    if let Some(section) = current.take() {
                        sections.push(section);
                    }
                    current = Some(Section {
                        title: content,
                        blocks: Vec::new(),
                    });
                } else {
                    // Headings off the base level are ordinary content.
                    current.get_or_insert_with(untitled_section).blocks.push(
                        Block::Heading {
                            level,
                            attrs,
                            content,
                        },
                    );
                }
            }
            other => {
                current
                    .get_or_insert_with(untitled_section)
                    .blocks
                    .push(other);
            }
        }
    }
    if let Some(section) = current {
        sections.push(section);
    }

    (sections, base_level.unwrap_or(DEFAULT_BASE_LEVEL))
}

fn untitled_section() -> Section {
    Section {
        title: vec![Inline::str(UNTITLED_LABEL)],
        blocks: Vec::new(),
    }
}

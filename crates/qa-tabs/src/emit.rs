//! Section selection and output-shape emission.
//!
//! Both container builders (native [`TabGroup`] and flat fallback `Div`)
//! consume the same `(sections, classes)` intermediate, so the grouping logic
//! is never duplicated per output variant.

use qa_ast::{Attrs, Block, Tab, TabGroup};

use crate::TabSelect;
use crate::consts::{
    PANEL_CLASS, PANEL_HEADING_LEVEL, QUESTION_CLASS, TRIGGER_CLASS_LEGACY, VARIANT_CLASS,
};
use crate::split::Section;

/// Narrow a section list according to the selection mode.
///
/// `First` keeps exactly the first section when at least one exists; `Second`
/// keeps exactly the second when at least two exist. In every other case —
/// `All`, or an unmet count precondition — the input comes back unchanged, in
/// order.
#[must_use]
pub fn select_sections(mut sections: Vec<Section>, mode: TabSelect) -> Vec<Section> {
    match mode {
        TabSelect::First if !sections.is_empty() => {
            sections.truncate(1);
            sections
        }
        TabSelect::Second if sections.len() >= 2 => {
            vec![sections.swap_remove(1)]
        }
        TabSelect::All | TabSelect::First | TabSelect::Second => sections,
    }
}

/// Classes propagated onto an emitted panel.
///
/// Always the panel and question classes; the variant class is added only
/// when the container did not carry the legacy trigger spelling, so
/// predecessor call sites keep their original class set.
pub(crate) fn panel_classes(attrs: &Attrs) -> Vec<String> {
    let mut classes = vec![PANEL_CLASS.to_owned(), QUESTION_CLASS.to_owned()];
    if !attrs.has_class(TRIGGER_CLASS_LEGACY) {
        classes.push(VARIANT_CLASS.to_owned());
    }
    classes
}

/// Emit the replacement blocks for a selected section list.
///
/// Returns `None` when the list is empty (the caller keeps the original
/// container). A single section becomes a flat heading-plus-content run; two
/// or more become a native [`TabGroup`] when the host supports it, otherwise
/// the class-tagged fallback `Div`.
pub(crate) fn emit_sections(
    sections: Vec<Section>,
    classes: Vec<String>,
    native_tabs: bool,
) -> Option<Vec<Block>> {
    match sections.len() {
        0 => None,
        1 => sections.into_iter().next().map(emit_single),
        _ if native_tabs => Some(vec![Block::TabGroup(build_tab_group(sections, classes))]),
        _ => Some(vec![build_fallback(sections, classes)]),
    }
}

/// Flat single-section output: a display-level heading in question styling
/// followed by the content. No tab container is produced.
fn emit_single(section: Section) -> Vec<Block> {
    let mut blocks = Vec::with_capacity(section.blocks.len() + 1);
    blocks.push(Block::Heading {
        level: PANEL_HEADING_LEVEL,
        attrs: Attrs::with_classes([QUESTION_CLASS]),
        content: section.title,
    });
    blocks.extend(section.blocks);
    blocks
}

fn build_tab_group(sections: Vec<Section>, classes: Vec<String>) -> TabGroup {
    TabGroup {
        level: PANEL_HEADING_LEVEL,
        attrs: Attrs {
            classes,
            ..Attrs::default()
        },
        tabs: sections
            .into_iter()
            .map(|section| Tab {
                title: section.title,
                blocks: section.blocks,
            })
            .collect(),
    }
}

/// Fallback shape for hosts without the native primitive: per section, a
/// display-level heading then its content, all inside one tagged container.
/// The downstream renderer recognizes the panel class and builds the widget.
fn build_fallback(sections: Vec<Section>, classes: Vec<String>) -> Block {
    let mut blocks = Vec::new();
    for section in sections {
        blocks.push(Block::Heading {
            level: PANEL_HEADING_LEVEL,
            attrs: Attrs::default(),
            content: section.title,
        });
        blocks.extend(section.blocks);
    }
    Block::Div {
        attrs: Attrs {
            classes,
            ..Attrs::default()
        },
        blocks,
    }
}

#[cfg(test)]
mod tests {
    use qa_ast::Inline;

    use super::*;

    fn section(title: &str, body: &str) -> Section {
        Section {
            title: vec![Inline::str(title)],
            blocks: vec![Block::para(body)],
        }
    }

    #[test]
    fn test_select_all_keeps_everything() {
        let sections = vec![section("Q", "p1"), section("A", "p2")];
        let selected = select_sections(sections.clone(), TabSelect::All);
        assert_eq!(selected, sections);
    }

    #[test]
    fn test_select_first() {
        let selected = select_sections(
            vec![section("Q", "p1"), section("A", "p2")],
            TabSelect::First,
        );
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].title_text(), "Q");
    }

    #[test]
    fn test_select_second() {
        let selected = select_sections(
            vec![section("Q", "p1"), section("A", "p2"), section("X", "p3")],
            TabSelect::Second,
        );
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].title_text(), "A");
    }

    #[test]
    fn test_select_first_of_empty_is_empty() {
        let selected = select_sections(Vec::new(), TabSelect::First);
        assert!(selected.is_empty());
    }

    #[test]
    fn test_select_second_of_one_falls_back_to_all() {
        let sections = vec![section("Q", "p1")];
        let selected = select_sections(sections.clone(), TabSelect::Second);
        assert_eq!(selected, sections);
    }

    #[test]
    fn test_panel_classes_with_variant() {
        let attrs = Attrs::with_classes(["question-answer"]);
        assert_eq!(
            panel_classes(&attrs),
            vec!["panel-tabset", "question", "qa-tabs"]
        );
    }

    #[test]
    fn test_panel_classes_legacy_suppresses_variant() {
        let attrs = Attrs::with_classes(["questionanswer"]);
        assert_eq!(panel_classes(&attrs), vec!["panel-tabset", "question"]);
    }

    #[test]
    fn test_panel_classes_both_triggers_keep_legacy_precedence() {
        let attrs = Attrs::with_classes(["question-answer", "questionanswer"]);
        assert_eq!(panel_classes(&attrs), vec!["panel-tabset", "question"]);
    }

    #[test]
    fn test_emit_empty_is_none() {
        assert_eq!(emit_sections(Vec::new(), Vec::new(), true), None);
    }

    #[test]
    fn test_emit_single_is_flat() {
        let out = emit_sections(vec![section("Q", "p1")], vec!["x".to_owned()], true).unwrap();
        assert_eq!(out.len(), 2);
        let Block::Heading {
            level,
            attrs,
            content,
        } = &out[0]
        else {
            panic!("expected heading, got {:?}", out[0]);
        };
        assert_eq!(*level, PANEL_HEADING_LEVEL);
        assert_eq!(attrs.classes, vec![QUESTION_CLASS]);
        assert_eq!(content, &vec![Inline::str("Q")]);
        assert_eq!(out[1], Block::para("p1"));
    }

    #[test]
    fn test_emit_native_tab_group() {
        let classes = vec![PANEL_CLASS.to_owned()];
        let out = emit_sections(
            vec![section("Q", "p1"), section("A", "p2")],
            classes.clone(),
            true,
        )
        .unwrap();

        assert_eq!(out.len(), 1);
        let Block::TabGroup(group) = &out[0] else {
            panic!("expected tab group, got {:?}", out[0]);
        };
        assert_eq!(group.level, PANEL_HEADING_LEVEL);
        assert_eq!(group.attrs.classes, classes);
        assert_eq!(group.tabs.len(), 2);
        assert_eq!(group.tabs[0].title, vec![Inline::str("Q")]);
        assert_eq!(group.tabs[0].blocks, vec![Block::para("p1")]);
        assert_eq!(group.tabs[1].title, vec![Inline::str("A")]);
        assert_eq!(group.tabs[1].blocks, vec![Block::para("p2")]);
    }

    #[test]
    fn test_emit_fallback_is_flat_headings_and_content() {
        let classes = vec![PANEL_CLASS.to_owned(), QUESTION_CLASS.to_owned()];
        let out = emit_sections(
            vec![section("T1", "p1"), section("T2", "p2")],
            classes.clone(),
            false,
        )
        .unwrap();

        assert_eq!(out.len(), 1);
        let Block::Div { attrs, blocks } = &out[0] else {
            panic!("expected div, got {:?}", out[0]);
        };
        assert_eq!(attrs.classes, classes);
        assert_eq!(
            blocks,
            &vec![
                Block::heading(PANEL_HEADING_LEVEL, "T1"),
                Block::para("p1"),
                Block::heading(PANEL_HEADING_LEVEL, "T2"),
                Block::para("p2"),
            ]
        );
    }
}

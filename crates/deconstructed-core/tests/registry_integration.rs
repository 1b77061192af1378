//! Registry, navigation and page plan agree with each other
//!
//! Every navigation entry must land on exactly one rendered card.

use std::collections::HashSet;

use deconstructed_core::{
    highlight, nav_entries, Block, LayoutMode, PagePlan, ScrollCoordinator, CONCEPTS,
};

#[test]
fn six_records_render_six_cards_in_order() {
    for mode in [LayoutMode::Compact, LayoutMode::Wide] {
        let plan = PagePlan::compose(mode, &CONCEPTS);
        let cards: Vec<_> = plan
            .card_indices()
            .into_iter()
            .map(|i| &CONCEPTS[i])
            .collect();

        assert_eq!(cards.len(), 6);
        for (card, concept) in cards.iter().zip(CONCEPTS.iter()) {
            assert_eq!(card.id, concept.id);
            assert_eq!(card.title, concept.title);
            assert_eq!(card.what, concept.what);
            assert_eq!(card.why, concept.why);
            assert_eq!(card.how, concept.how);
            assert_eq!(card.code, concept.code);
        }
    }
}

#[test]
fn every_nav_entry_resolves_to_exactly_one_card() {
    let plan = PagePlan::compose(LayoutMode::Wide, &CONCEPTS);
    let rendered_ids: Vec<&str> = plan
        .card_indices()
        .into_iter()
        .map(|i| CONCEPTS[i].id)
        .collect();

    let mut coordinator = ScrollCoordinator::new();
    for entry in nav_entries(&CONCEPTS) {
        let matches = rendered_ids.iter().filter(|id| **id == entry.anchor).count();
        assert_eq!(matches, 1, "anchor {} should match one card", entry.anchor);

        let request = coordinator.request(entry.anchor);
        assert_eq!(request.anchor, entry.anchor);
        let lookup = format!("document.getElementById(\"{}\")", entry.anchor);
        assert!(request.script().contains(&lookup));
    }
}

#[test]
fn ids_are_unique() {
    let ids: HashSet<_> = CONCEPTS.iter().map(|c| c.id).collect();
    assert_eq!(ids.len(), CONCEPTS.len());
}

#[test]
fn navigation_only_in_wide_layout() {
    let wide = PagePlan::compose(LayoutMode::Wide, &CONCEPTS);
    let compact = PagePlan::compose(LayoutMode::Compact, &CONCEPTS);
    assert!(wide
        .sidebar
        .as_ref()
        .is_some_and(|blocks| blocks.contains(&Block::Navigation)));
    assert!(compact.sidebar.is_none());
    assert!(!compact.main.contains(&Block::Navigation));
    assert_eq!(compact.main.first(), Some(&Block::Header));
}

#[test]
fn every_code_sample_highlights_losslessly() {
    for concept in &CONCEPTS {
        let code = highlight(concept.code, concept.lang);
        let rebuilt: Vec<String> = code.lines.iter().map(|l| l.text()).collect();
        assert_eq!(rebuilt.join("\n"), concept.code, "{}", concept.id);
    }
}

#[test]
fn pseudo_code_sample_starts_with_comment() {
    let code = highlight(CONCEPTS[0].code, CONCEPTS[0].lang);
    assert_eq!(code.lines.len(), 7);
    assert_eq!(
        code.lines[0].tokens[0].kind,
        deconstructed_core::TokenKind::Comment
    );
}

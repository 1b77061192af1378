//! Concept registry
//!
//! The fixed, ordered list of system-design concepts shown on the page.
//! Order defines both the card order and the navigation order, and each
//! id doubles as the anchor the navigation scrolls to.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{ContentError, ContentResult};

/// Icons the page knows how to draw
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconName {
    Code,
    ChatTeardropText,
    GitBranch,
    TreeStructure,
    FlowArrow,
    ListNumbers,
    Plus,
    Minus,
}

impl IconName {
    /// Stable kebab-case name, also used as a CSS hook
    pub fn as_str(&self) -> &'static str {
        match self {
            IconName::Code => "code",
            IconName::ChatTeardropText => "chat-teardrop-text",
            IconName::GitBranch => "git-branch",
            IconName::TreeStructure => "tree-structure",
            IconName::FlowArrow => "flow-arrow",
            IconName::ListNumbers => "list-numbers",
            IconName::Plus => "plus",
            IconName::Minus => "minus",
        }
    }
}

/// One static content entry describing a system-design concept
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct ConceptRecord {
    /// Unique key, also the anchor id of the rendered card
    pub id: &'static str,
    pub title: &'static str,
    pub what: &'static str,
    pub why: &'static str,
    pub how: &'static str,
    /// Literal source text shown in the code block
    pub code: &'static str,
    /// Language tag handed to the highlighter
    pub lang: &'static str,
    pub icon: IconName,
}

/// The built-in registry, in display order
pub static CONCEPTS: [ConceptRecord; 6] = [
    ConceptRecord {
        id: "pseudo-code",
        title: "Pseudo Code",
        what: "The Blueprint",
        why: "Clarity",
        how: "Plain Language",
        code: "// STATE\nINITIALIZE 'count' to 0\n\n// LOGIC\nWHEN \"Increment\" is clicked:\n  ADD 1 to 'count'\n  UPDATE display",
        lang: "javascript",
        icon: IconName::Code,
    },
    ConceptRecord {
        id: "sys-prompt",
        title: "System Prompt",
        what: "The Briefing",
        why: "Precision",
        how: "Define Rules",
        code: "// You are an expert React developer.\n// Generate a single, self-contained component\n// using functional components and the useState hook.",
        lang: "javascript",
        icon: IconName::ChatTeardropText,
    },
    ConceptRecord {
        id: "context-map",
        title: "Context Map",
        what: "The Ecosystem",
        why: "Scope",
        how: "Map Boundaries",
        code: "  [User]\n    |\n    v Clicks\n  [App UI]\n    |\n    v Reads/Writes\n  [State]",
        lang: "javascript",
        icon: IconName::GitBranch,
    },
    ConceptRecord {
        id: "component-tree",
        title: "Component Tree",
        what: "UI Hierarchy",
        why: "Structure",
        how: "Nest Components",
        code: "App\n └─ Counter\n     ├─ Display (shows count)\n     └─ Button (handles clicks)",
        lang: "javascript",
        icon: IconName::TreeStructure,
    },
    ConceptRecord {
        id: "logic-tree",
        title: "Logic Tree",
        what: "Decision Flow",
        why: "Edge Cases",
        how: "Map Paths",
        code: r#"         Click Event
               |
    Is button "Increment"?
          /        \
        (Yes)      (No)
          |        |
      count++    count--"#,
        lang: "javascript",
        icon: IconName::FlowArrow,
    },
    ConceptRecord {
        id: "action-sequence",
        title: "Action Sequence",
        what: "The Dominoes",
        why: "Debugging",
        how: "List Steps",
        code: "1. User clicks button\n2. Event handler called\n3. setCount() executed\n4. React re-renders\n5. User sees new count",
        lang: "javascript",
        icon: IconName::ListNumbers,
    },
];

/// Check that every record can be rendered and navigated to.
///
/// Ids must be non-empty and unique; titles and code samples non-empty.
pub fn validate_registry(registry: &[ConceptRecord]) -> ContentResult<()> {
    let mut seen = HashSet::with_capacity(registry.len());

    for (position, concept) in registry.iter().enumerate() {
        if concept.id.trim().is_empty() {
            return Err(ContentError::EmptyId(position));
        }
        if !seen.insert(concept.id) {
            return Err(ContentError::DuplicateId(concept.id.to_string()));
        }
        if concept.title.trim().is_empty() {
            return Err(ContentError::EmptyTitle(concept.id.to_string()));
        }
        if concept.code.is_empty() {
            return Err(ContentError::EmptyCode(concept.id.to_string()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn by_id(id: &str) -> Option<&'static ConceptRecord> {
        CONCEPTS.iter().find(|c| c.id == id)
    }

    fn sample(id: &'static str) -> ConceptRecord {
        ConceptRecord { id, ..CONCEPTS[0] }
    }

    #[test]
    fn builtin_registry_is_valid() {
        assert_eq!(validate_registry(&CONCEPTS), Ok(()));
    }

    #[test]
    fn builtin_registry_order() {
        let ids: Vec<_> = CONCEPTS.iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            [
                "pseudo-code",
                "sys-prompt",
                "context-map",
                "component-tree",
                "logic-tree",
                "action-sequence"
            ]
        );
    }

    #[test]
    fn logic_tree_keeps_single_backslash() {
        let logic = by_id("logic-tree").unwrap();
        assert!(logic.code.contains("/        \\\n"));
        assert!(!logic.code.contains("\\\\"));
    }

    #[test]
    fn context_map_fields() {
        let concept = by_id("context-map").unwrap();
        assert_eq!(concept.title, "Context Map");
        assert_eq!(concept.icon, IconName::GitBranch);
        assert!(by_id("missing").is_none());
    }

    #[test]
    fn duplicate_ids_rejected() {
        let registry = [sample("a"), sample("b"), sample("a")];
        assert_eq!(
            validate_registry(&registry),
            Err(ContentError::DuplicateId("a".to_string()))
        );
    }

    #[test]
    fn empty_fields_rejected() {
        assert_eq!(validate_registry(&[sample(" ")]), Err(ContentError::EmptyId(0)));

        let untitled = ConceptRecord { title: "", ..sample("x") };
        assert_eq!(
            validate_registry(&[untitled]),
            Err(ContentError::EmptyTitle("x".to_string()))
        );

        let no_code = ConceptRecord { code: "", ..sample("y") };
        assert_eq!(
            validate_registry(&[no_code]),
            Err(ContentError::EmptyCode("y".to_string()))
        );
    }

    #[test]
    fn icon_names_are_kebab_case() {
        assert_eq!(IconName::ChatTeardropText.as_str(), "chat-teardrop-text");
        assert_eq!(
            serde_json::to_string(&IconName::TreeStructure).unwrap(),
            "\"tree-structure\""
        );
    }
}

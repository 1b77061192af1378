//! Sidebar navigation and scroll requests.
//!
//! Each concept gets one entry, in registry order. Activating an entry
//! asks the webview to smooth-scroll the matching card into place. Each
//! request carries a generation; the page ignores any request older than
//! the newest one it has seen.

use crate::concept::{ConceptRecord, IconName};

/// Distance kept between the viewport top and a scrolled-to card
pub const SCROLL_OFFSET_PX: u32 = 32;

/// One sidebar link
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NavEntry {
    pub anchor: &'static str,
    pub title: &'static str,
    pub icon: IconName,
}

impl NavEntry {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

/// Navigation entries for a registry, in the same order
pub fn nav_entries(registry: &[ConceptRecord]) -> Vec<NavEntry> {
    registry
        .iter()
        .map(|c| NavEntry {
            anchor: c.id,
            title: c.title,
            icon: c.icon,
        })
        .collect()
}

/// A single "scroll to anchor" request
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ScrollRequest {
    pub anchor: String,
    pub offset: u32,
    pub generation: u64,
}

impl ScrollRequest {
    /// JavaScript run in the webview to perform the scroll.
    ///
    /// The page keeps the newest generation it has seen in
    /// `window.__navGeneration`; a request older than that is dropped, and the
    /// scroll itself waits a frame so a newer click in the same frame wins.
    /// The target is measured with `offsetTop` so a card still shifted by its
    /// reveal transform lands at the same place as a revealed one. Missing
    /// anchors are a silent no-op.
    pub fn script(&self) -> String {
        // JSON string literals are valid JS string literals
        let anchor = serde_json::Value::String(self.anchor.clone()).to_string();
        format!(
            "const generation = {generation};\n\
             if ((window.__navGeneration || 0) <= generation) {{\n  \
               window.__navGeneration = generation;\n  \
               requestAnimationFrame(() => {{\n    \
                 if (window.__navGeneration !== generation) return;\n    \
                 const el = document.getElementById({anchor});\n    \
                 if (!el) return;\n    \
                 let top = 0;\n    \
                 for (let node = el; node; node = node.offsetParent) {{\n      \
                   top += node.offsetTop;\n    \
                 }}\n    \
                 window.scrollTo({{ top: Math.max(0, top - {offset}), behavior: 'smooth' }});\n  \
               }});\n\
             }}",
            generation = self.generation,
            anchor = anchor,
            offset = self.offset,
        )
    }
}

/// Hands out scroll requests with increasing generations
#[derive(Clone, Debug, Default)]
pub struct ScrollCoordinator {
    generation: u64,
}

impl ScrollCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a scroll to `anchor`, superseding any earlier request
    pub fn request(&mut self, anchor: &str) -> ScrollRequest {
        self.generation += 1;
        tracing::debug!(anchor, generation = self.generation, "scroll requested");
        ScrollRequest {
            anchor: anchor.to_string(),
            offset: SCROLL_OFFSET_PX,
            generation: self.generation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concept::CONCEPTS;

    #[test]
    fn one_entry_per_concept_in_order() {
        let entries = nav_entries(&CONCEPTS);
        assert_eq!(entries.len(), CONCEPTS.len());
        for (entry, concept) in entries.iter().zip(CONCEPTS.iter()) {
            assert_eq!(entry.anchor, concept.id);
            assert_eq!(entry.title, concept.title);
            assert_eq!(entry.icon, concept.icon);
        }
        assert_eq!(entries[0].href(), "#pseudo-code");
    }

    #[test]
    fn generations_increase_per_request() {
        let mut coordinator = ScrollCoordinator::new();
        let first = coordinator.request("context-map");
        let second = coordinator.request("logic-tree");
        assert_eq!(first.generation, 1);
        assert_eq!(second.generation, 2);
        assert_eq!(second.anchor, "logic-tree");
        assert_eq!(second.offset, SCROLL_OFFSET_PX);
    }

    #[test]
    fn script_drops_superseded_requests() {
        let mut coordinator = ScrollCoordinator::new();
        coordinator.request("context-map");
        let script = coordinator.request("logic-tree").script();

        assert!(script.starts_with("const generation = 2;"));
        // older generations never overwrite the stamp
        assert!(script.contains("if ((window.__navGeneration || 0) <= generation)"));
        assert!(script.contains("window.__navGeneration = generation;"));
        // a newer click before the next frame cancels this scroll
        let deferred = script.find("requestAnimationFrame").unwrap();
        let recheck = script
            .find("if (window.__navGeneration !== generation) return;")
            .unwrap();
        let scroll = script.find("window.scrollTo").unwrap();
        assert!(deferred < recheck && recheck < scroll);
    }

    #[test]
    fn script_guards_missing_anchor() {
        let mut coordinator = ScrollCoordinator::new();
        let script = coordinator.request("sys-prompt").script();
        assert!(script.contains("document.getElementById(\"sys-prompt\")"));
        assert!(script.contains("if (!el) return;"));
        assert!(script.contains("top - 32"));
        assert!(script.contains("behavior: 'smooth'"));
    }

    #[test]
    fn script_measures_layout_offset_not_transformed_box() {
        let script = ScrollCoordinator::new().request("logic-tree").script();
        assert!(!script.contains("getBoundingClientRect"));
        assert!(script.contains("node = node.offsetParent"));
        assert!(script.contains("top += node.offsetTop;"));
    }

    #[test]
    fn script_escapes_anchor() {
        let request = ScrollRequest {
            anchor: "a\");alert(1);(\"".to_string(),
            offset: 0,
            generation: 1,
        };
        assert!(request.script().contains(r#"getElementById("a\");alert(1);(\"")"#));
    }
}

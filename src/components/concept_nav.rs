//! Concept Navigation Component
//!
//! Sidebar list of links, one per concept, in registry order. Clicking a
//! link smooth-scrolls the page to the matching card.

use deconstructed_core::{nav_entries, ScrollCoordinator, CONCEPTS};
use deconstructed_ui::{Icon, IconWeight};
use dioxus::prelude::*;

#[component]
pub fn ConceptNav() -> Element {
    let mut coordinator = use_signal(ScrollCoordinator::new);
    let entries = nav_entries(&CONCEPTS);

    rsx! {
        nav { class: "concept-nav",
            h3 { class: "concept-nav-heading", "Concepts" }

            for entry in entries {
                a {
                    key: "{entry.anchor}",
                    class: "nav-item",
                    href: "{entry.href()}",
                    onclick: move |e: MouseEvent| {
                        e.prevent_default();
                        let request = coordinator.write().request(entry.anchor);
                        // Fire and forget; a newer click supersedes this scroll
                        let _ = document::eval(&request.script());
                    },
                    Icon { name: entry.icon, size: 18, weight: IconWeight::Regular }
                    span { class: "nav-text", "{entry.title}" }
                }
            }
        }
    }
}

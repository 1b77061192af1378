use deconstructed_core::{Block, PagePlan, CONCEPTS};
use dioxus::prelude::*;

use crate::components::{ConceptCard, ConceptNav, Header, InteractiveDemo};
use crate::context::use_layout_mode;
use crate::theme::{root_variables, GLOBAL_STYLES};

/// Stable key for a block within its column
fn block_key(block: Block) -> String {
    match block {
        Block::Header => "header".to_string(),
        Block::CounterDemo => "counter-demo".to_string(),
        Block::Navigation => "navigation".to_string(),
        Block::Card(i) => format!("card-{}", CONCEPTS[i].id),
    }
}

fn render_block(block: Block) -> Element {
    match block {
        Block::Header => rsx! { Header {} },
        Block::CounterDemo => rsx! { InteractiveDemo {} },
        Block::Navigation => rsx! { ConceptNav {} },
        Block::Card(index) => rsx! { ConceptCard { index: index, concept: CONCEPTS[index] } },
    }
}

/// Root application component.
///
/// Watches the window width, shares the layout mode, and lays the page out
/// as a sticky sidebar beside the cards (wide) or a single column (compact).
#[component]
pub fn App() -> Element {
    let layout = use_layout_mode();
    use_context_provider(|| layout);

    let plan = PagePlan::compose(layout(), &CONCEPTS);
    let palette = root_variables();

    rsx! {
        style { {palette} }
        style { {GLOBAL_STYLES} }

        div { class: "app-root",
            if let Some(sidebar) = plan.sidebar {
                div { class: "desktop-container",
                    aside { class: "sidebar",
                        for block in sidebar {
                            Fragment { key: "{block_key(block)}", {render_block(block)} }
                        }
                    }
                    main {
                        for block in plan.main {
                            Fragment { key: "{block_key(block)}", {render_block(block)} }
                        }
                    }
                }
            } else {
                main { class: "mobile-main",
                    div { class: "mobile-column",
                        for block in plan.main {
                            Fragment { key: "{block_key(block)}", {render_block(block)} }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deconstructed_core::LayoutMode;

    #[test]
    fn block_keys_are_unique_per_column() {
        for mode in [LayoutMode::Compact, LayoutMode::Wide] {
            let plan = PagePlan::compose(mode, &CONCEPTS);
            let mut keys: Vec<_> = plan.main.iter().map(|b| block_key(*b)).collect();
            let total = keys.len();
            keys.sort();
            keys.dedup();
            assert_eq!(keys.len(), total);
        }
    }

    #[test]
    fn card_keys_use_concept_ids() {
        assert_eq!(block_key(Block::Card(0)), "card-pseudo-code");
        assert_eq!(block_key(Block::Navigation), "navigation");
    }
}

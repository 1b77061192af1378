//! Concept Card Component
//!
//! One concept rendered as a card: icon tile, title, the What/Why/How
//! fields and the code sample. The card fades and slides in the first time
//! enough of it scrolls into view, and never animates again after that.

use deconstructed_core::motion::{CARD_REVEAL, CARD_REVEAL_OFFSET_PX, CARD_REVEAL_THRESHOLD};
use deconstructed_core::{ConceptRecord, RevealLatch};
use deconstructed_ui::Icon;
use dioxus::prelude::*;

use super::CodeBlock;

/// Script that reports the card's visible fraction once it crosses the threshold
fn reveal_observer_script(anchor: &str) -> String {
    let anchor = serde_json::Value::String(anchor.to_string()).to_string();
    format!(
        "const el = document.getElementById({anchor});\n\
         if (el) {{\n  \
           const observer = new IntersectionObserver((entries) => {{\n    \
             for (const entry of entries) {{\n      \
               if (entry.intersectionRatio >= {threshold}) {{\n        \
                 observer.disconnect();\n        \
                 dioxus.send(entry.intersectionRatio);\n      \
               }}\n    \
             }}\n  \
           }}, {{ threshold: [{threshold}] }});\n  \
           observer.observe(el);\n\
         }}",
        anchor = anchor,
        threshold = CARD_REVEAL_THRESHOLD,
    )
}

/// Inline reveal parameters read by the stylesheet
fn reveal_style() -> String {
    format!(
        "--reveal-offset: {}px; {}",
        CARD_REVEAL_OFFSET_PX,
        CARD_REVEAL.css_declarations()
    )
}

#[component]
pub fn ConceptCard(index: usize, concept: ConceptRecord) -> Element {
    let mut revealed = use_signal(|| false);
    let anchor = concept.id;

    use_effect(move || {
        spawn(async move {
            let mut observer = document::eval(&reveal_observer_script(anchor));
            let mut latch = RevealLatch::new();
            while let Ok(ratio) = observer.recv::<f64>().await {
                if latch.observe(ratio) {
                    tracing::debug!(anchor, ratio, "card revealed");
                    revealed.set(true);
                    break;
                }
            }
        });
    });

    let class = if revealed() {
        "concept-card revealed"
    } else {
        "concept-card"
    };
    let style = reveal_style();

    rsx! {
        section {
            id: "{concept.id}",
            class: "{class}",
            style: "{style}",
            "data-index": "{index}",

            div { class: "card-header",
                div { class: "card-icon",
                    Icon { name: concept.icon, size: 24 }
                }
                h2 { class: "card-title", "{concept.title}" }
            }

            div { class: "card-fields",
                div {
                    h3 { class: "field-label", "What" }
                    p { class: "field-value", "{concept.what}" }
                }
                div {
                    h3 { class: "field-label", "Why" }
                    p { class: "field-value", "{concept.why}" }
                }
                div {
                    h3 { class: "field-label", "How" }
                    p { class: "field-value", "{concept.how}" }
                }
            }

            CodeBlock { code: concept.code, lang: concept.lang }
        }
    }
}

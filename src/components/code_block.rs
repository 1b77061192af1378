//! Code Block Component
//!
//! Line-numbered, syntax-highlighted rendering of a code sample.

use deconstructed_core::highlight;
use dioxus::prelude::*;

#[component]
pub fn CodeBlock(code: &'static str, lang: &'static str) -> Element {
    let highlighted = highlight(code, lang);

    rsx! {
        pre { class: "code-block", "data-lang": "{lang}",
            code {
                for line in highlighted.lines {
                    div { key: "{line.number}", class: "code-line",
                        span { class: "line-number", "{line.number}" }
                        span { class: "line-content",
                            for token in line.tokens {
                                span { class: token.kind.class(), "{token.text}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

//! Page header: title and subtitle.

use dioxus::prelude::*;

use crate::context::use_layout;

pub const PAGE_TITLE: &str = "System Design Deconstructed";
pub const PAGE_SUBTITLE: &str = "An interactive breakdown of the system design process for a simple React component, from pseudo-code to final product.";

/// Title block shown at the top of the sidebar or the single column.
///
/// Type sizes step down in the compact layout.
#[component]
pub fn Header() -> Element {
    let compact = use_layout()().is_compact();

    rsx! {
        header {
            class: if compact { "page-header page-header--compact" } else { "page-header" },
            h1 { class: "page-title", "{PAGE_TITLE}" }
            p { class: "page-subtitle", "{PAGE_SUBTITLE}" }
        }
    }
}

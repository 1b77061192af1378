//! Button Components
//!
//! Round outline buttons used by the counter demo. Hover brightens the
//! background and grows the button slightly; pressing shrinks it.

use dioxus::prelude::*;

/// Properties for the ControlButton component
#[derive(Clone, PartialEq, Props)]
pub struct ControlButtonProps {
    /// Icon content
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
}

/// Round icon button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ControlButton {
///         aria_label: "Increment".to_string(),
///         onclick: move |_| counter.write().increment(),
///         Icon { name: IconName::Plus, weight: IconWeight::Bold }
///     }
/// }
/// ```
#[component]
pub fn ControlButton(props: ControlButtonProps) -> Element {
    rsx! {
        button {
            class: "control-btn",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}


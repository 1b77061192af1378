//! Interactive Demo Component
//!
//! The counter widget: a decrement button, a number window and an
//! increment button. Each change slides the new number in from the side
//! implied by its direction while the old one slides out the other way.

use deconstructed_core::motion::{COUNTER_SLIDE, COUNTER_SPRING};
use deconstructed_core::{CounterState, Direction, IconName};
use deconstructed_ui::{ControlButton, Icon, IconWeight};
use dioxus::prelude::*;

/// One number span inside the counter window
#[derive(Clone, PartialEq, Debug)]
struct NumberFrame {
    key: String,
    class: String,
    style: String,
    value: i64,
    live: bool,
}

/// Frames to render for a counter state: the outgoing value (if any) and
/// the incoming one. Keys change with every value so the animation restarts.
fn number_frames(state: CounterState) -> Vec<NumberFrame> {
    let direction = state.last_direction();
    let timing = COUNTER_SPRING.css_declarations();
    let mut frames = Vec::with_capacity(2);

    if let Some(old) = state.exiting_value() {
        frames.push(NumberFrame {
            key: format!("out-{}", old),
            class: format!("counter-number exiting {}", direction.class()),
            style: format!("--slide-to: {}px; {}", COUNTER_SLIDE.exit(direction), timing),
            value: old,
            live: false,
        });
    }

    let style = if direction == Direction::None {
        String::new()
    } else {
        format!("--slide-from: {}px; {}", COUNTER_SLIDE.enter(direction), timing)
    };
    frames.push(NumberFrame {
        key: format!("in-{}", state.value()),
        class: format!("counter-number entering {}", direction.class()),
        style,
        value: state.value(),
        live: true,
    });

    frames
}

/// Counter demo section
#[component]
pub fn InteractiveDemo() -> Element {
    let mut counter = use_signal(CounterState::new);
    let frames = number_frames(counter());

    rsx! {
        section { id: "interactive-demo", class: "demo-section",
            h2 { class: "demo-title", "Interactive Demo" }

            div { class: "demo-controls",
                ControlButton {
                    aria_label: "Decrement".to_string(),
                    onclick: move |_| counter.write().decrement(),
                    Icon { name: IconName::Minus, size: 24, weight: IconWeight::Bold }
                }

                div { class: "counter-window",
                    for frame in frames {
                        span {
                            key: "{frame.key}",
                            class: "{frame.class}",
                            style: "{frame.style}",
                            "aria-live": if frame.live { "polite" } else { "off" },
                            "aria-hidden": if frame.live { "false" } else { "true" },
                            "{frame.value}"
                        }
                    }
                }

                ControlButton {
                    aria_label: "Increment".to_string(),
                    onclick: move |_| counter.write().increment(),
                    Icon { name: IconName::Plus, size: 24, weight: IconWeight::Bold }
                }
            }
        }
    }
}

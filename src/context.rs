//! Layout context for System Design Deconstructed.
//!
//! The root component owns the viewport watcher and shares the resulting
//! layout mode with every descendant via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! let layout = use_layout_mode();
//! use_context_provider(|| layout);
//!
//! // In child components
//! let compact = use_layout()().is_compact();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use deconstructed_core::{LayoutMode, LayoutTracker};
use dioxus::desktop::tao::event::{Event, WindowEvent};
use dioxus::desktop::{use_window, use_wry_event_handler, DesktopContext};
use dioxus::prelude::*;

/// Current window width in logical pixels
fn logical_width(window: &DesktopContext) -> f64 {
    let scale = window.window.scale_factor();
    window.window.inner_size().to_logical::<f64>(scale).width
}

/// Watch the window width and classify it against the compact breakpoint.
///
/// Reads the width once on mount, then follows resize events for as long
/// as the calling component lives; the event subscription is dropped with
/// it. The returned signal only changes when the breakpoint is crossed.
pub fn use_layout_mode() -> Signal<LayoutMode> {
    let window = use_window();
    let tracker = use_hook(|| Rc::new(RefCell::new(LayoutTracker::new(logical_width(&window)))));
    let mut mode = use_signal(|| tracker.borrow().mode());

    use_wry_event_handler(move |event, _| {
        let Event::WindowEvent {
            event: WindowEvent::Resized(size),
            window_id,
            ..
        } = event
        else {
            return;
        };
        if *window_id != window.window.id() {
            return;
        }

        let width = size.to_logical::<f64>(window.window.scale_factor()).width;
        if let Some(next) = tracker.borrow_mut().observe(width) {
            tracing::info!(width, mode = ?next, "layout switched");
            mode.set(next);
        }
    });

    mode
}

/// Hook to read the layout mode provided by the root component.
pub fn use_layout() -> Signal<LayoutMode> {
    use_context::<Signal<LayoutMode>>()
}

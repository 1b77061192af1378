//! System Design Deconstructed UI Components
//!
//! Dioxus primitives shared by the page: the icon set and the round
//! control button used by the counter demo.
//!
//! Styling lives in the application's global stylesheet; components here
//! only emit class names and the few inline values that depend on props.

pub mod components;

pub use components::*;

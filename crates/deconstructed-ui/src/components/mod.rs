//! Reusable UI components

mod button;
mod icon;

pub use button::*;
pub use icon::*;

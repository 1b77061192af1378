//! Visual theme: palette and global stylesheet.

mod colors;
mod styles;

pub use colors::root_variables;
pub use styles::GLOBAL_STYLES;

//! Color constants for the mono palette.
//!
//! Near-black surfaces, grey borders, off-white text.

// === SURFACES ===
pub const BACKGROUND: &str = "#000000";
pub const SURFACE: &str = "#0A0A0A";
pub const SURFACE_RAISED: &str = "#111111";
pub const HOVER: &str = "#181818";
pub const PRESSED: &str = "#222222";

// === LINES ===
pub const BORDER: &str = "#222222";
pub const SCROLLBAR_HOVER: &str = "#333333";

// === TEXT ===
pub const TEXT: &str = "#E0E0E0";
pub const TEXT_BRIGHT: &str = "#FFFFFF";
pub const TEXT_MUTED: &str = "#888888";

/// CSS custom properties for the palette, injected ahead of the global styles
pub fn root_variables() -> String {
    format!(
        ":root {{\n  \
           --background: {BACKGROUND};\n  \
           --surface: {SURFACE};\n  \
           --surface-raised: {SURFACE_RAISED};\n  \
           --hover: {HOVER};\n  \
           --pressed: {PRESSED};\n  \
           --border: {BORDER};\n  \
           --scrollbar-hover: {SCROLLBAR_HOVER};\n  \
           --text: {TEXT};\n  \
           --text-bright: {TEXT_BRIGHT};\n  \
           --text-muted: {TEXT_MUTED};\n\
         }}\n"
    )
}

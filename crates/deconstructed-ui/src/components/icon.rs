//! Icon Component
//!
//! Outline icons on a 256-unit grid, drawn with `currentColor` so they
//! take the text colour of their container. Weight maps to stroke width.

use deconstructed_core::IconName;
use dioxus::prelude::*;

/// Stroke weight variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum IconWeight {
    Thin,
    Light,
    #[default]
    Regular,
    Bold,
}

impl IconWeight {
    /// Stroke width in grid units
    pub fn stroke_width(&self) -> u32 {
        match self {
            IconWeight::Thin => 8,
            IconWeight::Light => 12,
            IconWeight::Regular => 16,
            IconWeight::Bold => 24,
        }
    }
}

/// Properties for the Icon component
#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    pub name: IconName,
    /// Rendered width and height in pixels
    #[props(default = 24)]
    pub size: u32,
    #[props(default)]
    pub weight: IconWeight,
}

/// Draws one named icon
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Icon { name: IconName::Plus, size: 24, weight: IconWeight::Bold }
/// }
/// ```
#[component]
pub fn Icon(props: IconProps) -> Element {
    let name = props.name.as_str();
    let stroke = props.weight.stroke_width();

    rsx! {
        svg {
            class: "icon icon-{name}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "{props.size}",
            height: "{props.size}",
            view_box: "0 0 256 256",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "{stroke}",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {icon_paths(props.name)}
        }
    }
}

fn icon_paths(name: IconName) -> Element {
    match name {
        IconName::Code => rsx! {
            polyline { points: "64 88 16 128 64 168" }
            polyline { points: "192 88 240 128 192 168" }
            line { x1: "160", y1: "40", x2: "96", y2: "216" }
        },
        IconName::ChatTeardropText => rsx! {
            path { d: "M132,216H47.7a7.6,7.6,0,0,1-7.7-7.7V124a92,92,0,0,1,92-92h0a92,92,0,0,1,92,92h0A92,92,0,0,1,132,216Z" }
            line { x1: "96", y1: "112", x2: "160", y2: "112" }
            line { x1: "96", y1: "144", x2: "160", y2: "144" }
        },
        IconName::GitBranch => rsx! {
            circle { cx: "68", cy: "64", r: "24" }
            circle { cx: "68", cy: "192", r: "24" }
            circle { cx: "192", cy: "80", r: "24" }
            line { x1: "68", y1: "88", x2: "68", y2: "168" }
            path { d: "M192,104v16a32,32,0,0,1-32,32H100a32,32,0,0,0-32,32" }
        },
        IconName::TreeStructure => rsx! {
            rect { x: "32", y: "96", width: "64", height: "64", rx: "8" }
            rect { x: "160", y: "40", width: "64", height: "64", rx: "8" }
            rect { x: "160", y: "152", width: "64", height: "64", rx: "8" }
            path { d: "M96,128h32M128,72V184M128,72h32M128,184h32" }
        },
        IconName::FlowArrow => rsx! {
            circle { cx: "56", cy: "176", r: "24" }
            path { d: "M80,176c48,0,48-96,96-96h56" }
            polyline { points: "200 48 232 80 200 112" }
        },
        IconName::ListNumbers => rsx! {
            line { x1: "104", y1: "64", x2: "216", y2: "64" }
            line { x1: "104", y1: "128", x2: "216", y2: "128" }
            line { x1: "104", y1: "192", x2: "216", y2: "192" }
            polyline { points: "40 60 56 52 56 108" }
            path { d: "M60,208H36l21.5-28.7A12,12,0,1,0,36.3,168" }
        },
        IconName::Plus => rsx! {
            line { x1: "40", y1: "128", x2: "216", y2: "128" }
            line { x1: "128", y1: "40", x2: "128", y2: "216" }
        },
        IconName::Minus => rsx! {
            line { x1: "40", y1: "128", x2: "216", y2: "128" }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_stroke_widths() {
        assert_eq!(IconWeight::Thin.stroke_width(), 8);
        assert_eq!(IconWeight::Light.stroke_width(), 12);
        assert_eq!(IconWeight::Regular.stroke_width(), 16);
        assert_eq!(IconWeight::Bold.stroke_width(), 24);
    }

    #[test]
    fn weight_default_is_regular() {
        assert_eq!(IconWeight::default(), IconWeight::Regular);
    }
}

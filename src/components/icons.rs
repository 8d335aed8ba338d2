//! Icon Lookup
//!
//! Resolves each [`IconKind`] tag to an inline Lucide SVG. Content
//! descriptors carry only the tag; this is the single place that knows
//! what an icon looks like.

use dioxus::prelude::*;
use folio_content::IconKind;

/// Render the Lucide icon for a content tag at the given pixel size.
pub fn render_icon(kind: IconKind, size: u32) -> Element {
    match kind {
        IconKind::Code => rsx! {
            // Lucide code-2 icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "{size}",
                height: "{size}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                "aria-label": "{kind.name()}",
                path { d: "m18 16 4-4-4-4" }
                path { d: "m6 8-4 4 4 4" }
                path { d: "m14.5 4-5 16" }
            }
        },
        IconKind::Server => rsx! {
            // Lucide server icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "{size}",
                height: "{size}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                "aria-label": "{kind.name()}",
                rect { x: "2", y: "2", width: "20", height: "8", rx: "2", ry: "2" }
                rect { x: "2", y: "14", width: "20", height: "8", rx: "2", ry: "2" }
                line { x1: "6", x2: "6.01", y1: "6", y2: "6" }
                line { x1: "6", x2: "6.01", y1: "18", y2: "18" }
            }
        },
        IconKind::Gamepad => rsx! {
            // Lucide gamepad-2 icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "{size}",
                height: "{size}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                "aria-label": "{kind.name()}",
                line { x1: "6", x2: "10", y1: "11", y2: "11" }
                line { x1: "8", x2: "8", y1: "9", y2: "13" }
                line { x1: "15", x2: "15.01", y1: "12", y2: "12" }
                line { x1: "18", x2: "18.01", y1: "10", y2: "10" }
                path {
                    d: "M17.32 5H6.68a4 4 0 0 0-3.978 3.59c-.006.052-.01.101-.017.152C2.604 9.416 2 14.456 2 16a3 3 0 0 0 3 3c1 0 1.5-.5 2-1l1.414-1.414A2 2 0 0 1 9.828 16h4.344a2 2 0 0 1 1.414.586L17 18c.5.5 1 1 2 1a3 3 0 0 0 3-3c0-1.545-.604-6.584-.685-7.258-.007-.05-.011-.1-.017-.151A4 4 0 0 0 17.32 5z"
                }
            }
        },
        IconKind::LayoutGrid => rsx! {
            // Lucide layout-grid icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "{size}",
                height: "{size}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                "aria-label": "{kind.name()}",
                rect { width: "7", height: "7", x: "3", y: "3", rx: "1" }
                rect { width: "7", height: "7", x: "14", y: "3", rx: "1" }
                rect { width: "7", height: "7", x: "14", y: "14", rx: "1" }
                rect { width: "7", height: "7", x: "3", y: "14", rx: "1" }
            }
        },
        IconKind::Link => rsx! {
            // Lucide link-2 icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "{size}",
                height: "{size}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                "aria-label": "{kind.name()}",
                path { d: "M9 17H7A5 5 0 0 1 7 7h2" }
                path { d: "M15 7h2a5 5 0 1 1 0 10h-2" }
                line { x1: "8", x2: "16", y1: "12", y2: "12" }
            }
        },
    }
}

//! Color constants for the portfolio palette.
//!
//! Deep indigo night gradient with emerald and amber accents.

#![allow(dead_code)]

// === NIGHT (Backgrounds) ===
pub const NIGHT_INDIGO: &str = "#312e81";
pub const NIGHT_PURPLE: &str = "#581c87";
pub const NIGHT_BLUE: &str = "#1e3a8a";
pub const NIGHT_CARD: &str = "rgba(3, 7, 18, 0.6)";

// === EMERALD (Primary accent, links, CTA) ===
pub const EMERALD: &str = "#10b981";
pub const EMERALD_BRIGHT: &str = "#34d399";
pub const EMERALD_SOFT: &str = "#6ee7b7";

// === AMBER (Secondary accent) ===
pub const AMBER: &str = "#fcd34d";
pub const AMBER_SOFT: &str = "#fde68a";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#f3f4f6";
pub const TEXT_SECONDARY: &str = "#d1d5db";
pub const TEXT_MUTED: &str = "#9ca3af";

// === BORDERS ===
pub const BORDER_FAINT: &str = "rgba(255, 255, 255, 0.1)";
pub const BORDER_SOFT: &str = "rgba(255, 255, 255, 0.2)";

//! Site Identity and Hero Content

use crate::section::SectionId;

/// Accent color applied to an emphasized headline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Emerald,
    Amber,
}

impl Accent {
    /// CSS class for this accent.
    pub fn class(&self) -> &'static str {
        match self {
            Accent::Emerald => "accent-emerald",
            Accent::Amber => "accent-amber",
        }
    }
}

/// One run of headline text, optionally accented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlineSpan {
    pub text: &'static str,
    pub accent: Option<Accent>,
}

/// The hero headline, split where the accent color changes.
pub static HEADLINE: &[HeadlineSpan] = &[
    HeadlineSpan { text: "Turning ", accent: None },
    HeadlineSpan { text: "Ideas", accent: Some(Accent::Emerald) },
    HeadlineSpan { text: " into ", accent: None },
    HeadlineSpan { text: "Reality", accent: Some(Accent::Amber) },
];

/// Top-level identity strings for the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteProfile {
    /// Owner's name, shown in the header and window title
    pub name: &'static str,
    /// Short introduction under the hero headline
    pub tagline: &'static str,
    /// Call-to-action button label
    pub cta_label: &'static str,
    /// Section the call to action jumps to
    pub cta_target: SectionId,
    /// Footer line
    pub footer_note: &'static str,
}

pub static PROFILE: SiteProfile = SiteProfile {
    name: "Louis Li",
    tagline: "I'm a junior CS major at the University of Florida with a minor \
              in Digital Arts and Sciences. I hope you enjoy some of the work \
              I've done!",
    cta_label: "View my work",
    cta_target: SectionId::Projects,
    footer_note: "© 2026 Louis Li — Built with Dioxus & Rust.",
};

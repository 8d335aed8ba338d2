//! Page Sections and Navigation Anchors
//!
//! [`SectionId`] names every navigable section of the page and owns its
//! mount anchor. The header's jump links come from [`NAV_LINKS`], a fixed
//! (label, target) list. Anchor resolution is string formatting only; a
//! label pointing at a section that never mounts is a silent dead link,
//! so the uniqueness of anchors is covered by tests rather than runtime
//! checks.

/// Navigable section of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Projects,
    Skills,
    Experience,
    Contact,
}

impl SectionId {
    /// Every navigable section, in page order.
    pub const ALL: [SectionId; 4] = [
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Contact,
    ];

    /// Element id this section mounts under.
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Contact => "contact",
        }
    }

    /// In-document jump link to this section.
    pub fn href(&self) -> String {
        format!("#{}", self.anchor())
    }

    /// Section heading title.
    pub fn title(&self) -> &'static str {
        match self {
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills",
            SectionId::Experience => "Experience",
            SectionId::Contact => "Get in Touch",
        }
    }

    /// Small tagline rendered above the heading title.
    pub fn tagline(&self) -> &'static str {
        match self {
            SectionId::Projects => "Selected Work",
            SectionId::Skills => "Tools & Languages",
            SectionId::Experience => "Where I've Been",
            SectionId::Contact => "Let's Build Something",
        }
    }
}

/// One jump link in the site header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: SectionId,
}

/// The fixed header navigation, in display order.
pub static NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Projects", target: SectionId::Projects },
    NavLink { label: "Skills", target: SectionId::Skills },
    NavLink { label: "Experience", target: SectionId::Experience },
    NavLink { label: "Contact", target: SectionId::Contact },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn href_prefixes_anchor_with_hash() {
        assert_eq!(SectionId::Projects.href(), "#projects");
        assert_eq!(SectionId::Contact.href(), "#contact");
    }

    #[test]
    fn all_lists_each_section_once() {
        for (i, a) in SectionId::ALL.iter().enumerate() {
            for b in &SectionId::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}

//! Project Showcase Descriptors
//!
//! Each project is a static record: title and description are always
//! present, links and image are optional. The conditional part of the
//! card template lives in [`ProjectEntry::affordances`], a pure mapping
//! from the optional link fields to zero, one, or two link affordances.

use crate::icon::IconKind;

/// Gradient palette tag for a project card's border wrapper.
///
/// Resolved to a CSS class by [`Palette::class`]; the stylesheet owns the
/// actual gradient stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    FuchsiaRose,
    SkyTeal,
    LimeEmerald,
}

impl Palette {
    /// CSS class applied to the card's gradient border wrapper.
    pub fn class(&self) -> &'static str {
        match self {
            Palette::FuchsiaRose => "palette-fuchsia-rose",
            Palette::SkyTeal => "palette-sky-teal",
            Palette::LimeEmerald => "palette-lime-emerald",
        }
    }
}

/// Visual tone of a link affordance (which accent color it takes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffordanceTone {
    /// Repository link, emerald accent
    Repo,
    /// Live demo link, amber accent
    Demo,
}

impl AffordanceTone {
    /// CSS class for this tone.
    pub fn class(&self) -> &'static str {
        match self {
            AffordanceTone::Repo => "project-link--repo",
            AffordanceTone::Demo => "project-link--demo",
        }
    }
}

/// A clickable link produced from a project's optional link fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affordance {
    pub label: &'static str,
    pub href: &'static str,
    pub tone: AffordanceTone,
}

/// One entry in the project showcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectEntry {
    /// Project title (always present)
    pub title: &'static str,
    /// Short description (always present)
    pub description: &'static str,
    /// Icon shown next to the title
    pub icon: IconKind,
    /// Link to the source repository, if public
    pub repo_link: Option<&'static str>,
    /// Link to a live demo or published build, if one exists
    pub demo_link: Option<&'static str>,
    /// Opaque asset path for the banner image, resolved by the environment
    pub image: Option<&'static str>,
    /// Gradient palette for the card border
    pub palette: Palette,
}

impl ProjectEntry {
    /// Map the optional link fields to their link affordances.
    ///
    /// Pure and deterministic: an absent field contributes nothing, a
    /// present field contributes exactly one affordance. Repo comes
    /// before demo when both exist.
    pub fn affordances(&self) -> Vec<Affordance> {
        let mut links = Vec::with_capacity(2);
        if let Some(href) = self.repo_link {
            links.push(Affordance {
                label: "View on GitHub",
                href,
                tone: AffordanceTone::Repo,
            });
        }
        if let Some(href) = self.demo_link {
            links.push(Affordance {
                label: "Visit Site",
                href,
                tone: AffordanceTone::Demo,
            });
        }
        links
    }
}

/// The project showcase, in display order.
pub static PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "Turtle All The Way Up Game",
        description: "Vertical platformer about a turtle stacking its way to \
                      the surface, made for a 48-hour game jam in C# and Unity.",
        icon: IconKind::Gamepad,
        repo_link: None,
        demo_link: Some("https://septicaled.itch.io/turtle-all-the-way-up"),
        image: Some("/assets/turtleallthewayup.png"),
        palette: Palette::FuchsiaRose,
    },
    ProjectEntry {
        title: "3D Surgery Simulator",
        description: "High-fidelity Unity & C# simulator for venipuncture \
                      training with real-time scoring and analytics dashboard.",
        icon: IconKind::LayoutGrid,
        repo_link: Some("https://github.com/shreya-shenoy/CaudalBlock"),
        demo_link: None,
        image: Some("/assets/caudalblock.png"),
        palette: Palette::SkyTeal,
    },
    ProjectEntry {
        title: "GatorGuide Planner",
        description: "Full-stack FastAPI + React web app that helps UF students \
                      create four-year course plans (SQLModel, Docker).",
        icon: IconKind::Server,
        repo_link: Some("https://github.com/CaseZumbrum/GatorGuide"),
        demo_link: Some("https://gator-guide.com/#/"),
        image: Some("/assets/GatorGuide.png"),
        palette: Palette::LimeEmerald,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(repo: Option<&'static str>, demo: Option<&'static str>) -> ProjectEntry {
        ProjectEntry {
            title: "Test Project",
            description: "A project used in tests",
            icon: IconKind::Code,
            repo_link: repo,
            demo_link: demo,
            image: None,
            palette: Palette::SkyTeal,
        }
    }

    #[test]
    fn no_links_yields_no_affordances() {
        assert!(entry(None, None).affordances().is_empty());
    }

    #[test]
    fn repo_only_yields_single_repo_affordance() {
        let links = entry(Some("https://example.com/repo"), None).affordances();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].tone, AffordanceTone::Repo);
        assert_eq!(links[0].href, "https://example.com/repo");
        assert_eq!(links[0].label, "View on GitHub");
    }

    #[test]
    fn demo_only_yields_single_demo_affordance() {
        let links = entry(None, Some("https://example.com/demo")).affordances();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].tone, AffordanceTone::Demo);
        assert_eq!(links[0].label, "Visit Site");
    }

    #[test]
    fn both_links_yield_repo_before_demo() {
        let links = entry(Some("https://example.com/repo"), Some("https://example.com/demo"))
            .affordances();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].tone, AffordanceTone::Repo);
        assert_eq!(links[1].tone, AffordanceTone::Demo);
    }

    #[test]
    fn affordance_mapping_is_deterministic() {
        let e = entry(Some("https://example.com/repo"), Some("https://example.com/demo"));
        assert_eq!(e.affordances(), e.affordances());
    }
}

//! Folio Content Library
//!
//! Static content descriptors for the portfolio page, plus the pure
//! mapping logic that turns them into renderable pieces.
//!
//! ## Overview
//!
//! The page is a fixed, ordered list of sections. Each section owns one
//! descriptor slice defined here at compile time (projects, skills,
//! timeline, contact fields). Descriptors are immutable and have no
//! identity or persistence; display order is slice order.
//!
//! The UI crate consumes these slices and maps each record through a
//! per-record template. Everything conditional about that mapping lives
//! here as pure functions (see [`ProjectEntry::affordances`]), so the
//! templates never branch on raw field truthiness.
//!
//! ## Quick Start
//!
//! ```
//! use folio_content::{PROJECTS, SectionId};
//!
//! for project in PROJECTS {
//!     println!("{} -> {} links", project.title, project.affordances().len());
//! }
//!
//! assert_eq!(SectionId::Projects.href(), "#projects");
//! ```

pub mod contact;
pub mod icon;
pub mod motion;
pub mod profile;
pub mod project;
pub mod section;
pub mod skill;
pub mod timeline;

// Re-exports
pub use contact::{FieldKind, FormField, CONTACT_FIELDS, CONTACT_ENDPOINT, CONTACT_SUBMIT_LABEL};
pub use icon::IconKind;
pub use motion::{Entrance, HERO_ENTRANCE};
pub use profile::{Accent, HeadlineSpan, SiteProfile, HEADLINE, PROFILE};
pub use project::{Affordance, AffordanceTone, Palette, ProjectEntry, PROJECTS};
pub use section::{NavLink, SectionId, NAV_LINKS};
pub use skill::{SkillEntry, SKILLS};
pub use timeline::{TimelineEntry, TIMELINE};

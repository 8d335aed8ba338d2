//! UI Components for the portfolio page.

mod contact_form;
mod footer;
pub mod icons;
mod nav_header;
mod project_card;
mod section_heading;
mod skill_badge;
mod timeline_item;

pub use contact_form::ContactForm;
pub use footer::SiteFooter;
pub use nav_header::NavHeader;
pub use project_card::ProjectCard;
pub use section_heading::SectionHeading;
pub use skill_badge::SkillBadge;
pub use timeline_item::TimelineItem;

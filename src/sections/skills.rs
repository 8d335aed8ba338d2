//! Skills Section

use dioxus::prelude::*;
use folio_content::{SectionId, SKILLS};

use crate::components::{SectionHeading, SkillBadge};

#[component]
pub fn Skills() -> Element {
    rsx! {
        section {
            id: SectionId::Skills.anchor(),
            class: "section section--skills",

            SectionHeading { section: SectionId::Skills }

            ul { class: "skill-grid",
                for skill in SKILLS {
                    SkillBadge { skill }
                }
            }
        }
    }
}

//! Skill Badge Component

use dioxus::prelude::*;
use folio_content::SkillEntry;

use crate::components::icons::render_icon;

#[derive(Props, Clone, PartialEq)]
pub struct SkillBadgeProps {
    pub skill: &'static SkillEntry,
}

/// One item in the skills grid: icon tile above the label.
#[component]
pub fn SkillBadge(props: SkillBadgeProps) -> Element {
    let skill = props.skill;

    rsx! {
        li { class: "skill-badge",
            div { class: "skill-badge__icon",
                {render_icon(skill.icon, 24)}
            }
            span { class: "skill-badge__label", "{skill.label}" }
        }
    }
}

//! Skill List Descriptors

use crate::icon::IconKind;

/// One badge in the skills grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillEntry {
    pub label: &'static str,
    pub icon: IconKind,
}

/// Tools and languages, in display order.
pub static SKILLS: &[SkillEntry] = &[
    SkillEntry { label: "JavaScript", icon: IconKind::Code },
    SkillEntry { label: "React", icon: IconKind::LayoutGrid },
    SkillEntry { label: "C++", icon: IconKind::Code },
    SkillEntry { label: "C#", icon: IconKind::Code },
    SkillEntry { label: "Python", icon: IconKind::Code },
    SkillEntry { label: "FastAPI", icon: IconKind::Server },
    SkillEntry { label: "Docker", icon: IconKind::Server },
    SkillEntry { label: "PostgreSQL", icon: IconKind::Server },
];

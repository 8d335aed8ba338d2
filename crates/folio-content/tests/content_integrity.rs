//! Integrity checks over the static content descriptors.
//!
//! The renderer is a pure function of these slices, so the page-level
//! guarantees (mandatory fields, affordance rules, anchor consistency)
//! reduce to properties of the data and its mapping functions.

use folio_content::{
    AffordanceTone, SectionId, CONTACT_FIELDS, NAV_LINKS, PROFILE, PROJECTS, SKILLS, TIMELINE,
};

#[test]
fn every_project_has_title_and_description() {
    for project in PROJECTS {
        assert!(!project.title.is_empty(), "untitled project");
        assert!(
            !project.description.is_empty(),
            "project '{}' has no description",
            project.title
        );
    }
}

#[test]
fn projects_without_repo_link_render_no_repo_affordance() {
    for project in PROJECTS.iter().filter(|p| p.repo_link.is_none()) {
        assert!(
            project
                .affordances()
                .iter()
                .all(|a| a.tone != AffordanceTone::Repo),
            "project '{}' has a repo affordance without a repo link",
            project.title
        );
    }
}

#[test]
fn projects_with_demo_link_render_exactly_one_demo_affordance() {
    for project in PROJECTS.iter().filter(|p| p.demo_link.is_some()) {
        let demos: Vec<_> = project
            .affordances()
            .into_iter()
            .filter(|a| a.tone == AffordanceTone::Demo)
            .collect();
        assert_eq!(demos.len(), 1, "project '{}'", project.title);
        assert_eq!(demos[0].href, project.demo_link.unwrap());
    }
}

#[test]
fn affordance_mapping_is_idempotent_across_the_showcase() {
    for project in PROJECTS {
        assert_eq!(project.affordances(), project.affordances());
    }
}

#[test]
fn showcase_preserves_descriptor_order_and_cardinality() {
    // One card per record, in slice order; the titles are the identity
    // the page presents, so they must stay distinct.
    let titles: Vec<_> = PROJECTS.iter().map(|p| p.title).collect();
    assert_eq!(titles.len(), PROJECTS.len());
    for (i, a) in titles.iter().enumerate() {
        for b in &titles[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn nav_links_target_distinct_existing_anchors() {
    assert!(!NAV_LINKS.is_empty());
    for link in NAV_LINKS {
        let matches = SectionId::ALL
            .iter()
            .filter(|s| s.anchor() == link.target.anchor())
            .count();
        assert_eq!(
            matches, 1,
            "nav label '{}' must resolve to exactly one section anchor",
            link.label
        );
    }
    // No two nav entries may share a target.
    for (i, a) in NAV_LINKS.iter().enumerate() {
        for b in &NAV_LINKS[i + 1..] {
            assert_ne!(a.target, b.target);
        }
    }
}

#[test]
fn section_anchors_are_unique_and_nonempty() {
    for (i, a) in SectionId::ALL.iter().enumerate() {
        assert!(!a.anchor().is_empty());
        for b in &SectionId::ALL[i + 1..] {
            assert_ne!(a.anchor(), b.anchor());
        }
    }
}

#[test]
fn demo_only_project_shows_demo_but_no_repo_affordance() {
    // The turtle game is published on itch.io with no public repository:
    // its card must carry the demo link, the image, and nothing pointing
    // at GitHub.
    let turtle = PROJECTS
        .iter()
        .find(|p| p.title == "Turtle All The Way Up Game")
        .expect("turtle game present in showcase");
    assert!(turtle.repo_link.is_none());
    assert!(turtle.image.is_some());
    let links = turtle.affordances();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].tone, AffordanceTone::Demo);
    assert_eq!(links[0].href, "https://septicaled.itch.io/turtle-all-the-way-up");
}

#[test]
fn skills_and_timeline_are_populated() {
    assert!(!SKILLS.is_empty());
    assert!(!TIMELINE.is_empty());
    for skill in SKILLS {
        assert!(!skill.label.is_empty());
    }
    for entry in TIMELINE {
        assert!(!entry.period.is_empty());
        assert!(!entry.role.is_empty());
    }
}

#[test]
fn contact_form_carries_the_three_wire_fields() {
    let names: Vec<_> = CONTACT_FIELDS.iter().map(|f| f.name).collect();
    assert_eq!(names, ["name", "email", "message"]);
    assert!(CONTACT_FIELDS.iter().all(|f| f.required));
}

#[test]
fn cta_targets_a_navigable_section() {
    assert!(SectionId::ALL.contains(&PROFILE.cta_target));
}

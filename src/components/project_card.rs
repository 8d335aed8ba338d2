//! Project Card Component
//!
//! One card per project descriptor: optional image banner, gradient
//! border wrapper, title with icon, description, and whatever link
//! affordances the descriptor's optional fields map to. Null-safety is
//! per field: a record missing its image or either link still renders
//! its mandatory title and description.

use dioxus::prelude::*;
use folio_content::{IconKind, ProjectEntry};

use crate::components::icons::render_icon;

#[derive(Props, Clone, PartialEq)]
pub struct ProjectCardProps {
    /// The project to display
    pub project: &'static ProjectEntry,
}

/// Project showcase card.
#[component]
pub fn ProjectCard(props: ProjectCardProps) -> Element {
    let project = props.project;

    // Resolve the opaque image reference against the configured base path
    let image_src = project.image.map(crate::asset_url);

    rsx! {
        article { class: "project-card",
            if let Some(src) = image_src {
                img {
                    class: "project-card__image",
                    src: "{src}",
                    alt: "{project.title}",
                }
            }

            div { class: "project-card__border {project.palette.class()}",
                div { class: "project-card__body",
                    div { class: "project-card__title-row",
                        span { class: "project-card__icon",
                            {render_icon(project.icon, 32)}
                        }
                        h3 { class: "project-card__title", "{project.title}" }
                    }

                    p { class: "project-card__description", "{project.description}" }

                    div { class: "project-card__links",
                        for affordance in project.affordances() {
                            a {
                                class: "project-link {affordance.tone.class()}",
                                href: "{affordance.href}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "{affordance.label}"
                                span { class: "project-link__icon",
                                    {render_icon(IconKind::Link, 16)}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

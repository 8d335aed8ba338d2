//! Projects Section
//!
//! One card per descriptor, in slice order.

use dioxus::prelude::*;
use folio_content::{SectionId, PROJECTS};

use crate::components::{ProjectCard, SectionHeading};

#[component]
pub fn Projects() -> Element {
    rsx! {
        section {
            id: SectionId::Projects.anchor(),
            class: "section section--projects",

            SectionHeading { section: SectionId::Projects }

            div { class: "project-grid",
                for project in PROJECTS {
                    ProjectCard { project }
                }
            }
        }
    }
}

//! Experience Section
//!
//! Vertical timeline, one row per entry in authored order.

use dioxus::prelude::*;
use folio_content::{SectionId, TIMELINE};

use crate::components::{SectionHeading, TimelineItem};

#[component]
pub fn Experience() -> Element {
    rsx! {
        section {
            id: SectionId::Experience.anchor(),
            class: "section section--experience",

            SectionHeading { section: SectionId::Experience }

            div { class: "timeline",
                for entry in TIMELINE {
                    TimelineItem { entry }
                }
            }
        }
    }
}

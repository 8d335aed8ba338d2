//! Section Heading Component

use dioxus::prelude::*;
use folio_content::SectionId;

/// Centered heading block: small uppercase tagline over the title.
#[component]
pub fn SectionHeading(section: SectionId) -> Element {
    rsx! {
        div { class: "section-heading",
            span { class: "section-heading__tagline", "{section.tagline()}" }
            h2 { class: "section-heading__title", "{section.title()}" }
        }
    }
}

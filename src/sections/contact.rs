//! Contact Section

use dioxus::prelude::*;
use folio_content::SectionId;

use crate::components::{ContactForm, SectionHeading};

#[component]
pub fn Contact() -> Element {
    rsx! {
        section {
            id: SectionId::Contact.anchor(),
            class: "section section--contact",

            SectionHeading { section: SectionId::Contact }

            ContactForm {}
        }
    }
}

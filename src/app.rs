use dioxus::prelude::*;

use crate::components::{NavHeader, SiteFooter};
use crate::sections::{Contact, Experience, Hero, Projects, Skills};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Mounts the global stylesheet, then the fixed section sequence. Each
/// section renders its own static descriptors; none depends on another's
/// output, so the page is a pure function of the content crate.
#[component]
pub fn App() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }
        NavHeader {}
        main { class: "page",
            Hero {}
            Projects {}
            Skills {}
            Experience {}
            Contact {}
        }
        SiteFooter {}
    }
}

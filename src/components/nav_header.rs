//! Navigation Header Component
//!
//! Fixed, blurred header with the owner's name on the left and the
//! in-page jump links on the right. Targets come from the content
//! crate's fixed navigation list; a label whose target never mounts is a
//! silent dead link by design.

use dioxus::prelude::*;
use folio_content::{NAV_LINKS, PROFILE};

/// Site header with anchor navigation.
#[component]
pub fn NavHeader() -> Element {
    rsx! {
        header { class: "site-header",
            div { class: "site-header__inner",
                h1 { class: "site-header__name", "{PROFILE.name}" }

                nav { class: "site-nav",
                    for link in NAV_LINKS {
                        a {
                            class: "site-nav__link",
                            href: "{link.target.href()}",
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}

//! Site Footer Component

use dioxus::prelude::*;
use folio_content::PROFILE;

#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer { class: "site-footer", "{PROFILE.footer_note}" }
    }
}

//! Hero Section
//!
//! Headline with accented spans, short introduction, and the call to
//! action jumping to the projects anchor. The headline carries the
//! declarative entrance hint; the stylesheet owns the keyframes.

use dioxus::prelude::*;
use folio_content::{HEADLINE, HERO_ENTRANCE, PROFILE};

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "hero",
            // Decorative blurred glow behind the headline
            div { class: "hero__glow" }

            h2 {
                class: "hero__headline rise-in",
                style: "{HERO_ENTRANCE.style()}",
                for piece in HEADLINE {
                    if let Some(accent) = piece.accent {
                        span { class: "{accent.class()}", "{piece.text}" }
                    } else {
                        span { "{piece.text}" }
                    }
                }
            }

            p { class: "hero__tagline", "{PROFILE.tagline}" }

            a {
                class: "hero__cta",
                href: "{PROFILE.cta_target.href()}",
                "{PROFILE.cta_label}"
            }
        }
    }
}

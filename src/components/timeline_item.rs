//! Timeline Item Component

use dioxus::prelude::*;
use folio_content::TimelineEntry;

#[derive(Props, Clone, PartialEq)]
pub struct TimelineItemProps {
    pub entry: &'static TimelineEntry,
}

/// One row on the experience timeline: marker dot, role, period, text.
#[component]
pub fn TimelineItem(props: TimelineItemProps) -> Element {
    let entry = props.entry;

    rsx! {
        div { class: "timeline-item",
            div { class: "timeline-item__dot" }
            h4 { class: "timeline-item__role", "{entry.role}" }
            span { class: "timeline-item__period", "{entry.period}" }
            p { class: "timeline-item__description", "{entry.description}" }
        }
    }
}

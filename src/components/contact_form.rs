//! Contact Form Component
//!
//! Field descriptors drive the template; submission is a plain browser
//! POST to the external endpoint. No response handling, no client-side
//! validation beyond the browser-native attributes the descriptors set.

use dioxus::prelude::*;
use folio_content::{FormField, CONTACT_ENDPOINT, CONTACT_FIELDS, CONTACT_SUBMIT_LABEL};

/// Contact form posting to the external relay endpoint.
#[component]
pub fn ContactForm() -> Element {
    rsx! {
        form {
            class: "contact-form",
            action: CONTACT_ENDPOINT,
            method: "POST",

            for field in CONTACT_FIELDS {
                ContactField { field }
            }

            button {
                r#type: "submit",
                class: "contact-form__submit",
                "{CONTACT_SUBMIT_LABEL}"
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ContactFieldProps {
    field: &'static FormField,
}

/// Single form control, textarea or typed input per the field kind.
#[component]
fn ContactField(props: ContactFieldProps) -> Element {
    let field = props.field;

    if field.kind.is_multiline() {
        rsx! {
            textarea {
                class: "contact-form__field",
                name: field.name,
                required: field.required,
                rows: "5",
                placeholder: field.placeholder,
            }
        }
    } else {
        rsx! {
            input {
                class: "contact-form__field",
                r#type: field.kind.input_type().unwrap_or("text"),
                name: field.name,
                required: field.required,
                placeholder: field.placeholder,
            }
        }
    }
}

//! Contact Form Descriptors
//!
//! The form is a pass-through to an external form-processing endpoint via
//! a plain browser POST. Field descriptors drive the template; validation
//! is limited to browser-native `required` and input `type` attributes,
//! and the submission response is entirely the endpoint's concern.

/// External endpoint receiving the form POST.
pub const CONTACT_ENDPOINT: &str = "https://formspree.io/f/maypajpq";

/// Label on the submit button.
pub const CONTACT_SUBMIT_LABEL: &str = "Send Message";

/// What kind of control a form field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line text input
    Text,
    /// Single-line input with browser email-shape validation
    Email,
    /// Multi-line textarea
    Message,
}

impl FieldKind {
    /// `type` attribute for single-line inputs; `None` means a textarea.
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            FieldKind::Text => Some("text"),
            FieldKind::Email => Some("email"),
            FieldKind::Message => None,
        }
    }

    /// Whether this field renders as a textarea.
    pub fn is_multiline(&self) -> bool {
        matches!(self, FieldKind::Message)
    }
}

/// One field of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    /// Wire name of the encoded form field
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: &'static str,
}

/// The contact form fields, in display order.
pub static CONTACT_FIELDS: &[FormField] = &[
    FormField {
        name: "name",
        kind: FieldKind::Text,
        required: true,
        placeholder: "Name",
    },
    FormField {
        name: "email",
        kind: FieldKind::Email,
        required: true,
        placeholder: "Email",
    },
    FormField {
        name: "message",
        kind: FieldKind::Message,
        required: true,
        placeholder: "Your message…",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_field_is_the_only_textarea() {
        let textareas: Vec<_> = CONTACT_FIELDS
            .iter()
            .filter(|f| f.kind.is_multiline())
            .collect();
        assert_eq!(textareas.len(), 1);
        assert_eq!(textareas[0].name, "message");
        assert_eq!(textareas[0].kind.input_type(), None);
    }

    #[test]
    fn email_field_uses_email_input_type() {
        let email = CONTACT_FIELDS.iter().find(|f| f.name == "email").unwrap();
        assert_eq!(email.kind.input_type(), Some("email"));
    }
}

use std::fmt;

use tracing::debug;

// enquiry forms
//
// the contact, careers, and referral pages each show a form whose submit is intercepted and
// dropped.  nothing is validated, sent, or kept

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    TextArea,
}

impl FieldKind {
    // value for the html type attribute; text areas have none
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            FieldKind::Text => Some("text"),
            FieldKind::Email => Some("email"),
            FieldKind::TextArea => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
}

const fn text(name: &'static str, placeholder: &'static str) -> FormField {
    FormField {
        name,
        placeholder,
        kind: FieldKind::Text,
    }
}

const CONTACT_FIELDS: [FormField; 4] = [
    text("name", "Your name"),
    FormField {
        name: "email",
        placeholder: "Email",
        kind: FieldKind::Email,
    },
    text("phone", "Phone"),
    FormField {
        name: "message",
        placeholder: "Tell us about your project",
        kind: FieldKind::TextArea,
    },
];

const CAREERS_FIELDS: [FormField; 4] = [
    text("name", "Full name"),
    text("contact", "Email or Phone"),
    text("role", "Role (e.g., Designer)"),
    FormField {
        name: "message",
        placeholder: "Message / Portfolio link",
        kind: FieldKind::TextArea,
    },
];

const REFER_FIELDS: [FormField; 4] = [
    text("name", "Your name"),
    text("contact", "Your email/phone"),
    text("friend_name", "Friend’s name"),
    text("friend_contact", "Friend’s email/phone"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    Careers,
    Refer,
}

impl FormKind {
    pub fn fields(self) -> &'static [FormField] {
        match self {
            FormKind::Contact => &CONTACT_FIELDS,
            FormKind::Careers => &CAREERS_FIELDS,
            FormKind::Refer => &REFER_FIELDS,
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            FormKind::Contact => "Send Message",
            FormKind::Careers => "Apply Now",
            FormKind::Refer => "Submit Referral",
        }
    }

    // extra non-submitting button shown beside the submit button
    pub fn secondary_label(self) -> Option<&'static str> {
        match self {
            FormKind::Contact => Some("Schedule a Call"),
            FormKind::Careers | FormKind::Refer => None,
        }
    }

    // the contact form shows name and email side by side
    pub fn paired_leading_fields(self) -> usize {
        match self {
            FormKind::Contact => 2,
            FormKind::Careers | FormKind::Refer => 0,
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormKind::Contact => "contact",
            FormKind::Careers => "careers",
            FormKind::Refer => "refer",
        };
        write!(f, "{}", name)
    }
}

/// Drops a submission on the floor.  Callers have already stopped the browser default.
pub fn discard_submission(kind: FormKind) {
    debug!(form = %kind, "discarding form submission");
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [FormKind; 3] = [FormKind::Contact, FormKind::Careers, FormKind::Refer];

    #[test]
    fn field_layouts() {
        let placeholders = |kind: FormKind| {
            kind.fields()
                .iter()
                .map(|field| field.placeholder)
                .collect::<Vec<_>>()
        };

        assert_eq!(
            placeholders(FormKind::Contact),
            vec!["Your name", "Email", "Phone", "Tell us about your project"]
        );
        assert_eq!(
            placeholders(FormKind::Careers),
            vec![
                "Full name",
                "Email or Phone",
                "Role (e.g., Designer)",
                "Message / Portfolio link"
            ]
        );
        assert_eq!(
            placeholders(FormKind::Refer),
            vec![
                "Your name",
                "Your email/phone",
                "Friend’s name",
                "Friend’s email/phone"
            ]
        );
    }

    #[test]
    fn field_names_unique_per_form() {
        for kind in ALL {
            let mut names: Vec<&str> = kind.fields().iter().map(|field| field.name).collect();
            names.sort();
            names.dedup();
            assert_eq!(names.len(), kind.fields().len(), "{kind}");
        }
    }

    #[test]
    fn input_types() {
        assert_eq!(FieldKind::Email.input_type(), Some("email"));
        assert_eq!(FieldKind::TextArea.input_type(), None);
        assert_eq!(CONTACT_FIELDS[1].kind, FieldKind::Email);
    }

    #[test]
    fn labels() {
        assert_eq!(FormKind::Contact.submit_label(), "Send Message");
        assert_eq!(FormKind::Careers.submit_label(), "Apply Now");
        assert_eq!(FormKind::Refer.submit_label(), "Submit Referral");
        assert_eq!(FormKind::Contact.secondary_label(), Some("Schedule a Call"));
        assert_eq!(FormKind::Refer.secondary_label(), None);
    }

    #[test]
    fn discard_is_a_no_op() {
        for kind in ALL {
            discard_submission(kind);
        }
    }
}

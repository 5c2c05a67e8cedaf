use dioxus::prelude::*;

use crate::components::ui::{Button, ButtonVariant};
use site::form::{FormField, FormKind, discard_submission};

#[derive(Clone, PartialEq, Props)]
struct FormInputProps {
    field: FormField,
}

#[component]
fn FormInput(props: FormInputProps) -> Element {
    let field = props.field;

    match field.kind.input_type() {
        Some(input_type) => rsx! {
            input {
                class: "form-input",
                name: field.name,
                r#type: input_type,
                placeholder: field.placeholder,
            }
        },
        None => rsx! {
            textarea {
                class: "form-textarea",
                name: field.name,
                placeholder: field.placeholder,
            }
        },
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct LeadFormProps {
    kind: FormKind,
}

// the submit handler only stops the browser from posting the form and reloading the page;
// whatever was typed stays in the inputs and goes nowhere
#[component]
pub fn LeadForm(props: LeadFormProps) -> Element {
    let kind = props.kind;
    let fields = kind.fields();
    let (paired, rest) = fields.split_at(kind.paired_leading_fields());
    let submit_label = kind.submit_label();

    rsx! {
        form {
            class: "lead-form",
            onsubmit: move |event: FormEvent| {
                event.prevent_default();
                discard_submission(kind);
            },
            if !paired.is_empty() {
                div { class: "grid grid-tight grid-sm-2",
                    for field in paired.iter() {
                        FormInput { key: "{field.name}", field: *field }
                    }
                }
            }
            for field in rest.iter() {
                FormInput { key: "{field.name}", field: *field }
            }
            div { class: "form-actions",
                Button { submit: true, class: "btn-round", "{submit_label}" }
                if let Some(label) = kind.secondary_label() {
                    Button { variant: ButtonVariant::Outline, class: "btn-round", "{label}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::render;

    #[test]
    fn contact_form_layout() {
        fn app() -> Element {
            rsx! {
                LeadForm { kind: FormKind::Contact }
            }
        }

        let html = render(app);
        assert_eq!(html.matches(r#"class="form-input""#).count(), 3);
        assert_eq!(html.matches(r#"class="form-textarea""#).count(), 1);
        assert!(html.contains(r#"type="email""#));
        assert!(html.contains("Send Message"));
        assert!(html.contains("Schedule a Call"));
        assert_eq!(html.matches(r#"type="submit""#).count(), 1);
    }

    #[test]
    fn referral_form_layout() {
        fn app() -> Element {
            rsx! {
                LeadForm { kind: FormKind::Refer }
            }
        }

        let html = render(app);
        assert_eq!(html.matches(r#"class="form-input""#).count(), 4);
        assert!(!html.contains("form-textarea"));
        assert!(html.contains("Friend’s email/phone"));
        assert!(html.contains("Submit Referral"));
        assert!(!html.contains(r#"type="button""#));
    }
}

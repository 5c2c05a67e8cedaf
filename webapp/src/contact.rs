use dioxus::prelude::*;

use crate::components::{footer::ContactDetails, form::LeadForm, ui::Section};
use site::{
    content::{
        CAREER_PERKS, CAREERS_HEADING, CAREERS_INTRO, CONTACT_HEADING, CONTACT_INTRO, FAQ_HEADING,
        FAQS, Heading, REFER_HEADING, REFER_INTRO, REFERRAL_PERKS,
    },
    form::FormKind,
    nav::CONTACT_ANCHOR,
};

#[component]
pub fn Contact() -> Element {
    rsx! {
        main { id: CONTACT_ANCHOR,
            Section { heading: CONTACT_HEADING,
                div { class: "grid grid-wide grid-md-2",
                    div { class: "stack",
                        p { class: "body-text", "{CONTACT_INTRO}" }
                        ContactDetails {}
                    }
                    LeadForm { kind: FormKind::Contact }
                }
            }
        }
    }
}

#[component]
pub fn Faq() -> Element {
    rsx! {
        main {
            Section { heading: FAQ_HEADING,
                div { class: "faq-list",
                    for faq in FAQS.iter() {
                        details { key: "{faq.heading}", class: "faq-item",
                            summary { "{faq.heading}" }
                            p { "{faq.description}" }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct FormPageProps {
    heading: Heading,
    intro: &'static str,
    perks: &'static [&'static str],
    kind: FormKind,
}

// intro and perks on the left, the enquiry form on the right
#[component]
fn FormPage(props: FormPageProps) -> Element {
    rsx! {
        main {
            Section { heading: props.heading,
                div { class: "grid grid-wide grid-md-2",
                    div { class: "stack",
                        p { class: "body-text", "{props.intro}" }
                        ul { class: "muted-list",
                            for perk in props.perks.iter() {
                                li { key: "{perk}", "{perk}" }
                            }
                        }
                    }
                    LeadForm { kind: props.kind }
                }
            }
        }
    }
}

#[component]
pub fn Careers() -> Element {
    rsx! {
        FormPage {
            heading: CAREERS_HEADING,
            intro: CAREERS_INTRO,
            perks: CAREER_PERKS,
            kind: FormKind::Careers,
        }
    }
}

#[component]
pub fn Refer() -> Element {
    rsx! {
        FormPage {
            heading: REFER_HEADING,
            intro: REFER_INTRO,
            perks: REFERRAL_PERKS,
            kind: FormKind::Refer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{count_class, render};

    #[test]
    fn contact_page_is_the_anchor_target() {
        let html = render(Contact);

        assert!(html.contains(r#"id="contact""#));
        assert!(html.contains("hello@sharmainterior.com"));
        assert!(html.contains("Jaipur • Mumbai • Delhi"));
        assert_eq!(count_class(&html, "lead-form"), 1);
    }

    #[test]
    fn faq_pairs() {
        let html = render(Faq);

        assert_eq!(count_class(&html, "faq-item"), 4);
        assert_eq!(html.matches("<summary>").count(), 4);
        assert!(html.contains("Up to 5 years on select items."));
    }

    #[test]
    fn careers_and_refer_pages() {
        let careers = render(Careers);
        assert!(careers.contains("Competitive pay"));
        assert!(careers.contains("Apply Now"));

        let refer = render(Refer);
        assert!(refer.contains("Reward after project confirmation"));
        assert!(refer.contains("Submit Referral"));
    }

    // with no action the browser would post back to the current page; the handler stops that
    #[test]
    fn forms_have_no_submission_target() {
        for page in [Contact as fn() -> Element, Careers, Refer] {
            let html = render(page);

            assert_eq!(count_class(&html, "lead-form"), 1);
            assert!(!html.contains("action="));
            assert!(!html.contains("method="));
        }
    }
}

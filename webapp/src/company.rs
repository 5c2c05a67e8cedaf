use dioxus::prelude::*;

use crate::components::ui::{Glyph, Icon, Section, card_grid};
use site::content::{
    ANNUAL_METRICS, ANNUAL_REPORT_NOTE, ANNUAL_RETURN_HEADING, COMPANY_HEADING, COMPANY_INTRO,
    COMPANY_SERVICES, CSR_HEADING, CSR_PILLARS, WORKFLOW_HEADING, WORKFLOW_STEPS,
    workflow_description,
};

#[component]
pub fn Company() -> Element {
    rsx! {
        main {
            Section { heading: COMPANY_HEADING,
                div { class: "grid grid-wide grid-md-2",
                    div { class: "stack",
                        p { class: "body-text", "{COMPANY_INTRO}" }
                        ul { class: "check-list",
                            for service in COMPANY_SERVICES {
                                li { key: "{service}",
                                    Icon { glyph: Glyph::Check }
                                    "{service}"
                                }
                            }
                        }
                    }
                    div { class: "placeholder team-photo", "Team Photo" }
                }
            }

            Section { heading: WORKFLOW_HEADING,
                {
                    card_grid(
                        &WORKFLOW_STEPS,
                        "grid-tight grid-md-5",
                        |idx, step| {
                            let number = idx + 1;
                            let description = workflow_description(step);
                            rsx! {
                                div { class: "tile tile-sm workflow-step",
                                    p { class: "tile-kicker", "Step {number}" }
                                    p { class: "tile-heading", "{step}" }
                                    p { class: "tile-text", "{description}" }
                                }
                            }
                        },
                    )
                }
            }
        }
    }
}

#[component]
pub fn Csr() -> Element {
    rsx! {
        main {
            Section { heading: CSR_HEADING,
                {
                    card_grid(
                        &CSR_PILLARS,
                        "grid-md-2",
                        |_, pillar| rsx! {
                            div { class: "tile csr-pillar",
                                p { class: "tile-heading", "{pillar.heading}" }
                                p { class: "tile-text", "{pillar.description}" }
                            }
                        },
                    )
                }
            }
        }
    }
}

#[component]
pub fn AnnualReturn() -> Element {
    rsx! {
        main {
            Section { heading: ANNUAL_RETURN_HEADING,
                {
                    card_grid(
                        &ANNUAL_METRICS,
                        "grid-tight grid-md-4",
                        |_, metric| rsx! {
                            div { class: "tile tile-sm",
                                p { class: "tile-kicker", "{metric.label}" }
                                p { class: "metric-value", "{metric.value}" }
                            }
                        },
                    )
                }
                div { class: "tile report-note",
                    p { "{ANNUAL_REPORT_NOTE}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{count_class, render, texts_of_class};

    #[test]
    fn company_sections_in_order() {
        let html = render(Company);

        let about = html.find("Team Photo");
        let workflow = html.find("Our Workflow");
        assert!(about.is_some() && workflow.is_some());
        assert!(about < workflow);

        assert_eq!(count_class(&html, "tile tile-sm workflow-step"), 5);
        assert!(html.contains("Step 5"));
        assert!(html.contains("Short description of how we handle after sales."));
        assert_eq!(html.matches("✓").count(), 5);
    }

    #[test]
    fn csr_pillars() {
        let html = render(Csr);

        assert_eq!(count_class(&html, "tile csr-pillar"), 4);
        assert!(html.contains("Environmental Sustainability"));
    }

    #[test]
    fn annual_return_metrics_in_order() {
        let html = render(AnnualReturn);

        assert_eq!(
            texts_of_class(&html, "metric-value"),
            vec!["120", "4.9/5", "8 weeks", "7"]
        );
        assert_eq!(
            texts_of_class(&html, "tile-kicker"),
            vec![
                "Projects Completed",
                "Customer Satisfaction",
                "Average Timeline",
                "Cities Served"
            ]
        );
        assert!(html.contains("coming soon"));
    }
}

use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{
    Route,
    common::current_year,
    components::ui::{Container, Glyph, Icon},
};
use site::{config::SiteConfig, nav::quick_links};

// phone, email, and cities, shared by the footer and the contact page
#[component]
pub fn ContactDetails() -> Element {
    let config = use_context::<Arc<SiteConfig>>();
    let contact = &config.contact;
    let locations = contact.locations();

    rsx! {
        ul { class: "detail-list",
            li { class: "contact-line",
                Icon { glyph: Glyph::Phone }
                "{contact.phone}"
            }
            li { class: "contact-line",
                Icon { glyph: Glyph::Mail }
                "{contact.email}"
            }
            li { class: "contact-line",
                Icon { glyph: Glyph::MapPin }
                "{locations}"
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let config = use_context::<Arc<SiteConfig>>();
    let year = current_year();

    rsx! {
        footer { class: "app-footer",
            Container { class: "footer-grid",
                div {
                    h4 { class: "footer-heading", "{config.company.name}" }
                    p { class: "footer-text", "{config.company.tagline}" }
                }
                div {
                    h5 { class: "footer-subheading", "Quick Links" }
                    ul { class: "footer-list",
                        for entry in quick_links().iter() {
                            li { key: "{entry.path}",
                                Link { to: Route::from_nav(entry), "{entry.label}" }
                            }
                        }
                    }
                }
                div {
                    h5 { class: "footer-subheading", "Contact" }
                    ContactDetails {}
                }
                div {
                    h5 { class: "footer-subheading", "Follow" }
                    div { class: "social-links",
                        for link in config.social.iter() {
                            a {
                                key: "{link.name}",
                                href: "{link.href}",
                                "aria-label": "{link.name}",
                                Icon { glyph: Glyph::from_social(&link.name) }
                            }
                        }
                    }
                }
            }
            div { class: "footer-bottom",
                Container {
                    p { "© {year} {config.company.name}. All rights reserved." }
                    p { "{config.company.origin}" }
                }
            }
        }
    }
}

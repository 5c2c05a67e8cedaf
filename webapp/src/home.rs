use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{
    Route,
    components::ui::{
        Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Container, Glyph, Icon,
        Pill, Section, card_grid,
    },
};
use site::content::{
    CLIENT_RATING, CONSULTATION_BANNER, FEATURED_HEADING, FEATURED_WORK, HIGHLIGHTS,
    HIGHLIGHTS_HEADING, HOME_BADGES, HOME_HEADLINE, HOME_INTRO, HOME_WELCOME,
};

#[component]
fn Hero() -> Element {
    rsx! {
        div { class: "hero",
            Container {
                div { class: "hero-grid",
                    div {
                        Pill { "{HOME_WELCOME}" }
                        h1 { class: "hero-title", "{HOME_HEADLINE}" }
                        p { class: "hero-intro", "{HOME_INTRO}" }
                        div { class: "row hero-actions",
                            Link { to: Route::Contact {},
                                Button { class: "btn-round", "Get Free Consultation" }
                            }
                            Link { to: Route::Projects {},
                                Button {
                                    variant: ButtonVariant::Outline,
                                    class: "btn-round",
                                    "View Projects"
                                }
                            }
                        }
                        div { class: "row hero-actions",
                            for badge in HOME_BADGES {
                                Pill { key: "{badge}", "{badge}" }
                            }
                        }
                    }

                    div { class: "hero-media",
                        div { class: "hero-video",
                            Icon { glyph: Glyph::Play }
                        }
                        div { class: "rating-badge",
                            p { class: "rating-label", "Client Rating" }
                            p { class: "rating-value", "{CLIENT_RATING}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! {
        main {
            Hero {}

            Section { heading: HIGHLIGHTS_HEADING,
                {
                    card_grid(
                        &HIGHLIGHTS,
                        "grid-sm-2 grid-lg-3",
                        |_, highlight| rsx! {
                            Card {
                                CardHeader {
                                    CardTitle { "{highlight.heading}" }
                                }
                                CardContent {
                                    p { class: "tile-text", "{highlight.description}" }
                                }
                            }
                        },
                    )
                }
            }

            Section {
                heading: FEATURED_HEADING,
                header_extra: rsx! {
                    Link { to: Route::Gallery {}, class: "section-link",
                        "See all"
                        Icon { glyph: Glyph::ChevronRight }
                    }
                },
                {
                    card_grid(
                        &FEATURED_WORK,
                        "grid-sm-2 grid-lg-3",
                        |_, work| rsx! {
                            div { class: "featured-work",
                                div { class: "placeholder placeholder-md", "{work.image_label}" }
                                div { class: "work-caption",
                                    p { class: "tile-heading", "{work.title}" }
                                    p { class: "tile-text", "{work.caption}" }
                                }
                            }
                        },
                    )
                }
            }

            Section { class: "section-flush",
                div { class: "consultation-banner",
                    div {
                        h3 { class: "banner-title", "{CONSULTATION_BANNER.heading}" }
                        p { class: "tile-text", "{CONSULTATION_BANNER.description}" }
                    }
                    Link { to: Route::Contact {},
                        Button { class: "btn-round", "Schedule a Call" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::{count_class, render_at, texts_of_class};
    use site::content::{CLIENT_RATING, HIGHLIGHTS};

    #[test]
    fn featured_work_shows_six_placeholders() {
        let html = render_at("/");
        let labels = texts_of_class(&html, "placeholder placeholder-md");

        assert_eq!(count_class(&html, "featured-work"), 6);
        assert_eq!(
            labels,
            (1..=6).map(|n| format!("Image {n}")).collect::<Vec<_>>()
        );
    }

    #[test]
    fn hero_and_highlights() {
        let html = render_at("/");

        assert!(html.contains(CLIENT_RATING));
        assert_eq!(count_class(&html, "card-title"), HIGHLIGHTS.len());
        assert!(html.contains(HIGHLIGHTS[1].heading));
        assert!(html.contains(HIGHLIGHTS[2].heading));
        assert!(html.contains("See all"));
        assert!(html.contains(r#"href="/gallery""#));
    }
}

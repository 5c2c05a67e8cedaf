use dioxus::prelude::*;

use crate::components::ui::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Section, card_grid,
};
use site::content::{
    CUSTOM_HEADING, CUSTOM_INTRO, DESIGN_BUILD_HEADING, DESIGN_BUILD_STAGES, FURNITURE_CATEGORIES,
    FURNITURE_FEATURES, OFFER_NOTE, OFFERS, OFFERS_HEADING, PRODUCT_CATEGORIES, PRODUCTS_HEADING,
};

#[component]
pub fn CustomDesign() -> Element {
    rsx! {
        main {
            Section { heading: CUSTOM_HEADING,
                p { class: "body-text", "{CUSTOM_INTRO}" }
                div { class: "section-body",
                    {
                        card_grid(
                            &FURNITURE_CATEGORIES,
                            "grid-sm-2 grid-lg-3",
                            |_, name| rsx! {
                                Card { class: "furniture-card",
                                    CardHeader {
                                        CardTitle { "{name}" }
                                    }
                                    CardContent {
                                        ul { class: "muted-list",
                                            for feature in FURNITURE_FEATURES {
                                                li { key: "{feature}", "{feature}" }
                                            }
                                        }
                                    }
                                }
                            },
                        )
                    }
                }
            }
        }
    }
}

#[component]
pub fn DesignBuild() -> Element {
    rsx! {
        main {
            Section { heading: DESIGN_BUILD_HEADING,
                {
                    card_grid(
                        &DESIGN_BUILD_STAGES,
                        "grid-md-3",
                        |_, stage| rsx! {
                            div { class: "tile design-stage",
                                p { class: "tile-heading", "{stage.heading}" }
                                p { class: "tile-text", "{stage.description}" }
                            }
                        },
                    )
                }
            }
        }
    }
}

#[component]
pub fn Products() -> Element {
    rsx! {
        main {
            Section { heading: PRODUCTS_HEADING,
                {
                    card_grid(
                        &PRODUCT_CATEGORIES,
                        "grid-sm-2 grid-lg-3",
                        |_, name| rsx! {
                            div { class: "product-card",
                                div { class: "placeholder placeholder-sm", "Image" }
                                div { class: "product-caption",
                                    p { class: "tile-heading", "{name}" }
                                    Button { variant: ButtonVariant::Ghost, small: true, "View" }
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
pub fn Offers() -> Element {
    rsx! {
        main {
            Section { heading: OFFERS_HEADING,
                {
                    card_grid(
                        &OFFERS,
                        "grid-md-3",
                        |_, offer| rsx! {
                            Card { class: "offer-card",
                                CardHeader {
                                    CardTitle { "{offer.heading}" }
                                }
                                CardContent {
                                    p { class: "tile-text", "{offer.description}" }
                                    div { class: "offer-footer",
                                        span { class: "offer-note", "{OFFER_NOTE}" }
                                        Button { "Claim Offer" }
                                    }
                                }
                            }
                        },
                    )
                }
            }
        }
    }
}

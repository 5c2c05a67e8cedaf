use dioxus::prelude::*;

use crate::components::ui::{Section, card_grid};
use site::content::{GALLERY_HEADING, GALLERY_TILE_COUNT, PROJECTS, PROJECTS_HEADING};

#[component]
pub fn Projects() -> Element {
    rsx! {
        main {
            Section { heading: PROJECTS_HEADING,
                {
                    card_grid(
                        &PROJECTS,
                        "grid-md-2",
                        |_, project| rsx! {
                            div { class: "project-card",
                                div { class: "placeholder placeholder-lg", "Project Image" }
                                div { class: "project-caption",
                                    p { class: "tile-heading", "{project.heading}" }
                                    p { class: "tile-text", "{project.description}" }
                                }
                            }
                        },
                    )
                }
            }
        }
    }
}

// photos are not wired up yet, so the gallery is a grid of empty frames
#[component]
pub fn Gallery() -> Element {
    rsx! {
        main {
            Section { heading: GALLERY_HEADING,
                div { class: "grid grid-tight grid-sm-2 grid-lg-3",
                    for idx in 0..GALLERY_TILE_COUNT {
                        div { key: "{idx}", class: "gallery-tile" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{count_class, render};

    #[test]
    fn project_cards() {
        let html = render(Projects);

        assert_eq!(count_class(&html, "project-card"), 4);
        assert_eq!(html.matches("Delivered in 8 weeks").count(), 4);
    }

    #[test]
    fn gallery_tiles() {
        let html = render(Gallery);

        assert_eq!(count_class(&html, "gallery-tile"), 12);
    }
}

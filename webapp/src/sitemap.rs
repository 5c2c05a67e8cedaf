use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::warn;

use crate::{
    Route,
    components::ui::{Button, Section},
};
use site::{
    content::{NOT_FOUND_HEADING, NOT_FOUND_MESSAGE, SITEMAP_HEADING},
    nav::NAV_ITEMS,
};

#[component]
pub fn Sitemap() -> Element {
    rsx! {
        main {
            Section { heading: SITEMAP_HEADING,
                div { class: "tile",
                    div { class: "placeholder map-placeholder", "Map Placeholder" }
                    div { class: "sitemap-links",
                        for entry in NAV_ITEMS.iter() {
                            Link { key: "{entry.path}", to: Route::from_nav(entry), "{entry.label}" }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct NotFoundProps {
    // the unmatched path, split on '/' by the router
    segments: Vec<String>,
}

#[component]
pub fn NotFound(props: NotFoundProps) -> Element {
    let path = format!("/{}", props.segments.join("/"));
    use_hook(|| warn!(path = %path, "no route matches location"));

    rsx! {
        main {
            Section { heading: NOT_FOUND_HEADING,
                div { class: "stack",
                    p { class: "body-text", "{NOT_FOUND_MESSAGE}" }
                    p { class: "tile-text", "{path}" }
                    div {
                        Link { to: Route::Home {},
                            Button { class: "btn-round", "Back to Home" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{link_labels, render_at};

    #[test]
    fn sitemap_lists_every_entry_in_nav_order() {
        let html = render_at("/sitemap");
        let labels: Vec<String> = NAV_ITEMS.iter().map(|entry| entry.label.to_owned()).collect();

        assert_eq!(
            link_labels(&html, r#"class="sitemap-links">"#, "</div>"),
            labels
        );
        assert_eq!(
            link_labels(&html, r#"class="nav-links">"#, "</nav>"),
            labels
        );
    }

    #[test]
    fn not_found_echoes_the_path() {
        let html = render_at("/blog/latest");

        assert!(html.contains(NOT_FOUND_HEADING.title));
        assert!(html.contains(NOT_FOUND_MESSAGE));
        assert!(html.contains("/blog/latest"));
    }
}

use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{
    Route,
    components::{
        footer::Footer,
        ui::{Button, Container, Glyph, Icon},
    },
};
use site::{
    config::SiteConfig,
    nav::{CONTACT_ANCHOR, MobileMenu, NAV_ITEMS, NavEntry, is_active, page_title},
};

#[derive(Clone, PartialEq, Props)]
struct NavItemLinkProps {
    entry: NavEntry,
    // set for the mobile copy of the menu, which closes itself on click
    #[props(default)]
    menu: Option<Signal<MobileMenu>>,
}

// collapses the mobile copy of the menu once one of its links is followed
fn dismiss(menu: Option<Signal<MobileMenu>>) {
    if let Some(mut menu) = menu {
        menu.write().close();
    }
}

#[component]
fn NavItemLink(props: NavItemLinkProps) -> Element {
    let entry = props.entry;
    let menu = props.menu;

    let current_path: Route = use_route();
    rsx! {
        Link {
            class: if is_active(&current_path.to_string(), entry.path) { "nav-link active" } else { "nav-link" },
            to: Route::from_nav(&entry),
            onclick: move |_| dismiss(menu),
            "{entry.label}"
        }
    }
}

#[component]
fn Header() -> Element {
    let config = use_context::<Arc<SiteConfig>>();
    let current_path: Route = use_route();

    // an ancestor may own the menu state, otherwise the header keeps its own
    let mut menu = use_hook(|| {
        try_consume_context::<Signal<MobileMenu>>()
            .unwrap_or_else(|| Signal::new(MobileMenu::default()))
    });
    let menu_open = menu().is_open();

    // any route change collapses the menu, including back/forward traversal
    use_effect(use_reactive(&current_path, move |_| {
        if menu.peek().is_open() {
            menu.write().close();
        }
    }));

    rsx! {
        header { class: "app-header",
            Container { class: "nav-container",
                Link { to: Route::Home {}, class: "brand",
                    div { class: "brand-mark" }
                    div {
                        p { class: "brand-name", "{config.company.short_name}" }
                        p { class: "brand-suffix", "{config.company.brand_suffix}" }
                    }
                }

                nav { class: "nav-links",
                    for entry in NAV_ITEMS.iter() {
                        NavItemLink { key: "{entry.path}", entry: *entry }
                    }
                }

                div { class: "nav-actions",
                    a { class: "nav-cta", href: "#{CONTACT_ANCHOR}",
                        Button { class: "btn-round", "Free Consultation" }
                    }
                    button {
                        class: "menu-toggle",
                        r#type: "button",
                        "aria-label": "Toggle navigation",
                        "aria-expanded": "{menu_open}",
                        onclick: move |_| menu.write().toggle(),
                        Icon { glyph: Glyph::Menu }
                    }
                }
            }

            if menu_open {
                div { class: "mobile-nav",
                    Container { class: "mobile-nav-grid",
                        for entry in NAV_ITEMS.iter() {
                            NavItemLink { key: "{entry.path}", entry: *entry, menu: menu }
                        }
                    }
                }
            }
        }
    }
}

// persistent layout around every routed page
#[component]
pub fn Shell() -> Element {
    let config = use_context::<Arc<SiteConfig>>();
    let current_path: Route = use_route();
    let title = page_title(&current_path.to_string(), &config.company.name);

    rsx! {
        document::Title { "{title}" }
        div { class: "site",
            Header {}
            Outlet::<Route> {}
            Footer {}
        }
    }
}

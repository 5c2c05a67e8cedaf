#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

use site::{config::read_config, nav::NavEntry};

mod common;

mod components;
use components::navigation::Shell;

mod home;
use home::Home;

mod company;
use company::{AnnualReturn, Company, Csr};

mod services;
use services::{CustomDesign, DesignBuild, Offers, Products};

mod portfolio;
use portfolio::{Gallery, Projects};

mod contact;
use contact::{Careers, Contact, Faq, Refer};

mod sitemap;
use sitemap::{NotFound, Sitemap};

#[cfg(test)]
mod testing;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// one variant per entry in site::nav::NAV_ITEMS, in the same order, plus the catch-all
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/company")]
        Company {},
        #[route("/custom")]
        CustomDesign {},
        #[route("/design-build")]
        DesignBuild {},
        #[route("/products")]
        Products {},
        #[route("/offers")]
        Offers {},
        #[route("/projects")]
        Projects {},
        #[route("/gallery")]
        Gallery {},
        #[route("/contact")]
        Contact {},
        #[route("/faq")]
        Faq {},
        #[route("/careers")]
        Careers {},
        #[route("/refer")]
        Refer {},
        #[route("/csr")]
        Csr {},
        #[route("/annual-return")]
        AnnualReturn {},
        #[route("/sitemap")]
        Sitemap {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    pub fn from_nav(entry: &NavEntry) -> Self {
        entry.path.parse().unwrap_or_else(|_| Route::NotFound {
            segments: entry
                .path
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(str::to_owned)
                .collect(),
        })
    }
}

#[component]
pub fn App() -> Element {
    // the config is compiled in, so failing to parse it is a build defect rather than a
    // runtime condition
    use_context_provider(|| match read_config() {
        Ok(config) => config,
        Err(err) => panic!("{err:#}"),
    });

    rsx! {
        style { "{common::style::SITE_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{count_class, render_at};
    use site::{
        content::NOT_FOUND_HEADING,
        nav::{NAV_ITEMS, active_entry},
    };

    #[test]
    fn every_nav_entry_has_a_route() {
        for entry in NAV_ITEMS.iter() {
            let route = Route::from_nav(entry);

            assert!(
                !matches!(route, Route::NotFound { .. }),
                "{} has no route",
                entry.path
            );
            assert_eq!(route.to_string(), entry.path);
            assert_eq!(active_entry(&route.to_string()), Some(entry));
        }
    }

    #[test]
    fn routes_are_distinct() {
        let mut routes: Vec<String> = NAV_ITEMS
            .iter()
            .map(|entry| Route::from_nav(entry).to_string())
            .collect();
        routes.sort();
        routes.dedup();

        assert_eq!(routes.len(), NAV_ITEMS.len());
    }

    #[test]
    fn nav_order_matches_route_order() {
        let expected = vec![
            Route::Home {},
            Route::Company {},
            Route::CustomDesign {},
            Route::DesignBuild {},
            Route::Products {},
            Route::Offers {},
            Route::Projects {},
            Route::Gallery {},
            Route::Contact {},
            Route::Faq {},
            Route::Careers {},
            Route::Refer {},
            Route::Csr {},
            Route::AnnualReturn {},
            Route::Sitemap {},
        ];
        let routes: Vec<Route> = NAV_ITEMS.iter().map(Route::from_nav).collect();

        assert_eq!(routes, expected);
    }

    #[test]
    fn unknown_paths_fall_through() {
        let route = Route::from_nav(&NavEntry {
            path: "/blog/latest",
            label: "Blog",
        });

        assert_eq!(
            route,
            Route::NotFound {
                segments: vec!["blog".to_owned(), "latest".to_owned()]
            }
        );
        assert_eq!(active_entry(&route.to_string()), None);
    }

    #[test]
    fn every_route_renders_one_page_with_one_active_entry() {
        for entry in NAV_ITEMS.iter() {
            let html = render_at(entry.path);

            assert_eq!(count_class(&html, "nav-link active"), 1, "{}", entry.path);
            assert_eq!(html.matches("<main").count(), 1, "{}", entry.path);
            assert!(!html.contains(NOT_FOUND_HEADING.title), "{}", entry.path);
        }
    }

    #[test]
    fn unknown_paths_render_not_found() {
        let html = render_at("/nope");

        assert!(html.contains(NOT_FOUND_HEADING.title));
        assert!(html.contains("Back to Home"));
        assert_eq!(count_class(&html, "nav-link active"), 0);
        assert_eq!(html.matches("<main").count(), 1);
    }
}

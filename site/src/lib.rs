// shared site model
//
// everything the webapp renders that is not markup lives here: the navigation table, the
// literal page copy, the form layouts, and the business details read from site.toml.  none
// of it depends on dioxus, so the behavior is testable without a renderer
pub mod config;
pub mod content;
pub mod form;
pub mod nav;

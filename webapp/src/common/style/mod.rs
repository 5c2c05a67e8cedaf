use constcat::concat;

mod components;
mod layout;
mod pages;
mod variables;

pub use components::BASE_COMPONENTS;
pub use layout::LAYOUT_STYLES;
pub use pages::PAGE_STYLES;
pub use variables::CSS_VARIABLES;

// one stylesheet for the whole site, injected once by App
pub const SITE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-body);
  background-color: var(--background);
  line-height: 1.5;
}

a {
  color: inherit;
  text-decoration: none;
}

ul {
  list-style: none;
}

.site {
  min-height: 100dvh;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    LAYOUT_STYLES,
    PAGE_STYLES
);

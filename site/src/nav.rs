// navigation model
//
// the same ordered table drives the desktop bar, the mobile menu, the footer quick links,
// and the sitemap page.  the router's path table must match it entry for entry

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NavEntry {
    pub path: &'static str,
    pub label: &'static str,
}

impl NavEntry {
    const fn new(path: &'static str, label: &'static str) -> Self {
        NavEntry { path, label }
    }
}

pub const HOME_PATH: &str = "/";

// in-page scroll target for the header call-to-action
pub const CONTACT_ANCHOR: &str = "contact";

pub const NAV_ITEMS: [NavEntry; 15] = [
    NavEntry::new("/", "Home"),
    NavEntry::new("/company", "Company"),
    NavEntry::new("/custom", "Custom Design"),
    NavEntry::new("/design-build", "Design Build"),
    NavEntry::new("/products", "Products"),
    NavEntry::new("/offers", "Offers"),
    NavEntry::new("/projects", "Projects"),
    NavEntry::new("/gallery", "Gallery"),
    NavEntry::new("/contact", "Contact"),
    NavEntry::new("/faq", "FAQ"),
    NavEntry::new("/careers", "Careers"),
    NavEntry::new("/refer", "Refer a Friend"),
    NavEntry::new("/csr", "CSR"),
    NavEntry::new("/annual-return", "Annual Return"),
    NavEntry::new("/sitemap", "Sitemap"),
];

const QUICK_LINK_COUNT: usize = 7;

/// The leading slice of the nav table shown in the footer.
pub fn quick_links() -> &'static [NavEntry] {
    &NAV_ITEMS[..QUICK_LINK_COUNT]
}

/// Canonical form of a location: no query, no fragment, no trailing slash, and `/` for the
/// empty path.  Entries in [`NAV_ITEMS`] are already canonical.
pub fn normalize_path(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    let path = location[..end].trim_end_matches('/');

    if path.is_empty() { HOME_PATH } else { path }
}

/// Exact match after normalization, so `/` never claims `/company`.
pub fn is_active(current_path: &str, entry_path: &str) -> bool {
    normalize_path(current_path) == entry_path
}

pub fn active_entry(current_path: &str) -> Option<&'static NavEntry> {
    NAV_ITEMS
        .iter()
        .find(|entry| is_active(current_path, entry.path))
}

/// Browser title for a location, falling back to a not-found title for unknown paths.
pub fn page_title(current_path: &str, site_name: &str) -> String {
    match active_entry(current_path) {
        Some(entry) if entry.path == HOME_PATH => site_name.to_owned(),
        Some(entry) => format!("{} | {site_name}", entry.label),
        None => format!("Page not found | {site_name}"),
    }
}

// mobile menu state
//
// owned by the header; nothing else reads it
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

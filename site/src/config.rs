use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use toml;
use tracing::{Level, debug, instrument};

// site configuration
//
// the business details that appear in more than one place (header brand, footer, contact
// page, document titles) are kept out of the page copy so they can be edited in one file
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SiteConfig {
    pub company: CompanyConfig,
    pub contact: ContactConfig,

    #[serde(default)]
    pub social: Vec<SocialLink>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CompanyConfig {
    // full legal name, used in titles and the footer
    pub name: String,

    // the header brand is split over two lines
    pub short_name: String,
    pub brand_suffix: String,

    pub tagline: String,
    pub origin: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ContactConfig {
    pub phone: String,
    pub email: String,
    pub cities: Vec<String>,
}

impl ContactConfig {
    pub fn locations(&self) -> String {
        self.cities.join(" • ")
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SocialLink {
    pub name: String,
    pub href: String,
}

// the bundled configuration, compiled into the binary since there is no server to read from
pub const SITE_CONFIG: &str = include_str!("../site.toml");

// as with the server configs elsewhere, the table lives under [config] so the file can grow
// other sections without touching this struct
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: SiteConfig,
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn parse_config(doc: &str) -> Result<Arc<SiteConfig>> {
    let data: TomlConfigFile = toml::from_str(doc).context("failed to parse site config")?;

    debug!(company = %data.config.company.name, "successfully parsed site config");
    Ok(Arc::new(data.config))
}

pub fn read_config() -> Result<Arc<SiteConfig>> {
    parse_config(SITE_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_parses() {
        let config = read_config().unwrap();

        assert_eq!(config.company.name, "Sharma Interior & Decoration");
        assert_eq!(config.company.short_name, "Sharma Interior");
        assert_eq!(config.contact.email, "hello@sharmainterior.com");
        assert_eq!(config.contact.locations(), "Jaipur • Mumbai • Delhi");

        let socials: Vec<&str> = config.social.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(socials, vec!["facebook", "instagram", "linkedin"]);
    }

    #[test]
    fn social_links_are_optional() {
        let doc = r#"
            [config.company]
            name = "Studio"
            short_name = "Studio"
            brand_suffix = ""
            tagline = "t"
            origin = "o"

            [config.contact]
            phone = "1"
            email = "a@b.c"
            cities = []
        "#;

        let config = parse_config(doc).unwrap();
        assert!(config.social.is_empty());
        assert_eq!(config.contact.locations(), "");
    }

    #[test]
    fn missing_table_is_an_error() {
        let err = parse_config("[config.company]\nname = \"x\"\n").unwrap_err();
        assert!(err.to_string().contains("failed to parse site config"));
    }
}

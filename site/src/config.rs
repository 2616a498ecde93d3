use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::theme::ThemePreference;

// site configuration
//
// the webapp embeds its config file at build time; there is nowhere to read one from at
// runtime in the browser.  every field has a default so a partial file is accepted
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site_name: String,
    pub tagline: String,
    pub theme: ThemeConfig,
    pub contact: ContactConfig,
    pub notifications: NotificationConfig,
    pub nav: NavConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    // localStorage key, before the webapp's prefix is applied
    pub storage_key: String,
    pub default: ThemePreference,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ContactConfig {
    // simulated delivery latency
    pub submit_delay_ms: u32,
    pub email: String,
    pub location: String,
    pub response_time: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub limit: usize,
    pub duration_ms: u32,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct NavConfig {
    // long groups are cut to this many entries in the mobile drawer
    pub mobile_limit: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            site_name: String::from("Next.js + Supabase Framework"),
            tagline: String::from(
                "A comprehensive framework starter for building modern web applications.",
            ),
            theme: ThemeConfig::default(),
            contact: ContactConfig::default(),
            notifications: NotificationConfig::default(),
            nav: NavConfig::default(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            storage_key: String::from("theme"),
            default: ThemePreference::Light,
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        ContactConfig {
            submit_delay_ms: 1500,
            email: String::from("hello@framework.dev"),
            location: String::from("Global (Remote)"),
            response_time: String::from("Within 24-48 hours"),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        NotificationConfig {
            limit: 1,
            duration_ms: 5000,
        }
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        NavConfig { mobile_limit: 4 }
    }
}

impl ContactConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms.into())
    }
}

// the config table lives under [config] so the file can carry other tables later
#[derive(Debug, Default, Deserialize, Serialize)]
struct TomlConfigFile {
    #[serde(default)]
    config: SiteConfig,
}

pub fn read_config(doc: &str) -> Result<SiteConfig> {
    debug!("parsing site config");

    let data: TomlConfigFile = toml::from_str(doc)
        .map_err(|err| anyhow::Error::msg(format!("failed to parse site config: {err}")))?;

    Ok(data.config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.contact.submit_delay(), Duration::from_millis(1500));
        assert_eq!(config.theme.default, ThemePreference::Light);
        assert_eq!(config.theme.storage_key, "theme");
        assert_eq!(config.nav.mobile_limit, 4);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(read_config("").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let doc = r#"
            [config]
            site_name = "Starter"

            [config.theme]
            default = "system"

            [config.contact]
            submit_delay_ms = 250
        "#;

        let config = read_config(doc).unwrap();
        assert_eq!(config.site_name, "Starter");
        assert_eq!(config.theme.default, ThemePreference::System);
        assert_eq!(config.theme.storage_key, "theme");
        assert_eq!(config.contact.submit_delay(), Duration::from_millis(250));
        assert_eq!(config.contact.email, "hello@framework.dev");
        assert_eq!(config.notifications.limit, 1);
    }

    #[test]
    fn test_bad_document() {
        let doc = r#"
            [config.theme]
            default = "sepia"
        "#;
        assert!(read_config(doc).is_err());
    }

    #[test]
    fn test_shipped_config_parses() {
        let config = read_config(include_str!("../../webapp/site.toml")).unwrap();
        assert_eq!(config.contact.submit_delay(), Duration::from_millis(1500));
        assert_eq!(config.theme.default, ThemePreference::Light);
    }
}

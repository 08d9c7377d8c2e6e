//! # Site configuration: `site.toml`
//!
//! Selects the brand, the storage namespace and the timings of the public forms.
//!
//! ```toml
//! [site]
//! brand = "zenith"        # "zenith" or "pixel"
//! namespace = ""          # storage key prefix; empty = brand default
//!
//! [forms]
//! success_reset_secs = 3  # how long "Sent!" / "Subscribed!" stays up
//! contact_delay_ms = 1000 # simulated latency before a contact is stored
//! ```
//!
//! Every section and field has a default, so a missing or empty file is the
//! default configuration.

use serde::{Deserialize, Serialize};

use crate::seed::Brand;

/// Top-level configuration stored in `site.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub forms: FormsConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteSection {
    #[serde(default)]
    pub brand: Brand,
    /// Storage key prefix. Empty means [`Brand::default_namespace`].
    #[serde(default)]
    pub namespace: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormsConfig {
    #[serde(default = "default_success_reset_secs")]
    pub success_reset_secs: u32,
    #[serde(default = "default_contact_delay_ms")]
    pub contact_delay_ms: u32,
}

fn default_success_reset_secs() -> u32 {
    3
}

fn default_contact_delay_ms() -> u32 {
    1000
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            success_reset_secs: default_success_reset_secs(),
            contact_delay_ms: default_contact_delay_ms(),
        }
    }
}

impl SiteConfig {
    pub fn new(brand: Brand) -> Self {
        Self {
            site: SiteSection {
                brand,
                namespace: String::new(),
            },
            forms: FormsConfig::default(),
        }
    }

    /// Builder method to store under a custom namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.site.namespace = namespace.into();
        self
    }

    pub fn brand(&self) -> Brand {
        self.site.brand
    }

    /// The namespace storage keys are prefixed with.
    pub fn namespace(&self) -> &str {
        let ns = self.site.namespace.trim();
        if ns.is_empty() {
            self.site.brand.default_namespace()
        } else {
            ns
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "site.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Parse `s`, falling back to the default configuration when it is malformed.
    pub fn from_toml_or_default(s: &str) -> Self {
        Self::from_toml(s).unwrap_or_else(|e| {
            tracing::warn!("invalid {}: {e}; using defaults", Self::filename());
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = SiteConfig::from_toml("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.namespace(), "zenith");
        assert_eq!(config.forms.success_reset_secs, 3);
        assert_eq!(config.forms.contact_delay_ms, 1000);
    }

    #[test]
    fn test_parse_brand_and_namespace() {
        let config = SiteConfig::from_toml(
            r#"
            [site]
            brand = "pixel"

            [forms]
            contact_delay_ms = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.brand(), Brand::Pixel);
        assert_eq!(config.namespace(), "pixel");
        assert_eq!(config.forms.contact_delay_ms, 0);
        assert_eq!(config.forms.success_reset_secs, 3);

        let config = SiteConfig::new(Brand::Pixel).with_namespace("staging");
        assert_eq!(config.namespace(), "staging");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = SiteConfig::new(Brand::Pixel).with_namespace("demo");
        let text = config.to_toml().unwrap();
        assert_eq!(SiteConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_malformed_config_falls_back() {
        let config = SiteConfig::from_toml_or_default("[site]\nbrand = \"acme\"");
        assert_eq!(config, SiteConfig::default());
    }
}

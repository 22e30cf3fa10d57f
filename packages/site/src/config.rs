use serde::Deserialize;
use url::Url;

use folio_router::MetadataDefaults;

use crate::{SiteError, FALLBACK_DESCRIPTION, FALLBACK_TITLE, SITE_ORIGIN};

/// Site-wide settings. Every field has a default, so an empty TOML document is a valid config.
///
/// ```toml
/// origin = "https://www.stefanedelman.dev"
/// fallback-title = "Stefan Edelman | Software Engineer"
/// fallback-description = "..."
/// scroll-to-top = true
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct SiteConfig {
    /// Scheme and host canonical links are built from.
    pub origin: String,
    /// Title for routes without metadata.
    pub fallback_title: String,
    /// Description for routes without metadata.
    pub fallback_description: String,
    /// Reset the scroll position to the top after every navigation.
    pub scroll_to_top: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            origin: SITE_ORIGIN.to_string(),
            fallback_title: FALLBACK_TITLE.to_string(),
            fallback_description: FALLBACK_DESCRIPTION.to_string(),
            scroll_to_top: true,
        }
    }
}

impl SiteConfig {
    /// Read a config from TOML and check it.
    pub fn from_toml_str(source: &str) -> Result<Self, SiteError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// An origin must be a bare `http(s)` origin: no path, query or fragment.
    pub fn validate(&self) -> Result<(), SiteError> {
        let origin = Url::parse(&self.origin)
            .map_err(|err| SiteError::InvalidOrigin(format!("{}: {err}", self.origin)))?;
        let bare = matches!(origin.scheme(), "http" | "https")
            && origin.has_host()
            && origin.path() == "/"
            && origin.query().is_none()
            && origin.fragment().is_none();

        if !bare {
            return Err(SiteError::InvalidOrigin(self.origin.clone()));
        }
        Ok(())
    }

    /// The values the metadata guard falls back to.
    pub fn metadata_defaults(&self) -> MetadataDefaults {
        MetadataDefaults::new(
            self.origin.clone(),
            self.fallback_title.clone(),
            self.fallback_description.clone(),
        )
    }
}

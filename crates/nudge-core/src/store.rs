use std::fmt;

use serde::{Deserialize, Serialize};

use crate::decision::DecisionError;

/// Which storefront a deep link opens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StorePlatform {
    /// The App Store app on iOS and iPadOS.
    #[default]
    AppStore,
    MacAppStore,
    /// Plain web listing, for hosts without a store app.
    Web,
}

impl StorePlatform {
    #[must_use]
    pub fn scheme(self) -> &'static str {
        match self {
            Self::AppStore => "itms-apps",
            Self::MacAppStore => "macappstore",
            Self::Web => "https",
        }
    }

    #[must_use]
    pub fn host(self) -> &'static str {
        match self {
            Self::AppStore => "itunes.apple.com",
            Self::MacAppStore | Self::Web => "apps.apple.com",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "app-store" => Some(Self::AppStore),
            "mac-app-store" => Some(Self::MacAppStore),
            "web" => Some(Self::Web),
            _ => None,
        }
    }
}

/// A validated store deep link, `<scheme>://<host>/app/id<appStoreID>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLink {
    app_store_id: String,
    uri: String,
}

impl StoreLink {
    /// Build the deep link for `app_store_id` on `platform`.
    ///
    /// # Errors
    /// Returns [`DecisionError::InvalidDestination`] when the ID is empty or
    /// contains anything other than ASCII digits.
    pub fn new(platform: StorePlatform, app_store_id: &str) -> Result<Self, DecisionError> {
        if app_store_id.is_empty() || !app_store_id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DecisionError::InvalidDestination {
                app_store_id: app_store_id.to_string(),
            });
        }

        let uri = format!(
            "{}://{}/app/id{app_store_id}",
            platform.scheme(),
            platform.host()
        );
        Ok(Self {
            app_store_id: app_store_id.to_string(),
            uri,
        })
    }

    #[must_use]
    pub fn app_store_id(&self) -> &str {
        &self.app_store_id
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.uri
    }
}

impl fmt::Display for StoreLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}

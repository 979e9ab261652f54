use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Server-supplied update configuration.
///
/// Field names on the wire match the remote config keys exactly
/// (`latestVersion`, `appStoreID`, `alertCTA`, ...). The value is immutable
/// once built; the `with_*` methods consume and return a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConfig {
    latest_version: String,
    is_mandatory: bool,
    #[serde(default = "default_true")]
    is_non_mandatory_alert_visible: bool,
    #[serde(rename = "appStoreID")]
    app_store_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    update_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alert_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alert_message: Option<String>,
    #[serde(default, rename = "alertCTA", skip_serializing_if = "Option::is_none")]
    alert_cta: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alert_cancel: Option<String>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Missing required config key: {key}")]
    MissingKey { key: &'static str },
    #[error("Invalid boolean for {key}: {value:?}")]
    InvalidBool { key: &'static str, value: String },
}

const KEY_LATEST_VERSION: &str = "latestVersion";
const KEY_IS_MANDATORY: &str = "isMandatory";
const KEY_ALERT_VISIBLE: &str = "isNonMandatoryAlertVisible";
const KEY_APP_STORE_ID: &str = "appStoreID";

impl UpdateConfig {
    #[must_use]
    pub fn new(
        latest_version: impl Into<String>,
        is_mandatory: bool,
        app_store_id: impl Into<String>,
    ) -> Self {
        Self {
            latest_version: latest_version.into(),
            is_mandatory,
            is_non_mandatory_alert_visible: true,
            app_store_id: app_store_id.into(),
            update_message: None,
            alert_title: None,
            alert_message: None,
            alert_cta: None,
            alert_cancel: None,
        }
    }

    /// Build a config from string-typed remote config values.
    ///
    /// Remote key-value stores deliver every value as a string, so booleans
    /// are accepted as `true`/`false`/`1`/`0` (case-insensitive). Unknown keys
    /// are ignored.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when a required key is missing or a boolean
    /// value cannot be interpreted.
    pub fn from_remote_values(values: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str| {
            values
                .get(key)
                .cloned()
                .ok_or(ConfigError::MissingKey { key })
        };
        let optional = |key: &str| values.get(key).cloned();

        let is_mandatory = parse_remote_bool(KEY_IS_MANDATORY, &required(KEY_IS_MANDATORY)?)?;
        let is_non_mandatory_alert_visible = match values.get(KEY_ALERT_VISIBLE) {
            Some(value) => parse_remote_bool(KEY_ALERT_VISIBLE, value)?,
            None => true,
        };

        Ok(Self {
            latest_version: required(KEY_LATEST_VERSION)?,
            is_mandatory,
            is_non_mandatory_alert_visible,
            app_store_id: required(KEY_APP_STORE_ID)?,
            update_message: optional("updateMessage"),
            alert_title: optional("alertTitle"),
            alert_message: optional("alertMessage"),
            alert_cta: optional("alertCTA"),
            alert_cancel: optional("alertCancel"),
        })
    }

    #[must_use]
    pub fn with_alert_visible(mut self, visible: bool) -> Self {
        self.is_non_mandatory_alert_visible = visible;
        self
    }

    #[must_use]
    pub fn with_update_message(mut self, message: impl Into<String>) -> Self {
        self.update_message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_alert_title(mut self, title: impl Into<String>) -> Self {
        self.alert_title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_alert_message(mut self, message: impl Into<String>) -> Self {
        self.alert_message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_alert_cta(mut self, label: impl Into<String>) -> Self {
        self.alert_cta = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_alert_cancel(mut self, label: impl Into<String>) -> Self {
        self.alert_cancel = Some(label.into());
        self
    }

    #[must_use]
    pub fn latest_version(&self) -> &str {
        &self.latest_version
    }

    #[must_use]
    pub fn is_mandatory(&self) -> bool {
        self.is_mandatory
    }

    #[must_use]
    pub fn is_non_mandatory_alert_visible(&self) -> bool {
        self.is_non_mandatory_alert_visible
    }

    #[must_use]
    pub fn app_store_id(&self) -> &str {
        &self.app_store_id
    }

    #[must_use]
    pub fn update_message(&self) -> Option<&str> {
        self.update_message.as_deref()
    }

    #[must_use]
    pub fn alert_title(&self) -> Option<&str> {
        self.alert_title.as_deref()
    }

    #[must_use]
    pub fn alert_message(&self) -> Option<&str> {
        self.alert_message.as_deref()
    }

    #[must_use]
    pub fn alert_cta(&self) -> Option<&str> {
        self.alert_cta.as_deref()
    }

    #[must_use]
    pub fn alert_cancel(&self) -> Option<&str> {
        self.alert_cancel.as_deref()
    }
}

fn parse_remote_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn deserializes_exact_wire_names() {
        let json = r#"{
            "latestVersion": "2.1.0",
            "isMandatory": false,
            "isNonMandatoryAlertVisible": false,
            "appStoreID": "123",
            "updateMessage": "fallback",
            "alertTitle": "New version",
            "alertMessage": "Please update",
            "alertCTA": "Update",
            "alertCancel": "Not now"
        }"#;
        let config: UpdateConfig = serde_json::from_str(json).expect("config should parse");

        assert_eq!(config.latest_version(), "2.1.0");
        assert!(!config.is_mandatory());
        assert!(!config.is_non_mandatory_alert_visible());
        assert_eq!(config.app_store_id(), "123");
        assert_eq!(config.update_message(), Some("fallback"));
        assert_eq!(config.alert_title(), Some("New version"));
        assert_eq!(config.alert_message(), Some("Please update"));
        assert_eq!(config.alert_cta(), Some("Update"));
        assert_eq!(config.alert_cancel(), Some("Not now"));
    }

    #[test]
    fn alert_visibility_defaults_to_true() {
        let json = r#"{"latestVersion": "2.0", "isMandatory": true, "appStoreID": "1"}"#;
        let config: UpdateConfig = serde_json::from_str(json).expect("config should parse");

        assert!(config.is_non_mandatory_alert_visible());
        assert_eq!(config.alert_title(), None);
        assert_eq!(config, UpdateConfig::new("2.0", true, "1"));
    }

    #[test]
    fn missing_required_field_fails_to_deserialize() {
        let json = r#"{"latestVersion": "2.0", "appStoreID": "1"}"#;
        assert!(serde_json::from_str::<UpdateConfig>(json).is_err());
    }

    #[test]
    fn serializes_only_present_optional_fields() {
        let config = UpdateConfig::new("3.0", false, "9").with_alert_cta("Go");
        let value = serde_json::to_value(&config).expect("config should serialize");

        assert_eq!(value["alertCTA"], "Go");
        assert_eq!(value["appStoreID"], "9");
        assert!(value.get("alertTitle").is_none());
    }

    #[test]
    fn remote_values_parse_string_booleans() {
        let config = UpdateConfig::from_remote_values(&remote(&[
            ("latestVersion", "4.2"),
            ("isMandatory", "TRUE"),
            ("isNonMandatoryAlertVisible", "0"),
            ("appStoreID", "77"),
            ("alertCancel", "Skip"),
            ("unrelatedKey", "ignored"),
        ]))
        .expect("remote values should parse");

        assert!(config.is_mandatory());
        assert!(!config.is_non_mandatory_alert_visible());
        assert_eq!(config.alert_cancel(), Some("Skip"));
        assert_eq!(config.alert_cta(), None);
    }

    #[test]
    fn remote_values_report_missing_and_invalid_keys() {
        let missing = UpdateConfig::from_remote_values(&remote(&[
            ("latestVersion", "4.2"),
            ("isMandatory", "false"),
        ]));
        assert_eq!(
            missing,
            Err(ConfigError::MissingKey {
                key: "appStoreID"
            })
        );

        let invalid = UpdateConfig::from_remote_values(&remote(&[
            ("latestVersion", "4.2"),
            ("isMandatory", "yes please"),
            ("appStoreID", "77"),
        ]));
        assert!(matches!(
            invalid,
            Err(ConfigError::InvalidBool {
                key: "isMandatory",
                ..
            })
        ));
    }
}

use log::{debug, warn};
use thiserror::Error;

use crate::config::UpdateConfig;
use crate::store::{StoreLink, StorePlatform};
use crate::version::{AppVersion, VersionParseError};

pub const DEFAULT_CANCEL_LABEL: &str = "Later";

const MANDATORY_TITLE: &str = "Update Required";
const MANDATORY_CTA: &str = "Update Now";
const OPTIONAL_TITLE: &str = "Update Available";
const OPTIONAL_MESSAGE: &str = "A new version of this app is available.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecisionError {
    #[error("Malformed {role} version")]
    MalformedVersion {
        role: VersionRole,
        #[source]
        source: VersionParseError,
    },

    #[error("Cannot build a store link for app store ID {app_store_id:?}")]
    InvalidDestination { app_store_id: String },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionRole {
    #[error("current")]
    Current,
    #[error("latest")]
    Latest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Optional,
    Mandatory,
}

/// Display strings and destination resolved for one prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPayload {
    pub title: String,
    pub message: String,
    /// Primary action label. On the optional path this is the configured
    /// label as-is, which may be empty.
    pub cta_label: String,
    /// Dismiss label; always `None` for mandatory prompts.
    pub cancel_label: Option<String>,
    pub destination: StoreLink,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    None,
    OptionalAlert(PromptPayload),
    MandatoryBlock(PromptPayload),
}

impl UpdateAction {
    #[must_use]
    pub fn kind(&self) -> Option<PromptKind> {
        match self {
            Self::None => None,
            Self::OptionalAlert(_) => Some(PromptKind::Optional),
            Self::MandatoryBlock(_) => Some(PromptKind::Mandatory),
        }
    }

    #[must_use]
    pub fn payload(&self) -> Option<&PromptPayload> {
        match self {
            Self::None => None,
            Self::OptionalAlert(payload) | Self::MandatoryBlock(payload) => Some(payload),
        }
    }
}

/// Decide which prompt, if any, the App Store build should show.
///
/// # Errors
/// Returns [`DecisionError::MalformedVersion`] when either version string is
/// not a dotted numeric version.
pub fn decide(config: &UpdateConfig, current_version: &str) -> Result<UpdateAction, DecisionError> {
    decide_for_platform(config, current_version, StorePlatform::default())
}

/// Decide which prompt, if any, to show, linking to `platform`'s storefront.
///
/// An unusable `appStoreID` resolves to [`UpdateAction::None`] instead of an
/// error: a prompt without a destination is never shown.
///
/// # Errors
/// Returns [`DecisionError::MalformedVersion`] when either version string is
/// not a dotted numeric version.
pub fn decide_for_platform(
    config: &UpdateConfig,
    current_version: &str,
    platform: StorePlatform,
) -> Result<UpdateAction, DecisionError> {
    let current = parse_version(current_version, VersionRole::Current)?;
    let latest = parse_version(config.latest_version(), VersionRole::Latest)?;

    if current >= latest {
        debug!("App is up to date ({current} >= {latest})");
        return Ok(UpdateAction::None);
    }

    let destination = match StoreLink::new(platform, config.app_store_id()) {
        Ok(link) => link,
        Err(e) => {
            warn!("Update {latest} available but not actionable: {e}");
            return Ok(UpdateAction::None);
        }
    };

    let message_override = config.alert_message().or(config.update_message());

    if config.is_mandatory() {
        debug!("Mandatory update required: {current} -> {latest}");
        return Ok(UpdateAction::MandatoryBlock(PromptPayload {
            title: config.alert_title().unwrap_or(MANDATORY_TITLE).to_string(),
            message: message_override.map_or_else(
                || mandatory_message(config.latest_version()),
                str::to_string,
            ),
            cta_label: config.alert_cta().unwrap_or(MANDATORY_CTA).to_string(),
            cancel_label: None,
            destination,
        }));
    }

    if !config.is_non_mandatory_alert_visible() {
        debug!("Optional update {latest} available, alert suppressed by config");
        return Ok(UpdateAction::None);
    }

    debug!("Optional update available: {current} -> {latest}");
    Ok(UpdateAction::OptionalAlert(PromptPayload {
        title: config.alert_title().unwrap_or(OPTIONAL_TITLE).to_string(),
        message: message_override.unwrap_or(OPTIONAL_MESSAGE).to_string(),
        cta_label: config.alert_cta().unwrap_or_default().to_string(),
        cancel_label: Some(
            config
                .alert_cancel()
                .unwrap_or(DEFAULT_CANCEL_LABEL)
                .to_string(),
        ),
        destination,
    }))
}

/// Policy boundary around [`decide_for_platform`]: any decision error is
/// logged and treated as "no update to show".
#[must_use]
pub fn resolve(
    config: &UpdateConfig,
    current_version: &str,
    platform: StorePlatform,
) -> UpdateAction {
    decide_for_platform(config, current_version, platform).unwrap_or_else(|e| {
        warn!("Skipping update prompt: {e}");
        UpdateAction::None
    })
}

fn mandatory_message(latest_version: &str) -> String {
    format!("Version {latest_version} is required to keep using this app. Please update to continue.")
}

fn parse_version(input: &str, role: VersionRole) -> Result<AppVersion, DecisionError> {
    input
        .parse()
        .map_err(|source| DecisionError::MalformedVersion { role, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    const APP_ID: &str = "1234567890";

    fn payload_of(action: &UpdateAction) -> &PromptPayload {
        action.payload().expect("action should carry a payload")
    }

    #[test]
    fn equal_versions_never_prompt() {
        for mandatory in [true, false] {
            let config = UpdateConfig::new("2.0.0", mandatory, APP_ID);
            assert_eq!(decide(&config, "2.0.0"), Ok(UpdateAction::None));
            assert_eq!(decide(&config, "2"), Ok(UpdateAction::None));
        }
    }

    #[test]
    fn newer_current_version_does_not_prompt() {
        let config = UpdateConfig::new("2.0.0", true, APP_ID);
        assert_eq!(decide(&config, "2.0.1"), Ok(UpdateAction::None));
    }

    #[test]
    fn mandatory_update_uses_defaults() {
        let config = UpdateConfig::new("2.0.0", true, APP_ID);
        let action = decide(&config, "1.0.0").expect("decision should succeed");

        assert_eq!(action.kind(), Some(PromptKind::Mandatory));
        let payload = payload_of(&action);
        assert_eq!(payload.title, "Update Required");
        assert_eq!(
            payload.message,
            "Version 2.0.0 is required to keep using this app. Please update to continue."
        );
        assert_eq!(payload.cta_label, "Update Now");
        assert_eq!(payload.cancel_label, None);
        assert_eq!(
            payload.destination.as_str(),
            "itms-apps://itunes.apple.com/app/id1234567890"
        );
    }

    #[test]
    fn mandatory_update_ignores_alert_visibility_and_cancel() {
        let config = UpdateConfig::new("2.0.0", true, APP_ID)
            .with_alert_visible(false)
            .with_alert_cancel("Skip");
        let action = decide(&config, "1.0.0").expect("decision should succeed");

        assert_eq!(action.kind(), Some(PromptKind::Mandatory));
        assert_eq!(payload_of(&action).cancel_label, None);
    }

    #[test]
    fn alert_message_takes_precedence_over_update_message() {
        let config = UpdateConfig::new("2.0.0", true, APP_ID)
            .with_update_message("fallback body")
            .with_alert_message("override body")
            .with_alert_title("Heads up")
            .with_alert_cta("Get it");
        let action = decide(&config, "1.0.0").expect("decision should succeed");

        let payload = payload_of(&action);
        assert_eq!(payload.title, "Heads up");
        assert_eq!(payload.message, "override body");
        assert_eq!(payload.cta_label, "Get it");

        let config = UpdateConfig::new("2.0.0", false, APP_ID).with_update_message("fallback body");
        let action = decide(&config, "1.0.0").expect("decision should succeed");
        assert_eq!(payload_of(&action).message, "fallback body");
    }

    #[test]
    fn optional_update_uses_defaults_and_empty_cta() {
        let config = UpdateConfig::new("1.2", false, APP_ID);
        let action = decide(&config, "1.1.9").expect("decision should succeed");

        assert_eq!(action.kind(), Some(PromptKind::Optional));
        let payload = payload_of(&action);
        assert_eq!(payload.title, "Update Available");
        assert_eq!(payload.message, "A new version of this app is available.");
        assert_eq!(payload.cta_label, "");
        assert_eq!(payload.cancel_label.as_deref(), Some("Later"));
    }

    #[test]
    fn optional_update_respects_configured_labels() {
        let config = UpdateConfig::new("1.2", false, APP_ID)
            .with_alert_cta("Update")
            .with_alert_cancel("Not now");
        let action = decide(&config, "1.1").expect("decision should succeed");

        let payload = payload_of(&action);
        assert_eq!(payload.cta_label, "Update");
        assert_eq!(payload.cancel_label.as_deref(), Some("Not now"));
    }

    #[test]
    fn hidden_optional_alert_resolves_to_none() {
        let config = UpdateConfig::new("2.0.0", false, APP_ID).with_alert_visible(false);
        assert_eq!(decide(&config, "1.0.0"), Ok(UpdateAction::None));
    }

    #[test]
    fn unusable_store_id_resolves_to_none() {
        for mandatory in [true, false] {
            let config = UpdateConfig::new("2.0.0", mandatory, "")
                .with_alert_title("Update")
                .with_alert_cta("Go");
            assert_eq!(decide(&config, "1.0.0"), Ok(UpdateAction::None));
        }
        let config = UpdateConfig::new("2.0.0", true, "not-an-id");
        assert_eq!(decide(&config, "1.0.0"), Ok(UpdateAction::None));
    }

    #[test]
    fn malformed_versions_are_reported() {
        let config = UpdateConfig::new("2.x.0", true, APP_ID);
        let err = decide(&config, "1.0.0").expect_err("latest version should be rejected");
        assert!(matches!(
            err,
            DecisionError::MalformedVersion {
                role: VersionRole::Latest,
                ..
            }
        ));

        let config = UpdateConfig::new("2.0.0", true, APP_ID);
        let err = decide(&config, "").expect_err("empty current version should be rejected");
        assert!(matches!(
            err,
            DecisionError::MalformedVersion {
                role: VersionRole::Current,
                source: VersionParseError::Empty,
            }
        ));
    }

    #[test]
    fn resolve_degrades_errors_to_none() {
        let config = UpdateConfig::new("2.x.0", true, APP_ID);
        assert_eq!(
            resolve(&config, "1.0.0", StorePlatform::AppStore),
            UpdateAction::None
        );
    }

    #[test]
    fn platform_selects_deep_link_scheme() {
        let config = UpdateConfig::new("2.0.0", false, APP_ID);
        let action = resolve(&config, "1.0.0", StorePlatform::MacAppStore);
        assert_eq!(
            payload_of(&action).destination.as_str(),
            "macappstore://apps.apple.com/app/id1234567890"
        );
    }
}

//! Update decision logic for Nudge.
//!
//! This crate holds everything that is independent of a UI host:
//! - Dotted numeric version parsing and comparison.
//! - The server-supplied update configuration model.
//! - Store deep-link construction.
//! - The decision engine that turns a configuration and the running version
//!   into an [`UpdateAction`].

mod config;
mod decision;
mod store;
mod version;

/// Update configuration model and its parse errors.
pub use config::{ConfigError, UpdateConfig};
/// Decision engine entry points and the resolved action/payload types.
pub use decision::{
    DEFAULT_CANCEL_LABEL, DecisionError, PromptKind, PromptPayload, UpdateAction, VersionRole,
    decide, decide_for_platform, resolve,
};
/// Store deep-link model.
pub use store::{StoreLink, StorePlatform};
/// Version model and numeric comparison.
pub use version::{AppVersion, VersionParseError, compare_versions};

//! Presentation of update prompts.
//!
//! The [`PresentationCoordinator`] turns an [`nudge_core::UpdateAction`] into
//! exactly one request against a [`PresentationHost`]. [`ui_channel`] pairs a
//! host living on the UI-owning thread with a [`UiHandle`] that any thread
//! can use to run an update check.

mod coordinator;
mod dispatch;
mod error;
mod host;
mod view;

#[cfg(test)]
mod test_support;

pub use coordinator::{PresentationCoordinator, PresentationOutcome, PresentationState};
pub use dispatch::{CheckOutcome, UiContext, UiHandle, UiLoop, ui_channel};
pub use error::HostError;
pub use host::{
    ButtonAction, DialogRequest, FullScreenRequest, ModalOptions, PresentationHost, PromptButton,
    perform_action,
};
pub use view::{DefaultMandatoryView, MandatoryScreen, ViewFactory};

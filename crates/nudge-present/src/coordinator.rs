use log::{debug, info, warn};
use nudge_core::{PromptKind, PromptPayload, UpdateAction};

use crate::host::{
    ButtonAction, DialogRequest, FullScreenRequest, ModalOptions, PresentationHost, PromptButton,
};
use crate::view::{DefaultMandatoryView, MandatoryScreen, ViewFactory};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PresentationState {
    #[default]
    Idle,
    Deciding,
    Presenting,
}

/// Result of one [`PresentationCoordinator::present`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationOutcome {
    /// The action was `None`; the host was not touched.
    Skipped,
    /// The host accepted the presentation request.
    Requested(PromptKind),
    /// The host had no surface to attach to.
    NoSurface(PromptKind),
    /// The host refused the request. The error has been logged.
    HostFailed(PromptKind),
}

/// Drives at most one host presentation per update check.
///
/// Holds no memory of earlier prompts; every call starts from `Idle` and
/// ends in `Idle`.
#[derive(Debug, Default)]
pub struct PresentationCoordinator {
    state: PresentationState,
}

impl PresentationCoordinator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> PresentationState {
        self.state
    }

    /// Present `action` through `host`. Must run on the UI-owning thread.
    ///
    /// `custom_mandatory_view` replaces the stock blocking screen. Host
    /// failures are logged and reported in the outcome, never returned as
    /// errors.
    pub fn present<H>(
        &mut self,
        action: UpdateAction,
        host: &mut H,
        custom_mandatory_view: Option<&dyn ViewFactory<H::View>>,
    ) -> PresentationOutcome
    where
        H: PresentationHost + ?Sized,
        H::View: From<MandatoryScreen>,
    {
        match custom_mandatory_view {
            Some(factory) => self.present_with(action, host, factory),
            None => self.present_with(action, host, &DefaultMandatoryView),
        }
    }

    /// Like [`present`](Self::present), but always builds the blocking
    /// screen with `mandatory_view`.
    ///
    /// Hosts whose views cannot be built from a [`MandatoryScreen`] use this.
    pub fn present_with<H, F>(
        &mut self,
        action: UpdateAction,
        host: &mut H,
        mandatory_view: &F,
    ) -> PresentationOutcome
    where
        H: PresentationHost + ?Sized,
        F: ViewFactory<H::View> + ?Sized,
    {
        self.transition(PresentationState::Deciding);

        let outcome = match action {
            UpdateAction::None => PresentationOutcome::Skipped,
            UpdateAction::MandatoryBlock(payload) => {
                self.present_mandatory(&payload, host, mandatory_view)
            }
            UpdateAction::OptionalAlert(payload) => self.present_optional(payload, host),
        };

        self.transition(PresentationState::Idle);
        outcome
    }

    fn present_mandatory<H, F>(
        &mut self,
        payload: &PromptPayload,
        host: &mut H,
        factory: &F,
    ) -> PresentationOutcome
    where
        H: PresentationHost + ?Sized,
        F: ViewFactory<H::View> + ?Sized,
    {
        let kind = PromptKind::Mandatory;
        let Some(surface) = host.topmost_surface() else {
            debug!("No active surface for mandatory update prompt");
            return PresentationOutcome::NoSurface(kind);
        };

        self.transition(PresentationState::Presenting);
        let request = FullScreenRequest {
            view: factory.make_view(payload),
            options: ModalOptions::BLOCKING,
            primary: PromptButton {
                label: payload.cta_label.clone(),
                action: ButtonAction::OpenStore(payload.destination.clone()),
            },
        };

        match host.present_full_screen(&surface, request) {
            Ok(()) => {
                info!("Presented mandatory update screen");
                PresentationOutcome::Requested(kind)
            }
            Err(e) => {
                warn!("Failed to present mandatory update screen: {e}");
                PresentationOutcome::HostFailed(kind)
            }
        }
    }

    fn present_optional<H>(&mut self, payload: PromptPayload, host: &mut H) -> PresentationOutcome
    where
        H: PresentationHost + ?Sized,
    {
        let kind = PromptKind::Optional;
        let Some(surface) = host.topmost_surface() else {
            debug!("No active surface for optional update alert");
            return PresentationOutcome::NoSurface(kind);
        };

        self.transition(PresentationState::Presenting);
        let request = DialogRequest {
            title: payload.title,
            message: payload.message,
            primary: PromptButton {
                label: payload.cta_label,
                action: ButtonAction::OpenStore(payload.destination),
            },
            secondary: PromptButton {
                label: payload.cancel_label.unwrap_or_default(),
                action: ButtonAction::Dismiss,
            },
        };

        match host.present_dialog(&surface, request) {
            Ok(()) => {
                info!("Presented optional update alert");
                PresentationOutcome::Requested(kind)
            }
            Err(e) => {
                warn!("Failed to present optional update alert: {e}");
                PresentationOutcome::HostFailed(kind)
            }
        }
    }

    fn transition(&mut self, next: PresentationState) {
        debug_assert!(
            matches!(
                (self.state, next),
                (PresentationState::Idle, PresentationState::Deciding)
                    | (
                        PresentationState::Deciding,
                        PresentationState::Idle | PresentationState::Presenting
                    )
                    | (PresentationState::Presenting, PresentationState::Idle)
            ),
            "invalid presentation transition {:?} -> {next:?}",
            self.state
        );
        debug!("Presentation state {:?} -> {next:?}", self.state);
        self.state = next;
    }
}

use nudge_core::StoreLink;

use crate::error::HostError;

/// What a prompt button does when the user picks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonAction {
    /// Open the store listing. Never closes a blocking surface.
    OpenStore(StoreLink),
    /// Close the dialog with no other effect.
    Dismiss,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptButton {
    pub label: String,
    pub action: ButtonAction,
}

/// How a modal surface may be closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalOptions {
    pub full_screen: bool,
    pub swipe_to_dismiss: bool,
    pub tap_outside_to_dismiss: bool,
}

impl ModalOptions {
    /// Full screen with every ambient dismissal gesture disabled.
    pub const BLOCKING: Self = Self {
        full_screen: true,
        swipe_to_dismiss: false,
        tap_outside_to_dismiss: false,
    };

    #[must_use]
    pub fn is_dismissible(self) -> bool {
        self.swipe_to_dismiss || self.tap_outside_to_dismiss
    }
}

/// A blocking surface showing `view`, whose only action is `primary`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullScreenRequest<V> {
    pub view: V,
    pub options: ModalOptions,
    pub primary: PromptButton,
}

/// A two-action dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogRequest {
    pub title: String,
    pub message: String,
    pub primary: PromptButton,
    pub secondary: PromptButton,
}

/// Platform UI the coordinator presents through.
///
/// Implementations live on the UI-owning thread and are never shared; the
/// coordinator calls them from that thread only.
pub trait PresentationHost {
    /// Handle to the topmost active screen/window prompts attach to.
    type Surface;
    /// Renderable content for the blocking surface.
    type View;

    fn topmost_surface(&self) -> Option<Self::Surface>;

    /// Request a blocking surface on top of `surface`.
    ///
    /// # Errors
    /// Returns [`HostError`] when the platform refuses the presentation.
    fn present_full_screen(
        &mut self,
        surface: &Self::Surface,
        request: FullScreenRequest<Self::View>,
    ) -> Result<(), HostError>;

    /// Request a two-action dialog on top of `surface`.
    ///
    /// # Errors
    /// Returns [`HostError`] when the platform refuses the presentation.
    fn present_dialog(
        &mut self,
        surface: &Self::Surface,
        request: DialogRequest,
    ) -> Result<(), HostError>;

    /// Open an external URI, such as a store deep link.
    ///
    /// # Errors
    /// Returns [`HostError`] when no handler accepts the URI.
    fn open_uri(&mut self, uri: &str) -> Result<(), HostError>;
}

/// Carry out a button's action against `host`.
///
/// Hosts call this when the user picks a button. Closing dialogs stays with
/// the host; this never closes anything.
///
/// # Errors
/// Returns [`HostError`] when opening the store link fails.
pub fn perform_action<H>(host: &mut H, action: &ButtonAction) -> Result<(), HostError>
where
    H: PresentationHost + ?Sized,
{
    match action {
        ButtonAction::OpenStore(link) => {
            log::info!("Opening store link {link}");
            host.open_uri(link.as_str())
        }
        ButtonAction::Dismiss => {
            log::debug!("Update prompt dismissed");
            Ok(())
        }
    }
}

use nudge_core::PromptPayload;

/// Builds the content of the blocking update surface.
///
/// Hosts that want their own mandatory screen pass a factory to the
/// coordinator; closures `Fn(&PromptPayload) -> V` work as factories.
pub trait ViewFactory<V>: Send + Sync {
    fn make_view(&self, payload: &PromptPayload) -> V;
}

impl<V, F> ViewFactory<V> for F
where
    F: Fn(&PromptPayload) -> V + Send + Sync,
{
    fn make_view(&self, payload: &PromptPayload) -> V {
        self(payload)
    }
}

/// Content of the stock blocking screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MandatoryScreen {
    pub title: String,
    pub message: String,
    pub cta_label: String,
}

impl From<&PromptPayload> for MandatoryScreen {
    fn from(payload: &PromptPayload) -> Self {
        Self {
            title: payload.title.clone(),
            message: payload.message.clone(),
            cta_label: payload.cta_label.clone(),
        }
    }
}

/// Factory used when the caller supplies no custom mandatory view.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMandatoryView;

impl<V> ViewFactory<V> for DefaultMandatoryView
where
    V: From<MandatoryScreen>,
{
    fn make_view(&self, payload: &PromptPayload) -> V {
        V::from(MandatoryScreen::from(payload))
    }
}

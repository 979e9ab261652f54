use std::thread::ThreadId;

use crate::error::HostError;
use crate::host::{DialogRequest, FullScreenRequest, PresentationHost};
use crate::view::MandatoryScreen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TestView {
    Stock(MandatoryScreen),
    Custom(String),
}

impl From<MandatoryScreen> for TestView {
    fn from(screen: MandatoryScreen) -> Self {
        Self::Stock(screen)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HostCall {
    FullScreen(FullScreenRequest<TestView>),
    Dialog(DialogRequest),
    OpenUri(String),
}

#[derive(Debug, Default)]
pub(crate) struct RecordingHost {
    pub calls: Vec<HostCall>,
    /// Thread each presentation request arrived on.
    pub presented_on: Vec<ThreadId>,
    pub no_surface: bool,
    pub fail_present: bool,
    pub fail_open: bool,
}

impl PresentationHost for RecordingHost {
    type Surface = ();
    type View = TestView;

    fn topmost_surface(&self) -> Option<()> {
        (!self.no_surface).then_some(())
    }

    fn present_full_screen(
        &mut self,
        _surface: &(),
        request: FullScreenRequest<TestView>,
    ) -> Result<(), HostError> {
        if self.fail_present {
            return Err(HostError::present_failed("full screen", "window is closing"));
        }
        self.presented_on.push(std::thread::current().id());
        self.calls.push(HostCall::FullScreen(request));
        Ok(())
    }

    fn present_dialog(&mut self, _surface: &(), request: DialogRequest) -> Result<(), HostError> {
        if self.fail_present {
            return Err(HostError::present_failed("dialog", "window is closing"));
        }
        self.presented_on.push(std::thread::current().id());
        self.calls.push(HostCall::Dialog(request));
        Ok(())
    }

    fn open_uri(&mut self, uri: &str) -> Result<(), HostError> {
        if self.fail_open {
            return Err(HostError::open_failed_from(uri, "no handler registered"));
        }
        self.calls.push(HostCall::OpenUri(uri.to_string()));
        Ok(())
    }
}

/// Host whose views have no conversion from [`MandatoryScreen`].
#[derive(Debug, Default)]
pub(crate) struct CustomViewHost {
    pub views: Vec<usize>,
}

impl PresentationHost for CustomViewHost {
    type Surface = ();
    type View = usize;

    fn topmost_surface(&self) -> Option<()> {
        Some(())
    }

    fn present_full_screen(
        &mut self,
        _surface: &(),
        request: FullScreenRequest<usize>,
    ) -> Result<(), HostError> {
        self.views.push(request.view);
        Ok(())
    }

    fn present_dialog(&mut self, _surface: &(), _request: DialogRequest) -> Result<(), HostError> {
        Ok(())
    }

    fn open_uri(&mut self, _uri: &str) -> Result<(), HostError> {
        Ok(())
    }
}

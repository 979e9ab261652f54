//! Hand-off between the thread that runs an update check and the thread that
//! owns the UI.
//!
//! [`ui_channel`] splits a host into a [`UiLoop`], which stays on the UI
//! thread and owns the host, and a cloneable [`UiHandle`] that other threads
//! use to marshal work onto it.

use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use log::debug;
use nudge_core::{StorePlatform, UpdateAction, UpdateConfig};

use crate::coordinator::{PresentationCoordinator, PresentationOutcome};
use crate::host::PresentationHost;
use crate::view::{DefaultMandatoryView, MandatoryScreen, ViewFactory};

type Job<H> = Box<dyn FnOnce(&mut UiContext<H>) + Send>;

/// State owned by the UI thread.
pub struct UiContext<H> {
    host: H,
    coordinator: PresentationCoordinator,
}

impl<H> UiContext<H> {
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn coordinator(&self) -> &PresentationCoordinator {
        &self.coordinator
    }
}

/// Result of [`UiHandle::check`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Presentation(PresentationOutcome),
    /// The UI loop shut down before it could present.
    UiUnavailable,
}

pub fn ui_channel<H>(host: H) -> (UiHandle<H>, UiLoop<H>) {
    let (jobs_tx, jobs_rx) = crossbeam_channel::unbounded();
    let handle = UiHandle { jobs: jobs_tx };
    let ui_loop = UiLoop {
        context: UiContext {
            host,
            coordinator: PresentationCoordinator::new(),
        },
        jobs: jobs_rx,
    };
    (handle, ui_loop)
}

pub struct UiLoop<H> {
    context: UiContext<H>,
    jobs: Receiver<Job<H>>,
}

impl<H> UiLoop<H> {
    /// Run jobs until every [`UiHandle`] is dropped, then give the host back.
    pub fn run(mut self) -> H {
        while let Ok(job) = self.jobs.recv() {
            job(&mut self.context);
        }
        debug!("UI loop finished, all handles dropped");
        self.context.host
    }

    /// Run whatever jobs are queued right now without blocking.
    ///
    /// Returns the number of jobs run. Meant for hosts with their own event
    /// loop that poll once per frame.
    pub fn run_pending(&mut self) -> usize {
        let mut ran = 0;
        loop {
            match self.jobs.try_recv() {
                Ok(job) => {
                    job(&mut self.context);
                    ran += 1;
                }
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => return ran,
            }
        }
    }

    pub fn context(&self) -> &UiContext<H> {
        &self.context
    }
}

pub struct UiHandle<H> {
    jobs: Sender<Job<H>>,
}

impl<H> Clone for UiHandle<H> {
    fn clone(&self) -> Self {
        Self {
            jobs: self.jobs.clone(),
        }
    }
}

impl<H: 'static> UiHandle<H> {
    /// Run `f` on the UI thread and wait for its result.
    ///
    /// Returns `None` when the UI loop is gone or dropped the job unrun.
    pub async fn run_on_ui<R, F>(&self, f: F) -> Option<R>
    where
        R: Send + 'static,
        F: FnOnce(&mut UiContext<H>) -> R + Send + 'static,
    {
        let (reply_tx, reply_rx) = tokio::sync::oneshot::channel();
        let job: Job<H> = Box::new(move |context: &mut UiContext<H>| {
            let _ = reply_tx.send(f(context));
        });

        if self.jobs.send(job).is_err() {
            debug!("UI loop is gone; dropping job");
            return None;
        }
        reply_rx.await.ok()
    }
}

impl<H> UiHandle<H>
where
    H: PresentationHost + 'static,
    H::View: 'static,
{
    /// Run one update check, building any blocking screen with
    /// `mandatory_view`.
    ///
    /// The decision is computed on the caller's thread; only presentation is
    /// marshaled to the UI thread. Concurrent calls are not deduplicated.
    pub async fn check_with(
        &self,
        config: &UpdateConfig,
        current_version: &str,
        platform: StorePlatform,
        mandatory_view: Arc<dyn ViewFactory<H::View>>,
    ) -> CheckOutcome {
        let action = nudge_core::resolve(config, current_version, platform);
        if action == UpdateAction::None {
            return CheckOutcome::Presentation(PresentationOutcome::Skipped);
        }

        self.run_on_ui(move |context| {
            context
                .coordinator
                .present_with(action, &mut context.host, mandatory_view.as_ref())
        })
        .await
        .map_or(CheckOutcome::UiUnavailable, CheckOutcome::Presentation)
    }
}

impl<H> UiHandle<H>
where
    H: PresentationHost + 'static,
    H::View: From<MandatoryScreen> + 'static,
{
    /// Run one update check, falling back to the stock blocking screen when
    /// no custom view is given.
    pub async fn check(
        &self,
        config: &UpdateConfig,
        current_version: &str,
        platform: StorePlatform,
        custom_mandatory_view: Option<Arc<dyn ViewFactory<H::View>>>,
    ) -> CheckOutcome {
        let mandatory_view: Arc<dyn ViewFactory<H::View>> = match custom_mandatory_view {
            Some(factory) => factory,
            None => Arc::new(DefaultMandatoryView),
        };
        self.check_with(config, current_version, platform, mandatory_view)
            .await
    }
}

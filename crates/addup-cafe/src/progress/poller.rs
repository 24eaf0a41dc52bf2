use super::{ClassroomSnapshot, ProgressView};
use crate::identity::Identity;
use crate::model::ClassroomId;
use crate::roster::RosterError;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// What the poller has published so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PollState {
    /// Last good snapshot, possibly with local edits applied on top.
    pub snapshot: Option<ClassroomSnapshot>,
    /// Error from the most recent poll, cleared by the next good one.
    pub error: Option<RosterError>,
    pub polls: u64,
}

/// Background task re-reading one classroom on a fixed interval.
///
/// The first poll runs immediately. [`cancel`](Self::cancel) stops the timer
/// and waits for the task; dropping the poller aborts it. A snapshot still being
/// read when the stop arrives is thrown away, never published.
pub struct ProgressPoller {
    state: Arc<watch::Sender<PollState>>,
    refresh: mpsc::Sender<()>,
    stop: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl ProgressPoller {
    /// Must be called inside a Tokio runtime.
    pub fn start(
        view: ProgressView,
        teacher: Identity,
        classroom: ClassroomId,
        interval: Duration,
    ) -> Self {
        let (state, _) = watch::channel(PollState::default());
        let state = Arc::new(state);
        let (refresh, refresh_rx) = mpsc::channel(1);
        let (stop, stop_rx) = oneshot::channel();

        info!(%classroom, ?interval, "Starting progress poller");
        let handle = tokio::spawn(poll_loop(
            view,
            teacher,
            classroom,
            interval,
            state.clone(),
            refresh_rx,
            stop_rx,
        ));

        Self {
            state,
            refresh,
            stop: Some(stop),
            handle: Some(handle),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<PollState> {
        self.state.subscribe()
    }

    pub fn latest(&self) -> PollState {
        self.state.borrow().clone()
    }

    /// Asks for a poll now instead of at the next tick. Requests made while one
    /// is already pending are folded into it.
    pub fn refresh(&self) {
        if self.refresh.try_send(()).is_err() {
            debug!("Refresh already pending");
        }
    }

    /// Edits the published snapshot in place, e.g. after removing a student.
    /// The next poll replaces it with what the store says.
    pub fn apply_local(&self, edit: impl FnOnce(&mut ClassroomSnapshot)) {
        self.state.send_modify(|state| {
            if let Some(snapshot) = state.snapshot.as_mut() {
                edit(snapshot);
            }
        });
    }

    pub async fn cancel(mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                warn!(error = %e, "Progress poller task failed");
            }
        }
        info!("Progress poller cancelled");
    }
}

impl Drop for ProgressPoller {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

async fn poll_loop(
    view: ProgressView,
    teacher: Identity,
    classroom: ClassroomId,
    interval: Duration,
    state: Arc<watch::Sender<PollState>>,
    mut refresh: mpsc::Receiver<()>,
    mut stop: oneshot::Receiver<()>,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = &mut stop => break,
            _ = ticker.tick() => {}
            Some(()) = refresh.recv() => {
                debug!(%classroom, "Refresh requested");
                ticker.reset();
            }
        }

        let result = tokio::select! {
            biased;
            _ = &mut stop => {
                debug!(%classroom, "Discarding in-flight snapshot");
                break;
            }
            result = view.snapshot(&teacher, &classroom) => result,
        };

        state.send_modify(|state| {
            state.polls += 1;
            match result {
                Ok(snapshot) => {
                    state.snapshot = Some(snapshot);
                    state.error = None;
                }
                Err(e) => {
                    warn!(%classroom, error = %e, "Progress poll failed");
                    state.error = Some(e);
                }
            }
        });
    }

    debug!(%classroom, "Progress poller stopped");
}

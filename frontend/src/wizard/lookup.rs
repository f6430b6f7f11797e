//! Lookup coordination for the original-work step.
//!
//! [`start_lookup`] returns a [`LookupSubscription`], a one-directional stream of
//! [`LookupStatus`] events, and a [`LookupTask`] that performs the request.
//! `Loading` is queued before the task runs, followed by exactly one of
//! `Ready` or `Error`. Cancelling the subscription aborts the task, so nothing
//! is emitted after teardown.

use std::pin::Pin;
use std::task::{Context, Poll};

use coverreg_shared::OriginalWork;
use futures::channel::mpsc::{self, UnboundedReceiver};
use futures::future::{self, AbortHandle, Abortable, LocalBoxFuture};
use futures::{FutureExt, Stream, StreamExt};

use crate::services::LookupService;

// =============================================================================
// Status
// =============================================================================

/// Why the original work could not be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupFailure {
    /// No recording id to look up; no request was made.
    MissingRecordingId,
    /// The request failed or the service answered with an error.
    Request(String),
}

impl LookupFailure {
    /// Message shown in the original-work panel.
    pub fn message(&self) -> &'static str {
        match self {
            LookupFailure::MissingRecordingId => "ISRC mangler. Gå tilbage og indtast koden igen.",
            LookupFailure::Request(_) => {
                "Kunne ikke hente oplysninger om originalværket. Forsøg venligst igen."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupStatus {
    Loading,
    Ready(OriginalWork),
    Error(LookupFailure),
}

impl LookupStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LookupStatus::Loading)
    }
}

// =============================================================================
// Subscription
// =============================================================================

/// Future performing one lookup request. Completes early once aborted.
pub type LookupTask = LocalBoxFuture<'static, ()>;

/// Cancels a running lookup without holding its event stream.
#[derive(Debug, Clone)]
pub struct LookupHandle {
    generation: u64,
    abort: AbortHandle,
}

impl LookupHandle {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cancel(&self) {
        self.abort.abort();
    }
}

/// Event stream of one lookup. Dropping it aborts the request.
#[derive(Debug)]
pub struct LookupSubscription {
    generation: u64,
    events: UnboundedReceiver<LookupStatus>,
    abort: AbortHandle,
}

impl LookupSubscription {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn handle(&self) -> LookupHandle {
        LookupHandle {
            generation: self.generation,
            abort: self.abort.clone(),
        }
    }

    /// Abort the request. Events already queued can still be drained.
    pub fn cancel(&mut self) {
        self.abort.abort();
        self.events.close();
    }
}

impl Stream for LookupSubscription {
    type Item = LookupStatus;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.events.poll_next_unpin(cx)
    }
}

impl Drop for LookupSubscription {
    fn drop(&mut self) {
        self.abort.abort();
    }
}

// =============================================================================
// Start
// =============================================================================

/// Start looking up the original work for `recording_id`.
///
/// An empty id yields a single `Error(MissingRecordingId)` and no request.
pub fn start_lookup<L: LookupService>(
    service: &L,
    recording_id: &str,
    generation: u64,
) -> (LookupSubscription, LookupTask) {
    let (sender, events) = mpsc::unbounded();
    let (abort, registration) = AbortHandle::new_pair();
    let subscription = LookupSubscription {
        generation,
        events,
        abort,
    };

    if recording_id.is_empty() {
        log::warn!("⚠️  Lookup #{} skipped: no recording id", generation);
        let _ = sender.unbounded_send(LookupStatus::Error(LookupFailure::MissingRecordingId));
        return (subscription, future::ready(()).boxed_local());
    }

    let _ = sender.unbounded_send(LookupStatus::Loading);

    let service = service.clone();
    let recording_id = recording_id.to_string();
    let request = async move {
        log::info!("🔍 Lookup #{}: {}", generation, recording_id);
        let status = match service.lookup(&recording_id).await {
            Ok(work) => {
                log::info!("✅ Lookup #{} found \"{}\"", generation, work.title);
                LookupStatus::Ready(work)
            }
            Err(e) => {
                log::error!("❌ Lookup #{} failed: {}", generation, e);
                LookupStatus::Error(LookupFailure::Request(e.to_string()))
            }
        };
        let _ = sender.unbounded_send(status);
    };

    let task = Abortable::new(request, registration).map(|_| ()).boxed_local();
    (subscription, task)
}

//! Event loop: feeds browser events to the [`Site`], runs deferred work and
//! delivers transition completions from the rendering layer.

use std::time::Instant;

use log::{debug, info, trace};
use sitedom::{Event, TransitionTracker};
use thiserror::Error;
use tokio::sync::mpsc;

use crate::site::Site;

/// Runtime error
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RuntimeError {
    /// The runtime has stopped and no longer accepts events.
    #[error("runtime stopped, event dropped")]
    Closed,
}

/// Sender half of the event channel.
///
/// Clone-able. Dropping every sender lets the runtime finish.
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: mpsc::UnboundedSender<Event>,
}

impl EventSender {
    pub fn send(&self, event: Event) -> Result<(), RuntimeError> {
        self.tx.send(event).map_err(|_| RuntimeError::Closed)
    }
}

enum Step {
    Event(Option<Event>),
    Tick,
}

/// Single-task runtime owning the site and the transition tracker.
#[derive(Debug)]
pub struct Runtime {
    site: Site,
    tracker: TransitionTracker,
    events: mpsc::UnboundedReceiver<Event>,
}

impl Runtime {
    /// Create a runtime and the sender used to feed it.
    pub fn new(site: Site) -> (Self, EventSender) {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut tracker = TransitionTracker::new();
        tracker.set_reduced_motion(site.config().reduced_motion);
        let runtime = Self {
            site,
            tracker,
            events: rx,
        };
        (runtime, EventSender { tx })
    }

    pub fn site(&self) -> &Site {
        &self.site
    }

    pub fn tracker(&self) -> &TransitionTracker {
        &self.tracker
    }

    /// Handle one event and everything it makes due by now.
    pub fn process(&mut self, event: Event) {
        trace!("event: {event:?}");
        self.site.dispatch(&event);
        self.settle(Instant::now());
    }

    /// Run deferred tasks and deliver finished transitions until nothing
    /// more is due at `now`.
    pub fn settle(&mut self, now: Instant) {
        loop {
            let ran = self.site.run_deferred();
            let done = self.tracker.update(self.site.document_mut(), now);
            if ran == 0 && done.is_empty() {
                break;
            }
            for event in done {
                self.site.dispatch(&event);
            }
        }
    }

    /// Drive the site until every sender is dropped and all running
    /// transitions have finished. Returns the site in its final state.
    pub async fn run(mut self) -> Site {
        info!("runtime started");
        self.settle(Instant::now());

        loop {
            let deadline = self.tracker.next_deadline();
            let step = tokio::select! {
                event = self.events.recv() => Step::Event(event),
                _ = sleep_until(deadline) => Step::Tick,
            };
            match step {
                Step::Event(Some(event)) => self.process(event),
                Step::Event(None) => break,
                Step::Tick => self.settle(Instant::now()),
            }
        }

        debug!("event channel closed, waiting for running transitions");
        while let Some(deadline) = self.tracker.next_deadline() {
            sleep_until(Some(deadline)).await;
            self.settle(Instant::now());
        }

        info!("runtime stopped");
        self.site
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => std::future::pending().await,
    }
}

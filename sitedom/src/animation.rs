//! Stand-in for the browser's rendering layer: tracks CSS height transitions
//! started by inline height writes and reports when they end.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use log::trace;

use crate::document::{Document, NodeId};
use crate::event::Event;

/// A single running height transition.
#[derive(Debug, Clone, Copy)]
struct ActiveTransition {
    start: Instant,
    duration: Duration,
}

impl ActiveTransition {
    fn deadline(&self) -> Instant {
        self.start + self.duration
    }
}

/// Watches a [`Document`] for pixel height writes on elements that declare a
/// height transition, and emits [`Event::TransitionEnd`] once each finishes.
///
/// Every write restarts the transition for that node, so a reversal mid-way
/// produces a single completion. Writes to `auto` never animate.
#[derive(Debug, Default)]
pub struct TransitionTracker {
    active: HashMap<NodeId, ActiveTransition>,
    /// Nodes whose transition completed instantly (reduced motion).
    finished: Vec<NodeId>,
    /// Reduced motion flag - when true, transitions complete instantly.
    reduced_motion: bool,
}

impl TransitionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable reduced motion.
    /// When enabled, all transitions complete on the next update.
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
    }

    /// Returns true if any transition is currently running.
    pub fn has_active_transitions(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn is_animating(&self, node: NodeId) -> bool {
        self.active.contains_key(&node)
    }

    /// Earliest instant at which a running transition ends.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.active.values().map(ActiveTransition::deadline).min()
    }

    /// Pick up new height writes and start their transitions.
    pub fn observe(&mut self, doc: &mut Document, now: Instant) {
        for node in doc.take_height_writes() {
            let Some(duration) = doc.transitions(node).height else {
                continue;
            };

            if self.reduced_motion || duration.is_zero() {
                self.active.remove(&node);
                if !self.finished.contains(&node) {
                    self.finished.push(node);
                }
                continue;
            }

            trace!("{node}: height transition started ({duration:?})");
            self.active.insert(node, ActiveTransition { start: now, duration });
        }
    }

    /// Observe new writes, then return completion events for every transition
    /// that has ended by `now`, in document order.
    pub fn update(&mut self, doc: &mut Document, now: Instant) -> Vec<Event> {
        self.observe(doc, now);

        let mut done: Vec<NodeId> = std::mem::take(&mut self.finished);
        self.active.retain(|node, transition| {
            if transition.deadline() <= now {
                done.push(*node);
                false
            } else {
                true
            }
        });
        done.sort();
        done.dedup();
        done.into_iter().map(Event::transition_end).collect()
    }

    /// Observe new writes and end every transition immediately.
    pub fn finish_all(&mut self, doc: &mut Document) -> Vec<Event> {
        self.observe(doc, Instant::now());

        let mut done: Vec<NodeId> = std::mem::take(&mut self.finished);
        done.extend(self.active.drain().map(|(node, _)| node));
        done.sort();
        done.dedup();
        done.into_iter().map(Event::transition_end).collect()
    }
}

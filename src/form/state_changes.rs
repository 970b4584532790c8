//! Explicit observer for control state changes.
//!
//! Form fields subscribe to learn that something they render (value, focus,
//! disabled, placeholder) changed. Emission carries no payload; subscribers
//! read the control again.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut()>;

#[derive(Default)]
pub struct StateChanges {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    emitted: u64,
    completed: bool,
}

impl fmt::Debug for StateChanges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateChanges")
            .field("subscribers", &self.subscribers.len())
            .field("emitted", &self.emitted)
            .field("completed", &self.completed)
            .finish()
    }
}

impl StateChanges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber. Subscribing after completion is accepted but
    /// the subscriber is never called.
    pub fn subscribe(&mut self, subscriber: impl FnMut() + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        if !self.completed {
            self.subscribers.push((id, Box::new(subscriber)));
        }
        id
    }

    /// Returns whether the subscription existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        before != self.subscribers.len()
    }

    pub fn next(&mut self) {
        if self.completed {
            return;
        }
        self.emitted += 1;
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber();
        }
    }

    /// Drop all subscribers; later `next` calls are ignored.
    pub fn complete(&mut self) {
        self.completed = true;
        self.subscribers.clear();
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Number of emissions so far.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

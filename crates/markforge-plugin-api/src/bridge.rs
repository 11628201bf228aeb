//! Typed publish/subscribe over the closed application event set.
//!
//! The bridge is the reference implementation of the host's `on`/`off`/
//! `emit` surface. Dispatch keys off [`EventKind`], handlers for one kind
//! run in registration order, and a failing handler never blocks the rest
//! of the fan-out: its error goes to the log and the publisher sees
//! nothing.
//!
//! Fan-out works on a snapshot of the subscriber list taken when `publish`
//! starts, so a handler that subscribes during delivery does not receive
//! the in-flight event, and handlers may call back into the bridge without
//! deadlocking.

use markforge_sdk_core::{AppEvent, Disposer, EventKind};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::error;

/// An event handler. Errors are isolated per handler and reported through
/// the log, never to the publisher.
pub type EventHandler = Arc<dyn Fn(&AppEvent) -> anyhow::Result<()> + Send + Sync>;

/// Identity of one subscription, used for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscriber {
    id: SubscriptionId,
    handler: EventHandler,
}

type SubscriberMap = HashMap<EventKind, Vec<Subscriber>>;

/// Typed publish/subscribe over [`AppEvent`].
pub struct EventBridge {
    subscribers: Arc<Mutex<SubscriberMap>>,
    next_id: AtomicU64,
}

impl EventBridge {
    /// Create an empty bridge.
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(Mutex::new(HashMap::new())),
            next_id: AtomicU64::new(1),
        }
    }

    /// Subscribe a handler to one event kind.
    ///
    /// Handlers for the same kind are delivered in registration order. The
    /// returned disposer removes exactly this subscription.
    pub fn subscribe<F>(&self, kind: EventKind, handler: F) -> Disposer
    where
        F: Fn(&AppEvent) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.subscribe_handler(kind, Arc::new(handler)).1
    }

    /// Subscribe an already-shared handler; returns the subscription
    /// identity alongside the disposer.
    pub fn subscribe_handler(
        &self,
        kind: EventKind,
        handler: EventHandler,
    ) -> (SubscriptionId, Disposer) {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));

        lock(&self.subscribers)
            .entry(kind)
            .or_default()
            .push(Subscriber { id, handler });

        let subscribers = Arc::clone(&self.subscribers);
        let disposer = Disposer::new(move || {
            remove_subscription(&subscribers, kind, id);
        });

        (id, disposer)
    }

    /// Remove a subscription by identity. No-op if it is gone already.
    pub fn unsubscribe(&self, kind: EventKind, id: SubscriptionId) {
        remove_subscription(&self.subscribers, kind, id);
    }

    /// Synchronously deliver an event to all current subscribers of its
    /// kind, in registration order.
    pub fn publish(&self, event: &AppEvent) {
        let kind = event.kind();

        // Snapshot under the lock, deliver outside it: handlers may
        // subscribe or unsubscribe mid-publish, and new subscribers must
        // not see the in-flight event.
        let snapshot: Vec<(SubscriptionId, EventHandler)> = {
            let map = lock(&self.subscribers);
            map.get(&kind)
                .map(|subs| {
                    subs.iter()
                        .map(|s| (s.id, Arc::clone(&s.handler)))
                        .collect()
                })
                .unwrap_or_default()
        };

        for (id, handler) in snapshot {
            if let Err(e) = handler(event) {
                error!(kind = %kind, subscription = id.0, error = %e, "Event handler failed");
            }
        }
    }

    /// Number of live subscriptions for a kind.
    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        lock(&self.subscribers)
            .get(&kind)
            .map_or(0, |subs| subs.len())
    }
}

impl Default for EventBridge {
    fn default() -> Self {
        Self::new()
    }
}

fn remove_subscription(subscribers: &Mutex<SubscriberMap>, kind: EventKind, id: SubscriptionId) {
    if let Some(subs) = lock(subscribers).get_mut(&kind) {
        subs.retain(|s| s.id != id);
    }
}

// Disposal and fan-out must survive a poisoned lock; the map itself stays
// consistent because every critical section is a single insert/retain/read.
fn lock(subscribers: &Mutex<SubscriberMap>) -> MutexGuard<'_, SubscriberMap> {
    subscribers.lock().unwrap_or_else(PoisonError::into_inner)
}

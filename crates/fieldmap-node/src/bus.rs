//! In-process topic bus.
//!
//! Publishing is fire-and-forget: each current subscriber of the topic
//! receives its own copy of the payload at most once, and a subscriber
//! whose queue is full misses the message. Closing the bus drops every
//! sender, so subscribers drain what is queued and then stop.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crossbeam_channel::{Receiver, Sender, TrySendError};

use crate::error::BusError;

#[derive(Debug, Default)]
struct BusState {
    topics: HashMap<String, Vec<Sender<String>>>,
    closed: bool,
}

/// A cloneable handle to a shared topic bus.
#[derive(Debug, Clone)]
pub struct Bus {
    state: Arc<Mutex<BusState>>,
    queue_depth: usize,
}

impl Bus {
    /// Create a bus whose subscriber queues hold `queue_depth` messages.
    pub fn new(queue_depth: usize) -> Self {
        Self {
            state: Arc::new(Mutex::new(BusState::default())),
            queue_depth: queue_depth.max(1),
        }
    }

    fn lock(&self) -> MutexGuard<'_, BusState> {
        // The state stays consistent even if a holder panicked.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a new subscriber on `topic`.
    pub fn subscribe(&self, topic: &str) -> Result<Subscription, BusError> {
        let mut state = self.lock();
        if state.closed {
            return Err(BusError::Closed);
        }
        let (tx, rx) = crossbeam_channel::bounded(self.queue_depth);
        state.topics.entry(topic.to_string()).or_default().push(tx);
        log::debug!("subscribed to {topic:?}");
        Ok(Subscription {
            topic: topic.to_string(),
            rx,
        })
    }

    /// Hand `payload` to every current subscriber of `topic`.
    ///
    /// Returns how many subscribers accepted it. Having no subscribers is
    /// not an error.
    pub fn publish(&self, topic: &str, payload: &str) -> Result<usize, BusError> {
        let mut state = self.lock();
        if state.closed {
            return Err(BusError::Closed);
        }
        let Some(senders) = state.topics.get_mut(topic) else {
            return Ok(0);
        };
        let mut delivered = 0;
        senders.retain(|tx| match tx.try_send(payload.to_string()) {
            Ok(()) => {
                delivered += 1;
                true
            }
            Err(TrySendError::Full(_)) => {
                log::warn!("subscriber queue on {topic:?} is full, message dropped");
                true
            }
            Err(TrySendError::Disconnected(_)) => false,
        });
        Ok(delivered)
    }

    /// Number of live subscribers on `topic`.
    pub fn subscriber_count(&self, topic: &str) -> usize {
        self.lock().topics.get(topic).map_or(0, Vec::len)
    }

    /// Close the bus. Queued messages stay readable.
    pub fn close(&self) {
        let mut state = self.lock();
        state.closed = true;
        state.topics.clear();
    }
}

/// Receiving end of one subscription.
#[derive(Debug)]
pub struct Subscription {
    topic: String,
    rx: Receiver<String>,
}

impl Subscription {
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Block for the next payload. `None` once the bus is closed and the
    /// queue is drained.
    pub fn recv(&self) -> Option<String> {
        self.rx.recv().ok()
    }

    /// Next payload if one is queued.
    pub fn try_recv(&self) -> Option<String> {
        self.rx.try_recv().ok()
    }

    /// Run `handler` on each payload until the bus closes. Returns the
    /// number of payloads handled.
    pub fn spin(self, mut handler: impl FnMut(String)) -> usize {
        let mut handled = 0;
        while let Some(payload) = self.recv() {
            handler(payload);
            handled += 1;
        }
        handled
    }
}

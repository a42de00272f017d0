use serde::Serialize;
use tokio::sync::broadcast;
use tracing::warn;

use crate::dto::sse::ServerEvent;

/// Fan-out point for session notifications consumed by SSE clients.
pub struct EventHub {
    sender: broadcast::Sender<ServerEvent>,
}

impl EventHub {
    /// Create a hub buffering up to `capacity` events per lagging subscriber.
    pub fn new(capacity: usize) -> Self {
        let (sender, _receiver) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Register a subscriber for every event published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<ServerEvent> {
        self.sender.subscribe()
    }

    /// Number of connected subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Serialise `payload` and publish it under the `event` name.
    ///
    /// Having no subscriber is not an error; a payload that fails to
    /// serialise is logged and dropped.
    pub fn publish(&self, event: &str, payload: &impl Serialize) {
        match ServerEvent::json(Some(event.to_string()), payload) {
            Ok(message) => self.send(message),
            Err(err) => warn!(event, error = %err, "failed to serialize SSE payload"),
        }
    }

    /// Publish an already built event.
    pub fn send(&self, event: ServerEvent) {
        let _ = self.sender.send(event);
    }
}

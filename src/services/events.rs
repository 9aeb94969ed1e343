// Events
// Seam between state mutations and the host shell's event channel

use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde_json::Value;

/// Receives events destined for the frontend
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &str, payload: Value);
}

impl<T: EventSink + ?Sized> EventSink for Arc<T> {
    fn emit(&self, event: &str, payload: Value) {
        (**self).emit(event, payload);
    }
}

/// Sink that drops every event, for headless use
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn emit(&self, _event: &str, _payload: Value) {}
}

/// Sink that records events in memory, in arrival order
///
/// Useful to hosts that replay events to a late-attaching frontend, and to
/// tests that assert on notification counts.
#[derive(Default)]
pub struct CollectingEventSink {
    events: Mutex<Vec<(String, Value)>>,
}

impl CollectingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the events received so far, in order
    pub fn event_names(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// All recorded events with their payloads
    pub fn events(&self) -> Vec<(String, Value)> {
        self.events.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for CollectingEventSink {
    fn emit(&self, event: &str, payload: Value) {
        self.events.lock().unwrap().push((event.to_string(), payload));
    }
}

/// Serialize a payload and forward it to the sink
pub fn emit_event<T: Serialize>(sink: &dyn EventSink, event: &str, payload: &T) {
    if let Ok(value) = serde_json::to_value(payload) {
        sink.emit(event, value);
    }
}

//! Event Emitter - Snapshot delivery to the view layer
//!
//! Screens trả về `Event` sau mỗi poll/command; dashboard đẩy chúng qua
//! một `EventSink`. Không có global handle - sink được inject.

use parking_lot::Mutex;
use serde::Serialize;

/// Event names
pub mod names {
    pub const THREAT_FEED: &str = "threats:feed";
    pub const HOME_STATUS: &str = "home:status";
    pub const ANALYTICS_SNAPSHOT: &str = "analytics:snapshot";
    pub const MITIGATION_DEPLOYMENT: &str = "mitigation:deployment";
    pub const CONFIG_CHANGED: &str = "config:changed";
    pub const CONFIG_SAVED: &str = "config:saved";
    pub const NAVIGATION_MOUNTED: &str = "navigation:mounted";
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub name: &'static str,
    pub payload: serde_json::Value,
}

impl Event {
    pub fn new<S: Serialize>(name: &'static str, payload: S) -> Self {
        let payload = serde_json::to_value(payload).unwrap_or_else(|e| {
            log::error!("Failed to serialize '{}' payload: {}", name, e);
            serde_json::Value::Null
        });
        Self { name, payload }
    }
}

pub trait EventSink: Send + Sync {
    fn emit(&self, event: &Event);

    fn emit_all(&self, events: &[Event]) {
        for event in events {
            self.emit(event);
        }
    }
}

/// Writes every event to the log; payloads only at debug level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&self, event: &Event) {
        log::info!("event: {}", event.name);
        log::debug!("[{}] {}", event.name, event.payload);
    }
}

/// Keeps every emitted event in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<Event>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.events.lock().iter().map(|e| e.name).collect()
    }

    pub fn count(&self, name: &str) -> usize {
        self.events.lock().iter().filter(|e| e.name == name).count()
    }

    pub fn last(&self, name: &str) -> Option<Event> {
        self.events.lock().iter().rev().find(|e| e.name == name).cloned()
    }

    /// Drain everything recorded so far
    pub fn take(&self) -> Vec<Event> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: &Event) {
        self.events.lock().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_payload_is_json() {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Status {
            threats_detected: u32,
        }

        let event = Event::new(names::HOME_STATUS, Status { threats_detected: 3 });
        assert_eq!(event.name, "home:status");
        assert_eq!(event.payload["threatsDetected"], 3);
    }

    #[test]
    fn test_recording_sink() {
        let sink = RecordingSink::new();
        sink.emit_all(&[
            Event::new(names::THREAT_FEED, 1),
            Event::new(names::HOME_STATUS, 2),
            Event::new(names::THREAT_FEED, 3),
        ]);

        assert_eq!(sink.names(), vec!["threats:feed", "home:status", "threats:feed"]);
        assert_eq!(sink.count(names::THREAT_FEED), 2);
        assert_eq!(sink.last(names::THREAT_FEED).unwrap().payload, 3);

        assert_eq!(sink.take().len(), 3);
        assert!(sink.events().is_empty());
    }
}

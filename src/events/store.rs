use super::{Event, EventType};
use serde::Deserialize;
use std::collections::HashMap;

const EVENTS_JSON: &str = include_str!("../../data/events.json");

/// Read access to the event catalogue. Pages and filters only ever go through
/// this trait so fixtures can stand in for the bundled data.
pub trait EventStore {
    fn all_events(&self) -> &[Event];

    fn events_by_type(&self, event_type: EventType) -> Vec<Event> {
        self.all_events()
            .iter()
            .filter(|event| event.event_type == event_type)
            .cloned()
            .collect()
    }

    /// Pre-rendered start time for events whose audience is spread over
    /// several zones, e.g. "9:00 AM PT / 12:00 PM ET".
    fn local_time_hint(&self, event: &Event) -> Option<String>;
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Catalogue {
    events: Vec<Event>,
    #[serde(default)]
    time_hints: HashMap<String, String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StaticEventStore {
    events: Vec<Event>,
    time_hints: HashMap<String, String>,
}

impl StaticEventStore {
    /// Loads the catalogue compiled into the binary.
    pub fn bundled() -> Result<Self, serde_json::Error> {
        Self::from_json(EVENTS_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let catalogue: Catalogue = serde_json::from_str(json)?;
        log::debug!(
            "Loaded {} events ({} with time hints)",
            catalogue.events.len(),
            catalogue.time_hints.len()
        );
        Ok(Self {
            events: catalogue.events,
            time_hints: catalogue.time_hints,
        })
    }

    pub fn from_events(events: Vec<Event>) -> Self {
        Self {
            events,
            time_hints: HashMap::new(),
        }
    }

    pub fn with_time_hint(mut self, event_id: &str, hint: &str) -> Self {
        self.time_hints.insert(event_id.to_string(), hint.to_string());
        self
    }
}

impl EventStore for StaticEventStore {
    fn all_events(&self) -> &[Event] {
        &self.events
    }

    fn local_time_hint(&self, event: &Event) -> Option<String> {
        self.time_hints.get(&event.id).cloned()
    }
}

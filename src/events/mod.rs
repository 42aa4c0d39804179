//! Public events (office hours, workshops, webinars) and their static data.

pub mod card;
pub mod filter;
pub mod store;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    OfficeHours,
    Workshop,
    Webinar,
}

impl EventType {
    pub fn key(self) -> &'static str {
        match self {
            EventType::OfficeHours => "office-hours",
            EventType::Workshop => "workshop",
            EventType::Webinar => "webinar",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EventType::OfficeHours => "Office Hours",
            EventType::Workshop => "Workshops",
            EventType::Webinar => "Webinars",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum LocationKind {
    Virtual,
    InPerson,
    Hybrid,
}

impl LocationKind {
    pub fn key(self) -> &'static str {
        match self {
            LocationKind::Virtual => "virtual",
            LocationKind::InPerson => "in-person",
            LocationKind::Hybrid => "hybrid",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        [LocationKind::Virtual, LocationKind::InPerson, LocationKind::Hybrid]
            .into_iter()
            .find(|kind| kind.key() == key)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    Open,
    Waitlist,
    Closed,
}

impl RegistrationStatus {
    pub fn label(self) -> &'static str {
        match self {
            RegistrationStatus::Open => "Open",
            RegistrationStatus::Waitlist => "Waitlist",
            RegistrationStatus::Closed => "Closed",
        }
    }
}

/// Stored status. Only webinars carry one; for everything else the status is
/// derived from `date.start` and the current time.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Past,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EventDate {
    pub start: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Speaker {
    pub name: String,
    pub title: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Location {
    #[serde(rename = "type")]
    pub kind: LocationKind,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Registration {
    pub status: RegistrationStatus,
    pub registered: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OnDemand {
    pub available: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub date: EventDate,
    #[serde(default)]
    pub persona: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub speakers: Vec<Speaker>,
    pub location: Location,
    pub registration: Registration,
    #[serde(default)]
    pub on_demand: Option<OnDemand>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub status: Option<EventStatus>,
}

impl Event {
    /// Parses `date.start`. Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM[:SS]`
    /// or a bare date (UTC midnight). Naive timestamps are read as UTC, not
    /// in the viewer's zone the way a browser `Date` would read them, so the
    /// same data sorts identically everywhere. Anything else is `None` and the
    /// event drops out of every date comparison.
    pub fn starts_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.date.start)
    }

    pub fn has_recording(&self) -> bool {
        self.on_demand.as_ref().map_or(false, |od| od.available)
    }
}

pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Minimal event for tests; callers override what they care about.
    pub fn event(id: &str, event_type: EventType, start: &str) -> Event {
        Event {
            id: id.to_string(),
            slug: id.to_string(),
            title: format!("Event {}", id),
            description: String::new(),
            event_type,
            date: EventDate {
                start: start.to_string(),
            },
            persona: Vec::new(),
            tags: Vec::new(),
            speakers: Vec::new(),
            location: Location {
                kind: LocationKind::Virtual,
                city: None,
                venue: None,
            },
            registration: Registration {
                status: RegistrationStatus::Open,
                registered: 0,
            },
            on_demand: None,
            featured: false,
            status: None,
        }
    }
}

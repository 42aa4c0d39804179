use super::Event;
use chrono::{DateTime, Datelike, TimeZone};
use std::fmt::Display;

// Fixed table so card dates read the same in every browser locale.
const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

const VIRTUAL_CITY: &str = "Virtual";
const UNKNOWN_DATE: &str = "TBA";

#[derive(Clone, Debug, PartialEq)]
pub struct CardDate {
    pub day: String,
    pub month: String,
    pub year: String,
    pub time: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardLocation {
    pub city: String,
    pub venue: Option<String>,
    pub is_virtual: bool,
}

/// Flat display record for an event tile.
#[derive(Clone, Debug, PartialEq)]
pub struct EventCard {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub date: CardDate,
    pub location: CardLocation,
    pub attendees: u32,
    pub registration: &'static str,
    pub on_demand: bool,
    pub featured: bool,
    pub speakers: Vec<String>,
}

/// Builds the card for `event` in the viewer's zone. A time hint from the
/// store replaces the computed time string. `%Z` only yields an abbreviation
/// such as "EET" for named zones; fixed offsets print as "+02:00".
pub fn format_event_card<Tz>(event: &Event, tz: &Tz, time_hint: Option<String>) -> EventCard
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let date = match event.starts_at() {
        Some(start) => card_date(&start.with_timezone(tz), time_hint),
        None => CardDate {
            day: "--".to_string(),
            month: UNKNOWN_DATE.to_string(),
            year: String::new(),
            time: time_hint.unwrap_or_default(),
        },
    };

    EventCard {
        id: event.id.clone(),
        slug: event.slug.clone(),
        title: event.title.clone(),
        description: event.description.clone(),
        date,
        location: CardLocation {
            city: event
                .location
                .city
                .clone()
                .unwrap_or_else(|| VIRTUAL_CITY.to_string()),
            venue: event.location.venue.clone(),
            is_virtual: event.location.kind == super::LocationKind::Virtual,
        },
        attendees: event.registration.registered,
        registration: event.registration.status.label(),
        on_demand: event.has_recording(),
        featured: event.featured,
        speakers: event
            .speakers
            .iter()
            .map(|s| format!("{}, {}", s.name, s.title))
            .collect(),
    }
}

fn card_date<Tz>(start: &DateTime<Tz>, time_hint: Option<String>) -> CardDate
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    CardDate {
        day: format!("{:02}", start.day()),
        month: MONTHS[start.month0() as usize].to_string(),
        year: start.year().to_string(),
        time: time_hint.unwrap_or_else(|| start.format("%-I:%M %p %Z").to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::fixtures::event;
    use crate::events::{EventType, LocationKind, OnDemand, RegistrationStatus, Speaker};
    use chrono::Utc;
    use chrono_tz::America::New_York;
    use chrono_tz::Europe::Helsinki;
    use pretty_assertions::assert_eq;

    #[test]
    fn formats_date_parts_in_zone() {
        let ev = event("a", EventType::Webinar, "2026-03-05T22:30:00Z");
        let card = format_event_card(&ev, &Helsinki, None);
        assert_eq!(
            card.date,
            CardDate {
                day: "06".to_string(),
                month: "MAR".to_string(),
                year: "2026".to_string(),
                time: "12:30 AM EET".to_string(),
            }
        );

        let card = format_event_card(&ev, &New_York, None);
        assert_eq!(card.date.day, "05");
        assert_eq!(card.date.time, "5:30 PM EST");
    }

    #[test]
    fn time_hint_replaces_computed_time() {
        let ev = event("a", EventType::Webinar, "2026-07-01T16:00:00Z");
        let card = format_event_card(&ev, &Utc, Some("9:00 AM PT / 12:00 PM ET".to_string()));
        assert_eq!(card.date.time, "9:00 AM PT / 12:00 PM ET");
        assert_eq!(card.date.month, "JUL");
        assert_eq!(card.date.day, "01");
    }

    #[test]
    fn virtual_location_defaults_city() {
        let ev = event("a", EventType::OfficeHours, "2026-07-01T16:00:00Z");
        let card = format_event_card(&ev, &Utc, None);
        assert_eq!(
            card.location,
            CardLocation {
                city: "Virtual".to_string(),
                venue: None,
                is_virtual: true,
            }
        );
    }

    #[test]
    fn in_person_card_carries_registration_and_speakers() {
        let mut ev = event("a", EventType::Workshop, "2026-12-31T23:00:00Z");
        ev.location.kind = LocationKind::Hybrid;
        ev.location.city = Some("London".to_string());
        ev.location.venue = Some("Second Home".to_string());
        ev.registration.status = RegistrationStatus::Waitlist;
        ev.registration.registered = 64;
        ev.on_demand = Some(OnDemand { available: true });
        ev.speakers = vec![Speaker {
            name: "Priya Natarajan".to_string(),
            title: "CTO".to_string(),
        }];

        let card = format_event_card(&ev, &Utc, None);
        assert_eq!(card.location.city, "London");
        assert!(!card.location.is_virtual);
        assert_eq!(card.attendees, 64);
        assert_eq!(card.registration, "Waitlist");
        assert!(card.on_demand);
        assert_eq!(card.speakers, vec!["Priya Natarajan, CTO".to_string()]);
        assert_eq!(card.date.year, "2026");
        assert_eq!(card.date.month, "DEC");
    }

    #[test]
    fn unreadable_start_degrades_to_placeholder() {
        let ev = event("a", EventType::Workshop, "soon");
        let card = format_event_card(&ev, &Utc, None);
        assert_eq!(card.date.month, "TBA");
        assert_eq!(card.date.day, "--");
        assert_eq!(card.date.time, "");
    }
}

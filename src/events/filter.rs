use super::{Event, EventStatus, EventType, LocationKind};
use chrono::{DateTime, Datelike, TimeZone, Utc};
use std::cmp::Reverse;

/// Which side of "now" a directory section shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeWindow {
    Upcoming,
    Past,
}

impl TimeWindow {
    pub fn from_show_past(show_past: bool) -> Self {
        if show_past {
            TimeWindow::Past
        } else {
            TimeWindow::Upcoming
        }
    }
}

/// Criteria behind one directory listing. `None` means "all".
#[derive(Clone, Debug, PartialEq)]
pub struct EventFilter {
    pub event_type: EventType,
    pub persona: Option<String>,
    /// Calendar month, 1-12, in the viewer's zone.
    pub month: Option<u32>,
    pub topic: Option<String>,
    pub location: Option<LocationKind>,
    pub search: String,
    pub window: TimeWindow,
}

impl EventFilter {
    pub fn new(event_type: EventType) -> Self {
        Self {
            event_type,
            persona: None,
            month: None,
            topic: None,
            location: None,
            search: String::new(),
            window: TimeWindow::Upcoming,
        }
    }

    pub fn persona_key(mut self, key: &str) -> Self {
        self.persona = select_key(key).map(str::to_string);
        self
    }

    pub fn month_key(mut self, key: &str) -> Self {
        self.month = select_key(key).and_then(|k| match k.parse::<u32>() {
            Ok(month) if (1..=12).contains(&month) => Some(month),
            _ => {
                log::warn!("Ignoring unknown month filter {:?}", k);
                None
            }
        });
        self
    }

    pub fn topic_key(mut self, key: &str) -> Self {
        self.topic = select_key(key).map(str::to_lowercase);
        self
    }

    pub fn location_key(mut self, key: &str) -> Self {
        self.location = select_key(key).and_then(LocationKind::from_key);
        self
    }

    pub fn search(mut self, query: &str) -> Self {
        self.search = query.to_string();
        self
    }

    pub fn show_past(mut self, show_past: bool) -> Self {
        self.window = TimeWindow::from_show_past(show_past);
        self
    }

    pub fn window(mut self, window: TimeWindow) -> Self {
        self.window = window;
        self
    }

    fn search_query(&self) -> Option<String> {
        let query = self.search.trim();
        (!query.is_empty()).then(|| query.to_lowercase())
    }
}

fn select_key(key: &str) -> Option<&str> {
    match key.trim() {
        "" | "all" => None,
        other => Some(other),
    }
}

/// Narrows `events` to the ones matching `filter`, newest start first.
///
/// A non-empty search query decides on its own once the event type and time
/// window match: persona, month, topic and location are not consulted.
/// Topic applies to office hours only and location to workshops only; for
/// other types those criteria are ignored.
/// Events whose start cannot be parsed never match a time window and sort last.
pub fn filter_events<Tz: TimeZone>(
    events: &[Event],
    filter: &EventFilter,
    now: DateTime<Utc>,
    tz: &Tz,
) -> Vec<Event> {
    warn_undated(events, filter.event_type);
    select(events, filter, now, tz)
}

fn select<Tz: TimeZone>(
    events: &[Event],
    filter: &EventFilter,
    now: DateTime<Utc>,
    tz: &Tz,
) -> Vec<Event> {
    let query = filter.search_query();
    let mut matched: Vec<Event> = events
        .iter()
        .filter(|event| matches(event, filter, query.as_deref(), now, tz))
        .cloned()
        .collect();
    matched.sort_by_cached_key(|event| Reverse(event.starts_at()));

    log::debug!(
        "{} filter ({:?}) kept {} of {} events",
        filter.event_type,
        filter.window,
        matched.len(),
        events.len()
    );
    matched
}

/// Both sections of a directory page for one set of criteria.
pub fn upcoming_and_past<Tz: TimeZone>(
    events: &[Event],
    filter: &EventFilter,
    now: DateTime<Utc>,
    tz: &Tz,
) -> (Vec<Event>, Vec<Event>) {
    warn_undated(events, filter.event_type);
    let upcoming = filter.clone().window(TimeWindow::Upcoming);
    let past = filter.clone().window(TimeWindow::Past);
    (
        select(events, &upcoming, now, tz),
        select(events, &past, now, tz),
    )
}

fn undated_count(events: &[Event], event_type: EventType) -> usize {
    events
        .iter()
        .filter(|e| e.event_type == event_type && e.starts_at().is_none())
        .count()
}

fn warn_undated(events: &[Event], event_type: EventType) {
    let undated = undated_count(events, event_type);
    if undated > 0 {
        log::warn!(
            "{} {} event(s) have an unreadable start date and were skipped",
            undated,
            event_type
        );
    }
}

/// Upcoming featured events of any type, soonest first.
pub fn featured_events(events: &[Event], now: DateTime<Utc>, limit: usize) -> Vec<Event> {
    let mut featured: Vec<Event> = events
        .iter()
        .filter(|event| event.featured && in_window(event, TimeWindow::Upcoming, now))
        .cloned()
        .collect();
    featured.sort_by_cached_key(|event| event.starts_at());
    featured.truncate(limit);
    featured
}

fn matches<Tz: TimeZone>(
    event: &Event,
    filter: &EventFilter,
    query: Option<&str>,
    now: DateTime<Utc>,
    tz: &Tz,
) -> bool {
    if event.event_type != filter.event_type {
        return false;
    }
    if !in_window(event, filter.window, now) {
        return false;
    }
    if let Some(query) = query {
        return matches_search(event, query);
    }

    if let Some(persona) = &filter.persona {
        if !event.persona.iter().any(|p| p == persona) {
            return false;
        }
    }
    if let Some(month) = filter.month {
        match event.starts_at() {
            Some(start) if start.with_timezone(tz).month() == month => {}
            _ => return false,
        }
    }
    // Topic only narrows office hours, location only narrows workshops.
    if let (Some(topic), EventType::OfficeHours) = (&filter.topic, filter.event_type) {
        if !event.tags.iter().any(|tag| tag.to_lowercase().contains(topic.as_str())) {
            return false;
        }
    }
    if let (Some(location), EventType::Workshop) = (filter.location, filter.event_type) {
        if event.location.kind != location {
            return false;
        }
    }
    true
}

// Webinars carry an editorial status that wins over the clock.
fn in_window(event: &Event, window: TimeWindow, now: DateTime<Utc>) -> bool {
    if event.event_type == EventType::Webinar {
        if let Some(status) = event.status {
            return match window {
                TimeWindow::Upcoming => status == EventStatus::Upcoming,
                TimeWindow::Past => status == EventStatus::Past,
            };
        }
    }
    match (event.starts_at(), window) {
        (Some(start), TimeWindow::Upcoming) => start > now,
        (Some(start), TimeWindow::Past) => start <= now,
        (None, _) => false,
    }
}

fn matches_search(event: &Event, query: &str) -> bool {
    contains_ci(&event.title, query)
        || contains_ci(&event.description, query)
        || event.tags.iter().any(|tag| contains_ci(tag, query))
        || event
            .speakers
            .iter()
            .any(|speaker| contains_ci(&speaker.name, query) || contains_ci(&speaker.title, query))
}

// `query` is already lowercased.
fn contains_ci(text: &str, query: &str) -> bool {
    text.to_lowercase().contains(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::fixtures::event;
    use crate::events::Speaker;
    use chrono::Duration;
    use chrono_tz::America::Los_Angeles;
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap()
    }

    fn ids(events: &[Event]) -> Vec<&str> {
        events.iter().map(|e| e.id.as_str()).collect()
    }

    fn office_hours() -> Vec<Event> {
        let mut growth = event("growth", EventType::OfficeHours, "2026-07-10T17:00:00Z");
        growth.persona = vec!["founder".into()];
        growth.tags = vec!["Growth Loops".into()];

        let mut api = event("api", EventType::OfficeHours, "2026-09-02T17:00:00Z");
        api.title = "Scaling Your API".into();
        api.persona = vec!["cto".into()];
        api.tags = vec!["engineering".into()];

        let mut ai = event("ai", EventType::OfficeHours, "2026-08-20T17:00:00Z");
        ai.persona = vec!["cto".into(), "founder".into()];
        ai.tags = vec!["ai".into()];
        ai.speakers = vec![Speaker {
            name: "Priya Natarajan".into(),
            title: "CTO".into(),
        }];

        let old = event("old", EventType::OfficeHours, "2026-02-01T17:00:00Z");
        let workshop = event("ws", EventType::Workshop, "2026-07-01T17:00:00Z");

        vec![growth, api, ai, old, workshop]
    }

    #[test]
    fn default_filter_returns_upcoming_of_type_newest_first() {
        let events = office_hours();
        let result = filter_events(&events, &EventFilter::new(EventType::OfficeHours), now(), &Utc);
        assert_eq!(ids(&result), vec!["api", "ai", "growth"]);
    }

    #[test]
    fn result_is_sorted_subsequence_of_input() {
        let events = office_hours();
        for filter in [
            EventFilter::new(EventType::OfficeHours),
            EventFilter::new(EventType::OfficeHours).show_past(true),
            EventFilter::new(EventType::OfficeHours).persona_key("founder"),
            EventFilter::new(EventType::OfficeHours).search("a"),
        ] {
            let result = filter_events(&events, &filter, now(), &Utc);
            assert!(result.iter().all(|e| events.contains(e)));
            assert!(result
                .windows(2)
                .all(|pair| pair[0].starts_at() >= pair[1].starts_at()));
        }
    }

    #[test]
    fn persona_is_list_containment_not_substring() {
        let mut events = office_hours();
        events[0].persona = vec!["founders".into()];
        let filter = EventFilter::new(EventType::OfficeHours).persona_key("founder");
        let result = filter_events(&events, &filter, now(), &Utc);
        assert_eq!(ids(&result), vec!["ai"]);
    }

    #[test]
    fn month_uses_viewer_zone() {
        // 2026-09-01T03:00Z is still August 31st in Los Angeles.
        let events = vec![event("edge", EventType::Workshop, "2026-09-01T03:00:00Z")];
        let september = EventFilter::new(EventType::Workshop).month_key("9");
        let august = EventFilter::new(EventType::Workshop).month_key("8");

        assert_eq!(filter_events(&events, &september, now(), &Utc).len(), 1);
        assert_eq!(filter_events(&events, &september, now(), &Los_Angeles).len(), 0);
        assert_eq!(filter_events(&events, &august, now(), &Los_Angeles).len(), 1);
    }

    #[test]
    fn topic_is_case_insensitive_substring_of_any_tag() {
        let events = office_hours();
        let filter = EventFilter::new(EventType::OfficeHours).topic_key("growth");
        assert_eq!(ids(&filter_events(&events, &filter, now(), &Utc)), vec!["growth"]);

        let loose = EventFilter::new(EventType::OfficeHours).topic_key("eng");
        assert_eq!(ids(&filter_events(&events, &loose, now(), &Utc)), vec!["api"]);
    }

    #[test]
    fn location_is_exact_match() {
        let mut hybrid = event("hybrid", EventType::Workshop, "2026-07-01T10:00:00Z");
        hybrid.location.kind = LocationKind::Hybrid;
        let mut in_person = event("berlin", EventType::Workshop, "2026-07-02T10:00:00Z");
        in_person.location.kind = LocationKind::InPerson;
        let events = vec![hybrid, in_person];

        let filter = EventFilter::new(EventType::Workshop).location_key("hybrid");
        assert_eq!(ids(&filter_events(&events, &filter, now(), &Utc)), vec!["hybrid"]);
    }

    #[test]
    fn search_overrides_persona_and_month() {
        let events = office_hours();
        let filter = EventFilter::new(EventType::OfficeHours)
            .persona_key("product")
            .month_key("1")
            .topic_key("nothing-matches")
            .search("api");
        let result = filter_events(&events, &filter, now(), &Utc);
        assert_eq!(ids(&result), vec!["api"]);
    }

    #[test]
    fn search_covers_description_tags_and_speakers() {
        let events = office_hours();
        let by_speaker = EventFilter::new(EventType::OfficeHours).search("natarajan");
        assert_eq!(ids(&filter_events(&events, &by_speaker, now(), &Utc)), vec!["ai"]);

        let by_tag = EventFilter::new(EventType::OfficeHours).search("LOOPS");
        assert_eq!(ids(&filter_events(&events, &by_tag, now(), &Utc)), vec!["growth"]);

        let by_title = EventFilter::new(EventType::OfficeHours).search("cto");
        assert_eq!(ids(&filter_events(&events, &by_title, now(), &Utc)), vec!["ai"]);

        let miss = EventFilter::new(EventType::OfficeHours).search("kubernetes");
        assert!(filter_events(&events, &miss, now(), &Utc).is_empty());
    }

    #[test]
    fn search_reaches_description_and_speaker_title() {
        let mut events = office_hours();
        events[0].description = "Bring your retention dashboard".into();
        events[1].speakers = vec![Speaker {
            name: "Ola Berg".into(),
            title: "Principal Engineer".into(),
        }];

        let by_description = EventFilter::new(EventType::OfficeHours).search("Retention");
        assert_eq!(ids(&filter_events(&events, &by_description, now(), &Utc)), vec!["growth"]);

        let by_title = EventFilter::new(EventType::OfficeHours).search("principal");
        assert_eq!(ids(&filter_events(&events, &by_title, now(), &Utc)), vec!["api"]);
    }

    #[test]
    fn topic_is_ignored_outside_office_hours() {
        let mut workshop = event("onboarding", EventType::Workshop, "2026-07-01T10:00:00Z");
        workshop.tags = vec!["onboarding".into()];
        let mut webinar = event("teardown", EventType::Webinar, "2026-07-02T10:00:00Z");
        webinar.tags = vec!["teardown".into()];
        let events = vec![workshop, webinar];

        let workshops = EventFilter::new(EventType::Workshop).topic_key("growth");
        assert_eq!(ids(&filter_events(&events, &workshops, now(), &Utc)), vec!["onboarding"]);

        let webinars = EventFilter::new(EventType::Webinar).topic_key("growth");
        assert_eq!(ids(&filter_events(&events, &webinars, now(), &Utc)), vec!["teardown"]);
    }

    #[test]
    fn location_is_ignored_outside_workshops() {
        let mut events = office_hours();
        let mut webinar = event("online", EventType::Webinar, "2026-07-02T10:00:00Z");
        webinar.location.kind = LocationKind::Virtual;
        events.push(webinar);

        let office = EventFilter::new(EventType::OfficeHours).location_key("in-person");
        assert_eq!(
            ids(&filter_events(&events, &office, now(), &Utc)),
            vec!["api", "ai", "growth"]
        );

        let webinars = EventFilter::new(EventType::Webinar).location_key("hybrid");
        assert_eq!(ids(&filter_events(&events, &webinars, now(), &Utc)), vec!["online"]);
    }

    #[test]
    fn undated_count_is_per_type() {
        let mut events = office_hours();
        events.push(event("broken", EventType::OfficeHours, "someday"));
        events.push(event("tbd", EventType::Workshop, "tbd"));
        assert_eq!(undated_count(&events, EventType::OfficeHours), 1);
        assert_eq!(undated_count(&events, EventType::Webinar), 0);
    }

    #[test]
    fn search_still_respects_time_window() {
        let mut events = office_hours();
        events[3].title = "Old API clinic".into();
        let filter = EventFilter::new(EventType::OfficeHours).search("api");
        assert_eq!(ids(&filter_events(&events, &filter, now(), &Utc)), vec!["api"]);

        let past = filter.show_past(true);
        assert_eq!(ids(&filter_events(&events, &past, now(), &Utc)), vec!["old"]);
    }

    #[test]
    fn malformed_dates_are_dropped_not_fatal() {
        let mut events = office_hours();
        events.push(event("broken", EventType::OfficeHours, "someday"));
        let upcoming = filter_events(&events, &EventFilter::new(EventType::OfficeHours), now(), &Utc);
        let past = filter_events(
            &events,
            &EventFilter::new(EventType::OfficeHours).show_past(true),
            now(),
            &Utc,
        );
        assert!(!upcoming.iter().chain(past.iter()).any(|e| e.id == "broken"));
    }

    #[test]
    fn webinar_stored_status_wins_over_clock() {
        let mut stale = event("stale", EventType::Webinar, "2026-01-01T17:00:00Z");
        stale.status = Some(EventStatus::Upcoming);
        let mut undated = event("undated", EventType::Webinar, "tbd");
        undated.status = Some(EventStatus::Upcoming);
        let clocked = event("clocked", EventType::Webinar, "2026-01-02T17:00:00Z");
        let events = vec![stale, undated, clocked];

        let upcoming = filter_events(&events, &EventFilter::new(EventType::Webinar), now(), &Utc);
        assert_eq!(ids(&upcoming), vec!["stale", "undated"]);

        let past = EventFilter::new(EventType::Webinar).show_past(true);
        assert_eq!(ids(&filter_events(&events, &past, now(), &Utc)), vec!["clocked"]);
    }

    #[test]
    fn event_moves_between_windows_with_its_start() {
        let start = now() + Duration::days(1);
        let mut events = vec![event("moving", EventType::Workshop, &start.to_rfc3339())];
        let upcoming = EventFilter::new(EventType::Workshop).show_past(false);
        let past = EventFilter::new(EventType::Workshop).show_past(true);

        assert_eq!(ids(&filter_events(&events, &upcoming, now(), &Utc)), vec!["moving"]);
        assert!(filter_events(&events, &past, now(), &Utc).is_empty());

        events[0].date.start = (now() - Duration::days(1)).to_rfc3339();
        assert!(filter_events(&events, &upcoming, now(), &Utc).is_empty());
        assert_eq!(ids(&filter_events(&events, &past, now(), &Utc)), vec!["moving"]);
    }

    #[test]
    fn start_equal_to_now_is_past() {
        let events = vec![event("edge", EventType::Workshop, &now().to_rfc3339())];
        let past = EventFilter::new(EventType::Workshop).show_past(true);
        assert_eq!(filter_events(&events, &past, now(), &Utc).len(), 1);
        assert!(filter_events(&events, &EventFilter::new(EventType::Workshop), now(), &Utc).is_empty());
    }

    #[test]
    fn all_and_unknown_keys_mean_no_constraint() {
        let filter = EventFilter::new(EventType::Workshop)
            .persona_key("all")
            .month_key("13")
            .location_key("all")
            .topic_key("");
        assert_eq!(filter, EventFilter::new(EventType::Workshop));
    }

    #[test]
    fn upcoming_and_past_splits_one_filter() {
        let events = office_hours();
        let (upcoming, past) =
            upcoming_and_past(&events, &EventFilter::new(EventType::OfficeHours), now(), &Utc);
        assert_eq!(ids(&upcoming), vec!["api", "ai", "growth"]);
        assert_eq!(ids(&past), vec!["old"]);
    }

    #[test]
    fn featured_events_are_upcoming_soonest_first() {
        let mut a = event("a", EventType::Workshop, "2026-09-01T10:00:00Z");
        a.featured = true;
        let mut b = event("b", EventType::OfficeHours, "2026-07-01T10:00:00Z");
        b.featured = true;
        let mut gone = event("gone", EventType::Workshop, "2026-01-01T10:00:00Z");
        gone.featured = true;
        let plain = event("plain", EventType::Workshop, "2026-06-15T10:00:00Z");
        let mut c = event("c", EventType::Webinar, "2026-12-01T10:00:00Z");
        c.featured = true;

        let events = vec![a, b, gone, plain, c];
        assert_eq!(ids(&featured_events(&events, now(), 2)), vec!["b", "a"]);
        assert_eq!(ids(&featured_events(&events, now(), 10)), vec!["b", "a", "c"]);
    }
}

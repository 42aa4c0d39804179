use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use wasm_bindgen_futures::spawn_local;
use chrono::Utc;
use crate::api;
use crate::components::notification::{Notice, Notification};
use crate::events::card::{format_event_card, EventCard};
use crate::events::filter::{upcoming_and_past, EventFilter};
use crate::events::store::{EventStore, StaticEventStore};
use crate::events::EventType;
use crate::forms::SubscriptionForm;
use crate::options::{self, SelectOption};
use crate::timezone;

#[derive(Properties, PartialEq)]
pub struct EventDirectoryProps {
    pub event_type: EventType,
}

#[derive(Properties, PartialEq)]
struct FilterSelectProps {
    label: &'static str,
    options: &'static [SelectOption],
    value: String,
    on_change: Callback<String>,
}

#[function_component(FilterSelect)]
fn filter_select(props: &FilterSelectProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };

    html! {
        <label class="filter-select">
            <span>{ props.label }</span>
            <select {onchange}>
                { for props.options.iter().map(|option| html! {
                    <option value={option.key} selected={option.key == props.value}>
                        { option.label }
                    </option>
                }) }
            </select>
        </label>
    }
}

#[derive(Properties, PartialEq)]
struct EventCardProps {
    card: EventCard,
}

#[function_component(EventCardView)]
fn event_card_view(props: &EventCardProps) -> Html {
    let card = &props.card;
    html! {
        <article class={classes!("event-card", card.featured.then(|| "featured"))}>
            <div class="event-date">
                <span class="event-day">{ &card.date.day }</span>
                <span class="event-month">{ &card.date.month }</span>
                <span class="event-year">{ &card.date.year }</span>
            </div>
            <div class="event-body">
                <h3>{ &card.title }</h3>
                <p class="event-time">{ &card.date.time }</p>
                <p class="event-description">{ &card.description }</p>
                <p class="event-location">
                    { &card.location.city }
                    if let Some(venue) = &card.location.venue {
                        { format!(" · {}", venue) }
                    }
                </p>
                <ul class="event-speakers">
                    { for card.speakers.iter().map(|s| html! { <li>{ s }</li> }) }
                </ul>
                <div class="event-meta">
                    <span class="event-attendees">{ format!("{} registered", card.attendees) }</span>
                    <span class="event-registration">{ card.registration }</span>
                    if card.on_demand {
                        <span class="event-on-demand">{"Recording available"}</span>
                    }
                </div>
            </div>
        </article>
    }
}

fn select_setter(state: &UseStateHandle<String>) -> Callback<String> {
    let state = state.clone();
    Callback::from(move |value: String| state.set(value))
}

#[function_component(EventDirectory)]
pub fn event_directory(props: &EventDirectoryProps) -> Html {
    let store = use_memo(|_| StaticEventStore::bundled(), ());
    let zone = *use_memo(|_| timezone::viewer_zone(), ());
    let persona = use_state(|| "all".to_string());
    let month = use_state(|| "all".to_string());
    let topic = use_state(|| "all".to_string());
    let location = use_state(|| "all".to_string());
    let search = use_state(String::new);
    let show_past = use_state(|| false);
    let email = use_state(String::new);
    let notice = use_state(|| None::<Notice>);

    let event_type = props.event_type;

    let (cards, upcoming_count, past_count): (Vec<EventCard>, usize, usize) = match &*store {
        Ok(store) => {
            let filter = EventFilter::new(event_type)
                .persona_key(&persona)
                .month_key(&month)
                .topic_key(&topic)
                .location_key(&location)
                .search(&search);
            let events = store.events_by_type(event_type);
            let (upcoming, past) = upcoming_and_past(&events, &filter, Utc::now(), &zone);
            let counts = (upcoming.len(), past.len());
            let shown = if *show_past { past } else { upcoming };
            let cards = shown
                .iter()
                .map(|event| format_event_card(event, &zone, store.local_time_hint(event)))
                .collect();
            (cards, counts.0, counts.1)
        }
        Err(err) => {
            log::error!("Bundled events failed to load: {}", err);
            (Vec::new(), 0, 0)
        }
    };

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let toggle_past = {
        let show_past = show_past.clone();
        Callback::from(move |_: MouseEvent| show_past.set(!*show_past))
    };

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_subscribe = {
        let email = email.clone();
        let persona = persona.clone();
        let notice = notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = SubscriptionForm {
                email: (*email).clone(),
                persona: (*persona).clone(),
                event_type: Some(event_type),
            };
            let request = match form.validate() {
                Ok(request) => request,
                Err(err) => {
                    notice.set(Some(Notice::error(err.to_string())));
                    return;
                }
            };
            let email = email.clone();
            let notice = notice.clone();
            spawn_local(async move {
                match api::subscribe_to_events(&request).await {
                    Ok(_) => {
                        email.set(String::new());
                        notice.set(Some(Notice::success("You're on the list. We'll email you about new dates.")));
                    }
                    Err(err) => notice.set(Some(Notice::error(err.user_message()))),
                }
            });
        })
    };

    let close_notice = {
        let notice = notice.clone();
        Callback::from(move |_: ()| notice.set(None))
    };

    html! {
        <div class="events-page">
            <section class="events-hero">
                <h1>{ event_type.label() }</h1>
            </section>

            <section class="events-filters">
                <input
                    type="search"
                    class="events-search"
                    placeholder="Search by title, topic or speaker"
                    value={(*search).clone()}
                    oninput={on_search}
                />
                <FilterSelect label="Audience" options={options::PERSONAS}
                    value={(*persona).clone()} on_change={select_setter(&persona)} />
                <FilterSelect label="Month" options={options::MONTHS}
                    value={(*month).clone()} on_change={select_setter(&month)} />
                if event_type == EventType::OfficeHours {
                    <FilterSelect label="Topic" options={options::TOPICS}
                        value={(*topic).clone()} on_change={select_setter(&topic)} />
                }
                if event_type == EventType::Workshop {
                    <FilterSelect label="Format" options={options::LOCATIONS}
                        value={(*location).clone()} on_change={select_setter(&location)} />
                }
                <button class="events-past-toggle" onclick={toggle_past}>
                    {
                        if *show_past {
                            format!("Show upcoming ({})", upcoming_count)
                        } else {
                            format!("Show past events ({})", past_count)
                        }
                    }
                </button>
            </section>

            <section class="events-list">
                if cards.is_empty() {
                    <p class="events-empty">{"No events match these filters yet."}</p>
                } else {
                    { for cards.into_iter().map(|card| {
                        let key = card.id.clone();
                        html! { <EventCardView key={key} {card} /> }
                    }) }
                }
            </section>

            <section class="events-subscribe">
                <h2>{"Get notified about new dates"}</h2>
                <form onsubmit={on_subscribe}>
                    <input type="email" placeholder="you@company.com" value={(*email).clone()} onchange={on_email} />
                    <button type="submit">{"Subscribe"}</button>
                </form>
            </section>

            <Notification notice={(*notice).clone()} on_close={close_notice} />
        </div>
    }
}

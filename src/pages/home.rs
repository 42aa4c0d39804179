use yew::prelude::*;
use yew_router::prelude::*;
use chrono::Utc;
use crate::Route;
use crate::config;
use crate::components::phase_wheel::PhaseWheel;
use crate::events::card::{format_event_card, EventCard};
use crate::events::filter::featured_events;
use crate::events::store::{EventStore, StaticEventStore};
use crate::events::EventType;
use crate::phases::ImplementationPlan;
use crate::timezone;

fn directory_route(event_type: EventType) -> Route {
    match event_type {
        EventType::OfficeHours => Route::OfficeHours,
        EventType::Workshop => Route::Workshops,
        EventType::Webinar => Route::Webinars,
    }
}

fn featured_card(card: &EventCard, event_type: EventType) -> Html {
    html! {
        <Link<Route> to={directory_route(event_type)} classes="featured-event">
            <span class="featured-event-type">{ event_type.label() }</span>
            <span class="featured-event-date">
                { format!("{} {} · {}", card.date.month, card.date.day, card.date.time) }
            </span>
            <h3>{ &card.title }</h3>
            <p>{ &card.location.city }</p>
        </Link<Route>>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let store = use_memo(|_| StaticEventStore::bundled(), ());
    let plan = use_memo(|_| ImplementationPlan::conversion_default(), ());
    let zone = *use_memo(|_| timezone::viewer_zone(), ());

    let featured = match &*store {
        Ok(store) => featured_events(store.all_events(), Utc::now(), config::FEATURED_EVENT_LIMIT)
            .iter()
            .map(|event| {
                let card = format_event_card(event, &zone, store.local_time_hint(event));
                featured_card(&card, event.event_type)
            })
            .collect::<Html>(),
        Err(err) => {
            log::error!("Bundled events failed to load: {}", err);
            html! {}
        }
    };

    html! {
        <div class="home-page">
            <section class="home-hero">
                <h1>{ config::SITE_NAME }</h1>
                <p>{"We help small teams turn more of their visitors into customers."}</p>
                <div class="home-cta">
                    <Link<Route> to={Route::ConversionAudit} classes="cta-primary">
                        {"Take the free conversion audit"}
                    </Link<Route>>
                    <Link<Route> to={Route::Contact} classes="cta-secondary">
                        {"Talk to us"}
                    </Link<Route>>
                </div>
            </section>

            <section class="home-featured">
                <h2>{"Coming up"}</h2>
                <div class="featured-events">{ featured }</div>
                <div class="featured-links">
                    <Link<Route> to={Route::OfficeHours}>{"Office hours"}</Link<Route>>
                    <Link<Route> to={Route::Workshops}>{"Workshops"}</Link<Route>>
                    <Link<Route> to={Route::Webinars}>{"Webinars"}</Link<Route>>
                </div>
            </section>

            <section class="home-process">
                <h2>{"How an engagement runs"}</h2>
                <PhaseWheel plan={(*plan).clone()} />
            </section>
        </div>
    }
}

use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;

mod config;
mod timezone;
mod options;
mod forms;
mod api;
mod events;
mod audit;
mod phases;
mod components {
    pub mod notification;
    pub mod phase_wheel;
}
mod pages {
    pub mod home;
    pub mod events;
    pub mod audit;
    pub mod contact;
    pub mod unsubscribe;
}

use pages::{
    home::Home,
    events::EventDirectory,
    audit::ConversionAudit,
    contact::Contact,
    unsubscribe::Unsubscribe,
};
use events::EventType;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/office-hours")]
    OfficeHours,
    #[at("/workshops")]
    Workshops,
    #[at("/webinars")]
    Webinars,
    #[at("/conversion-audit")]
    ConversionAudit,
    #[at("/contact")]
    Contact,
    #[at("/unsubscribe")]
    Unsubscribe,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::OfficeHours => {
            info!("Rendering Office Hours page");
            html! { <EventDirectory key={EventType::OfficeHours.key()} event_type={EventType::OfficeHours} /> }
        },
        Route::Workshops => {
            info!("Rendering Workshops page");
            html! { <EventDirectory key={EventType::Workshop.key()} event_type={EventType::Workshop} /> }
        },
        Route::Webinars => {
            info!("Rendering Webinars page");
            html! { <EventDirectory key={EventType::Webinar.key()} event_type={EventType::Webinar} /> }
        },
        Route::ConversionAudit => {
            info!("Rendering Conversion Audit page");
            html! { <ConversionAudit /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::Unsubscribe => {
            info!("Rendering Unsubscribe page");
            html! { <Unsubscribe /> }
        },
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home}>{"Back to the home page"}</Link<Route>>
                </div>
            }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > 80.0;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    let links = [
        (Route::OfficeHours, "Office Hours"),
        (Route::Workshops, "Workshops"),
        (Route::Webinars, "Webinars"),
        (Route::ConversionAudit, "Conversion Audit"),
    ];

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    { config::SITE_NAME }
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for links.into_iter().map(|(route, label)| html! {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={route} classes="nav-link">{ label }</Link<Route>>
                        </div>
                    }) }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes="nav-contact-button">
                            {"Contact"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

use yew::prelude::*;
use yew_hooks::prelude::*;
use web_sys::{window, HtmlInputElement};
use wasm_bindgen_futures::spawn_local;
use crate::api;
use crate::forms::UnsubscribeRequest;

#[derive(Clone, Debug, PartialEq)]
enum Status {
    Idle,
    Sending,
    Done,
    Failed(String),
}

fn query_string() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

#[function_component(Unsubscribe)]
pub fn unsubscribe() -> Html {
    let email = use_state(String::new);
    let token = use_state(|| None::<String>);
    let status = use_state(|| Status::Idle);

    {
        let email = email.clone();
        let token = token.clone();
        use_mount(move || {
            match UnsubscribeRequest::from_query(&query_string()) {
                Ok(request) => {
                    email.set(request.email);
                    token.set(request.token);
                }
                Err(err) => log::debug!("No usable email in unsubscribe link: {}", err),
            }
        });
    }

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let token = token.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = match UnsubscribeRequest::from_email(&email) {
                Ok(request) => UnsubscribeRequest {
                    token: (*token).clone(),
                    ..request
                },
                Err(err) => {
                    status.set(Status::Failed(err.to_string()));
                    return;
                }
            };
            status.set(Status::Sending);
            let status = status.clone();
            spawn_local(async move {
                match api::unsubscribe(&request).await {
                    Ok(_) => status.set(Status::Done),
                    Err(err) => status.set(Status::Failed(err.user_message())),
                }
            });
        })
    };

    html! {
        <div class="unsubscribe-page">
            <h1>{"Unsubscribe"}</h1>
            {
                match &*status {
                    Status::Done => html! {
                        <p class="unsubscribe-done">
                            { format!("{} won't receive any more emails from us.", *email) }
                        </p>
                    },
                    other => html! {
                        <form class="unsubscribe-form" {onsubmit}>
                            <p>{"Enter the address you'd like to remove from our mailing lists."}</p>
                            <input type="email" value={(*email).clone()} onchange={on_email} />
                            <button type="submit" disabled={*other == Status::Sending}>
                                { if *other == Status::Sending { "Unsubscribing..." } else { "Unsubscribe" } }
                            </button>
                            if let Status::Failed(message) = other {
                                <p class="error-message">{ message }</p>
                            }
                        </form>
                    },
                }
            }
        </div>
    }
}

use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use wasm_bindgen_futures::spawn_local;
use crate::api;
use crate::components::notification::{Notice, Notification};
use crate::forms::ContactForm;
use crate::options;

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactForm::default);
    let notice = use_state(|| None::<Notice>);
    let is_sending = use_state(|| false);

    let update = |apply: fn(&mut ContactForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };
    let on_name = update(|f, v| f.name = v);
    let on_email = update(|f, v| f.email = v);
    let on_company = update(|f, v| f.company = v);
    let on_service = update(|f, v| f.service = v);
    let on_message = update(|f, v| f.message = v);

    let onsubmit = {
        let form = form.clone();
        let notice = notice.clone();
        let is_sending = is_sending.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_sending {
                return;
            }
            let request = match form.validate() {
                Ok(request) => request,
                Err(err) => {
                    notice.set(Some(Notice::error(err.to_string())));
                    return;
                }
            };
            is_sending.set(true);
            let form = form.clone();
            let notice = notice.clone();
            let is_sending = is_sending.clone();
            spawn_local(async move {
                match api::submit_contact(&request).await {
                    Ok(_) => {
                        form.set(ContactForm::default());
                        notice.set(Some(Notice::success("Thanks! We'll get back to you within one business day.")));
                    }
                    Err(err) => notice.set(Some(Notice::error(err.user_message()))),
                }
                is_sending.set(false);
            });
        })
    };

    let close_notice = {
        let notice = notice.clone();
        Callback::from(move |_: ()| notice.set(None))
    };

    html! {
        <div class="contact-page">
            <section class="contact-hero">
                <h1>{"Let's talk"}</h1>
                <p>{"Tell us where you're stuck. A real person reads every message."}</p>
            </section>
            <form class="contact-form" {onsubmit}>
                <input type="text" placeholder="Your name" value={form.name.clone()}
                    onchange={on_name.reform(|e: Event| e.target_unchecked_into::<HtmlInputElement>().value())} />
                <input type="email" placeholder="you@company.com" value={form.email.clone()}
                    onchange={on_email.reform(|e: Event| e.target_unchecked_into::<HtmlInputElement>().value())} />
                <input type="text" placeholder="Company (optional)" value={form.company.clone()}
                    onchange={on_company.reform(|e: Event| e.target_unchecked_into::<HtmlInputElement>().value())} />
                <select onchange={on_service.reform(|e: Event| e.target_unchecked_into::<HtmlSelectElement>().value())}>
                    <option value="" selected={form.service.is_empty()}>{"What can we help with?"}</option>
                    { for options::SERVICES.iter().map(|option| html! {
                        <option value={option.key} selected={option.key == form.service}>{ option.label }</option>
                    }) }
                </select>
                <textarea placeholder="Your message" value={form.message.clone()}
                    onchange={on_message.reform(|e: Event| e.target_unchecked_into::<HtmlTextAreaElement>().value())} />
                <button type="submit" disabled={*is_sending}>
                    { if *is_sending { "Sending..." } else { "Send message" } }
                </button>
            </form>
            <Notification notice={(*notice).clone()} on_close={close_notice} />
        </div>
    }
}

use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use crate::audit::profile::BusinessProfile;
use crate::audit::session::{AuditReport, AuditSession, AuditStage, LogAnalytics};
use crate::audit::AuditItem;
use crate::components::notification::{Notice, Notification};
use crate::options::{self, SelectOption};

fn profile_input(
    session: &UseStateHandle<AuditSession>,
    apply: fn(&mut BusinessProfile, String),
) -> Callback<Event> {
    let session = session.clone();
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*session).clone();
        apply(&mut next.profile, input.value());
        session.set(next);
    })
}

fn profile_select(
    session: &UseStateHandle<AuditSession>,
    apply: fn(&mut BusinessProfile, String),
) -> Callback<Event> {
    let session = session.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        let mut next = (*session).clone();
        apply(&mut next.profile, select.value());
        session.set(next);
    })
}

fn select_options(table: &'static [SelectOption], current: &str, placeholder: &str) -> Html {
    html! {
        <>
            <option value="" selected={current.is_empty()} disabled={true}>{ placeholder.to_string() }</option>
            { for table.iter().map(|option| html! {
                <option value={option.key} selected={option.key == current}>{ option.label }</option>
            }) }
        </>
    }
}

fn render_item_list(title: &str, items: &[AuditItem]) -> Html {
    if items.is_empty() {
        return html! {};
    }
    html! {
        <div class="audit-priority-list">
            <h3>{ title.to_string() }</h3>
            <ul>
                { for items.iter().map(|item| html! {
                    <li>
                        <span class="audit-item-text">{ &item.item }</span>
                        <span class="audit-item-impact">{ &item.impact }</span>
                    </li>
                }) }
            </ul>
        </div>
    }
}

fn render_report(report: &AuditReport, on_back: Callback<MouseEvent>) -> Html {
    html! {
        <section class="audit-results">
            <h2>{ format!("Results for {}", report.profile.business_name) }</h2>
            <div class="audit-score">
                <span class="audit-score-value">{ format!("{}%", report.overall) }</span>
                <span class="audit-score-band">{ report.band.label() }</span>
            </div>
            <div class="audit-categories">
                { for report.categories.iter().map(|category| html! {
                    <div class="audit-category-score">
                        <span>{ &category.category }</span>
                        <span>{
                            category.score.map(|s| format!("{}%", s)).unwrap_or_else(|| "N/A".to_string())
                        }</span>
                    </div>
                }) }
            </div>
            { render_item_list("Quick wins", &report.quick_wins) }
            { render_item_list("Growth opportunities", &report.growth_opportunities) }
            <button class="audit-back" onclick={on_back}>{"Back to checklist"}</button>
        </section>
    }
}

#[function_component(ConversionAudit)]
pub fn conversion_audit() -> Html {
    let session = use_state(AuditSession::default);
    let notice = use_state(|| None::<Notice>);

    let on_generate = {
        let session = session.clone();
        let notice = notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*session).clone();
            match next.generate_results(&LogAnalytics) {
                Ok(_) => {
                    notice.set(None);
                    session.set(next);
                }
                Err(err) => notice.set(Some(Notice::error(err.to_string()))),
            }
        })
    };

    let on_back = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*session).clone();
            next.back_to_checklist();
            session.set(next);
        })
    };

    let close_notice = {
        let notice = notice.clone();
        Callback::from(move |_: ()| notice.set(None))
    };

    let body = match session.stage() {
        AuditStage::Results(report) => render_report(report, on_back),
        AuditStage::Checklist => {
            let checklist = session.checklist();
            let profile = &session.profile;
            html! {
                <form class="audit-form" onsubmit={on_generate}>
                    <section class="audit-profile">
                        <input type="text" placeholder="Business name" value={profile.business_name.clone()}
                            onchange={profile_input(&session, |p, v| p.business_name = v)} />
                        <input type="url" placeholder="https://yourcompany.com" value={profile.website_url.clone()}
                            onchange={profile_input(&session, |p, v| p.website_url = v)} />
                        <select onchange={profile_select(&session, |p, v| p.industry = v)}>
                            { select_options(options::INDUSTRIES, &profile.industry, "Industry") }
                        </select>
                        <select onchange={profile_select(&session, |p, v| p.company_size = v)}>
                            { select_options(options::COMPANY_SIZES, &profile.company_size, "Company size") }
                        </select>
                        <select onchange={profile_select(&session, |p, v| p.role = v)}>
                            { select_options(options::ROLES, &profile.role, "Your role") }
                        </select>
                    </section>

                    { for checklist.categories().into_iter().map(|category| html! {
                        <fieldset class="audit-category">
                            <legend>{ category.to_string() }</legend>
                            { for checklist.items_in(category).map(|item| {
                                let onchange = {
                                    let session = session.clone();
                                    let id = item.id.clone();
                                    Callback::from(move |_: Event| {
                                        let mut next = (*session).clone();
                                        if let Err(err) = next.toggle(&id) {
                                            log::warn!("Checklist toggle ignored: {}", err);
                                            return;
                                        }
                                        session.set(next);
                                    })
                                };
                                html! {
                                    <label class={classes!("audit-item", item.priority.label())}>
                                        <input type="checkbox" checked={item.checked} {onchange} />
                                        <span class="audit-item-text">{ &item.item }</span>
                                        <span class="audit-item-impact">{ &item.impact }</span>
                                    </label>
                                }
                            }) }
                        </fieldset>
                    }) }

                    <div class="audit-progress">
                        { format!("{} of {} checked", checklist.checked_count(), checklist.items().len()) }
                    </div>
                    <button type="submit" class="audit-submit">{"See my results"}</button>
                </form>
            }
        }
    };

    html! {
        <div class="audit-page">
            <section class="audit-hero">
                <h1>{"Conversion Audit"}</h1>
                <p>{"Tick what your site already does. We'll score it and point out the quickest wins."}</p>
            </section>
            { body }
            <Notification notice={(*notice).clone()} on_close={close_notice} />
        </div>
    }
}

use yew::prelude::*;
use gloo_timers::callback::Timeout;

const DISMISS_AFTER_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    fn class(self) -> &'static str {
        match self {
            NotificationKind::Success => "notification success",
            NotificationKind::Error => "notification error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Error, message: message.into() }
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub notice: Option<Notice>,
    pub on_close: Callback<()>,
}

/// Toast shown after a form submission; closes itself after a few seconds.
#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(move |notice: &Option<Notice>| {
            let timeout = notice.as_ref().map(|_| {
                Timeout::new(DISMISS_AFTER_MS, move || on_close.emit(()))
            });
            move || drop(timeout)
        }, props.notice.clone());
    }

    let Some(notice) = props.notice.as_ref() else {
        return html! {};
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class={notice.kind.class()} role="status">
            <span class="notification-message">{ &notice.message }</span>
            <button class="notification-close" onclick={close}>{ "✕" }</button>
        </div>
    }
}

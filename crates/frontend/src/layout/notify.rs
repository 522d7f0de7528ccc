use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;

const TOAST_LIFETIME_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub level: NotifyLevel,
    pub title: String,
    pub message: String,
}

/// Centralized user-facing event channel.
///
/// Page logic emits success/warning/error events here; [`ToastHost`] is the
/// single subscriber that renders them, so business code stays free of UI
/// toolkit notification calls.
#[derive(Clone, Copy)]
pub struct NotifyService {
    items: RwSignal<Vec<Notification>>,
    next_id: StoredValue<u64>,
}

impl NotifyService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, title: &str, message: &str) {
        self.push(NotifyLevel::Success, title, message);
    }

    pub fn warning(&self, title: &str, message: &str) {
        self.push(NotifyLevel::Warning, title, message);
    }

    pub fn error(&self, title: &str, message: &str) {
        self.push(NotifyLevel::Error, title, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }

    pub fn items(&self) -> RwSignal<Vec<Notification>> {
        self.items
    }

    fn push(&self, level: NotifyLevel, title: &str, message: &str) {
        let id = self.next_id.with_value(|id| *id);
        self.next_id.set_value(id + 1);

        self.items.update(|items| {
            items.push(Notification {
                id,
                level,
                title: title.to_string(),
                message: message.to_string(),
            })
        });

        let items = self.items;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            items.update(|list| list.retain(|n| n.id != id));
        });
    }
}

impl Default for NotifyService {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to reach the notification channel from any component.
pub fn use_notify() -> NotifyService {
    use_context::<NotifyService>().expect("NotifyService not provided in context")
}

/// Renders the notification queue as a stack of toasts in the top-right
/// corner. Clicking a toast dismisses it early.
#[component]
pub fn ToastHost() -> impl IntoView {
    let notify = use_notify();
    let items = notify.items();

    view! {
        <div class="toast-host">
            <For
                each=move || items.get()
                key=|n| n.id
                children=move |n| {
                    let class = match n.level {
                        NotifyLevel::Success => "toast toast--success",
                        NotifyLevel::Warning => "toast toast--warning",
                        NotifyLevel::Error => "toast toast--error",
                    };
                    let id = n.id;
                    view! {
                        <div class=class on:click=move |_| notify.dismiss(id)>
                            <div class="toast__title">{n.title.clone()}</div>
                            <div class="toast__message">{n.message.clone()}</div>
                            <span class="toast__close">{icon("x")}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}

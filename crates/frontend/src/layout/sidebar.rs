use leptos::prelude::*;

use super::shell::AdminSection;
use crate::shared::icons::icon;
use crate::system::auth::context::{self, use_auth};

#[component]
pub fn Sidebar(current: RwSignal<AdminSection>) -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let user_label = move || {
        auth_state
            .get()
            .user_info
            .map(|u| format!("{} {}", u.first_name, u.last_name))
            .unwrap_or_else(|| "Administrator".to_string())
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                {icon("shop")}
                <span>"Belly Basket Admin"</span>
            </div>

            <nav class="sidebar__nav">
                {AdminSection::ALL
                    .iter()
                    .map(|&section| {
                        view! {
                            <button
                                class=move || {
                                    if current.get() == section {
                                        "sidebar__item sidebar__item--active"
                                    } else {
                                        "sidebar__item"
                                    }
                                }
                                on:click=move |_| current.set(section)
                            >
                                {icon(section.icon_name())}
                                <span>{section.title()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="sidebar__footer">
                <span class="sidebar__user">{user_label}</span>
                <button
                    class="sidebar__item"
                    on:click=move |_| context::logout(set_auth_state)
                >
                    {icon("logout")}
                    <span>"Sign out"</span>
                </button>
            </div>
        </aside>
    }
}

use crate::layout::notify::ToastHost;
use crate::layout::shell::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().session.is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            <Shell />
        </Show>
        <ToastHost />
    }
}

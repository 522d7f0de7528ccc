use leptos::prelude::*;

use super::context::use_auth;

/// Component that requires an authenticated session.
/// Shows a fallback message instead of its children otherwise.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().session.is_authenticated()
            fallback=|| view! { <div class="auth-fallback">"Not authenticated. Please sign in."</div> }
        >
            {children()}
        </Show>
    }
}

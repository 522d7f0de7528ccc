use crate::layout::notify::NotifyService;
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Single outward channel for user-facing events (success/warning/error).
    // Page logic reports here; the ToastHost in the routes tree renders it.
    provide_context(NotifyService::new());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}

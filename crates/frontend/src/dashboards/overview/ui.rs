use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::overview::api;
use crate::domain::{couriers, shops};
use crate::layout::notify::use_notify;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequireAuth;

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    view! {
        <RequireAuth>
            <Overview />
        </RequireAuth>
    }
}

#[component]
fn Overview() -> impl IntoView {
    let customer_count = RwSignal::new(None::<usize>);
    let courier_count = RwSignal::new(None::<usize>);
    let shop_count = RwSignal::new(None::<usize>);
    let (loading, set_loading) = signal(false);
    let (is_loaded, set_is_loaded) = signal(false);
    let notify = use_notify();
    let (auth_state, _) = use_auth();

    let load_data = move || {
        set_loading.set(true);
        spawn_local(async move {
            let session = auth_state.get_untracked().session;

            // Courier and shop counts come from the list endpoints: one row
            // is enough, only the reported total matters here.
            let (customers, couriers, shops) = futures::join!(
                api::fetch_customer_count(&session),
                couriers::api::fetch_couriers(&session, 0, 1, ""),
                shops::api::fetch_shops(&session, 0, 1, ""),
            );

            let counts = api::collect_counts(customers, &couriers, &shops);
            customer_count.set(counts.customers);
            courier_count.set(counts.couriers);
            shop_count.set(counts.shops);
            for message in &counts.errors {
                notify.error("Overview", message);
            }

            set_is_loaded.set(true);
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !is_loaded.get_untracked() {
            load_data();
        }
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Overview"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Customers".to_string()
                        icon_name="customers".to_string()
                        value=Signal::derive(move || customer_count.get())
                    />
                    <StatCard
                        label="Delivery personnel".to_string()
                        icon_name="courier".to_string()
                        value=Signal::derive(move || courier_count.get())
                    />
                    <StatCard
                        label="Shops".to_string()
                        icon_name="shop".to_string()
                        value=Signal::derive(move || shop_count.get())
                    />
                </div>
            </div>
        </div>
    }
}
